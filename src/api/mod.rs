pub mod config;
pub mod defaults;

use axum::{
    Router,
    extract::Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Local};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub use config::{
    Cli, Command, InputError, PlanArgs, PlanPayload, PlanRequest, SettingsArgs,
    plan_request_from_args, plan_request_from_payload,
};

use crate::core::{
    Alert, AlertSettings, CapExPoint, FinancialSettings, FleetStats, Projection, ProjectionSet,
    SimulationParams, SimulationResults, TaxAnalysis, Vehicle, calculate_age_distribution,
    calculate_alerts, calculate_capex_series, calculate_fleet_stats, calculate_projections,
    calculate_simulation, calculate_tax_benefits, tax_savings_schedule, upcoming_replacements,
};
use crate::planner::{Dashboard, UPCOMING_LIMIT};
use defaults::{
    default_alert_settings, default_financial_settings, default_simulation_params,
    reference_fleet,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DefaultsResponse {
    vehicles: Vec<Vehicle>,
    financial_settings: FinancialSettings,
    alert_settings: AlertSettings,
    simulation_params: SimulationParams,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionsResponse {
    #[serde(flatten)]
    projection_set: ProjectionSet,
    #[serde(rename = "capExSeries")]
    capex_series: Vec<CapExPoint>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaxResponse {
    tax_analysis: TaxAnalysis,
    schedule: Vec<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FleetResponse {
    current_year: i32,
    alerts: Vec<Alert>,
    fleet_stats: FleetStats,
    age_distribution: [usize; 4],
    upcoming_replacements: Vec<Projection>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "fleet fund API listening");
    info!("local access: http://127.0.0.1:{port}/api/health");

    axum::serve(listener, router()).await
}

pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/defaults", get(defaults_handler))
        .route("/api/plan", post(plan_handler))
        .route("/api/projections", post(projections_handler))
        .route("/api/tax", post(tax_handler))
        .route("/api/simulate", post(simulate_handler))
        .route("/api/fleet", post(fleet_handler))
        .fallback(not_found_handler)
}

pub fn build_plan(request: PlanRequest) -> Dashboard {
    let current_year = request.current_year.unwrap_or_else(this_year);
    request.into_planner().dashboard_for_year(current_year)
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn defaults_handler() -> Response {
    json_response(
        StatusCode::OK,
        DefaultsResponse {
            vehicles: reference_fleet(),
            financial_settings: default_financial_settings(),
            alert_settings: default_alert_settings(),
            simulation_params: default_simulation_params(),
        },
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn plan_handler(Json(payload): Json<PlanPayload>) -> Response {
    let request = match accept("plan", payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    json_response(StatusCode::OK, build_plan(request))
}

async fn projections_handler(Json(payload): Json<PlanPayload>) -> Response {
    let request = match accept("projections", payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let response = ProjectionsResponse {
        projection_set: calculate_projections(&request.vehicles, &request.settings),
        capex_series: calculate_capex_series(&request.vehicles, &request.settings),
    };
    json_response(StatusCode::OK, response)
}

async fn tax_handler(Json(payload): Json<PlanPayload>) -> Response {
    let request = match accept("tax", payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let tax_rate = request.settings.tax_rate;
    let response = TaxResponse {
        tax_analysis: calculate_tax_benefits(&request.vehicles, tax_rate, request.tax_method),
        schedule: tax_savings_schedule(&request.vehicles, tax_rate, request.tax_method),
    };
    json_response(StatusCode::OK, response)
}

async fn simulate_handler(Json(payload): Json<PlanPayload>) -> Response {
    let request = match accept("simulate", payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let results: SimulationResults = calculate_simulation(
        &request.vehicles,
        &request.settings,
        &request.simulation_params,
    );
    json_response(StatusCode::OK, results)
}

async fn fleet_handler(Json(payload): Json<PlanPayload>) -> Response {
    let request = match accept("fleet", payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    json_response(StatusCode::OK, build_fleet_response(&request))
}

fn build_fleet_response(request: &PlanRequest) -> FleetResponse {
    let current_year = request.current_year.unwrap_or_else(this_year);
    let projection_set = calculate_projections(&request.vehicles, &request.settings);
    let alerts = calculate_alerts(&request.vehicles, &request.alert_settings, current_year);
    let fleet_stats = calculate_fleet_stats(
        &request.vehicles,
        &alerts,
        &projection_set.fund_points,
        &request.settings,
        current_year,
    );
    FleetResponse {
        current_year,
        age_distribution: calculate_age_distribution(&request.vehicles, current_year),
        upcoming_replacements: upcoming_replacements(&projection_set.projections, UPCOMING_LIMIT),
        alerts,
        fleet_stats,
    }
}

fn accept(route: &'static str, payload: PlanPayload) -> Result<PlanRequest, Response> {
    match plan_request_from_payload(payload, SettingsArgs::default()) {
        Ok(request) => {
            info!(route, vehicles = request.vehicles.len(), "request accepted");
            Ok(request)
        }
        Err(err) => {
            warn!(route, error = %err, "request rejected");
            Err(input_error_response(&err))
        }
    }
}

fn this_year() -> i32 {
    Local::now().year()
}

fn input_error_response(err: &InputError) -> Response {
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
