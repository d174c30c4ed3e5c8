use std::collections::HashSet;
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use super::defaults::{self, default_alert_settings, default_simulation_params, reference_fleet};
use crate::core::{AlertSettings, DepreciationMethod, FinancialSettings, SimulationParams, Vehicle};
use crate::planner::FleetPlanner;

const YEAR_RANGE: RangeInclusive<i32> = 1900..=9999;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliDepreciationMethod {
    Immediate,
    #[value(alias = "macrs")]
    Depreciation,
    Bonus,
}

impl From<CliDepreciationMethod> for DepreciationMethod {
    fn from(value: CliDepreciationMethod) -> Self {
        match value {
            CliDepreciationMethod::Immediate => DepreciationMethod::Immediate,
            CliDepreciationMethod::Depreciation => DepreciationMethod::Depreciation,
            CliDepreciationMethod::Bonus => DepreciationMethod::Bonus,
        }
    }
}

impl From<DepreciationMethod> for CliDepreciationMethod {
    fn from(value: DepreciationMethod) -> Self {
        match value {
            DepreciationMethod::Immediate => CliDepreciationMethod::Immediate,
            DepreciationMethod::Depreciation => CliDepreciationMethod::Depreciation,
            DepreciationMethod::Bonus => CliDepreciationMethod::Bonus,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "fleetfund",
    about = "Fleet replacement fund planner (reserve projections, financing, tax and what-if runs)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Serve the planning API over HTTP")]
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    #[command(about = "Print the full plan as JSON")]
    Plan(PlanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[arg(
        long,
        help = "JSON plan request, shaped like the POST /api/plan body; defaults to the reference fleet"
    )]
    pub input: Option<PathBuf>,
    #[arg(long, help = "Year used for vehicle ages and alerts; defaults to this year")]
    pub current_year: Option<i32>,
    #[arg(long)]
    pub pretty: bool,
    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SettingsArgs {
    #[arg(
        long,
        default_value_t = defaults::INITIAL_FUND,
        help = "Fund balance at the start of the horizon"
    )]
    pub initial_fund: f64,
    #[arg(long, default_value_t = defaults::MONTHLY_CONTRIBUTION)]
    pub monthly_contribution: f64,
    #[arg(
        long,
        default_value_t = defaults::INTEREST_RATE,
        help = "Annual interest earned by the fund, percent"
    )]
    pub interest_rate: f64,
    #[arg(long, default_value_t = defaults::LOAN_INTEREST_RATE)]
    pub loan_interest_rate: f64,
    #[arg(long, default_value_t = defaults::LEASE_INTEREST_RATE)]
    pub lease_interest_rate: f64,
    #[arg(long, default_value_t = defaults::LOAN_TERM_YEARS)]
    pub loan_term_years: u32,
    #[arg(long, default_value_t = defaults::TAX_RATE, help = "Marginal tax rate, percent")]
    pub tax_rate: f64,
    #[arg(long, value_enum, default_value_t = CliDepreciationMethod::Depreciation)]
    pub depreciation_method: CliDepreciationMethod,
    #[arg(
        long,
        value_enum,
        help = "Tax treatment for the tax analysis; defaults to --depreciation-method"
    )]
    pub tax_method: Option<CliDepreciationMethod>,
}

impl Default for SettingsArgs {
    fn default() -> Self {
        Self {
            initial_fund: defaults::INITIAL_FUND,
            monthly_contribution: defaults::MONTHLY_CONTRIBUTION,
            interest_rate: defaults::INTEREST_RATE,
            loan_interest_rate: defaults::LOAN_INTEREST_RATE,
            lease_interest_rate: defaults::LEASE_INTEREST_RATE,
            loan_term_years: defaults::LOAN_TERM_YEARS,
            tax_rate: defaults::TAX_RATE,
            depreciation_method: CliDepreciationMethod::Depreciation,
            tax_method: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be {requirement}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
    },
    #[error("vehicle {id}: {field} must be {requirement}")]
    InvalidVehicle {
        id: u32,
        field: &'static str,
        requirement: &'static str,
    },
    #[error("duplicate vehicle id {0}")]
    DuplicateVehicleId(u32),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanPayload {
    vehicles: Option<Vec<Vehicle>>,
    current_year: Option<i32>,

    initial_fund: Option<f64>,
    monthly_contribution: Option<f64>,
    interest_rate: Option<f64>,
    loan_interest_rate: Option<f64>,
    lease_interest_rate: Option<f64>,
    loan_term_years: Option<u32>,
    tax_rate: Option<f64>,
    depreciation_method: Option<DepreciationMethod>,
    tax_method: Option<DepreciationMethod>,

    simulation: SimulationPayload,
    alerts: AlertPayload,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulationPayload {
    monthly_contribution: Option<f64>,
    interest_rate: Option<f64>,
    inflation_rate: Option<f64>,
    loan_rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AlertPayload {
    truck_max_age: Option<i32>,
    trailer_max_age: Option<i32>,
    truck_max_mileage: Option<u32>,
    truck_maintenance_max: Option<f64>,
    trailer_maintenance_max: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub vehicles: Vec<Vehicle>,
    pub settings: FinancialSettings,
    pub tax_method: DepreciationMethod,
    pub alert_settings: AlertSettings,
    pub simulation_params: SimulationParams,
    pub current_year: Option<i32>,
}

impl PlanRequest {
    pub fn into_planner(self) -> FleetPlanner {
        let mut planner = FleetPlanner::new(
            self.vehicles,
            self.settings,
            self.alert_settings,
            self.simulation_params,
        );
        planner.set_tax_method(self.tax_method);
        planner
    }
}

pub fn build_settings(args: &SettingsArgs) -> Result<FinancialSettings, InputError> {
    require_non_negative("initialFund", args.initial_fund)?;
    require_non_negative("monthlyContribution", args.monthly_contribution)?;
    require_rate("interestRate", args.interest_rate)?;
    require_rate("loanInterestRate", args.loan_interest_rate)?;
    require_rate("leaseInterestRate", args.lease_interest_rate)?;

    if args.loan_term_years == 0 {
        return Err(InputError::OutOfRange {
            field: "loanTermYears",
            requirement: "> 0",
        });
    }

    if !args.tax_rate.is_finite() || !(0.0..=100.0).contains(&args.tax_rate) {
        return Err(InputError::OutOfRange {
            field: "taxRate",
            requirement: "between 0 and 100",
        });
    }

    Ok(FinancialSettings {
        initial_fund: args.initial_fund,
        monthly_contribution: args.monthly_contribution,
        interest_rate: args.interest_rate,
        loan_interest_rate: args.loan_interest_rate,
        lease_interest_rate: args.lease_interest_rate,
        loan_term_years: args.loan_term_years,
        tax_rate: args.tax_rate,
        depreciation_method: args.depreciation_method.into(),
    })
}

pub fn validate_vehicles(vehicles: &[Vehicle]) -> Result<(), InputError> {
    let mut seen = HashSet::with_capacity(vehicles.len());
    for vehicle in vehicles {
        if !seen.insert(vehicle.id) {
            return Err(InputError::DuplicateVehicleId(vehicle.id));
        }
        let invalid = |field, requirement| InputError::InvalidVehicle {
            id: vehicle.id,
            field,
            requirement,
        };
        if !vehicle.replacement_cost.is_finite() || vehicle.replacement_cost < 0.0 {
            return Err(invalid("replacementCost", ">= 0"));
        }
        if !vehicle.salvage_value.is_finite() || vehicle.salvage_value < 0.0 {
            return Err(invalid("salvageValue", ">= 0"));
        }
        if !is_rate(vehicle.inflation_rate) {
            return Err(invalid("inflationRate", "in (-100, 100]"));
        }
        if !YEAR_RANGE.contains(&vehicle.purchase_year) {
            return Err(invalid("purchaseYear", "between 1900 and 9999"));
        }
        if !YEAR_RANGE.contains(&vehicle.replacement_year) {
            return Err(invalid("replacementYear", "between 1900 and 9999"));
        }
    }
    Ok(())
}

pub fn validate_simulation_params(params: &SimulationParams) -> Result<(), InputError> {
    require_non_negative("simulation.monthlyContribution", params.monthly_contribution)?;
    require_rate("simulation.interestRate", params.interest_rate)?;
    require_rate("simulation.inflationRate", params.inflation_rate)?;
    require_rate("simulation.loanRate", params.loan_rate)?;
    Ok(())
}

pub fn validate_alert_settings(settings: &AlertSettings) -> Result<(), InputError> {
    if settings.truck_max_age < 0 {
        return Err(InputError::OutOfRange {
            field: "alerts.truckMaxAge",
            requirement: ">= 0",
        });
    }
    if settings.trailer_max_age < 0 {
        return Err(InputError::OutOfRange {
            field: "alerts.trailerMaxAge",
            requirement: ">= 0",
        });
    }
    require_non_negative("alerts.truckMaintenanceMax", settings.truck_maintenance_max)?;
    require_non_negative("alerts.trailerMaintenanceMax", settings.trailer_maintenance_max)?;
    Ok(())
}

pub fn plan_request_from_json(json: &str, base: SettingsArgs) -> Result<PlanRequest, InputError> {
    let payload = serde_json::from_str::<PlanPayload>(json)?;
    plan_request_from_payload(payload, base)
}

pub fn plan_request_from_args(args: PlanArgs) -> Result<PlanRequest, InputError> {
    let mut request = match &args.input {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| InputError::Read {
                path: path.clone(),
                source,
            })?;
            plan_request_from_json(&json, args.settings)?
        }
        None => plan_request_from_payload(PlanPayload::default(), args.settings)?,
    };
    if let Some(year) = args.current_year {
        require_year("currentYear", year)?;
        request.current_year = Some(year);
    }
    Ok(request)
}

pub fn plan_request_from_payload(
    payload: PlanPayload,
    base: SettingsArgs,
) -> Result<PlanRequest, InputError> {
    let mut args = base;

    if let Some(v) = payload.initial_fund {
        args.initial_fund = v;
    }
    if let Some(v) = payload.monthly_contribution {
        args.monthly_contribution = v;
    }
    if let Some(v) = payload.interest_rate {
        args.interest_rate = v;
    }
    if let Some(v) = payload.loan_interest_rate {
        args.loan_interest_rate = v;
    }
    if let Some(v) = payload.lease_interest_rate {
        args.lease_interest_rate = v;
    }
    if let Some(v) = payload.loan_term_years {
        args.loan_term_years = v;
    }
    if let Some(v) = payload.tax_rate {
        args.tax_rate = v;
    }
    if let Some(v) = payload.depreciation_method {
        args.depreciation_method = v.into();
    }
    if let Some(v) = payload.tax_method {
        args.tax_method = Some(v.into());
    }

    let settings = build_settings(&args)?;
    let tax_method = args
        .tax_method
        .map(DepreciationMethod::from)
        .unwrap_or(settings.depreciation_method);

    if let Some(year) = payload.current_year {
        require_year("currentYear", year)?;
    }

    let vehicles = payload.vehicles.unwrap_or_else(reference_fleet);
    validate_vehicles(&vehicles)?;

    let mut simulation_params = default_simulation_params();
    let sim = payload.simulation;
    if let Some(v) = sim.monthly_contribution {
        simulation_params.monthly_contribution = v;
    }
    if let Some(v) = sim.interest_rate {
        simulation_params.interest_rate = v;
    }
    if let Some(v) = sim.inflation_rate {
        simulation_params.inflation_rate = v;
    }
    if let Some(v) = sim.loan_rate {
        simulation_params.loan_rate = v;
    }
    validate_simulation_params(&simulation_params)?;

    let mut alert_settings = default_alert_settings();
    let alerts = payload.alerts;
    if let Some(v) = alerts.truck_max_age {
        alert_settings.truck_max_age = v;
    }
    if let Some(v) = alerts.trailer_max_age {
        alert_settings.trailer_max_age = v;
    }
    if let Some(v) = alerts.truck_max_mileage {
        alert_settings.truck_max_mileage = v;
    }
    if let Some(v) = alerts.truck_maintenance_max {
        alert_settings.truck_maintenance_max = v;
    }
    if let Some(v) = alerts.trailer_maintenance_max {
        alert_settings.trailer_maintenance_max = v;
    }
    validate_alert_settings(&alert_settings)?;

    Ok(PlanRequest {
        vehicles,
        settings,
        tax_method,
        alert_settings,
        simulation_params,
        current_year: payload.current_year,
    })
}

fn require_year(field: &'static str, year: i32) -> Result<(), InputError> {
    if YEAR_RANGE.contains(&year) {
        Ok(())
    } else {
        Err(InputError::OutOfRange {
            field,
            requirement: "between 1900 and 9999",
        })
    }
}

fn is_rate(value: f64) -> bool {
    value.is_finite() && value > -100.0 && value <= 100.0
}

fn require_rate(field: &'static str, value: f64) -> Result<(), InputError> {
    if is_rate(value) {
        Ok(())
    } else {
        Err(InputError::OutOfRange {
            field,
            requirement: "in (-100, 100]",
        })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::OutOfRange {
            field,
            requirement: ">= 0",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Quarter;

    fn request(json: &str) -> Result<PlanRequest, InputError> {
        plan_request_from_json(json, SettingsArgs::default())
    }

    #[test]
    fn empty_payload_uses_reference_defaults() {
        let request = request("{}").expect("defaults are valid");
        assert_eq!(request.vehicles, reference_fleet());
        assert_eq!(request.settings, defaults::default_financial_settings());
        assert_eq!(request.tax_method, DepreciationMethod::Depreciation);
        assert_eq!(request.alert_settings, default_alert_settings());
        assert_eq!(request.simulation_params, default_simulation_params());
        assert_eq!(request.current_year, None);
    }

    #[test]
    fn payload_parses_camel_case_keys() {
        let json = r#"{
            "vehicles": [{
                "id": 7,
                "name": "Truck #7",
                "type": "Semi Truck",
                "purchaseYear": 2019,
                "currentMileage": 210000,
                "replacementCost": 150000,
                "salvageValue": 12000,
                "inflationRate": 3.1,
                "replacementYear": 2029,
                "replacementQuarter": "Q3"
            }],
            "currentYear": 2027,
            "initialFund": 40000,
            "monthlyContribution": 4500,
            "loanTermYears": 7,
            "depreciationMethod": "macrs",
            "taxMethod": "bonus",
            "simulation": { "inflationRate": 4.0 },
            "alerts": { "truckMaxMileage": 300000 }
        }"#;

        let request = request(json).expect("json should parse");
        assert_eq!(request.vehicles.len(), 1);
        let vehicle = &request.vehicles[0];
        assert_eq!(vehicle.vehicle_type, "Semi Truck");
        assert_eq!(vehicle.current_mileage, Some(210_000));
        assert_eq!(vehicle.replacement_quarter, Quarter::Q3);

        assert_eq!(request.current_year, Some(2027));
        assert_eq!(request.settings.initial_fund, 40_000.0);
        assert_eq!(request.settings.monthly_contribution, 4_500.0);
        assert_eq!(request.settings.loan_term_years, 7);
        assert_eq!(request.settings.interest_rate, defaults::INTEREST_RATE);
        assert_eq!(
            request.settings.depreciation_method,
            DepreciationMethod::Depreciation
        );
        assert_eq!(request.tax_method, DepreciationMethod::Bonus);
        assert_eq!(request.simulation_params.inflation_rate, 4.0);
        assert_eq!(
            request.simulation_params.monthly_contribution,
            defaults::MONTHLY_CONTRIBUTION
        );
        assert_eq!(request.alert_settings.truck_max_mileage, 300_000);
    }

    #[test]
    fn payload_overrides_layer_over_cli_settings() {
        let base = SettingsArgs {
            initial_fund: 90_000.0,
            tax_rate: 21.0,
            ..SettingsArgs::default()
        };
        let request =
            plan_request_from_json(r#"{ "taxRate": 35 }"#, base).expect("valid request");
        assert_eq!(request.settings.initial_fund, 90_000.0);
        assert_eq!(request.settings.tax_rate, 35.0);
    }

    #[test]
    fn missing_mileage_defaults_to_none() {
        let json = r#"{ "vehicles": [{
            "id": 1, "name": "Trailer", "type": "Flatbed Trailer", "purchaseYear": 2020,
            "replacementCost": 50000, "salvageValue": 2000, "inflationRate": 2,
            "replacementYear": 2030, "replacementQuarter": "Q1"
        }] }"#;
        let request = request(json).expect("json should parse");
        assert_eq!(request.vehicles[0].current_mileage, None);
    }

    #[test]
    fn build_settings_rejects_zero_loan_term() {
        let args = SettingsArgs {
            loan_term_years: 0,
            ..SettingsArgs::default()
        };
        let err = build_settings(&args).expect_err("must reject zero term");
        assert_eq!(err.to_string(), "loanTermYears must be > 0");
    }

    #[test]
    fn build_settings_rejects_out_of_range_rates() {
        let args = SettingsArgs {
            interest_rate: -100.0,
            ..SettingsArgs::default()
        };
        let err = build_settings(&args).expect_err("must reject -100% interest");
        assert!(err.to_string().contains("interestRate"));

        let args = SettingsArgs {
            tax_rate: 101.0,
            ..SettingsArgs::default()
        };
        let err = build_settings(&args).expect_err("must reject tax above 100%");
        assert!(err.to_string().contains("taxRate"));

        let args = SettingsArgs {
            initial_fund: f64::NAN,
            ..SettingsArgs::default()
        };
        assert!(build_settings(&args).is_err());
    }

    #[test]
    fn rejects_negative_contribution() {
        let err = request(r#"{ "monthlyContribution": -1 }"#).expect_err("must reject");
        assert!(err.to_string().contains("monthlyContribution"));
    }

    #[test]
    fn rejects_duplicate_vehicle_ids() {
        let mut vehicles = reference_fleet();
        vehicles[2].id = 1;
        let err = validate_vehicles(&vehicles).expect_err("must reject duplicate");
        assert!(matches!(err, InputError::DuplicateVehicleId(1)));
    }

    #[test]
    fn rejects_negative_salvage() {
        let mut vehicles = reference_fleet();
        vehicles[1].salvage_value = -10.0;
        let err = validate_vehicles(&vehicles).expect_err("must reject");
        assert_eq!(err.to_string(), "vehicle 2: salvageValue must be >= 0");
    }

    #[test]
    fn rejects_years_outside_the_calendar_range() {
        let json = r#"{ "vehicles": [{
            "id": 1, "name": "Truck", "type": "Semi Truck", "purchaseYear": 2020,
            "replacementCost": 50000, "salvageValue": 2000, "inflationRate": 2,
            "replacementYear": 1073743849, "replacementQuarter": "Q1"
        }] }"#;
        let err = request(json).expect_err("must reject far-future replacement");
        assert_eq!(
            err.to_string(),
            "vehicle 1: replacementYear must be between 1900 and 9999"
        );

        let mut vehicles = reference_fleet();
        vehicles[3].purchase_year = i32::MIN;
        let err = validate_vehicles(&vehicles).expect_err("must reject");
        assert_eq!(
            err.to_string(),
            "vehicle 4: purchaseYear must be between 1900 and 9999"
        );

        let err = request(r#"{ "currentYear": -5 }"#).expect_err("must reject");
        assert!(err.to_string().contains("currentYear"));
        assert!(request(r#"{ "currentYear": 9999 }"#).is_ok());
    }

    #[test]
    fn rejects_cli_current_year_outside_range() {
        let args = PlanArgs {
            input: None,
            current_year: Some(20_000),
            pretty: false,
            settings: SettingsArgs::default(),
        };
        let err = plan_request_from_args(args).expect_err("must reject");
        assert_eq!(err.to_string(), "currentYear must be between 1900 and 9999");
    }

    #[test]
    fn rejects_bad_simulation_and_alert_overrides() {
        let err = request(r#"{ "simulation": { "loanRate": 150 } }"#).expect_err("must reject");
        assert!(err.to_string().contains("simulation.loanRate"));

        let err = request(r#"{ "alerts": { "truckMaxAge": -1 } }"#).expect_err("must reject");
        assert!(err.to_string().contains("alerts.truckMaxAge"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = request(r#"{ "vehicles": 3 }"#).expect_err("must reject");
        assert!(matches!(err, InputError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON payload"));
    }

    #[test]
    fn cli_parses_plan_flags() {
        let cli = Cli::try_parse_from([
            "fleetfund",
            "plan",
            "--current-year",
            "2026",
            "--initial-fund",
            "50000",
            "--depreciation-method",
            "macrs",
            "--tax-method",
            "immediate",
        ])
        .expect("flags should parse");

        let Command::Plan(args) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.current_year, Some(2026));
        assert_eq!(args.settings.initial_fund, 50_000.0);
        assert_eq!(args.settings.monthly_contribution, defaults::MONTHLY_CONTRIBUTION);
        assert_eq!(
            args.settings.depreciation_method,
            CliDepreciationMethod::Depreciation
        );

        let request = plan_request_from_args(args).expect("valid request");
        assert_eq!(request.current_year, Some(2026));
        assert_eq!(request.tax_method, DepreciationMethod::Immediate);
        assert_eq!(request.vehicles.len(), 4);
    }

    #[test]
    fn cli_defaults_match_settings_default() {
        let cli = Cli::try_parse_from(["fleetfund", "plan"]).expect("defaults parse");
        let Command::Plan(args) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.settings, SettingsArgs::default());

        let cli = Cli::try_parse_from(["fleetfund", "serve"]).expect("defaults parse");
        assert!(matches!(cli.command, Command::Serve { port: 8080 }));
    }

    #[test]
    fn missing_input_file_is_reported() {
        let args = PlanArgs {
            input: Some(PathBuf::from("does/not/exist.json")),
            current_year: None,
            pretty: false,
            settings: SettingsArgs::default(),
        };
        let err = plan_request_from_args(args).expect_err("must fail to read");
        assert!(matches!(err, InputError::Read { .. }));
    }

    #[test]
    fn maintenance_caps_pass_through_without_changing_alerts() {
        let baseline = request(r#"{ "currentYear": 2025 }"#).expect("valid request");
        let configured = request(
            r#"{
                "currentYear": 2025,
                "alerts": { "truckMaintenanceMax": 9000, "trailerMaintenanceMax": 4200.5 }
            }"#,
        )
        .expect("valid request");
        assert_eq!(configured.alert_settings.truck_maintenance_max, 9_000.0);
        assert_eq!(configured.alert_settings.trailer_maintenance_max, 4_200.5);
        assert_eq!(configured.alert_settings.truck_max_age, 7);

        let planner = configured.into_planner();
        assert_eq!(planner.alert_settings().truck_maintenance_max, 9_000.0);
        assert_eq!(
            planner.dashboard_for_year(2025).alerts,
            baseline.into_planner().dashboard_for_year(2025).alerts
        );

        let err = request(r#"{ "alerts": { "trailerMaintenanceMax": -1 } }"#)
            .expect_err("must reject");
        assert!(err.to_string().contains("alerts.trailerMaintenanceMax"));
    }

    #[test]
    fn request_builds_planner_with_tax_method() {
        let request = request(r#"{ "taxMethod": "immediate" }"#).expect("valid request");
        let planner = request.into_planner();
        assert_eq!(planner.tax_method(), DepreciationMethod::Immediate);
        assert_eq!(
            planner.settings().depreciation_method,
            DepreciationMethod::Depreciation
        );
    }
}
