use chrono::{Datelike, Local};
use serde::Serialize;
use tracing::debug;

use crate::core::{
    Alert, AlertSettings, CapExPoint, DepreciationMethod, FinancialSettings, FleetStats,
    FundPoint, Projection, SimulationParams, SimulationResults, TaxAnalysis, Vehicle,
    calculate_age_distribution, calculate_alerts, calculate_capex_series, calculate_fleet_stats,
    calculate_projections, calculate_simulation, calculate_tax_benefits, tax_savings_schedule,
    upcoming_replacements,
};

pub const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlannerError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub current_year: i32,
    pub projections: Vec<Projection>,
    pub fund_points: Vec<FundPoint>,
    #[serde(rename = "capExPoints")]
    pub capex_points: Vec<CapExPoint>,
    #[serde(rename = "capExSeries")]
    pub capex_series: Vec<CapExPoint>,
    pub tax_analysis: TaxAnalysis,
    pub tax_schedule: Vec<f64>,
    pub simulation_results: SimulationResults,
    pub alerts: Vec<Alert>,
    pub fleet_stats: FleetStats,
    pub age_distribution: [usize; 4],
    pub upcoming_replacements: Vec<Projection>,
}

#[derive(Debug, Clone)]
pub struct FleetPlanner {
    vehicles: Vec<Vehicle>,
    settings: FinancialSettings,
    alert_settings: AlertSettings,
    simulation_params: SimulationParams,
    tax_method: DepreciationMethod,
}

impl FleetPlanner {
    pub fn new(
        vehicles: Vec<Vehicle>,
        settings: FinancialSettings,
        alert_settings: AlertSettings,
        simulation_params: SimulationParams,
    ) -> Self {
        let tax_method = settings.depreciation_method;
        Self {
            vehicles,
            settings,
            alert_settings,
            simulation_params,
            tax_method,
        }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: u32) -> Result<&Vehicle, PlannerError> {
        self.vehicles
            .iter()
            .find(|v| v.id == id)
            .ok_or(PlannerError::VehicleNotFound(id))
    }

    pub fn settings(&self) -> &FinancialSettings {
        &self.settings
    }

    pub fn alert_settings(&self) -> &AlertSettings {
        &self.alert_settings
    }

    pub fn simulation_params(&self) -> &SimulationParams {
        &self.simulation_params
    }

    pub fn tax_method(&self) -> DepreciationMethod {
        self.tax_method
    }

    pub fn add_vehicle(&mut self, mut vehicle: Vehicle) -> u32 {
        let id = self.vehicles.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        vehicle.id = id;
        debug!(vehicle_id = id, name = %vehicle.name, "vehicle added");
        self.vehicles.push(vehicle);
        id
    }

    pub fn update_vehicle(&mut self, vehicle: Vehicle) -> Result<(), PlannerError> {
        let slot = self
            .vehicles
            .iter_mut()
            .find(|v| v.id == vehicle.id)
            .ok_or(PlannerError::VehicleNotFound(vehicle.id))?;
        debug!(vehicle_id = vehicle.id, "vehicle updated");
        *slot = vehicle;
        Ok(())
    }

    pub fn remove_vehicle(&mut self, id: u32) -> Result<Vehicle, PlannerError> {
        let idx = self
            .vehicles
            .iter()
            .position(|v| v.id == id)
            .ok_or(PlannerError::VehicleNotFound(id))?;
        debug!(vehicle_id = id, "vehicle removed");
        Ok(self.vehicles.remove(idx))
    }

    pub fn update_financial_settings(&mut self, update: impl FnOnce(&mut FinancialSettings)) {
        update(&mut self.settings);
    }

    pub fn update_alert_settings(&mut self, update: impl FnOnce(&mut AlertSettings)) {
        update(&mut self.alert_settings);
    }

    pub fn update_simulation_params(&mut self, update: impl FnOnce(&mut SimulationParams)) {
        update(&mut self.simulation_params);
    }

    pub fn set_tax_method(&mut self, method: DepreciationMethod) {
        self.tax_method = method;
    }

    pub fn dashboard(&self) -> Dashboard {
        self.dashboard_for_year(Local::now().year())
    }

    pub fn dashboard_for_year(&self, current_year: i32) -> Dashboard {
        let projection_set = calculate_projections(&self.vehicles, &self.settings);
        let capex_series = calculate_capex_series(&self.vehicles, &self.settings);
        let tax_analysis =
            calculate_tax_benefits(&self.vehicles, self.settings.tax_rate, self.tax_method);
        let tax_schedule =
            tax_savings_schedule(&self.vehicles, self.settings.tax_rate, self.tax_method);
        let simulation_results =
            calculate_simulation(&self.vehicles, &self.settings, &self.simulation_params);
        let alerts = calculate_alerts(&self.vehicles, &self.alert_settings, current_year);
        let fleet_stats = calculate_fleet_stats(
            &self.vehicles,
            &alerts,
            &projection_set.fund_points,
            &self.settings,
            current_year,
        );
        let age_distribution = calculate_age_distribution(&self.vehicles, current_year);
        let upcoming = upcoming_replacements(&projection_set.projections, UPCOMING_LIMIT);

        debug!(
            current_year,
            vehicles = self.vehicles.len(),
            projections = projection_set.projections.len(),
            alerts = alerts.len(),
            "dashboard rebuilt"
        );

        Dashboard {
            current_year,
            projections: projection_set.projections,
            fund_points: projection_set.fund_points,
            capex_points: projection_set.capex_points,
            capex_series,
            tax_analysis,
            tax_schedule,
            simulation_results,
            alerts,
            fleet_stats,
            age_distribution,
            upcoming_replacements: upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::defaults::{
        default_alert_settings, default_financial_settings, default_simulation_params,
        reference_fleet,
    };
    use crate::core::Quarter;

    fn reference_planner() -> FleetPlanner {
        FleetPlanner::new(
            reference_fleet(),
            default_financial_settings(),
            default_alert_settings(),
            default_simulation_params(),
        )
    }

    fn spare_truck() -> Vehicle {
        Vehicle {
            id: 0,
            name: "Truck #150".to_string(),
            vehicle_type: "Semi Truck".to_string(),
            purchase_year: 2020,
            current_mileage: Some(120_000),
            replacement_cost: 140_000.0,
            salvage_value: 12_000.0,
            inflation_rate: 2.4,
            replacement_year: 2028,
            replacement_quarter: Quarter::Q2,
        }
    }

    #[test]
    fn add_vehicle_assigns_next_id() {
        let mut planner = reference_planner();
        let id = planner.add_vehicle(spare_truck());
        assert_eq!(id, 5);
        assert_eq!(planner.vehicle(5).map(|v| v.name.as_str()), Ok("Truck #150"));

        let mut empty = FleetPlanner::new(
            Vec::new(),
            default_financial_settings(),
            default_alert_settings(),
            default_simulation_params(),
        );
        assert_eq!(empty.add_vehicle(spare_truck()), 1);
    }

    #[test]
    fn unknown_vehicle_ids_are_reported() {
        let mut planner = reference_planner();
        let mut ghost = spare_truck();
        ghost.id = 42;
        assert_eq!(
            planner.update_vehicle(ghost),
            Err(PlannerError::VehicleNotFound(42))
        );
        assert_eq!(
            planner.remove_vehicle(42).map(|v| v.id),
            Err(PlannerError::VehicleNotFound(42))
        );
        assert_eq!(
            PlannerError::VehicleNotFound(42).to_string(),
            "vehicle 42 not found"
        );
    }

    #[test]
    fn mutations_flow_into_the_next_dashboard() {
        let mut planner = reference_planner();
        let before = planner.dashboard_for_year(2025);
        assert_eq!(before.fleet_stats.total_vehicles, 4);

        let removed = planner.remove_vehicle(4).expect("vehicle 4 exists");
        assert_eq!(removed.name, "Trailer #147");
        planner.update_financial_settings(|s| s.monthly_contribution = 10_000.0);
        let after = planner.dashboard_for_year(2025);

        assert_eq!(after.fleet_stats.total_vehicles, 3);
        assert_eq!(after.projections.len(), 3);
        assert!(after.fund_points[39].fund_balance > before.fund_points[39].fund_balance);
    }

    #[test]
    fn tax_method_is_independent_of_settings() {
        let mut planner = reference_planner();
        assert_eq!(planner.tax_method(), DepreciationMethod::Depreciation);
        assert_eq!(planner.dashboard_for_year(2025).tax_schedule.len(), 6);

        planner.set_tax_method(DepreciationMethod::Immediate);
        let dashboard = planner.dashboard_for_year(2025);
        assert_eq!(dashboard.tax_analysis.method, DepreciationMethod::Immediate);
        assert_eq!(dashboard.tax_schedule.len(), 1);
        // 68000 + 85000 + 125000 + 210000 at 28%.
        assert_eq!(dashboard.tax_analysis.total_savings, 136_640.0);
        assert_eq!(
            planner.settings().depreciation_method,
            DepreciationMethod::Depreciation
        );
    }

    #[test]
    fn reference_dashboard_is_complete_and_repeatable() {
        let planner = reference_planner();
        let dashboard = planner.dashboard_for_year(2025);

        assert_eq!(dashboard, planner.dashboard_for_year(2025));
        assert_eq!(dashboard.projections.len(), 4);
        let ids = dashboard
            .projections
            .iter()
            .map(|p| p.vehicle_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 1, 4, 3]);
        assert_eq!(dashboard.fund_points.len(), 40);
        assert_eq!(dashboard.capex_points.len(), 20);
        assert_eq!(dashboard.capex_series.len(), 44);
        assert_eq!(dashboard.upcoming_replacements.len(), 4);
        assert_eq!(dashboard.simulation_results.total_vehicles, 4);
        assert_eq!(
            dashboard.fleet_stats.fund_balance,
            dashboard.fund_points[0].fund_balance
        );
        assert_eq!(dashboard.age_distribution.iter().sum::<usize>(), 4);
        assert_eq!(dashboard.fleet_stats.alert_count, dashboard.alerts.len());
    }

    #[test]
    fn simulation_overrides_are_held_separately() {
        let mut planner = reference_planner();
        planner.update_simulation_params(|p| p.monthly_contribution = 0.0);
        planner.update_alert_settings(|a| a.truck_max_age = 100);

        assert_eq!(planner.simulation_params().monthly_contribution, 0.0);
        assert_eq!(planner.settings().monthly_contribution, 3_000.0);
        assert_eq!(planner.alert_settings().truck_max_age, 100);

        let dashboard = planner.dashboard_for_year(2025);
        assert!(dashboard.simulation_results.fund_balance < dashboard.fund_points[39].fund_balance);
    }
}
