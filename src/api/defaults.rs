use crate::core::{
    AlertSettings, DepreciationMethod, FinancialSettings, Quarter, SimulationParams, Vehicle,
};

pub const INITIAL_FUND: f64 = 25_000.0;
pub const MONTHLY_CONTRIBUTION: f64 = 3_000.0;
pub const INTEREST_RATE: f64 = 1.5;
pub const LOAN_INTEREST_RATE: f64 = 6.5;
pub const LEASE_INTEREST_RATE: f64 = 5.5;
pub const LOAN_TERM_YEARS: u32 = 5;
pub const TAX_RATE: f64 = 28.0;
pub const SIMULATION_INFLATION_RATE: f64 = 2.5;

pub fn default_financial_settings() -> FinancialSettings {
    FinancialSettings {
        initial_fund: INITIAL_FUND,
        monthly_contribution: MONTHLY_CONTRIBUTION,
        interest_rate: INTEREST_RATE,
        loan_interest_rate: LOAN_INTEREST_RATE,
        lease_interest_rate: LEASE_INTEREST_RATE,
        loan_term_years: LOAN_TERM_YEARS,
        tax_rate: TAX_RATE,
        depreciation_method: DepreciationMethod::Depreciation,
    }
}

pub fn default_alert_settings() -> AlertSettings {
    AlertSettings {
        truck_max_age: 7,
        trailer_max_age: 10,
        truck_max_mileage: 450_000,
        truck_maintenance_max: 3_500.0,
        trailer_maintenance_max: 2_500.0,
    }
}

pub fn default_simulation_params() -> SimulationParams {
    SimulationParams {
        monthly_contribution: MONTHLY_CONTRIBUTION,
        interest_rate: INTEREST_RATE,
        inflation_rate: SIMULATION_INFLATION_RATE,
        loan_rate: LOAN_INTEREST_RATE,
    }
}

pub fn reference_fleet() -> Vec<Vehicle> {
    vec![
        reference_vehicle(
            1,
            "Truck #120",
            "Straight Truck",
            2015,
            Some(385_000),
            68_000.0,
            5_000.0,
            2.5,
            2025,
            Quarter::Q3,
        ),
        reference_vehicle(
            2,
            "Trailer #134",
            "Dry Van Trailer",
            2018,
            None,
            85_000.0,
            5_000.0,
            2.0,
            2025,
            Quarter::Q2,
        ),
        reference_vehicle(
            3,
            "Truck #118",
            "Semi Truck",
            2017,
            Some(435_000),
            125_000.0,
            10_000.0,
            2.2,
            2026,
            Quarter::Q4,
        ),
        reference_vehicle(
            4,
            "Trailer #147",
            "Refrigerated Trailer",
            2016,
            None,
            210_000.0,
            15_000.0,
            2.8,
            2026,
            Quarter::Q1,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn reference_vehicle(
    id: u32,
    name: &str,
    vehicle_type: &str,
    purchase_year: i32,
    current_mileage: Option<u32>,
    replacement_cost: f64,
    salvage_value: f64,
    inflation_rate: f64,
    replacement_year: i32,
    replacement_quarter: Quarter,
) -> Vehicle {
    Vehicle {
        id,
        name: name.to_string(),
        vehicle_type: vehicle_type.to_string(),
        purchase_year,
        current_mileage,
        replacement_cost,
        salvage_value,
        inflation_rate,
        replacement_year,
        replacement_quarter,
    }
}
