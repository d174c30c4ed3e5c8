use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn ordinal(self) -> u32 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Q4 => 4,
        }
    }

    pub fn start_month(self) -> i32 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 4,
            Quarter::Q3 => 7,
            Quarter::Q4 => 10,
        }
    }

    pub fn year_fraction(self) -> f64 {
        (self.ordinal() - 1) as f64 / 4.0
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Quarter> {
        match ordinal {
            1 => Some(Quarter::Q1),
            2 => Some(Quarter::Q2),
            3 => Some(Quarter::Q3),
            4 => Some(Quarter::Q4),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DepreciationMethod {
    Immediate,
    #[serde(alias = "macrs")]
    Depreciation,
    Bonus,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub purchase_year: i32,
    #[serde(default)]
    pub current_mileage: Option<u32>,
    pub replacement_cost: f64,
    pub salvage_value: f64,
    pub inflation_rate: f64,
    pub replacement_year: i32,
    pub replacement_quarter: Quarter,
}

impl Vehicle {
    pub fn is_trailer(&self) -> bool {
        self.vehicle_type.to_lowercase().contains("trailer")
    }

    pub fn age(&self, current_year: i32) -> i32 {
        current_year.saturating_sub(self.purchase_year)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSettings {
    pub initial_fund: f64,
    pub monthly_contribution: f64,
    pub interest_rate: f64,
    pub loan_interest_rate: f64,
    pub lease_interest_rate: f64,
    pub loan_term_years: u32,
    pub tax_rate: f64,
    pub depreciation_method: DepreciationMethod,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettings {
    pub truck_max_age: i32,
    pub trailer_max_age: i32,
    pub truck_max_mileage: u32,
    pub truck_maintenance_max: f64,
    pub trailer_maintenance_max: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    pub monthly_contribution: f64,
    pub interest_rate: f64,
    pub inflation_rate: f64,
    pub loan_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub vehicle_id: u32,
    pub name: String,
    pub replacement_year: i32,
    pub replacement_quarter: Quarter,
    pub replacement_month: u32,
    pub adjusted_cost: f64,
    pub net_cost: f64,
    pub fund_before_purchase: f64,
    pub fund_after_purchase: f64,
    pub shortfall: f64,
    pub monthly_reserve: f64,
    pub loan_payment: f64,
    pub lease_payment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundPoint {
    pub quarter: i32,
    pub year: i32,
    pub label: String,
    pub fund_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapExPoint {
    pub quarter: i32,
    pub year: i32,
    pub label: String,
    pub expenditure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSet {
    pub projections: Vec<Projection>,
    pub fund_points: Vec<FundPoint>,
    #[serde(rename = "capExPoints")]
    pub capex_points: Vec<CapExPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxAnalysis {
    pub method: DepreciationMethod,
    pub total_savings: f64,
    pub first_year_savings: f64,
    pub net_equipment_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResults {
    pub fund_balance: f64,
    pub funded_vehicles: usize,
    pub total_vehicles: usize,
    pub max_shortfall: f64,
    pub monthly_average: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub vehicle_id: u32,
    pub vehicle_name: String,
    pub severity: AlertSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStats {
    pub total_vehicles: usize,
    pub average_age: f64,
    pub fund_balance: f64,
    pub alert_count: usize,
}
