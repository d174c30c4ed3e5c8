mod amortization;
mod calendar;
mod fleet;
mod projection;
mod simulation;
mod tax;
mod types;

pub use amortization::{lease_payment, loan_payment};
pub use calendar::{
    BASE_YEAR, HORIZON_MONTHS, month_to_quarter_label, quarter_label, quarter_to_month,
};
pub use fleet::{
    calculate_age_distribution, calculate_alerts, calculate_fleet_stats, upcoming_replacements,
};
pub use projection::{calculate_capex_series, calculate_projections};
pub use simulation::calculate_simulation;
pub use tax::{MACRS_RATES, calculate_tax_benefits, tax_savings_schedule};
pub use types::{
    Alert, AlertSettings, AlertSeverity, CapExPoint, DepreciationMethod, FinancialSettings,
    FleetStats, FundPoint, Projection, ProjectionSet, Quarter, SimulationParams,
    SimulationResults, TaxAnalysis, Vehicle,
};
