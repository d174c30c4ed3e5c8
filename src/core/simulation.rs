use super::calendar::HORIZON_MONTHS;
use super::projection::{
    FundAccrual, ScheduledPurchase, calculate_projections, closing_fund_balance, round_half_up,
};
use super::types::{FinancialSettings, SimulationParams, SimulationResults, Vehicle};

// Charged per under-funded replacement, whatever `loan_term_years` says.
const SHORTFALL_LOAN_MONTHS: f64 = 60.0;

pub fn calculate_simulation(
    vehicles: &[Vehicle],
    settings: &FinancialSettings,
    params: &SimulationParams,
) -> SimulationResults {
    let simulated_settings = FinancialSettings {
        monthly_contribution: params.monthly_contribution,
        interest_rate: params.interest_rate,
        loan_interest_rate: params.loan_rate,
        ..settings.clone()
    };
    let simulated_vehicles = vehicles
        .iter()
        .map(|vehicle| Vehicle {
            inflation_rate: params.inflation_rate,
            ..vehicle.clone()
        })
        .collect::<Vec<_>>();

    let projections = calculate_projections(&simulated_vehicles, &simulated_settings).projections;

    let purchases = projections
        .iter()
        .map(|p| ScheduledPurchase {
            month: p.replacement_month,
            net_cost: p.net_cost,
        })
        .collect::<Vec<_>>();
    let fund_balance = closing_fund_balance(
        FundAccrual::new(
            settings.initial_fund,
            params.monthly_contribution,
            params.interest_rate,
        ),
        &purchases,
    );

    let funded_vehicles = projections.iter().filter(|p| p.shortfall == 0.0).count();
    let max_shortfall = projections
        .iter()
        .map(|p| p.shortfall)
        .fold(0.0, f64::max);

    let total_contributions = params.monthly_contribution * HORIZON_MONTHS as f64;
    let shortfall_loan_payments = projections
        .iter()
        .filter(|p| p.shortfall > 0.0)
        .map(|p| p.loan_payment * SHORTFALL_LOAN_MONTHS)
        .sum::<f64>();

    SimulationResults {
        fund_balance: round_half_up(fund_balance),
        funded_vehicles,
        total_vehicles: vehicles.len(),
        max_shortfall,
        monthly_average: round_half_up(
            (total_contributions + shortfall_loan_payments) / HORIZON_MONTHS as f64,
        ),
    }
}
