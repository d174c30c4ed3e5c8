use super::projection::round_half_up;
use super::types::{DepreciationMethod, TaxAnalysis, Vehicle};

pub const MACRS_RATES: [f64; 6] = [0.20, 0.32, 0.192, 0.1152, 0.1152, 0.0576];

const BONUS_SHARE: f64 = 0.8;
const BONUS_REMAINDER_SHARE: f64 = 0.2;

// Savings on base (not inflated) replacement cost.
pub fn calculate_tax_benefits(
    vehicles: &[Vehicle],
    tax_rate: f64,
    method: DepreciationMethod,
) -> TaxAnalysis {
    let total_equipment_cost = total_equipment_cost(vehicles);
    let schedule = savings_schedule(total_equipment_cost, tax_rate, method);
    let total_savings = schedule.iter().sum::<f64>();
    let first_year_savings = schedule.first().copied().unwrap_or(0.0);

    TaxAnalysis {
        method,
        total_savings: round_half_up(total_savings),
        first_year_savings: round_half_up(first_year_savings),
        net_equipment_cost: round_half_up(total_equipment_cost - total_savings),
    }
}

pub fn tax_savings_schedule(
    vehicles: &[Vehicle],
    tax_rate: f64,
    method: DepreciationMethod,
) -> Vec<f64> {
    savings_schedule(total_equipment_cost(vehicles), tax_rate, method)
        .into_iter()
        .map(round_half_up)
        .collect()
}

fn total_equipment_cost(vehicles: &[Vehicle]) -> f64 {
    vehicles.iter().map(|v| v.replacement_cost).sum()
}

fn savings_schedule(cost: f64, tax_rate: f64, method: DepreciationMethod) -> Vec<f64> {
    let rate = tax_rate / 100.0;
    match method {
        DepreciationMethod::Immediate => vec![cost * rate],
        DepreciationMethod::Depreciation => depreciate(cost, rate).collect(),
        DepreciationMethod::Bonus => {
            let mut schedule = depreciate(cost * BONUS_REMAINDER_SHARE, rate).collect::<Vec<_>>();
            schedule[0] += cost * BONUS_SHARE * rate;
            schedule
        }
    }
}

fn depreciate(basis: f64, rate: f64) -> impl Iterator<Item = f64> {
    MACRS_RATES.into_iter().map(move |share| basis * share * rate)
}
