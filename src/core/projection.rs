use std::collections::BTreeMap;

use tracing::debug;

use super::amortization::{lease_payment, loan_payment};
use super::calendar::{
    BASE_YEAR, HORIZON_MONTHS, horizon_month, month_to_quarter_label, month_to_year_quarter,
    quarter_index, quarter_label,
};
use super::types::{
    CapExPoint, FinancialSettings, FundPoint, Projection, ProjectionSet, Quarter, Vehicle,
};

const CHART_QUARTERS: usize = 20;
const CAPEX_SPAN_YEARS: i32 = 10;

#[derive(Debug, Clone, Copy)]
pub(super) struct FundAccrual {
    initial_fund: f64,
    monthly_contribution: f64,
    monthly_rate: f64,
}

impl FundAccrual {
    pub(super) fn new(
        initial_fund: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
    ) -> Self {
        Self {
            initial_fund,
            monthly_contribution,
            monthly_rate: annual_rate_percent / 100.0 / 12.0,
        }
    }

    fn accrue(self, fund: f64) -> f64 {
        let funded = fund + self.monthly_contribution;
        funded + funded * self.monthly_rate
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct ScheduledPurchase {
    pub(super) month: u32,
    pub(super) net_cost: f64,
}

#[derive(Debug, Clone, Copy)]
struct PurchaseOutcome {
    fund_before: f64,
    fund_after: f64,
}

#[derive(Debug, Default)]
struct FundTrace {
    outcomes: Vec<PurchaseOutcome>,
    fund_points: Vec<FundPoint>,
    quarterly_outflow: BTreeMap<i32, f64>,
}

#[derive(Debug, Clone, Copy)]
struct ReplacementCost {
    inflated: f64,
    net: f64,
}

struct HorizonRun {
    projections: Vec<Projection>,
    fund_points: Vec<FundPoint>,
    quarterly_outflow: BTreeMap<i32, f64>,
}

pub fn calculate_projections(vehicles: &[Vehicle], settings: &FinancialSettings) -> ProjectionSet {
    let run = run_horizon(vehicles, settings);
    let mut capex_points = build_capex_series(&run.quarterly_outflow);
    capex_points.truncate(CHART_QUARTERS);

    ProjectionSet {
        projections: run.projections,
        fund_points: run.fund_points,
        capex_points,
    }
}

pub fn calculate_capex_series(
    vehicles: &[Vehicle],
    settings: &FinancialSettings,
) -> Vec<CapExPoint> {
    build_capex_series(&run_horizon(vehicles, settings).quarterly_outflow)
}

// `purchases` must be ordered by month.
fn walk_fund(
    accrual: FundAccrual,
    purchases: &[ScheduledPurchase],
    mut trace: Option<&mut FundTrace>,
) -> f64 {
    let mut fund = accrual.initial_fund;
    let mut pending = purchases.iter().peekable();

    for month in 1..=HORIZON_MONTHS {
        fund = accrual.accrue(fund);

        while let Some(purchase) = pending.next_if(|p| p.month == month) {
            let fund_before = fund;
            fund = withdraw(fund, purchase.net_cost);

            if let Some(trace) = trace.as_deref_mut() {
                let (year, quarter) = month_to_year_quarter(month);
                *trace
                    .quarterly_outflow
                    .entry(quarter_index(year, quarter))
                    .or_insert(0.0) += purchase.net_cost;
                trace.outcomes.push(PurchaseOutcome {
                    fund_before,
                    fund_after: fund,
                });
            }
        }

        if month % 3 == 0 {
            if let Some(trace) = trace.as_deref_mut() {
                let (year, _) = month_to_year_quarter(month);
                trace.fund_points.push(FundPoint {
                    quarter: (month / 3) as i32,
                    year,
                    label: month_to_quarter_label(month),
                    fund_balance: round_half_up(fund),
                });
            }
        }
    }

    fund
}

pub(super) fn closing_fund_balance(accrual: FundAccrual, purchases: &[ScheduledPurchase]) -> f64 {
    walk_fund(accrual, purchases, None)
}

// A purchase the fund cannot cover empties it; the gap is not carried as debt.
fn withdraw(fund: f64, amount: f64) -> f64 {
    if fund >= amount { fund - amount } else { 0.0 }
}

fn run_horizon(vehicles: &[Vehicle], settings: &FinancialSettings) -> HorizonRun {
    let mut ordered = vehicles.iter().collect::<Vec<_>>();
    ordered.sort_by_key(|v| (v.replacement_year, v.replacement_quarter.ordinal()));

    let mut scheduled = Vec::with_capacity(ordered.len());
    for vehicle in ordered {
        let Some(month) = horizon_month(vehicle.replacement_year, vehicle.replacement_quarter)
        else {
            debug!(
                vehicle_id = vehicle.id,
                replacement_year = vehicle.replacement_year,
                "replacement outside projection horizon"
            );
            continue;
        };
        scheduled.push((vehicle, month, replacement_cost(vehicle)));
    }

    let purchases = scheduled
        .iter()
        .map(|(_, month, cost)| ScheduledPurchase {
            month: *month,
            net_cost: cost.net,
        })
        .collect::<Vec<_>>();

    let accrual = FundAccrual::new(
        settings.initial_fund,
        settings.monthly_contribution,
        settings.interest_rate,
    );
    let mut trace = FundTrace::default();
    let closing = walk_fund(accrual, &purchases, Some(&mut trace));

    let projections = scheduled
        .into_iter()
        .zip(trace.outcomes)
        .map(|((vehicle, month, cost), outcome)| {
            build_projection(vehicle, month, cost, outcome, settings)
        })
        .collect::<Vec<_>>();

    debug!(
        vehicles = vehicles.len(),
        projections = projections.len(),
        closing_fund = closing,
        "projection horizon complete"
    );

    HorizonRun {
        projections,
        fund_points: trace.fund_points,
        quarterly_outflow: trace.quarterly_outflow,
    }
}

fn replacement_cost(vehicle: &Vehicle) -> ReplacementCost {
    let years = (vehicle.replacement_year - BASE_YEAR) as f64
        + vehicle.replacement_quarter.year_fraction();
    let inflated = vehicle.replacement_cost * (1.0 + vehicle.inflation_rate / 100.0).powf(years);
    ReplacementCost {
        inflated,
        net: inflated - vehicle.salvage_value,
    }
}

fn build_projection(
    vehicle: &Vehicle,
    month: u32,
    cost: ReplacementCost,
    outcome: PurchaseOutcome,
    settings: &FinancialSettings,
) -> Projection {
    // Reserve spreads the cost over every month since the start of the projection.
    let monthly_reserve = if month > 0 {
        round_half_up(cost.net / month as f64)
    } else {
        0.0
    };
    let loan = loan_payment(cost.net, settings.loan_interest_rate, settings.loan_term_years);
    let lease = lease_payment(
        cost.inflated,
        vehicle.salvage_value,
        settings.lease_interest_rate,
        settings.loan_term_years,
    );

    Projection {
        vehicle_id: vehicle.id,
        name: vehicle.name.clone(),
        replacement_year: vehicle.replacement_year,
        replacement_quarter: vehicle.replacement_quarter,
        replacement_month: month,
        adjusted_cost: round_half_up(cost.inflated),
        net_cost: round_half_up(cost.net),
        fund_before_purchase: round_half_up(outcome.fund_before),
        fund_after_purchase: round_half_up(outcome.fund_after),
        shortfall: round_half_up(cost.net - outcome.fund_before).max(0.0),
        monthly_reserve,
        loan_payment: round_half_up(loan),
        lease_payment: round_half_up(lease),
    }
}

fn build_capex_series(quarterly_outflow: &BTreeMap<i32, f64>) -> Vec<CapExPoint> {
    (BASE_YEAR..=BASE_YEAR + CAPEX_SPAN_YEARS)
        .flat_map(|year| Quarter::ALL.into_iter().map(move |quarter| (year, quarter)))
        .map(|(year, quarter)| {
            let index = quarter_index(year, quarter);
            CapExPoint {
                quarter: index,
                year,
                label: quarter_label(year, quarter),
                expenditure: round_half_up(quarterly_outflow.get(&index).copied().unwrap_or(0.0)),
            }
        })
        .collect()
}

pub(super) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
