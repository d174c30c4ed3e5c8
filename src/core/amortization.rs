// A zero term is not guarded and yields NaN or infinity.
pub fn loan_payment(principal: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let term_months = term_years as f64 * 12.0;

    if monthly_rate == 0.0 {
        return principal / term_months;
    }

    let growth = (1.0 + monthly_rate).powf(term_months);
    principal * monthly_rate * growth / (growth - 1.0)
}

pub fn lease_payment(
    asset_value: f64,
    residual_value: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let term_months = term_years as f64 * 12.0;
    let depreciation = (asset_value - residual_value) / term_months;
    let interest = (asset_value + residual_value) / 2.0 * monthly_rate;
    depreciation + interest
}
