use super::types::Quarter;

pub const BASE_YEAR: i32 = 2025;
pub const HORIZON_MONTHS: u32 = 120;

// Widened so any i32 year maps without overflow.
pub fn quarter_to_month(year: i32, quarter: Quarter) -> i64 {
    (i64::from(year) - i64::from(BASE_YEAR)) * 12 + i64::from(quarter.start_month())
}

pub fn horizon_month(year: i32, quarter: Quarter) -> Option<u32> {
    u32::try_from(quarter_to_month(year, quarter))
        .ok()
        .filter(|month| (1..=HORIZON_MONTHS).contains(month))
}

// Month 12 is Q4 of the first year, month 13 is Q1 of the second.
pub fn month_to_year_quarter(month: u32) -> (i32, Quarter) {
    let year = (month / 12) as i32 + BASE_YEAR;
    match Quarter::from_ordinal((month % 12).div_ceil(3)) {
        Some(quarter) => (year, quarter),
        None => (year - 1, Quarter::Q4),
    }
}

pub fn month_to_quarter_label(month: u32) -> String {
    let (year, quarter) = month_to_year_quarter(month);
    quarter_label(year, quarter)
}

pub fn quarter_label(year: i32, quarter: Quarter) -> String {
    format!("Q{} {}", quarter.ordinal(), year)
}

pub fn quarter_index(year: i32, quarter: Quarter) -> i32 {
    (year - BASE_YEAR) * 4 + quarter.ordinal() as i32
}
