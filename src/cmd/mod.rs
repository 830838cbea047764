pub mod agri;
pub mod business;
pub mod duty;
pub mod pension;
pub mod property;
pub mod salary;
pub mod sales;
pub mod zakat;

use rust_decimal::Decimal;

use crate::money::round_rupees;

/// Whole-rupee amount as a plain string for JSON output.
pub(crate) fn json_amount(amount: Decimal) -> String {
    round_rupees(amount).to_string()
}

/// Percentage with two decimals as a plain string for JSON output.
pub(crate) fn json_percent(value: Decimal) -> String {
    format!("{:.2}", value)
}
