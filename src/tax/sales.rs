//! General sales tax: a flat percentage on a base amount.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SalesResult {
    pub base_amount: Decimal,
    pub rate_percent: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

pub fn calculate_sales_tax(amount: Decimal, rate_percent: Decimal) -> SalesResult {
    let tax_amount = amount * rate_percent / dec!(100);
    SalesResult {
        base_amount: amount,
        rate_percent,
        tax_amount,
        total_amount: amount + tax_amount,
    }
}
