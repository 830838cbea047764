//! Business income tax by entity type.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::money::round_rupees;
use crate::tax::income::calculate_income_tax;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// Sole proprietor, taxed on the individual schedule
    Individual,
    /// Association of persons: exempt up to 400,000, flat 25% above
    Aop,
    /// Private limited company, flat 29%
    Company,
    /// Public limited company, flat 29%
    Public,
}

#[derive(Debug, Clone, Serialize)]
pub struct BusinessResult {
    /// Income less expenses; may be negative, deliberately not clamped
    pub taxable_income: Decimal,
    pub tax_amount: Decimal,
    pub net_profit: Decimal,
    pub effective_rate: Decimal,
}

pub fn calculate_business_tax(
    income: Decimal,
    expenses: Decimal,
    entity_type: EntityType,
) -> BusinessResult {
    let taxable_income = income - expenses;

    let tax_amount = match entity_type {
        EntityType::Individual => calculate_income_tax(taxable_income),
        EntityType::Aop => {
            if taxable_income <= dec!(400000) {
                Decimal::ZERO
            } else {
                round_rupees(taxable_income * dec!(0.25))
            }
        }
        EntityType::Company | EntityType::Public => round_rupees(taxable_income * dec!(0.29)),
    };

    let effective_rate = if taxable_income > Decimal::ZERO {
        (tax_amount / taxable_income * dec!(100)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    BusinessResult {
        taxable_income,
        tax_amount,
        net_profit: taxable_income - tax_amount,
        effective_rate,
    }
}
