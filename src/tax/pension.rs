//! Government and private pension entitlements: monthly pension, commutation
//! lump sum and gratuity.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PensionType {
    Civil,
    Military,
    /// Private sector: flat EOBI-style pension after 15 years of service
    Private,
}

#[derive(Debug, Clone, Serialize)]
pub struct PensionResult {
    /// Percentage of basic pay earned, capped at 70
    pub pension_percent: Decimal,
    pub monthly_pension: Decimal,
    pub annual_pension: Decimal,
    pub commutation: Decimal,
    pub gratuity: Decimal,
}

/// Civil and military service earn 2.33% of basic pay per year up to 70%,
/// with a commutation lump sum (35% of the pension for 9.5 years) and a
/// gratuity of one month's basic pay per year served.
pub fn calculate_pension(
    basic_pay: Decimal,
    years_of_service: Decimal,
    pension_type: PensionType,
) -> PensionResult {
    match pension_type {
        PensionType::Civil | PensionType::Military => {
            let pension_percent = (years_of_service * dec!(2.33)).min(dec!(70));
            let monthly_pension = basic_pay * pension_percent / dec!(100);
            PensionResult {
                pension_percent,
                monthly_pension,
                annual_pension: monthly_pension * dec!(12),
                commutation: monthly_pension * dec!(0.35) * dec!(12) * dec!(9.5),
                gratuity: basic_pay * years_of_service,
            }
        }
        PensionType::Private => {
            let monthly_pension = if years_of_service >= dec!(15) {
                dec!(8500)
            } else {
                Decimal::ZERO
            };
            PensionResult {
                pension_percent: Decimal::ZERO,
                monthly_pension,
                annual_pension: monthly_pension * dec!(12),
                commutation: Decimal::ZERO,
                gratuity: Decimal::ZERO,
            }
        }
    }
}
