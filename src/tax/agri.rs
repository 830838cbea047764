//! Agricultural tax: either land-based (per-acre rates) or income-based
//! (threshold schedule), selected by the caller.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LandType {
    /// Rain-fed land, taxed at half the per-acre rate
    Barani,
    Irrigated,
}

/// Assessment basis. The two modes are mutually exclusive.
#[derive(Debug, Clone)]
pub enum AgriAssessment {
    Land {
        area_acres: Decimal,
        land_type: LandType,
    },
    Income {
        amount: Decimal,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct AgriResult {
    pub tax_amount: Decimal,
    /// Which rule fired, in the words shown to the user
    pub explanation: String,
}

/// The per-acre rate is chosen by the whole area and applied to the whole
/// area (flat, not marginal); the income schedule is marginal over its
/// thresholds.
pub fn calculate_agri_tax(assessment: &AgriAssessment) -> AgriResult {
    match assessment {
        AgriAssessment::Land {
            area_acres,
            land_type,
        } => {
            let area = *area_acres;
            let (tax, explanation) = if area <= dec!(12.5) {
                (
                    Decimal::ZERO,
                    "Land area below taxable threshold (12.5 acres). Tax exempt.".to_string(),
                )
            } else if area <= dec!(25) {
                (area * dec!(300), format!("{} acres × Rs. 300 per acre", area))
            } else if area <= dec!(50) {
                (area * dec!(450), format!("{} acres × Rs. 450 per acre", area))
            } else {
                (area * dec!(600), format!("{} acres × Rs. 600 per acre", area))
            };

            if *land_type == LandType::Barani {
                AgriResult {
                    tax_amount: tax * dec!(0.5),
                    explanation: format!("{} (50% reduction for Barani land)", explanation),
                }
            } else {
                AgriResult {
                    tax_amount: tax,
                    explanation,
                }
            }
        }
        AgriAssessment::Income { amount } => {
            let income = *amount;
            let (tax, explanation) = if income <= dec!(400000) {
                (
                    Decimal::ZERO,
                    "Income below Rs. 400,000 is tax exempt.".to_string(),
                )
            } else if income <= dec!(800000) {
                (
                    (income - dec!(400000)) * dec!(0.05),
                    "5% on income above Rs. 400,000".to_string(),
                )
            } else if income <= dec!(1200000) {
                (
                    dec!(20000) + (income - dec!(800000)) * dec!(0.10),
                    "Rs. 20,000 + 10% on income above Rs. 800,000".to_string(),
                )
            } else {
                (
                    dec!(60000) + (income - dec!(1200000)) * dec!(0.15),
                    "Rs. 60,000 + 15% on income above Rs. 1,200,000".to_string(),
                )
            };

            AgriResult {
                tax_amount: tax,
                explanation,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn land(area: Decimal, land_type: LandType) -> AgriAssessment {
        AgriAssessment::Land {
            area_acres: area,
            land_type,
        }
    }

    #[test]
    fn small_holdings_exempt() {
        let result = calculate_agri_tax(&land(dec!(12.5), LandType::Irrigated));
        assert_eq!(result.tax_amount, Decimal::ZERO);
        assert!(result.explanation.contains("exempt"));
    }

    #[test]
    fn per_acre_rate_applies_to_whole_area() {
        let result = calculate_agri_tax(&land(dec!(20), LandType::Irrigated));
        assert_eq!(result.tax_amount, dec!(6000));
        assert_eq!(result.explanation, "20 acres × Rs. 300 per acre");

        let result = calculate_agri_tax(&land(dec!(40), LandType::Irrigated));
        assert_eq!(result.tax_amount, dec!(18000));

        let result = calculate_agri_tax(&land(dec!(60), LandType::Irrigated));
        assert_eq!(result.tax_amount, dec!(36000));
    }

    #[test]
    fn barani_land_halves_the_tax() {
        let result = calculate_agri_tax(&land(dec!(20), LandType::Barani));
        assert_eq!(result.tax_amount, dec!(3000));
        assert!(result.explanation.contains("Barani"));
    }

    #[test]
    fn income_schedule_thresholds() {
        let income = |amount| AgriAssessment::Income { amount };

        assert_eq!(
            calculate_agri_tax(&income(dec!(400000))).tax_amount,
            Decimal::ZERO
        );
        // 5% of 200,000
        assert_eq!(
            calculate_agri_tax(&income(dec!(600000))).tax_amount,
            dec!(10000)
        );
        // 20,000 + 10% of 200,000
        assert_eq!(
            calculate_agri_tax(&income(dec!(1000000))).tax_amount,
            dec!(40000)
        );
        // 60,000 + 15% of 800,000
        assert_eq!(
            calculate_agri_tax(&income(dec!(2000000))).tax_amount,
            dec!(180000)
        );
    }
}
