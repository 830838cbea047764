//! Progressive income tax schedule for salaried and individual business income.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::money::round_rupees;

/// Annual income above which the 9% surcharge applies.
pub const SURCHARGE_THRESHOLD: Decimal = dec!(10000000);

/// One line of the slab-by-slab tax breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct SlabLine {
    /// Slab description, e.g. "Next Rs. 1,000,000 (Rs. 1.2M - 2.2M)"
    pub slab: String,
    /// Taxable amount allocated to this slab
    pub amount: Decimal,
    /// Marginal rate as a display string, e.g. "11%"
    pub rate: String,
    /// Tax for this slab, rounded for display
    pub tax: Decimal,
}

struct Slab {
    /// Width of the band; `None` for the unbounded top band
    width: Option<Decimal>,
    rate: Decimal,
    label: &'static str,
}

fn slabs() -> [Slab; 6] {
    [
        Slab {
            width: Some(dec!(600000)),
            rate: dec!(0),
            label: "First Rs. 600,000",
        },
        Slab {
            width: Some(dec!(600000)),
            rate: dec!(0.01),
            label: "Next Rs. 600,000 (Rs. 600K - 1.2M)",
        },
        Slab {
            width: Some(dec!(1000000)),
            rate: dec!(0.11),
            label: "Next Rs. 1,000,000 (Rs. 1.2M - 2.2M)",
        },
        Slab {
            width: Some(dec!(1000000)),
            rate: dec!(0.23),
            label: "Next Rs. 1,000,000 (Rs. 2.2M - 3.2M)",
        },
        Slab {
            width: Some(dec!(900000)),
            rate: dec!(0.30),
            label: "Next Rs. 900,000 (Rs. 3.2M - 4.1M)",
        },
        Slab {
            width: None,
            rate: dec!(0.35),
            label: "Above Rs. 4.1M",
        },
    ]
}

/// Annual income tax under the fixed six-band schedule.
///
/// Income at a band boundary is taxed in the lower band. Income above
/// [`SURCHARGE_THRESHOLD`] carries a 9% surcharge on the computed tax.
/// The result is rounded to whole rupees.
pub fn calculate_income_tax(annual_income: Decimal) -> Decimal {
    let tax = if annual_income <= dec!(600000) {
        Decimal::ZERO
    } else if annual_income <= dec!(1200000) {
        (annual_income - dec!(600000)) * dec!(0.01)
    } else if annual_income <= dec!(2200000) {
        dec!(6000) + (annual_income - dec!(1200000)) * dec!(0.11)
    } else if annual_income <= dec!(3200000) {
        dec!(116000) + (annual_income - dec!(2200000)) * dec!(0.23)
    } else if annual_income <= dec!(4100000) {
        dec!(346000) + (annual_income - dec!(3200000)) * dec!(0.30)
    } else {
        dec!(616000) + (annual_income - dec!(4100000)) * dec!(0.35)
    };

    let tax = if annual_income > SURCHARGE_THRESHOLD {
        log::debug!(
            "income {} above {}, applying 9% surcharge to {}",
            annual_income,
            SURCHARGE_THRESHOLD,
            tax
        );
        tax + tax * dec!(0.09)
    } else {
        tax
    };

    round_rupees(tax)
}

/// Decompose income across the slabs, one line per slab that receives a
/// positive allocation.
///
/// Per-line tax amounts are rounded independently, so their sum can differ
/// from [`calculate_income_tax`] by a rupee. The >10M surcharge is not part
/// of the slab decomposition and is never reflected here.
pub fn slab_breakdown(annual_income: Decimal) -> Vec<SlabLine> {
    let mut breakdown = Vec::new();
    let mut remaining = annual_income;

    for slab in slabs() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable = match slab.width {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        let tax = taxable * slab.rate;

        if taxable > Decimal::ZERO {
            log::debug!(
                "slab '{}': taxable={}, rate={}, tax={}",
                slab.label,
                taxable,
                slab.rate,
                tax
            );
            breakdown.push(SlabLine {
                slab: slab.label.to_string(),
                amount: taxable,
                rate: format!("{:.0}%", slab.rate * dec!(100)),
                tax: round_rupees(tax),
            });
        }

        remaining -= taxable;
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tax_up_to_600k() {
        assert_eq!(calculate_income_tax(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(calculate_income_tax(dec!(600000)), Decimal::ZERO);
    }

    #[test]
    fn tax_at_band_boundaries() {
        // Boundary income belongs to the lower band
        assert_eq!(calculate_income_tax(dec!(1200000)), dec!(6000));
        assert_eq!(calculate_income_tax(dec!(2200000)), dec!(116000));
        assert_eq!(calculate_income_tax(dec!(3200000)), dec!(346000));
        assert_eq!(calculate_income_tax(dec!(4100000)), dec!(616000));
    }

    #[test]
    fn marginal_rate_within_band() {
        // 1.5M: 6,000 + 11% of 300,000
        assert_eq!(calculate_income_tax(dec!(1500000)), dec!(39000));
        // 5M: 616,000 + 35% of 900,000
        assert_eq!(calculate_income_tax(dec!(5000000)), dec!(931000));
    }

    #[test]
    fn surcharge_above_10m() {
        // No surcharge at exactly 10M
        assert_eq!(calculate_income_tax(dec!(10000000)), dec!(2681000));
        // One rupee above: (616,000 + 0.35 * 5,900,001) * 1.09
        assert_eq!(calculate_income_tax(dec!(10000001)), dec!(2922290));
    }

    #[test]
    fn negative_taxable_income_is_exempt() {
        // Business path can feed a loss straight into the schedule
        assert_eq!(calculate_income_tax(dec!(-50000)), Decimal::ZERO);
    }

    #[test]
    fn schedule_is_monotonic() {
        let samples = [
            dec!(0),
            dec!(599999),
            dec!(600000),
            dec!(600001),
            dec!(1200000),
            dec!(2200000),
            dec!(3200000),
            dec!(4100000),
            dec!(9999999),
            dec!(10000001),
            dec!(20000000),
        ];
        for pair in samples.windows(2) {
            assert!(
                calculate_income_tax(pair[0]) <= calculate_income_tax(pair[1]),
                "tax decreased between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn breakdown_allocates_full_income() {
        let lines = slab_breakdown(dec!(1500000));
        assert_eq!(lines.len(), 3);
        let allocated: Decimal = lines.iter().map(|l| l.amount).sum();
        assert_eq!(allocated, dec!(1500000));

        let line_tax: Decimal = lines.iter().map(|l| l.tax).sum();
        let total = calculate_income_tax(dec!(1500000));
        assert!((line_tax - total).abs() <= Decimal::ONE);
    }

    #[test]
    fn breakdown_rates_are_display_strings() {
        let lines = slab_breakdown(dec!(1500000));
        assert_eq!(lines[0].rate, "0%");
        assert_eq!(lines[1].rate, "1%");
        assert_eq!(lines[2].rate, "11%");
    }

    #[test]
    fn breakdown_never_applies_surcharge() {
        let lines = slab_breakdown(dec!(12000000));
        let line_tax: Decimal = lines.iter().map(|l| l.tax).sum();
        // 616,000 + 35% of 7.9M, no 9% surcharge on top
        assert_eq!(line_tax, dec!(3381000));
    }

    #[test]
    fn breakdown_empty_for_zero_income() {
        assert!(slab_breakdown(Decimal::ZERO).is_empty());
    }
}
