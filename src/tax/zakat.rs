//! Zakat on net wealth against the nisab threshold.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Minimum net wealth at which zakat becomes obligatory.
pub const NISAB: Decimal = dec!(503529);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZakatStatus {
    Obligatory,
    NotObligatory,
}

#[derive(Debug, Clone)]
pub struct WealthInput {
    pub cash: Decimal,
    pub gold: Decimal,
    pub silver: Decimal,
    pub investments: Decimal,
    pub debts: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZakatResult {
    pub net_wealth: Decimal,
    pub zakat_amount: Decimal,
    pub status: ZakatStatus,
}

/// Zakat is 2.5% of net wealth once it reaches [`NISAB`].
pub fn calculate_zakat(wealth: &WealthInput) -> ZakatResult {
    let net_wealth =
        wealth.cash + wealth.gold + wealth.silver + wealth.investments - wealth.debts;

    if net_wealth >= NISAB {
        ZakatResult {
            net_wealth,
            zakat_amount: net_wealth * dec!(0.025),
            status: ZakatStatus::Obligatory,
        }
    } else {
        ZakatResult {
            net_wealth,
            zakat_amount: Decimal::ZERO,
            status: ZakatStatus::NotObligatory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::round_rupees;

    fn wealth(cash: Decimal) -> WealthInput {
        WealthInput {
            cash,
            gold: Decimal::ZERO,
            silver: Decimal::ZERO,
            investments: Decimal::ZERO,
            debts: Decimal::ZERO,
        }
    }

    #[test]
    fn below_nisab_not_obligatory() {
        let result = calculate_zakat(&wealth(dec!(503528)));
        assert_eq!(result.status, ZakatStatus::NotObligatory);
        assert_eq!(result.zakat_amount, Decimal::ZERO);
    }

    #[test]
    fn at_nisab_obligatory() {
        let result = calculate_zakat(&wealth(NISAB));
        assert_eq!(result.status, ZakatStatus::Obligatory);
        assert_eq!(result.zakat_amount, dec!(12588.225));
        assert_eq!(round_rupees(result.zakat_amount), dec!(12588));
    }

    #[test]
    fn debts_reduce_net_wealth() {
        let result = calculate_zakat(&WealthInput {
            cash: dec!(300000),
            gold: dec!(250000),
            silver: dec!(10000),
            investments: dec!(50000),
            debts: dec!(110000),
        });
        assert_eq!(result.net_wealth, dec!(500000));
        assert_eq!(result.status, ZakatStatus::NotObligatory);
    }
}
