//! Import duty on mobile devices registered with the PTA.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Default USD/PKR exchange rate when none is supplied.
pub const DEFAULT_USD_RATE: Decimal = dec!(278);

/// Registration channel. The passport channel carries lower rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Passport,
    Cnic,
}

#[derive(Debug, Clone, Serialize)]
pub struct DutyResult {
    pub price_pkr: Decimal,
    /// Flat duty rate selected from the channel's threshold table
    pub rate: Decimal,
    pub tax_amount: Decimal,
    pub total_cost: Decimal,
}

/// Duty on a device priced in USD. Returns `None` for a zero price, which
/// the presentation layer treats as "nothing to show".
pub fn calculate_duty(price_usd: Decimal, usd_rate: Decimal, channel: Channel) -> Option<DutyResult> {
    if price_usd.is_zero() {
        return None;
    }

    let price_pkr = price_usd * usd_rate;

    let rate = match channel {
        Channel::Passport => {
            if price_pkr <= dec!(30000) {
                dec!(0.10)
            } else if price_pkr <= dec!(60000) {
                dec!(0.15)
            } else if price_pkr <= dec!(100000) {
                dec!(0.20)
            } else {
                dec!(0.25)
            }
        }
        Channel::Cnic => {
            if price_pkr <= dec!(50000) {
                dec!(0.15)
            } else if price_pkr <= dec!(100000) {
                dec!(0.20)
            } else if price_pkr <= dec!(200000) {
                dec!(0.25)
            } else {
                dec!(0.30)
            }
        }
    };

    let tax_amount = price_pkr * rate;
    Some(DutyResult {
        price_pkr,
        rate,
        tax_amount,
        total_cost: price_pkr + tax_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_produces_nothing() {
        assert!(calculate_duty(Decimal::ZERO, DEFAULT_USD_RATE, Channel::Passport).is_none());
    }

    #[test]
    fn passport_channel_thresholds() {
        // 100 USD at 278 = 27,800 PKR, lowest passport band
        let result = calculate_duty(dec!(100), DEFAULT_USD_RATE, Channel::Passport).unwrap();
        assert_eq!(result.price_pkr, dec!(27800));
        assert_eq!(result.rate, dec!(0.10));
        assert_eq!(result.tax_amount, dec!(2780));
        assert_eq!(result.total_cost, dec!(30580));

        // Above 100,000 PKR the top rate applies
        let result = calculate_duty(dec!(500), DEFAULT_USD_RATE, Channel::Passport).unwrap();
        assert_eq!(result.rate, dec!(0.25));
    }

    #[test]
    fn cnic_channel_is_dearer() {
        let result = calculate_duty(dec!(100), DEFAULT_USD_RATE, Channel::Cnic).unwrap();
        assert_eq!(result.rate, dec!(0.15));

        let result = calculate_duty(dec!(1000), DEFAULT_USD_RATE, Channel::Cnic).unwrap();
        assert_eq!(result.rate, dec!(0.30));
    }

    #[test]
    fn boundary_price_stays_in_lower_band() {
        // Exactly 30,000 PKR on passport keeps the 10% rate
        let result = calculate_duty(dec!(300), dec!(100), Channel::Passport).unwrap();
        assert_eq!(result.rate, dec!(0.10));
    }
}
