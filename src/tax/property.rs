//! Annual property tax by city and use, plus the flat transaction charges
//! (capital gains tax and stamp duty) reported with every valuation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Residential,
    Commercial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Lahore,
    Islamabad,
    Karachi,
    Other,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyResult {
    /// Annual tax rate as a fraction, from the city/type lookup
    pub annual_rate: Decimal,
    pub annual_tax: Decimal,
    /// Flat 10% capital gains tax, reported regardless of any sale
    pub capital_gains_tax: Decimal,
    /// Flat 2% stamp duty, likewise unconditional
    pub stamp_duty: Decimal,
}

pub fn calculate_property_tax(
    value: Decimal,
    city: City,
    property_type: PropertyType,
) -> PropertyResult {
    let annual_rate = match (city, property_type) {
        (City::Lahore | City::Islamabad, PropertyType::Commercial) => dec!(0.008),
        (City::Lahore | City::Islamabad, PropertyType::Residential) => dec!(0.003),
        (City::Karachi, PropertyType::Commercial) => dec!(0.01),
        (City::Karachi, PropertyType::Residential) => dec!(0.004),
        (City::Other, PropertyType::Commercial) => dec!(0.006),
        (City::Other, PropertyType::Residential) => dec!(0.0025),
    };

    PropertyResult {
        annual_rate,
        annual_tax: value * annual_rate,
        capital_gains_tax: value * dec!(0.10),
        stamp_duty: value * dec!(0.02),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn karachi_commercial() {
        let result = calculate_property_tax(dec!(10000000), City::Karachi, PropertyType::Commercial);
        assert_eq!(result.annual_tax, dec!(100000));
        assert_eq!(result.capital_gains_tax, dec!(1000000));
        assert_eq!(result.stamp_duty, dec!(200000));
    }

    #[test]
    fn lahore_and_islamabad_share_rates() {
        let lahore = calculate_property_tax(dec!(5000000), City::Lahore, PropertyType::Residential);
        let islamabad =
            calculate_property_tax(dec!(5000000), City::Islamabad, PropertyType::Residential);
        assert_eq!(lahore.annual_tax, islamabad.annual_tax);
        assert_eq!(lahore.annual_tax, dec!(15000));
    }

    #[test]
    fn other_cities_use_the_default_rates() {
        let result = calculate_property_tax(dec!(4000000), City::Other, PropertyType::Residential);
        assert_eq!(result.annual_rate, dec!(0.0025));
        assert_eq!(result.annual_tax, dec!(10000));

        let result = calculate_property_tax(dec!(4000000), City::Other, PropertyType::Commercial);
        assert_eq!(result.annual_tax, dec!(24000));
    }

    #[test]
    fn transaction_charges_ignore_city_and_type() {
        let a = calculate_property_tax(dec!(1000000), City::Karachi, PropertyType::Commercial);
        let b = calculate_property_tax(dec!(1000000), City::Other, PropertyType::Residential);
        assert_eq!(a.capital_gains_tax, b.capital_gains_tax);
        assert_eq!(a.stamp_duty, b.stamp_duty);
    }
}
