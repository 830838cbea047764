use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole rupees, half away from zero.
pub fn round_rupees(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Display an amount as whole rupees with thousands separators, e.g. "Rs. 1,234,567"
pub fn format_pkr(amount: Decimal) -> String {
    let rounded = round_rupees(amount);
    let digits = rounded.abs().to_string();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("Rs. -{}", group_thousands(&digits))
    } else {
        format!("Rs. {}", group_thousands(&digits))
    }
}

/// Display a percentage with two decimal places, e.g. "12.50%"
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", value)
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_pkr(dec!(0)), "Rs. 0");
        assert_eq!(format_pkr(dec!(999)), "Rs. 999");
        assert_eq!(format_pkr(dec!(1000)), "Rs. 1,000");
        assert_eq!(format_pkr(dec!(1234567)), "Rs. 1,234,567");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_rupees(dec!(12588.225)), dec!(12588));
        assert_eq!(round_rupees(dec!(499.5)), dec!(500));
        assert_eq!(round_rupees(dec!(-499.5)), dec!(-500));
    }

    #[test]
    fn negative_amounts_keep_sign_after_prefix() {
        assert_eq!(format_pkr(dec!(-3000)), "Rs. -3,000");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(dec!(0.5)), "0.50%");
        assert_eq!(format_percent(dec!(29)), "29.00%");
    }
}
