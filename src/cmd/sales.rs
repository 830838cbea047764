//! Sales command - general sales tax at a fixed or custom rate

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::cmd::{json_amount, json_percent};
use crate::money::{format_percent, format_pkr};
use crate::tax::{calculate_sales_tax, SalesResult};

#[derive(Args, Debug)]
pub struct SalesCommand {
    /// Base amount in PKR
    #[arg(short, long, default_value = "0")]
    amount: Decimal,

    /// Tax rate to apply
    #[arg(short, long, value_enum, default_value_t = RateArg::Standard)]
    rate: RateArg,

    /// Rate percentage when --rate custom is selected
    #[arg(long, default_value = "0")]
    custom_rate: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RateArg {
    /// Standard GST, 18%
    #[default]
    Standard,
    /// Punjab services, 16%
    PunjabServices,
    /// Sindh services, 13%
    SindhServices,
    /// Reduced rate, 5%
    Reduced,
    /// Zero-rated / exempt supplies
    Exempt,
    /// Use --custom-rate
    Custom,
}

impl RateArg {
    fn percent(&self, custom: Decimal) -> Decimal {
        match self {
            RateArg::Standard => dec!(18),
            RateArg::PunjabServices => dec!(16),
            RateArg::SindhServices => dec!(13),
            RateArg::Reduced => dec!(5),
            RateArg::Exempt => Decimal::ZERO,
            RateArg::Custom => custom,
        }
    }
}

/// Sales data for JSON output
#[derive(Debug, Serialize)]
struct SalesData {
    base_amount: String,
    rate_pct: String,
    tax_amount: String,
    total_amount: String,
}

impl SalesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rate = self.rate.percent(self.custom_rate);
        let result = calculate_sales_tax(self.amount, rate);

        if self.json {
            self.print_json(&result)
        } else {
            self.print_text(&result);
            Ok(())
        }
    }

    fn print_text(&self, result: &SalesResult) {
        println!();
        println!("SALES TAX");
        println!();
        println!("  Base Amount: {}", format_pkr(result.base_amount));
        println!(
            "  Tax @ {}: {}",
            format_percent(result.rate_percent),
            format_pkr(result.tax_amount)
        );
        println!("  Total: {}", format_pkr(result.total_amount));
        println!();
    }

    fn print_json(&self, result: &SalesResult) -> anyhow::Result<()> {
        let data = SalesData {
            base_amount: json_amount(result.base_amount),
            rate_pct: json_percent(result.rate_percent),
            tax_amount: json_amount(result.tax_amount),
            total_amount: json_amount(result.total_amount),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}
