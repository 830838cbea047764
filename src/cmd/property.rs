//! Property command - annual property tax plus transaction charges

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::cmd::json_amount;
use crate::money::format_pkr;
use crate::tax::{calculate_property_tax, City, PropertyResult, PropertyType};

#[derive(Args, Debug)]
pub struct PropertyCommand {
    /// Property value in PKR
    #[arg(short, long, default_value = "0")]
    value: Decimal,

    /// City where the property is located
    #[arg(short, long, value_enum, default_value_t = CityArg::Lahore)]
    city: CityArg,

    /// Property use
    #[arg(short = 't', long = "type", value_enum, default_value_t = PropertyTypeArg::Residential)]
    property_type: PropertyTypeArg,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CityArg {
    #[default]
    Lahore,
    Islamabad,
    Karachi,
    Other,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PropertyTypeArg {
    #[default]
    Residential,
    Commercial,
}

impl From<CityArg> for City {
    fn from(arg: CityArg) -> Self {
        match arg {
            CityArg::Lahore => City::Lahore,
            CityArg::Islamabad => City::Islamabad,
            CityArg::Karachi => City::Karachi,
            CityArg::Other => City::Other,
        }
    }
}

impl From<PropertyTypeArg> for PropertyType {
    fn from(arg: PropertyTypeArg) -> Self {
        match arg {
            PropertyTypeArg::Residential => PropertyType::Residential,
            PropertyTypeArg::Commercial => PropertyType::Commercial,
        }
    }
}

/// Property data for JSON output
#[derive(Debug, Serialize)]
struct PropertyData {
    annual_rate_pct: String,
    annual_tax: String,
    capital_gains_tax: String,
    stamp_duty: String,
}

impl PropertyCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result =
            calculate_property_tax(self.value, self.city.into(), self.property_type.into());

        if self.json {
            self.print_json(&result)
        } else {
            self.print_text(&result);
            Ok(())
        }
    }

    fn print_text(&self, result: &PropertyResult) {
        println!();
        println!("PROPERTY TAX");
        println!();
        println!(
            "  Annual Tax @ {}%: {}",
            (result.annual_rate * dec!(100)).normalize(),
            format_pkr(result.annual_tax)
        );
        println!();
        println!("TRANSACTION CHARGES (flat, independent of any sale)");
        println!(
            "  Capital Gains Tax (10%): {}",
            format_pkr(result.capital_gains_tax)
        );
        println!("  Stamp Duty (2%): {}", format_pkr(result.stamp_duty));
        println!();
    }

    fn print_json(&self, result: &PropertyResult) -> anyhow::Result<()> {
        let data = PropertyData {
            annual_rate_pct: (result.annual_rate * dec!(100)).normalize().to_string(),
            annual_tax: json_amount(result.annual_tax),
            capital_gains_tax: json_amount(result.capital_gains_tax),
            stamp_duty: json_amount(result.stamp_duty),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}
