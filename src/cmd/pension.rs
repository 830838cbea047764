//! Pension command - monthly pension, commutation and gratuity

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cmd::{json_amount, json_percent};
use crate::money::{format_percent, format_pkr};
use crate::tax::{calculate_pension, PensionResult, PensionType};

#[derive(Args, Debug)]
pub struct PensionCommand {
    /// Last drawn basic pay in PKR
    #[arg(short, long, default_value = "0")]
    basic_pay: Decimal,

    /// Completed years of service
    #[arg(short, long, default_value = "0")]
    years: Decimal,

    /// Service type
    #[arg(short = 't', long, value_enum, default_value_t = PensionTypeArg::Civil)]
    pension_type: PensionTypeArg,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PensionTypeArg {
    #[default]
    Civil,
    Military,
    /// Private sector (EOBI-style flat pension)
    Private,
}

impl From<PensionTypeArg> for PensionType {
    fn from(arg: PensionTypeArg) -> Self {
        match arg {
            PensionTypeArg::Civil => PensionType::Civil,
            PensionTypeArg::Military => PensionType::Military,
            PensionTypeArg::Private => PensionType::Private,
        }
    }
}

/// Pension data for JSON output
#[derive(Debug, Serialize)]
struct PensionData {
    pension_type: String,
    pension_pct: String,
    monthly_pension: String,
    annual_pension: String,
    commutation: String,
    gratuity: String,
}

impl PensionCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let pension_type: PensionType = self.pension_type.into();
        let result = calculate_pension(self.basic_pay, self.years, pension_type);

        if self.json {
            self.print_json(&result)
        } else {
            self.print_text(pension_type, &result);
            Ok(())
        }
    }

    fn print_text(&self, pension_type: PensionType, result: &PensionResult) {
        println!();
        println!("PENSION ({})", self.type_label());
        println!();
        if pension_type != PensionType::Private {
            println!(
                "  Pension Earned: {} of basic pay",
                format_percent(result.pension_percent)
            );
        }
        println!("  Monthly Pension: {}", format_pkr(result.monthly_pension));
        println!("  Annual Pension: {}", format_pkr(result.annual_pension));
        println!("  Commutation: {}", format_pkr(result.commutation));
        println!("  Gratuity: {}", format_pkr(result.gratuity));
        println!();
    }

    fn print_json(&self, result: &PensionResult) -> anyhow::Result<()> {
        let data = PensionData {
            pension_type: self.type_label().to_string(),
            pension_pct: json_percent(result.pension_percent),
            monthly_pension: json_amount(result.monthly_pension),
            annual_pension: json_amount(result.annual_pension),
            commutation: json_amount(result.commutation),
            gratuity: json_amount(result.gratuity),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }

    fn type_label(&self) -> &'static str {
        match self.pension_type {
            PensionTypeArg::Civil => "civil service",
            PensionTypeArg::Military => "military service",
            PensionTypeArg::Private => "private sector",
        }
    }
}
