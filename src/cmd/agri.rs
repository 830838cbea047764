//! Agri command - agricultural tax assessed on land holding or income

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cmd::json_amount;
use crate::money::format_pkr;
use crate::tax::{calculate_agri_tax, AgriAssessment, AgriResult, LandType};

#[derive(Args, Debug)]
pub struct AgriCommand {
    /// Assessment method
    #[arg(short, long, value_enum, default_value_t = MethodArg::Land)]
    method: MethodArg,

    /// Land area in acres (land method)
    #[arg(short, long, default_value = "0")]
    area: Decimal,

    /// Land type (land method)
    #[arg(short, long, value_enum, default_value_t = LandTypeArg::Irrigated)]
    land_type: LandTypeArg,

    /// Annual agricultural income in PKR (income method)
    #[arg(short, long, default_value = "0")]
    income: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum MethodArg {
    /// Per-acre rates on the land holding
    #[default]
    Land,
    /// Threshold schedule on agricultural income
    Income,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LandTypeArg {
    /// Rain-fed land, taxed at half rate
    Barani,
    #[default]
    Irrigated,
}

impl From<LandTypeArg> for LandType {
    fn from(arg: LandTypeArg) -> Self {
        match arg {
            LandTypeArg::Barani => LandType::Barani,
            LandTypeArg::Irrigated => LandType::Irrigated,
        }
    }
}

/// Agri data for JSON output
#[derive(Debug, Serialize)]
struct AgriData {
    method: String,
    tax_amount: String,
    explanation: String,
}

impl AgriCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let assessment = match self.method {
            MethodArg::Land => AgriAssessment::Land {
                area_acres: self.area,
                land_type: self.land_type.into(),
            },
            MethodArg::Income => AgriAssessment::Income {
                amount: self.income,
            },
        };
        let result = calculate_agri_tax(&assessment);

        if self.json {
            self.print_json(&result)
        } else {
            self.print_text(&result);
            Ok(())
        }
    }

    fn print_text(&self, result: &AgriResult) {
        println!();
        println!("AGRICULTURAL TAX ({})", self.method_label());
        println!();
        println!("  Tax: {}", format_pkr(result.tax_amount));
        println!("  {}", result.explanation);
        println!();
    }

    fn print_json(&self, result: &AgriResult) -> anyhow::Result<()> {
        let data = AgriData {
            method: self.method_label().to_string(),
            tax_amount: json_amount(result.tax_amount),
            explanation: result.explanation.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }

    fn method_label(&self) -> &'static str {
        match self.method {
            MethodArg::Land => "land-based",
            MethodArg::Income => "income-based",
        }
    }
}
