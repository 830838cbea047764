//! Business command - tax on business income by entity type

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cmd::{json_amount, json_percent};
use crate::money::{format_percent, format_pkr};
use crate::tax::{calculate_business_tax, BusinessResult, EntityType};

#[derive(Args, Debug)]
pub struct BusinessCommand {
    /// Annual business income in PKR
    #[arg(short, long, default_value = "0")]
    income: Decimal,

    /// Annual business expenses in PKR
    #[arg(short, long, default_value = "0")]
    expenses: Decimal,

    /// Entity type
    #[arg(short = 't', long, value_enum, default_value_t = EntityTypeArg::Individual)]
    entity_type: EntityTypeArg,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum EntityTypeArg {
    #[default]
    Individual,
    /// Association of persons
    Aop,
    Company,
    /// Public limited company
    Public,
}

impl From<EntityTypeArg> for EntityType {
    fn from(arg: EntityTypeArg) -> Self {
        match arg {
            EntityTypeArg::Individual => EntityType::Individual,
            EntityTypeArg::Aop => EntityType::Aop,
            EntityTypeArg::Company => EntityType::Company,
            EntityTypeArg::Public => EntityType::Public,
        }
    }
}

/// Business data for JSON output
#[derive(Debug, Serialize)]
struct BusinessData {
    entity_type: String,
    taxable_income: String,
    tax_amount: String,
    net_profit: String,
    effective_rate_pct: String,
}

impl BusinessCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let entity_type: EntityType = self.entity_type.into();
        let result = calculate_business_tax(self.income, self.expenses, entity_type);

        if self.json {
            self.print_json(&result)
        } else {
            self.print_text(&result);
            Ok(())
        }
    }

    fn print_text(&self, result: &BusinessResult) {
        println!();
        println!("BUSINESS TAX ({})", self.entity_label());
        println!();
        println!("  Taxable Income: {}", format_pkr(result.taxable_income));
        println!("  Tax: {}", format_pkr(result.tax_amount));
        println!("  Net Profit: {}", format_pkr(result.net_profit));
        println!(
            "  Effective Rate: {}",
            format_percent(result.effective_rate)
        );
        println!();
    }

    fn print_json(&self, result: &BusinessResult) -> anyhow::Result<()> {
        let data = BusinessData {
            entity_type: self.entity_label().to_string(),
            taxable_income: json_amount(result.taxable_income),
            tax_amount: json_amount(result.tax_amount),
            net_profit: json_amount(result.net_profit),
            effective_rate_pct: json_percent(result.effective_rate),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }

    fn entity_label(&self) -> &'static str {
        match self.entity_type {
            EntityTypeArg::Individual => "individual",
            EntityTypeArg::Aop => "association of persons",
            EntityTypeArg::Company => "company",
            EntityTypeArg::Public => "public company",
        }
    }
}
