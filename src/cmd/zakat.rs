//! Zakat command - net wealth against the nisab threshold

use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cmd::json_amount;
use crate::money::format_pkr;
use crate::tax::{calculate_zakat, WealthInput, ZakatResult, ZakatStatus, NISAB};

#[derive(Args, Debug)]
pub struct ZakatCommand {
    /// Cash and bank balances in PKR
    #[arg(short, long, default_value = "0")]
    cash: Decimal,

    /// Value of gold held in PKR
    #[arg(short, long, default_value = "0")]
    gold: Decimal,

    /// Value of silver held in PKR
    #[arg(short, long, default_value = "0")]
    silver: Decimal,

    /// Value of investments in PKR
    #[arg(short, long, default_value = "0")]
    investments: Decimal,

    /// Outstanding debts in PKR
    #[arg(short, long, default_value = "0")]
    debts: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Zakat data for JSON output
#[derive(Debug, Serialize)]
struct ZakatData {
    net_wealth: String,
    nisab: String,
    zakat_amount: String,
    status: ZakatStatus,
}

impl ZakatCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result = calculate_zakat(&WealthInput {
            cash: self.cash,
            gold: self.gold,
            silver: self.silver,
            investments: self.investments,
            debts: self.debts,
        });

        if self.json {
            self.print_json(&result)
        } else {
            self.print_text(&result);
            Ok(())
        }
    }

    fn print_text(&self, result: &ZakatResult) {
        println!();
        println!("ZAKAT CALCULATION");
        println!();
        println!("  Net Wealth: {}", format_pkr(result.net_wealth));
        println!("  Zakat Due: {}", format_pkr(result.zakat_amount));
        println!();
        match result.status {
            ZakatStatus::Obligatory => {
                println!("  You are liable to pay Zakat: your wealth exceeds the Nisab threshold");
            }
            ZakatStatus::NotObligatory => {
                println!(
                    "  Zakat not obligatory: your wealth is below the Nisab threshold ({})",
                    format_pkr(NISAB)
                );
            }
        }
        println!();
    }

    fn print_json(&self, result: &ZakatResult) -> anyhow::Result<()> {
        let data = ZakatData {
            net_wealth: json_amount(result.net_wealth),
            nisab: json_amount(NISAB),
            zakat_amount: json_amount(result.zakat_amount),
            status: result.status,
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}
