//! Salary command - net pay, deductions, slab breakdown and monthly split

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cmd::{json_amount, json_percent};
use crate::money::{format_percent, format_pkr};
use crate::tax::{calculate_salary, Province, SalaryInput, SalaryResult};

#[derive(Args, Debug)]
pub struct SalaryCommand {
    /// Monthly gross salary in PKR
    #[arg(short, long, default_value = "0")]
    monthly_salary: Decimal,

    /// Annual bonus in PKR
    #[arg(short = 'b', long, default_value = "0")]
    annual_bonus: Decimal,

    /// Include the EOBI contribution (1% of salary, capped at Rs. 200)
    #[arg(long)]
    eobi: bool,

    /// Include the provincial social security contribution
    #[arg(long)]
    social_security: bool,

    /// Provident fund contribution as a percentage of salary
    #[arg(long, default_value = "0")]
    provident_fund: Decimal,

    /// Province of employment
    #[arg(short, long, value_enum, default_value_t = ProvinceArg::Punjab)]
    province: ProvinceArg,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Output the slab breakdown as CSV
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ProvinceArg {
    Sindh,
    #[default]
    Punjab,
    Kpk,
    Balochistan,
    Islamabad,
}

impl From<ProvinceArg> for Province {
    fn from(arg: ProvinceArg) -> Self {
        match arg {
            ProvinceArg::Sindh => Province::Sindh,
            ProvinceArg::Punjab => Province::Punjab,
            ProvinceArg::Kpk => Province::Kpk,
            ProvinceArg::Balochistan => Province::Balochistan,
            ProvinceArg::Islamabad => Province::Islamabad,
        }
    }
}

/// Salary data for JSON output
#[derive(Debug, Serialize)]
struct SalaryData {
    gross_annual: String,
    taxable_income: String,
    annual_tax: String,
    monthly_tax: String,
    net_monthly: String,
    effective_rate_pct: String,
    deductions: DeductionsData,
    monthly_split: SplitData,
    breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Serialize)]
struct DeductionsData {
    eobi: String,
    social_security: String,
    provident_fund: String,
    professional_tax: String,
}

#[derive(Debug, Serialize)]
struct SplitData {
    tax: String,
    other_deductions: String,
    net: String,
}

#[derive(Debug, Serialize)]
struct BreakdownEntry {
    slab: String,
    taxable: String,
    rate: String,
    tax: String,
}

/// Row for the slab breakdown table
#[derive(Tabled)]
struct SlabRow {
    #[tabled(rename = "Slab")]
    slab: String,
    #[tabled(rename = "Taxable")]
    taxable: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Tax")]
    tax: String,
}

impl SalaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = SalaryInput {
            monthly_salary: self.monthly_salary,
            annual_bonus: self.annual_bonus,
            include_eobi: self.eobi,
            include_social_security: self.social_security,
            provident_fund_percent: self.provident_fund,
            province: self.province.into(),
        };
        let result = calculate_salary(&input);

        if self.csv {
            self.write_csv(&result)
        } else if self.json {
            self.print_json(&result)
        } else {
            self.print_text(&input, &result);
            Ok(())
        }
    }

    fn print_text(&self, input: &SalaryInput, result: &SalaryResult) {
        println!();
        println!("SALARY TAX SUMMARY ({})", province_label(input.province));
        println!();
        println!(
            "  Gross Annual: {} | Taxable: {}",
            format_pkr(result.gross_annual),
            format_pkr(result.taxable_income)
        );
        println!(
            "  Annual Tax: {} | Monthly Tax: {}",
            format_pkr(result.annual_tax),
            format_pkr(result.monthly_tax)
        );
        println!("  Net Monthly Salary: {}", format_pkr(result.net_monthly));
        println!(
            "  Effective Rate: {}",
            format_percent(result.effective_rate)
        );
        println!();

        println!("DEDUCTIONS (monthly)");
        println!(
            "  EOBI: {} | Social Security: {}",
            format_pkr(result.deductions.eobi),
            format_pkr(result.deductions.social_security)
        );
        println!(
            "  Provident Fund: {} | Professional Tax: {}",
            format_pkr(result.deductions.provident_fund),
            format_pkr(result.deductions.professional_tax)
        );
        println!();

        println!("MONTHLY SPLIT");
        let split = &result.split;
        println!(
            "  Income Tax: {}{} | Other Deductions: {}{} | Net Salary: {}{}",
            format_pkr(split.tax),
            share_of(split.tax, input.monthly_salary),
            format_pkr(split.other_deductions),
            share_of(split.other_deductions, input.monthly_salary),
            format_pkr(split.net),
            share_of(split.net, input.monthly_salary),
        );
        println!();

        if !result.breakdown.is_empty() {
            println!("SLAB BREAKDOWN (taxable income)");
            let rows: Vec<SlabRow> = result
                .breakdown
                .iter()
                .map(|line| SlabRow {
                    slab: line.slab.clone(),
                    taxable: format_pkr(line.amount),
                    rate: line.rate.clone(),
                    tax: format_pkr(line.tax),
                })
                .collect();
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
            println!();
        }
    }

    fn print_json(&self, result: &SalaryResult) -> anyhow::Result<()> {
        let data = SalaryData {
            gross_annual: json_amount(result.gross_annual),
            taxable_income: json_amount(result.taxable_income),
            annual_tax: json_amount(result.annual_tax),
            monthly_tax: json_amount(result.monthly_tax),
            net_monthly: json_amount(result.net_monthly),
            effective_rate_pct: json_percent(result.effective_rate),
            deductions: DeductionsData {
                eobi: json_amount(result.deductions.eobi),
                social_security: json_amount(result.deductions.social_security),
                provident_fund: json_amount(result.deductions.provident_fund),
                professional_tax: json_amount(result.deductions.professional_tax),
            },
            monthly_split: SplitData {
                tax: json_amount(result.split.tax),
                other_deductions: json_amount(result.split.other_deductions),
                net: json_amount(result.split.net),
            },
            breakdown: result
                .breakdown
                .iter()
                .map(|line| BreakdownEntry {
                    slab: line.slab.clone(),
                    taxable: json_amount(line.amount),
                    rate: line.rate.clone(),
                    tax: json_amount(line.tax),
                })
                .collect(),
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }

    fn write_csv(&self, result: &SalaryResult) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for line in &result.breakdown {
            wtr.serialize(line)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn province_label(province: Province) -> &'static str {
    match province {
        Province::Sindh => "Sindh",
        Province::Punjab => "Punjab",
        Province::Kpk => "KPK",
        Province::Balochistan => "Balochistan",
        Province::Islamabad => "Islamabad",
    }
}

/// " (12.34%)" suffix for the monthly split, blank when the salary is zero.
fn share_of(part: Decimal, whole: Decimal) -> String {
    if whole.is_zero() {
        String::new()
    } else {
        format!(" ({})", format_percent((part / whole * dec!(100)).round_dp(2)))
    }
}
