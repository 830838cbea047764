//! Duty command - import duty for PTA mobile device registration

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::cmd::json_amount;
use crate::money::format_pkr;
use crate::tax::{calculate_duty, Channel, DutyResult, DEFAULT_USD_RATE};

#[derive(Args, Debug)]
pub struct DutyCommand {
    /// Device price in USD
    #[arg(short, long, default_value = "0")]
    price: Decimal,

    /// USD to PKR exchange rate
    #[arg(short, long, default_value_t = DEFAULT_USD_RATE)]
    usd_rate: Decimal,

    /// Registration channel
    #[arg(short, long, value_enum, default_value_t = ChannelArg::Passport)]
    channel: ChannelArg,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ChannelArg {
    #[default]
    Passport,
    Cnic,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Passport => Channel::Passport,
            ChannelArg::Cnic => Channel::Cnic,
        }
    }
}

/// Duty data for JSON output
#[derive(Debug, Serialize)]
struct DutyData {
    channel: String,
    price_pkr: String,
    duty_rate_pct: String,
    tax_amount: String,
    total_cost: String,
}

impl DutyCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let channel: Channel = self.channel.into();
        let Some(result) = calculate_duty(self.price, self.usd_rate, channel) else {
            println!("Nothing to calculate: device price is zero");
            return Ok(());
        };

        if self.json {
            self.print_json(channel, &result)
        } else {
            self.print_text(channel, &result);
            Ok(())
        }
    }

    fn print_text(&self, channel: Channel, result: &DutyResult) {
        let channel_str = channel_label(channel);
        println!();
        println!("MOBILE IMPORT DUTY ({})", channel_str);
        println!();
        println!("  Device Price: {}", format_pkr(result.price_pkr));
        println!(
            "  Duty @ {:.0}%: {}",
            result.rate * dec!(100),
            format_pkr(result.tax_amount)
        );
        println!("  Total Cost: {}", format_pkr(result.total_cost));
        println!();
    }

    fn print_json(&self, channel: Channel, result: &DutyResult) -> anyhow::Result<()> {
        let data = DutyData {
            channel: channel_label(channel).to_string(),
            price_pkr: json_amount(result.price_pkr),
            duty_rate_pct: format!("{:.0}", result.rate * dec!(100)),
            tax_amount: json_amount(result.tax_amount),
            total_cost: json_amount(result.total_cost),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

fn channel_label(channel: Channel) -> &'static str {
    match channel {
        Channel::Passport => "passport",
        Channel::Cnic => "cnic",
    }
}
