use clap::{Parser, Subcommand};

mod cmd;
mod money;
mod tax;

#[derive(Parser, Debug)]
#[command(name = "paktax", version, about = "Pakistan tax calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Salary income tax with deductions and slab breakdown
    Salary(cmd::salary::SalaryCommand),
    /// Import duty for PTA mobile device registration
    Duty(cmd::duty::DutyCommand),
    /// Business income tax by entity type
    Business(cmd::business::BusinessCommand),
    /// Zakat on net wealth
    Zakat(cmd::zakat::ZakatCommand),
    /// Agricultural tax on land holding or income
    Agri(cmd::agri::AgriCommand),
    /// General sales tax
    Sales(cmd::sales::SalesCommand),
    /// Annual property tax and transaction charges
    Property(cmd::property::PropertyCommand),
    /// Pension, commutation and gratuity
    Pension(cmd::pension::PensionCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Salary(cmd) => cmd.exec(),
        Command::Duty(cmd) => cmd.exec(),
        Command::Business(cmd) => cmd.exec(),
        Command::Zakat(cmd) => cmd.exec(),
        Command::Agri(cmd) => cmd.exec(),
        Command::Sales(cmd) => cmd.exec(),
        Command::Property(cmd) => cmd.exec(),
        Command::Pension(cmd) => cmd.exec(),
    }
}
