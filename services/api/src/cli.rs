use crate::demo::{
    run_compare, run_demo, run_eligibility, run_list, run_tax, CompareArgs, DemoArgs,
    EligibilityArgs, ListArgs, TaxArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use relocation_tools::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Relocation Tools",
    about = "Estimate tax savings, check Golden Visa eligibility, and compare UAE free zones",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate home-country tax and the savings from relocating
    Tax(TaxArgs),
    /// Check residency pathways for a profile
    Eligibility(EligibilityArgs),
    /// Browse and compare free zones
    FreeZones {
        #[command(subcommand)]
        command: FreeZonesCommand,
    },
    /// Walk through every tool with sample inputs
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum FreeZonesCommand {
    /// List free zones matching the filters
    List(ListArgs),
    /// Compare up to three free zones side by side
    Compare(CompareArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Tax(args) => run_tax(args),
        Command::Eligibility(args) => run_eligibility(args),
        Command::FreeZones {
            command: FreeZonesCommand::List(args),
        } => run_list(args),
        Command::FreeZones {
            command: FreeZonesCommand::Compare(args),
        } => run_compare(args),
        Command::Demo(args) => run_demo(args),
    }
}
