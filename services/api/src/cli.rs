use crate::demo::{run_demo, run_eligibility, run_estimate, DemoArgs, EligibilityArgs, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nova_admissions::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Nova Admissions",
    about = "Estimate ECTS credits and score admission readiness for study in Germany",
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
    /// Estimate the ECTS equivalent of a foreign degree
    Ects(EstimateArgs),
    /// Score an eligibility form read from a JSON file
    Eligibility(EligibilityArgs),
    /// Walk through sample credit estimates and eligibility checks
    Demo(DemoArgs),
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
        Command::Ects(args) => run_estimate(args),
        Command::Eligibility(args) => run_eligibility(args),
        Command::Demo(args) => run_demo(args),
    }
}
