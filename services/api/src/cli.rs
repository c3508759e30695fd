use crate::offline::{run_evaluate, run_policies, EvaluateArgs, PoliciesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use policy_enforcement::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Policy Enforcement Engine",
    about = "Evaluate structured requests against extracted organizational policy rules",
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
    /// Evaluate a request file against a rule snapshot without a server
    Evaluate(EvaluateArgs),
    /// Summarize the policies present in a rule snapshot
    Policies(PoliciesArgs),
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Policies(args) => run_policies(args),
    }
}
