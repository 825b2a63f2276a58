use crate::console::{run_console, run_ingest, ConsoleArgs, IngestArgs};
use crate::server;
use auditor_registry::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Auditor Registry",
    about = "Serve, ingest, and browse the registered-auditor directory",
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
    /// Run a one-off ingestion against the configured export and print the outcome
    Ingest(IngestArgs),
    /// Browse the directory through the list view against a running service
    Console(ConsoleArgs),
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
        Command::Ingest(args) => run_ingest(args).await,
        Command::Console(args) => run_console(args).await,
    }
}
