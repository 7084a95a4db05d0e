use crate::demo::{run_batch, run_convert, run_predict, BatchArgs, ConvertArgs, PredictArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Predictor AI",
    about = "Run the loan eligibility service or score applications from the command line",
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
    /// Score a single application and render the results view as text
    Predict(PredictArgs),
    /// Convert a USD amount to INR at the configured rate
    Convert(ConvertArgs),
    /// Score every application row in a CSV export
    Batch(BatchArgs),
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
        Command::Predict(args) => run_predict(args),
        Command::Convert(args) => run_convert(args),
        Command::Batch(args) => run_batch(args),
    }
}
