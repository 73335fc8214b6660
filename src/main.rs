use burrow::Cli;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(error) = burrow::observability::init_logging() {
        eprintln!("Warning: {error:#}");
    }

    let cli = Cli::parse();
    match burrow::app::dispatch(cli).await {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
