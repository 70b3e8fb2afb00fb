use std::process::ExitCode;

use clap::Parser;
use deck_cloud::{cli::Cli, error::AppError};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let fallback = if verbose { "deck_cloud=debug" } else { "deck_cloud=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match deck_cloud::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(app) => {
                    tracing::debug!("{app}");
                    eprintln!("{}", app.user_message());
                }
                None => eprintln!("error: {err:?}"),
            }
            ExitCode::FAILURE
        }
    }
}
