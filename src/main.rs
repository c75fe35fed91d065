use std::process::ExitCode;

use agility::{
    config::Config,
    logging, setup,
    shutdown::{self, ShutdownSignal},
    utils::cli_branding,
};
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keep running after startup until interrupted (Ctrl+C or SIGTERM)
    #[arg(long, default_value_t = false)]
    wait: bool,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Installed before anything is printed so an early Ctrl+C is never lost.
    let mut shutdown = ShutdownSignal::install().context("Failed to install signal handlers")?;

    let app = async {
        let config = Config::from_env();
        setup::start(&config).await?;
        if cli.wait {
            std::future::pending::<()>().await;
        }
        anyhow::Ok(())
    };

    tokio::select! {
        result = app => result,
        () = shutdown.recv() => {
            shutdown::print_goodbye();
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli_branding::print_error(&format!("Fatal error: {e:#}"));
            tracing::error!(error = ?e, "agility exited with an error");
            ExitCode::FAILURE
        }
    }
}
