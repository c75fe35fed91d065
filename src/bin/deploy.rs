use std::process::ExitCode;

use agility::{
    config,
    deploy::{self, DeployError},
    logging,
    utils::cli_branding,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Deploy the Agility contracts", long_about = None)]
struct Args {
    /// Network to deploy to, e.g. testnet or mainnet
    #[arg(long, default_value = config::DEFAULT_NETWORK)]
    network: String,
}

async fn run(args: Args) -> anyhow::Result<()> {
    // Loaded for parity with the application; contract deployment reads
    // credentials from here once it talks to a real network.
    config::load_env_file();
    deploy::run(&args.network).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let reported = e
                .downcast_ref::<DeployError>()
                .is_some_and(DeployError::is_reported);
            if !reported {
                cli_branding::print_error(&format!("Deployment error: {e:#}"));
            }
            tracing::error!(error = ?e, "deployment exited with an error");
            ExitCode::FAILURE
        }
    }
}
