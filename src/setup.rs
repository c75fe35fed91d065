use colored::Colorize;
use thiserror::Error;

use crate::config::Config;
use crate::connection::{self, Connector, MidnightConnector, XrplConnector};
use crate::utils::cli_branding;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("Failed to initialize all required connections: {}", .failed.join(", "))]
    ConnectionsFailed { failed: Vec<&'static str> },
}

pub const NEXT_STEPS: [&str; 4] = [
    "1. Compile Compact contracts: compactc contracts/ build/",
    "2. Deploy contracts: cargo run --bin deploy -- --network=testnet",
    "3. Run tests: cargo test",
    "4. Start the application: cargo run --bin agility -- --wait",
];

pub const FEATURES: [&str; 5] = [
    "• Privacy-preserving payments",
    "• Secure escrow system",
    "• Cross-chain transactions",
    "• Web3 domain integration",
    "• KYC compliance with ZK proofs",
];

pub const DOCUMENTATION: [&str; 3] = [
    "• README.md - Getting started guide",
    "• ABOUT.md - Project overview",
    "• Midnight Docs: https://docs.midnight.network/",
];

pub fn print_configuration(config: &Config) {
    println!("{}", "📋 Configuration:".bold());
    println!("{}", config);
}

/// Brings the application up with the default connectors.
pub async fn start(config: &Config) -> Result<(), SetupError> {
    start_with(config, &MidnightConnector, &XrplConnector).await
}

/// Brings the application up: prints the configuration, runs both connectors
/// in order and, once both are up, prints the operational summary. Both
/// connectors always run, even when the first one fails.
pub async fn start_with<M, X>(config: &Config, midnight: &M, xrpl: &X) -> Result<(), SetupError>
where
    M: Connector,
    X: Connector,
{
    cli_branding::print_banner();
    println!("🚀 Starting Agility Application...\n");
    print_configuration(config);

    cli_branding::print_framed(&[
        "AGILITY - Secure Financial Service",
        "Powered by Midnight Network",
    ]);

    let midnight_connected = connection::initialize(midnight, config).await;
    let xrpl_connected = connection::initialize(xrpl, config).await;

    let failed: Vec<&'static str> = [
        (midnight.name(), midnight_connected),
        (xrpl.name(), xrpl_connected),
    ]
    .into_iter()
    .filter_map(|(name, ok)| (!ok).then_some(name))
    .collect();

    if !failed.is_empty() {
        println!();
        cli_branding::print_error("Failed to initialize all required connections");
        eprintln!("Please check your configuration and try again.");
        return Err(SetupError::ConnectionsFailed { failed });
    }

    cli_branding::print_framed(&["✅ All systems operational!"]);

    cli_branding::print_list("📝 Next Steps:", &NEXT_STEPS);
    cli_branding::print_list("🎯 Features Available:", &FEATURES);
    cli_branding::print_list("📚 Documentation:", &DOCUMENTATION);

    println!("🔄 Application is running. Press Ctrl+C to exit.\n");
    tracing::info!(network = %config.network, port = %config.port, "startup complete");
    Ok(())
}
