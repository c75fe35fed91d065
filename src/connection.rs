//! Network connectors initialized at startup.
//!
//! Neither connector talks to the network yet: both announce themselves and
//! resolve successfully. They exist so the startup sequence, its failure
//! reporting and its tests are already shaped around real clients.

use colored::Colorize;
use thiserror::Error;

use crate::config::Config;
use crate::utils::cli_branding;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("{service} is unreachable at {endpoint}: {reason}")]
    Unreachable {
        service: &'static str,
        endpoint: String,
        reason: String,
    },
}

/// A network service the application must reach before it is operational.
#[allow(async_fn_in_trait)]
pub trait Connector {
    /// Human readable service name, e.g. "Midnight Network".
    fn name(&self) -> &'static str;

    /// Emoji shown in front of the initialization line.
    fn icon(&self) -> &'static str {
        "🔌"
    }

    async fn connect(&self, config: &Config) -> Result<(), ConnectionError>;
}

/// Midnight Network node, indexer and proof server.
#[derive(Debug, Default, Clone, Copy)]
pub struct MidnightConnector;

impl Connector for MidnightConnector {
    fn name(&self) -> &'static str {
        "Midnight Network"
    }

    fn icon(&self) -> &'static str {
        "🌙"
    }

    async fn connect(&self, config: &Config) -> Result<(), ConnectionError> {
        tracing::debug!(
            network = %config.network,
            node_url = ?config.node_url,
            indexer_url = ?config.indexer_url,
            proof_server_url = %config.proof_server_url,
            "midnight client not implemented, skipping handshake"
        );
        Ok(())
    }
}

/// XRP Ledger payment rail.
#[derive(Debug, Default, Clone, Copy)]
pub struct XrplConnector;

impl Connector for XrplConnector {
    fn name(&self) -> &'static str {
        "XRPL"
    }

    fn icon(&self) -> &'static str {
        "💎"
    }

    async fn connect(&self, _config: &Config) -> Result<(), ConnectionError> {
        tracing::debug!("xrpl client not implemented, skipping handshake");
        Ok(())
    }
}

/// Runs a connector and reports the outcome on the terminal. Returns whether
/// the connection succeeded.
pub async fn initialize<C: Connector>(connector: &C, config: &Config) -> bool {
    println!(
        "{} Initializing {} connection...",
        connector.icon(),
        connector.name()
    );

    match connector.connect(config).await {
        Ok(()) => {
            cli_branding::print_success(&format!("{} connected successfully", connector.name()));
            println!();
            tracing::info!(service = connector.name(), "connected");
            true
        }
        Err(e) => {
            eprintln!(
                "{} {}: {}",
                "❌".red(),
                format!("Failed to connect to {}", connector.name()).red(),
                e
            );
            tracing::error!(service = connector.name(), error = %e, "connection failed");
            false
        }
    }
}
