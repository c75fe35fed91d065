//! Environment-derived configuration for the application's network connections.
//!
//! Values come from the process environment, optionally hydrated from a `.env`
//! file first. Process variables always win over the file. Nothing here can
//! fail: unset variables take their defaults and values are kept as given.

use std::{env, fmt};

pub const NETWORK_VAR: &str = "MIDNIGHT_NETWORK";
pub const NODE_URL_VAR: &str = "MIDNIGHT_NODE_URL";
pub const INDEXER_URL_VAR: &str = "MIDNIGHT_INDEXER_URL";
pub const PROOF_SERVER_URL_VAR: &str = "PROOF_SERVER_URL";
pub const PORT_VAR: &str = "PORT";

pub const DEFAULT_NETWORK: &str = "testnet";
pub const DEFAULT_PROOF_SERVER_URL: &str = "http://localhost:6300";
pub const DEFAULT_PORT: &str = "3000";

/// Settings for the Midnight Network node, indexer and proof server, plus the
/// local port the service would listen on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub network: String,
    pub node_url: Option<String>,
    pub indexer_url: Option<String>,
    pub proof_server_url: String,
    /// Raw `PORT` text. Nothing binds to it yet, so it is not parsed.
    pub port: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            node_url: None,
            indexer_url: None,
            proof_server_url: DEFAULT_PROOF_SERVER_URL.to_string(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` (if one exists) and reads the configuration from the
    /// process environment.
    pub fn from_env() -> Self {
        load_env_file();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Absent or empty
    /// values fall back to their defaults; everything else is kept verbatim.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            network: get(NETWORK_VAR).unwrap_or_else(|| DEFAULT_NETWORK.to_string()),
            node_url: get(NODE_URL_VAR),
            indexer_url: get(INDEXER_URL_VAR),
            proof_server_url: get(PROOF_SERVER_URL_VAR)
                .unwrap_or_else(|| DEFAULT_PROOF_SERVER_URL.to_string()),
            port: get(PORT_VAR).unwrap_or_else(|| DEFAULT_PORT.to_string()),
        }
    }

    /// The `label: value` pairs shown in the startup configuration block.
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Network", self.network.clone()),
            ("Node URL", display_optional(self.node_url.as_deref())),
            ("Indexer URL", display_optional(self.indexer_url.as_deref())),
            ("Proof Server", self.proof_server_url.clone()),
            ("Port", self.port.clone()),
        ]
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.summary_lines() {
            writeln!(f, "   {}: {}", label, value)?;
        }
        Ok(())
    }
}

fn display_optional(value: Option<&str>) -> String {
    value.unwrap_or("(not set)").to_string()
}

/// Loads variables from a `.env` file in the working directory or one of its
/// parents. Variables already set in the process are left alone. Lines that
/// do not parse are skipped with a warning, as is a file that cannot be read.
pub fn load_env_file() {
    #[allow(deprecated)]
    let lines = match dotenv::dotenv_iter() {
        Ok(lines) => lines,
        Err(dotenv::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => return,
        Err(err) => {
            tracing::warn!(error = %err, "could not read environment file, ignoring it");
            return;
        }
    };

    let mut loaded = 0usize;
    for line in lines {
        match line {
            Ok((key, value)) => {
                if env::var_os(&key).is_none() {
                    env::set_var(key, value);
                    loaded += 1;
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed line in environment file");
            }
        }
    }
    tracing::debug!(loaded, "loaded environment file");
}
