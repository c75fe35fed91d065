//! Agility: privacy-preserving payments on Midnight Network with XRPL
//! settlement.
//!
//! Two binaries share this library:
//! * `agility` - loads configuration and brings the network connections up
//! * `deploy` - deploys the Agility contracts to a target network

pub mod config;
pub mod connection;
pub mod deploy;
pub mod logging;
pub mod setup;
pub mod shutdown;
pub mod utils;
