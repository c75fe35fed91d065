//! Contract deployment.
//!
//! Deployment is simulated: every contract "deploys" instantly to a random
//! address. Loading the compiled contract, building and submitting the
//! deployment transaction and waiting for confirmation are not implemented.

use std::fmt;

use colored::Colorize;
use rand::RngCore;
use thiserror::Error;

use crate::utils::cli_branding;

/// Contracts deployed by `deploy`, in deployment order.
pub const CONTRACTS: [&str; 2] = ["AgilityPayment", "AgilityEscrow"];

pub const NEXT_STEPS: [&str; 3] = [
    "1. Update .env with contract addresses",
    "2. Run tests: cargo test",
    "3. Start the application: cargo run --bin agility",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeployError {
    #[error("{contract} was rejected by {network}: {reason}")]
    Rejected {
        contract: String,
        network: String,
        reason: String,
    },
    #[error("Deployment failed: {deployed} of {total} contracts deployed")]
    Incomplete { deployed: usize, total: usize },
}

impl DeployError {
    /// Whether the failure was already shown to the user by the deployment
    /// summary, so the caller only needs to set the exit code.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}

/// A 20-byte contract address, displayed as `0x` followed by 40 hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractAddress([u8; 20]);

impl ContractAddress {
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn random() -> Self {
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[allow(async_fn_in_trait)]
pub trait Deployer {
    async fn deploy(&self, contract: &str, network: &str) -> Result<ContractAddress, DeployError>;
}

/// Pretends every deployment succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedDeployer;

impl Deployer for SimulatedDeployer {
    async fn deploy(&self, contract: &str, network: &str) -> Result<ContractAddress, DeployError> {
        let address = ContractAddress::random();
        tracing::debug!(contract, network, %address, "simulated deployment");
        Ok(address)
    }
}

#[derive(Debug, Default)]
pub struct DeploymentReport {
    pub network: String,
    pub deployed: Vec<(String, ContractAddress)>,
    pub failed: Option<(String, DeployError)>,
    pub total: usize,
}

impl DeploymentReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_none() && self.deployed.len() == self.total
    }
}

pub async fn deploy_contract<D: Deployer>(
    deployer: &D,
    contract: &str,
    network: &str,
) -> Result<ContractAddress, DeployError> {
    println!("📝 Deploying {}...", contract);

    match deployer.deploy(contract, network).await {
        Ok(address) => {
            println!("   ✅ {}", format!("{} deployed successfully", contract).green());
            println!("   📍 Contract Address: {}\n", address.to_string().bright_cyan());
            tracing::info!(contract, network, %address, "contract deployed");
            Ok(address)
        }
        Err(e) => {
            eprintln!(
                "   ❌ {}: {}",
                format!("Failed to deploy {}", contract).red(),
                e
            );
            tracing::error!(contract, network, error = %e, "contract deployment failed");
            Err(e)
        }
    }
}

/// Deploys `contracts` in order, stopping at the first failure.
pub async fn deploy_all<D: Deployer>(
    deployer: &D,
    network: &str,
    contracts: &[&str],
) -> DeploymentReport {
    let mut report = DeploymentReport {
        network: network.to_string(),
        total: contracts.len(),
        ..Default::default()
    };

    for contract in contracts {
        match deploy_contract(deployer, contract, network).await {
            Ok(address) => report.deployed.push((contract.to_string(), address)),
            Err(e) => {
                report.failed = Some((contract.to_string(), e));
                break;
            }
        }
    }

    report
}

pub fn print_header(network: &str) {
    println!("🚀 Agility Deployment Script\n");
    println!("📡 Target Network: {}\n", network);
    cli_branding::print_framed(&["Starting Contract Deployment"]);
}

pub fn print_summary(report: &DeploymentReport) {
    cli_branding::print_rule();
    if report.is_success() {
        println!("   {}", "✅ All contracts deployed successfully!".green());
        cli_branding::print_rule();
        println!();
        cli_branding::print_list("📝 Next Steps:", &NEXT_STEPS);
    } else {
        println!("   {}", "❌ Deployment failed".red());
        cli_branding::print_rule();
        println!();
    }
}

/// Runs the full deployment flow against `network` with the given deployer.
pub async fn run_with<D: Deployer>(
    deployer: &D,
    network: &str,
) -> Result<DeploymentReport, DeployError> {
    print_header(network);
    let report = deploy_all(deployer, network, &CONTRACTS).await;
    print_summary(&report);

    if report.is_success() {
        Ok(report)
    } else {
        Err(DeployError::Incomplete {
            deployed: report.deployed.len(),
            total: report.total,
        })
    }
}

pub async fn run(network: &str) -> Result<DeploymentReport, DeployError> {
    run_with(&SimulatedDeployer, network).await
}
