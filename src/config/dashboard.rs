use alloy::primitives::Address;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::consts::{
    DEFAULT_CHAIN_ID, DEFAULT_GREETER_ADDRESS, DEFAULT_RELAY_URL, DEFAULT_RPC_URL,
    DEFAULT_TOKEN_ADDRESS,
};

/// CLI arguments for the dashboard
#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "dApp Dashboard - Interactive TUI for the Greeter and StandardToken contracts", long_about = None)]
pub struct CliArgs {
    /// Ethereum RPC endpoint
    #[arg(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Remote-wallet relay endpoint used for relay sessions
    #[arg(long, env = "RELAY_URL", default_value = DEFAULT_RELAY_URL)]
    pub relay_url: String,

    /// Wallet relay project identifier (required)
    #[arg(long, env = "WALLET_PROJECT_ID")]
    pub project_id: String,

    /// Greeter contract address
    #[arg(long, env = "GREETER_ADDRESS", default_value = DEFAULT_GREETER_ADDRESS)]
    pub greeter_address: String,

    /// StandardToken contract address
    #[arg(long, env = "TOKEN_ADDRESS", default_value = DEFAULT_TOKEN_ADDRESS)]
    pub token_address: String,

    /// Private key for the injected wallet; omit to rely on relay sessions only
    #[arg(long, env = "PRIVATE_KEY")]
    pub private_key: Option<String>,

    /// Expected chain id; a mismatch at connect time surfaces a warning
    #[arg(long, env = "CHAIN_ID", default_value_t = DEFAULT_CHAIN_ID)]
    pub chain_id: u64,
}

/// Dashboard configuration with all required values resolved
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub rpc_url: String,
    pub relay_url: String,
    pub project_id: String,
    pub greeter_address: Address,
    pub token_address: Address,
    pub private_key: Option<String>,
    pub expected_chain_id: u64,
}

impl DashboardConfig {
    /// Resolve configuration from CLI arguments and environment
    pub fn load(cli_args: CliArgs) -> Result<Self> {
        if cli_args.project_id.trim().is_empty() {
            anyhow::bail!("WALLET_PROJECT_ID must not be empty");
        }

        let greeter_address = cli_args
            .greeter_address
            .parse::<Address>()
            .context("Invalid Greeter contract address")?;
        let token_address = cli_args
            .token_address
            .parse::<Address>()
            .context("Invalid StandardToken contract address")?;

        info!(
            "Loaded DashboardConfig: rpc_url={}, greeter_address={greeter_address}, token_address={token_address}",
            cli_args.rpc_url
        );
        Ok(DashboardConfig {
            rpc_url: cli_args.rpc_url,
            relay_url: cli_args.relay_url,
            project_id: cli_args.project_id,
            greeter_address,
            token_address,
            private_key: cli_args.private_key,
            expected_chain_id: cli_args.chain_id,
        })
    }

    /// Relay endpoint with the project identifier attached as a query parameter
    pub fn relay_endpoint(&self) -> String {
        if self.relay_url.contains('?') {
            format!("{}&projectId={}", self.relay_url, self.project_id)
        } else {
            format!("{}?projectId={}", self.relay_url, self.project_id)
        }
    }
}
