use alloy::primitives::U256;
use anyhow::Result;
use clap::Parser;
use dapp_dashboard::config::{CliArgs, DashboardConfig};
use dapp_dashboard::ui;
use dapp_dashboard::wallet::{self, WalletStatus};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::ERROR.into())
        .from_env_lossy()
        .add_directive("alloy=warn".parse()?)
        .add_directive("dapp_dashboard=info".parse()?)
        .add_directive("dashboard=info".parse()?);

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true))
        .with(filter)
        .init();

    // Load configuration; a missing project id is fatal here
    let cli_args = CliArgs::parse();
    let config = DashboardConfig::load(cli_args)?;

    // Show the injected wallet status before the terminal enters raw mode
    report_wallet_status(&config).await;

    ui::run_dashboard(config).await
}

async fn report_wallet_status(config: &DashboardConfig) {
    let Some(private_key) = config.private_key.as_deref() else {
        wallet::display_wallet_status(WalletStatus::NotConfigured, None, &config.rpc_url, U256::ZERO);
        return;
    };

    let signer = match wallet::load_signer(private_key) {
        Ok(signer) => signer,
        Err(e) => {
            warn!(error = %e, "Configured private key is invalid; injected sessions will fail");
            return;
        }
    };

    let address = signer.address();
    match wallet::check_balance(&config.rpc_url, address).await {
        Ok(balance) => {
            let status = if balance.is_zero() {
                WalletStatus::InsufficientFunds
            } else {
                WalletStatus::Ready
            };
            wallet::display_wallet_status(status, Some(address), &config.rpc_url, balance);
        }
        Err(e) => {
            warn!(error = %e, "Could not check wallet balance; continuing without banner");
        }
    }
}
