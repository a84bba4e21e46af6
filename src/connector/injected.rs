use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
};
use anyhow::{Context, Result};
use tracing::info;

use super::{ProviderKind, Session};
use crate::config::DashboardConfig;
use crate::wallet;

/// Establish a session backed by the locally configured signing key
pub(crate) async fn connect(config: &DashboardConfig) -> Result<(Session, DynProvider)> {
    let private_key = config.private_key.as_deref().context(
        "No injected wallet available. Set PRIVATE_KEY or connect through the relay instead.",
    )?;

    let signer = wallet::load_signer(private_key)?;
    let account = signer.address();
    let ethereum_wallet = EthereumWallet::from(signer);

    // Build a provider that can sign transactions, then erase the concrete type
    let provider: DynProvider = ProviderBuilder::new()
        .wallet(ethereum_wallet)
        .with_simple_nonce_management()
        .with_gas_estimation()
        .connect(&config.rpc_url)
        .await
        .context("Failed to connect to RPC endpoint")?
        .erased();

    let chain_id = provider
        .get_chain_id()
        .await
        .context("Failed to fetch chain id")?;

    info!(account = %account, chain_id, "Injected wallet session established");
    Ok((
        Session {
            kind: ProviderKind::Injected,
            account,
            chain_id,
        },
        provider,
    ))
}
