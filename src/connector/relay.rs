use alloy::{
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
};
use anyhow::{Context, Result};
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::{ProviderKind, Session, SessionEvent};
use crate::config::consts::RELAY_POLL_INTERVAL;
use crate::config::DashboardConfig;

/// Establish a session against the remote wallet behind the relay endpoint
///
/// The relay holds the keys: accounts come from `eth_accounts` and writes are
/// signed remotely via `eth_sendTransaction`. A watcher task observes the
/// session and emits notifications until it is cancelled or the session dies.
pub(crate) async fn connect(
    config: &DashboardConfig,
    events: broadcast::Sender<SessionEvent>,
) -> Result<(Session, DynProvider, CancellationToken)> {
    let endpoint = config.relay_endpoint();

    let provider: DynProvider = ProviderBuilder::new()
        .connect(&endpoint)
        .await
        .context("Relay endpoint unreachable")?
        .erased();

    let accounts = provider
        .get_accounts()
        .await
        .context("Relay session handshake failed")?;
    let account = *accounts
        .first()
        .context("Relay session exposed no accounts")?;

    let chain_id = provider
        .get_chain_id()
        .await
        .context("Failed to fetch chain id from relay")?;

    let watcher = CancellationToken::new();
    tokio::spawn(watch_session(
        provider.clone(),
        account,
        chain_id,
        events,
        watcher.clone(),
    ));

    info!(account = %account, chain_id, "Relay wallet session established");
    Ok((
        Session {
            kind: ProviderKind::Relay,
            account,
            chain_id,
        },
        provider,
        watcher,
    ))
}

/// Observe the relay session and translate changes into session events
///
/// Exits on cancellation, when the relay stops exposing accounts, or when the
/// endpoint becomes unreachable; the latter two emit `Disconnected`.
async fn watch_session(
    provider: DynProvider,
    mut account: Address,
    mut chain_id: u64,
    events: broadcast::Sender<SessionEvent>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(RELAY_POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("Relay session watcher stopped");
                return;
            }
            _ = ticker.tick() => {}
        }

        match provider.get_accounts().await {
            Ok(accounts) => match accounts.first() {
                Some(current) if *current != account => {
                    account = *current;
                    info!(account = %account, "Relay session switched accounts");
                    let _ = events.send(SessionEvent::AccountsChanged(account));
                }
                Some(_) => {}
                None => {
                    warn!("Relay session no longer exposes any account");
                    let _ = events.send(SessionEvent::Disconnected);
                    return;
                }
            },
            Err(e) => {
                warn!(error = %e, "Relay session lost");
                let _ = events.send(SessionEvent::Disconnected);
                return;
            }
        }

        match provider.get_chain_id().await {
            Ok(current) if current != chain_id => {
                chain_id = current;
                info!(chain_id, "Relay session switched chains");
                let _ = events.send(SessionEvent::ChainChanged(chain_id));
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "Relay session lost");
                let _ = events.send(SessionEvent::Disconnected);
                return;
            }
        }
    }
}
