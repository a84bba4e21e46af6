use alloy::{primitives::Address, providers::DynProvider};
use anyhow::Result;
use std::sync::Mutex;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::DashboardConfig;

pub mod injected;
pub mod relay;

/// Which kind of wallet backs a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// A signing key already present in the local environment
    Injected,
    /// A remote wallet reached through the relay endpoint
    Relay,
}

impl ProviderKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::Injected => "Injected",
            ProviderKind::Relay => "Relay",
        }
    }
}

/// An established wallet session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub kind: ProviderKind,
    pub account: Address,
    pub chain_id: u64,
}

/// Asynchronous session notifications
///
/// Relay sessions emit these from the watcher task; the view subscribes once
/// at startup and applies them between its own operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    AccountsChanged(Address),
    ChainChanged(u64),
    Disconnected,
}

/// Negotiates wallet sessions and exposes the resulting signing capability
///
/// At most one session is active at a time; connecting replaces any previous
/// session. Session state itself is owned by the view; the connector only
/// tracks the background watcher that needs tearing down on disconnect.
pub struct WalletConnector {
    config: DashboardConfig,
    events: broadcast::Sender<SessionEvent>,
    watcher: Mutex<Option<CancellationToken>>,
}

impl WalletConnector {
    pub fn new(config: DashboardConfig) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            config,
            events,
            watcher: Mutex::new(None),
        }
    }

    /// Subscribe to session notifications
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Establish a session of the requested kind
    ///
    /// On failure the previous session's watcher is already torn down and no
    /// session exists.
    pub async fn connect(&self, kind: ProviderKind) -> Result<(Session, DynProvider)> {
        self.disconnect();

        match kind {
            ProviderKind::Injected => injected::connect(&self.config).await,
            ProviderKind::Relay => {
                let (session, provider, watcher) =
                    relay::connect(&self.config, self.events.clone()).await?;
                *self.watcher.lock().expect("watcher lock poisoned") = Some(watcher);
                Ok((session, provider))
            }
        }
    }

    /// Tear down the active session. Idempotent; calling with no session is a no-op.
    pub fn disconnect(&self) {
        let token = self.watcher.lock().expect("watcher lock poisoned").take();
        if let Some(token) = token {
            token.cancel();
            info!("Relay session watcher cancelled");
        }
    }
}
