use alloy::{
    primitives::{Address, B256, U256},
    providers::DynProvider,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

pub mod common;
pub mod greeter;
pub mod token;

// ============================================================================
// Client Type Re-exports
// ============================================================================

pub use common::{decode_error_string, revert_message};
pub use greeter::GreeterClient;
pub use token::{format_token_amount, parse_token_amount, TokenClient};

// ============================================================================
// Contract Configuration
// ============================================================================

/// Configuration for the two dashboard contracts
///
/// Contains the addresses of the pre-deployed Greeter and StandardToken
/// contracts. Immutable once resolved at startup.
#[derive(Clone, Debug)]
pub struct ContractConfig {
    pub greeter_address: Address,
    pub token_address: Address,
}

impl ContractConfig {
    /// Create a new configuration for deployed contracts
    pub fn new(greeter_address: Address, token_address: Address) -> Self {
        Self {
            greeter_address,
            token_address,
        }
    }

    /// Create a configuration with Anvil local testnet defaults
    ///
    /// Uses deterministic Anvil deployment addresses based on standard nonce order:
    /// - Greeter deployed first (nonce 0)
    /// - StandardToken deployed second (nonce 1)
    pub fn anvil_config() -> Self {
        Self {
            greeter_address: crate::config::consts::DEFAULT_GREETER_ADDRESS
                .parse::<Address>()
                .expect("Invalid greeter address"),
            token_address: crate::config::consts::DEFAULT_TOKEN_ADDRESS
                .parse::<Address>()
                .expect("Invalid token address"),
        }
    }
}

// ============================================================================
// Proxy Traits
// ============================================================================

/// Token display metadata read from the contract
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMeta {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Read/write surface of the Greeter contract
#[async_trait]
pub trait GreeterApi: Send + Sync {
    /// Read the current greeting (non-mutating call)
    async fn greet(&self) -> Result<String>;

    /// Submit a greeting update and wait for one block of inclusion
    async fn set_greeting(&self, greeting: &str) -> Result<B256>;
}

/// Read/write surface of the StandardToken contract
#[async_trait]
pub trait TokenApi: Send + Sync {
    /// Read the token's display metadata
    async fn metadata(&self) -> Result<TokenMeta>;

    /// Read the token balance of an account
    async fn balance_of(&self, account: Address) -> Result<U256>;

    /// Submit a transfer and wait for one block of inclusion
    async fn transfer(&self, to: Address, amount: U256) -> Result<B256>;
}

// ============================================================================
// Client Bundle
// ============================================================================

/// Bundles the two contract clients over a shared provider
///
/// Created once per wallet session; writes are serialized through a shared
/// transaction lock so concurrent panel actions do not race on the nonce.
#[derive(Clone)]
pub struct ContractClients {
    pub greeter: GreeterClient<DynProvider>,
    pub token: TokenClient<DynProvider>,
}

impl ContractClients {
    pub fn new(provider: DynProvider, sender: Address, config: &ContractConfig) -> Self {
        let tx_lock = Arc::new(Mutex::new(()));
        let greeter = GreeterClient::new(
            provider.clone(),
            config.greeter_address,
            sender,
            tx_lock.clone(),
        );
        let token = TokenClient::new(provider, config.token_address, sender, tx_lock);
        Self { greeter, token }
    }
}

// ============================================================================
// Tests
// ============================================================================
