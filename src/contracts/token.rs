use alloy::{
    primitives::{
        utils::{format_units, parse_units},
        Address, B256, U256,
    },
    providers::Provider,
    sol,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::common::submit_call;
use super::{TokenApi, TokenMeta};

// Generate type-safe contract bindings for the StandardToken ERC20 contract
sol!(
    #[sol(rpc)]
    #[derive(Debug)]
    contract StandardToken {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
);

use StandardToken::StandardTokenInstance;

/// Client for the StandardToken ERC20 contract: balances and transfers
#[derive(Clone)]
pub struct TokenClient<P: Provider + Clone> {
    contract: StandardTokenInstance<P>,
    sender: Address,
    tx_lock: Arc<Mutex<()>>,
}

impl<P: Provider + Clone> TokenClient<P> {
    pub fn new(
        provider: P,
        contract_address: Address,
        sender: Address,
        tx_lock: Arc<Mutex<()>>,
    ) -> Self {
        let contract = StandardTokenInstance::new(contract_address, provider);
        Self {
            contract,
            sender,
            tx_lock,
        }
    }

    /// Get the contract address
    pub fn address(&self) -> Address {
        *self.contract.address()
    }
}

#[async_trait]
impl<P: Provider + Clone + 'static> TokenApi for TokenClient<P> {
    /// Read the token's display metadata
    async fn metadata(&self) -> Result<TokenMeta> {
        let name = self.contract.name().call().await?;
        let symbol = self.contract.symbol().call().await?;
        let decimals = self.contract.decimals().call().await?;
        Ok(TokenMeta {
            name,
            symbol,
            decimals,
        })
    }

    /// Read the token balance of an account
    async fn balance_of(&self, account: Address) -> Result<U256> {
        Ok(self.contract.balanceOf(account).call().await?)
    }

    /// Transfer tokens to a recipient and wait for one block of inclusion
    async fn transfer(&self, to: Address, amount: U256) -> Result<B256> {
        let call = self.contract.transfer(to, amount).from(self.sender);
        submit_call("transfer", call, &self.tx_lock).await
    }
}

/// Parse a human-readable token amount into base units
///
/// Rejects negative and zero amounts; a transfer of nothing is a user error.
pub fn parse_token_amount(input: &str, decimals: u8) -> Result<U256> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        anyhow::bail!("Amount must be positive");
    }
    let parsed = parse_units(trimmed, decimals).context("Invalid amount")?;
    let amount = parsed.get_absolute();
    if amount.is_zero() {
        anyhow::bail!("Amount must be greater than zero");
    }
    Ok(amount)
}

/// Format a base-unit token amount for display
pub fn format_token_amount(amount: U256, decimals: u8) -> String {
    format_units(amount, decimals).unwrap_or_else(|_| amount.to_string())
}
