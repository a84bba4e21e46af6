use alloy::{
    primitives::{Address, B256},
    providers::Provider,
    sol,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::common::submit_call;
use super::GreeterApi;

// Generate type-safe contract bindings for the Greeter contract
sol!(
    #[sol(rpc)]
    #[derive(Debug)]
    contract Greeter {
        event GreetingChanged(address indexed sender, string greeting);

        function greet() external view returns (string memory);
        function setGreeting(string memory _greeting) external;
    }
);

use Greeter::GreeterInstance;

/// Client for the Greeter contract: read the greeting, update it
#[derive(Clone)]
pub struct GreeterClient<P: Provider + Clone> {
    contract: GreeterInstance<P>,
    sender: Address,
    tx_lock: Arc<Mutex<()>>,
}

impl<P: Provider + Clone> GreeterClient<P> {
    pub fn new(
        provider: P,
        contract_address: Address,
        sender: Address,
        tx_lock: Arc<Mutex<()>>,
    ) -> Self {
        let contract = GreeterInstance::new(contract_address, provider);
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
impl<P: Provider + Clone + 'static> GreeterApi for GreeterClient<P> {
    /// Read the current greeting
    async fn greet(&self) -> anyhow::Result<String> {
        Ok(self.contract.greet().call().await?)
    }

    /// Update the greeting and wait for one block of inclusion
    async fn set_greeting(&self, greeting: &str) -> anyhow::Result<B256> {
        let call = self
            .contract
            .setGreeting(greeting.to_string())
            .from(self.sender);
        submit_call("setGreeting", call, &self.tx_lock).await
    }
}
