//! Blockchain access capability consumed by generated bindings
//!
//! Bindings never talk to a node directly. Everything goes through a
//! [`Provider`], which lets applications plug in their own transport and
//! lets tests substitute a mock.

use async_trait::async_trait;
use ethabi::{Address, Hash};

use crate::U256;

/// Identifier of a submitted transaction
pub type TxHash = Hash;

/// Error type providers report back to the bindings
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Optional transaction parameters accepted by every method call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxParams {
    pub from: Option<Address>,
    pub value: Option<U256>,
    pub gas: Option<U256>,
    pub gas_price: Option<U256>,
    pub nonce: Option<U256>,
}

impl TxParams {
    pub fn from_address(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    pub fn value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    pub fn gas(mut self, gas: U256) -> Self {
        self.gas = Some(gas);
        self
    }
}

/// Encoded call against a deployed contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    pub to: Address,
    pub data: Vec<u8>,
    pub tx_params: TxParams,
}

/// Raw log emitted while executing a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub address: Address,
    pub topics: Vec<Hash>,
    pub data: Vec<u8>,
    pub log_index: Option<u64>,
}

/// Receipt of a mined transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    pub logs: Vec<LogEntry>,
}

/// Capability for executing read-only calls, submitting transactions and
/// fetching receipts
#[async_trait]
pub trait Provider: Send + Sync {
    /// Execute a read-only call and return the raw return data
    async fn call(&self, request: &CallRequest) -> Result<Vec<u8>, ProviderError>;

    /// Submit a state-mutating transaction
    ///
    /// When `private_key` is set, the provider is expected to sign locally
    /// before broadcasting.
    async fn send_transaction(
        &self,
        request: &CallRequest,
        private_key: Option<&str>,
    ) -> Result<TxHash, ProviderError>;

    /// Fetch the receipt of a previously submitted transaction
    async fn transaction_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt, ProviderError>;
}
