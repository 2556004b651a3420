//! Shared state behind every generated contract binding

use std::sync::Arc;

use ethabi::{Address, Contract, Event, Function, Hash, RawLog, Token};
use serde_json::Value;
use tracing::{debug, trace};

use crate::normalize::{checksum_address, parse_address};
use crate::provider::{CallRequest, Provider, TxHash, TxParams};
use crate::validator::{NoopValidator, Validator};
use crate::value::AbiValue;
use crate::ContractError;

/// Entry kinds understood by the ABI encoder
const ENCODABLE_ENTRY_TYPES: &[&str] = &[
    "function",
    "event",
    "constructor",
    "fallback",
    "receive",
    "error",
];

/// Decoded log of a contract event
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLog {
    pub event: String,
    pub log_index: Option<u64>,
    pub params: Vec<ethabi::LogParam>,
}

impl DecodedLog {
    /// Value of the named event argument
    pub fn param(&self, name: &str) -> Option<&Token> {
        self.params.iter().find(|p| p.name == name).map(|p| &p.value)
    }
}

/// Parse an embedded ABI, skipping entry kinds the encoder does not know
pub fn parse_contract_abi(abi_json: &str) -> Result<Contract, ContractError> {
    let value: Value = serde_json::from_str(abi_json)
        .map_err(|e| ContractError::Decode(format!("embedded ABI is not valid JSON: {}", e)))?;
    let entries = match value {
        Value::Array(entries) => entries,
        _ => {
            return Err(ContractError::Decode(
                "embedded ABI is not a JSON array".to_string(),
            ))
        }
    };

    let entries: Vec<Value> = entries
        .into_iter()
        .filter(|entry| {
            entry
                .get("type")
                .and_then(Value::as_str)
                .map(|kind| ENCODABLE_ENTRY_TYPES.contains(&kind))
                .unwrap_or(false)
        })
        .collect();

    serde_json::from_value(Value::Array(entries))
        .map_err(|e| ContractError::Decode(format!("embedded ABI rejected: {}", e)))
}

/// Provider, address, validator and ABI shared by a contract's methods
pub struct ContractWrapper {
    provider: Arc<dyn Provider>,
    contract_address: Address,
    validator: Arc<dyn Validator>,
    private_key: Option<String>,
    abi: Contract,
}

impl std::fmt::Debug for ContractWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractWrapper")
            .field("contract_address", &self.contract_address)
            .field("has_private_key", &self.private_key.is_some())
            .finish()
    }
}

impl ContractWrapper {
    pub fn new(
        provider: Arc<dyn Provider>,
        contract_address: &str,
        abi_json: &str,
        validator: Option<Arc<dyn Validator>>,
        private_key: Option<String>,
    ) -> Result<Self, ContractError> {
        let contract_address = parse_address(&checksum_address(contract_address)?)?;
        let abi = parse_contract_abi(abi_json)?;

        Ok(Self {
            provider,
            contract_address,
            validator: validator.unwrap_or_else(|| Arc::new(NoopValidator)),
            private_key,
            abi,
        })
    }

    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    pub fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    pub fn abi(&self) -> &Contract {
        &self.abi
    }

    /// Look up an overload by name and selector
    pub fn function(&self, name: &str, selector: [u8; 4]) -> Result<&Function, ContractError> {
        self.abi
            .functions_by_name(name)
            .ok()
            .and_then(|overloads| overloads.iter().find(|f| f.short_signature() == selector))
            .ok_or_else(|| ContractError::UnknownMethod {
                name: name.to_string(),
                selector: format!("0x{}", hex::encode(selector)),
            })
    }

    /// Look up an event overload by name and signature topic
    ///
    /// `topic` is the hex keccak of the event signature, with or without a
    /// `0x` prefix.
    pub fn event(&self, name: &str, topic: &str) -> Result<&Event, ContractError> {
        let unknown = || ContractError::UnknownEvent(format!("{} ({})", name, topic));
        let bytes = hex::decode(topic.trim_start_matches("0x")).map_err(|_| unknown())?;
        if bytes.len() != 32 {
            return Err(unknown());
        }
        let topic = Hash::from_slice(&bytes);

        self.abi
            .events_by_name(name)
            .ok()
            .and_then(|overloads| overloads.iter().find(|e| e.signature() == topic))
            .ok_or_else(unknown)
    }

    /// ABI-encode a call with its selector
    pub fn encode_call(
        &self,
        name: &str,
        selector: [u8; 4],
        args: Vec<AbiValue>,
    ) -> Result<Vec<u8>, ContractError> {
        let function = self.function(name, selector)?;
        if args.len() != function.inputs.len() {
            return Err(ContractError::Encode(format!(
                "{} expects {} arguments, got {}",
                name,
                function.inputs.len(),
                args.len()
            )));
        }

        let tokens = args
            .into_iter()
            .zip(&function.inputs)
            .map(|(arg, param)| arg.into_token(&param.kind))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(function.encode_input(&tokens)?)
    }

    fn request(&self, data: Vec<u8>, tx_params: Option<TxParams>) -> CallRequest {
        CallRequest {
            to: self.contract_address,
            data,
            tx_params: tx_params.unwrap_or_default(),
        }
    }

    /// Execute a read-only call and decode its outputs
    pub async fn invoke_call(
        &self,
        name: &str,
        selector: [u8; 4],
        args: Vec<AbiValue>,
        tx_params: Option<TxParams>,
    ) -> Result<Vec<Token>, ContractError> {
        let data = self.encode_call(name, selector, args)?;
        debug!("Calling {} on {:?}", name, self.contract_address);

        let request = self.request(data, tx_params);
        let output = self
            .provider
            .call(&request)
            .await
            .map_err(ContractError::Provider)?;
        trace!("{} returned {} bytes", name, output.len());

        Ok(self.function(name, selector)?.decode_output(&output)?)
    }

    /// Submit a state-mutating transaction
    pub async fn invoke_send(
        &self,
        name: &str,
        selector: [u8; 4],
        args: Vec<AbiValue>,
        tx_params: Option<TxParams>,
    ) -> Result<TxHash, ContractError> {
        let data = self.encode_call(name, selector, args)?;
        debug!("Sending {} to {:?}", name, self.contract_address);

        let request = self.request(data, tx_params);
        let tx_hash = self
            .provider
            .send_transaction(&request, self.private_key.as_deref())
            .await
            .map_err(ContractError::Provider)?;
        debug!("{} submitted as {:?}", name, tx_hash);
        Ok(tx_hash)
    }

    /// Decode the logs of one event emitted by this contract in a transaction
    ///
    /// The overload is picked by its signature topic, since several events may
    /// share a name. Logs from other contracts or for other events are
    /// skipped, so a transaction without matching logs yields an empty list.
    pub async fn get_event_logs(
        &self,
        event_name: &str,
        topic: &str,
        tx_hash: TxHash,
    ) -> Result<Vec<DecodedLog>, ContractError> {
        let event = self.event(event_name, topic)?;
        let receipt = self
            .provider
            .transaction_receipt(tx_hash)
            .await
            .map_err(ContractError::Provider)?;
        let topic = event.signature();

        let mut decoded = Vec::new();
        for log in receipt.logs {
            if log.address != self.contract_address {
                continue;
            }
            if !event.anonymous && log.topics.first() != Some(&topic) {
                continue;
            }

            let raw = RawLog {
                topics: log.topics,
                data: log.data,
            };
            match event.parse_log(raw) {
                Ok(parsed) => decoded.push(DecodedLog {
                    event: event.name.clone(),
                    log_index: log.log_index,
                    params: parsed.params,
                }),
                // anonymous events carry no topic to match on
                Err(_) if event.anonymous => continue,
                Err(e) => return Err(e.into()),
            }
        }

        debug!("Found {} {} logs in {:?}", decoded.len(), event_name, tx_hash);
        Ok(decoded)
    }
}
