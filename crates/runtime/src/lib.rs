//! Runtime support for generated contract bindings
//!
//! Generated Rust wrappers depend on this crate only. It holds the
//! [`Provider`] and [`Validator`] capabilities, the argument normalization
//! rules, and the conversions between binding values and ABI tokens.

pub mod contract;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod validator;
pub mod value;

pub use ethabi;
pub use ethabi::{Address, Token};

/// 256-bit word used for every integer width
pub type U256 = ethabi::Uint;

pub use contract::{parse_contract_abi, ContractWrapper, DecodedLog};
pub use error::{ContractError, ValidationError};
pub use normalize::{Normalize, Numeric};
pub use provider::{
    CallRequest, LogEntry, Provider, ProviderError, TransactionReceipt, TxHash, TxParams,
};
pub use validator::{NoopValidator, Validator};
pub use value::{
    decode_named, decode_single, decode_tuple, decode_void, next_field, tuple_fields, AbiValue,
    FromToken, FromTokens, IntoAbiValue,
};
