use crate::provider::ProviderError;
use thiserror::Error;

/// Rejection raised by a pluggable [`Validator`](crate::Validator)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Validation failed for parameter '{parameter_name}' of '{method_name}': {reason}")]
pub struct ValidationError {
    pub method_name: String,
    pub parameter_name: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new<M, P, R>(method_name: M, parameter_name: P, reason: R) -> Self
    where
        M: Into<String>,
        P: Into<String>,
        R: Into<String>,
    {
        Self {
            method_name: method_name.into(),
            parameter_name: parameter_name.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by generated contract bindings at call time
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Invalid integer '{value}': {reason}")]
    InvalidInteger { value: String, reason: String },

    #[error("Invalid hex encoding '{value}': {reason}")]
    InvalidHexEncoding { value: String, reason: String },

    #[error("Invalid address '{value}': {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Provider error: {0}")]
    Provider(#[source] ProviderError),

    #[error("ABI error: {0}")]
    Abi(#[from] ethabi::Error),

    #[error("ABI encoding failed: {0}")]
    Encode(String),

    #[error("ABI decoding failed: {0}")]
    Decode(String),

    #[error("Unknown method '{name}' with selector {selector}")]
    UnknownMethod { name: String, selector: String },

    #[error("Unknown event '{0}'")]
    UnknownEvent(String),
}

impl ContractError {
    pub(crate) fn invalid_integer<V: ToString, R: Into<String>>(value: V, reason: R) -> Self {
        Self::InvalidInteger {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_hex<V: Into<String>, R: Into<String>>(value: V, reason: R) -> Self {
        Self::InvalidHexEncoding {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_address<V: Into<String>, R: Into<String>>(value: V, reason: R) -> Self {
        Self::InvalidAddress {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
