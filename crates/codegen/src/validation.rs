//! Validation rule synthesis
//!
//! Every input parameter and tuple field carries exactly one rule, chosen
//! from its resolved type. The rules are executed by the generated code.

use crate::types::{AbiType, TupleId};
use serde::Serialize;

/// Normalization step applied to an argument before encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum ValidationRule {
    /// Validate an address and replace it with its checksummed form
    ChecksumAddress,
    /// Element-wise [`ValidationRule::ChecksumAddress`]
    ChecksumAddressArray,
    /// Coerce numeric-like input into a range-checked integer
    IntegerCoercion { signed: bool, bits: usize },
    /// Element-wise [`ValidationRule::IntegerCoercion`]
    IntegerCoercionArray { signed: bool, bits: usize },
    /// Decode UTF-8 hex text into raw bytes; `size` is set for `bytesN`
    HexBytesDecode { size: Option<usize> },
    /// Element-wise [`ValidationRule::HexBytesDecode`]
    HexBytesArrayDecode { size: Option<usize> },
    /// Validate every field of a tuple, or of each tuple in an array
    StructValidate { tuple: TupleId },
    Noop,
}

impl ValidationRule {
    /// Rule for a value of the given type
    pub fn for_type(ty: &AbiType) -> Self {
        match ty {
            AbiType::Address => Self::ChecksumAddress,
            AbiType::Uint(bits) => Self::IntegerCoercion {
                signed: false,
                bits: *bits,
            },
            AbiType::Int(bits) => Self::IntegerCoercion {
                signed: true,
                bits: *bits,
            },
            AbiType::Bytes => Self::HexBytesDecode { size: None },
            AbiType::FixedBytes(size) => Self::HexBytesDecode { size: Some(*size) },
            AbiType::Array(inner) | AbiType::FixedArray(inner, _) => match inner.as_ref() {
                AbiType::Address => Self::ChecksumAddressArray,
                AbiType::Uint(bits) => Self::IntegerCoercionArray {
                    signed: false,
                    bits: *bits,
                },
                AbiType::Int(bits) => Self::IntegerCoercionArray {
                    signed: true,
                    bits: *bits,
                },
                AbiType::Bytes => Self::HexBytesArrayDecode { size: None },
                AbiType::FixedBytes(size) => Self::HexBytesArrayDecode { size: Some(*size) },
                _ => match ty.innermost() {
                    AbiType::Tuple(id) => Self::StructValidate { tuple: *id },
                    _ => Self::Noop,
                },
            },
            AbiType::Tuple(id) => Self::StructValidate { tuple: *id },
            AbiType::Bool | AbiType::String => Self::Noop,
        }
    }

    /// Rule identifier as it appears in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChecksumAddress => "checksumAddress",
            Self::ChecksumAddressArray => "checksumAddressArray",
            Self::IntegerCoercion { .. } => "integerCoercion",
            Self::IntegerCoercionArray { .. } => "integerCoercionArray",
            Self::HexBytesDecode { .. } => "hexBytesDecode",
            Self::HexBytesArrayDecode { .. } => "hexBytesArrayDecode",
            Self::StructValidate { .. } => "structValidate",
            Self::Noop => "noop",
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }
}
