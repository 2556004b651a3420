//! Argument normalization applied by generated bindings before encoding

use std::fmt;

use ethabi::Address;
use sha3::{Digest, Keccak256};

use crate::{ContractError, U256};

/// 2^128, the first magnitude a float can no longer carry into `u128`
const FLOAT_MAGNITUDE_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Numeric-like argument accepted for integer parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Unsigned(U256),
    Signed(i128),
    Float(f64),
    Text(String),
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Unsigned(v) => write!(f, "{}", v),
            Numeric::Signed(v) => write!(f, "{}", v),
            Numeric::Float(v) => write!(f, "{}", v),
            Numeric::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! numeric_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Numeric {
            fn from(value: $t) -> Self {
                Numeric::Unsigned(U256::from(value))
            }
        })*
    };
}

macro_rules! numeric_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Numeric {
            fn from(value: $t) -> Self {
                Numeric::Signed(value as i128)
            }
        })*
    };
}

numeric_from_unsigned!(u8, u16, u32, u64, u128, usize);
numeric_from_signed!(i8, i16, i32, i64, i128, isize);

impl From<U256> for Numeric {
    fn from(value: U256) -> Self {
        Numeric::Unsigned(value)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<f32> for Numeric {
    fn from(value: f32) -> Self {
        Numeric::Float(f64::from(value))
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Numeric::Text(value)
    }
}

/// Coerce a numeric-like value into an `intN`/`uintN` word
///
/// Fractional values are truncated toward zero. Negative values for signed
/// widths are returned in two's complement, the way the ABI encodes them.
pub fn coerce_integer(
    value: impl Into<Numeric>,
    signed: bool,
    bits: usize,
) -> Result<U256, ContractError> {
    let value = value.into();
    if bits == 0 || bits > 256 || bits % 8 != 0 {
        return Err(ContractError::invalid_integer(
            &value,
            format!("unsupported integer width {}", bits),
        ));
    }

    let parsed = match &value {
        Numeric::Unsigned(v) => Some((false, *v)),
        Numeric::Signed(v) => Some((*v < 0, U256::from(v.unsigned_abs()))),
        Numeric::Float(v) => float_magnitude(*v),
        Numeric::Text(v) => text_magnitude(v),
    };
    let (negative, magnitude) = parsed
        .ok_or_else(|| ContractError::invalid_integer(&value, "not an integer-like value"))?;

    fit_width(negative, magnitude, signed, bits).ok_or_else(|| {
        let kind = if signed { "int" } else { "uint" };
        ContractError::invalid_integer(&value, format!("out of range for {}{}", kind, bits))
    })
}

fn float_magnitude(value: f64) -> Option<(bool, U256)> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    let magnitude = truncated.abs();
    if magnitude >= FLOAT_MAGNITUDE_LIMIT {
        return None;
    }
    Some((truncated < 0.0, U256::from(magnitude as u128)))
}

fn text_magnitude(value: &str) -> Option<(bool, U256)> {
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if let Some(hex_digits) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        if hex_digits.is_empty() || !hex_digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return U256::from_str_radix(hex_digits, 16)
            .ok()
            .map(|magnitude| (negative, magnitude));
    }

    let integral = match digits.split_once('.') {
        Some((integral, fraction)) => {
            if !fraction.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            integral
        }
        None => digits,
    };
    if integral.is_empty() || !integral.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    U256::from_dec_str(integral)
        .ok()
        .map(|magnitude| (negative, magnitude))
}

fn fit_width(negative: bool, magnitude: U256, signed: bool, bits: usize) -> Option<U256> {
    if magnitude.is_zero() {
        return Some(U256::zero());
    }

    if !signed {
        if negative || magnitude > max_unsigned(bits) {
            return None;
        }
        return Some(magnitude);
    }

    let half = U256::from(2u8).pow(U256::from(bits - 1));
    if negative {
        // -2^(bits-1) is representable, +2^(bits-1) is not
        if magnitude > half {
            return None;
        }
        Some(U256::max_value() - (magnitude - U256::one()))
    } else if magnitude < half {
        Some(magnitude)
    } else {
        None
    }
}

fn max_unsigned(bits: usize) -> U256 {
    if bits == 256 {
        U256::max_value()
    } else {
        U256::from(2u8).pow(U256::from(bits)) - U256::one()
    }
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Parse a 20-byte hex address, with or without `0x`
pub fn parse_address(value: &str) -> Result<Address, ContractError> {
    let digits = strip_hex_prefix(value.trim());
    if digits.len() != 40 {
        return Err(ContractError::invalid_address(
            value,
            "expected 20 bytes of hex",
        ));
    }
    let bytes =
        hex::decode(digits).map_err(|e| ContractError::invalid_address(value, e.to_string()))?;
    Ok(Address::from_slice(&bytes))
}

/// EIP-55 mixed-case rendering of an address
pub fn to_checksum(address: &Address) -> String {
    let lower = hex::encode(address.as_bytes());
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let shift = if i % 2 == 0 { 4 } else { 0 };
        let nibble = (hash[i / 2] >> shift) & 0x0f;
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Validate an address and return its checksummed form
///
/// All-lowercase and all-uppercase input is accepted as is. Mixed-case input
/// must already carry a correct checksum.
pub fn checksum_address(value: &str) -> Result<String, ContractError> {
    let address = parse_address(value)?;
    let checksummed = to_checksum(&address);

    let digits = strip_hex_prefix(value.trim());
    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && digits != &checksummed[2..] {
        return Err(ContractError::invalid_address(value, "checksum mismatch"));
    }
    Ok(checksummed)
}

/// Element-wise [`checksum_address`]
pub fn checksum_address_array<S: AsRef<str>>(values: &[S]) -> Result<Vec<String>, ContractError> {
    values
        .iter()
        .map(|value| checksum_address(value.as_ref()))
        .collect()
}

/// Element-wise [`coerce_integer`]
pub fn coerce_integer_array<T: Into<Numeric>>(
    values: Vec<T>,
    signed: bool,
    bits: usize,
) -> Result<Vec<U256>, ContractError> {
    values
        .into_iter()
        .map(|value| coerce_integer(value, signed, bits))
        .collect()
}

/// Decode UTF-8 hex text into raw bytes
///
/// `size` enforces the exact decoded length of a `bytesN` parameter.
pub fn hex_bytes_decode(value: &[u8], size: Option<usize>) -> Result<Vec<u8>, ContractError> {
    let text = std::str::from_utf8(value).map_err(|_| {
        ContractError::invalid_hex(String::from_utf8_lossy(value).into_owned(), "not valid UTF-8")
    })?;
    let decoded = hex::decode(strip_hex_prefix(text.trim()))
        .map_err(|e| ContractError::invalid_hex(text, e.to_string()))?;

    if let Some(size) = size {
        if decoded.len() != size {
            return Err(ContractError::invalid_hex(
                text,
                format!("expected {} bytes, got {}", size, decoded.len()),
            ));
        }
    }
    Ok(decoded)
}

/// Element-wise [`hex_bytes_decode`]
pub fn hex_bytes_array_decode(
    values: &[Vec<u8>],
    size: Option<usize>,
) -> Result<Vec<Vec<u8>>, ContractError> {
    values
        .iter()
        .map(|value| hex_bytes_decode(value, size))
        .collect()
}

/// Recursive normalization of generated tuple values
pub trait Normalize: Sized {
    fn normalize(self) -> Result<Self, ContractError>;
}

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(self) -> Result<Self, ContractError> {
        self.into_iter().map(Normalize::normalize).collect()
    }
}
