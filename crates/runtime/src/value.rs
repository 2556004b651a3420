//! Conversion between binding values and ABI tokens
//!
//! Values are converted into tokens against the function's declared
//! [`ParamType`], which settles the cases a Rust type alone cannot (signed
//! versus unsigned words, `bytes` versus `bytesN`, addresses passed as text).

use ethabi::{Address, ParamType, Token};

use crate::normalize::{parse_address, to_checksum};
use crate::{ContractError, U256};

/// Untyped argument produced by generated bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    Address(Address),
    Integer(U256),
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
    Array(Vec<AbiValue>),
    Tuple(Vec<AbiValue>),
}

impl AbiValue {
    /// Convert into a token of the given ABI type
    pub fn into_token(self, kind: &ParamType) -> Result<Token, ContractError> {
        let token = match (kind, self) {
            (ParamType::Address, AbiValue::Address(address)) => Token::Address(address),
            (ParamType::Address, AbiValue::String(text)) => Token::Address(parse_address(&text)?),
            (ParamType::Uint(_), AbiValue::Integer(value)) => Token::Uint(value),
            (ParamType::Int(_), AbiValue::Integer(value)) => Token::Int(value),
            (ParamType::Bool, AbiValue::Bool(value)) => Token::Bool(value),
            (ParamType::String, AbiValue::String(value)) => Token::String(value),
            (ParamType::Bytes, value) => Token::Bytes(value.into_bytes()?),
            (ParamType::FixedBytes(size), value) => {
                let bytes = value.into_bytes()?;
                if bytes.len() != *size {
                    return Err(ContractError::Encode(format!(
                        "expected {} bytes for bytes{}, got {}",
                        size,
                        size,
                        bytes.len()
                    )));
                }
                Token::FixedBytes(bytes)
            }
            (ParamType::Array(inner), value) => Token::Array(
                value
                    .into_items()?
                    .into_iter()
                    .map(|item| item.into_token(inner))
                    .collect::<Result<_, _>>()?,
            ),
            (ParamType::FixedArray(inner, size), value) => {
                let items = value.into_items()?;
                if items.len() != *size {
                    return Err(ContractError::Encode(format!(
                        "expected {} elements, got {}",
                        size,
                        items.len()
                    )));
                }
                Token::FixedArray(
                    items
                        .into_iter()
                        .map(|item| item.into_token(inner))
                        .collect::<Result<_, _>>()?,
                )
            }
            (ParamType::Tuple(kinds), AbiValue::Tuple(items)) => {
                if items.len() != kinds.len() {
                    return Err(ContractError::Encode(format!(
                        "expected {} tuple fields, got {}",
                        kinds.len(),
                        items.len()
                    )));
                }
                Token::Tuple(
                    items
                        .into_iter()
                        .zip(kinds)
                        .map(|(item, kind)| item.into_token(kind))
                        .collect::<Result<_, _>>()?,
                )
            }
            (kind, value) => {
                return Err(ContractError::Encode(format!(
                    "cannot encode {:?} as {}",
                    value, kind
                )))
            }
        };
        Ok(token)
    }

    fn into_bytes(self) -> Result<Vec<u8>, ContractError> {
        match self {
            AbiValue::Bytes(bytes) => Ok(bytes),
            AbiValue::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    AbiValue::Integer(v) if v <= U256::from(u8::MAX) => Ok(v.low_u32() as u8),
                    other => Err(ContractError::Encode(format!("{:?} is not a byte", other))),
                })
                .collect(),
            other => Err(ContractError::Encode(format!("{:?} is not a byte sequence", other))),
        }
    }

    fn into_items(self) -> Result<Vec<AbiValue>, ContractError> {
        match self {
            AbiValue::Array(items) => Ok(items),
            AbiValue::Bytes(bytes) => Ok(bytes
                .into_iter()
                .map(|b| AbiValue::Integer(U256::from(b)))
                .collect()),
            other => Err(ContractError::Encode(format!("{:?} is not an array", other))),
        }
    }
}

/// Conversion of a normalized argument into an [`AbiValue`]
pub trait IntoAbiValue {
    fn into_abi_value(self) -> AbiValue;

    #[doc(hidden)]
    fn as_byte(&self) -> Option<u8> {
        None
    }
}

impl IntoAbiValue for AbiValue {
    fn into_abi_value(self) -> AbiValue {
        self
    }
}

impl IntoAbiValue for U256 {
    fn into_abi_value(self) -> AbiValue {
        AbiValue::Integer(self)
    }
}

impl IntoAbiValue for u8 {
    fn into_abi_value(self) -> AbiValue {
        AbiValue::Integer(U256::from(self))
    }

    fn as_byte(&self) -> Option<u8> {
        Some(*self)
    }
}

impl IntoAbiValue for bool {
    fn into_abi_value(self) -> AbiValue {
        AbiValue::Bool(self)
    }
}

impl IntoAbiValue for String {
    fn into_abi_value(self) -> AbiValue {
        AbiValue::String(self)
    }
}

impl IntoAbiValue for &str {
    fn into_abi_value(self) -> AbiValue {
        AbiValue::String(self.to_string())
    }
}

impl IntoAbiValue for Address {
    fn into_abi_value(self) -> AbiValue {
        AbiValue::Address(self)
    }
}

impl<T: IntoAbiValue> IntoAbiValue for Vec<T> {
    fn into_abi_value(self) -> AbiValue {
        // Vec<u8> becomes a byte sequence instead of an array of words
        match self.iter().map(IntoAbiValue::as_byte).collect::<Option<Vec<u8>>>() {
            Some(bytes) => AbiValue::Bytes(bytes),
            None => AbiValue::Array(self.into_iter().map(IntoAbiValue::into_abi_value).collect()),
        }
    }
}

/// Conversion of a decoded token into a binding type
pub trait FromToken: Sized {
    fn from_token(token: Token) -> Result<Self, ContractError>;

    #[doc(hidden)]
    fn from_byte(_byte: u8) -> Option<Self> {
        None
    }
}

fn unexpected<T>(expected: &str, token: &Token) -> Result<T, ContractError> {
    Err(ContractError::Decode(format!("expected {}, got {:?}", expected, token)))
}

impl FromToken for U256 {
    fn from_token(token: Token) -> Result<Self, ContractError> {
        match token {
            Token::Uint(value) | Token::Int(value) => Ok(value),
            other => unexpected("integer", &other),
        }
    }
}

impl FromToken for u8 {
    fn from_token(token: Token) -> Result<Self, ContractError> {
        match token {
            Token::Uint(value) if value <= U256::from(u8::MAX) => Ok(value.low_u32() as u8),
            other => unexpected("byte", &other),
        }
    }

    fn from_byte(byte: u8) -> Option<Self> {
        Some(byte)
    }
}

impl FromToken for bool {
    fn from_token(token: Token) -> Result<Self, ContractError> {
        match token {
            Token::Bool(value) => Ok(value),
            other => unexpected("bool", &other),
        }
    }
}

/// Strings decode as is; addresses decode to their checksummed text
impl FromToken for String {
    fn from_token(token: Token) -> Result<Self, ContractError> {
        match token {
            Token::String(value) => Ok(value),
            Token::Address(address) => Ok(to_checksum(&address)),
            other => unexpected("string or address", &other),
        }
    }
}

impl FromToken for Address {
    fn from_token(token: Token) -> Result<Self, ContractError> {
        match token {
            Token::Address(address) => Ok(address),
            other => unexpected("address", &other),
        }
    }
}

impl<T: FromToken> FromToken for Vec<T> {
    fn from_token(token: Token) -> Result<Self, ContractError> {
        match token {
            Token::Array(items) | Token::FixedArray(items) => {
                items.into_iter().map(T::from_token).collect()
            }
            Token::Bytes(bytes) | Token::FixedBytes(bytes) => bytes
                .into_iter()
                .map(|b| {
                    T::from_byte(b).ok_or_else(|| {
                        ContractError::Decode("byte sequence decoded into a non-byte vector".into())
                    })
                })
                .collect(),
            other => unexpected("array", &other),
        }
    }
}

/// Conversion of a method's full output list into a Rust tuple
pub trait FromTokens: Sized {
    fn from_tokens(tokens: Vec<Token>) -> Result<Self, ContractError>;
}

macro_rules! impl_from_tokens {
    ($count:expr; $($name:ident),+) => {
        impl<$($name: FromToken),+> FromTokens for ($($name,)+) {
            fn from_tokens(tokens: Vec<Token>) -> Result<Self, ContractError> {
                if tokens.len() != $count {
                    return Err(ContractError::Decode(format!(
                        "expected {} outputs, got {}",
                        $count,
                        tokens.len()
                    )));
                }
                let mut tokens = tokens.into_iter();
                Ok(($(next_field::<$name>(&mut tokens)?,)+))
            }
        }
    };
}

impl_from_tokens!(2; A, B);
impl_from_tokens!(3; A, B, C);
impl_from_tokens!(4; A, B, C, D);
impl_from_tokens!(5; A, B, C, D, E);
impl_from_tokens!(6; A, B, C, D, E, F);
impl_from_tokens!(7; A, B, C, D, E, F, G);
impl_from_tokens!(8; A, B, C, D, E, F, G, H);

/// Unwrap a tuple token into its fields, checking the arity
pub fn tuple_fields(token: Token, arity: usize) -> Result<Vec<Token>, ContractError> {
    match token {
        Token::Tuple(fields) if fields.len() == arity => Ok(fields),
        other => unexpected(&format!("tuple of {} fields", arity), &other),
    }
}

/// Take the next field from a token iterator
pub fn next_field<T: FromToken>(
    tokens: &mut impl Iterator<Item = Token>,
) -> Result<T, ContractError> {
    let token = tokens
        .next()
        .ok_or_else(|| ContractError::Decode("missing field".into()))?;
    T::from_token(token)
}

/// Decode the outputs of a method without return values
pub fn decode_void(_tokens: Vec<Token>) -> Result<(), ContractError> {
    Ok(())
}

/// Decode the single output of a method
pub fn decode_single<T: FromToken>(tokens: Vec<Token>) -> Result<T, ContractError> {
    let mut tokens = tokens.into_iter();
    let value = next_field(&mut tokens)?;
    if tokens.next().is_some() {
        return Err(ContractError::Decode("unexpected extra outputs".into()));
    }
    Ok(value)
}

/// Decode multiple unnamed outputs into a Rust tuple
pub fn decode_tuple<T: FromTokens>(tokens: Vec<Token>) -> Result<T, ContractError> {
    T::from_tokens(tokens)
}

/// Decode multiple named outputs into their generated tuple type
pub fn decode_named<T: FromToken>(tokens: Vec<Token>) -> Result<T, ContractError> {
    T::from_token(Token::Tuple(tokens))
}
