//! Generated bindings for the AbiGenDummy contract.
//!
//! Do not edit by hand; regenerate with `abi-gen generate`.

#![allow(non_snake_case, unused_imports, unused_mut, clippy::too_many_arguments)]

use abi_gen_runtime as runtime;
use abi_gen_runtime::{FromToken as _, IntoAbiValue as _, Normalize as _};

/// ABI of the AbiGenDummy contract, embedded verbatim
pub const ABI_JSON: &str = r#"[{"constant":true,"inputs":[],"name":"simpleRequire","outputs":[],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[{"name":"a","type":"bytes[]"}],"name":"acceptsAnArrayOfBytes","outputs":[],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[{"name":"hash","type":"bytes32"},{"name":"v","type":"uint8"},{"name":"r","type":"bytes32"},{"name":"s","type":"bytes32"}],"name":"ecrecoverFn","outputs":[{"name":"signerAddress","type":"address"}],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[{"name":"a","type":"bytes"}],"name":"acceptsBytes","outputs":[],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[],"name":"revertWithConstant","outputs":[],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[],"name":"simpleRevert","outputs":[],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[],"name":"nestedStructOutput","outputs":[{"components":[{"components":[{"name":"someBytes","type":"bytes"},{"name":"anInteger","type":"uint32"},{"name":"aDynamicArrayOfBytes","type":"bytes[]"},{"name":"aString","type":"string"}],"name":"innerStruct","type":"tuple"},{"name":"description","type":"string"}],"name":"","type":"tuple"}],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[],"name":"requireWithConstant","outputs":[],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[{"name":"x","type":"address"},{"name":"a","type":"uint256"},{"name":"b","type":"uint256"},{"name":"y","type":"address"},{"name":"c","type":"uint256"}],"name":"withAddressInput","outputs":[{"name":"z","type":"address"}],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[{"components":[{"name":"someBytes","type":"bytes"},{"name":"anInteger","type":"uint32"},{"name":"aDynamicArrayOfBytes","type":"bytes[]"},{"name":"aString","type":"string"}],"name":"s","type":"tuple"}],"name":"structInput","outputs":[],"payable":false,"stateMutability":"pure","type":"function"},{"constant":false,"inputs":[],"name":"nonPureMethod","outputs":[{"name":"","type":"uint256"}],"payable":false,"stateMutability":"nonpayable","type":"function"},{"constant":true,"inputs":[{"name":"x","type":"uint256"}],"name":"simplePureFunctionWithInput","outputs":[{"name":"sum","type":"uint256"}],"payable":false,"stateMutability":"pure","type":"function"},{"constant":false,"inputs":[],"name":"nonPureMethodThatReturnsNothing","outputs":[],"payable":false,"stateMutability":"nonpayable","type":"function"},{"constant":true,"inputs":[],"name":"simplePureFunction","outputs":[{"name":"result","type":"uint256"}],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[{"components":[{"components":[{"name":"someBytes","type":"bytes"},{"name":"anInteger","type":"uint32"},{"name":"aDynamicArrayOfBytes","type":"bytes[]"},{"name":"aString","type":"string"}],"name":"innerStruct","type":"tuple"},{"name":"description","type":"string"}],"name":"n","type":"tuple"}],"name":"nestedStructInput","outputs":[],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[],"name":"structOutput","outputs":[{"components":[{"name":"someBytes","type":"bytes"},{"name":"anInteger","type":"uint32"},{"name":"aDynamicArrayOfBytes","type":"bytes[]"},{"name":"aString","type":"string"}],"name":"s","type":"tuple"}],"payable":false,"stateMutability":"pure","type":"function"},{"constant":true,"inputs":[],"name":"pureFunctionWithConstant","outputs":[{"name":"someConstant","type":"uint256"}],"payable":false,"stateMutability":"pure","type":"function"},{"anonymous":false,"inputs":[{"indexed":false,"name":"param","type":"uint8"}],"name":"AnEvent","type":"event"}]"#;

/// Rust representation of an ABI tuple.
///
/// A tuple in an ABI may have been a literal tuple or a Solidity `struct`;
/// the ABI tells neither which nor the struct's name. This type is named after
/// a hash of the tuple's field names and types, and every method whose ABI
/// refers to a tuple of the same shape uses it.
///
/// `bytes` members are hex text when passed in and raw bytes when returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple0x01f2770f {
    pub someBytes: Vec<u8>,
    pub anInteger: runtime::U256,
    pub aDynamicArrayOfBytes: Vec<Vec<u8>>,
    pub aString: String,
}

impl runtime::Normalize for Tuple0x01f2770f {
    fn normalize(self) -> Result<Self, runtime::ContractError> {
        let Self { someBytes, anInteger, aDynamicArrayOfBytes, aString } = self;
        let someBytes = runtime::normalize::hex_bytes_decode(&someBytes, None)?;
        let anInteger = runtime::normalize::coerce_integer(anInteger, false, 32)?;
        let aDynamicArrayOfBytes = runtime::normalize::hex_bytes_array_decode(&aDynamicArrayOfBytes, None)?;
        Ok(Self { someBytes, anInteger, aDynamicArrayOfBytes, aString })
    }
}

impl runtime::IntoAbiValue for Tuple0x01f2770f {
    fn into_abi_value(self) -> runtime::AbiValue {
        runtime::AbiValue::Tuple(vec![self.someBytes.into_abi_value(), self.anInteger.into_abi_value(), self.aDynamicArrayOfBytes.into_abi_value(), self.aString.into_abi_value()])
    }
}

impl runtime::FromToken for Tuple0x01f2770f {
    fn from_token(token: runtime::Token) -> Result<Self, runtime::ContractError> {
        let mut fields = runtime::tuple_fields(token, 4)?.into_iter();
        Ok(Self {
            someBytes: runtime::next_field(&mut fields)?,
            anInteger: runtime::next_field(&mut fields)?,
            aDynamicArrayOfBytes: runtime::next_field(&mut fields)?,
            aString: runtime::next_field(&mut fields)?,
        })
    }
}

/// Rust representation of an ABI tuple.
///
/// A tuple in an ABI may have been a literal tuple or a Solidity `struct`;
/// the ABI tells neither which nor the struct's name. This type is named after
/// a hash of the tuple's field names and types, and every method whose ABI
/// refers to a tuple of the same shape uses it.
///
/// `bytes` members are hex text when passed in and raw bytes when returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple0xbbcf2f34 {
    pub innerStruct: Tuple0x01f2770f,
    pub description: String,
}

impl runtime::Normalize for Tuple0xbbcf2f34 {
    fn normalize(self) -> Result<Self, runtime::ContractError> {
        let Self { innerStruct, description } = self;
        let innerStruct = innerStruct.normalize()?;
        Ok(Self { innerStruct, description })
    }
}

impl runtime::IntoAbiValue for Tuple0xbbcf2f34 {
    fn into_abi_value(self) -> runtime::AbiValue {
        runtime::AbiValue::Tuple(vec![self.innerStruct.into_abi_value(), self.description.into_abi_value()])
    }
}

impl runtime::FromToken for Tuple0xbbcf2f34 {
    fn from_token(token: runtime::Token) -> Result<Self, runtime::ContractError> {
        let mut fields = runtime::tuple_fields(token, 2)?.into_iter();
        Ok(Self {
            innerStruct: runtime::next_field(&mut fields)?,
            description: runtime::next_field(&mut fields)?,
        })
    }
}

/// Various interfaces to the `simpleRequire` method
pub struct SimpleRequireMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl SimpleRequireMethod {
    const NAME: &'static str = "simpleRequire";
    /// `simpleRequire()`
    const SELECTOR: [u8; 4] = [0x00, 0x09, 0xe4, 0x37];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Execute the `simpleRequire` method as a read-only call
    pub async fn call(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<(), runtime::ContractError> {
        let args = Vec::new();
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_void(tokens)
    }

    /// Execute the `simpleRequire` method as a transaction
    pub async fn send_transaction(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = Vec::new();
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `acceptsAnArrayOfBytes` method
pub struct AcceptsAnArrayOfBytesMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl AcceptsAnArrayOfBytesMethod {
    const NAME: &'static str = "acceptsAnArrayOfBytes";
    /// `acceptsAnArrayOfBytes(bytes[])`
    const SELECTOR: [u8; 4] = [0x05, 0x27, 0xc2, 0x8f];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Validate the inputs to the `acceptsAnArrayOfBytes` method
    pub fn validate_and_normalize_inputs(
        &self,
        a: &[Vec<u8>],
    ) -> Result<Vec<runtime::AbiValue>, runtime::ContractError> {
        let validator = self.contract.validator();
        validator.assert_valid(Self::NAME, "a", &a)?;
        let a = runtime::normalize::hex_bytes_array_decode(&a, None)?;
        Ok(vec![a.into_abi_value()])
    }

    /// Execute the `acceptsAnArrayOfBytes` method as a read-only call
    pub async fn call(
        &self,
        a: &[Vec<u8>],
        tx_params: Option<runtime::TxParams>,
    ) -> Result<(), runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(a)?;
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_void(tokens)
    }

    /// Execute the `acceptsAnArrayOfBytes` method as a transaction
    pub async fn send_transaction(
        &self,
        a: &[Vec<u8>],
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(a)?;
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `ecrecoverFn` method
pub struct EcrecoverFnMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl EcrecoverFnMethod {
    const NAME: &'static str = "ecrecoverFn";
    /// `ecrecoverFn(bytes32,uint8,bytes32,bytes32)`
    const SELECTOR: [u8; 4] = [0x36, 0xb3, 0x23, 0x96];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Validate the inputs to the `ecrecoverFn` method
    pub fn validate_and_normalize_inputs(
        &self,
        hash: &[u8],
        v: impl Into<runtime::Numeric>,
        r: &[u8],
        s: &[u8],
    ) -> Result<Vec<runtime::AbiValue>, runtime::ContractError> {
        let validator = self.contract.validator();
        validator.assert_valid(Self::NAME, "hash", &hash)?;
        let hash = runtime::normalize::hex_bytes_decode(&hash, Some(32))?;
        let v: runtime::Numeric = v.into();
        validator.assert_valid(Self::NAME, "v", &v)?;
        let v = runtime::normalize::coerce_integer(v, false, 8)?;
        validator.assert_valid(Self::NAME, "r", &r)?;
        let r = runtime::normalize::hex_bytes_decode(&r, Some(32))?;
        validator.assert_valid(Self::NAME, "s", &s)?;
        let s = runtime::normalize::hex_bytes_decode(&s, Some(32))?;
        Ok(vec![hash.into_abi_value(), v.into_abi_value(), r.into_abi_value(), s.into_abi_value()])
    }

    /// Execute the `ecrecoverFn` method as a read-only call
    pub async fn call(
        &self,
        hash: &[u8],
        v: impl Into<runtime::Numeric>,
        r: &[u8],
        s: &[u8],
        tx_params: Option<runtime::TxParams>,
    ) -> Result<String, runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(hash, v, r, s)?;
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_single(tokens)
    }

    /// Execute the `ecrecoverFn` method as a transaction
    pub async fn send_transaction(
        &self,
        hash: &[u8],
        v: impl Into<runtime::Numeric>,
        r: &[u8],
        s: &[u8],
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(hash, v, r, s)?;
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `acceptsBytes` method
pub struct AcceptsBytesMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl AcceptsBytesMethod {
    const NAME: &'static str = "acceptsBytes";
    /// `acceptsBytes(bytes)`
    const SELECTOR: [u8; 4] = [0x3e, 0x9e, 0xf6, 0x6a];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Validate the inputs to the `acceptsBytes` method
    pub fn validate_and_normalize_inputs(
        &self,
        a: &[u8],
    ) -> Result<Vec<runtime::AbiValue>, runtime::ContractError> {
        let validator = self.contract.validator();
        validator.assert_valid(Self::NAME, "a", &a)?;
        let a = runtime::normalize::hex_bytes_decode(&a, None)?;
        Ok(vec![a.into_abi_value()])
    }

    /// Execute the `acceptsBytes` method as a read-only call
    pub async fn call(
        &self,
        a: &[u8],
        tx_params: Option<runtime::TxParams>,
    ) -> Result<(), runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(a)?;
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_void(tokens)
    }

    /// Execute the `acceptsBytes` method as a transaction
    pub async fn send_transaction(
        &self,
        a: &[u8],
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(a)?;
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `revertWithConstant` method
pub struct RevertWithConstantMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl RevertWithConstantMethod {
    const NAME: &'static str = "revertWithConstant";
    /// `revertWithConstant()`
    const SELECTOR: [u8; 4] = [0x45, 0x82, 0xea, 0xb2];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Execute the `revertWithConstant` method as a read-only call
    pub async fn call(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<(), runtime::ContractError> {
        let args = Vec::new();
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_void(tokens)
    }

    /// Execute the `revertWithConstant` method as a transaction
    pub async fn send_transaction(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = Vec::new();
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `simpleRevert` method
pub struct SimpleRevertMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl SimpleRevertMethod {
    const NAME: &'static str = "simpleRevert";
    /// `simpleRevert()`
    const SELECTOR: [u8; 4] = [0x45, 0xfd, 0xbd, 0xb7];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Execute the `simpleRevert` method as a read-only call
    pub async fn call(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<(), runtime::ContractError> {
        let args = Vec::new();
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_void(tokens)
    }

    /// Execute the `simpleRevert` method as a transaction
    pub async fn send_transaction(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = Vec::new();
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `nestedStructOutput` method
pub struct NestedStructOutputMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl NestedStructOutputMethod {
    const NAME: &'static str = "nestedStructOutput";
    /// `nestedStructOutput()`
    const SELECTOR: [u8; 4] = [0x59, 0xc2, 0x8a, 0xdd];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Execute the `nestedStructOutput` method as a read-only call
    pub async fn call(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<Tuple0xbbcf2f34, runtime::ContractError> {
        let args = Vec::new();
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_single(tokens)
    }

    /// Execute the `nestedStructOutput` method as a transaction
    pub async fn send_transaction(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = Vec::new();
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `requireWithConstant` method
pub struct RequireWithConstantMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl RequireWithConstantMethod {
    const NAME: &'static str = "requireWithConstant";
    /// `requireWithConstant()`
    const SELECTOR: [u8; 4] = [0x5b, 0xa3, 0xc7, 0xc0];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Execute the `requireWithConstant` method as a read-only call
    pub async fn call(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<(), runtime::ContractError> {
        let args = Vec::new();
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_void(tokens)
    }

    /// Execute the `requireWithConstant` method as a transaction
    pub async fn send_transaction(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = Vec::new();
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `withAddressInput` method
pub struct WithAddressInputMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl WithAddressInputMethod {
    const NAME: &'static str = "withAddressInput";
    /// `withAddressInput(address,uint256,uint256,address,uint256)`
    const SELECTOR: [u8; 4] = [0x63, 0xd6, 0x9c, 0x88];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Validate the inputs to the `withAddressInput` method
    pub fn validate_and_normalize_inputs(
        &self,
        x: &str,
        a: impl Into<runtime::Numeric>,
        b: impl Into<runtime::Numeric>,
        y: &str,
        c: impl Into<runtime::Numeric>,
    ) -> Result<Vec<runtime::AbiValue>, runtime::ContractError> {
        let validator = self.contract.validator();
        validator.assert_valid(Self::NAME, "x", &x)?;
        let x = runtime::normalize::checksum_address(&x)?;
        let a: runtime::Numeric = a.into();
        validator.assert_valid(Self::NAME, "a", &a)?;
        let a = runtime::normalize::coerce_integer(a, false, 256)?;
        let b: runtime::Numeric = b.into();
        validator.assert_valid(Self::NAME, "b", &b)?;
        let b = runtime::normalize::coerce_integer(b, false, 256)?;
        validator.assert_valid(Self::NAME, "y", &y)?;
        let y = runtime::normalize::checksum_address(&y)?;
        let c: runtime::Numeric = c.into();
        validator.assert_valid(Self::NAME, "c", &c)?;
        let c = runtime::normalize::coerce_integer(c, false, 256)?;
        Ok(vec![x.into_abi_value(), a.into_abi_value(), b.into_abi_value(), y.into_abi_value(), c.into_abi_value()])
    }

    /// Execute the `withAddressInput` method as a read-only call
    pub async fn call(
        &self,
        x: &str,
        a: impl Into<runtime::Numeric>,
        b: impl Into<runtime::Numeric>,
        y: &str,
        c: impl Into<runtime::Numeric>,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<String, runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(x, a, b, y, c)?;
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_single(tokens)
    }

    /// Execute the `withAddressInput` method as a transaction
    pub async fn send_transaction(
        &self,
        x: &str,
        a: impl Into<runtime::Numeric>,
        b: impl Into<runtime::Numeric>,
        y: &str,
        c: impl Into<runtime::Numeric>,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(x, a, b, y, c)?;
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `structInput` method
pub struct StructInputMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl StructInputMethod {
    const NAME: &'static str = "structInput";
    /// `structInput((bytes,uint32,bytes[],string))`
    const SELECTOR: [u8; 4] = [0x64, 0x73, 0x41, 0xeb];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Validate the inputs to the `structInput` method
    pub fn validate_and_normalize_inputs(
        &self,
        s: Tuple0x01f2770f,
    ) -> Result<Vec<runtime::AbiValue>, runtime::ContractError> {
        let validator = self.contract.validator();
        validator.assert_valid(Self::NAME, "s", &s)?;
        let s = s.normalize()?;
        Ok(vec![s.into_abi_value()])
    }

    /// Execute the `structInput` method as a read-only call
    pub async fn call(
        &self,
        s: Tuple0x01f2770f,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<(), runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(s)?;
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_void(tokens)
    }

    /// Execute the `structInput` method as a transaction
    pub async fn send_transaction(
        &self,
        s: Tuple0x01f2770f,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(s)?;
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `nonPureMethod` method
pub struct NonPureMethodMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl NonPureMethodMethod {
    const NAME: &'static str = "nonPureMethod";
    /// `nonPureMethod()`
    const SELECTOR: [u8; 4] = [0x76, 0xf1, 0x5d, 0x5b];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Execute the `nonPureMethod` method as a read-only call
    pub async fn call(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::U256, runtime::ContractError> {
        let args = Vec::new();
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_single(tokens)
    }

    /// Execute the `nonPureMethod` method as a transaction
    pub async fn send_transaction(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = Vec::new();
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `simplePureFunctionWithInput` method
pub struct SimplePureFunctionWithInputMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl SimplePureFunctionWithInputMethod {
    const NAME: &'static str = "simplePureFunctionWithInput";
    /// `simplePureFunctionWithInput(uint256)`
    const SELECTOR: [u8; 4] = [0x8e, 0xe5, 0x2b, 0x4e];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Validate the inputs to the `simplePureFunctionWithInput` method
    pub fn validate_and_normalize_inputs(
        &self,
        x: impl Into<runtime::Numeric>,
    ) -> Result<Vec<runtime::AbiValue>, runtime::ContractError> {
        let validator = self.contract.validator();
        let x: runtime::Numeric = x.into();
        validator.assert_valid(Self::NAME, "x", &x)?;
        let x = runtime::normalize::coerce_integer(x, false, 256)?;
        Ok(vec![x.into_abi_value()])
    }

    /// Execute the `simplePureFunctionWithInput` method as a read-only call
    pub async fn call(
        &self,
        x: impl Into<runtime::Numeric>,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::U256, runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(x)?;
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_single(tokens)
    }

    /// Execute the `simplePureFunctionWithInput` method as a transaction
    pub async fn send_transaction(
        &self,
        x: impl Into<runtime::Numeric>,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(x)?;
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `nonPureMethodThatReturnsNothing` method
pub struct NonPureMethodThatReturnsNothingMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl NonPureMethodThatReturnsNothingMethod {
    const NAME: &'static str = "nonPureMethodThatReturnsNothing";
    /// `nonPureMethodThatReturnsNothing()`
    const SELECTOR: [u8; 4] = [0x9a, 0x3b, 0x61, 0x85];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Execute the `nonPureMethodThatReturnsNothing` method as a read-only call
    pub async fn call(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<(), runtime::ContractError> {
        let args = Vec::new();
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_void(tokens)
    }

    /// Execute the `nonPureMethodThatReturnsNothing` method as a transaction
    pub async fn send_transaction(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = Vec::new();
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `simplePureFunction` method
pub struct SimplePureFunctionMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl SimplePureFunctionMethod {
    const NAME: &'static str = "simplePureFunction";
    /// `simplePureFunction()`
    const SELECTOR: [u8; 4] = [0xa3, 0xc2, 0xf6, 0xb6];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Execute the `simplePureFunction` method as a read-only call
    pub async fn call(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::U256, runtime::ContractError> {
        let args = Vec::new();
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_single(tokens)
    }

    /// Execute the `simplePureFunction` method as a transaction
    pub async fn send_transaction(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = Vec::new();
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `nestedStructInput` method
pub struct NestedStructInputMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl NestedStructInputMethod {
    const NAME: &'static str = "nestedStructInput";
    /// `nestedStructInput(((bytes,uint32,bytes[],string),string))`
    const SELECTOR: [u8; 4] = [0xae, 0x2d, 0xae, 0x17];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Validate the inputs to the `nestedStructInput` method
    pub fn validate_and_normalize_inputs(
        &self,
        n: Tuple0xbbcf2f34,
    ) -> Result<Vec<runtime::AbiValue>, runtime::ContractError> {
        let validator = self.contract.validator();
        validator.assert_valid(Self::NAME, "n", &n)?;
        let n = n.normalize()?;
        Ok(vec![n.into_abi_value()])
    }

    /// Execute the `nestedStructInput` method as a read-only call
    pub async fn call(
        &self,
        n: Tuple0xbbcf2f34,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<(), runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(n)?;
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_void(tokens)
    }

    /// Execute the `nestedStructInput` method as a transaction
    pub async fn send_transaction(
        &self,
        n: Tuple0xbbcf2f34,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = self.validate_and_normalize_inputs(n)?;
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `structOutput` method
pub struct StructOutputMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl StructOutputMethod {
    const NAME: &'static str = "structOutput";
    /// `structOutput()`
    const SELECTOR: [u8; 4] = [0xd6, 0xd7, 0x61, 0x8c];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Execute the `structOutput` method as a read-only call
    pub async fn call(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<Tuple0x01f2770f, runtime::ContractError> {
        let args = Vec::new();
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_single(tokens)
    }

    /// Execute the `structOutput` method as a transaction
    pub async fn send_transaction(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = Vec::new();
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Various interfaces to the `pureFunctionWithConstant` method
pub struct PureFunctionWithConstantMethod {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl PureFunctionWithConstantMethod {
    const NAME: &'static str = "pureFunctionWithConstant";
    /// `pureFunctionWithConstant()`
    const SELECTOR: [u8; 4] = [0xd8, 0x8b, 0xe1, 0x2f];

    pub fn new(contract: std::sync::Arc<runtime::ContractWrapper>) -> Self {
        Self { contract }
    }

    /// Execute the `pureFunctionWithConstant` method as a read-only call
    pub async fn call(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::U256, runtime::ContractError> {
        let args = Vec::new();
        let tokens = self
            .contract
            .invoke_call(Self::NAME, Self::SELECTOR, args, tx_params)
            .await?;
        runtime::decode_single(tokens)
    }

    /// Execute the `pureFunctionWithConstant` method as a transaction
    pub async fn send_transaction(
        &self,
        tx_params: Option<runtime::TxParams>,
    ) -> Result<runtime::TxHash, runtime::ContractError> {
        let args = Vec::new();
        self.contract
            .invoke_send(Self::NAME, Self::SELECTOR, args, tx_params)
            .await
    }
}

/// Wrapper for the AbiGenDummy contract
pub struct AbiGenDummy {
    contract: std::sync::Arc<runtime::ContractWrapper>,
    pub simple_require: SimpleRequireMethod,
    pub accepts_an_array_of_bytes: AcceptsAnArrayOfBytesMethod,
    pub ecrecover_fn: EcrecoverFnMethod,
    pub accepts_bytes: AcceptsBytesMethod,
    pub revert_with_constant: RevertWithConstantMethod,
    pub simple_revert: SimpleRevertMethod,
    pub nested_struct_output: NestedStructOutputMethod,
    pub require_with_constant: RequireWithConstantMethod,
    pub with_address_input: WithAddressInputMethod,
    pub struct_input: StructInputMethod,
    pub non_pure_method: NonPureMethodMethod,
    pub simple_pure_function_with_input: SimplePureFunctionWithInputMethod,
    pub non_pure_method_that_returns_nothing: NonPureMethodThatReturnsNothingMethod,
    pub simple_pure_function: SimplePureFunctionMethod,
    pub nested_struct_input: NestedStructInputMethod,
    pub struct_output: StructOutputMethod,
    pub pure_function_with_constant: PureFunctionWithConstantMethod,
}

impl AbiGenDummy {
    /// Get an instance of the wrapper for a deployed contract.
    ///
    /// Without a `validator`, arguments are only normalized. With a
    /// `private_key`, the provider signs transactions locally before sending.
    pub fn new(
        provider: std::sync::Arc<dyn runtime::Provider>,
        contract_address: &str,
        validator: Option<std::sync::Arc<dyn runtime::Validator>>,
        private_key: Option<String>,
    ) -> Result<Self, runtime::ContractError> {
        let contract = std::sync::Arc::new(runtime::ContractWrapper::new(
            provider,
            contract_address,
            ABI_JSON,
            validator,
            private_key,
        )?);
        Ok(Self {
            simple_require: SimpleRequireMethod::new(std::sync::Arc::clone(&contract)),
            accepts_an_array_of_bytes: AcceptsAnArrayOfBytesMethod::new(std::sync::Arc::clone(&contract)),
            ecrecover_fn: EcrecoverFnMethod::new(std::sync::Arc::clone(&contract)),
            accepts_bytes: AcceptsBytesMethod::new(std::sync::Arc::clone(&contract)),
            revert_with_constant: RevertWithConstantMethod::new(std::sync::Arc::clone(&contract)),
            simple_revert: SimpleRevertMethod::new(std::sync::Arc::clone(&contract)),
            nested_struct_output: NestedStructOutputMethod::new(std::sync::Arc::clone(&contract)),
            require_with_constant: RequireWithConstantMethod::new(std::sync::Arc::clone(&contract)),
            with_address_input: WithAddressInputMethod::new(std::sync::Arc::clone(&contract)),
            struct_input: StructInputMethod::new(std::sync::Arc::clone(&contract)),
            non_pure_method: NonPureMethodMethod::new(std::sync::Arc::clone(&contract)),
            simple_pure_function_with_input: SimplePureFunctionWithInputMethod::new(std::sync::Arc::clone(&contract)),
            non_pure_method_that_returns_nothing: NonPureMethodThatReturnsNothingMethod::new(std::sync::Arc::clone(&contract)),
            simple_pure_function: SimplePureFunctionMethod::new(std::sync::Arc::clone(&contract)),
            nested_struct_input: NestedStructInputMethod::new(std::sync::Arc::clone(&contract)),
            struct_output: StructOutputMethod::new(std::sync::Arc::clone(&contract)),
            pure_function_with_constant: PureFunctionWithConstantMethod::new(std::sync::Arc::clone(&contract)),
            contract,
        })
    }

    /// Shared provider, address and validator of every method
    pub fn contract(&self) -> &runtime::ContractWrapper {
        &self.contract
    }

    /// Get the `AnEvent(uint8)` logs emitted by this contract in a transaction
    pub async fn get_an_event_event(
        &self,
        tx_hash: runtime::TxHash,
    ) -> Result<Vec<runtime::DecodedLog>, runtime::ContractError> {
        self.contract
            .get_event_logs("AnEvent", "0xe3c9bbb10642ec1eed28d6b1ee4c688ab132be41f045cf313e6f9cf1ccf236fe", tx_hash)
            .await
    }

    /// Return the ABI of the underlying contract
    pub fn abi() -> &'static str {
        ABI_JSON
    }
}
