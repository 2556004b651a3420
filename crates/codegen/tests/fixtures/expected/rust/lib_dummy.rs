//! Generated bindings for the LibDummy contract.
//!
//! Do not edit by hand; regenerate with `abi-gen generate`.

#![allow(non_snake_case, unused_imports, unused_mut, clippy::too_many_arguments)]

use abi_gen_runtime as runtime;
use abi_gen_runtime::{FromToken as _, IntoAbiValue as _, Normalize as _};

/// ABI of the LibDummy contract, embedded verbatim
pub const ABI_JSON: &str = r#"[]"#;

/// Wrapper for the LibDummy contract
pub struct LibDummy {
    contract: std::sync::Arc<runtime::ContractWrapper>,
}

impl LibDummy {
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
            contract,
        })
    }

    /// Shared provider, address and validator of every method
    pub fn contract(&self) -> &runtime::ContractWrapper {
        &self.contract
    }

    /// Return the ABI of the underlying contract
    pub fn abi() -> &'static str {
        ABI_JSON
    }
}
