//! Method model building
//!
//! Turns a loaded [`AbiDocument`] into a target-independent [`ContractModel`]:
//! one [`MethodDescriptor`] per function, one [`EventDescriptor`] per event,
//! and the tuple types they refer to.

use crate::loader::{AbiDocument, AbiEntry, AbiParameter, MethodDoc, StateMutability};
use crate::naming::{self, UniqueNames};
use crate::types::{keccak256, AbiType, TupleField, TupleId, TupleType, TypeResolver};
use crate::validation::ValidationRule;
use abi_gen_common::Result;
use tracing::debug;

/// One input parameter of a method or event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Name as written in the ABI, possibly empty
    pub abi_name: String,
    /// Binding name before target escaping
    pub name: String,
    pub ty: AbiType,
    pub rule: ValidationRule,
    pub indexed: bool,
}

/// What the read entry point of a method returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnShape {
    Void,
    Single(AbiType),
    /// Several outputs, at least one of them unnamed
    Tuple(Vec<AbiType>),
    /// Several outputs, all named; resolved to a shared tuple type
    NamedTuple(TupleId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// ABI name, used for dispatch
    pub name: String,
    /// Per-method wrapper type, e.g. `AcceptsBytesMethod`
    pub type_name: String,
    /// Container field before target escaping, e.g. `accepts_bytes`
    pub field_name: String,
    pub params: Vec<ParamDescriptor>,
    pub return_shape: ReturnShape,
    pub state_mutability: StateMutability,
    pub is_read_only: bool,
    /// Canonical signature, e.g. `acceptsBytes(bytes)`
    pub signature: String,
    pub selector: [u8; 4],
    pub doc: Option<MethodDoc>,
}

impl MethodDescriptor {
    pub fn selector_hex(&self) -> String {
        format!("0x{}", hex::encode(self.selector))
    }

    pub fn param_doc(&self, param: &ParamDescriptor) -> Option<&str> {
        self.doc
            .as_ref()
            .and_then(|doc| doc.params.get(&param.abi_name))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub name: String,
    /// Log accessor on the container, e.g. `get_an_event_event`
    pub accessor: String,
    pub signature: String,
    pub topic: [u8; 32],
    pub anonymous: bool,
    pub inputs: Vec<ParamDescriptor>,
}

/// Everything a template needs to render one contract
pub struct ContractModel {
    /// `PascalCase` contract name
    pub name: String,
    /// `snake_case` module name
    pub module_name: String,
    pub methods: Vec<MethodDescriptor>,
    pub events: Vec<EventDescriptor>,
    /// Compact ABI JSON embedded into the generated source
    pub abi_json: String,
    resolver: TypeResolver,
}

impl ContractModel {
    /// Tuple types in emission order
    pub fn tuples(&self) -> &[TupleType] {
        self.resolver.tuples()
    }

    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Builds a [`ContractModel`] with a fresh, run-scoped tuple namespace
pub struct ModelBuilder {
    resolver: TypeResolver,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::with_resolver(TypeResolver::new())
    }

    pub fn with_resolver(resolver: TypeResolver) -> Self {
        Self { resolver }
    }

    pub fn build(mut self, contract_name: &str, document: &AbiDocument) -> Result<ContractModel> {
        let mut method_names = UniqueNames::new();
        let mut methods = Vec::new();
        for entry in document.functions() {
            let type_base = method_names.assign(&naming::type_name(&entry.name));
            methods.push(self.build_method(entry, &type_base, document)?);
        }

        let mut event_names = UniqueNames::new();
        let mut events = Vec::new();
        for entry in document.events() {
            let accessor = event_names.assign(&naming::event_accessor_name(&entry.name));
            events.push(self.build_event(entry, accessor)?);
        }

        debug!(
            "Built model for {}: {} methods, {} events, {} tuples",
            contract_name,
            methods.len(),
            events.len(),
            self.resolver.tuples().len()
        );

        Ok(ContractModel {
            name: naming::type_name(contract_name),
            module_name: naming::snake_name(contract_name),
            methods,
            events,
            abi_json: document.to_json(),
            resolver: self.resolver,
        })
    }

    fn build_method(
        &mut self,
        entry: &AbiEntry,
        type_base: &str,
        document: &AbiDocument,
    ) -> Result<MethodDescriptor> {
        let context = format!("method '{}'", entry.name);
        let params = self.build_params(&entry.inputs, &context)?;
        let return_shape = self.return_shape(&entry.outputs, &context)?;

        let signature = self.signature(&entry.name, &params);
        let digest = keccak256(signature.as_bytes());
        let selector = [digest[0], digest[1], digest[2], digest[3]];
        let state_mutability = entry
            .state_mutability
            .unwrap_or(StateMutability::Nonpayable);

        Ok(MethodDescriptor {
            name: entry.name.clone(),
            type_name: naming::method_type_name(type_base),
            field_name: naming::snake_name(type_base),
            params,
            return_shape,
            state_mutability,
            is_read_only: state_mutability.is_read_only(),
            doc: document.method_docs.get(&signature).cloned(),
            signature,
            selector,
        })
    }

    fn build_event(&mut self, entry: &AbiEntry, accessor: String) -> Result<EventDescriptor> {
        let context = format!("event '{}'", entry.name);
        let inputs = self.build_params(&entry.inputs, &context)?;
        let signature = self.signature(&entry.name, &inputs);

        Ok(EventDescriptor {
            name: entry.name.clone(),
            accessor,
            topic: keccak256(signature.as_bytes()),
            signature,
            anonymous: entry.anonymous,
            inputs,
        })
    }

    fn build_params(
        &mut self,
        params: &[AbiParameter],
        context: &str,
    ) -> Result<Vec<ParamDescriptor>> {
        params
            .iter()
            .enumerate()
            .map(|(index, param)| {
                let ty = self.resolver.resolve(param, context)?;
                Ok(ParamDescriptor {
                    abi_name: param.name.clone(),
                    name: naming::param_name(&param.name, index),
                    rule: ValidationRule::for_type(&ty),
                    ty,
                    indexed: param.indexed,
                })
            })
            .collect()
    }

    fn return_shape(&mut self, outputs: &[AbiParameter], context: &str) -> Result<ReturnShape> {
        let context = format!("output of {}", context);
        let mut types = Vec::with_capacity(outputs.len());
        for output in outputs {
            types.push(self.resolver.resolve(output, &context)?);
        }

        let shape = match types.len() {
            0 => ReturnShape::Void,
            1 => ReturnShape::Single(types.remove(0)),
            _ if outputs.iter().all(|o| !o.name.trim().is_empty()) => {
                let fields = outputs
                    .iter()
                    .zip(types)
                    .map(|(output, ty)| TupleField {
                        name: output.name.clone(),
                        ty,
                    })
                    .collect();
                ReturnShape::NamedTuple(self.resolver.intern(fields)?)
            }
            _ => ReturnShape::Tuple(types),
        };
        Ok(shape)
    }

    fn signature(&self, name: &str, params: &[ParamDescriptor]) -> String {
        let types: Vec<String> = params
            .iter()
            .map(|p| p.ty.signature(&self.resolver))
            .collect();
        format!("{}({})", name, types.join(","))
    }
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}
