//! Ethereum ABI loader
//!
//! Parses contract ABI JSON into an [`AbiDocument`]. Accepts either a bare
//! entry list or a compiler artifact object carrying an `abi` array (at the top
//! level or under `compilerOutput`), optionally with `devdoc` documentation.

use abi_gen_common::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Function state mutability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}

impl StateMutability {
    /// Parse the `stateMutability` value of an ABI entry
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pure" => Some(Self::Pure),
            "view" => Some(Self::View),
            "nonpayable" => Some(Self::Nonpayable),
            "payable" => Some(Self::Payable),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::View => "view",
            Self::Nonpayable => "nonpayable",
            Self::Payable => "payable",
        }
    }

    /// Pure and view functions never mutate chain state
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Pure | Self::View)
    }
}

/// Kind of an ABI entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Function,
    Event,
    Constructor,
    Fallback,
    Receive,
    Error,
    /// Entry type this loader does not know; kept for forward compatibility
    Unsupported(String),
}

impl EntryKind {
    fn from_type(entry_type: &str) -> Self {
        match entry_type {
            "function" => Self::Function,
            "event" => Self::Event,
            "constructor" => Self::Constructor,
            "fallback" => Self::Fallback,
            "receive" => Self::Receive,
            "error" => Self::Error,
            other => Self::Unsupported(other.to_string()),
        }
    }

    fn requires_name(&self) -> bool {
        matches!(self, Self::Function | Self::Event | Self::Error)
    }

    fn has_mutability(&self) -> bool {
        matches!(
            self,
            Self::Function | Self::Constructor | Self::Fallback | Self::Receive
        )
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// ABI parameter definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParameter {
    /// Parameter name, possibly empty
    pub name: String,
    /// Raw ABI type, e.g. `uint256`, `tuple[]`
    pub param_type: String,
    /// Internal type emitted by the compiler (`struct Foo`, `contract IERC20`)
    pub internal_type: Option<String>,
    /// Components, present iff the type is a tuple or an array of tuples
    pub components: Option<Vec<AbiParameter>>,
    /// Whether the parameter is indexed (events only)
    pub indexed: bool,
}

/// A single entry of an ABI document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEntry {
    /// Entry name; empty for constructor, fallback and receive
    pub name: String,
    pub kind: EntryKind,
    pub state_mutability: Option<StateMutability>,
    pub inputs: Vec<AbiParameter>,
    /// Outputs, functions only
    pub outputs: Vec<AbiParameter>,
    /// Events only
    pub anonymous: bool,
    /// The entry exactly as it appeared in the input
    pub raw: Value,
}

impl AbiEntry {
    pub fn is_function(&self) -> bool {
        self.kind == EntryKind::Function
    }

    pub fn is_event(&self) -> bool {
        self.kind == EntryKind::Event
    }

    pub fn is_read_only(&self) -> bool {
        self.state_mutability
            .map(|m| m.is_read_only())
            .unwrap_or(false)
    }
}

/// Developer documentation for one method, keyed by canonical signature in the artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDoc {
    pub details: Option<String>,
    pub params: BTreeMap<String, String>,
    pub returns: Option<String>,
}

/// Parsed ABI document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiDocument {
    pub entries: Vec<AbiEntry>,
    /// Method documentation keyed by canonical signature, e.g. `acceptsBytes(bytes)`
    pub method_docs: BTreeMap<String, MethodDoc>,
}

impl AbiDocument {
    pub fn functions(&self) -> impl Iterator<Item = &AbiEntry> {
        self.entries.iter().filter(|e| e.is_function())
    }

    pub fn events(&self) -> impl Iterator<Item = &AbiEntry> {
        self.entries.iter().filter(|e| e.is_event())
    }

    pub fn unsupported(&self) -> impl Iterator<Item = &AbiEntry> {
        self.entries.iter().filter(|e| e.kind.is_unsupported())
    }

    /// Compact JSON of the ABI entries, as embedded into generated sources
    pub fn to_json(&self) -> String {
        let raw: Vec<Value> = self.entries.iter().map(|e| e.raw.clone()).collect();
        Value::Array(raw).to_string()
    }
}

/// Ethereum ABI loader
#[derive(Debug, Default)]
pub struct AbiLoader;

impl AbiLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load an ABI document from a file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<AbiDocument> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}: {}", path.display(), e)))?;
        self.load_str(&content)
    }

    /// Load an ABI document from JSON text
    pub fn load_str(&self, content: &str) -> Result<AbiDocument> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| Error::malformed(format!("Invalid JSON: {}", e)))?;
        self.load_value(&value)
    }

    /// Load an ABI document from a parsed JSON value
    pub fn load_value(&self, value: &Value) -> Result<AbiDocument> {
        let (abi, devdoc) = Self::locate_abi(value)?;

        let mut entries = Vec::with_capacity(abi.len());
        for (index, item) in abi.iter().enumerate() {
            let entry = self.parse_entry(index, item)?;
            if let EntryKind::Unsupported(ref kind) = entry.kind {
                warn!("ABI entry {} has unsupported type '{}', keeping it unrendered", index, kind);
            }
            entries.push(entry);
        }

        let method_docs = devdoc.map(Self::parse_devdoc).unwrap_or_default();
        debug!(
            "Loaded ABI with {} entries and {} documented methods",
            entries.len(),
            method_docs.len()
        );

        Ok(AbiDocument {
            entries,
            method_docs,
        })
    }

    /// Find the entry list and the optional devdoc object
    fn locate_abi(value: &Value) -> Result<(&Vec<Value>, Option<&Value>)> {
        if let Some(array) = value.as_array() {
            return Ok((array, None));
        }

        let object = value
            .as_object()
            .ok_or_else(|| Error::malformed("ABI must be an array or an artifact object"))?;

        let container = match object.get("compilerOutput") {
            Some(output) => output,
            None => value,
        };

        let abi = container
            .get("abi")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::malformed("Artifact object has no 'abi' array"))?;

        Ok((abi, container.get("devdoc")))
    }

    fn parse_entry(&self, index: usize, value: &Value) -> Result<AbiEntry> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::malformed(format!("ABI entry {} is not an object", index)))?;

        let entry_type = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::malformed(format!("ABI entry {} is missing 'type'", index)))?;
        let kind = EntryKind::from_type(entry_type);

        let name = match object.get("name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None if kind.requires_name() => {
                return Err(Error::malformed(format!(
                    "ABI entry {} of type '{}' is missing 'name'",
                    index, entry_type
                )))
            }
            None => String::new(),
        };

        if kind.is_unsupported() {
            return Ok(AbiEntry {
                name,
                kind,
                state_mutability: None,
                inputs: Vec::new(),
                outputs: Vec::new(),
                anonymous: false,
                raw: value.clone(),
            });
        }

        let context = if name.is_empty() { entry_type.to_string() } else { name.clone() };
        let is_event = kind == EntryKind::Event;

        let inputs = Self::parse_parameters(object.get("inputs"), &context, is_event)?;
        let outputs = if kind == EntryKind::Function {
            Self::parse_parameters(object.get("outputs"), &context, false)?
        } else {
            Vec::new()
        };

        let state_mutability = if kind.has_mutability() {
            Some(Self::parse_state_mutability(value, &context)?)
        } else {
            None
        };

        let anonymous = is_event
            && object
                .get("anonymous")
                .and_then(Value::as_bool)
                .unwrap_or(false);

        Ok(AbiEntry {
            name,
            kind,
            state_mutability,
            inputs,
            outputs,
            anonymous,
            raw: value.clone(),
        })
    }

    fn parse_state_mutability(value: &Value, context: &str) -> Result<StateMutability> {
        if let Some(raw) = value.get("stateMutability").and_then(Value::as_str) {
            return StateMutability::parse(raw).ok_or_else(|| {
                Error::malformed(format!("Unknown stateMutability '{}' on '{}'", raw, context))
            });
        }

        // Legacy ABIs only carry the constant/payable flags
        if value.get("constant").and_then(Value::as_bool).unwrap_or(false) {
            Ok(StateMutability::View)
        } else if value.get("payable").and_then(Value::as_bool).unwrap_or(false) {
            Ok(StateMutability::Payable)
        } else {
            Ok(StateMutability::Nonpayable)
        }
    }

    fn parse_parameters(
        value: Option<&Value>,
        context: &str,
        allow_indexed: bool,
    ) -> Result<Vec<AbiParameter>> {
        let array = match value {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(array)) => array,
            Some(_) => {
                return Err(Error::malformed(format!(
                    "Parameters of '{}' must be an array",
                    context
                )))
            }
        };

        array
            .iter()
            .map(|param| Self::parse_parameter(param, context, allow_indexed))
            .collect()
    }

    fn parse_parameter(param: &Value, context: &str, allow_indexed: bool) -> Result<AbiParameter> {
        let name = param
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        let param_type = param
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::malformed(format!("Parameter '{}' of '{}' is missing 'type'", name, context))
            })?
            .to_string();

        let internal_type = param
            .get("internalType")
            .and_then(Value::as_str)
            .map(String::from);

        let components = if param_type.starts_with("tuple") {
            let nested = Self::parse_parameters(param.get("components"), context, false)?;
            if nested.is_empty() && param.get("components").is_none() {
                return Err(Error::malformed(format!(
                    "Tuple parameter '{}' of '{}' has no components",
                    name, context
                )));
            }
            Some(nested)
        } else {
            None
        };

        let indexed = allow_indexed
            && param
                .get("indexed")
                .and_then(Value::as_bool)
                .unwrap_or(false);

        Ok(AbiParameter {
            name,
            param_type,
            internal_type,
            components,
            indexed,
        })
    }

    fn parse_devdoc(devdoc: &Value) -> BTreeMap<String, MethodDoc> {
        let mut docs = BTreeMap::new();
        let methods = match devdoc.get("methods").and_then(Value::as_object) {
            Some(methods) => methods,
            None => return docs,
        };

        for (signature, doc) in methods {
            let params = doc
                .get("params")
                .and_then(Value::as_object)
                .map(|params| {
                    params
                        .iter()
                        .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                        .collect()
                })
                .unwrap_or_default();

            docs.insert(
                signature.clone(),
                MethodDoc {
                    details: doc.get("details").and_then(Value::as_str).map(String::from),
                    params,
                    returns: doc.get("return").and_then(Value::as_str).map(String::from),
                },
            );
        }

        docs
    }
}
