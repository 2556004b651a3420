//! ABI type resolution
//!
//! Parses raw ABI type strings into [`AbiType`] and interns anonymous tuple
//! shapes by a structural hash, so that identical tuples found anywhere in a
//! contract resolve to one [`TupleType`].

use crate::loader::AbiParameter;
use abi_gen_common::{Error, Result};
use sha3::{Digest, Keccak256};
use std::collections::HashMap;
use tracing::debug;

/// Index of a tuple in the [`TypeResolver`] that created it
pub type TupleId = usize;

/// Resolved ABI type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbiType {
    Address,
    Bool,
    String,
    Bytes,
    FixedBytes(usize),
    Uint(usize),
    Int(usize),
    Array(Box<AbiType>),
    FixedArray(Box<AbiType>, usize),
    Tuple(TupleId),
}

impl AbiType {
    pub fn is_integer(&self) -> bool {
        matches!(self, AbiType::Uint(_) | AbiType::Int(_))
    }

    /// `bytes` or `bytesN`
    pub fn is_byte_sequence(&self) -> bool {
        matches!(self, AbiType::Bytes | AbiType::FixedBytes(_))
    }

    /// Element type of a dynamic or fixed-size array
    pub fn element(&self) -> Option<&AbiType> {
        match self {
            AbiType::Array(inner) | AbiType::FixedArray(inner, _) => Some(inner),
            _ => None,
        }
    }

    /// Innermost non-array type
    pub fn innermost(&self) -> &AbiType {
        match self.element() {
            Some(inner) => inner.innermost(),
            None => self,
        }
    }

    /// Type as it appears in a canonical function signature, e.g. `(bytes,uint32)[]`
    pub fn signature(&self, resolver: &TypeResolver) -> String {
        match self {
            AbiType::Address => "address".to_string(),
            AbiType::Bool => "bool".to_string(),
            AbiType::String => "string".to_string(),
            AbiType::Bytes => "bytes".to_string(),
            AbiType::FixedBytes(size) => format!("bytes{}", size),
            AbiType::Uint(bits) => format!("uint{}", bits),
            AbiType::Int(bits) => format!("int{}", bits),
            AbiType::Array(inner) => format!("{}[]", inner.signature(resolver)),
            AbiType::FixedArray(inner, len) => format!("{}[{}]", inner.signature(resolver), len),
            AbiType::Tuple(id) => {
                let fields: Vec<String> = resolver
                    .tuple(*id)
                    .fields
                    .iter()
                    .map(|f| f.ty.signature(resolver))
                    .collect();
                format!("({})", fields.join(","))
            }
        }
    }

    /// Type including tuple field names, used for structural hashing
    fn structural(&self, resolver: &TypeResolver) -> String {
        match self {
            AbiType::Array(inner) => format!("{}[]", inner.structural(resolver)),
            AbiType::FixedArray(inner, len) => format!("{}[{}]", inner.structural(resolver), len),
            AbiType::Tuple(id) => format!("({})", resolver.tuple(*id).canonical),
            other => other.signature(resolver),
        }
    }
}

/// One named field of a tuple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleField {
    pub name: String,
    pub ty: AbiType,
}

/// A synthesized struct type for an anonymous ABI tuple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleType {
    pub id: TupleId,
    /// Content-derived name, e.g. `Tuple0xcf8ad995`
    pub name: String,
    /// Canonical serialization of the ordered `(name, type)` list
    pub canonical: String,
    pub fields: Vec<TupleField>,
}

/// Keccak-256 digest
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Default tuple naming: `Tuple0x` followed by the first four digest bytes
pub fn tuple_name(canonical: &str) -> String {
    let hash = keccak256(canonical.as_bytes());
    format!("Tuple0x{}", hex::encode(&hash[..4]))
}

/// Resolves parameter types and owns the run-scoped tuple namespace
pub struct TypeResolver {
    tuples: Vec<TupleType>,
    by_name: HashMap<String, TupleId>,
    namer: fn(&str) -> String,
}

impl TypeResolver {
    pub fn new() -> Self {
        Self::with_namer(tuple_name)
    }

    /// Use a custom canonical-form → name function
    pub fn with_namer(namer: fn(&str) -> String) -> Self {
        Self {
            tuples: Vec::new(),
            by_name: HashMap::new(),
            namer,
        }
    }

    pub fn tuple(&self, id: TupleId) -> &TupleType {
        &self.tuples[id]
    }

    /// Tuples in registration order; nested tuples precede their parents
    pub fn tuples(&self) -> &[TupleType] {
        &self.tuples
    }

    /// Resolve a parameter, interning any tuple it contains
    pub fn resolve(&mut self, param: &AbiParameter, context: &str) -> Result<AbiType> {
        let (base, dims) = split_array_suffixes(&param.param_type)
            .ok_or_else(|| Error::unsupported_type(&param.param_type, context))?;

        let mut ty = match base {
            "tuple" => {
                let components = param.components.as_deref().ok_or_else(|| {
                    Error::malformed(format!(
                        "Tuple parameter '{}' in {} has no components",
                        param.name, context
                    ))
                })?;
                let mut fields = Vec::with_capacity(components.len());
                for component in components {
                    let field_context = format!("{}.{}", context, param.name);
                    fields.push(TupleField {
                        name: component.name.clone(),
                        ty: self.resolve(component, &field_context)?,
                    });
                }
                AbiType::Tuple(self.intern(fields)?)
            }
            other => parse_elementary(other)
                .ok_or_else(|| Error::unsupported_type(&param.param_type, context))?,
        };

        for dim in dims {
            ty = match dim {
                None => AbiType::Array(Box::new(ty)),
                Some(len) => AbiType::FixedArray(Box::new(ty), len),
            };
        }

        Ok(ty)
    }

    /// Look up or create the tuple for an ordered field list
    pub fn intern(&mut self, fields: Vec<TupleField>) -> Result<TupleId> {
        let canonical = fields
            .iter()
            .map(|f| format!("{}:{}", f.name, f.ty.structural(self)))
            .collect::<Vec<_>>()
            .join(",");
        let name = (self.namer)(&canonical);

        if let Some(&id) = self.by_name.get(&name) {
            let existing = &self.tuples[id];
            if existing.canonical != canonical {
                return Err(Error::TupleTypeCollision {
                    name,
                    existing: existing.canonical.clone(),
                    incoming: canonical,
                });
            }
            return Ok(id);
        }

        let id = self.tuples.len();
        debug!("Interned tuple {} as {}", canonical, name);
        self.by_name.insert(name.clone(), id);
        self.tuples.push(TupleType {
            id,
            name,
            canonical,
            fields,
        });
        Ok(id)
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `uint256[2][]` into `uint256` and `[Some(2), None]`, innermost first
fn split_array_suffixes(raw: &str) -> Option<(&str, Vec<Option<usize>>)> {
    let mut rest = raw.trim();
    let mut dims = Vec::new();

    while let Some(stripped) = rest.strip_suffix(']') {
        let open = stripped.rfind('[')?;
        let inner = &stripped[open + 1..];
        let dim = if inner.is_empty() {
            None
        } else {
            let len: usize = inner.parse().ok()?;
            if len == 0 {
                return None;
            }
            Some(len)
        };
        dims.push(dim);
        rest = &stripped[..open];
    }

    dims.reverse();
    Some((rest, dims))
}

fn parse_elementary(base: &str) -> Option<AbiType> {
    match base {
        "address" => return Some(AbiType::Address),
        "bool" => return Some(AbiType::Bool),
        "string" => return Some(AbiType::String),
        "bytes" => return Some(AbiType::Bytes),
        "uint" => return Some(AbiType::Uint(256)),
        "int" => return Some(AbiType::Int(256)),
        _ => {}
    }

    if let Some(size) = base.strip_prefix("bytes") {
        let size: usize = size.parse().ok()?;
        return (1..=32).contains(&size).then_some(AbiType::FixedBytes(size));
    }
    if let Some(bits) = base.strip_prefix("uint") {
        return parse_bits(bits).map(AbiType::Uint);
    }
    if let Some(bits) = base.strip_prefix("int") {
        return parse_bits(bits).map(AbiType::Int);
    }

    None
}

fn parse_bits(bits: &str) -> Option<usize> {
    let bits: usize = bits.parse().ok()?;
    (bits > 0 && bits <= 256 && bits % 8 == 0).then_some(bits)
}
