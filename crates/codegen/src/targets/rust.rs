use super::{Language, Scope, Target};
use crate::model::ReturnShape;
use crate::naming::escape_reserved;
use crate::types::{AbiType, TypeResolver};
use crate::validation::ValidationRule;
use abi_gen_common::{Error, Result};

/// Largest unnamed output list the runtime decodes into a Rust tuple
const MAX_TUPLE_OUTPUTS: usize = 8;

const RESERVED: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
    // locals and fields of the generated code
    "args", "contract", "runtime", "tokens", "tx_params", "validator",
];

/// Bindings against the `abi-gen-runtime` crate
pub struct RustTarget;

fn option_literal(size: Option<usize>) -> String {
    match size {
        Some(size) => format!("Some({})", size),
        None => "None".to_string(),
    }
}

impl Target for RustTarget {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn template_name(&self) -> &'static str {
        "rust_wrapper"
    }

    fn escape_identifier(&self, raw: &str) -> String {
        escape_reserved(raw, RESERVED, true)
    }

    fn input_type(&self, ty: &AbiType, resolver: &TypeResolver) -> String {
        match ty {
            AbiType::Address | AbiType::String => "&str".to_string(),
            AbiType::Uint(_) | AbiType::Int(_) => "impl Into<runtime::Numeric>".to_string(),
            AbiType::Bytes | AbiType::FixedBytes(_) => "&[u8]".to_string(),
            AbiType::Array(inner) | AbiType::FixedArray(inner, _) if inner.is_byte_sequence() => {
                "&[Vec<u8>]".to_string()
            }
            AbiType::Array(inner) | AbiType::FixedArray(inner, _) if inner.is_integer() => {
                "Vec<impl Into<runtime::Numeric>>".to_string()
            }
            other => self.value_type(other, resolver),
        }
    }

    fn value_type(&self, ty: &AbiType, resolver: &TypeResolver) -> String {
        match ty {
            AbiType::Address | AbiType::String => "String".to_string(),
            AbiType::Bool => "bool".to_string(),
            AbiType::Uint(_) | AbiType::Int(_) => "runtime::U256".to_string(),
            AbiType::Bytes | AbiType::FixedBytes(_) => "Vec<u8>".to_string(),
            AbiType::Array(inner) | AbiType::FixedArray(inner, _) => {
                format!("Vec<{}>", self.value_type(inner, resolver))
            }
            AbiType::Tuple(id) => resolver.tuple(*id).name.clone(),
        }
    }

    fn return_type(&self, shape: &ReturnShape, resolver: &TypeResolver) -> Result<String> {
        let ty = match shape {
            ReturnShape::Void => "()".to_string(),
            ReturnShape::Single(ty) => self.value_type(ty, resolver),
            ReturnShape::Tuple(types) => {
                if types.len() > MAX_TUPLE_OUTPUTS {
                    return Err(Error::unsupported_type(
                        format!("tuple of {} unnamed outputs", types.len()),
                        format!("Rust bindings (at most {})", MAX_TUPLE_OUTPUTS),
                    ));
                }
                let types: Vec<String> = types
                    .iter()
                    .map(|ty| self.value_type(ty, resolver))
                    .collect();
                format!("({})", types.join(", "))
            }
            ReturnShape::NamedTuple(id) => resolver.tuple(*id).name.clone(),
        };
        Ok(ty)
    }

    fn decode_function(&self, shape: &ReturnShape) -> &'static str {
        match shape {
            ReturnShape::Void => "decode_void",
            ReturnShape::Single(_) => "decode_single",
            ReturnShape::Tuple(_) => "decode_tuple",
            ReturnShape::NamedTuple(_) => "decode_named",
        }
    }

    fn prepare_lines(&self, ty: &AbiType, var: &str) -> Vec<String> {
        if ty.is_integer() {
            vec![format!("let {var}: runtime::Numeric = {var}.into();", var = var)]
        } else if ty.element().map_or(false, AbiType::is_integer) {
            vec![format!(
                "let {var}: Vec<runtime::Numeric> = {var}.into_iter().map(Into::into).collect();",
                var = var
            )]
        } else {
            Vec::new()
        }
    }

    fn normalize_lines(
        &self,
        rule: &ValidationRule,
        _ty: &AbiType,
        var: &str,
        _scope: Scope,
        _resolver: &TypeResolver,
    ) -> Vec<String> {
        let expr = match rule {
            ValidationRule::ChecksumAddress => format!("runtime::normalize::checksum_address(&{})?", var),
            ValidationRule::ChecksumAddressArray => {
                format!("runtime::normalize::checksum_address_array(&{})?", var)
            }
            ValidationRule::IntegerCoercion { signed, bits } => {
                format!("runtime::normalize::coerce_integer({}, {}, {})?", var, signed, bits)
            }
            ValidationRule::IntegerCoercionArray { signed, bits } => format!(
                "runtime::normalize::coerce_integer_array({}, {}, {})?",
                var, signed, bits
            ),
            ValidationRule::HexBytesDecode { size } => format!(
                "runtime::normalize::hex_bytes_decode(&{}, {})?",
                var,
                option_literal(*size)
            ),
            ValidationRule::HexBytesArrayDecode { size } => format!(
                "runtime::normalize::hex_bytes_array_decode(&{}, {})?",
                var,
                option_literal(*size)
            ),
            ValidationRule::StructValidate { .. } => format!("{}.normalize()?", var),
            ValidationRule::Noop => return Vec::new(),
        };
        vec![format!("let {} = {};", var, expr)]
    }

    fn indent(&self, _scope: Scope) -> &'static str {
        "        "
    }

    fn abi_literal(&self, abi_json: &str) -> String {
        // one more '#' than the longest run inside the JSON
        let mut longest = 0;
        let mut run = 0;
        for c in abi_json.chars() {
            if c == '#' {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 0;
            }
        }
        let hashes = "#".repeat(longest + 1);
        format!("r{hashes}\"{json}\"{hashes}", hashes = hashes, json = abi_json)
    }
}
