use super::{Language, Scope, Target};
use crate::model::ReturnShape;
use crate::naming::{escape_reserved, normalizer_name};
use crate::types::{AbiType, TypeResolver};
use crate::validation::ValidationRule;
use abi_gen_common::Result;

const RESERVED: &[&str] = &[
    // keywords
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
    // builtins
    "all", "any", "bool", "bytes", "dict", "filter", "format", "hash", "id", "input", "int",
    "iter", "len", "list", "map", "max", "min", "next", "object", "open", "print", "range",
    "set", "str", "sum", "super", "tuple", "type", "vars",
    // names used by the generated code
    "self", "tx_params",
];

/// Bindings against the `zero_ex` Python contract wrapper base
pub struct PythonTarget;

/// Call of a tuple normalizer on `var`, mapped over every array level of `ty`
fn normalizer_call(normalizer: &str, contract: &str, ty: &AbiType, var: &str) -> String {
    match ty.element() {
        Some(inner) => {
            let element = format!("{}_element", var);
            format!(
                "[{} for {} in {}]",
                normalizer_call(normalizer, contract, inner, &element),
                element,
                var
            )
        }
        None => format!("{}({}, {})", normalizer, contract, var),
    }
}

impl Target for PythonTarget {
    fn language(&self) -> Language {
        Language::Python
    }

    fn template_name(&self) -> &'static str {
        "python_wrapper"
    }

    fn escape_identifier(&self, raw: &str) -> String {
        escape_reserved(raw, RESERVED, false)
    }

    fn input_type(&self, ty: &AbiType, resolver: &TypeResolver) -> String {
        self.value_type(ty, resolver)
    }

    fn value_type(&self, ty: &AbiType, resolver: &TypeResolver) -> String {
        match ty {
            AbiType::Address | AbiType::String => "str".to_string(),
            AbiType::Bool => "bool".to_string(),
            AbiType::Uint(_) | AbiType::Int(_) => "int".to_string(),
            AbiType::Bytes | AbiType::FixedBytes(_) => "bytes".to_string(),
            AbiType::Array(inner) | AbiType::FixedArray(inner, _) => {
                format!("List[{}]", self.value_type(inner, resolver))
            }
            AbiType::Tuple(id) => resolver.tuple(*id).name.clone(),
        }
    }

    fn return_type(&self, shape: &ReturnShape, resolver: &TypeResolver) -> Result<String> {
        let ty = match shape {
            ReturnShape::Void => "None".to_string(),
            ReturnShape::Single(ty) => self.value_type(ty, resolver),
            ReturnShape::Tuple(types) => {
                let types: Vec<String> = types
                    .iter()
                    .map(|ty| self.value_type(ty, resolver))
                    .collect();
                format!("Tuple[{}]", types.join(", "))
            }
            ReturnShape::NamedTuple(id) => resolver.tuple(*id).name.clone(),
        };
        Ok(ty)
    }

    fn decode_function(&self, _shape: &ReturnShape) -> &'static str {
        ""
    }

    fn prepare_lines(&self, _ty: &AbiType, _var: &str) -> Vec<String> {
        Vec::new()
    }

    fn normalize_lines(
        &self,
        rule: &ValidationRule,
        ty: &AbiType,
        var: &str,
        scope: Scope,
        resolver: &TypeResolver,
    ) -> Vec<String> {
        let contract = match scope {
            Scope::Method => "self.contract",
            Scope::Tuple => "contract",
        };
        match rule {
            ValidationRule::ChecksumAddress => vec![
                "# pylint: disable=W0212".to_string(),
                format!(
                    "{var} = {contract}._validate_and_checksum_address({var})",
                    var = var,
                    contract = contract
                ),
            ],
            ValidationRule::ChecksumAddressArray => vec![
                "# pylint: disable=W0212".to_string(),
                format!("{} = [", var),
                format!("    {}._validate_and_checksum_address({}_element)", contract, var),
                format!("    for {var}_element in {var}", var = var),
                "]".to_string(),
            ],
            ValidationRule::IntegerCoercion { .. } => vec![
                "# safeguard against fractional inputs".to_string(),
                format!("{var} = int({var})", var = var),
            ],
            ValidationRule::IntegerCoercionArray { .. } => vec![
                "# safeguard against fractional inputs".to_string(),
                format!("{var} = [int({var}_element) for {var}_element in {var}]", var = var),
            ],
            ValidationRule::HexBytesDecode { .. } => {
                vec![format!("{var} = bytes.fromhex({var}.decode(\"utf-8\"))", var = var)]
            }
            ValidationRule::HexBytesArrayDecode { .. } => vec![
                format!("{} = [", var),
                format!("    bytes.fromhex({}_element.decode(\"utf-8\"))", var),
                format!("    for {var}_element in {var}", var = var),
                "]".to_string(),
            ],
            ValidationRule::StructValidate { tuple } => {
                let normalizer = normalizer_name(&resolver.tuple(*tuple).name);
                vec![format!(
                    "{} = {}",
                    var,
                    normalizer_call(&normalizer, contract, ty, var)
                )]
            }
            ValidationRule::Noop => Vec::new(),
        }
    }

    fn indent(&self, scope: Scope) -> &'static str {
        match scope {
            Scope::Method => "        ",
            Scope::Tuple => "    ",
        }
    }

    fn abi_literal(&self, abi_json: &str) -> String {
        format!("'{}'", abi_json.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
