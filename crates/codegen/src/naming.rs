//! Identifier derivation shared by every target language

use convert_case::{Case, Casing};
use std::collections::HashMap;

/// `PascalCase` type identifier
pub fn type_name(raw: &str) -> String {
    raw.to_case(Case::Pascal)
}

/// `snake_case` identifier for fields, modules and accessors
pub fn snake_name(raw: &str) -> String {
    raw.to_case(Case::Snake)
}

/// Name of the per-method wrapper type, e.g. `AcceptsBytesMethod`
pub fn method_type_name(unique_name: &str) -> String {
    format!("{}Method", type_name(unique_name))
}

/// Name of the event log accessor, e.g. `get_an_event_event`
pub fn event_accessor_name(event_name: &str) -> String {
    format!("get_{}_event", snake_name(event_name))
}

/// Name of the generated function normalizing the fields of a tuple
pub fn normalizer_name(tuple_name: &str) -> String {
    format!("_normalize_{}", tuple_name)
}

/// Parameter name as written in the ABI, or `param_<index>` when it is empty
pub fn param_name(raw: &str, index: usize) -> String {
    if raw.trim().is_empty() {
        format!("param_{}", index)
    } else {
        raw.to_string()
    }
}

/// Rename an identifier that is reserved in the target or starts with a digit
///
/// `suffix` decides where the underscore goes: Rust appends it, Python
/// prepends it.
pub fn escape_reserved(raw: &str, reserved: &[&str], suffix: bool) -> String {
    let starts_with_digit = raw.chars().next().map_or(false, |c| c.is_ascii_digit());
    if starts_with_digit {
        return format!("_{}", raw);
    }
    if reserved.contains(&raw) {
        if suffix {
            format!("{}_", raw)
        } else {
            format!("_{}", raw)
        }
    } else {
        raw.to_string()
    }
}

/// Hands out unique names in order of appearance
///
/// The first occurrence keeps its name; later ones get `2`, `3`, ...
#[derive(Debug, Default)]
pub struct UniqueNames {
    seen: HashMap<String, usize>,
}

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, base: &str) -> String {
        let count = self.seen.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base.to_string()
        } else {
            format!("{}{}", base, count)
        }
    }
}
