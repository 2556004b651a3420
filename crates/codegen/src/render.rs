//! Template rendering
//!
//! Builds the JSON context a target template consumes from a
//! [`ContractModel`] and renders it. Rendering is a pure function of the model,
//! so identical ABI text and contract name always give identical output.

use crate::model::{ContractModel, MethodDescriptor, ParamDescriptor};
use crate::naming;
use crate::targets::{Language, Scope, Target};
use crate::templates::TemplateManager;
use crate::types::TupleType;
use crate::validation::ValidationRule;
use abi_gen_common::Result;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct ParamContext {
    pub name: String,
    /// Name reported to the validator, as written in the ABI
    pub abi_name: String,
    pub input_type: String,
    pub prepare: String,
    pub has_prepare: bool,
    pub normalize: String,
    pub has_normalize: bool,
    pub doc: String,
    pub has_doc: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodContext {
    pub name: String,
    pub type_name: String,
    pub field_name: String,
    pub signature: String,
    pub selector_hex: String,
    pub selector_bytes: String,
    pub is_read_only: bool,
    pub state_mutability: String,
    pub has_params: bool,
    pub params: Vec<ParamContext>,
    pub param_list: String,
    pub arg_names: String,
    pub abi_values: String,
    pub return_type: String,
    pub decode_function: String,
    pub details: Vec<String>,
    pub has_details: bool,
    pub has_param_docs: bool,
    pub returns: String,
    pub has_returns: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldContext {
    pub name: String,
    /// Key of the field in the ABI, `param_<index>` when unnamed
    pub key: String,
    pub value_type: String,
    pub normalize: String,
    pub has_normalize: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TupleContext {
    pub name: String,
    /// Function normalizing the fields, for targets that emit one
    pub normalizer: String,
    pub canonical: String,
    pub arity: usize,
    pub fields: Vec<FieldContext>,
    pub field_names: String,
    pub field_values: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventContext {
    pub name: String,
    pub accessor: String,
    pub signature: String,
    pub topic_hex: String,
    /// Another event of the ABI has the same name
    pub is_overloaded: bool,
    /// Position among the events sharing this name, in ABI order
    pub overload_index: usize,
}

/// Root of the template context
#[derive(Debug, Clone, Serialize)]
pub struct ContractContext {
    pub contract_name: String,
    pub module_name: String,
    pub validator_name: String,
    pub abi_literal: String,
    pub tuples: Vec<TupleContext>,
    pub methods: Vec<MethodContext>,
    pub events: Vec<EventContext>,
    pub has_tuples: bool,
    pub has_methods: bool,
    pub has_events: bool,
}

fn join_lines(lines: &[String], indent: &str) -> String {
    lines.join(&format!("\n{}", indent))
}

/// Build the context of one contract for one target
pub fn build_context(model: &ContractModel, target: &dyn Target) -> Result<ContractContext> {
    let tuples = model
        .tuples()
        .iter()
        .map(|tuple| tuple_context(tuple, model, target))
        .collect();

    let methods = model
        .methods
        .iter()
        .map(|method| method_context(method, model, target))
        .collect::<Result<Vec<_>>>()?;

    let mut name_counts: HashMap<&str, usize> = HashMap::new();
    for event in &model.events {
        *name_counts.entry(event.name.as_str()).or_insert(0) += 1;
    }
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let events = model
        .events
        .iter()
        .map(|event| {
            let index = seen.entry(event.name.as_str()).or_insert(0);
            let overload_index = *index;
            *index += 1;
            EventContext {
                name: event.name.clone(),
                accessor: target.escape_identifier(&event.accessor),
                signature: event.signature.clone(),
                topic_hex: format!("0x{}", hex::encode(event.topic)),
                is_overloaded: name_counts[event.name.as_str()] > 1,
                overload_index,
            }
        })
        .collect::<Vec<_>>();

    Ok(ContractContext {
        contract_name: model.name.clone(),
        module_name: model.module_name.clone(),
        validator_name: format!("{}Validator", model.name),
        abi_literal: target.abi_literal(&model.abi_json),
        has_tuples: !model.tuples().is_empty(),
        has_methods: !methods.is_empty(),
        has_events: !events.is_empty(),
        tuples,
        methods,
        events,
    })
}

fn tuple_context(tuple: &TupleType, model: &ContractModel, target: &dyn Target) -> TupleContext {
    let fields: Vec<FieldContext> = tuple
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let key = naming::param_name(&field.name, index);
            let name = target.escape_identifier(&key);
            let rule = ValidationRule::for_type(&field.ty);
            let lines =
                target.normalize_lines(&rule, &field.ty, &name, Scope::Tuple, model.resolver());
            let normalize = join_lines(&lines, target.indent(Scope::Tuple));
            FieldContext {
                value_type: target.value_type(&field.ty, model.resolver()),
                has_normalize: !normalize.is_empty(),
                normalize,
                key,
                name,
            }
        })
        .collect();

    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    let values: Vec<String> = fields
        .iter()
        .map(|f| format!("self.{}.into_abi_value()", f.name))
        .collect();

    TupleContext {
        name: tuple.name.clone(),
        normalizer: naming::normalizer_name(&tuple.name),
        canonical: tuple.canonical.clone(),
        arity: fields.len(),
        field_names: names.join(", "),
        field_values: values.join(", "),
        fields,
    }
}

fn param_context(
    param: &ParamDescriptor,
    method: &MethodDescriptor,
    model: &ContractModel,
    target: &dyn Target,
) -> ParamContext {
    let name = target.escape_identifier(&param.name);
    let indent = target.indent(Scope::Method);
    let prepare = join_lines(&target.prepare_lines(&param.ty, &name), indent);
    let normalize = join_lines(
        &target.normalize_lines(&param.rule, &param.ty, &name, Scope::Method, model.resolver()),
        indent,
    );
    let doc = method.param_doc(param).unwrap_or_default().to_string();

    ParamContext {
        abi_name: param.name.clone(),
        input_type: target.input_type(&param.ty, model.resolver()),
        has_prepare: !prepare.is_empty(),
        prepare,
        has_normalize: !normalize.is_empty(),
        normalize,
        has_doc: !doc.is_empty(),
        doc,
        name,
    }
}

fn method_context(
    method: &MethodDescriptor,
    model: &ContractModel,
    target: &dyn Target,
) -> Result<MethodContext> {
    let params: Vec<ParamContext> = method
        .params
        .iter()
        .map(|param| param_context(param, method, model, target))
        .collect();

    let param_list: Vec<String> = params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.input_type))
        .collect();
    let arg_names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    let abi_values: Vec<String> = params
        .iter()
        .map(|p| format!("{}.into_abi_value()", p.name))
        .collect();
    let selector_bytes: Vec<String> = method
        .selector
        .iter()
        .map(|b| format!("0x{:02x}", b))
        .collect();

    let doc = method.doc.clone().unwrap_or_default();
    let details: Vec<String> = doc
        .details
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    let returns = doc.returns.unwrap_or_default();

    Ok(MethodContext {
        name: method.name.clone(),
        type_name: method.type_name.clone(),
        field_name: target.escape_identifier(&method.field_name),
        signature: method.signature.clone(),
        selector_hex: method.selector_hex(),
        selector_bytes: selector_bytes.join(", "),
        is_read_only: method.is_read_only,
        state_mutability: method.state_mutability.as_str().to_string(),
        has_params: !params.is_empty(),
        has_param_docs: params.iter().any(|p| p.has_doc),
        param_list: param_list.join(", "),
        arg_names: arg_names.join(", "),
        abi_values: abi_values.join(", "),
        return_type: target.return_type(&method.return_shape, model.resolver())?,
        decode_function: target.decode_function(&method.return_shape).to_string(),
        has_details: !details.is_empty(),
        details,
        has_returns: !returns.is_empty(),
        returns,
        params,
    })
}

/// Renders contract models through the registered templates
pub struct Renderer {
    templates: TemplateManager,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            templates: TemplateManager::new()?,
        })
    }

    /// Render the bindings of one contract in one language
    pub fn render(&self, model: &ContractModel, language: Language) -> Result<String> {
        let target = language.target();
        let context = build_context(model, target)?;
        let data = serde_json::to_value(&context)?;
        debug!(
            "Rendering {} bindings for {} with template {}",
            language,
            model.name,
            target.template_name()
        );
        self.templates.render(target.template_name(), &data)
    }
}
