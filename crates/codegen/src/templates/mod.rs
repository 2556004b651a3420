//! Template system for contract binding generation
//!
//! Contains one Handlebars template per target language.

use abi_gen_common::{Error, Result};
use handlebars::Handlebars;

/// Template manager for contract binding generation
pub struct TemplateManager {
    handlebars: Handlebars<'static>,
}

impl TemplateManager {
    /// Create a new template manager and register all templates
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        // Generated source is not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self::register_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Register all built-in templates
    fn register_templates(handlebars: &mut Handlebars) -> Result<()> {
        handlebars
            .register_template_string("rust_wrapper", include_str!("rust_wrapper.hbs"))
            .map_err(|e| Error::template(format!("Failed to register rust_wrapper template: {}", e)))?;

        handlebars
            .register_template_string("python_wrapper", include_str!("python_wrapper.hbs"))
            .map_err(|e| {
                Error::template(format!("Failed to register python_wrapper template: {}", e))
            })?;

        Ok(())
    }

    /// Render a template with the given data
    pub fn render(&self, template_name: &str, data: &serde_json::Value) -> Result<String> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| Error::template(format!("Failed to render template {}: {}", template_name, e)))
    }

    /// Get list of available templates
    pub fn available_templates(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlebars.get_templates().keys().cloned().collect();
        names.sort();
        names
    }
}
