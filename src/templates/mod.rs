//! Prompt assembly.
//!
//! The store registers one handlebars template per test kind at startup
//! and is immutable afterwards. Rendering order is fixed: role preamble,
//! data-generator hints, kind-specific instructions with a worked example,
//! the source code under test, then the closing formatting rules.

use handlebars::Handlebars;
use serde_json::json;
use thiserror::Error;

use crate::paths::TestKind;
use crate::prompts;

/// Template error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Render error: {0}")]
    RenderError(String),
    #[error("Template not found: {0}")]
    NotFound(String),
}

impl From<handlebars::RenderError> for TemplateError {
    fn from(error: handlebars::RenderError) -> Self {
        TemplateError::RenderError(error.to_string())
    }
}

/// Holds the registered prompt templates, keyed by test kind.
pub struct TemplateStore {
    handlebars: Handlebars<'static>,
}

impl TemplateStore {
    /// Create a store with both built-in prompt templates registered.
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();
        // Source code and examples go into the prompt verbatim
        handlebars.register_escape_fn(handlebars::no_escape);

        for kind in TestKind::ALL {
            handlebars
                .register_template_string(template_name(*kind), template_source(*kind))
                .map_err(|e| TemplateError::RenderError(e.to_string()))?;
        }

        Ok(Self { handlebars })
    }

    /// Assemble the final prompt for `kind` around `source_text`, using the
    /// built-in worked example.
    pub fn assemble_prompt(
        &self,
        kind: TestKind,
        source_text: &str,
    ) -> Result<String, TemplateError> {
        self.assemble_prompt_with_example(kind, source_text, builtin_example(kind))
    }

    /// Assemble the final prompt with a caller-supplied worked example.
    pub fn assemble_prompt_with_example(
        &self,
        kind: TestKind,
        source_text: &str,
        example: &str,
    ) -> Result<String, TemplateError> {
        let name = template_name(kind);
        if !self.handlebars.has_template(name) {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        let rendered = self.handlebars.render(
            name,
            &json!({
                "preamble": prompts::base_prompt(),
                "generators": prompts::COMMON_GENERATORS.trim(),
                "example": example.trim(),
                "code": source_text,
                "closing": prompts::FINAL_INSTRUCTION.trim(),
            }),
        )?;
        Ok(rendered)
    }
}

fn template_name(kind: TestKind) -> &'static str {
    match kind {
        TestKind::Unit => "unit",
        TestKind::Api => "api",
    }
}

fn template_source(kind: TestKind) -> &'static str {
    match kind {
        TestKind::Unit => prompts::UNIT_PROMPT_TEMPLATE,
        TestKind::Api => prompts::API_PROMPT_TEMPLATE,
    }
}

/// Built-in worked example for the given kind.
pub fn builtin_example(kind: TestKind) -> &'static str {
    match kind {
        TestKind::Unit => prompts::UNIT_EXAMPLE,
        TestKind::Api => prompts::API_EXAMPLE,
    }
}
