//! Template renderer and rendering functionality for tfmodulegen.
//! Turns a module descriptor into the contents of each generated file
//! using MiniJinja.
use crate::error::Result;
use crate::module::ModuleDescriptor;
use crate::templates::TemplateFile;
use log::debug;
use minijinja::{AutoEscape, Environment};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given module as context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `module` - Module whose fields are exposed to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, module: &ModuleDescriptor) -> Result<String>;
}

/// Emits a literal Markdown code fence without clashing with template syntax.
fn code_fence() -> String {
    "```".to_string()
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer configured for line-oriented text output.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_function("code_fence", code_fence);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to parse or render
    fn render(&self, template: &str, module: &ModuleDescriptor) -> Result<String> {
        Ok(self.env.render_str(template, module)?)
    }
}

/// Renders every template of a set against the same module snapshot.
///
/// Nothing is written here; a template error aborts before any file exists.
pub fn render_templates(
    renderer: &dyn TemplateRenderer,
    templates: &[TemplateFile],
    module: &ModuleDescriptor,
) -> Result<Vec<(String, String)>> {
    templates
        .iter()
        .map(|template| {
            debug!("Rendering {}", template.filename);
            let content = renderer.render(template.source, module)?;
            Ok((template.filename.to_string(), content))
        })
        .collect()
}
