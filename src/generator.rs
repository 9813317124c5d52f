//! Core generation pipeline.
//! Combines the collector, renderer and emitter into a single run.

use crate::config::Config;
use crate::emitter::{ensure_module_dir, write_files};
use crate::error::Result;
use crate::prompt::{collect_module, Prompter};
use crate::renderer::{render_templates, TemplateRenderer};
use crate::templates::TemplateFile;
use std::path::{Path, PathBuf};

/// Runs one generation: collect, render every template, then write.
///
/// # Arguments
/// * `prompter` - Input channel to the operator
/// * `renderer` - Template engine
/// * `templates` - Files to generate
/// * `config` - Defaults loaded from the configuration file
/// * `output_root` - Directory that receives the module directory
///
/// # Returns
/// * `Result<PathBuf>` - Path of the populated module directory
pub fn generate<P: AsRef<Path>>(
    prompter: &mut dyn Prompter,
    renderer: &dyn TemplateRenderer,
    templates: &[TemplateFile],
    config: &Config,
    output_root: P,
) -> Result<PathBuf> {
    let module = collect_module(prompter, config)?;
    let files = render_templates(renderer, templates, &module)?;

    let module_dir = ensure_module_dir(output_root, &module.module_name)?;
    write_files(&module_dir, &files)?;

    Ok(module_dir)
}
