//! tfmodulegen's main application entry point.
//! Parses arguments, loads the configuration and drives one generation run.

use std::io::IsTerminal;

use tfmodulegen::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    generator::generate,
    logger::init_logger,
    prompt::{DialoguerPrompter, LinePrompter, Prompter},
    renderer::MiniJinjaRenderer,
    templates::TERRAFORM_MODULE,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the optional configuration file
/// 2. Prompts for the module fields
/// 3. Renders all templates
/// 4. Creates the module directory and writes the files
fn run(args: Args) -> Result<()> {
    let config = load_config(&args.config);
    let renderer = MiniJinjaRenderer::new();
    let mut prompter: Box<dyn Prompter> = if std::io::stdin().is_terminal() {
        Box::new(DialoguerPrompter::new())
    } else {
        Box::new(LinePrompter::stdio())
    };

    let module_dir = generate(
        &mut *prompter,
        &renderer,
        &TERRAFORM_MODULE,
        &config,
        &args.output_dir,
    )?;

    let module_name = module_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!(
        "Terraform module boilerplate files generated successfully in the '{module_name}' directory!"
    );
    Ok(())
}
