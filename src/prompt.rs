//! User input and interaction handling.
//! Walks the operator through the module fields, pre-filled from the
//! configuration file.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::module::{ModuleDescriptor, Provider};
use dialoguer::Input;
use std::io::{self, BufRead, Write};

/// Line-oriented question/answer channel with the operator.
pub trait Prompter {
    /// Shows `prompt` and returns the next line of input without its line terminator.
    fn input(&mut self, prompt: &str) -> io::Result<String>;

    /// Shows an informational line that expects no answer.
    fn message(&mut self, text: &str) -> io::Result<()>;
}

/// Prompter over any buffered reader and writer.
///
/// Used for piped stdin and for scripted input in tests. Input that ends
/// before a line terminator fails with `UnexpectedEof`.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the prompter and returns the writer, e.g. to inspect the transcript.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        // A line cut off by end of input counts as a closed stream.
        if !line.ends_with('\n') {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }
}

/// Dialoguer-based prompter for interactive terminals.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| io::Error::other(e.to_string()))
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        println!("{text}");
        Ok(())
    }
}

/// Returns true for `y` or `yes` in any letter case, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn ask(prompter: &mut dyn Prompter, field: &'static str, prompt: &str) -> Result<String> {
    prompter
        .input(prompt)
        .map(|answer| answer.trim().to_string())
        .map_err(|source| Error::InputError { field, source })
}

fn tell(prompter: &mut dyn Prompter, text: &str) -> Result<()> {
    prompter.message(text).map_err(Error::IoError)
}

fn terraform_version_prompt(config: &Config) -> String {
    if config.has_terraform_version() {
        format!(
            "Enter required Terraform version (default from config: {})",
            config.default_terraform_version()
        )
    } else {
        format!(
            "Enter required Terraform version (default: {})",
            config.default_terraform_version()
        )
    }
}

/// Prompts for providers until the operator declines.
fn prompt_providers(prompter: &mut dyn Prompter) -> Result<Vec<Provider>> {
    let mut providers = Vec::new();
    loop {
        let answer = ask(prompter, "input", "Do you want to add a provider? (y/n)")?;
        if !is_affirmative(&answer) {
            break;
        }

        let name = ask(prompter, "provider name", "Enter provider name (e.g. google)")?;
        let source = ask(
            prompter,
            "provider source",
            "Enter provider source (e.g. hashicorp/google)",
        )?;
        let version = ask(
            prompter,
            "provider version",
            "Enter provider version (e.g. 6.4.0)",
        )?;
        providers.push(Provider {
            name,
            source,
            version,
        });
    }
    Ok(providers)
}

/// Collects a complete module descriptor from the operator.
///
/// # Arguments
/// * `prompter` - Input channel to the operator
/// * `config` - Defaults loaded from the configuration file
///
/// # Returns
/// * `Result<ModuleDescriptor>` - The finalized descriptor
///
/// # Notes
/// - An empty Terraform version answer selects the displayed default
/// - Configured providers are used as-is and the provider prompts are skipped
///
/// # Errors
/// * `Error::InputError` as soon as any answer cannot be read; nothing
///   collected so far is kept
pub fn collect_module(prompter: &mut dyn Prompter, config: &Config) -> Result<ModuleDescriptor> {
    let module_name = ask(prompter, "module name", "Enter module name")?;
    let description = ask(prompter, "description", "Enter module description")?;

    let mut terraform_version = ask(
        prompter,
        "Terraform version",
        &terraform_version_prompt(config),
    )?;
    if terraform_version.is_empty() {
        terraform_version = config.default_terraform_version().to_string();
    }

    let providers = if config.providers.is_empty() {
        prompt_providers(prompter)?
    } else {
        tell(prompter, "Using provider configuration from config file:")?;
        for provider in &config.providers {
            tell(
                prompter,
                &format!(
                    "  - {}: source={}, version={}",
                    provider.name, provider.source, provider.version
                ),
            )?;
        }
        config.providers.clone()
    };

    Ok(ModuleDescriptor {
        module_name,
        description,
        terraform_version,
        providers,
    })
}
