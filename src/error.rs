//! Error handling for tfmodulegen.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a generation run.
///
/// `ConfigError` never aborts a run: `config::load_config` turns it into a
/// warning and an empty configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The operator's input stream failed or closed while a field was being read.
    #[error("Error reading {field}: {source}.")]
    InputError {
        field: &'static str,
        #[source]
        source: io::Error,
    },

    /// The configuration document could not be parsed.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Template parsing or rendering failed.
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The module directory could not be created.
    #[error("Error creating directory '{}': {source}.", .path.display())]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One of the generated files could not be written.
    #[error("Failed to generate {filename}: {source}.")]
    WriteFileError {
        filename: String,
        #[source]
        source: io::Error,
    },

    /// The module name cannot be used as a single directory name.
    #[error("Invalid module name '{0}': must be a non-empty directory name without path separators.")]
    InvalidModuleName(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
