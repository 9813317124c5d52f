//! tfmodulegen scaffolds the boilerplate files of a Terraform module.
//! It asks the operator for the module's name, description, required
//! Terraform version and providers, optionally seeded from a configuration
//! file, and renders the versions, main, output, variable and README files.

/// Command-line interface module for the tfmodulegen application
pub mod cli;

/// Configuration file loading
/// Reads tfmodulegen.config.json defaults for the version and providers
pub mod config;

/// Common constants
pub mod constants;

/// Directory creation and file writing
pub mod emitter;

/// Error types and handling for the tfmodulegen application
pub mod error;

/// End-to-end generation pipeline
pub mod generator;

/// Logger initialization
pub mod logger;

/// Module descriptor and provider records
pub mod module;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Embedded template bodies
pub mod templates;
