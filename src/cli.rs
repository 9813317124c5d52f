//! Command-line interface implementation for tfmodulegen.
//! Provides argument parsing using clap.

use crate::constants::CONFIG_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for tfmodulegen.
#[derive(Parser, Debug)]
#[command(author, version, about = "tfmodulegen: interactive Terraform module boilerplate generator", long_about = None)]
pub struct Args {
    /// Configuration file with default Terraform version and providers
    #[arg(short, long, value_name = "PATH", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory in which the module directory will be created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
