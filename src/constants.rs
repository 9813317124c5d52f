//! Common constants used throughout tfmodulegen.

/// Configuration file looked up in the working directory unless `--config` is given
pub const CONFIG_FILE: &str = "tfmodulegen.config.json";

/// Terraform version constraint offered when the configuration has none
pub const DEFAULT_TERRAFORM_VERSION: &str = ">= 0.12";
