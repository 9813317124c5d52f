//! Writes rendered files into the module directory.

use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Checks that a module name designates exactly one directory below the output root.
pub fn is_module_name_valid(module_name: &str) -> bool {
    !module_name.is_empty()
        && module_name != "."
        && module_name != ".."
        && !module_name.contains(['/', '\\'])
}

/// Creates the module directory under `output_root`, reusing it if it exists.
///
/// # Arguments
/// * `output_root` - Directory that receives the module directory
/// * `module_name` - Name of the module directory
///
/// # Returns
/// * `Result<PathBuf>` - Path of the module directory
///
/// # Errors
/// * `Error::InvalidModuleName` if the name is empty, `.`, `..` or holds a path separator
/// * `Error::CreateDirError` for any creation failure other than "already exists"
pub fn ensure_module_dir<P: AsRef<Path>>(output_root: P, module_name: &str) -> Result<PathBuf> {
    if !is_module_name_valid(module_name) {
        return Err(Error::InvalidModuleName(module_name.to_string()));
    }

    let module_dir = output_root.as_ref().join(module_name);
    match fs::create_dir(&module_dir) {
        Ok(()) => debug!("Created directory {}", module_dir.display()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            warn!(
                "Directory '{}' already exists. Files will be overwritten if they exist.",
                module_dir.display()
            );
        }
        Err(source) => {
            return Err(Error::CreateDirError {
                path: module_dir,
                source,
            })
        }
    }
    Ok(module_dir)
}

/// Writes each `(filename, content)` pair into `module_dir`, in order.
///
/// Existing files are truncated. The first failure stops the batch; files
/// written before it are left in place.
pub fn write_files<P: AsRef<Path>>(module_dir: P, files: &[(String, String)]) -> Result<()> {
    let module_dir = module_dir.as_ref();
    for (filename, content) in files {
        let target = module_dir.join(filename);
        fs::write(&target, content).map_err(|source| Error::WriteFileError {
            filename: filename.clone(),
            source,
        })?;
        debug!("Wrote {}", target.display());
    }
    Ok(())
}
