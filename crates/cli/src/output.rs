use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::CliError;

/// Write the generated module, creating missing parent directories.
pub fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    let to_error = |source| CliError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, text).map_err(to_error)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}
