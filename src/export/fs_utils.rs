// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;
use std::path::{Path, PathBuf};

/// Check whether a file can be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `force == false` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if ask_confirmation(&format!(
        "The file '{}' already exists. Overwrite?",
        path.display()
    )) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}

/// Append `.{ext}` when the file name has no extension.
pub(crate) fn with_default_extension(file: &str, ext: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(ext)
    }
}
