// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::prompt::confirm;
use std::path::Path;

pub(crate) fn require_absolute(path: &Path) -> AppResult<()> {
    if path.is_absolute() {
        return Ok(());
    }
    Err(AppError::Export(format!(
        "output file path must be absolute: {}",
        path.display()
    )))
}

/// An existing output file is only replaced with `force` or an explicit yes.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let question = format!("The file '{}' already exists. Overwrite?", path.display());
    if confirm(&question)? {
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
