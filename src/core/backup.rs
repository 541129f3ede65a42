use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the sheet to `dest_file`, or pack it straight into a `.zip` next
    /// to it when `compress` is set. Returns the path actually written, or
    /// `None` if the user declined to overwrite an existing file.
    pub fn backup(sheet: &Path, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        // 1️⃣ Check sheet exists
        if !sheet.exists() {
            return Err(AppError::storage(sheet, "attendance sheet not found"));
        }

        let target = if compress {
            zip_target(Path::new(dest_file))
        } else {
            PathBuf::from(dest_file)
        };

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation
        if target.exists()
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite it?",
                target.display()
            ))?
        {
            warning("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy or compress
        if compress {
            compress_sheet(sheet, &target)?;
            success(format!("Compressed backup created: {}", target.display()));
        } else {
            fs::copy(sheet, &target).map_err(|e| AppError::storage(sheet, e))?;
            success(format!("Backup created: {}", target.display()));
        }

        Ok(Some(target))
    }
}

/// `backup.csv` → `backup.zip`; a path already ending in `.zip` is kept.
fn zip_target(dest: &Path) -> PathBuf {
    let is_zip = dest
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
    if is_zip {
        dest.to_path_buf()
    } else {
        dest.with_extension("zip")
    }
}

/// Deflate the sheet into `zip_path`, entry named after the sheet file.
fn compress_sheet(sheet: &Path, zip_path: &Path) -> AppResult<()> {
    let entry_name = sheet
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "attendance.csv".to_string());

    let mut src = fs::File::open(sheet).map_err(|e| AppError::storage(sheet, e))?;

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;
    io::copy(&mut src, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Packed {} into {}", sheet.display(), zip_path.display()));
    Ok(())
}
