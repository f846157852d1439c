use crate::errors::AppResult;
use crate::store::DataStore;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data files into the directory `dest`, or into the zip
    /// archive `dest` when `compress` is set.
    ///
    /// Returns the path written, or `None` when the user declined to
    /// overwrite an existing backup.
    pub fn backup(store: &DataStore, dest: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let files = store.files();

        let final_path = if compress {
            let zip_path = zip_destination(dest);
            if zip_path.exists() && !confirm_overwrite(&zip_path) {
                return Ok(None);
            }
            write_zip(&files, &zip_path)?;
            zip_path
        } else {
            let dir = PathBuf::from(dest);
            let clash = files
                .iter()
                .filter_map(|f| f.file_name())
                .any(|n| dir.join(n).exists());
            if clash && !confirm_overwrite(&dir) {
                return Ok(None);
            }
            copy_into(&files, &dir)?;
            dir
        };

        success(format!("Backup created: {}", final_path.display()));

        store.log.record(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

fn confirm_overwrite(path: &Path) -> bool {
    let ok = ask_confirmation(&format!(
        "The backup '{}' already exists. Overwrite it?",
        path.display()
    ));
    if !ok {
        info("Backup cancelled by user.");
    }
    ok
}

fn zip_destination(dest: &str) -> PathBuf {
    let p = PathBuf::from(dest);
    if p.extension().is_some_and(|e| e.eq_ignore_ascii_case("zip")) {
        p
    } else {
        p.with_extension("zip")
    }
}

fn copy_into(files: &[PathBuf], dir: &Path) -> AppResult<()> {
    fs::create_dir_all(dir)?;
    for src in files {
        if let Some(name) = src.file_name() {
            fs::copy(src, dir.join(name))?;
        }
    }
    Ok(())
}

/// Write all `files` into a single deflated archive at `zip_path`.
fn write_zip(files: &[PathBuf], zip_path: &Path) -> AppResult<()> {
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    for src in files {
        let Some(name) = src.file_name() else {
            continue;
        };
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        zip.start_file(name.to_string_lossy(), options)
            .map_err(io::Error::other)?;
        let mut f = fs::File::open(src)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(io::Error::other)?;
    info(format!("Compressed: {}", zip_path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::zip_destination;
    use std::path::PathBuf;

    #[test]
    fn zip_extension_is_added_once() {
        assert_eq!(zip_destination("/tmp/b"), PathBuf::from("/tmp/b.zip"));
        assert_eq!(zip_destination("/tmp/b.ZIP"), PathBuf::from("/tmp/b.ZIP"));
    }
}
