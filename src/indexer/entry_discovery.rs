use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::models::is_entry_file_name;

/// Find journal entry files under the given roots
///
/// A root may be a directory or a single file. Directories are searched for files named
/// like `YYYY-MM-DD.md` or `YYYY-MM-DD-suffix.md`; unless `recurse` is set, only files
/// directly inside a root are considered.
///
/// # Returns
///
/// Returns the matching paths sorted and without duplicates. A leading `./` is dropped so
/// scanning the current directory yields plain relative paths. Roots with no entries are
/// not an error.
///
/// # Errors
///
/// Returns an error if a root does not exist or a directory cannot be read.
pub fn discover_entries<P: AsRef<Path>>(roots: &[P], recurse: bool) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for root in roots {
        let root = root.as_ref();
        if !root.exists() {
            bail!("Path not found: {}", root.display());
        }

        let mut walker = WalkDir::new(root).sort_by_file_name();
        if !recurse {
            walker = walker.max_depth(1);
        }

        for dir_entry in walker {
            let dir_entry = dir_entry
                .with_context(|| format!("Failed to read directory: {}", root.display()))?;
            if !dir_entry.file_type().is_file() {
                continue;
            }

            if is_entry_file_name(&dir_entry.file_name().to_string_lossy()) {
                let path = dir_entry.into_path();
                match path.strip_prefix(".") {
                    Ok(relative) => entries.push(relative.to_path_buf()),
                    Err(_) => entries.push(path),
                }
            }
        }
    }

    entries.sort();
    entries.dedup();

    Ok(entries)
}
