use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use super::markdown::EntryScanner;
use crate::tags::TagRecord;
use crate::tags::record::{KIND_ENTRY, KIND_KEY, LINE_KEY};
use crate::utils::validate_file_size;

/// Scan every entry file and collect the tags of all of them
///
/// A file without any headings or labels still contributes one placeholder record at
/// line 0, so the journal has an entry for it.
///
/// # Errors
///
/// Returns an error naming the file if one cannot be opened or read, or is too large.
pub fn scan_entry_files(
    scanner: &impl EntryScanner,
    files: &[PathBuf],
) -> Result<Vec<TagRecord>> {
    let mut records = Vec::new();

    for path in files {
        let source = read_entry_file(path)?;
        let file = path.to_string_lossy();

        let mut tags = scanner.scan(&file, &source);
        if tags.is_empty() {
            debug!("No tags in {}, adding placeholder", file);
            tags.push(placeholder_record(path));
        }
        records.extend(tags);
    }

    Ok(records)
}

/// Record standing in for an entry without headings or labels
pub fn placeholder_record(path: &Path) -> TagRecord {
    let name = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    TagRecord::new(name, path.to_string_lossy(), "0")
        .with_field(LINE_KEY, "0")
        .with_field(KIND_KEY, KIND_ENTRY)
}

fn read_entry_file(path: &Path) -> Result<String> {
    // Size is checked on the handle that gets read
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open entry file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut source = String::new();
    file.read_to_string(&mut source)
        .with_context(|| format!("Failed to read entry file: {}", path.display()))?;
    Ok(source)
}
