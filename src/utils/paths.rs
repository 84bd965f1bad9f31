use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size for a single journal entry: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the size check applies to the file that is actually read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_validate_small_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("2006-01-02.md");
        fs::write(&path, "# Foo\n").unwrap();

        let file = File::open(&path).unwrap();
        assert!(validate_file_size(&file, &path).is_ok());
    }

    #[test]
    fn test_validate_oversized_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("2006-01-02.md");
        let file = File::create(&path).unwrap();
        file.set_len(MAX_FILE_SIZE_BYTES + 1).unwrap();

        let file = File::open(&path).unwrap();
        let err = validate_file_size(&file, &path).unwrap_err();
        assert!(err.to_string().contains("File too large"));
    }
}
