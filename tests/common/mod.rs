//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test journal directories
pub struct JournalDirBuilder {
    temp_dir: TempDir,
}

impl JournalDirBuilder {
    /// Create a new builder with an empty journal directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the journal directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file at `rel_path` (relative to the journal root) with the given content
    pub fn with_file(self, rel_path: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write journal file");
        self
    }

    /// Add a journal entry built with [`EntryBuilder`]
    pub fn with_entry(self, entry: &EntryBuilder) -> Self {
        let rel_path = entry.rel_path();
        let content = entry.to_markdown();
        self.with_file(&rel_path, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for JournalDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for the Markdown content of one journal entry
pub struct EntryBuilder {
    dir: Option<String>,
    date: String,
    suffix: Option<String>,
    lines: Vec<String>,
}

impl EntryBuilder {
    /// Create an entry for the given `YYYY-MM-DD` date with no content
    pub fn new(date: &str) -> Self {
        Self { dir: None, date: date.to_string(), suffix: None, lines: Vec::new() }
    }

    /// Place the entry in a subdirectory of the journal
    pub fn in_dir(mut self, dir: &str) -> Self {
        self.dir = Some(dir.to_string());
        self
    }

    /// Set the file name suffix (after the date)
    pub fn suffix(mut self, suffix: &str) -> Self {
        self.suffix = Some(suffix.to_string());
        self
    }

    /// Append a heading line
    pub fn heading(mut self, level: usize, text: &str) -> Self {
        self.lines.push(format!("{} {}", "#".repeat(level), text));
        self
    }

    /// Append a plain line of text
    pub fn line(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    /// Append a blank line
    pub fn blank(self) -> Self {
        self.line("")
    }

    /// File name of the entry
    pub fn file_name(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}-{}.md", self.date, suffix),
            None => format!("{}.md", self.date),
        }
    }

    /// Path of the entry relative to the journal root
    pub fn rel_path(&self) -> String {
        match &self.dir {
            Some(dir) => format!("{}/{}", dir, self.file_name()),
            None => self.file_name(),
        }
    }

    /// Render the Markdown content
    pub fn to_markdown(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}

/// Create a small realistic journal spanning two years
pub fn realistic_journal() -> TempDir {
    JournalDirBuilder::new()
        .with_entry(
            &EntryBuilder::new("2006-01-02")
                .in_dir("diary")
                .heading(1, "02 Monday")
                .blank()
                .line("Bought flour :groceries:"),
        )
        .with_entry(
            &EntryBuilder::new("2006-01-03")
                .in_dir("diary")
                .heading(1, "03 Tuesday")
                .blank()
                .line("Tried a new :recipe: today."),
        )
        .with_entry(&EntryBuilder::new("2006-02-05").in_dir("diary").suffix("snow-day"))
        .with_entry(
            &EntryBuilder::new("2007-11-30")
                .in_dir("diary")
                .heading(1, "30 Friday")
                .line(":recipe:")
                .heading(2, "Ingredients")
                .line("- eggs :groceries:")
                .line("- milk :groceries:"),
        )
        .with_file("diary/README.md", "# Not an entry :ignored:\n")
        .build()
}

/// Absolute path of the `diary` directory inside a journal
pub fn diary_dir(journal: &TempDir) -> PathBuf {
    journal.path().join("diary")
}
