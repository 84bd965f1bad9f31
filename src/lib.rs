//! Markdown Journal - index a directory of dated Markdown entries
//!
//! Journal entries are Markdown files named `YYYY-MM-DD.md` or `YYYY-MM-DD-suffix.md`.
//! This library:
//!
//! - Scans entries for headings and `:label:` markers
//! - Reads and writes the results as a ctags-style tag file
//! - Builds a [`Journal`] index: entries newest first, labels by name
//! - Renders a Markdown timeline and a Markdown label index
//!
//! # Example
//!
//! ```
//! use markdown_journal::render::{RenderOptions, render_timeline};
//! use markdown_journal::{build_journal, tags::TagRecord};
//!
//! let records = vec![
//!     TagRecord::new("Foo", "2006-01-02.md", "2").with_field("kind", "title"),
//!     TagRecord::new("bar", "2006-01-02.md", "4").with_field("kind", "label"),
//! ];
//! let journal = build_journal(records);
//! let timeline = render_timeline(&journal, &RenderOptions::default());
//! assert!(timeline.contains("* [02 Mon](2006-01-02.md) - Foo"));
//! ```

pub mod cli;
pub mod filters;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod render;
pub mod tags;
pub mod utils;

// Re-export commonly used types
pub use indexer::{build_journal, discover_entries};
pub use models::{Entry, Journal, Label, TagRef};
pub use parsers::{MarkdownScanner, scan_entry_files};
pub use tags::{TagReader, TagRecord, TagWriter};
