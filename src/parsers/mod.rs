//! Markdown scanning for journal entries
//!
//! # Error Handling Strategy
//!
//! - **Content**: Scanning is infallible. Anything that is not a heading or a well-formed
//!   `:label:` is ignored.
//! - **Files**: Failing to open or read an entry file, or a file over the size limit, is
//!   fatal and reported with the file's path via `anyhow` context.

pub mod entry_files;
pub mod markdown;

pub use entry_files::{placeholder_record, scan_entry_files};
pub use markdown::{EntryScanner, MarkdownScanner};
