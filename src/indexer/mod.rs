//! Journal indexing: from entry files to an ordered [`Journal`](crate::models::Journal)
//!
//! # Error Handling Strategy
//!
//! - **Discovery**: Missing roots and unreadable directories are fatal, with the path in
//!   the error context.
//! - **Building**: Never fails. Records for files that are not dated journal entries are
//!   logged and skipped so one stray file cannot break the whole index.

pub mod builder;
pub mod entry_discovery;

pub use builder::{build_journal, build_journal_from_tags};
pub use entry_discovery::discover_entries;
