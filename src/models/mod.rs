//! Data models for the journal index.
//!
//! - [`Entry`] - One dated journal document and its tags in line order
//! - [`Label`] - A label name and handles to each of its occurrences
//! - [`Journal`] - The index: entries newest first and labels by name
//!
//! Tag records themselves live in [`crate::tags`].

pub mod entry;
pub mod journal;
pub mod label;

pub use entry::{Entry, is_entry_file_name};
pub use journal::Journal;
pub use label::{Label, TagRef};
