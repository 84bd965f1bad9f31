//! Tag-line codec for the ctags-style interchange format
//!
//! Each line describes one named item found at a location:
//!
//! ```text
//! <name>\t<file>\t<address>;"\t<key>:<value>\t...
//! ```
//!
//! # Error Handling Strategy
//!
//! The format is lossy on purpose:
//!
//! - **Malformed lines**: A line missing its name, file or address is dropped and reading
//!   continues with the next line.
//! - **Malformed fields**: A field whose key is empty or not purely alphabetic is dropped.
//! - **I/O failures**: Only errors from the underlying reader or writer are surfaced, as
//!   `std::io::Error`. Callers attach path context.

pub mod escape;
pub mod reader;
pub mod record;
pub mod writer;

pub use reader::TagReader;
pub use record::{TagField, TagRecord, UNKNOWN_LINE};
pub use writer::TagWriter;
