//! Markdown views over a built [`Journal`](crate::models::Journal)
//!
//! Renderers only read the journal and rely on its stored order; they never sort.
//!
//! - [`write_timeline`] - Entries grouped under year and month headings
//! - [`write_labels`] - Labels with links to every occurrence

pub mod labels;
pub mod options;
pub mod timeline;

pub use labels::{render_labels, write_labels};
pub use options::{DEFAULT_HEADING_LEVEL, RenderOptions};
pub use timeline::{render_timeline, write_timeline};
