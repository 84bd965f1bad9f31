use std::io::{self, Write};

use super::options::RenderOptions;
use crate::models::Journal;
use crate::tags::TagRecord;
use crate::tags::record::HEADING_KEY;

/// Write every label that passes the filter, with a link to each occurrence
///
/// Labels are written in name order and occurrences in stored order, newest first. A link
/// is titled with the heading the label appeared under, or with its location when there
/// is none.
pub fn write_labels<W: Write>(
    journal: &Journal,
    options: &RenderOptions,
    w: &mut W,
) -> io::Result<()> {
    let heading = options.heading(0);

    for label in journal.labels() {
        if !options.label_filter().matches(&label.name) {
            continue;
        }

        write!(w, "\n{} {}\n", heading, label.name)?;
        for tag in journal.occurrences(label) {
            let location = location(tag);
            let text = tag.field(HEADING_KEY).filter(|h| !h.is_empty()).unwrap_or(&location);
            writeln!(w, "* [{}]({})", text, location)?;
        }
    }

    Ok(())
}

/// Render the label index into a string
pub fn render_labels(journal: &Journal, options: &RenderOptions) -> String {
    let mut out = Vec::new();
    write_labels(journal, options, &mut out).expect("Writing to a Vec cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}

/// `file:line`, or just the file when the line is unknown
fn location(tag: &TagRecord) -> String {
    match tag.line() {
        line if line >= 0 => format!("{}:{}", tag.file, line),
        _ => tag.file.clone(),
    }
}
