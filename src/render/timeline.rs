use std::io::{self, Write};

use chrono::Datelike;

use super::options::RenderOptions;
use crate::models::Journal;

const YEAR_FORMAT: &str = "%Y";
const MONTH_FORMAT: &str = "%B";
const DAY_FORMAT: &str = "%d %a";

/// Write the journal as a timeline, newest entry first
///
/// A year heading is written whenever the year changes and a month heading, one level
/// below, whenever the month changes. Every entry is a list item linking to its file,
/// followed by its title when it has one. Entries are written in stored order.
pub fn write_timeline<W: Write>(
    journal: &Journal,
    options: &RenderOptions,
    w: &mut W,
) -> io::Result<()> {
    let year_heading = options.heading(0);
    let month_heading = options.heading(1);
    let mut year: Option<i32> = None;
    let mut month: Option<u32> = None;

    for entry in journal.entries() {
        let date = entry.date();

        // Year and month are tracked separately: January 2006 right after January 2007
        // gets a year heading only
        if year != Some(date.year()) {
            year = Some(date.year());
            write!(w, "\n{} {}\n", year_heading, date.format(YEAR_FORMAT))?;
        }
        if month != Some(date.month()) {
            month = Some(date.month());
            write!(w, "\n{} {}\n", month_heading, date.format(MONTH_FORMAT))?;
        }

        write!(w, "* [{}]({})", date.format(DAY_FORMAT), entry.file())?;
        let title = entry.title();
        if title.is_empty() {
            writeln!(w)?;
        } else {
            writeln!(w, " - {}", title)?;
        }
    }

    Ok(())
}

/// Render the timeline into a string
pub fn render_timeline(journal: &Journal, options: &RenderOptions) -> String {
    let mut out = Vec::new();
    write_timeline(journal, options, &mut out).expect("Writing to a Vec cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}
