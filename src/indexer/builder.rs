//! Journal builder: turns a flat stream of tag records into a [`Journal`].
//!
//! # Error Handling Strategy
//!
//! Building never fails:
//!
//! - **Undated files**: Records whose file name is not a dated journal entry are dropped
//!   together with any labels they carry, and a warning names the file.
//! - **Empty input**: Produces an empty journal.
//!
//! Every discovered file is expected to contribute at least one record so that content-free
//! entries still show up. The scanner side takes care of that, not this module.

use anyhow::Result;
use log::{info, warn};

use crate::models::{Entry, Journal, Label, TagRef};
use crate::tags::TagRecord;
use crate::tags::record::KIND_LABEL;

/// Build a journal from tag records in any order
///
/// 1. Records are grouped by file, newest file first, and each group becomes an [`Entry`]
///    holding its tags in ascending line order.
/// 2. Every `label` tag is indexed by name. Occurrences of one label are ordered by file
///    descending, then line descending.
///
/// # Examples
///
/// ```
/// use markdown_journal::build_journal;
/// use markdown_journal::tags::TagRecord;
///
/// let records = vec![
///     TagRecord::new("Foo", "2006-01-02.md", "2").with_field("kind", "title"),
///     TagRecord::new("bar", "2006-01-02.md", "4").with_field("kind", "label"),
/// ];
/// let journal = build_journal(records);
/// assert_eq!(journal.entries()[0].title(), "Foo");
/// assert_eq!(journal.labels()[0].name, "bar");
/// ```
pub fn build_journal(records: impl IntoIterator<Item = TagRecord>) -> Journal {
    let mut records: Vec<TagRecord> = records.into_iter().collect();

    // Stable sort: records within a file keep their input order until the entry sorts them
    records.sort_by(|a, b| b.file.cmp(&a.file));

    let mut entries = Vec::new();
    let mut skipped_files = 0;
    let mut iter = records.into_iter().peekable();

    while let Some(first) = iter.next() {
        let file = first.file.clone();
        let mut tags = vec![first];
        while let Some(record) = iter.next_if(|r| r.file == file) {
            tags.push(record);
        }

        match Entry::new(file, tags) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                skipped_files += 1;
                warn!("Skipping file: {}", e);
            }
        }
    }

    let labels = index_labels(&entries);

    info!(
        "Indexed {} entries and {} labels ({} files skipped)",
        entries.len(),
        labels.len(),
        skipped_files
    );

    Journal::from_parts(entries, labels)
}

/// Read tag records from a tag file and build a journal
pub fn build_journal_from_tags(reader: impl std::io::BufRead) -> Result<Journal> {
    let records = crate::tags::TagReader::new(reader).read_all()?;
    Ok(build_journal(records))
}

/// Collect label occurrences from entries and group them by name
fn index_labels(entries: &[Entry]) -> Vec<Label> {
    let tag = |r: &TagRef| &entries[r.entry].tags()[r.tag];

    let mut occurrences: Vec<TagRef> = entries
        .iter()
        .enumerate()
        .flat_map(|(entry, e)| {
            e.tags()
                .iter()
                .enumerate()
                .filter(|(_, t)| t.is_kind(KIND_LABEL))
                .map(move |(tag, _)| TagRef { entry, tag })
        })
        .collect();

    occurrences.sort_by(|a, b| {
        let (a, b) = (tag(a), tag(b));
        a.name
            .cmp(&b.name)
            .then_with(|| b.file.cmp(&a.file))
            .then_with(|| b.line().cmp(&a.line()))
    });

    let mut labels: Vec<Label> = Vec::new();
    for occurrence in occurrences {
        let name = &tag(&occurrence).name;
        match labels.last_mut() {
            Some(label) if &label.name == name => label.occurrences.push(occurrence),
            _ => labels.push(Label { name: name.clone(), occurrences: vec![occurrence] }),
        }
    }

    labels
}
