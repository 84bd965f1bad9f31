use super::entry::Entry;
use super::label::{Label, TagRef};
use crate::tags::TagRecord;

/// Index over a set of journal entries
///
/// Entries are ordered by file path descending, which is newest first for dated file
/// names. Labels are ordered by name ascending. The journal owns copies of every record
/// it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<Entry>,
    labels: Vec<Label>,
}

impl Journal {
    /// Assemble a journal from parts that already satisfy the ordering rules
    pub(crate) fn from_parts(entries: Vec<Entry>, labels: Vec<Label>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].file() > w[1].file()));
        debug_assert!(labels.windows(2).all(|w| w[0].name < w[1].name));
        Self { entries, labels }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry for a file path
    pub fn entry(&self, file: &str) -> Option<&Entry> {
        self.entries
            .binary_search_by(|e| file.cmp(e.file()))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Find a label by name
    pub fn label(&self, name: &str) -> Option<&Label> {
        self.labels
            .binary_search_by(|l| l.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.labels[i])
    }

    /// Resolve an occurrence handle to its tag
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this journal.
    pub fn tag(&self, tag_ref: TagRef) -> &TagRecord {
        &self.entries[tag_ref.entry].tags()[tag_ref.tag]
    }

    /// Resolve an occurrence handle to the entry that contains it
    pub fn entry_of(&self, tag_ref: TagRef) -> &Entry {
        &self.entries[tag_ref.entry]
    }

    /// Tags for every occurrence of a label, in stored order
    pub fn occurrences<'a>(
        &'a self,
        label: &'a Label,
    ) -> impl Iterator<Item = &'a TagRecord> + 'a {
        label.occurrences.iter().map(|r| self.tag(*r))
    }
}
