/// Handle to a tag stored in a [`Journal`](super::Journal)
///
/// Points at `journal.entries()[entry].tags()[tag]`. Handles are only meaningful for the
/// journal that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagRef {
    pub entry: usize,
    pub tag: usize,
}

/// A label and every place it occurs across the journal
///
/// Occurrences are ordered by file descending, then line descending, so the most recent
/// mention comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub occurrences: Vec<TagRef>,
}
