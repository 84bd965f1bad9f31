use std::cmp::Ordering;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use regex::Regex;

use crate::tags::record::{KIND_HEADING, KIND_TITLE};
use crate::tags::TagRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date and optional suffix anywhere in a base name, as in `YYYY-MM-DD-some-suffix.md`
static ENTRY_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}-\d{2}-\d{2})(-.*)?\.md").expect("entry file pattern is valid")
});

/// Returns true if the whole base name is a journal entry name
///
/// Discovery uses this stricter check. Tag files may name entries like
/// `old-2006-01-02.md`, which [`Entry::new`] still accepts.
pub fn is_entry_file_name(name: &str) -> bool {
    ENTRY_FILE_RE.find(name).is_some_and(|m| m.start() == 0 && m.end() == name.len())
}

/// Order tags by line, with titles ahead of anything else on the same line
pub(crate) fn compare_tags(a: &TagRecord, b: &TagRecord) -> Ordering {
    a.line().cmp(&b.line()).then_with(|| b.is_kind(KIND_TITLE).cmp(&a.is_kind(KIND_TITLE)))
}

/// A dated journal document and the tags found in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    date: NaiveDate,
    suffix: String,
    file: String,
    tags: Vec<TagRecord>,
}

impl Entry {
    /// Create an entry for `file` owning `tags`
    ///
    /// Tags are stored in ascending line order. Records on the same line keep their
    /// relative order, except that titles move ahead.
    ///
    /// # Errors
    ///
    /// Returns an error if the file's base name does not contain a dated journal file name.
    pub fn new(file: impl Into<String>, mut tags: Vec<TagRecord>) -> Result<Self> {
        let file = file.into();
        let base_name =
            Path::new(&file).file_name().map(|n| n.to_string_lossy()).unwrap_or_default();

        let Some(captures) = ENTRY_FILE_RE.captures(&base_name) else {
            bail!("Not a journal entry: {}", file);
        };
        let date = NaiveDate::parse_from_str(&captures[1], DATE_FORMAT)
            .with_context(|| format!("Invalid entry date in file name: {}", file))?;
        let suffix = captures.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();

        tags.sort_by(compare_tags);

        Ok(Self { date, suffix, file, tags })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Free text following the date in the file name, including its leading dash
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn tags(&self) -> &[TagRecord] {
        &self.tags
    }

    /// Human readable title for the entry
    ///
    /// Uses the first `title` tag, then the first `heading` tag. Without either, the
    /// file name suffix is turned into a title: dashes and underscores become spaces and
    /// each word is capitalized. Returns an empty string when nothing is available.
    pub fn title(&self) -> String {
        let tagged = self
            .tags
            .iter()
            .find(|t| t.is_kind(KIND_TITLE))
            .or_else(|| self.tags.iter().find(|t| t.is_kind(KIND_HEADING)));
        if let Some(tag) = tagged {
            return tag.name.clone();
        }

        title_case(&self.suffix.replace(['-', '_'], " ")).trim().to_string()
    }

    /// Nearest title or heading tag at or before position `index`
    pub fn heading_before(&self, index: usize) -> Option<&TagRecord> {
        let end = index.checked_add(1)?.min(self.tags.len());
        self.tags[..end].iter().rev().find(|t| t.is_kind(KIND_TITLE) || t.is_kind(KIND_HEADING))
    }
}

/// Uppercase the first letter of every word. Anything but letters, digits and `_` separates
/// words.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    result
}
