use std::fmt;

use super::escape::{escape, unescape};

/// Line number reported when a record carries no numeric location
pub const UNKNOWN_LINE: i64 = -1;

/// Field key implied by a field written without a colon
pub const KIND_KEY: &str = "kind";
pub const LINE_KEY: &str = "line";
pub const HEADING_KEY: &str = "heading";

/// Marker that historically terminates the address column
const ADDRESS_TERMINATOR: &str = ";\"";

pub const KIND_TITLE: &str = "title";
pub const KIND_HEADING: &str = "heading";
pub const KIND_LABEL: &str = "label";
pub const KIND_ENTRY: &str = "entry";

/// A single `key:value` pair attached to a tag line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagField {
    pub key: String,
    pub value: String,
}

impl TagField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }

    /// Parse one field token. Returns `None` when the key is empty or not alphabetic.
    fn parse(token: &str) -> Option<Self> {
        let Some((key, value)) = token.split_once(':') else {
            return Some(Self::new(KIND_KEY, token));
        };

        // Keys are case sensitive and purely alphabetic
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        Some(Self::new(key, unescape(value)))
    }
}

/// A named item found at a location in a file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagRecord {
    /// Identifier of the item, without whitespace
    pub name: String,
    /// File containing the item, relative to the working root
    pub file: String,
    /// Opaque locator, usually a 1-based line number
    pub address: String,
    /// Fields in the order they were read or added. Keys may repeat.
    pub fields: Vec<TagField>,
}

impl TagRecord {
    pub fn new(
        name: impl Into<String>,
        file: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), file: file.into(), address: address.into(), fields: Vec::new() }
    }

    /// Append a field, keeping any existing field with the same key
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(TagField::new(key, value));
        self
    }

    /// Parse a single tag line. Invalid lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut columns = line.split('\t');
        let name = columns.next().unwrap_or_default();
        let file = columns.next().unwrap_or_default();
        let address = columns.next().unwrap_or_default();
        let address = address.strip_suffix(ADDRESS_TERMINATOR).unwrap_or(address);

        let record = Self {
            name: name.to_string(),
            file: file.to_string(),
            address: address.to_string(),
            fields: columns.filter_map(TagField::parse).collect(),
        };

        record.is_valid().then_some(record)
    }

    /// A record needs a name, a file and an address
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.file.is_empty() && !self.address.is_empty()
    }

    /// Value of the first field with the given key
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.value.as_str())
    }

    /// Line on which the item was found, or [`UNKNOWN_LINE`]
    ///
    /// The `line` field wins over the address when both are numeric.
    pub fn line(&self) -> i64 {
        self.field(LINE_KEY)
            .and_then(|v| v.parse().ok())
            .or_else(|| self.address.parse().ok())
            .unwrap_or(UNKNOWN_LINE)
    }

    /// Kind of the item, or an empty string
    pub fn kind(&self) -> &str {
        self.field(KIND_KEY).unwrap_or_default()
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind() == kind
    }
}

impl fmt::Display for TagRecord {
    /// Formats the record as a tag line without a trailing newline.
    /// Fields are sorted by key so output is byte-for-byte reproducible.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}{}", self.name, self.file, self.address, ADDRESS_TERMINATOR)?;

        let mut fields: Vec<&TagField> = self.fields.iter().collect();
        fields.sort_by(|a, b| a.key.cmp(&b.key));
        for field in fields {
            write!(f, "\t{}:{}", field.key, escape(&field.value))?;
        }

        Ok(())
    }
}
