use crate::tags::TagRecord;
use crate::tags::record::{HEADING_KEY, KIND_HEADING, KIND_KEY, KIND_LABEL, KIND_TITLE, LINE_KEY};

/// Produces tag records for one journal entry
pub trait EntryScanner {
    /// Scan `source`, the contents of `file`, and return its tags in document order
    fn scan(&self, file: &str, source: &str) -> Vec<TagRecord>;
}

/// Line-oriented scanner for ATX headings and `:label:` markers
///
/// - The first heading of a file is tagged `title`, later headings `heading`.
/// - Labels carry a `heading` field naming the nearest heading at or above them.
/// - Fenced code blocks and inline code spans are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownScanner;

impl EntryScanner for MarkdownScanner {
    fn scan(&self, file: &str, source: &str) -> Vec<TagRecord> {
        let mut records = Vec::new();
        let mut fence: Option<Fence> = None;
        let mut current_heading: Option<String> = None;

        for (index, line) in source.lines().enumerate() {
            let line_num = (index + 1).to_string();

            if let Some(open) = fence {
                if open.is_closed_by(line) {
                    fence = None;
                }
                continue;
            }
            if let Some(open) = Fence::open(line) {
                fence = Some(open);
                continue;
            }

            if let Some(text) = atx_heading(line).filter(|t| !t.is_empty()) {
                let kind = if current_heading.is_none() { KIND_TITLE } else { KIND_HEADING };
                records.push(
                    TagRecord::new(text, file, &line_num)
                        .with_field(LINE_KEY, &line_num)
                        .with_field(KIND_KEY, kind),
                );
                current_heading = Some(text.to_string());
            }

            for label in find_labels(line) {
                let mut record = TagRecord::new(label, file, &line_num)
                    .with_field(LINE_KEY, &line_num)
                    .with_field(KIND_KEY, KIND_LABEL);
                if let Some(heading) = &current_heading {
                    record = record.with_field(HEADING_KEY, heading);
                }
                records.push(record);
            }
        }

        records
    }
}

/// An open fenced code block
#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    fn open(line: &str) -> Option<Self> {
        let trimmed = strip_indent(line)?;
        let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = trimmed.chars().take_while(|c| *c == marker).count();
        (len >= 3).then_some(Self { marker, len })
    }

    fn is_closed_by(&self, line: &str) -> bool {
        let Some(trimmed) = strip_indent(line) else {
            return false;
        };
        let len = trimmed.chars().take_while(|c| *c == self.marker).count();
        len >= self.len && trimmed[len * self.marker.len_utf8()..].trim().is_empty()
    }
}

/// Strip up to three spaces of indentation. Deeper indentation is not a block marker.
fn strip_indent(line: &str) -> Option<&str> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    (indent <= 3).then(|| &line[indent..])
}

/// Text of an ATX heading line, without its markers
fn atx_heading(line: &str) -> Option<&str> {
    let trimmed = strip_indent(line)?;
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }

    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }

    let text = rest.trim();
    let without_closing = text.trim_end_matches('#');
    if without_closing.is_empty() {
        return Some("");
    }
    if without_closing.ends_with([' ', '\t']) {
        return Some(without_closing.trim_end());
    }
    Some(text)
}

fn is_label_char(c: char) -> bool {
    c == '-' || c == '_' || c.is_alphanumeric()
}

/// Characters allowed right before and after a label's colons
fn is_boundary_char(c: char) -> bool {
    c != ':' && c != '/' && !c.is_alphanumeric()
}

/// Find `:label:` markers in a line, outside of code spans
fn find_labels(line: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut labels = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (_, c) = chars[i];

        if c == '`' {
            i = skip_code_span(&chars, i);
            continue;
        }

        if c != ':' || (i > 0 && !is_boundary_char(chars[i - 1].1)) {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < chars.len() && is_label_char(chars[end].1) {
            end += 1;
        }

        let closed = end < chars.len() && chars[end].1 == ':';
        let non_empty = end > i + 1;
        let bounded = end + 1 >= chars.len() || is_boundary_char(chars[end + 1].1);
        if closed && non_empty && bounded {
            labels.push(&line[chars[i + 1].0..chars[end].0]);
            i = end + 1;
        } else {
            i += 1;
        }
    }

    labels
}

/// Index just past a code span starting at `start`, or past the opening backticks when the
/// span is never closed
fn skip_code_span(chars: &[(usize, char)], start: usize) -> usize {
    let run = chars[start..].iter().take_while(|(_, c)| *c == '`').count();
    let mut i = start + run;

    while i < chars.len() {
        if chars[i].1 == '`' {
            let closing = chars[i..].iter().take_while(|(_, c)| *c == '`').count();
            if closing == run {
                return i + closing;
            }
            i += closing;
        } else {
            i += 1;
        }
    }

    start + run
}
