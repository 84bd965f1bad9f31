use anyhow::{Context, Result};
use regex::Regex;

/// Set of regular expressions a label name must all match
///
/// An empty filter matches every label.
#[derive(Debug, Clone, Default)]
pub struct LabelFilter {
    patterns: Vec<Regex>,
}

impl LabelFilter {
    /// Compile every pattern up front
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern that is not a valid regular expression.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).with_context(|| format!("Invalid label filter pattern: {}", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True when `name` matches every pattern
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().all(|re| re.is_match(name))
    }
}
