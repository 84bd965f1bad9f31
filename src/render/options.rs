use anyhow::{Result, bail};

use crate::filters::LabelFilter;

/// Heading level used when none is configured
pub const DEFAULT_HEADING_LEVEL: usize = 1;

/// Deepest Markdown heading level
const MAX_HEADING_LEVEL: usize = 6;

/// Settings for one render call
#[derive(Debug, Clone)]
pub struct RenderOptions {
    heading_level: usize,
    label_filter: LabelFilter,
}

impl RenderOptions {
    /// Options with the given base heading level and no label filter
    ///
    /// # Errors
    ///
    /// Returns an error if `heading_level` is not between 1 and 6.
    pub fn new(heading_level: usize) -> Result<Self> {
        if !(1..=MAX_HEADING_LEVEL).contains(&heading_level) {
            bail!(
                "Heading level must be between 1 and {}, got {}",
                MAX_HEADING_LEVEL,
                heading_level
            );
        }
        Ok(Self { heading_level, label_filter: LabelFilter::default() })
    }

    pub fn with_label_filter(mut self, label_filter: LabelFilter) -> Self {
        self.label_filter = label_filter;
        self
    }

    pub fn heading_level(&self) -> usize {
        self.heading_level
    }

    pub fn label_filter(&self) -> &LabelFilter {
        &self.label_filter
    }

    /// Markdown heading marker `depth` levels below the base level
    pub(crate) fn heading(&self, depth: usize) -> String {
        "#".repeat(self.heading_level + depth)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { heading_level: DEFAULT_HEADING_LEVEL, label_filter: LabelFilter::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.heading_level(), 1);
        assert!(options.label_filter().is_empty());
        assert_eq!(options.heading(0), "#");
        assert_eq!(options.heading(1), "##");
    }

    #[test]
    fn test_heading_level_bounds() {
        assert!(RenderOptions::new(0).is_err());
        assert!(RenderOptions::new(7).is_err());
        assert_eq!(RenderOptions::new(3).unwrap().heading(0), "###");
    }
}
