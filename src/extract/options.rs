//! Extraction options and configuration.

use crate::error::{Error, Result};
use std::ops::RangeInclusive;

/// Options for extracting tables from a document.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Whether to process pages in parallel
    pub parallel: bool,

    /// Which pages to extract tables from
    pub pages: PageSelection,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Set specific page range.
    pub fn with_page_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.pages = PageSelection::Range(range);
        self
    }

    /// Set specific pages.
    pub fn with_page_list(mut self, pages: Vec<u32>) -> Self {
        self.pages = PageSelection::Pages(pages);
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            pages: PageSelection::All,
        }
    }
}

/// Page selection for extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// All pages
    #[default]
    All,
    /// A range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Specific pages (1-indexed)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Check that the selection refers to pages the document has.
    ///
    /// A range may run past the last page; its start may not. Listed pages
    /// must all exist.
    pub fn validate(&self, page_count: u32) -> Result<()> {
        match self {
            PageSelection::All => Ok(()),
            PageSelection::Range(range) => {
                if *range.start() == 0 || range.start() > range.end() {
                    Err(Error::InvalidPageRange(format!(
                        "{}-{}",
                        range.start(),
                        range.end()
                    )))
                } else if *range.start() > page_count {
                    Err(Error::PageOutOfRange(*range.start(), page_count))
                } else {
                    Ok(())
                }
            }
            PageSelection::Pages(pages) => {
                if pages.contains(&0) {
                    return Err(Error::InvalidPageRange("page 0".into()));
                }
                match pages.iter().find(|&&p| p > page_count) {
                    Some(&p) => Err(Error::PageOutOfRange(p, page_count)),
                    None => Ok(()),
                }
            }
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        let invalid = |what: &str| Error::InvalidPageRange(format!("{} in {:?}", what, s));

        // Simple range (e.g., "1-10")
        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let start: u32 = start
                    .trim()
                    .parse()
                    .map_err(|_| invalid("invalid start page"))?;
                let end: u32 = end.trim().parse().map_err(|_| invalid("invalid end page"))?;
                return Ok(PageSelection::Range(start..=end));
            }
        }

        // Comma-separated list with possible ranges
        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let start: u32 = start
                    .trim()
                    .parse()
                    .map_err(|_| invalid("invalid page number"))?;
                let end: u32 = end
                    .trim()
                    .parse()
                    .map_err(|_| invalid("invalid page number"))?;
                for p in start..=end {
                    if !pages.contains(&p) {
                        pages.push(p);
                    }
                }
            } else {
                let p: u32 = part.parse().map_err(|_| invalid("invalid page number"))?;
                if !pages.contains(&p) {
                    pages.push(p);
                }
            }
        }

        pages.sort();
        Ok(PageSelection::Pages(pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_options_builder() {
        let options = ExtractOptions::new().sequential().with_page_range(2..=4);
        assert!(!options.parallel);
        assert_eq!(options.pages, PageSelection::Range(2..=4));

        let options = ExtractOptions::default();
        assert!(options.parallel);
        assert_eq!(options.pages, PageSelection::All);
    }

    #[test]
    fn test_page_selection_includes() {
        let all = PageSelection::All;
        assert!(all.includes(1));
        assert!(all.includes(100));

        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));

        let pages = PageSelection::Pages(vec![1, 3, 5, 7]);
        assert!(pages.includes(1));
        assert!(!pages.includes(2));
        assert!(pages.includes(3));
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(PageSelection::parse("").unwrap(), PageSelection::All);
        assert_eq!(
            PageSelection::parse("1-10").unwrap(),
            PageSelection::Range(1..=10)
        );
        assert_eq!(
            PageSelection::parse("10,1,3,5-7,3").unwrap(),
            PageSelection::Pages(vec![1, 3, 5, 6, 7, 10])
        );
    }

    #[test]
    fn test_page_selection_parse_invalid() {
        assert!(matches!(
            PageSelection::parse("a-3"),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(PageSelection::parse("1,x").is_err());
    }

    #[test]
    fn test_page_selection_validate() {
        assert!(PageSelection::All.validate(0).is_ok());
        assert!(PageSelection::Range(2..=9).validate(3).is_ok());
        assert!(matches!(
            PageSelection::Range(4..=9).validate(3),
            Err(Error::PageOutOfRange(4, 3))
        ));
        assert!(matches!(
            PageSelection::Range(0..=2).validate(3),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(matches!(
            PageSelection::Pages(vec![1, 5]).validate(3),
            Err(Error::PageOutOfRange(5, 3))
        ));
    }
}
