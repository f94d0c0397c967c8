//! Table extraction pipeline.
//!
//! Extraction runs in four steps over an immutable [`Document`]:
//!
//! 1. [`resolve_text_anchor`] turns offset anchors into cleaned text.
//! 2. [`extract_rows`] resolves every cell of a table's header and body rows.
//! 3. [`associate_titles`] picks a title for each table from the nearest
//!    paragraph above it on the same page.
//! 4. [`build_table`] flattens the header and pairs it with body rows.
//!
//! # Example
//!
//! ```
//! use untable::extract::TableExtractor;
//! use untable::model::{BoundingPoly, Document, Page, Paragraph, Table, TableRow, TextAnchor};
//!
//! let mut doc = Document::new("Staff\nName Age Alice 30");
//! let mut page = Page::new(1);
//! page.add_paragraph(Paragraph::new(
//!     TextAnchor::from_range(0, 5),
//!     BoundingPoly::from_rect(0.1, 0.05, 0.9, 0.1),
//! ));
//! let mut table = Table::new(BoundingPoly::from_rect(0.1, 0.2, 0.9, 0.4));
//! table.add_header_row(TableRow::from_ranges([(6, 10), (11, 14)]));
//! table.add_body_row(TableRow::from_ranges([(15, 20), (21, 23)]));
//! page.add_table(table);
//! doc.add_page(page);
//!
//! let extraction = TableExtractor::new().extract(&doc)?;
//! assert_eq!(extraction.records[0].title, "Staff");
//! assert_eq!(extraction.records[0].rows[0].get("Age"), Some("30"));
//! # Ok::<(), untable::Error>(())
//! ```

mod anchor;
mod options;
mod record;
mod rows;
mod stats;
mod title;

pub use anchor::{resolve_text_anchor, FlatText};
pub use options::{ExtractOptions, PageSelection};
pub use record::{
    build_table, build_table_with_mismatches, column_labels, RecordRow, TableRecord,
    HEADER_LEVEL_SEPARATOR,
};
pub use rows::{extract_rows, Grid};
pub use stats::ExtractionStats;
pub use title::{associate_title, associate_titles};

use crate::error::Result;
use crate::model::{Document, Page};
use rayon::prelude::*;

/// Where an extracted table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLocation {
    /// Page position in the document (1-indexed)
    pub page: u32,
    /// Table position on its page (0-indexed)
    pub index: usize,
}

/// Result of extracting all tables from a document.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// One record per table, in page order then in-page order
    pub records: Vec<TableRecord>,

    /// Source location of each record (same order as `records`)
    pub locations: Vec<TableLocation>,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl Extraction {
    /// Consume the extraction and return only the records.
    pub fn into_records(self) -> Vec<TableRecord> {
        self.records
    }

    /// Titles of all records in order.
    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.title.as_str()).collect()
    }

    /// Iterate records together with their source locations.
    pub fn iter(&self) -> impl Iterator<Item = (&TableLocation, &TableRecord)> {
        self.locations.iter().zip(&self.records)
    }
}

/// Resolved content of one page's tables.
struct PageTables {
    number: u32,
    paragraph_count: usize,
    titles: Vec<String>,
    grids: Vec<(Grid, Grid)>,
}

/// Extracts titled table records from documents.
#[derive(Debug, Clone, Default)]
pub struct TableExtractor {
    options: ExtractOptions,
}

impl TableExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Get the extractor's options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract every selected table of the document.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::DataIntegrity`] if any anchor is
    /// inconsistent with the document text; no partial result is returned.
    /// Fails with a page error if the page selection does not fit the
    /// document.
    pub fn extract(&self, doc: &Document) -> Result<Extraction> {
        self.options.pages.validate(doc.page_count())?;

        let text = FlatText::new(&doc.text);
        let selected: Vec<(u32, &Page)> = doc
            .pages
            .iter()
            .enumerate()
            .map(|(i, page)| (i as u32 + 1, page))
            .filter(|(number, _)| self.options.pages.includes(*number))
            .collect();

        log::debug!(
            "Extracting tables from {} of {} pages",
            selected.len(),
            doc.page_count()
        );

        let pages: Vec<PageTables> = if self.options.parallel {
            selected
                .par_iter()
                .map(|&(number, page)| extract_page(number, page, &text))
                .collect::<Result<_>>()?
        } else {
            selected
                .iter()
                .map(|&(number, page)| extract_page(number, page, &text))
                .collect::<Result<_>>()?
        };

        Ok(assemble(pages))
    }
}

fn extract_page(number: u32, page: &Page, text: &FlatText<'_>) -> Result<PageTables> {
    let titles = associate_titles(page, text)?;
    let grids = page
        .tables
        .iter()
        .map(|table| {
            Ok((
                extract_rows(&table.header_rows, text)?,
                extract_rows(&table.body_rows, text)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PageTables {
        number,
        paragraph_count: page.paragraphs.len(),
        titles,
        grids,
    })
}

/// Pair the concatenated titles with the concatenated tables by position.
fn assemble(pages: Vec<PageTables>) -> Extraction {
    let mut stats = ExtractionStats::new();
    let mut titles = Vec::new();
    let mut grids = Vec::new();
    let mut locations = Vec::new();

    for page in pages {
        stats.add_page();
        stats.paragraph_count += page.paragraph_count as u32;
        locations.extend((0..page.grids.len()).map(|index| TableLocation {
            page: page.number,
            index,
        }));
        titles.extend(page.titles);
        grids.extend(page.grids);
    }

    debug_assert_eq!(titles.len(), grids.len());

    let records = grids
        .iter()
        .zip(&titles)
        .map(|((header, body), title)| {
            let (record, mismatches) = build_table_with_mismatches(header, body, title);
            stats.add_table(record.row_count(), !record.is_untitled(), mismatches);
            record
        })
        .collect();

    log::debug!(
        "Extracted {} tables ({} untitled, {} shape mismatches)",
        stats.table_count,
        stats.untitled_tables,
        stats.shape_mismatches
    );

    Extraction {
        records,
        locations,
        stats,
    }
}

/// Extract all tables from a document with default options.
pub fn extract_tables(doc: &Document) -> Result<Vec<TableRecord>> {
    TableExtractor::new().extract(doc).map(Extraction::into_records)
}

/// Extract tables with custom options.
pub fn extract_tables_with_options(doc: &Document, options: ExtractOptions) -> Result<Extraction> {
    TableExtractor::with_options(options).extract(doc)
}

/// Associate titles for every table in the document, concatenated across
/// pages in page order.
pub fn document_titles(doc: &Document) -> Result<Vec<String>> {
    let text = FlatText::new(&doc.text);
    let mut titles = Vec::with_capacity(doc.table_count());
    for page in &doc.pages {
        titles.extend(associate_titles(page, &text)?);
    }
    Ok(titles)
}
