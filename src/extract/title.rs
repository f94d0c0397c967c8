//! Table title association by vertical proximity.
//!
//! A table's title is taken to be the paragraph on the same page whose
//! bottom edge sits closest above the table's top edge. Horizontal
//! alignment is ignored and paragraphs on other pages are never
//! considered.

use super::anchor::{resolve_text_anchor, FlatText};
use crate::error::Result;
use crate::model::{Page, Paragraph, Table};

/// Running best candidate while scanning a page's paragraphs.
struct Nearest {
    title: String,
    gap: f64,
}

/// Associate a title with every table on a page.
///
/// Returns one entry per table, in the page's table order. Tables with no
/// paragraph above them get an empty title.
///
/// # Errors
///
/// Propagates [`crate::Error::DataIntegrity`] from anchor resolution.
pub fn associate_titles(page: &Page, text: &FlatText<'_>) -> Result<Vec<String>> {
    page.tables
        .iter()
        .map(|table| associate_title(table, &page.paragraphs, text))
        .collect()
}

/// Find the title for one table among the given paragraphs.
///
/// Paragraphs are scanned in order. A paragraph qualifies when its gap to
/// the table is strictly positive and strictly smaller than the best gap so
/// far, so among equally close paragraphs the first one wins.
pub fn associate_title(
    table: &Table,
    paragraphs: &[Paragraph],
    text: &FlatText<'_>,
) -> Result<String> {
    let Some(table_top) = table.top_y() else {
        log::warn!("Table has no bounding vertices, leaving it untitled");
        return Ok(String::new());
    };

    let initial = Nearest {
        title: String::new(),
        gap: f64::INFINITY,
    };

    let nearest = paragraphs.iter().try_fold(initial, |best, paragraph| -> Result<Nearest> {
        let Some(paragraph_bottom) = paragraph.bottom_y() else {
            log::debug!("Skipping paragraph without a bottom-right vertex");
            return Ok(best);
        };

        let gap = f64::from(table_top) - f64::from(paragraph_bottom);
        if gap > 0.0 && gap < best.gap {
            Ok(Nearest {
                title: resolve_text_anchor(paragraph.text_anchor(), text)?,
                gap,
            })
        } else {
            Ok(best)
        }
    })?;

    if !nearest.gap.is_finite() {
        log::debug!("No paragraph above table at y={:.4}", table_top);
    } else {
        log::debug!(
            "Table at y={:.4} titled {:?} (gap {:.4})",
            table_top,
            nearest.title,
            nearest.gap
        );
    }

    Ok(nearest.title)
}
