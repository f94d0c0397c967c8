//! Markdown rendering for table records.

use crate::extract::TableRecord;

/// Render table records as Markdown.
///
/// Each record becomes a `##` heading with its title (untitled tables are
/// numbered) followed by a pipe table. Columns appear in first-seen order;
/// a row lacking a column gets an empty cell.
pub fn to_markdown(records: &[TableRecord]) -> String {
    let mut output = String::new();
    for (i, record) in records.iter().enumerate() {
        render_record(&mut output, record, i + 1);
    }
    output
}

fn render_record(output: &mut String, record: &TableRecord, number: usize) {
    if record.is_untitled() {
        output.push_str(&format!("## Table {}\n\n", number));
    } else {
        output.push_str(&format!("## {}\n\n", record.title));
    }

    let labels = record.column_labels();
    if labels.is_empty() {
        return;
    }

    push_row(output, labels.iter().copied());
    output.push('|');
    for _ in &labels {
        output.push_str(" --- |");
    }
    output.push('\n');

    for row in &record.rows {
        push_row(output, labels.iter().map(|label| row.get(label).unwrap_or("")));
    }
    output.push('\n');
}

fn push_row<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>) {
    output.push('|');
    for cell in cells {
        output.push_str(&format!(" {} |", escape_cell(cell)));
    }
    output.push('\n');
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
