//! JSON rendering for table records.

use crate::error::{Error, Result};
use crate::extract::TableRecord;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default file name for persisted table records.
pub const DEFAULT_JSON_FILE: &str = "table_data.json";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with 4-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert table records to a JSON string.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn to_json(records: &[TableRecord], format: JsonFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_records(&mut buf, records, format)?;
    String::from_utf8(buf).map_err(|e| Error::Render(format!("JSON is not UTF-8: {}", e)))
}

/// Write table records as JSON to a file.
pub fn write_json<P: AsRef<Path>>(path: P, records: &[TableRecord], format: JsonFormat) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records, format)?;
    writer.flush()?;
    log::debug!(
        "Wrote {} table records to {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

fn write_records<W: Write>(writer: W, records: &[TableRecord], format: JsonFormat) -> Result<()> {
    let result = match format {
        JsonFormat::Pretty => {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
            records.serialize(&mut ser)
        }
        JsonFormat::Compact => serde_json::to_writer(writer, records),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
