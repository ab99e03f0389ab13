use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::ServiceError;

/// MIME type advertised for exported CSV documents.
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// A single CSV cell: text or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum CsvValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for CsvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvValue::Text(s) => f.write_str(s),
            CsvValue::Int(n) => write!(f, "{n}"),
            CsvValue::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for CsvValue {
    fn from(value: &str) -> Self {
        CsvValue::Text(value.to_string())
    }
}

impl From<String> for CsvValue {
    fn from(value: String) -> Self {
        CsvValue::Text(value)
    }
}

impl From<i64> for CsvValue {
    fn from(value: i64) -> Self {
        CsvValue::Int(value)
    }
}

impl From<i32> for CsvValue {
    fn from(value: i32) -> Self {
        CsvValue::Int(value.into())
    }
}

impl From<u32> for CsvValue {
    fn from(value: u32) -> Self {
        CsvValue::Int(value.into())
    }
}

impl From<f64> for CsvValue {
    fn from(value: f64) -> Self {
        CsvValue::Float(value)
    }
}

/// Escapes one raw cell value: embedded quotes are doubled and the whole
/// cell is wrapped in quotes unconditionally. Meant for raw values only;
/// re-applying it to already-quoted output quotes it a second time.
fn escape_cell(raw: &str) -> String {
    format!("\"{}\"", raw.replace('"', "\"\""))
}

/// Renders a CSV document: `headers` first, then one line per row, every
/// cell quoted, cells joined with `,` and rows with `\n`.
///
/// Unconditional quoting keeps cells containing delimiters or quote
/// characters correct at the cost of slightly larger output.
pub fn render_csv(headers: &[&str], rows: &[Vec<CsvValue>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| escape_cell(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.iter()
                .map(|cell| escape_cell(&cell.to_string()))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// A fully rendered CSV document ready for delivery.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvExport {
    filename: String,
    content: String,
}

impl CsvExport {
    /// Renders `headers` and `rows` into a document named
    /// `<filename_base>.csv`.
    pub fn new(headers: &[&str], rows: &[Vec<CsvValue>], filename_base: &str) -> Self {
        Self {
            filename: format!("{filename_base}.csv"),
            content: render_csv(headers, rows),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mime(&self) -> &'static str {
        CSV_MIME
    }

    /// Writes the document into `dir` under its own filename and returns
    /// the final path.
    ///
    /// Delivery goes through a scoped transient resource: the bytes land in
    /// a named temp file inside `dir`, which is persisted onto the final
    /// name only once fully written. If any step fails, the temp file's
    /// drop guard removes it, so no partial output remains and release
    /// happens exactly once on every exit path.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ServiceError> {
        let mut transient = NamedTempFile::new_in(dir)?;
        transient.write_all(self.content.as_bytes())?;

        let target = dir.join(&self.filename);
        transient.persist(&target).map_err(|e| e.error)?;
        debug!(
            file = %target.display(),
            bytes = self.content.len(),
            "csv export written"
        );
        Ok(target)
    }
}
