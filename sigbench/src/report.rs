//! CSV report: fixed header, one row per benchmarked pair.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{BenchError, Result};

/// First line of every report.
pub const HEADER: &str = "VERSION,SCHEME,KEYGEN(ms),SIGN(ms),VERIFY(ms)";

/// Averages for one benchmarked pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Plan label (VERSION column)
    pub label: String,
    /// Canonical algorithm name (SCHEME column)
    pub scheme: String,
    /// Average keypair generation time in milliseconds
    pub keygen_ms: f64,
    /// Average signing time in milliseconds
    pub sign_ms: f64,
    /// Average verification time in milliseconds
    pub verify_ms: f64,
}

/// Renders the CSV line, without the trailing newline.
impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{:.4},{:.4},{:.4}",
            self.label, self.scheme, self.keygen_ms, self.sign_ms, self.verify_ms
        )
    }
}

/// An open report.
///
/// Rows are flushed as they are appended, so a session that dies part way
/// leaves every completed pair on disk.
#[derive(Debug)]
pub struct Report<W: Write> {
    writer: W,
    rows: usize,
}

impl Report<BufWriter<File>> {
    /// Create (or truncate) the report file at `path` and write the header.
    ///
    /// # Errors
    /// Returns [`BenchError::ReportUnavailable`] if the file cannot be created,
    /// or [`BenchError::Io`] if the header cannot be written.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| BenchError::ReportUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> Report<W> {
    /// Start a report on any writer, writing the header.
    ///
    /// # Errors
    /// Returns [`BenchError::Io`] if the header cannot be written.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{HEADER}")?;
        writer.flush()?;
        Ok(Self { writer, rows: 0 })
    }

    /// Append one row.
    ///
    /// # Errors
    /// Returns [`BenchError::Io`] on a write failure.
    pub fn append(&mut self, row: &ResultRow) -> Result<()> {
        writeln!(self.writer, "{row}")?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Rows appended so far.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the writer.
    ///
    /// # Errors
    /// Returns [`BenchError::Io`] if the final flush fails.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
