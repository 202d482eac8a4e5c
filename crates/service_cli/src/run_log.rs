//! Plain-text run log.
//!
//! Append-only, human-readable, not meant to be parsed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDateTime;

/// Timestamp layout of the header line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Run log writer.
#[derive(Debug)]
pub struct RunLog<W: Write> {
    writer: W,
}

impl RunLog<BufWriter<File>> {
    /// Creates (or truncates) the log file at `path`.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> RunLog<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the upper-cased header line.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use service_cli::RunLog;
    ///
    /// let at = NaiveDate::from_ymd_opt(2016, 4, 1).unwrap().and_hms_micro_opt(9, 30, 0, 5).unwrap();
    /// let mut log = RunLog::new(Vec::new());
    /// log.header("deals.xml", at).unwrap();
    ///
    /// let text = String::from_utf8(log.into_inner()).unwrap();
    /// assert_eq!(text, "PORTFOLIOPROCESSOR LOG: DEALS.XML - 2016-04-01T09:30:00.000005\n");
    /// ```
    pub fn header(&mut self, catalog: &str, at: NaiveDateTime) -> std::io::Result<()> {
        let header = format!(
            "PortfolioProcessor LOG: {} - {}",
            catalog,
            at.format(TIMESTAMP_FORMAT)
        );
        self.line(&header.to_uppercase())
    }

    /// Writes one line.
    pub fn line(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> std::io::Result<()> {
        writeln!(self.writer)
    }

    /// Flushes buffered output.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
