//! CSV sink for export commands
//!
//! Exports either create a fresh file (header first) or append rows to
//! an existing file the caller wants to extend. Embedded CR/LF in field
//! values is replaced with a space so downstream spreadsheet imports
//! see one line per record.

use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::error::{Error, Result};

use super::CsvRecord;

/// A CSV file being written row by row
#[derive(Debug)]
pub struct CsvSink {
    writer: csv::Writer<File>,
    rows_written: usize,
}

impl CsvSink {
    /// Create a new file and write the header row for `R`.
    pub fn create<R: CsvRecord>(path: &Path) -> Result<Self> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(R::headers())?;

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Append to an existing file, without writing a header.
    pub fn append(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::Other(format!(
                "Unable to find file to write to: {}",
                path.display()
            )));
        }

        let file = OpenOptions::new().append(true).open(path)?;

        Ok(Self {
            writer: csv::Writer::from_writer(file),
            rows_written: 0,
        })
    }

    /// Write one row.
    pub fn write<R: CsvRecord>(&mut self, row: &R) -> Result<()> {
        let record: Vec<String> = row.record().iter().map(|field| scrub(field)).collect();
        self.writer.write_record(&record)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Rows written so far (excluding the header).
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and close the file.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows_written)
    }
}

/// Replace embedded CR/LF with spaces.
fn scrub(field: &str) -> String {
    if field.contains(['\n', '\r']) {
        field.replace(['\n', '\r'], " ")
    } else {
        field.to_string()
    }
}
