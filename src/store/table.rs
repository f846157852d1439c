//! Flat spreadsheet tables backed by CSV files.
//!
//! A table is a header row followed by data rows. There is no index and no
//! cache: reads always go to disk and every mutation rewrites the whole file.

use crate::errors::{AppError, AppResult};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::de::DeserializeOwned;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Table {
    path: PathBuf,
    headers: &'static [&'static str],
}

/// A data row together with the file line it was read from.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub line: u64,
    pub record: StringRecord,
}

impl RawRow {
    pub fn field(&self, idx: usize) -> &str {
        self.record.get(idx).unwrap_or("")
    }
}

impl Table {
    pub fn new(path: PathBuf, headers: &'static [&'static str]) -> Self {
        Self { path, headers }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Create the file with only its header row if it does not exist yet.
    /// Returns `true` when the file was created.
    pub fn ensure(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        self.rewrite(Vec::<Vec<String>>::new())?;
        Ok(true)
    }

    /// Read every non-blank data row. Rows with the wrong number of cells
    /// are reported as malformed.
    pub fn read(&self) -> AppResult<Vec<RawRow>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_path(&self.path)?;

        let mut out = Vec::new();

        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.iter().all(|cell| cell.is_empty()) {
                continue;
            }

            if record.len() != self.headers.len() {
                return Err(self.malformed(
                    line,
                    format!(
                        "expected {} cells, found {}",
                        self.headers.len(),
                        record.len()
                    ),
                ));
            }

            out.push(RawRow { line, record });
        }

        Ok(out)
    }

    /// Read rows through serde, using the header row for field names.
    pub fn read_as<T: DeserializeOwned>(&self) -> AppResult<Vec<T>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_path(&self.path)?;

        let mut out = Vec::new();
        for item in rdr.deserialize() {
            out.push(item?);
        }
        Ok(out)
    }

    /// Replace the whole file with the header row plus `rows`, and sync it
    /// to disk before returning.
    pub fn rewrite<I, R>(&self, rows: I) -> AppResult<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: AsRef<[u8]>,
    {
        let file = File::create(&self.path)?;
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

        wtr.write_record(self.headers)?;
        for row in rows {
            wtr.write_record(row)?;
        }

        let file = wtr.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(())
    }

    /// Append a single row without rewriting the file.
    pub fn append<R>(&self, row: R) -> AppResult<()>
    where
        R: IntoIterator,
        R::Item: AsRef<[u8]>,
    {
        self.ensure()?;

        let unterminated = fs::read(&self.path)?
            .last()
            .is_some_and(|b| *b != b'\n');

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        if unterminated {
            file.write_all(b"\n")?;
        }
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record(row)?;
        wtr.flush()?;
        Ok(())
    }

    pub fn malformed(&self, line: u64, message: impl Into<String>) -> AppError {
        AppError::MalformedRow {
            file: self.file_name(),
            line,
            message: message.into(),
        }
    }

    /// Parse a non-negative integer cell, reporting the column on failure.
    pub fn parse_u64(&self, row: &RawRow, idx: usize) -> AppResult<u64> {
        let raw = row.field(idx);
        raw.parse::<u64>().map_err(|_| {
            self.malformed(
                row.line,
                format!(
                    "{} must be a non-negative integer, found '{}'",
                    self.headers[idx], raw
                ),
            )
        })
    }
}
