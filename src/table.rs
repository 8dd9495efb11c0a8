//! Raw benchmark tables.
//!
//! The harness writes a header row followed by one whitespace-delimited row
//! per configuration. [`Table`] keeps every field as text, in input order, so
//! that later stages can type the columns they care about and the exporter can
//! reproduce the rest verbatim.

use crate::error::{ReportError, Result};
use std::fs;
use std::path::Path;

/// A header plus rows of raw text fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse a whitespace-delimited table. The first non-blank line is the header.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let columns: Vec<String> = match lines.next() {
            Some((_, header)) => header.split_whitespace().map(String::from).collect(),
            None => {
                return Err(ReportError::Format {
                    line: 1,
                    message: "missing header row".to_string(),
                })
            }
        };

        let mut rows = Vec::new();
        for (line, text) in lines {
            let fields: Vec<String> = text.split_whitespace().map(String::from).collect();
            if fields.len() != columns.len() {
                return Err(ReportError::Format {
                    line,
                    message: format!(
                        "expected {} fields, found {}",
                        columns.len(),
                        fields.len()
                    ),
                });
            }
            rows.push(fields);
        }

        Ok(Table { columns, rows })
    }

    /// Read and parse a whitespace-delimited table from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        Self::parse(&text)
    }

    /// Read a table previously written by [`crate::export::export`].
    ///
    /// The leading row-index column is dropped, so the remaining layout matches
    /// the original input plus the derived `avg` and `speedup` columns.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path.as_ref())?;

        let columns = reader
            .headers()?
            .iter()
            .skip(1)
            .map(String::from)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().skip(1).map(String::from).collect());
        }

        Ok(Table { columns, rows })
    }

    /// Position of a named column.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ReportError::MissingColumn(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
