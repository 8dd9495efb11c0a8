//! Error types for the speedup report pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, transforming or writing a benchmark table.
///
/// Non-numeric trial values are not errors: they degrade to NaN averages and
/// speedups, since the input comes from a trusted harness.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input table is malformed (missing header, ragged rows, bad trial range).
    #[error("malformed table at line {line}: {message}")]
    Format { line: usize, message: String },

    /// A column the pipeline needs is absent from the header.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A field that must be typed (e.g. `threads`) could not be parsed.
    #[error("invalid value in column '{column}' at row {row}: '{value}'")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    /// A parallel row has no sequential baseline for its difficulty.
    #[error("no sequential baseline for difficulty '{difficulty}' (row {row})")]
    KeyLookup { difficulty: String, row: usize },

    /// More than one baseline row was found for the same difficulty.
    #[error("duplicate sequential baseline for difficulty '{difficulty}'")]
    DuplicateBaseline { difficulty: String },

    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The chart backend failed to draw or save an image.
    #[error("failed to render chart {}: {message}", path.display())]
    Chart { path: PathBuf, message: String },
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ReportError>;
