use crate::error::{ReportError, Result};
use crate::table::Table;
use num::Float;
use std::ops::Range;

pub const STRATEGY: &str = "strategy";
pub const DIFFICULTY: &str = "difficulty";
pub const THREADS: &str = "threads";

/// One benchmark configuration with its derived columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    /// Position of the row in the input table.
    pub index: usize,
    /// Raw fields as read, used when the table is exported.
    pub fields: Vec<String>,
    pub strategy: String,
    pub difficulty: String,
    pub threads: i64,
    pub trials: Vec<f64>,
    /// Mean of `trials`.
    pub avg: f64,
    /// Baseline average over `avg`; `None` for sequential rows.
    pub speedup: Option<f64>,
}

/// The loaded table after aggregation, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedTable {
    pub columns: Vec<String>,
    pub rows: Vec<MeasurementRow>,
}

impl AugmentedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct difficulties in the order they were first encountered.
    pub fn difficulties(&self) -> Vec<String> {
        unique_in_order(self.rows.iter().map(|r| r.difficulty.as_str()))
    }

    /// Distinct strategies in the order they were first encountered.
    pub fn strategies(&self) -> Vec<String> {
        unique_in_order(self.rows.iter().map(|r| r.strategy.as_str()))
    }
}

pub(crate) fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Unweighted arithmetic mean. NaN inputs propagate; an empty slice yields NaN.
pub fn mean<F: Float>(values: &[F]) -> F {
    let sum = values.iter().fold(F::zero(), |acc, &v| acc + v);
    match F::from(values.len()) {
        Some(n) if !values.is_empty() => sum / n,
        _ => F::nan(),
    }
}

fn parse_trial(value: &str) -> f64 {
    value.parse::<f64>().unwrap_or(f64::NAN)
}

/// Type the identifying columns of every row and compute `avg` over the trial
/// columns at `trials` (zero-based, contiguous).
pub fn aggregate(table: &Table, trials: &Range<usize>) -> Result<AugmentedTable> {
    let strategy = table.column_index(STRATEGY)?;
    let difficulty = table.column_index(DIFFICULTY)?;
    let threads = table.column_index(THREADS)?;

    if trials.is_empty() || trials.end > table.columns.len() {
        return Err(ReportError::Format {
            line: 1,
            message: format!(
                "trial columns {}..{} do not fit a table of {} columns",
                trials.start,
                trials.end,
                table.columns.len()
            ),
        });
    }

    let mut rows = Vec::with_capacity(table.len());
    for (index, fields) in table.rows.iter().enumerate() {
        let threads_value = fields[threads].parse::<i64>().map_err(|_| {
            ReportError::InvalidValue {
                column: THREADS.to_string(),
                row: index,
                value: fields[threads].clone(),
            }
        })?;

        let trial_values: Vec<f64> = fields[trials.clone()]
            .iter()
            .map(|v| parse_trial(v))
            .collect();

        rows.push(MeasurementRow {
            index,
            fields: fields.clone(),
            strategy: fields[strategy].clone(),
            difficulty: fields[difficulty].clone(),
            threads: threads_value,
            avg: mean(&trial_values),
            trials: trial_values,
            speedup: None,
        });
    }

    Ok(AugmentedTable {
        columns: table.columns.clone(),
        rows,
    })
}
