//! Splitting aggregated rows into sequential baselines and parallel results.

use crate::aggregate::{unique_in_order, MeasurementRow};
use crate::error::{ReportError, Result};
use std::collections::HashMap;

/// How the sequential baseline rows are identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Rows whose strategy equals the sequential tag are baselines.
    #[default]
    ByStrategy,
    /// The leading block of rows, one per distinct difficulty, are baselines.
    ///
    /// This is the layout the benchmark harness writes. It trusts row order
    /// and ignores the strategy column entirely.
    Positional,
}

/// The `{difficulty, threads, strategy, avg}` projection of a baseline row.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineEntry {
    pub difficulty: String,
    pub threads: i64,
    pub strategy: String,
    pub avg: f64,
}

/// Sequential baselines keyed by difficulty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaselineTable {
    entries: HashMap<String, BaselineEntry>,
}

impl BaselineTable {
    fn insert(&mut self, row: &MeasurementRow) -> Result<()> {
        if self.entries.contains_key(&row.difficulty) {
            return Err(ReportError::DuplicateBaseline {
                difficulty: row.difficulty.clone(),
            });
        }
        self.entries.insert(
            row.difficulty.clone(),
            BaselineEntry {
                difficulty: row.difficulty.clone(),
                threads: row.threads,
                strategy: row.strategy.clone(),
                avg: row.avg,
            },
        );
        Ok(())
    }

    pub fn get(&self, difficulty: &str) -> Option<&BaselineEntry> {
        self.entries.get(difficulty)
    }

    /// Like [`BaselineTable::get`] but a missing entry is a `KeyLookup` error
    /// attributed to `row`.
    pub fn lookup(&self, difficulty: &str, row: usize) -> Result<&BaselineEntry> {
        self.get(difficulty).ok_or_else(|| ReportError::KeyLookup {
            difficulty: difficulty.to_string(),
            row,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of [`split`]: the baselines plus the positions of the parallel rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub baseline: BaselineTable,
    pub parallel: Vec<usize>,
}

pub fn split(rows: &[MeasurementRow], sequential: &str, mode: SplitMode) -> Result<Split> {
    let is_baseline: Vec<bool> = match mode {
        SplitMode::ByStrategy => rows.iter().map(|r| r.strategy == sequential).collect(),
        SplitMode::Positional => {
            let num_tests = unique_in_order(rows.iter().map(|r| r.difficulty.as_str())).len();
            (0..rows.len()).map(|i| i < num_tests).collect()
        }
    };

    let mut baseline = BaselineTable::default();
    let mut parallel = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        if is_baseline[i] {
            baseline.insert(row)?;
        } else {
            parallel.push(i);
        }
    }

    Ok(Split { baseline, parallel })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(strategy: &str, difficulty: &str, threads: i64, avg: f64) -> MeasurementRow {
        MeasurementRow {
            index: 0,
            fields: Vec::new(),
            strategy: strategy.to_string(),
            difficulty: difficulty.to_string(),
            threads,
            trials: vec![avg],
            avg,
            speedup: None,
        }
    }

    fn rows() -> Vec<MeasurementRow> {
        vec![
            row("s", "A", 1, 10.0),
            row("s", "B", 1, 20.0),
            row("p", "A", 2, 5.0),
            row("p", "B", 2, 10.0),
        ]
    }

    #[test]
    fn by_strategy_partitions_on_tag() {
        let split = split(&rows(), "s", SplitMode::ByStrategy).unwrap();
        assert_eq!(split.baseline.len(), 2);
        assert_eq!(split.parallel, vec![2, 3]);
        let a = split.baseline.get("A").unwrap();
        assert_eq!(a.avg, 10.0);
        assert_eq!(a.strategy, "s");
        assert_eq!(a.threads, 1);
    }

    #[test]
    fn positional_matches_by_strategy_on_ordered_input() {
        let rows = rows();
        let positional = split(&rows, "s", SplitMode::Positional).unwrap();
        let tagged = split(&rows, "s", SplitMode::ByStrategy).unwrap();
        assert_eq!(positional, tagged);
    }

    #[test]
    fn positional_trusts_row_order() {
        // The sequential tag is never consulted in positional mode.
        let rows = vec![
            row("x", "A", 1, 1.0),
            row("y", "B", 1, 2.0),
            row("s", "A", 1, 3.0),
        ];
        let split = split(&rows, "s", SplitMode::Positional).unwrap();
        assert_eq!(split.baseline.get("A").unwrap().avg, 1.0);
        assert_eq!(split.parallel, vec![2]);
    }

    #[test]
    fn duplicate_baseline_is_rejected() {
        let mut rows = rows();
        rows.push(row("s", "A", 1, 11.0));
        assert!(matches!(
            split(&rows, "s", SplitMode::ByStrategy),
            Err(ReportError::DuplicateBaseline { .. })
        ));
    }

    #[test]
    fn lookup_missing_is_key_error() {
        let split = split(&rows(), "s", SplitMode::ByStrategy).unwrap();
        assert!(matches!(
            split.baseline.lookup("C", 4),
            Err(ReportError::KeyLookup { row: 4, .. })
        ));
    }
}
