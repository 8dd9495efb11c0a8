use crate::{config, error, run as run_report, Report};

// Re-export common types for easier use
pub use crate::aggregate::{AugmentedTable, MeasurementRow};
pub use crate::baseline::SplitMode;
pub use crate::chart::{ChartConfig, ChartRenderer, PlottersRenderer, SpeedupChart};
pub use config::{ReportConfig, ReportConfigBuilder, SampleCountSource};
pub use error::{ReportError, Result};

/// Convenience function for running the report with the harness defaults.
///
/// Reads `benchmark/output.txt` and writes `benchmark/speedup_<strategy>_graph.png`
/// for every parallel strategy plus `benchmark/speedup.csv`.
///
/// # Example
/// ```no_run
/// use speedup_report::prelude::*;
///
/// let report = default_report().unwrap();
/// println!("{} charts", report.charts.len());
/// ```
pub fn default_report() -> Result<Report> {
    run_report(&ReportConfig::default())
}
