use crate::baseline::SplitMode;
use crate::chart::{ChartConfig, SampleCounts};
use std::ops::Range;
use std::path::PathBuf;

/// The table written by the benchmark harness.
const INPUT: &str = "benchmark/output.txt";

/// Directory receiving the charts and the augmented table.
const REPORT_DIR: &str = "benchmark";

const CSV_NAME: &str = "speedup.csv";

/// Strategy tag the harness uses for sequential runs.
const SEQUENTIAL: &str = "s";

/// Trial columns follow `strategy difficulty threads`.
const TRIAL_COLUMNS: Range<usize> = 3..8;

/// Samples drawn per maze difficulty, easiest first.
pub const DEFAULT_SAMPLE_COUNTS: [u64; 4] = [4000, 8000, 16000, 32000];

/// Where the legend's per-difficulty sample counts come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleCountSource {
    /// Assigned to difficulties in the order they first appear in the table.
    InOrder(Vec<u64>),
    /// An explicit difficulty → sample count mapping.
    Explicit(Vec<(String, u64)>),
}

impl Default for SampleCountSource {
    fn default() -> Self {
        SampleCountSource::InOrder(DEFAULT_SAMPLE_COUNTS.to_vec())
    }
}

impl SampleCountSource {
    /// Resolve into a lookup given the difficulties in first-seen order.
    pub fn resolve(&self, difficulties: &[String]) -> SampleCounts {
        match self {
            SampleCountSource::InOrder(counts) => SampleCounts::from_pairs(
                difficulties.iter().cloned().zip(counts.iter().copied()),
            ),
            SampleCountSource::Explicit(pairs) => SampleCounts::from_pairs(pairs.iter().cloned()),
        }
    }
}

/// Settings for one run of the report pipeline.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Whitespace-delimited table produced by the harness.
    pub input: PathBuf,
    /// Directory for `speedup_<strategy>_graph.png` and the CSV export.
    pub report_dir: PathBuf,
    /// File name of the CSV export inside `report_dir`.
    pub csv_name: String,
    /// Strategy value denoting sequential runs.
    pub sequential_strategy: String,
    /// Zero-based, contiguous positions of the repeated-trial columns.
    pub trial_columns: Range<usize>,
    pub split_mode: SplitMode,
    pub sample_counts: SampleCountSource,
    pub chart: ChartConfig,
    /// Print progress and a summary table to stdout.
    pub verbose: bool,
}

impl ReportConfig {
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    pub fn csv_path(&self) -> PathBuf {
        self.report_dir.join(&self.csv_name)
    }

    /// `<report_dir>/speedup_<strategy>_graph.png`
    pub fn chart_path(&self, strategy: &str) -> PathBuf {
        self.report_dir.join(format!("speedup_{strategy}_graph.png"))
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig::builder().build()
    }
}

/// Builder for [`ReportConfig`]; unset fields take the harness defaults.
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    input: Option<PathBuf>,
    report_dir: Option<PathBuf>,
    csv_name: Option<String>,
    sequential_strategy: Option<String>,
    trial_columns: Option<Range<usize>>,
    split_mode: Option<SplitMode>,
    sample_counts: Option<SampleCountSource>,
    chart: Option<ChartConfig>,
    verbose: Option<bool>,
}

impl ReportConfigBuilder {
    pub fn input<P: Into<PathBuf>>(mut self, input: P) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn report_dir<P: Into<PathBuf>>(mut self, report_dir: P) -> Self {
        self.report_dir = Some(report_dir.into());
        self
    }

    pub fn csv_name(mut self, csv_name: &str) -> Self {
        self.csv_name = Some(csv_name.to_string());
        self
    }

    pub fn sequential_strategy(mut self, strategy: &str) -> Self {
        self.sequential_strategy = Some(strategy.to_string());
        self
    }

    pub fn trial_columns(mut self, trial_columns: Range<usize>) -> Self {
        self.trial_columns = Some(trial_columns);
        self
    }

    pub fn split_mode(mut self, split_mode: SplitMode) -> Self {
        self.split_mode = Some(split_mode);
        self
    }

    pub fn sample_counts(mut self, sample_counts: SampleCountSource) -> Self {
        self.sample_counts = Some(sample_counts);
        self
    }

    pub fn chart(mut self, chart: ChartConfig) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn build(self) -> ReportConfig {
        ReportConfig {
            input: self.input.unwrap_or_else(|| PathBuf::from(INPUT)),
            report_dir: self.report_dir.unwrap_or_else(|| PathBuf::from(REPORT_DIR)),
            csv_name: self.csv_name.unwrap_or_else(|| CSV_NAME.to_string()),
            sequential_strategy: self
                .sequential_strategy
                .unwrap_or_else(|| SEQUENTIAL.to_string()),
            trial_columns: self.trial_columns.unwrap_or(TRIAL_COLUMNS),
            split_mode: self.split_mode.unwrap_or_default(),
            sample_counts: self.sample_counts.unwrap_or_default(),
            chart: self.chart.unwrap_or_default(),
            verbose: self.verbose.unwrap_or(cfg!(feature = "verbose")),
        }
    }
}
