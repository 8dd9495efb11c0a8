//! Speedup reports for robot pathfinder benchmark runs.
//!
//! The harness writes one row per `(strategy, difficulty, threads)` run with
//! five trial timings. [`run`] averages the trials, divides each parallel
//! average into the sequential baseline for the same difficulty, draws one
//! speedup chart per parallel strategy and exports the augmented table.

use std::path::PathBuf;

#[macro_use]
mod macros;

pub mod aggregate;
pub mod baseline;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod prelude;
pub mod speedup;
pub mod table;
pub mod utils;

use aggregate::{aggregate, AugmentedTable};
use baseline::split;
use chart::{render_reports, ChartRenderer, PlottersRenderer};
use config::ReportConfig;
use error::Result;
use speedup::compute_speedups;
use table::Table;

/// What a pipeline run produced.
#[derive(Debug, Clone)]
pub struct Report {
    pub table: AugmentedTable,
    pub charts: Vec<PathBuf>,
    pub csv: PathBuf,
}

/// Everything up to and including speedups, without touching the output directory.
pub fn analyze(table: &Table, config: &ReportConfig) -> Result<AugmentedTable> {
    let mut augmented = aggregate(table, &config.trial_columns)?;
    print_if!(
        config.verbose,
        "Aggregated {} rows over trial columns {}..{}",
        augmented.len(),
        config.trial_columns.start,
        config.trial_columns.end
    );

    let split = split(
        &augmented.rows,
        &config.sequential_strategy,
        config.split_mode,
    )?;
    print_if!(
        config.verbose,
        "Split ({:?}): {} baselines, {} parallel rows",
        config.split_mode,
        split.baseline.len(),
        split.parallel.len()
    );

    compute_speedups(&mut augmented.rows, &split)?;
    Ok(augmented)
}

/// Run the full pipeline with charts drawn by `renderer`.
pub fn run_with(config: &ReportConfig, renderer: &dyn ChartRenderer) -> Result<Report> {
    let table = Table::load(&config.input)?;
    print_if!(
        config.verbose,
        "Loaded {} rows from {}",
        table.len(),
        config.input.display()
    );

    let augmented = analyze(&table, config)?;
    let charts = render_reports(&augmented, config, renderer)?;

    let csv = config.csv_path();
    export::export(&augmented, &csv)?;
    print_if!(config.verbose, "Wrote {}", csv.display());

    Ok(Report {
        table: augmented,
        charts,
        csv,
    })
}

/// Run the full pipeline, drawing PNG charts with plotters.
pub fn run(config: &ReportConfig) -> Result<Report> {
    run_with(config, &PlottersRenderer::new(&config.chart))
}
