use crate::aggregate::{mean, AugmentedTable};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use hsl::HSL;
use indicatif::{ProgressBar, ProgressStyle};
use plotters::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The default caption; the strategy is appended in parentheses
const CAPTION: &str = "Robot Pathfinder Speedup";

const X_DESC: &str = "Threads";
const Y_DESC: &str = "Speedup";
const LEGEND_TITLE: &str = "Maze Difficulty";

/// Configuration structure for the chart, including caption, axis labels, width, and height
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub caption: String,
    pub x_desc: String,
    pub y_desc: String,
    pub legend_title: String,
    pub width: u32,
    pub height: u32,
}

impl ChartConfig {
    /// Builder pattern for configuring the chart
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::default()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig::builder().build()
    }
}

/// Builder pattern for `ChartConfig` struct to allow flexible configuration
#[derive(Debug, Default)]
pub struct ChartConfigBuilder {
    caption: Option<String>,
    x_desc: Option<String>,
    y_desc: Option<String>,
    legend_title: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

impl ChartConfigBuilder {
    /// Set the caption prefix for the chart
    pub fn caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    pub fn x_desc(mut self, x_desc: &str) -> Self {
        self.x_desc = Some(x_desc.to_string());
        self
    }

    pub fn y_desc(mut self, y_desc: &str) -> Self {
        self.y_desc = Some(y_desc.to_string());
        self
    }

    pub fn legend_title(mut self, legend_title: &str) -> Self {
        self.legend_title = Some(legend_title.to_string());
        self
    }

    /// Set the width of the chart
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height of the chart
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Build and return the final `ChartConfig`
    pub fn build(self) -> ChartConfig {
        ChartConfig {
            caption: self.caption.unwrap_or_else(|| CAPTION.to_string()),
            x_desc: self.x_desc.unwrap_or_else(|| X_DESC.to_string()),
            y_desc: self.y_desc.unwrap_or_else(|| Y_DESC.to_string()),
            legend_title: self.legend_title.unwrap_or_else(|| LEGEND_TITLE.to_string()),
            width: self.width.unwrap_or(800),
            height: self.height.unwrap_or(600),
        }
    }
}

/// Number of samples drawn for each maze difficulty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleCounts(HashMap<String, u64>);

impl SampleCounts {
    pub fn from_pairs<I: IntoIterator<Item = (String, u64)>>(pairs: I) -> Self {
        SampleCounts(pairs.into_iter().collect())
    }

    pub fn get(&self, difficulty: &str) -> Option<u64> {
        self.0.get(difficulty).copied()
    }
}

/// `"<difficulty> (<n> samples)"`, or the bare difficulty when `n` is unknown.
pub fn legend_label(difficulty: &str, samples: Option<u64>) -> String {
    match samples {
        Some(n) => format!("{difficulty} ({n} samples)"),
        None => difficulty.to_string(),
    }
}

/// One line of a speedup chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub difficulty: String,
    pub label: String,
    /// `(threads, speedup)` sorted by threads.
    pub points: Vec<(i64, f64)>,
}

/// What a speedup chart shows, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupChart {
    pub strategy: String,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub legend_title: String,
    pub series: Vec<Series>,
}

impl SpeedupChart {
    fn points(&self) -> impl Iterator<Item = &(i64, f64)> {
        self.series.iter().flat_map(|s| s.points.iter())
    }

    /// Threads range, padded when every point shares one thread count.
    pub fn x_range(&self) -> (f64, f64) {
        let min = self.points().map(|p| p.0).min().unwrap_or(1) as f64;
        let max = self.points().map(|p| p.0).max().unwrap_or(1) as f64;
        if max > min {
            (min, max)
        } else {
            (min - 1.0, max + 1.0)
        }
    }

    /// Upper bound of the speedup axis with headroom for the legend.
    pub fn y_max(&self) -> f64 {
        let max = self.points().map(|p| p.1).fold(1.0_f64, f64::max);
        max * 1.15
    }
}

/// Non-sequential strategies in the order they first appear.
pub fn chart_strategies(table: &AugmentedTable, sequential: &str) -> Vec<String> {
    table
        .strategies()
        .into_iter()
        .filter(|s| s != sequential)
        .collect()
}

/// Build the chart for `strategy`: one series per difficulty, in first-seen
/// order, with repeated thread counts averaged into a single point.
pub fn build_chart(
    table: &AugmentedTable,
    strategy: &str,
    samples: &SampleCounts,
    config: &ChartConfig,
) -> SpeedupChart {
    let mut series = Vec::new();

    for difficulty in table.difficulties() {
        let rows: Vec<_> = table
            .rows
            .iter()
            .filter(|r| r.strategy == strategy && r.difficulty == difficulty)
            .collect();
        if rows.is_empty() {
            continue;
        }

        let mut by_threads: Vec<(i64, Vec<f64>)> = Vec::new();
        for row in rows {
            let Some(speedup) = row.speedup.filter(|s| s.is_finite()) else {
                continue;
            };
            match by_threads.iter_mut().find(|(t, _)| *t == row.threads) {
                Some((_, values)) => values.push(speedup),
                None => by_threads.push((row.threads, vec![speedup])),
            }
        }
        by_threads.sort_by_key(|(t, _)| *t);

        series.push(Series {
            label: legend_label(&difficulty, samples.get(&difficulty)),
            difficulty,
            points: by_threads
                .into_iter()
                .map(|(t, values)| (t, mean(&values)))
                .collect(),
        });
    }

    SpeedupChart {
        strategy: strategy.to_string(),
        title: format!("{} ({strategy})", config.caption),
        x_desc: config.x_desc.clone(),
        y_desc: config.y_desc.clone(),
        legend_title: config.legend_title.clone(),
        series,
    }
}

/// Draws a [`SpeedupChart`] to an image file.
pub trait ChartRenderer {
    fn render(&self, chart: &SpeedupChart, path: &Path) -> Result<()>;
}

/// PNG output through the plotters bitmap backend.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    pub width: u32,
    pub height: u32,
}

impl PlottersRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        PlottersRenderer {
            width: config.width,
            height: config.height,
        }
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, chart: &SpeedupChart, path: &Path) -> Result<()> {
        plot_speedup(chart, path, (self.width, self.height)).map_err(|e| ReportError::Chart {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Evenly spaced hues, keeping saturation and lightness constant
fn series_color(index: usize, count: usize) -> RGBColor {
    let hue = index as f64 * 360.0 / count.max(1) as f64;
    let (r, g, b) = HSL {
        h: hue,
        s: 0.7,
        l: 0.45,
    }
    .to_rgb();
    RGBColor(r, g, b)
}

/// Plot speedup against threads, one line per difficulty, and save it to `path`
fn plot_speedup(
    chart: &SpeedupChart,
    path: &Path,
    size: (u32, u32),
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = chart.x_range();
    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 26))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(x_min..x_max, 0.0..chart.y_max())?;

    // Light grid, no minor lines
    ctx.configure_mesh()
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .x_label_formatter(&|x: &f64| format!("{x:.0}"))
        .bold_line_style(BLACK.mix(0.1))
        .light_line_style(WHITE)
        .draw()?;

    // Title row of the legend
    ctx.draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?
        .label(chart.legend_title.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y)], WHITE));

    let count = chart.series.len();
    for (i, series) in chart.series.iter().enumerate() {
        let color = series_color(i, count);
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .map(|&(t, s)| (t as f64, s))
            .collect();

        ctx.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        ctx.draw_series(points.into_iter().map(|p| Circle::new(p, 3, color.filled())))?;
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 13))
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.3))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render one chart per non-sequential strategy into the report directory.
///
/// Each chart is written independently; a failure stops the loop and leaves
/// the charts already written in place.
pub fn render_reports(
    table: &AugmentedTable,
    config: &ReportConfig,
    renderer: &dyn ChartRenderer,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.report_dir).map_err(|e| ReportError::io(&config.report_dir, e))?;

    let samples = config.sample_counts.resolve(&table.difficulties());
    let strategies = chart_strategies(table, &config.sequential_strategy);

    let pb = match config.verbose {
        true => {
            let pb = ProgressBar::new(strategies.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40} | {msg}")
                    .unwrap()
                    .progress_chars("=>-"),
            );
            Some(pb)
        }
        false => None,
    };

    let mut written = Vec::with_capacity(strategies.len());
    for strategy in &strategies {
        let chart = build_chart(table, strategy, &samples, &config.chart);
        let path = config.chart_path(strategy);

        if let Some(pb) = &pb {
            pb.set_message(format!("Rendering {}", path.display()));
        }
        renderer.render(&chart, &path)?;
        written.push(path);

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message(format!("{} chart(s) written", written.len()));
    }
    print_if!(
        config.verbose,
        "Charts: {}",
        written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(written)
}
