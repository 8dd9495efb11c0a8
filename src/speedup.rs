use crate::aggregate::MeasurementRow;
use crate::baseline::Split;
use crate::error::Result;

/// Ratio of the sequential baseline average to a parallel average.
pub fn speedup(baseline_avg: f64, avg: f64) -> f64 {
    baseline_avg / avg
}

/// Fill `speedup` for every parallel row in `split`.
///
/// Baselines are matched on difficulty only. If any parallel row has no
/// baseline the call fails and `rows` is left untouched.
pub fn compute_speedups(rows: &mut [MeasurementRow], split: &Split) -> Result<()> {
    let values = split
        .parallel
        .iter()
        .map(|&i| {
            let row = &rows[i];
            let entry = split.baseline.lookup(&row.difficulty, row.index)?;
            Ok((i, speedup(entry.avg, row.avg)))
        })
        .collect::<Result<Vec<(usize, f64)>>>()?;

    for (i, value) in values {
        rows[i].speedup = Some(value);
    }
    Ok(())
}
