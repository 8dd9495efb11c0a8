use crate::aggregate::AugmentedTable;
use crate::table::Table;
use prettytable::{row, Table as PrettyTable};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Shortest round-trip text for a derived value; missing and NaN values are
/// written as empty fields.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{v:?}"),
        _ => String::new(),
    }
}

pub fn print_report_table(table: &AugmentedTable) {
    let mut pretty = PrettyTable::new();
    pretty.add_row(row!["Index", "Strategy", "Difficulty", "Threads", "Avg", "Speedup"]);

    for r in &table.rows {
        let speedup = match r.speedup {
            Some(s) => format!("{s:.2}x"),
            None => "-".to_string(),
        };
        pretty.add_row(row![
            r.index,
            r.strategy,
            r.difficulty,
            r.threads,
            format!("{:.3}", r.avg),
            speedup
        ]);
    }

    pretty.printstd();
}

pub fn print_report_table_with_title(title: &str, table: &AugmentedTable) {
    println!("{title}");
    print_report_table(table);
}

/// Generate a harness-shaped table: one sequential row per difficulty first,
/// then every `(strategy, difficulty, threads)` combination, each with five
/// jittered trials.
pub fn generate_benchmark_table(
    strategies: &[&str], // Parallel strategies, sequential is always "s"
    difficulties: &[&str],
    threads: &[i64],
    seed: u64,
) -> Table {
    let mut rng = StdRng::seed_from_u64(seed);
    let columns = ["strategy", "difficulty", "threads", "t1", "t2", "t3", "t4", "t5"]
        .iter()
        .map(|c| c.to_string())
        .collect();

    let mut rows = Vec::new();
    let mut push = |strategy: &str, difficulty: &str, t: i64, base: f64, rng: &mut StdRng| {
        let mut fields = vec![strategy.to_string(), difficulty.to_string(), t.to_string()];
        fields.extend((0..5).map(|_| format!("{:.2}", base * rng.random_range(0.9..1.1))));
        rows.push(fields);
    };

    for (i, difficulty) in difficulties.iter().enumerate() {
        push("s", difficulty, 1, 2f64.powi(i as i32 + 1), &mut rng);
    }
    for strategy in strategies {
        for (i, difficulty) in difficulties.iter().enumerate() {
            for &t in threads {
                let base = 2f64.powi(i as i32 + 1) / (t as f64).sqrt();
                push(strategy, difficulty, t, base, &mut rng);
            }
        }
    }

    Table { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_cases() {
        assert_eq!(format_value(Some(10.0)), "10.0");
        assert_eq!(format_value(Some(2.5)), "2.5");
        assert_eq!(format_value(Some(f64::NAN)), "");
        assert_eq!(format_value(None), "");
    }

    #[test]
    fn generated_table_shape() {
        let table = generate_benchmark_table(&["ws", "bsp"], &["easy", "hard"], &[2, 4, 8], 7);
        assert_eq!(table.columns.len(), 8);
        assert_eq!(table.len(), 2 + 2 * 2 * 3);
        assert!(table.rows[..2].iter().all(|r| r[0] == "s"));
        assert!(table.rows.iter().all(|r| r.len() == 8));
    }

    #[test]
    fn generated_table_is_seeded() {
        let a = generate_benchmark_table(&["ws"], &["easy"], &[2], 42);
        let b = generate_benchmark_table(&["ws"], &["easy"], &[2], 42);
        assert_eq!(a, b);
    }
}
