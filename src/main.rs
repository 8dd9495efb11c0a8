use speedup_report::{config::ReportConfig, print_if, run, utils::print_report_table_with_title};

fn main() {
    let config = ReportConfig::default();

    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("speedup-report: {e}");
            std::process::exit(1);
        }
    };

    if config.verbose {
        print_report_table_with_title("Speedup", &report.table);
    }
    print_if!(
        config.verbose,
        "{} chart(s), table at {}",
        report.charts.len(),
        report.csv.display()
    );
}
