/// Conditionally print a formatted message to stdout.
///
/// Evaluates `$cond` at runtime; if `true`, calls [`println!`] with the
/// remaining arguments unchanged. The pipeline passes `config.verbose`, which
/// defaults to the `verbose` cargo feature.
///
/// # Example
///
/// ```rust
/// use speedup_report::print_if;
///
/// let verbose = true;
/// print_if!(verbose, "{} rows loaded from {}", 42, "benchmark/output.txt");
/// ```
#[macro_export]
macro_rules! print_if {
    ($cond:expr, $($arg:tt)*) => {
        if $cond {
            println!($($arg)*);
        }
    };
}
