use crate::aggregate::AugmentedTable;
use crate::error::{ReportError, Result};
use crate::utils::format_value;
use std::fs;
use std::io::Write;
use std::path::Path;

pub const AVG: &str = "avg";
pub const SPEEDUP: &str = "speedup";

/// Serialize the table as CSV: an unnamed row-index column, then the original
/// fields, `avg` and `speedup`.
pub fn write_csv<W: Write>(table: &AugmentedTable, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    let mut header = Vec::with_capacity(table.columns.len() + 3);
    header.push(String::new());
    header.extend(table.columns.iter().cloned());
    header.push(AVG.to_string());
    header.push(SPEEDUP.to_string());
    wtr.write_record(&header)?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(header.len());
        record.push(row.index.to_string());
        record.extend(row.fields.iter().cloned());
        record.push(format_value(Some(row.avg)));
        record.push(format_value(row.speedup));
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| ReportError::Csv(e.into()))?;
    Ok(())
}

/// Write the augmented table to `path`, replacing any existing file.
///
/// The rows go to a sibling temporary file first, so `path` is either left
/// as it was or fully replaced.
pub fn export<P: AsRef<Path>>(table: &AugmentedTable, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;
    }

    let tmp = path.with_extension("csv.tmp");
    let file = fs::File::create(&tmp).map_err(|e| ReportError::io(&tmp, e))?;
    if let Err(e) = write_csv(table, file) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path).map_err(|e| ReportError::io(path, e))
}
