use crate::domain::CounterEngine;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes point-in-time reports of a tally. There is no reader: reports are
/// not meant to be loaded back into a session.
pub struct ReportExporter;

impl ReportExporter {
    /// Writes the breakdown as CSV and returns the filename on success.
    ///
    /// Columns are `denomination,count,subtotal,percentage`, one row per
    /// denomination in registry order, followed by a `total` row.
    pub fn export_csv(engine: &CounterEngine, filename: &str) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_path(Path::new(filename))?;
        writer.write_record(["denomination", "count", "subtotal", "percentage"])?;

        for row in engine.breakdown() {
            writer.write_record([
                row.denomination.to_string(),
                row.count.to_string(),
                row.subtotal.to_string(),
                format!("{:.2}", row.percentage),
            ])?;
        }

        let total_share = if engine.total() > 0 { "100.00" } else { "0.00" };
        writer.write_record([
            "total".to_string(),
            engine.total_packets().to_string(),
            engine.total().to_string(),
            total_share.to_string(),
        ])?;
        writer.flush()?;

        Ok(filename.to_string())
    }
}
