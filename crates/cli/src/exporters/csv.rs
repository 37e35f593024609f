//! CSV exporter.
//!
//! Responsibilities:
//! - Write a header row of field names followed by one row per record to
//!   the configured destination path.
//!
//! Does NOT handle:
//! - Truncation: values are written in full, in their natural text form.
//!
//! Invariants:
//! - Column order follows the resolved field order, matching the screen
//!   exporter.
//! - On failure nothing further is written; a partial file is not
//!   repaired or removed.

use std::path::Path;

use anyhow::{Context, Result};
use sumo_client::{FieldDescriptor, ResultRow};

use super::value_text;

/// Write rows to `path` as CSV.
pub fn write(path: &Path, fields: &[FieldDescriptor], rows: &[ResultRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;

    writer.write_record(fields.iter().map(|f| f.name.as_str()))?;

    for row in rows {
        let record: Vec<String> = fields
            .iter()
            .map(|f| value_text(row.get(&f.name)))
            .collect();
        writer.write_record(&record)?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
