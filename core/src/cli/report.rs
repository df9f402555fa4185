use crate::types::{format_patient_id_padded, MetadataRecord, MetadataTable};
use std::fmt;

/// Text report for a single metadata record
pub struct TextReport<'a> {
    record: &'a MetadataRecord,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(record: &'a MetadataRecord) -> Self {
        Self { record }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DICOM Metadata")?;
        writeln!(f, "==============")?;
        writeln!(f)?;
        write_fields(f, self.record, "")
    }
}

/// Text report for an aggregated table, one block per row
pub struct TableReport<'a> {
    table: &'a MetadataTable,
}

impl<'a> TableReport<'a> {
    /// Creates a new table report
    pub fn new(table: &'a MetadataTable) -> Self {
        Self { table }
    }
}

impl<'a> fmt::Display for TableReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BraTS21 Scan Metadata")?;
        writeln!(f, "=====================")?;
        writeln!(f, "Rows: {}", self.table.len())?;
        writeln!(f)?;

        for row in self.table.rows() {
            writeln!(f, "{} {}", format_patient_id_padded(row.id), row.scan_type)?;
            write_fields(f, &row.metadata, "  ")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, record: &MetadataRecord, indent: &str) -> fmt::Result {
    let width = record.names().map(str::len).max().unwrap_or(0) + 1;
    for (name, value) in record.iter() {
        writeln!(
            f,
            "{}{:<width$} {}",
            indent,
            format!("{}:", name),
            value,
            width = width
        )?;
    }
    Ok(())
}
