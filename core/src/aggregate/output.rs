use crate::error::Result;
use crate::types::MetadataTable;
use csv::WriterBuilder;
use std::io::Write;

/// Writes the table as CSV with a header row
pub fn write_csv<W: Write>(table: &MetadataTable, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(table.columns())?;
    for record in table.records() {
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the table as a pretty-printed JSON array of row objects
pub fn write_json<W: Write>(table: &MetadataTable, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, table.rows())?;
    Ok(())
}
