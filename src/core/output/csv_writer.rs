//! CSV output writer.

use std::fs::File;
use std::path::Path;

use crate::core::frequency::WordCount;
use crate::error::{Result, WordstormError};

/// Writes the frequency table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Word`, `Count`
/// - Encoding: UTF-8
pub fn write_csv(table: &[WordCount], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(file);
    write_records(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

/// Converts the frequency table to a CSV string.
pub fn to_csv(table: &[WordCount]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(&mut writer, table)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| WordstormError::utf8("CSV output", e))
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    table: &[WordCount],
) -> Result<()> {
    writer.write_record(["Word", "Count"])?;
    for entry in table {
        writer.write_record([entry.word.as_str(), entry.count.to_string().as_str()])?;
    }
    Ok(())
}
