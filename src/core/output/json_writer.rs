//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::frequency::WordCount;
use crate::error::Result;

/// Writes the frequency table to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"word": "pizza", "count": 3},
///   {"word": "tonight", "count": 1}
/// ]
/// ```
pub fn write_json(table: &[WordCount], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(table)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the frequency table to a pretty-printed JSON string.
pub fn to_json(table: &[WordCount]) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}
