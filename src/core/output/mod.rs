//! Frequency table writers.
//!
//! - [`to_text`] - aligned plain-text table (always available)
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of `{word, count}` - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> wordstorm::Result<()> {
//! use wordstorm::core::frequency::word_frequencies;
//! use wordstorm::core::output::{to_text, write_csv, write_json};
//!
//! let table = word_frequencies(&["pizza tonight? pizza!".to_string()]);
//!
//! println!("{}", to_text(&table));
//! write_csv(&table, "top_words.csv")?;
//! write_json(&table, "top_words.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::to_text;
