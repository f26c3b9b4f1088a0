//! Plain-text table writer for terminal display.

use std::fmt::Write;

use crate::core::frequency::WordCount;

/// Renders the frequency table as aligned columns.
///
/// ```text
///  #  Word     Count
///  1  pizza        3
///  2  tonight      1
/// ```
pub fn to_text(table: &[WordCount]) -> String {
    let word_width = table
        .iter()
        .map(|w| w.word.chars().count())
        .chain(std::iter::once("Word".len()))
        .max()
        .unwrap_or(4);
    let count_width = table
        .iter()
        .map(|w| w.count.to_string().len())
        .chain(std::iter::once("Count".len()))
        .max()
        .unwrap_or(5);
    let rank_width = table.len().to_string().len().max(1);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>rank_width$}  {:<word_width$}  {:>count_width$}",
        "#", "Word", "Count"
    );
    for (i, entry) in table.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>rank_width$}  {:<word_width$}  {:>count_width$}",
            i + 1,
            entry.word,
            entry.count
        );
    }
    out
}
