//! Loading chat exports from disk.
//!
//! Two input shapes are accepted:
//!
//! - a plain `.txt` export, read as UTF-8
//! - a `.zip` archive (as produced by "Export chat" on phones); the first
//!   entry whose name ends with `.txt`, in archive order, is used
//!
//! Undecodable bytes are reported as [`WordstormError::Utf8`]. Lines break on
//! every Unicode line boundary, not only `\n` and `\r\n` (see
//! [`split_lines`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use wordstorm::input::read_input;
//!
//! let lines = read_input("WhatsApp Chat with Alice.zip")?;
//! println!("{} lines", lines.len());
//! # Ok::<(), wordstorm::WordstormError>(())
//! ```

use std::fs;
use std::path::Path;

#[cfg(feature = "archive")]
use std::io::{Read, Seek};

use tracing::info;

use crate::error::{Result, WordstormError};

/// Kind of input file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Plain text export
    Text,
    /// ZIP archive containing a text export
    Archive,
}

impl InputKind {
    /// Detects the kind from a path; `.zip` (any case) is an archive,
    /// everything else is read as text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("zip") => InputKind::Archive,
            _ => InputKind::Text,
        }
    }
}

/// Reads the raw lines of a `.txt` or `.zip` chat export.
pub fn read_input(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    match InputKind::from_path(path) {
        InputKind::Text => {
            let bytes = fs::read(path)?;
            info!(path = %path.display(), bytes = bytes.len(), "read text export");
            lines_from_bytes(bytes, &path.display().to_string())
        }
        InputKind::Archive => read_archive(path),
    }
}

#[cfg(feature = "archive")]
fn read_archive(path: &Path) -> Result<Vec<String>> {
    let file = fs::File::open(path)?;
    lines_from_archive(std::io::BufReader::new(file)).map_err(|err| match err {
        WordstormError::NoTextInArchive { path: None } => {
            WordstormError::no_text_in_archive(Some(path.to_path_buf()))
        }
        other => other,
    })
}

#[cfg(not(feature = "archive"))]
fn read_archive(path: &Path) -> Result<Vec<String>> {
    Err(WordstormError::unsupported_input(
        path,
        "ZIP support requires the 'archive' feature",
    ))
}

/// Reads the first `.txt` entry of a ZIP archive and splits it into lines.
///
/// Entry names are matched case-sensitively against the `.txt` suffix.
#[cfg(feature = "archive")]
pub fn lines_from_archive<R: Read + Seek>(reader: R) -> Result<Vec<String>> {
    let mut archive = zip::ZipArchive::new(reader)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if !entry.is_file() || !entry.name().ends_with(".txt") {
            continue;
        }

        let name = entry.name().to_string();
        let mut bytes = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
        entry.read_to_end(&mut bytes)?;
        info!(entry = %name, bytes = bytes.len(), "read text export from archive");
        return lines_from_bytes(bytes, &name);
    }

    tracing::debug!(entries = archive.len(), "archive has no .txt entry");
    Err(WordstormError::no_text_in_archive(None))
}

/// Decodes UTF-8 bytes and splits them into lines.
///
/// `context` names the source in the error message.
pub fn lines_from_bytes(bytes: Vec<u8>, context: &str) -> Result<Vec<String>> {
    let text = String::from_utf8(bytes).map_err(|e| WordstormError::utf8(context, e))?;
    Ok(split_lines(&text))
}

/// Returns `true` for characters that end a line.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits `text` at line boundaries.
///
/// Besides `\n` this breaks on a lone `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators. `\r\n` counts as one boundary, and a trailing terminator does
/// not produce an empty last line.
///
/// ```
/// use wordstorm::input::split_lines;
///
/// assert_eq!(split_lines("a\rb\r\nc\u{2028}d\n"), vec!["a", "b", "c", "d"]);
/// assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(text[start..i].to_owned());
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(text[start..].to_owned());
    }
    lines
}
