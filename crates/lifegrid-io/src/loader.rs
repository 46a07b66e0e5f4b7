//! Pattern files.
//!
//! A pattern file is a textual grid: one row per line, one cell per
//! character, the live character marking live cells. The caller picks
//! both the live character and the file's text encoding.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use lifegrid_core::Pattern;

use crate::error::LoadError;

/// Text encodings accepted by [`load_pattern`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// UTF-8. Invalid sequences are an error.
    #[default]
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
}

impl Encoding {
    /// Canonical label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, LoadError> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "iso-8859-1" | "latin1" | "latin-1" => Ok(Self::Latin1),
            _ => Err(LoadError::UnknownEncoding {
                label: s.to_string(),
            }),
        }
    }
}

/// Decode raw bytes as text.
pub fn decode(bytes: Vec<u8>, encoding: Encoding) -> Result<String, LoadError> {
    match encoding {
        Encoding::Utf8 => String::from_utf8(bytes).map_err(|e| LoadError::Decode {
            encoding,
            position: e.utf8_error().valid_up_to(),
        }),
        Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
    }
}

/// Load a pattern from `path`.
///
/// The pattern is named after the file stem.
pub fn load_pattern(
    path: impl AsRef<Path>,
    live: char,
    encoding: Encoding,
) -> Result<Pattern, LoadError> {
    let path = path.as_ref();
    let text = decode(fs::read(path)?, encoding)?;
    let pattern = Pattern::parse(&text, live);
    log::debug!(
        "loaded pattern from {}: {}x{}, {} live",
        path.display(),
        pattern.width(),
        pattern.height(),
        pattern.len()
    );
    Ok(match path.file_stem() {
        Some(stem) => pattern.named(stem.to_string_lossy()),
        None => pattern,
    })
}

/// [`load_pattern`] for UTF-8 files.
pub fn load_pattern_utf8(path: impl AsRef<Path>, live: char) -> Result<Pattern, LoadError> {
    load_pattern(path, live, Encoding::Utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_maps_bytes_to_code_points() {
        let text = decode(vec![b'o', 0xE9, b'\n', b'.'], Encoding::Latin1).unwrap();
        assert_eq!(text, "o\u{e9}\n.");
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let err = decode(vec![b'.', b'o', 0xFF, b'o'], Encoding::Utf8).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Decode {
                encoding: Encoding::Utf8,
                position: 2
            }
        ));
        assert_eq!(err.to_string(), "invalid UTF-8 at byte 2");
    }

    #[test]
    fn encoding_labels_parse() {
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("utf8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("ISO_8859_1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("latin1".parse::<Encoding>().unwrap(), Encoding::Latin1);
    }

    #[test]
    fn unknown_encoding_label_is_a_load_error() {
        let err = "EBCDIC".parse::<Encoding>().unwrap_err();
        assert!(matches!(&err, LoadError::UnknownEncoding { label } if label == "EBCDIC"));
        assert_eq!(err.to_string(), "unsupported encoding 'EBCDIC'");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_pattern_utf8("/definitely/not/here.txt", 'o').unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
