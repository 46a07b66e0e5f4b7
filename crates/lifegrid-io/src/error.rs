//! Error types for loading and rendering.

use std::error::Error;
use std::fmt;
use std::io;

use lifegrid_engine::ObserverError;

use crate::loader::Encoding;

/// Errors from [`load_pattern`](crate::load_pattern) and from parsing an
/// [`Encoding`] label.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The bytes are not valid in the requested encoding.
    Decode {
        /// The requested encoding.
        encoding: Encoding,
        /// Byte offset of the first invalid sequence.
        position: usize,
    },
    /// The encoding label names no supported encoding.
    UnknownEncoding {
        /// The label as given.
        label: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read pattern: {e}"),
            Self::Decode { encoding, position } => {
                write!(f, "invalid {encoding} at byte {position}")
            }
            Self::UnknownEncoding { label } => write!(f, "unsupported encoding '{label}'"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Decode { .. } | Self::UnknownEncoding { .. } => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors from turning a generation's text into cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The text ran out before the cell at `(row, col)`.
    MalformedGrid {
        /// Row of the missing cell.
        row: u32,
        /// Column of the missing cell.
        col: u32,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGrid { row, col } => write!(
                f,
                "generation text does not match its size: no cell at row {row}, col {col}"
            ),
        }
    }
}

impl Error for RenderError {}

impl From<RenderError> for ObserverError {
    fn from(e: RenderError) -> Self {
        ObserverError::Rejected {
            reason: e.to_string(),
        }
    }
}
