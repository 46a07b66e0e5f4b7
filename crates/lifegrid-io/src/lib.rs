//! Input and output collaborators for lifegrid.
//!
//! - [`load_pattern`] reads a pattern from a text file in a given encoding.
//! - [`HtmlRepresentation`] and [`XmlRepresentation`] accumulate a
//!   document with one section per generation.
//! - [`WrittenOnCompleted`] saves such a document when the evolution ends.
//! - [`PrintToStream`] prints each generation to a writer.
//! - [`ChannelObserver`] forwards the sequence to another thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod channel;
pub mod error;
pub mod html;
pub mod loader;
pub mod print;
pub mod textual;
pub mod written;
pub mod xml;

pub use channel::{channel, ChannelObserver, GenerationEvent};
pub use error::{LoadError, RenderError};
pub use html::HtmlRepresentation;
pub use loader::{decode, load_pattern, load_pattern_utf8, Encoding};
pub use print::PrintToStream;
pub use textual::{read_grid, TextualRepresentation};
pub use written::WrittenOnCompleted;
pub use xml::XmlRepresentation;
