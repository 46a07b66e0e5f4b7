//! Observers that build a text document out of the generations they see.

use std::fs;
use std::io;
use std::path::Path;

use lifegrid_core::{Generation, ALIVE_CHAR};
use lifegrid_engine::Observer;

use crate::error::RenderError;

/// An observer accumulating a document that can be saved to a file.
pub trait TextualRepresentation: Observer {
    /// The document built so far.
    fn text(&self) -> &str;

    /// Save the document to `path`, replacing any existing file.
    fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.text())
    }
}

/// Read a generation's cells back from its textual form, row by row.
///
/// Walks the text with the `row * width + col` index, skipping line
/// breaks as it meets them. Fails if the text holds fewer cells than the
/// generation's size.
pub fn read_grid(generation: &Generation) -> Result<Vec<Vec<bool>>, RenderError> {
    let text = generation.to_string();
    let mut chars = text.chars().filter(|&c| c != '\n' && c != '\r');
    let mut rows = Vec::with_capacity(generation.height() as usize);
    for row in 0..generation.height() {
        let mut cells = Vec::with_capacity(generation.width() as usize);
        for col in 0..generation.width() {
            let ch = chars.next().ok_or(RenderError::MalformedGrid { row, col })?;
            cells.push(ch == ALIVE_CHAR);
        }
        rows.push(cells);
    }
    Ok(rows)
}

/// Escape the five XML special characters.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
