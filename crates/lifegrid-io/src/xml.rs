//! XML rendering.
//!
//! ```text
//! <evolution>
//!     <world generation="1">
//!         <cells>
//!             <cell alive="true" row="0" col="0"/><cell alive="false" row="0" col="1"/>
//!         </cells>
//!     </world>
//! </evolution>
//! ```

use std::fmt::Write as _;

use lifegrid_core::Generation;
use lifegrid_engine::{EvolutionError, Observer, ObserverError};

use crate::textual::{escape, read_grid, TextualRepresentation};

/// Builds an `<evolution>` document with one `<world>` per generation.
#[derive(Clone, Debug)]
pub struct XmlRepresentation {
    xml: String,
    generation: u64,
    closed: bool,
}

impl XmlRepresentation {
    /// An open document with no generation.
    pub fn new() -> Self {
        Self {
            xml: "<evolution>\n".to_string(),
            generation: 0,
            closed: false,
        }
    }

    /// Whether the root element has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn close(&mut self) {
        if !self.closed {
            self.xml.push_str("</evolution>");
            self.closed = true;
        }
    }
}

impl Default for XmlRepresentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for XmlRepresentation {
    fn name(&self) -> &str {
        "xml"
    }

    fn on_next(&mut self, generation: &Generation) -> Result<(), ObserverError> {
        let rows = read_grid(generation)?;
        self.generation += 1;
        let _ = writeln!(self.xml, "    <world generation=\"{}\">", self.generation);
        self.xml.push_str("        <cells>\n");
        for (row, cells) in rows.into_iter().enumerate() {
            self.xml.push_str("            ");
            for (col, alive) in cells.into_iter().enumerate() {
                let _ = write!(
                    self.xml,
                    "<cell alive=\"{alive}\" row=\"{row}\" col=\"{col}\"/>"
                );
            }
            self.xml.push('\n');
        }
        self.xml.push_str("        </cells>\n    </world>\n");
        Ok(())
    }

    fn on_error(&mut self, error: &EvolutionError) {
        let _ = writeln!(
            self.xml,
            "    <error>{}</error>",
            escape(&error.to_string())
        );
        self.close();
    }

    fn on_completed(&mut self) {
        self.close();
    }
}

impl TextualRepresentation for XmlRepresentation {
    fn text(&self) -> &str {
        &self.xml
    }
}
