//! HTML rendering: one heading and one table per generation.

use std::fmt::Write as _;

use lifegrid_core::Generation;
use lifegrid_engine::{EvolutionError, Observer, ObserverError};

use crate::textual::{escape, read_grid, TextualRepresentation};

const HEADER: &str = "<html>\n\
<head>\n\
<meta http-equiv='Content-Type' content='text/html; charset=utf-8'>\n\
<title>Game of Life</title>\n\
</head><body style='background:yellow;'>\n\
<center>\n\
<h1 align='center'>Game of Life</h1>\n";

const FOOTER: &str = "</center>\n</body>\n</html>";

const LIVE_CELL: &str = "<td width='20' style='background:red;'>&nbsp;</td>";
const DEAD_CELL: &str = "<td width='20' style='background:white;'>&nbsp;</td>";

/// Builds an HTML page showing every generation as a table of coloured
/// cells. The page is closed on completion, or on error with a note.
#[derive(Clone, Debug)]
pub struct HtmlRepresentation {
    html: String,
    generation: u64,
    closed: bool,
}

impl HtmlRepresentation {
    /// An open page with no generation.
    pub fn new() -> Self {
        Self {
            html: HEADER.to_string(),
            generation: 0,
            closed: false,
        }
    }

    /// Whether the page has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn close(&mut self) {
        if !self.closed {
            self.html.push_str(FOOTER);
            self.closed = true;
        }
    }
}

impl Default for HtmlRepresentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for HtmlRepresentation {
    fn name(&self) -> &str {
        "html"
    }

    fn on_next(&mut self, generation: &Generation) -> Result<(), ObserverError> {
        let rows = read_grid(generation)?;
        self.generation += 1;
        let _ = writeln!(self.html, "<h2>Generation {}</h2>", self.generation);
        self.html
            .push_str("<table border='1' style='color:white;border-collapse:collapse'>\n");
        for row in rows {
            self.html.push_str("    <tr>\n        ");
            for alive in row {
                self.html.push_str(if alive { LIVE_CELL } else { DEAD_CELL });
            }
            self.html.push_str("\n    </tr>\n");
        }
        self.html.push_str("</table>\n");
        Ok(())
    }

    fn on_error(&mut self, error: &EvolutionError) {
        let _ = writeln!(
            self.html,
            "<p style='color:red;'>evolution failed: {}</p>",
            escape(&error.to_string())
        );
        self.close();
    }

    fn on_completed(&mut self) {
        self.close();
    }
}

impl TextualRepresentation for HtmlRepresentation {
    fn text(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::{Coordinates, LifeRule};

    #[test]
    fn renders_a_table_per_generation() {
        let g = Generation::new([Coordinates::new(0, 0)], 2, 1, LifeRule::Conway);
        let mut html = HtmlRepresentation::new();
        html.on_next(&g).unwrap();
        html.on_next(&g).unwrap();
        html.on_completed();

        let text = html.text();
        assert!(text.starts_with("<html>\n"));
        assert!(text.ends_with("</center>\n</body>\n</html>"));
        assert!(text.contains("<h2>Generation 1</h2>\n"));
        assert!(text.contains("<h2>Generation 2</h2>\n"));
        assert_eq!(text.matches("<table").count(), 2);
        let row = format!("    <tr>\n        {LIVE_CELL}{DEAD_CELL}\n    </tr>\n");
        assert_eq!(text.matches(row.as_str()).count(), 2);
    }

    #[test]
    fn completing_twice_closes_once() {
        let mut html = HtmlRepresentation::new();
        html.on_completed();
        html.on_completed();
        assert!(html.is_closed());
        assert_eq!(html.text().matches("</html>").count(), 1);
    }
}
