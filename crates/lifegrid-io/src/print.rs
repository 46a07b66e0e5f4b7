//! Plain-text printing of each generation.

use std::io::{self, Stderr, Stdout, Write};

use lifegrid_core::Generation;
use lifegrid_engine::{EvolutionError, Observer, ObserverError};

/// Prints every generation as
///
/// ```text
/// Generation 3
/// .o.
/// ..o
/// ooo
///
/// ```
///
/// and errors as `ERROR : <message>` on the error writer.
#[derive(Debug)]
pub struct PrintToStream<W, E> {
    out: W,
    err: E,
    generation: u64,
}

impl PrintToStream<Stdout, Stderr> {
    /// Print to standard output and standard error.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> PrintToStream<W, E> {
    /// Print generations to `out` and errors to `err`.
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            generation: 0,
        }
    }

    /// Number of generations printed.
    pub fn printed(&self) -> u64 {
        self.generation
    }

    /// Give back the writers.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> Observer for PrintToStream<W, E> {
    fn name(&self) -> &str {
        "print"
    }

    fn on_next(&mut self, generation: &Generation) -> Result<(), ObserverError> {
        self.generation += 1;
        write!(self.out, "Generation {}\n{generation}\n\n", self.generation)?;
        self.out.flush()?;
        Ok(())
    }

    fn on_error(&mut self, error: &EvolutionError) {
        if let Err(e) = writeln!(self.err, "ERROR : {error}") {
            log::warn!("cannot print evolution error: {e}");
        }
    }

    fn on_completed(&mut self) {
        if let Err(e) = self.out.flush() {
            log::warn!("cannot flush printed generations: {e}");
        }
    }
}
