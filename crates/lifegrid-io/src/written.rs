//! Saving a textual representation once the evolution completes.

use std::io;
use std::path::{Path, PathBuf};

use lifegrid_core::Generation;
use lifegrid_engine::{EvolutionError, Observer, ObserverError};

use crate::textual::TextualRepresentation;

/// Wraps a [`TextualRepresentation`] and writes its text to a file on
/// `on_completed`.
///
/// Every callback is forwarded to the wrapped representation first. A
/// failed write is logged and kept; read it with
/// [`error()`](Self::error) after the evolution returns.
#[derive(Debug)]
pub struct WrittenOnCompleted<T> {
    path: PathBuf,
    inner: T,
    error: Option<io::Error>,
}

impl<T: TextualRepresentation> WrittenOnCompleted<T> {
    /// Save `inner` to `path` when the evolution completes.
    pub fn new(path: impl Into<PathBuf>, inner: T) -> Self {
        Self {
            path: path.into(),
            inner,
            error: None,
        }
    }

    /// Destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The wrapped representation.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// The write failure, if saving failed.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Unwrap, returning the representation and any write failure.
    pub fn into_parts(self) -> (T, Option<io::Error>) {
        (self.inner, self.error)
    }
}

impl<T: TextualRepresentation> Observer for WrittenOnCompleted<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn on_next(&mut self, generation: &Generation) -> Result<(), ObserverError> {
        self.inner.on_next(generation)
    }

    fn on_error(&mut self, error: &EvolutionError) {
        self.inner.on_error(error);
    }

    fn on_completed(&mut self) {
        self.inner.on_completed();
        match self.inner.write_to(&self.path) {
            Ok(()) => log::info!("wrote {}", self.path.display()),
            Err(e) => {
                log::error!("cannot write {}: {e}", self.path.display());
                self.error = Some(e);
            }
        }
    }
}

impl<T: TextualRepresentation> TextualRepresentation for WrittenOnCompleted<T> {
    fn text(&self) -> &str {
        self.inner.text()
    }
}
