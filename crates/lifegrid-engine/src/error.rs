//! Error types for observers and the evolution driver.

use std::error::Error;
use std::fmt;
use std::io;

/// Failure reported by an observer's `on_next`.
#[derive(Debug)]
pub enum ObserverError {
    /// Writing the generation somewhere failed.
    Io(io::Error),
    /// The consumer on the other end of a channel has gone away.
    Disconnected,
    /// The observer refused the generation.
    Rejected {
        /// Why the generation was refused.
        reason: String,
    },
}

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Disconnected => write!(f, "consumer disconnected"),
            Self::Rejected { reason } => write!(f, "generation rejected: {reason}"),
        }
    }
}

impl Error for ObserverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ObserverError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors that end an evolution early.
///
/// Delivered once to every observer's `on_error` and returned to the
/// caller of [`Evolution::run`](crate::Evolution::run).
#[derive(Debug)]
pub enum EvolutionError {
    /// An observer failed while receiving a generation.
    ObserverFailed {
        /// Registration index of the failing observer.
        index: usize,
        /// The failing observer's name.
        name: String,
        /// 1-based number of the generation being delivered.
        generation: u64,
        /// What went wrong.
        source: ObserverError,
    },
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObserverFailed {
                index,
                name,
                generation,
                source,
            } => write!(
                f,
                "observer #{index} '{name}' failed on generation {generation}: {source}"
            ),
        }
    }
}

impl Error for EvolutionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ObserverFailed { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_failure_chains_its_source() {
        let err = EvolutionError::ObserverFailed {
            index: 1,
            name: "xml".into(),
            generation: 3,
            source: ObserverError::Io(io::Error::new(io::ErrorKind::Other, "disk full")),
        };
        assert_eq!(
            err.to_string(),
            "observer #1 'xml' failed on generation 3: I/O error: disk full"
        );
        let source = err.source().unwrap();
        assert!(source.source().is_some());
    }

    #[test]
    fn io_errors_convert() {
        let e: ObserverError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(e, ObserverError::Io(_)));
    }
}
