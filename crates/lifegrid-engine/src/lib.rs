//! Evolution driver for lifegrid.
//!
//! Turns an [`EvolutionConfig`] into an initial generation, pulls
//! successive generations one at a time, and publishes each to every
//! registered [`Observer`] until a generation limit is reached or a
//! [`StopCondition`] fires. Everything runs inline on the caller's
//! thread: one generation is fully delivered before the next is computed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod condition;
pub mod config;
pub mod error;
pub mod evolution;
pub mod observer;

pub use condition::{when, FnCondition, Or, StopCondition, WhenEmpty, WhenRepeated, WhenStable};
pub use config::{ConfigError, EvolutionConfig, Population, DEFAULT_SIZE};
pub use error::{EvolutionError, ObserverError};
pub use evolution::{Evolution, EvolutionReport};
pub use observer::Observer;
