//! Core types for the lifegrid cellular automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other crate in the workspace builds on: grid
//! [`Coordinates`], the [`Rule`] abstraction with its built-in variants,
//! immutable [`Generation`] snapshots with the next-generation transition,
//! and reusable [`Pattern`]s that seed an evolution.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod generation;
pub mod pattern;
pub mod rule;

pub use coord::Coordinates;
pub use error::{GridError, PatternError, RuleParseError};
pub use generation::{Generation, Generations, ALIVE_CHAR, DEAD_CHAR};
pub use pattern::Pattern;
pub use rule::{LifeRule, Rule, RuleRef, Totalistic};
