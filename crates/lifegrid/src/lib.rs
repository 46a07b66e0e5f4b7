//! lifegrid: Conway's Game of Life and its rule variants on a bounded grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all lifegrid sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! let config = EvolutionConfig::default()
//!     .size(6, 6)
//!     .rule(LifeRule::Conway)
//!     .populate_with_pattern(Pattern::glider().centered(6, 6))
//!     .stop(WhenRepeated::new().or(WhenStable::new()).or(WhenEmpty));
//! let last = Evolution::new(config).unwrap().evolve(100).unwrap();
//!
//! // The glider runs into the corner and freezes into a block.
//! assert_eq!(last.map(|g| g.alive_count()), Some(4));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `lifegrid-core` | Coordinates, rules, generations, patterns |
//! | [`engine`] | `lifegrid-engine` | Observers, stop conditions, the evolution driver |
//! | [`io`] | `lifegrid-io` | Pattern files, HTML/XML renderers, stock observers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid model and transition algorithm (`lifegrid-core`).
pub use lifegrid_core as grid;

/// Evolution driver, observers and stop conditions (`lifegrid-engine`).
pub use lifegrid_engine as engine;

/// Pattern loading, renderers and stock observers (`lifegrid-io`).
pub use lifegrid_io as io;

/// Common imports for typical lifegrid usage.
///
/// ```rust
/// use lifegrid::prelude::*;
/// ```
pub mod prelude {
    // Grid model
    pub use lifegrid_core::{Coordinates, Generation, LifeRule, Pattern, Rule, RuleRef, Totalistic};

    // Driver
    pub use lifegrid_engine::{
        when, Evolution, EvolutionConfig, EvolutionReport, Observer, StopCondition, WhenEmpty,
        WhenRepeated, WhenStable,
    };

    // Errors
    pub use lifegrid_core::{GridError, PatternError, RuleParseError};
    pub use lifegrid_engine::{ConfigError, EvolutionError, ObserverError};
    pub use lifegrid_io::{LoadError, RenderError};

    // Collaborators
    pub use lifegrid_io::{
        load_pattern, Encoding, HtmlRepresentation, PrintToStream, TextualRepresentation,
        WrittenOnCompleted, XmlRepresentation,
    };
}
