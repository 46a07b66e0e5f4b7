//! Evolution configuration, resolution, and error types.
//!
//! [`EvolutionConfig`] is the input record for an evolution. It is
//! consumed once by [`Evolution::new`](crate::Evolution::new), which
//! resolves the grid size and builds the first generation.

use std::error::Error;
use std::fmt;

use lifegrid_core::{Coordinates, Generation, GridError, Pattern, RuleRef};

use crate::condition::StopCondition;
use crate::observer::Observer;

/// Width and height used when neither an explicit size nor a pattern
/// supplies one.
pub const DEFAULT_SIZE: u32 = 5;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while resolving an [`EvolutionConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The initial population does not fit the resolved grid.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "initial population: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── Population ─────────────────────────────────────────────────────

/// Where the first generation's live cells come from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Population {
    /// No live cell.
    #[default]
    Empty,
    /// An explicit cell list.
    Cells(Vec<Coordinates>),
    /// A pattern; its size also feeds the grid size resolution.
    Pattern(Pattern),
}

impl Population {
    fn cells(&self) -> Vec<Coordinates> {
        match self {
            Self::Empty => Vec::new(),
            Self::Cells(cells) => cells.clone(),
            Self::Pattern(pattern) => pattern.cells().iter().copied().collect(),
        }
    }
}

// ── EvolutionConfig ────────────────────────────────────────────────

/// Complete configuration for one evolution.
///
/// The default is an empty 5x5 Conway grid with no stop condition and no
/// observer. Fields are public; the consuming helpers below are
/// shorthands for setting them.
///
/// ```
/// use lifegrid_core::{LifeRule, Pattern};
/// use lifegrid_engine::{EvolutionConfig, StopCondition, WhenEmpty, WhenStable};
///
/// let config = EvolutionConfig::default()
///     .size(20, 20)
///     .rule(LifeRule::HighLife)
///     .populate_with_pattern(Pattern::glider())
///     .stop(WhenStable::new().or(WhenEmpty));
/// assert_eq!(config.resolved_size(), (20, 20));
/// ```
pub struct EvolutionConfig<'o> {
    /// Explicit grid width, if set.
    pub width: Option<u32>,
    /// Explicit grid height, if set.
    pub height: Option<u32>,
    /// Initial live cells.
    pub population: Population,
    /// Rule applied at every step.
    pub rule: RuleRef,
    /// Early-termination predicate. `None` never stops.
    pub stop: Option<Box<dyn StopCondition + 'o>>,
    /// Observers, notified in this order.
    pub observers: Vec<Box<dyn Observer + 'o>>,
}

impl Default for EvolutionConfig<'_> {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            population: Population::Empty,
            rule: RuleRef::default(),
            stop: None,
            observers: Vec::new(),
        }
    }
}

impl<'o> EvolutionConfig<'o> {
    /// Set both dimensions.
    pub fn size(self, width: u32, height: u32) -> Self {
        self.width(width).height(height)
    }

    /// Set the grid width.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the grid height.
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the rule.
    pub fn rule(mut self, rule: impl Into<RuleRef>) -> Self {
        self.rule = rule.into();
        self
    }

    /// Start from an explicit cell list.
    pub fn populate_with_cells(mut self, cells: impl IntoIterator<Item = Coordinates>) -> Self {
        self.population = Population::Cells(cells.into_iter().collect());
        self
    }

    /// Start from a pattern.
    pub fn populate_with_pattern(mut self, pattern: Pattern) -> Self {
        self.population = Population::Pattern(pattern);
        self
    }

    /// Register an observer after those already registered.
    pub fn observe(mut self, observer: impl Observer + 'o) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Set the stop condition, replacing any previous one.
    pub fn stop(mut self, condition: impl StopCondition + 'o) -> Self {
        self.stop = Some(Box::new(condition));
        self
    }

    /// The grid size the first generation will use.
    ///
    /// With a pattern, each explicit dimension is raised to at least the
    /// pattern's own; an unset dimension takes the pattern's. Otherwise
    /// an unset dimension is [`DEFAULT_SIZE`].
    pub fn resolved_size(&self) -> (u32, u32) {
        match &self.population {
            Population::Pattern(p) => (
                self.width.map_or(p.width(), |w| w.max(p.width())),
                self.height.map_or(p.height(), |h| h.max(p.height())),
            ),
            Population::Empty | Population::Cells(_) => (
                self.width.unwrap_or(DEFAULT_SIZE),
                self.height.unwrap_or(DEFAULT_SIZE),
            ),
        }
    }

    /// Build the first generation, rejecting live cells that fall
    /// outside the resolved grid.
    pub fn initial_generation(&self) -> Result<Generation, ConfigError> {
        let (width, height) = self.resolved_size();
        let generation =
            Generation::try_new(self.population.cells(), width, height, self.rule.clone())?;
        Ok(generation)
    }

    /// Check the configuration without building anything else.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_generation().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::LifeRule;

    #[test]
    fn defaults_to_empty_five_by_five_conway() {
        let config = EvolutionConfig::default();
        assert_eq!(config.resolved_size(), (5, 5));
        let g = config.initial_generation().unwrap();
        assert!(g.is_empty());
        assert_eq!(g.rule().as_builtin(), Some(LifeRule::Conway));
    }

    #[test]
    fn pattern_size_applies_when_unset() {
        let config = EvolutionConfig::default().populate_with_pattern(Pattern::glider());
        assert_eq!(config.resolved_size(), (5, 4));
    }

    #[test]
    fn explicit_size_is_raised_to_pattern_size() {
        let config = EvolutionConfig::default()
            .size(3, 10)
            .populate_with_pattern(Pattern::glider());
        assert_eq!(config.resolved_size(), (5, 10));
    }

    #[test]
    fn one_explicit_dimension() {
        let config = EvolutionConfig::default()
            .width(8)
            .populate_with_pattern(Pattern::toad());
        assert_eq!(config.resolved_size(), (8, 4));
        let config = EvolutionConfig::default().height(2);
        assert_eq!(config.resolved_size(), (5, 2));
    }

    #[test]
    fn out_of_bounds_cells_are_rejected() {
        let config = EvolutionConfig::default().populate_with_cells([Coordinates::new(5, 0)]);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Grid(GridError::CellOutOfBounds {
                cell: Coordinates::new(5, 0),
                width: 5,
                height: 5,
            })
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn later_population_replaces_earlier() {
        let config = EvolutionConfig::default()
            .populate_with_pattern(Pattern::glider())
            .populate_with_cells([Coordinates::new(1, 1)]);
        assert_eq!(config.resolved_size(), (5, 5));
        assert_eq!(config.initial_generation().unwrap().alive_count(), 1);
    }
}
