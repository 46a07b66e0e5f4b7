//! The evolution driver.
//!
//! [`Evolution`] owns the first generation, the stop condition and the
//! observers resolved from an [`EvolutionConfig`]. Running it pulls
//! generations from [`Generation::successors`] one at a time:
//!
//! 1. stop if the generation limit is reached;
//! 2. deliver the generation to every observer, in registration order;
//! 3. ask the stop condition, and stop *after* delivery if it fires.
//!
//! On normal termination every observer gets `on_completed`. If an
//! observer fails, no further generation is computed, every observer gets
//! `on_error`, and the error is returned.
//!
//! An `Evolution` is consumed by running it. Stop-condition state and
//! observers therefore never leak from one run into another.

use lifegrid_core::Generation;

use crate::condition::StopCondition;
use crate::config::{ConfigError, EvolutionConfig};
use crate::error::EvolutionError;
use crate::observer::Observer;

// ── EvolutionReport ─────────────────────────────────────────────

/// Outcome of a completed [`Evolution::run`].
#[derive(Clone, Debug, Default)]
pub struct EvolutionReport {
    /// Last generation published, `None` if the limit was zero.
    pub last: Option<Generation>,
    /// Number of generations published.
    pub published: u64,
    /// Whether the stop condition (rather than the limit) ended the run.
    pub halted: bool,
}

// ── Evolution ───────────────────────────────────────────────────

/// A configured evolution, ready to run once.
///
/// # Example
///
/// ```
/// use lifegrid_core::{LifeRule, Pattern};
/// use lifegrid_engine::{Evolution, EvolutionConfig, WhenRepeated};
///
/// let config = EvolutionConfig::default()
///     .populate_with_pattern(Pattern::blinker())
///     .rule(LifeRule::Conway)
///     .stop(WhenRepeated::new());
/// let last = Evolution::new(config)?.evolve(100)?;
/// // Generations 1 and 2 are new, generation 3 repeats generation 1.
/// assert_eq!(last.map(|g| g.alive_count()), Some(3));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Evolution<'o> {
    initial: Generation,
    stop: Option<Box<dyn StopCondition + 'o>>,
    observers: Vec<Box<dyn Observer + 'o>>,
}

impl<'o> Evolution<'o> {
    /// Resolve `config` and build the first generation.
    ///
    /// Fails if an initial live cell lies outside the resolved grid.
    pub fn new(config: EvolutionConfig<'o>) -> Result<Self, ConfigError> {
        let initial = config.initial_generation()?;
        Ok(Self {
            initial,
            stop: config.stop,
            observers: config.observers,
        })
    }

    /// The first generation.
    pub fn initial(&self) -> &Generation {
        &self.initial
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Publish at most `count` generations, starting with the first one.
    ///
    /// Returns the last generation published, or `None` when `count` is
    /// zero.
    pub fn evolve(self, count: u64) -> Result<Option<Generation>, EvolutionError> {
        Ok(self.run(Some(count))?.last)
    }

    /// Publish generations until `condition` or the configured stop
    /// condition fires. `condition` is asked first.
    ///
    /// There is no generation limit: if neither condition ever fires,
    /// this never returns.
    pub fn evolve_until(
        mut self,
        condition: impl StopCondition + 'o,
    ) -> Result<Option<Generation>, EvolutionError> {
        let stop: Box<dyn StopCondition + 'o> = match self.stop.take() {
            Some(existing) => Box::new(condition.or(existing)),
            None => Box::new(condition),
        };
        self.stop = Some(stop);
        Ok(self.run(None)?.last)
    }

    /// Run with an optional generation limit and report how it ended.
    pub fn run(self, limit: Option<u64>) -> Result<EvolutionReport, EvolutionError> {
        let Self {
            initial,
            mut stop,
            mut observers,
        } = self;
        log::debug!(
            "evolution starting: {}x{} grid, rule {}, {} live, {} observer(s), limit {:?}",
            initial.width(),
            initial.height(),
            initial.rule().name(),
            initial.alive_count(),
            observers.len(),
            limit,
        );

        let mut report = EvolutionReport::default();
        let limit = limit.map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));

        for generation in initial.successors().take(limit) {
            let number = report.published + 1;
            let failure = observers.iter_mut().enumerate().find_map(|(index, observer)| {
                observer
                    .on_next(&generation)
                    .err()
                    .map(|source| (index, observer.name().to_string(), source))
            });
            if let Some((index, name, source)) = failure {
                let error = EvolutionError::ObserverFailed {
                    index,
                    name,
                    generation: number,
                    source,
                };
                log::error!("evolution aborted: {error}");
                for observer in observers.iter_mut() {
                    observer.on_error(&error);
                }
                return Err(error);
            }

            report.published = number;
            log::trace!(
                "published generation {number}: {} live",
                generation.alive_count()
            );

            let halt = stop
                .as_mut()
                .is_some_and(|condition| condition.should_stop(&generation));
            report.last = Some(generation);
            if halt {
                report.halted = true;
                break;
            }
        }

        for observer in observers.iter_mut() {
            observer.on_completed();
        }
        if report.halted {
            log::info!(
                "evolution halted by stop condition after {} generation(s)",
                report.published
            );
        } else {
            log::info!(
                "evolution completed after {} generation(s)",
                report.published
            );
        }
        Ok(report)
    }
}

impl std::fmt::Debug for Evolution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evolution")
            .field("initial", &self.initial)
            .field("has_stop", &self.stop.is_some())
            .field("observers", &self.observer_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{WhenEmpty, WhenRepeated, WhenStable};
    use crate::error::ObserverError;
    use lifegrid_core::{Coordinates, LifeRule, Pattern};

    #[derive(Default)]
    struct Log {
        counts: Vec<usize>,
        completed: usize,
        errors: usize,
    }

    impl Observer for Log {
        fn on_next(&mut self, g: &Generation) -> Result<(), ObserverError> {
            self.counts.push(g.alive_count());
            Ok(())
        }

        fn on_error(&mut self, _: &EvolutionError) {
            self.errors += 1;
        }

        fn on_completed(&mut self) {
            self.completed += 1;
        }
    }

    struct Refuse;

    impl Observer for Refuse {
        fn name(&self) -> &str {
            "refuse"
        }

        fn on_next(&mut self, _: &Generation) -> Result<(), ObserverError> {
            Err(ObserverError::Rejected {
                reason: "no".into(),
            })
        }
    }

    fn blinker_config<'o>() -> EvolutionConfig<'o> {
        EvolutionConfig::default()
            .populate_with_pattern(Pattern::blinker())
            .rule(LifeRule::Conway)
    }

    #[test]
    fn count_limits_published_generations() {
        let mut log = Log::default();
        let report = Evolution::new(blinker_config().observe(&mut log))
            .unwrap()
            .run(Some(4))
            .unwrap();
        assert_eq!(report.published, 4);
        assert!(!report.halted);
        assert_eq!(log.counts, vec![3, 3, 3, 3]);
        assert_eq!(log.completed, 1);
    }

    #[test]
    fn zero_count_publishes_nothing_but_completes() {
        let mut log = Log::default();
        let last = Evolution::new(blinker_config().observe(&mut log))
            .unwrap()
            .evolve(0)
            .unwrap();
        assert!(last.is_none());
        assert!(log.counts.is_empty());
        assert_eq!(log.completed, 1);
    }

    #[test]
    fn stop_is_inclusive() {
        let mut log = Log::default();
        let config = EvolutionConfig::default()
            .populate_with_cells([Coordinates::new(2, 2)])
            .stop(WhenEmpty)
            .observe(&mut log);
        let report = Evolution::new(config).unwrap().run(Some(10)).unwrap();
        // The lone cell dies; the empty generation is still delivered.
        assert_eq!(log.counts, vec![1, 0]);
        assert!(report.halted);
        assert_eq!(report.last.map(|g| g.is_empty()), Some(true));
    }

    #[test]
    fn evolve_until_terminates_without_limit() {
        // Stable never fires for an oscillator; Repeated ends the run on
        // generation 3, which equals the first.
        let config = blinker_config().stop(WhenStable::new());
        let evolution = Evolution::new(config).unwrap();
        let first = evolution.initial().clone();
        let last = evolution.evolve_until(WhenRepeated::new()).unwrap();
        assert_eq!(last, Some(first));
    }

    #[test]
    fn evolve_until_without_configured_stop_uses_only_the_condition() {
        let mut log = Log::default();
        let config = EvolutionConfig::default()
            .populate_with_cells([Coordinates::new(2, 2)])
            .observe(&mut log);
        let evolution = Evolution::new(config).unwrap();
        assert_eq!(evolution.observer_count(), 1);
        let last = evolution.evolve_until(WhenEmpty).unwrap();
        assert_eq!(last.map(|g| g.is_empty()), Some(true));
        assert_eq!(log.counts, vec![1, 0]);
        assert_eq!(log.completed, 1);
    }

    #[test]
    fn observer_failure_aborts_and_notifies_everyone() {
        let mut before = Log::default();
        let mut after = Log::default();
        let config = blinker_config()
            .observe(&mut before)
            .observe(Refuse)
            .observe(&mut after);
        let err = Evolution::new(config).unwrap().evolve(5).unwrap_err();
        match &err {
            EvolutionError::ObserverFailed {
                index,
                name,
                generation,
                ..
            } => {
                assert_eq!(*index, 1);
                assert_eq!(name, "refuse");
                assert_eq!(*generation, 1);
            }
        }
        assert_eq!(before.counts, vec![3]);
        assert!(after.counts.is_empty());
        assert_eq!((before.errors, after.errors), (1, 1));
        assert_eq!((before.completed, after.completed), (0, 0));
    }

    #[test]
    fn new_rejects_out_of_bounds_cells() {
        let config = EvolutionConfig::default()
            .size(2, 2)
            .populate_with_cells([Coordinates::new(2, 0)]);
        assert!(matches!(Evolution::new(config), Err(ConfigError::Grid(_))));
    }
}
