//! The [`Observer`] trait: consumers of the published generation sequence.

use lifegrid_core::Generation;

use crate::error::{EvolutionError, ObserverError};

/// A consumer of the generations an evolution publishes.
///
/// # Contract
///
/// For one evolution, the driver calls:
///
/// - `on_next()` once per published generation, in sequence order;
/// - then either `on_completed()` exactly once, or `on_error()` exactly
///   once, never both.
///
/// Calls to one observer are never concurrent. When several observers are
/// registered, each generation is delivered to all of them, in
/// registration order, before the next generation is computed.
///
/// The trait is implemented for `&mut O`, so a caller can register a
/// borrowed observer and inspect it once the evolution returns.
///
/// # Examples
///
/// ```
/// use lifegrid_core::Generation;
/// use lifegrid_engine::{Observer, ObserverError};
///
/// #[derive(Default)]
/// struct Population(Vec<usize>);
///
/// impl Observer for Population {
///     fn name(&self) -> &str { "population" }
///
///     fn on_next(&mut self, generation: &Generation) -> Result<(), ObserverError> {
///         self.0.push(generation.alive_count());
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Human-readable name for error reporting and logging.
    fn name(&self) -> &str {
        "observer"
    }

    /// Receive the next generation.
    ///
    /// Returning an error ends the evolution: no further generation is
    /// computed and every observer receives `on_error`.
    fn on_next(&mut self, generation: &Generation) -> Result<(), ObserverError>;

    /// The evolution failed. No further call follows.
    fn on_error(&mut self, _error: &EvolutionError) {}

    /// The evolution finished normally. No further call follows.
    fn on_completed(&mut self) {}
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_next(&mut self, generation: &Generation) -> Result<(), ObserverError> {
        (**self).on_next(generation)
    }

    fn on_error(&mut self, error: &EvolutionError) {
        (**self).on_error(error)
    }

    fn on_completed(&mut self) {
        (**self).on_completed()
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_next(&mut self, generation: &Generation) -> Result<(), ObserverError> {
        (**self).on_next(generation)
    }

    fn on_error(&mut self, error: &EvolutionError) {
        (**self).on_error(error)
    }

    fn on_completed(&mut self) {
        (**self).on_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::LifeRule;

    #[derive(Default)]
    struct Tally {
        next: usize,
        completed: usize,
    }

    impl Observer for Tally {
        fn on_next(&mut self, _: &Generation) -> Result<(), ObserverError> {
            self.next += 1;
            Ok(())
        }

        fn on_completed(&mut self) {
            self.completed += 1;
        }
    }

    #[test]
    fn borrowed_observer_forwards_to_owner() {
        let mut tally = Tally::default();
        let g = Generation::new([], 2, 2, LifeRule::Conway);
        {
            let mut borrowed: Box<dyn Observer + '_> = Box::new(&mut tally);
            borrowed.on_next(&g).unwrap();
            borrowed.on_next(&g).unwrap();
            borrowed.on_completed();
            assert_eq!(borrowed.name(), "observer");
        }
        assert_eq!(tally.next, 2);
        assert_eq!(tally.completed, 1);
    }
}
