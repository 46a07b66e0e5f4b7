//! Stop conditions: predicates that end an evolution early.
//!
//! A condition is asked once per published generation, after every
//! observer has received it. Conditions may be stateful; state lives in
//! the condition value itself, so build a fresh one per evolution.
//!
//! Conditions compose with [`StopCondition::or`]. The right-hand side is
//! only evaluated when the left-hand side returns `false`, and a
//! stateful side only updates its state when it is evaluated.

use indexmap::IndexSet;
use lifegrid_core::Generation;

/// A predicate that signals the end of an evolution.
pub trait StopCondition {
    /// Whether the evolution should stop after `generation`.
    fn should_stop(&mut self, generation: &Generation) -> bool;

    /// Logical OR, short-circuiting left to right.
    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: StopCondition,
    {
        Or {
            first: self,
            second: other,
        }
    }
}

impl<S: StopCondition + ?Sized> StopCondition for Box<S> {
    fn should_stop(&mut self, generation: &Generation) -> bool {
        (**self).should_stop(generation)
    }
}

impl<S: StopCondition + ?Sized> StopCondition for &mut S {
    fn should_stop(&mut self, generation: &Generation) -> bool {
        (**self).should_stop(generation)
    }
}

// ── Built-in conditions ─────────────────────────────────────────

/// Stops once no cell is alive.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhenEmpty;

impl StopCondition for WhenEmpty {
    fn should_stop(&mut self, generation: &Generation) -> bool {
        generation.is_empty()
    }
}

/// Stops when a generation equals the one it was last asked about.
///
/// Only consecutive generations are compared. The held generation is
/// replaced on every call, whatever the answer.
#[derive(Clone, Debug, Default)]
pub struct WhenStable {
    last: Option<Generation>,
}

impl WhenStable {
    /// A condition with no history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StopCondition for WhenStable {
    fn should_stop(&mut self, generation: &Generation) -> bool {
        let stable = self.last.as_ref() == Some(generation);
        self.last = Some(generation.clone());
        stable
    }
}

/// Stops when a generation has been seen before, detecting cycles of
/// any period.
#[derive(Clone, Debug, Default)]
pub struct WhenRepeated {
    seen: IndexSet<Generation>,
}

impl WhenRepeated {
    /// A condition with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct generations recorded so far.
    pub fn seen(&self) -> usize {
        self.seen.len()
    }

    /// Cycle length for a repeated `generation`: how many recorded
    /// generations back it was first seen. `None` if it was never seen.
    pub fn period_of(&self, generation: &Generation) -> Option<usize> {
        self.seen
            .get_index_of(generation)
            .map(|first| self.seen.len() - first)
    }
}

impl StopCondition for WhenRepeated {
    fn should_stop(&mut self, generation: &Generation) -> bool {
        if self.seen.contains(generation) {
            return true;
        }
        self.seen.insert(generation.clone());
        false
    }
}

/// Two conditions joined by [`StopCondition::or`].
#[derive(Clone, Debug)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A: StopCondition, B: StopCondition> StopCondition for Or<A, B> {
    fn should_stop(&mut self, generation: &Generation) -> bool {
        self.first.should_stop(generation) || self.second.should_stop(generation)
    }
}

/// A condition backed by a closure. Build one with [`when`].
pub struct FnCondition<F>(F);

/// Wrap a closure as a stop condition.
///
/// ```
/// use lifegrid_engine::{when, StopCondition, WhenEmpty};
///
/// let crowded = when(|g| g.alive_count() > 100).or(WhenEmpty);
/// # let _ = crowded;
/// ```
pub fn when<F>(f: F) -> FnCondition<F>
where
    F: FnMut(&Generation) -> bool,
{
    FnCondition(f)
}

impl<F> StopCondition for FnCondition<F>
where
    F: FnMut(&Generation) -> bool,
{
    fn should_stop(&mut self, generation: &Generation) -> bool {
        (self.0)(generation)
    }
}

impl<F> std::fmt::Debug for FnCondition<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnCondition")
    }
}
