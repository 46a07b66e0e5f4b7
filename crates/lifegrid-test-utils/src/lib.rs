//! Test utilities for lifegrid development.
//!
//! Provides observers that record or fail on demand and a few canonical
//! generations. See [`fixtures`] for the generations.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Arc, Mutex, MutexGuard};

use lifegrid_core::Generation;
use lifegrid_engine::{EvolutionError, Observer, ObserverError};

/// One observer callback, as seen by a [`RecordingObserver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// `on_next` with the observer's tag and the generation received.
    Next(String, Generation),
    /// `on_error` with the observer's tag and the error message.
    Error(String, String),
    /// `on_completed` with the observer's tag.
    Completed(String),
}

impl Event {
    /// Tag of the observer that recorded this event.
    pub fn tag(&self) -> &str {
        match self {
            Self::Next(tag, _) | Self::Error(tag, _) | Self::Completed(tag) => tag,
        }
    }
}

/// Event log shared between several recording observers, so tests can
/// check the interleaving of callbacks across observers.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<Event>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new observer recording into this log under `tag`.
    pub fn observer(&self, tag: impl Into<String>) -> RecordingObserver {
        RecordingObserver {
            tag: tag.into(),
            log: self.clone(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        // A panicking test poisons the lock; keep the events readable.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, event: Event) {
        self.lock().push(event);
    }

    /// Snapshot of every event recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// Events recorded by the observer tagged `tag`.
    pub fn events_of(&self, tag: &str) -> Vec<Event> {
        self.lock().iter().filter(|e| e.tag() == tag).cloned().collect()
    }

    /// Generations received by the observer tagged `tag`, in order.
    pub fn generations_of(&self, tag: &str) -> Vec<Generation> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                Event::Next(t, g) if t == tag => Some(g.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of `on_completed` calls recorded for `tag`.
    pub fn completions_of(&self, tag: &str) -> usize {
        self.lock()
            .iter()
            .filter(|e| matches!(e, Event::Completed(t) if t == tag))
            .count()
    }

    /// Number of `on_error` calls recorded for `tag`.
    pub fn errors_of(&self, tag: &str) -> usize {
        self.lock()
            .iter()
            .filter(|e| matches!(e, Event::Error(t, _) if t == tag))
            .count()
    }
}

/// Records every callback into an [`EventLog`].
#[derive(Clone, Debug)]
pub struct RecordingObserver {
    tag: String,
    log: EventLog,
}

impl Observer for RecordingObserver {
    fn name(&self) -> &str {
        &self.tag
    }

    fn on_next(&mut self, generation: &Generation) -> Result<(), ObserverError> {
        self.log
            .push(Event::Next(self.tag.clone(), generation.clone()));
        Ok(())
    }

    fn on_error(&mut self, error: &EvolutionError) {
        self.log
            .push(Event::Error(self.tag.clone(), error.to_string()));
    }

    fn on_completed(&mut self) {
        self.log.push(Event::Completed(self.tag.clone()));
    }
}

/// Accepts `succeed_count` generations, then rejects every further one.
#[derive(Debug)]
pub struct FailingObserver {
    pub succeed_count: usize,
    received: usize,
    errors: usize,
    completions: usize,
}

impl FailingObserver {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            received: 0,
            errors: 0,
            completions: 0,
        }
    }

    /// Generations accepted so far.
    pub fn received(&self) -> usize {
        self.received
    }

    /// `on_error` calls received.
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// `on_completed` calls received.
    pub fn completions(&self) -> usize {
        self.completions
    }
}

impl Observer for FailingObserver {
    fn name(&self) -> &str {
        "failing"
    }

    fn on_next(&mut self, _generation: &Generation) -> Result<(), ObserverError> {
        if self.received >= self.succeed_count {
            return Err(ObserverError::Rejected {
                reason: format!("refusing after {} generation(s)", self.succeed_count),
            });
        }
        self.received += 1;
        Ok(())
    }

    fn on_error(&mut self, _error: &EvolutionError) {
        self.errors += 1;
    }

    fn on_completed(&mut self) {
        self.completions += 1;
    }
}
