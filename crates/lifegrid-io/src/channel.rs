//! Forwarding the generation sequence over a channel.

use crossbeam_channel::{Receiver, Sender};
use lifegrid_core::Generation;
use lifegrid_engine::{EvolutionError, Observer, ObserverError};

/// One observer callback, as received on the other end of the channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationEvent {
    /// A published generation.
    Next(Generation),
    /// The evolution failed with this message.
    Error(String),
    /// The evolution finished normally.
    Completed,
}

/// Sends every callback as a [`GenerationEvent`].
///
/// `on_next` fails with [`ObserverError::Disconnected`] once the receiver
/// is dropped, which ends the evolution.
#[derive(Clone, Debug)]
pub struct ChannelObserver {
    tx: Sender<GenerationEvent>,
}

impl ChannelObserver {
    /// Send on `tx`.
    pub fn new(tx: Sender<GenerationEvent>) -> Self {
        Self { tx }
    }
}

/// An observer and the receiving end of its channel. With `capacity`,
/// the evolution blocks while `capacity` events are pending.
pub fn channel(capacity: Option<usize>) -> (ChannelObserver, Receiver<GenerationEvent>) {
    let (tx, rx) = match capacity {
        Some(n) => crossbeam_channel::bounded(n),
        None => crossbeam_channel::unbounded(),
    };
    (ChannelObserver::new(tx), rx)
}

impl Observer for ChannelObserver {
    fn name(&self) -> &str {
        "channel"
    }

    fn on_next(&mut self, generation: &Generation) -> Result<(), ObserverError> {
        self.tx
            .send(GenerationEvent::Next(generation.clone()))
            .map_err(|_| ObserverError::Disconnected)
    }

    fn on_error(&mut self, error: &EvolutionError) {
        let _ = self.tx.send(GenerationEvent::Error(error.to_string()));
    }

    fn on_completed(&mut self) {
        let _ = self.tx.send(GenerationEvent::Completed);
    }
}
