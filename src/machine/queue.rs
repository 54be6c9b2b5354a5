//! Postponed-event queue.
//!
//! Button events the machine cannot yet classify (click? drag start? chord?)
//! are consumed and kept here verbatim. When the decision falls, they are
//! either replayed in order through the default handler (the click turns out
//! to be a selection) or dropped (the machine acted on them itself). Every
//! exit from the disambiguation state drains the queue - no cross-state
//! leakage.

use std::collections::VecDeque;

use crate::event::{EventOutcome, InputEvent};
use crate::viewer::ViewerServices;

/// FIFO of deferred button events awaiting a move/hold/second-click
/// decision. Bounded in practice by human click rate.
#[derive(Debug, Default)]
pub struct PostponedEvents {
    queue: VecDeque<InputEvent>,
}

impl PostponedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the event and keep a verbatim copy for possible replay.
    pub fn post(&mut self, event: &InputEvent, out: &mut EventOutcome) {
        out.consumed = true;
        tracing::trace!(event = ?event, "postponed");
        self.queue.push_back(*event);
    }

    /// Drop everything without replay.
    pub fn discard_all(&mut self) {
        if !self.queue.is_empty() {
            tracing::trace!(count = self.queue.len(), "discarding postponed events");
        }
        self.queue.clear();
    }

    /// Replay every queued event, in original order, through the default
    /// handler, then clear.
    pub fn forward_all(&mut self, viewer: &mut dyn ViewerServices) {
        while let Some(event) = self.queue.pop_front() {
            viewer.fallback_event(&event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
