//! In-memory push channel for testing and single-process scenarios.
//!
//! The synchronizer depends on strictly ordered delivery from its transport
//! but does not enforce it. This channel is the in-process stand-in for that
//! transport: an append-only event log with per-subscriber read positions,
//! delivering events in exactly the order they were published.

use std::sync::{Arc, Mutex, RwLock};

use crate::dispatcher::Dispatcher;
use crate::document::Document;
use crate::push::PushEvent;
use crate::view::Action;

/// Ordered in-memory push channel.
///
/// Features:
/// - Thread-safe (can be shared via `Clone`)
/// - Supports multiple subscribers via `new_subscriber()`
/// - Events are stored in an append-only log
/// - Each subscriber tracks its own read position
///
/// ## Example
///
/// ```ignore
/// let channel = PushChannel::new();
/// channel.publish(PushEvent::remove("sample-1"));
///
/// let applied = channel.drain_into(&mut dispatcher);
/// assert_eq!(applied, 1);
/// ```
#[derive(Clone, Default)]
pub struct PushChannel {
    /// Shared event log
    log: Arc<RwLock<Vec<PushEvent>>>,
    /// Per-subscriber read position
    position: Arc<Mutex<usize>>,
}

impl PushChannel {
    pub fn new() -> Self {
        PushChannel::default()
    }

    /// Create a subscriber that shares the same log but reads from the
    /// beginning with its own position.
    pub fn new_subscriber(&self) -> Self {
        PushChannel {
            log: Arc::clone(&self.log),
            position: Arc::new(Mutex::new(0)),
        }
    }

    pub fn publish(&self, event: PushEvent) {
        self.log.write().unwrap().push(event);
    }

    pub fn publish_batch(&self, events: Vec<PushEvent>) {
        self.log.write().unwrap().extend(events);
    }

    /// Take the next unread event, if any.
    pub fn poll(&self) -> Option<PushEvent> {
        let log = self.log.read().unwrap();
        let mut position = self.position.lock().unwrap();

        if *position < log.len() {
            let event = log[*position].clone();
            *position += 1;
            Some(event)
        } else {
            None
        }
    }

    /// Apply every unread event to the dispatcher in publication order.
    /// Returns the number of events applied.
    pub fn drain_into<M: Document>(&self, dispatcher: &mut Dispatcher<M>) -> usize {
        let mut applied = 0;
        while let Some(event) = self.poll() {
            dispatcher.dispatch(Action::Push(event));
            applied += 1;
        }
        applied
    }

    pub fn len(&self) -> usize {
        self.log.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.read().unwrap().is_empty()
    }

    pub fn current_position(&self) -> usize {
        *self.position.lock().unwrap()
    }

    /// Clear the log and rewind this subscriber (test cleanup).
    pub fn clear(&self) {
        self.log.write().unwrap().clear();
        *self.position.lock().unwrap() = 0;
    }
}
