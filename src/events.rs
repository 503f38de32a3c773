//! Notifications emitted by background polling.

use crate::error::Error;
use crate::models::DetectionResult;
use std::sync::{Arc, Mutex, PoisonError};

/// A notification produced by a background poll
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Detection results are available
    Result(DetectionResult),
    /// Polling failed or timed out
    Error(Error),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Result(_) => EventKind::Result,
            Event::Error(_) => EventKind::Error,
        }
    }
}

/// The two notification channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Result,
    Error,
}

/// Handle returned when registering a listener, used to remove it later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ResultListener = Arc<dyn Fn(&DetectionResult) + Send + Sync>;
type ErrorListener = Arc<dyn Fn(&Error) + Send + Sync>;

#[derive(Clone)]
enum Listener {
    Result(ResultListener),
    Error(ErrorListener),
}

impl Listener {
    fn kind(&self) -> EventKind {
        match self {
            Listener::Result(_) => EventKind::Result,
            Listener::Error(_) => EventKind::Error,
        }
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Listener registry for one background poll.
///
/// Cloning yields another handle to the same registry, so listeners can be
/// added or removed while the poll is running. Emission calls every listener
/// registered for the event's channel, in registration order, before
/// returning.
#[derive(Clone, Default)]
pub struct EventEmitter {
    registry: Arc<Mutex<Registry>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for detection results
    pub fn on_result<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&DetectionResult) + Send + Sync + 'static,
    {
        self.register(Listener::Result(Arc::new(listener)))
    }

    /// Register a listener for errors, including polling timeouts
    pub fn on_error<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.register(Listener::Error(Arc::new(listener)))
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut registry = self.lock();
        let before = registry.listeners.len();
        registry.listeners.retain(|(listener_id, _)| *listener_id != id);
        registry.listeners.len() != before
    }

    /// Remove every listener, or only those of one channel
    pub fn remove_all_listeners(&self, kind: Option<EventKind>) {
        let mut registry = self.lock();
        match kind {
            Some(kind) => registry
                .listeners
                .retain(|(_, listener)| listener.kind() != kind),
            None => registry.listeners.clear(),
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.lock()
            .listeners
            .iter()
            .filter(|(_, listener)| listener.kind() == kind)
            .count()
    }

    /// Deliver an event to its channel's listeners. Returns whether any
    /// listener was called.
    pub fn emit(&self, event: &Event) -> bool {
        // Listeners run without the lock held so they may (de)register
        let listeners: Vec<Listener> = self
            .lock()
            .listeners
            .iter()
            .filter(|(_, listener)| listener.kind() == event.kind())
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in &listeners {
            match (listener, event) {
                (Listener::Result(call), Event::Result(result)) => call(result),
                (Listener::Error(call), Event::Error(error)) => call(error),
                _ => {}
            }
        }

        !listeners.is_empty()
    }

    fn register(&self, listener: Listener) -> ListenerId {
        let mut registry = self.lock();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        id
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("result_listeners", &self.listener_count(EventKind::Result))
            .field("error_listeners", &self.listener_count(EventKind::Error))
            .finish()
    }
}
