//! Event system for fetch progress
//!
//! An in-process event bus built on `tokio::sync::broadcast`. The fetch
//! service emits events; any number of subscribers (TUI, CLI, logs) consume
//! them. Emitting never blocks, and events are dropped when nobody listens.
//!
//! # Example
//!
//! ```no_run
//! use libbistro::service::events::{EventBus, Event};
//!
//! # async fn example() {
//! let event_bus = EventBus::new(16);
//! let mut receiver = event_bus.subscribe();
//!
//! event_bus.emit(Event::FetchStarted {
//!     provider: "themealdb".to_string(),
//! });
//!
//! if let Ok(event) = receiver.recv().await {
//!     println!("Received: {:?}", event);
//! }
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<Event>;

/// Event bus for distributing fetch events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the specified per-subscriber capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events emitted after this call
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Lagging subscribers lose the oldest events first.
    pub fn emit(&self, event: Event) {
        // Err only means there are no receivers
        let _ = self.sender.send(event);
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Events emitted by the fetch service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A fetch was started
    FetchStarted {
        /// Provider name (e.g. "themealdb")
        provider: String,
    },

    /// A new batch replaced the previous one
    MealsUpdated {
        provider: String,
        /// Number of meals in the batch
        count: usize,
    },

    /// The fetch failed; the previous batch is still current
    FetchFailed {
        provider: String,
        error: String,
    },
}
