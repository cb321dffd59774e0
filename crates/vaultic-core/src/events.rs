//! Session state events and broadcast bus.
//!
//! Decouples "who is signed in" from "who gets told about it": the store's
//! session manager emits immutable [`SessionEvent`]s on a
//! `tokio::sync::broadcast` channel, and downstream consumers (UI state,
//! telemetry) subscribe independently. Slow receivers that fall behind get
//! a `Lagged` error and miss events; freshness matters more than
//! completeness for session streams.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

/// An authenticated principal. The shared-passphrase scheme yields a
/// single fixed principal; the type exists so multi-principal backends
/// can slot in without touching subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub principal_id: String,
    pub started_at: DateTime<Utc>,
}

/// Immutable session-changed event.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A sign-in succeeded.
    SignedIn {
        principal_id: String,
        at: DateTime<Utc>,
    },
    /// The active session ended.
    SignedOut { at: DateTime<Utc> },
}

impl SessionEvent {
    /// Returns the event type name (used for subscriber-side filtering).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SignedIn { .. } => "SignedIn",
            Self::SignedOut { .. } => "SignedOut",
        }
    }
}

/// Broadcast-based bus distributing session events to multiple consumers.
pub struct SessionBus {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionBus {
    /// Create a new bus with the given buffer capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all subscribers. Silently dropped when nobody is
    /// listening.
    pub fn emit(&self, event: SessionEvent) {
        tracing::debug!(
            event_type = event.event_type(),
            subscriber_count = self.tx.receiver_count(),
            "SessionBus emit"
        );
        let _ = self.tx.send(event);
    }

    /// Subscribe to session events. Each subscriber gets an independent
    /// stream.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
