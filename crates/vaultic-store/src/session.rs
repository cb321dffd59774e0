//! Fixed-passphrase authentication and session state.
//!
//! Holds the "who is signed in" state behind an `RwLock` and notifies
//! subscribers through the [`SessionBus`] rather than through any global
//! mutable state. A wrong passphrase is an expected outcome, reported as
//! `false`, never as an error.

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::sync::RwLock;

use vaultic_core::{Error, Result, Session, SessionBus, SessionEvent};

use crate::config::VaultConfig;

/// Principal id for the single shared-passphrase owner.
const PRINCIPAL_ID: &str = "vault-owner";

/// Session manager: validates the master passphrase and tracks the active
/// session.
pub struct SessionManager {
    master_passphrase: String,
    current: RwLock<Option<Session>>,
    bus: SessionBus,
}

impl SessionManager {
    /// Create a session manager from config; nobody is signed in initially.
    pub fn new(config: &VaultConfig) -> Self {
        Self {
            master_passphrase: config.master_passphrase.clone(),
            current: RwLock::new(None),
            bus: SessionBus::new(config.event_capacity),
        }
    }

    /// Attempt to sign in with the given passphrase.
    ///
    /// Returns `true` and emits [`SessionEvent::SignedIn`] on success;
    /// returns `false` on mismatch. Signing in while already signed in
    /// replaces the session.
    pub async fn sign_in(&self, passphrase: &str) -> bool {
        if passphrase != self.master_passphrase {
            tracing::debug!(op = "sign_in", success = false, "Passphrase mismatch");
            return false;
        }

        let session = Session {
            principal_id: PRINCIPAL_ID.to_string(),
            started_at: Utc::now(),
        };
        *self.current.write().await = Some(session.clone());
        self.bus.emit(SessionEvent::SignedIn {
            principal_id: session.principal_id.clone(),
            at: session.started_at,
        });
        tracing::info!(op = "sign_in", principal_id = PRINCIPAL_ID, "Signed in");
        true
    }

    /// End the active session, if any, and emit [`SessionEvent::SignedOut`].
    pub async fn sign_out(&self) {
        let mut current = self.current.write().await;
        if current.take().is_some() {
            self.bus.emit(SessionEvent::SignedOut { at: Utc::now() });
            tracing::info!(op = "sign_out", "Signed out");
        }
    }

    /// The active session, if any.
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// The active session, or `Error::Unauthorized` when nobody is signed
    /// in. Repositories call this before every operation.
    pub async fn require(&self) -> Result<Session> {
        self.current
            .read()
            .await
            .clone()
            .ok_or_else(|| Error::Unauthorized("no active session".to_string()))
    }

    /// Subscribe to session-changed events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.bus.subscribe()
    }
}
