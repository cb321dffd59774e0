//! # vaultic-store
//!
//! Session-gated in-memory collection manager for vaultic.
//!
//! This crate provides:
//! - The [`Vault`] façade owning the session manager and the three
//!   record repositories
//! - Fixed master-passphrase authentication with session-changed events
//! - In-memory repository implementations of the core CRUD traits
//! - JSON export of the password collection
//!
//! ## Example
//!
//! ```rust,ignore
//! use vaultic_store::{Vault, VaultConfig};
//! use vaultic_core::{CreatePasswordEntry, PasswordEntryRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let vault = Vault::open(VaultConfig::from_env());
//!     assert!(vault.session().sign_in("password").await);
//!
//!     let id = vault.entries.insert(CreatePasswordEntry {
//!         title: "Example".to_string(),
//!         username: "user@example.com".to_string(),
//!         password: "hunter2".to_string(),
//!         url: None,
//!         notes: None,
//!         category: None,
//!         is_favorite: false,
//!     }).await?;
//!
//!     println!("Created entry: {}", id);
//!     Ok(())
//! }
//! ```

pub mod auth_entries;
pub mod config;
pub mod entries;
pub mod export;
pub mod notes;
pub mod session;

use std::sync::Arc;

// Re-export core types
pub use vaultic_core::*;

pub use auth_entries::MemoryAuthEntryRepository;
pub use config::VaultConfig;
pub use entries::MemoryPasswordEntryRepository;
pub use export::render_export;
pub use notes::MemoryNoteRepository;
pub use session::SessionManager;

use vaultic_core::traits::PasswordEntryRepository;

/// Resolve a requested category against a closed list, falling back to
/// the default category when unset or unknown.
pub(crate) fn normalize_category(category: Option<String>, allowed: &[&str]) -> String {
    match category {
        Some(name) if allowed.contains(&name.as_str()) => name,
        _ => defaults::DEFAULT_CATEGORY.to_string(),
    }
}

/// The Collection Manager: session state plus the three record
/// repositories, all scoped to the single authenticated principal.
pub struct Vault {
    sessions: Arc<SessionManager>,
    pub entries: MemoryPasswordEntryRepository,
    pub notes: MemoryNoteRepository,
    pub auth: MemoryAuthEntryRepository,
}

impl Vault {
    /// Open an empty vault with the given configuration.
    pub fn open(config: VaultConfig) -> Self {
        let sessions = Arc::new(SessionManager::new(&config));
        tracing::info!(subsystem = "store", "Vault opened");
        Self {
            entries: MemoryPasswordEntryRepository::new(Arc::clone(&sessions)),
            notes: MemoryNoteRepository::new(Arc::clone(&sessions)),
            auth: MemoryAuthEntryRepository::new(Arc::clone(&sessions)),
            sessions,
        }
    }

    /// The session manager (sign-in/out, subscriptions).
    pub fn session(&self) -> &SessionManager {
        &self.sessions
    }

    /// Serialize the full password collection to the export document.
    pub async fn export_passwords(&self) -> Result<String> {
        let entries = self.entries.list().await?;
        render_export(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_is_kept() {
        let category = normalize_category(
            Some("Banking".to_string()),
            defaults::PASSWORD_CATEGORIES,
        );
        assert_eq!(category, "Banking");
    }

    #[test]
    fn unknown_category_falls_back() {
        let category = normalize_category(
            Some("Spaceships".to_string()),
            defaults::PASSWORD_CATEGORIES,
        );
        assert_eq!(category, defaults::DEFAULT_CATEGORY);
    }

    #[test]
    fn absent_category_falls_back() {
        let category = normalize_category(None, defaults::NOTE_CATEGORIES);
        assert_eq!(category, defaults::DEFAULT_CATEGORY);
    }
}
