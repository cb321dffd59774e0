//! Password entry repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use vaultic_core::{
    defaults, CreatePasswordEntry, Error, PasswordEntry, PasswordEntryRepository, Result,
    UpdatePasswordEntry,
};

use crate::normalize_category;
use crate::session::SessionManager;

/// In-memory implementation of [`PasswordEntryRepository`].
///
/// Every operation requires an active session; failures leave the
/// collection unchanged.
pub struct MemoryPasswordEntryRepository {
    sessions: Arc<SessionManager>,
    records: RwLock<HashMap<Uuid, PasswordEntry>>,
}

impl MemoryPasswordEntryRepository {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self {
            sessions,
            records: RwLock::new(HashMap::new()),
        }
    }

    fn validate_create(req: &CreatePasswordEntry) -> Result<()> {
        if req.title.trim().is_empty() {
            return Err(Error::InvalidInput("title must not be empty".to_string()));
        }
        if req.username.trim().is_empty() {
            return Err(Error::InvalidInput(
                "username must not be empty".to_string(),
            ));
        }
        if req.password.is_empty() {
            return Err(Error::InvalidInput(
                "password must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PasswordEntryRepository for MemoryPasswordEntryRepository {
    async fn insert(&self, req: CreatePasswordEntry) -> Result<Uuid> {
        self.sessions.require().await?;
        Self::validate_create(&req)?;

        let now = Utc::now();
        let entry = PasswordEntry {
            id: Uuid::new_v4(),
            title: req.title,
            username: req.username,
            password: req.password,
            url: req.url,
            notes: req.notes,
            category: normalize_category(req.category, defaults::PASSWORD_CATEGORIES),
            is_favorite: req.is_favorite,
            created_at: now,
            updated_at: now,
        };
        let id = entry.id;
        self.records.write().await.insert(id, entry);
        tracing::debug!(subsystem = "store", op = "insert", entry_id = %id, "Password entry created");
        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<PasswordEntry> {
        self.sessions.require().await?;
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(Error::EntryNotFound(id))
    }

    async fn list(&self) -> Result<Vec<PasswordEntry>> {
        self.sessions.require().await?;
        let records = self.records.read().await;
        let mut entries: Vec<PasswordEntry> = records.values().cloned().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tracing::debug!(
            subsystem = "store",
            op = "list",
            result_count = entries.len(),
            "Password entries listed"
        );
        Ok(entries)
    }

    async fn update(&self, id: Uuid, req: UpdatePasswordEntry) -> Result<()> {
        self.sessions.require().await?;

        // Validate before touching the record so a failed update leaves
        // the collection unchanged.
        if matches!(&req.title, Some(t) if t.trim().is_empty()) {
            return Err(Error::InvalidInput("title must not be empty".to_string()));
        }
        if matches!(&req.username, Some(u) if u.trim().is_empty()) {
            return Err(Error::InvalidInput(
                "username must not be empty".to_string(),
            ));
        }
        if matches!(&req.password, Some(p) if p.is_empty()) {
            return Err(Error::InvalidInput(
                "password must not be empty".to_string(),
            ));
        }

        let mut records = self.records.write().await;
        let entry = records.get_mut(&id).ok_or(Error::EntryNotFound(id))?;

        if let Some(title) = req.title {
            entry.title = title;
        }
        if let Some(username) = req.username {
            entry.username = username;
        }
        if let Some(password) = req.password {
            entry.password = password;
        }
        if let Some(url) = req.url {
            entry.url = url;
        }
        if let Some(notes) = req.notes {
            entry.notes = notes;
        }
        if let Some(category) = req.category {
            entry.category = normalize_category(Some(category), defaults::PASSWORD_CATEGORIES);
        }
        if let Some(is_favorite) = req.is_favorite {
            entry.is_favorite = is_favorite;
        }
        entry.updated_at = Utc::now();
        tracing::debug!(subsystem = "store", op = "update", entry_id = %id, "Password entry updated");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.sessions.require().await?;
        self.records
            .write()
            .await
            .remove(&id)
            .ok_or(Error::EntryNotFound(id))?;
        tracing::debug!(subsystem = "store", op = "delete", entry_id = %id, "Password entry deleted");
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        self.sessions.require().await?;
        Ok(self.records.read().await.contains_key(&id))
    }
}
