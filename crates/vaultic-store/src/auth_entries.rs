//! MFA record repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use vaultic_core::{
    defaults, AuthEntry, AuthEntryRepository, AuthMethod, CreateAuthEntry, Error, Result,
    UpdateAuthEntry,
};

use crate::normalize_category;
use crate::session::SessionManager;

/// In-memory implementation of [`AuthEntryRepository`].
pub struct MemoryAuthEntryRepository {
    sessions: Arc<SessionManager>,
    records: RwLock<HashMap<Uuid, AuthEntry>>,
}

impl MemoryAuthEntryRepository {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self {
            sessions,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Validate and tidy a method payload.
    ///
    /// Secret-bearing kinds must carry a non-empty secret. List kinds drop
    /// blank codes and incomplete question pairs, then must be non-empty.
    fn sanitize_method(method: AuthMethod) -> Result<AuthMethod> {
        match method {
            AuthMethod::Totp { ref secret, .. }
            | AuthMethod::RecoveryKey { ref secret, .. }
            | AuthMethod::AppPassword { ref secret, .. } => {
                if secret.trim().is_empty() {
                    return Err(Error::InvalidInput(format!(
                        "{} secret must not be empty",
                        method.kind()
                    )));
                }
                Ok(method)
            }
            AuthMethod::BackupCodes { codes } => {
                let codes: Vec<String> = codes
                    .into_iter()
                    .filter(|c| !c.trim().is_empty())
                    .collect();
                if codes.is_empty() {
                    return Err(Error::InvalidInput(
                        "backup_codes requires at least one code".to_string(),
                    ));
                }
                Ok(AuthMethod::BackupCodes { codes })
            }
            AuthMethod::SecurityQuestions { questions } => {
                let questions: Vec<_> = questions
                    .into_iter()
                    .filter(|q| !q.question.trim().is_empty() && !q.answer.trim().is_empty())
                    .collect();
                if questions.is_empty() {
                    return Err(Error::InvalidInput(
                        "security_questions requires at least one complete pair".to_string(),
                    ));
                }
                Ok(AuthMethod::SecurityQuestions { questions })
            }
        }
    }
}

#[async_trait]
impl AuthEntryRepository for MemoryAuthEntryRepository {
    async fn insert(&self, req: CreateAuthEntry) -> Result<Uuid> {
        self.sessions.require().await?;
        if req.title.trim().is_empty() {
            return Err(Error::InvalidInput("title must not be empty".to_string()));
        }
        let method = Self::sanitize_method(req.method)?;

        let now = Utc::now();
        let entry = AuthEntry {
            id: Uuid::new_v4(),
            title: req.title,
            method,
            notes: req.notes,
            category: normalize_category(req.category, defaults::PASSWORD_CATEGORIES),
            is_favorite: req.is_favorite,
            created_at: now,
            updated_at: now,
        };
        let id = entry.id;
        let kind = entry.method.kind();
        self.records.write().await.insert(id, entry);
        tracing::debug!(subsystem = "store", op = "insert", auth_entry_id = %id, kind, "Auth entry created");
        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<AuthEntry> {
        self.sessions.require().await?;
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(Error::AuthEntryNotFound(id))
    }

    async fn list(&self) -> Result<Vec<AuthEntry>> {
        self.sessions.require().await?;
        let records = self.records.read().await;
        let mut entries: Vec<AuthEntry> = records.values().cloned().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn update(&self, id: Uuid, req: UpdateAuthEntry) -> Result<()> {
        self.sessions.require().await?;
        if matches!(&req.title, Some(t) if t.trim().is_empty()) {
            return Err(Error::InvalidInput("title must not be empty".to_string()));
        }
        // Sanitize the replacement payload before taking the write lock
        let method = req.method.map(Self::sanitize_method).transpose()?;

        let mut records = self.records.write().await;
        let entry = records.get_mut(&id).ok_or(Error::AuthEntryNotFound(id))?;

        if let Some(title) = req.title {
            entry.title = title;
        }
        if let Some(method) = method {
            entry.method = method;
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
        tracing::debug!(subsystem = "store", op = "update", auth_entry_id = %id, "Auth entry updated");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.sessions.require().await?;
        self.records
            .write()
            .await
            .remove(&id)
            .ok_or(Error::AuthEntryNotFound(id))?;
        tracing::debug!(subsystem = "store", op = "delete", auth_entry_id = %id, "Auth entry deleted");
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        self.sessions.require().await?;
        Ok(self.records.read().await.contains_key(&id))
    }
}
