//! Note repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use vaultic_core::{defaults, CreateNote, Error, Note, NoteRepository, Result, UpdateNote};

use crate::normalize_category;
use crate::session::SessionManager;

/// In-memory implementation of [`NoteRepository`].
pub struct MemoryNoteRepository {
    sessions: Arc<SessionManager>,
    records: RwLock<HashMap<Uuid, Note>>,
}

impl MemoryNoteRepository {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self {
            sessions,
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn insert(&self, req: CreateNote) -> Result<Uuid> {
        self.sessions.require().await?;
        if req.title.trim().is_empty() {
            return Err(Error::InvalidInput("title must not be empty".to_string()));
        }
        if req.content.trim().is_empty() {
            return Err(Error::InvalidInput(
                "content must not be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            title: req.title,
            content: req.content,
            category: normalize_category(req.category, defaults::NOTE_CATEGORIES),
            is_favorite: req.is_favorite,
            created_at: now,
            updated_at: now,
        };
        let id = note.id;
        self.records.write().await.insert(id, note);
        tracing::debug!(subsystem = "store", op = "insert", note_id = %id, "Note created");
        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        self.sessions.require().await?;
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(Error::NoteNotFound(id))
    }

    async fn list(&self) -> Result<Vec<Note>> {
        self.sessions.require().await?;
        let records = self.records.read().await;
        let mut notes: Vec<Note> = records.values().cloned().collect();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notes)
    }

    async fn update(&self, id: Uuid, req: UpdateNote) -> Result<()> {
        self.sessions.require().await?;
        if matches!(&req.title, Some(t) if t.trim().is_empty()) {
            return Err(Error::InvalidInput("title must not be empty".to_string()));
        }
        if matches!(&req.content, Some(c) if c.trim().is_empty()) {
            return Err(Error::InvalidInput(
                "content must not be empty".to_string(),
            ));
        }

        let mut records = self.records.write().await;
        let note = records.get_mut(&id).ok_or(Error::NoteNotFound(id))?;

        if let Some(title) = req.title {
            note.title = title;
        }
        if let Some(content) = req.content {
            note.content = content;
        }
        if let Some(category) = req.category {
            note.category = normalize_category(Some(category), defaults::NOTE_CATEGORIES);
        }
        if let Some(is_favorite) = req.is_favorite {
            note.is_favorite = is_favorite;
        }
        note.updated_at = Utc::now();
        tracing::debug!(subsystem = "store", op = "update", note_id = %id, "Note updated");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.sessions.require().await?;
        self.records
            .write()
            .await
            .remove(&id)
            .ok_or(Error::NoteNotFound(id))?;
        tracing::debug!(subsystem = "store", op = "delete", note_id = %id, "Note deleted");
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        self.sessions.require().await?;
        Ok(self.records.read().await.contains_key(&id))
    }
}
