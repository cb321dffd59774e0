//! Core traits for vaultic abstractions.
//!
//! These traits define the Collection Manager interfaces that concrete
//! backends must satisfy, enabling pluggable stores and testability. The
//! shipped implementation is in-memory; the async seam exists so a remote
//! document store can be substituted.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// PASSWORD ENTRY REPOSITORY
// =============================================================================

/// Request for creating a password entry.
#[derive(Debug, Clone)]
pub struct CreatePasswordEntry {
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: Option<String>,
    pub notes: Option<String>,
    /// Falls back to the default category when `None` or unknown.
    pub category: Option<String>,
    pub is_favorite: bool,
}

/// Partial update for a password entry. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePasswordEntry {
    pub title: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub url: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub category: Option<String>,
    pub is_favorite: Option<bool>,
}

/// Repository for password entry CRUD operations.
#[async_trait]
pub trait PasswordEntryRepository: Send + Sync {
    /// Insert a new entry, assigning id and timestamps.
    async fn insert(&self, req: CreatePasswordEntry) -> Result<Uuid>;

    /// Fetch an entry by id.
    async fn fetch(&self, id: Uuid) -> Result<PasswordEntry>;

    /// List all entries, newest first.
    async fn list(&self) -> Result<Vec<PasswordEntry>>;

    /// Apply a partial update, refreshing `updated_at` and preserving
    /// `id`/`created_at`.
    async fn update(&self, id: Uuid, req: UpdatePasswordEntry) -> Result<()>;

    /// Permanently delete an entry.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Check whether an entry exists.
    async fn exists(&self, id: Uuid) -> Result<bool>;
}

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Request for creating a note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    /// Falls back to the default category when `None` or unknown.
    pub category: Option<String>,
    pub is_favorite: bool,
}

/// Partial update for a note.
#[derive(Debug, Clone, Default)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub is_favorite: Option<bool>,
}

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note, assigning id and timestamps.
    async fn insert(&self, req: CreateNote) -> Result<Uuid>;

    /// Fetch a note by id.
    async fn fetch(&self, id: Uuid) -> Result<Note>;

    /// List all notes, newest first.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Apply a partial update, refreshing `updated_at`.
    async fn update(&self, id: Uuid, req: UpdateNote) -> Result<()>;

    /// Permanently delete a note.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Check whether a note exists.
    async fn exists(&self, id: Uuid) -> Result<bool>;
}

// =============================================================================
// AUTH ENTRY REPOSITORY
// =============================================================================

/// Request for creating an auth entry.
#[derive(Debug, Clone)]
pub struct CreateAuthEntry {
    pub title: String,
    pub method: AuthMethod,
    pub notes: Option<String>,
    pub category: Option<String>,
    pub is_favorite: bool,
}

/// Partial update for an auth entry. Replacing `method` swaps the whole
/// payload; there is no per-field patching across kinds.
#[derive(Debug, Clone, Default)]
pub struct UpdateAuthEntry {
    pub title: Option<String>,
    pub method: Option<AuthMethod>,
    pub notes: Option<Option<String>>,
    pub category: Option<String>,
    pub is_favorite: Option<bool>,
}

/// Repository for MFA record CRUD operations.
#[async_trait]
pub trait AuthEntryRepository: Send + Sync {
    /// Insert a new auth entry, assigning id and timestamps.
    async fn insert(&self, req: CreateAuthEntry) -> Result<Uuid>;

    /// Fetch an auth entry by id.
    async fn fetch(&self, id: Uuid) -> Result<AuthEntry>;

    /// List all auth entries, newest first.
    async fn list(&self) -> Result<Vec<AuthEntry>>;

    /// Apply a partial update, refreshing `updated_at`.
    async fn update(&self, id: Uuid, req: UpdateAuthEntry) -> Result<()>;

    /// Permanently delete an auth entry.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Check whether an auth entry exists.
    async fn exists(&self, id: Uuid) -> Result<bool>;
}
