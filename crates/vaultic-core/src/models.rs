//! Core data models for vaultic.
//!
//! These types are shared across all vaultic crates and represent the
//! credential records managed by the vault plus the result types produced
//! by the analysis functions.
//!
//! Records serialize with camelCase field names so that exported documents
//! keep the shape consumers of the export file already expect
//! (`createdAt`, `isFavorite`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// RECORD TYPES
// =============================================================================

/// A stored password credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordEntry {
    pub id: Uuid,
    pub title: String,
    pub username: String,
    /// Plaintext by design; encryption at rest is the backing store's concern.
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub category: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A free-form secure note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A question/answer pair for security-question auth entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityQuestion {
    pub question: String,
    pub answer: String,
}

/// Payload of an [`AuthEntry`], tagged by MFA record kind.
///
/// Modeled as a sum type so that exactly the fields relevant to each kind
/// exist; consumers match exhaustively instead of probing optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthMethod {
    /// Time-based one-time-passcode secret (authenticator apps).
    Totp {
        secret: String,
        issuer: String,
        account: String,
    },
    /// Ordered list of single-use backup codes.
    BackupCodes { codes: Vec<String> },
    /// Account recovery key.
    RecoveryKey {
        secret: String,
        issuer: String,
        account: String,
    },
    /// Security question/answer pairs.
    SecurityQuestions { questions: Vec<SecurityQuestion> },
    /// Application-specific password.
    AppPassword {
        secret: String,
        issuer: String,
        account: String,
    },
}

impl AuthMethod {
    /// Returns the wire-format kind tag for this payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Totp { .. } => "totp",
            Self::BackupCodes { .. } => "backup_codes",
            Self::RecoveryKey { .. } => "recovery_key",
            Self::SecurityQuestions { .. } => "security_questions",
            Self::AppPassword { .. } => "app_password",
        }
    }
}

impl std::fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// A multi-factor-authentication record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthEntry {
    pub id: Uuid,
    pub title: String,
    #[serde(flatten)]
    pub method: AuthMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub category: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Descriptor for a category label shown in pickers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

// =============================================================================
// ANALYSIS RESULT TYPES
// =============================================================================

/// Password strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "weak"),
            Self::Medium => write!(f, "medium"),
            Self::Strong => write!(f, "strong"),
        }
    }
}

/// Full result of a password strength analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAnalysis {
    pub strength: Strength,
    /// Clamped to 0..=6 in the returned value.
    pub score: i32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub entropy_bits: f64,
    pub estimated_crack_time: String,
}

/// Best-guess category for a title/URL pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: String,
    /// In [0, 1].
    pub confidence: f64,
    pub reasoning: String,
}

/// Severity of a security recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single actionable security recommendation over the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRecommendation {
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub action: String,
    /// First affected entry, when the recommendation points at one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<Uuid>,
}
