//! Structured logging field name constants for vaultic.
//!
//! Both crates use these constants for consistent structured logging so
//! log aggregation tools can query by standardized field names across
//! subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (vault open, sign-in/out), operation completions |
//! | DEBUG | Decision points, CRUD outcomes, config choices |
//! | TRACE | Per-item iteration (analysis batches, export rows) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "store", "session", "analysis", "export"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "insert", "update", "delete", "sign_in", "export"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Password entry UUID being operated on.
pub const ENTRY_ID: &str = "entry_id";

/// Note UUID being operated on.
pub const NOTE_ID: &str = "note_id";

/// Auth entry UUID being operated on.
pub const AUTH_ENTRY_ID: &str = "auth_entry_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of records returned by a list or export.
pub const RESULT_COUNT: &str = "result_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
