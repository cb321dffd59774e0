//! Centralized default constants for vaultic.
//!
//! **This module is the single source of truth** for shared default values.
//! Both crates reference these constants instead of defining their own
//! magic numbers.

use crate::models::Category;

// =============================================================================
// CATEGORIES
// =============================================================================

/// Fallback category for password entries and notes whose category is
/// unset or not in the closed list.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Closed list of password-entry categories.
pub const PASSWORD_CATEGORIES: &[&str] = &[
    "Social Media",
    "Work",
    "Banking",
    "Entertainment",
    "Shopping",
    "Other",
];

/// Closed list of note categories.
pub const NOTE_CATEGORIES: &[&str] = &[
    "Personal",
    "Work",
    "Finance",
    "Health",
    "Travel",
    "Ideas",
    "Recipes",
    "Other",
];

/// Category descriptors for pickers (name, icon, accent color).
pub fn default_categories() -> Vec<Category> {
    let table: &[(&str, &str, &str)] = &[
        ("Social Media", "Users", "#3B82F6"),
        ("Work", "Briefcase", "#10B981"),
        ("Banking", "CreditCard", "#F59E0B"),
        ("Entertainment", "Play", "#EF4444"),
        ("Shopping", "ShoppingCart", "#8B5CF6"),
        ("Other", "Folder", "#6B7280"),
    ];
    table
        .iter()
        .enumerate()
        .map(|(i, (name, icon, color))| Category {
            id: (i + 1).to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        })
        .collect()
}

// =============================================================================
// PASSWORD ANALYSIS
// =============================================================================

/// Symbol set tested for character-class presence during analysis.
pub const ANALYSIS_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Maximum (clamped) analysis score.
pub const SCORE_MAX: i32 = 6;

/// Assumed attacker guess rate for crack-time estimates (guesses/second).
pub const GUESSES_PER_SECOND: f64 = 1e9;

/// Entries whose `updated_at` is older than this many days are flagged stale.
pub const STALE_DAYS: i64 = 90;

/// Collection size above which the MFA-adoption recommendation is emitted.
pub const MFA_PROMPT_THRESHOLD: usize = 10;

// =============================================================================
// PASSWORD GENERATION
// =============================================================================

/// Default generated password length.
pub const GENERATED_LENGTH: usize = 16;

/// Symbol set used by the random generator path.
pub const GENERATOR_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Short symbol set used by the memorable generator path.
pub const MEMORABLE_SYMBOLS: &str = "!@#$%^&*";

// =============================================================================
// SESSION
// =============================================================================

/// Default session event bus broadcast channel capacity.
pub const SESSION_BUS_CAPACITY: usize = 32;

/// Environment variable overriding the master passphrase.
pub const ENV_MASTER_PASSPHRASE: &str = "VAULTIC_MASTER_PASSPHRASE";

/// Environment variable overriding the session bus capacity.
pub const ENV_EVENT_CAPACITY: &str = "VAULTIC_EVENT_CAPACITY";

/// Default fixed master passphrase.
///
/// A single shared passphrase is a deliberate (if weak) design choice of
/// this system, not an oversight; deployments override it via
/// [`ENV_MASTER_PASSPHRASE`].
pub const DEFAULT_MASTER_PASSPHRASE: &str = "password";

// =============================================================================
// EXPORT
// =============================================================================

/// Suggested file name for password collection exports.
pub const EXPORT_FILE_NAME: &str = "passwords-export.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lists_end_with_fallback() {
        assert_eq!(PASSWORD_CATEGORIES.last(), Some(&DEFAULT_CATEGORY));
        assert_eq!(NOTE_CATEGORIES.last(), Some(&DEFAULT_CATEGORY));
    }

    #[test]
    fn default_categories_cover_password_list() {
        let cats = default_categories();
        assert_eq!(cats.len(), PASSWORD_CATEGORIES.len());
        for (cat, name) in cats.iter().zip(PASSWORD_CATEGORIES) {
            assert_eq!(cat.name, *name);
            assert!(cat.color.starts_with('#'));
        }
    }

    #[test]
    fn generation_defaults_are_consistent() {
        const {
            assert!(GENERATED_LENGTH >= 8);
            assert!(SCORE_MAX == 6);
            assert!(STALE_DAYS == 90);
        }
        // Memorable symbols are a subset of the generator set's spirit but
        // kept short so the template stays typeable.
        assert!(MEMORABLE_SYMBOLS.len() < GENERATOR_SYMBOLS.len());
    }

    #[test]
    fn analysis_symbols_match_class_size() {
        // Entropy assumes a 32-character symbol class; the tested set is a
        // representative subset, not the full class.
        assert!(ANALYSIS_SYMBOLS.chars().count() <= 32);
    }
}
