//! Security recommendation aggregation over the password collection.
//!
//! Emission order is fixed: weak-password critical, duplicate warning,
//! staleness info, MFA-adoption info. Each recommendation appears at most
//! once and is omitted entirely when its trigger is false.

use std::collections::HashMap;

use chrono::{Duration, Utc};

use crate::analysis::analyze_password;
use crate::defaults::{MFA_PROMPT_THRESHOLD, STALE_DAYS};
use crate::models::{PasswordEntry, SecurityRecommendation, Severity, Strength};

/// Plural suffix helper for recommendation titles.
fn plural(count: usize) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

/// Produce the ordered recommendation list for the full collection.
pub fn security_recommendations(entries: &[PasswordEntry]) -> Vec<SecurityRecommendation> {
    let mut recommendations = Vec::new();

    // Weak passwords
    let weak: Vec<&PasswordEntry> = entries
        .iter()
        .filter(|e| analyze_password(&e.password).strength == Strength::Weak)
        .collect();
    if !weak.is_empty() {
        recommendations.push(SecurityRecommendation {
            severity: Severity::Critical,
            title: format!("{} Weak Password{} Found", weak.len(), plural(weak.len())),
            description: "Weak passwords are vulnerable to attacks and should be updated immediately.".to_string(),
            action: "Update weak passwords with stronger alternatives".to_string(),
            entry_id: Some(weak[0].id),
        });
    }

    // Duplicate passwords; the count is the number of groups, not members
    let mut groups: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *groups.entry(entry.password.as_str()).or_insert(0) += 1;
    }
    let duplicate_groups = groups.values().filter(|&&n| n > 1).count();
    if duplicate_groups > 0 {
        recommendations.push(SecurityRecommendation {
            severity: Severity::Warning,
            title: format!(
                "{} Duplicate Password{} Found",
                duplicate_groups,
                plural(duplicate_groups)
            ),
            description: "Using the same password for multiple accounts increases security risk.".to_string(),
            action: "Create unique passwords for each account".to_string(),
            entry_id: None,
        });
    }

    // Stale passwords
    let stale_cutoff = Utc::now() - Duration::days(STALE_DAYS);
    let stale = entries.iter().filter(|e| e.updated_at < stale_cutoff).count();
    if stale > 0 {
        recommendations.push(SecurityRecommendation {
            severity: Severity::Info,
            title: format!("{} Password{} Not Updated Recently", stale, plural(stale)),
            description: format!(
                "Consider updating passwords that haven't been changed in over {} days.",
                STALE_DAYS
            ),
            action: "Review and update old passwords".to_string(),
            entry_id: None,
        });
    }

    // General nudge once the collection grows
    if entries.len() > MFA_PROMPT_THRESHOLD {
        recommendations.push(SecurityRecommendation {
            severity: Severity::Info,
            title: "Enable Two-Factor Authentication".to_string(),
            description: "Add an extra layer of security to your most important accounts.".to_string(),
            action: "Set up 2FA for critical accounts".to_string(),
            entry_id: None,
        });
    }

    recommendations
}
