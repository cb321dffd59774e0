//! Password strength analysis.
//!
//! Pure, total scoring of a password string: every input (including the
//! empty string) produces a structurally valid [`PasswordAnalysis`]. The
//! classification intentionally runs on the *unclamped* internal score so
//! that compounding pattern penalties can push a password into the weak
//! band even when the clamped score reads higher.

use crate::defaults::{ANALYSIS_SYMBOLS, GUESSES_PER_SECOND, SCORE_MAX};
use crate::models::{PasswordAnalysis, Strength};

/// Weak substrings checked case-insensitively (except the digit run,
/// which has no case).
const WEAK_SUBSTRINGS: &[&str] = &["123456", "password", "qwerty", "abc"];

/// Character-class sizes used for the entropy estimate.
const LOWER_CLASS: u32 = 26;
const UPPER_CLASS: u32 = 26;
const DIGIT_CLASS: u32 = 10;
const SYMBOL_CLASS: u32 = 32;

/// Analyze a password and return strength, issues, suggestions, and an
/// entropy/crack-time estimate.
pub fn analyze_password(password: &str) -> PasswordAnalysis {
    if password.is_empty() {
        return PasswordAnalysis {
            strength: Strength::Weak,
            score: 0,
            issues: vec!["No password provided".to_string()],
            suggestions: vec!["Add a password".to_string()],
            entropy_bits: 0.0,
            estimated_crack_time: "Less than a minute".to_string(),
        };
    }

    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score: i32 = 0;

    // Length
    let length = password.chars().count();
    if length < 8 {
        issues.push("Password is too short".to_string());
        suggestions.push("Use at least 12 characters for better security".to_string());
    } else if length >= 12 {
        score += 2;
    } else {
        score += 1;
    }

    // Character variety
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| ANALYSIS_SYMBOLS.contains(c));

    if has_lower {
        score += 1;
    } else {
        issues.push("Missing lowercase letters".to_string());
        suggestions.push("Add lowercase letters (a-z)".to_string());
    }
    if has_upper {
        score += 1;
    } else {
        issues.push("Missing uppercase letters".to_string());
        suggestions.push("Add uppercase letters (A-Z)".to_string());
    }
    if has_digit {
        score += 1;
    } else {
        issues.push("Missing numbers".to_string());
        suggestions.push("Add numbers (0-9)".to_string());
    }
    if has_symbol {
        score += 1;
    } else {
        issues.push("Missing special characters".to_string());
        suggestions.push("Add special characters (!@#$%^&*)".to_string());
    }

    // Weak patterns; penalties compound across matches
    let lowered = password.to_lowercase();
    for pattern in WEAK_SUBSTRINGS {
        if lowered.contains(pattern) {
            issues.push("Contains common patterns".to_string());
            suggestions.push("Avoid common patterns and repeated characters".to_string());
            score -= 1;
        }
    }
    if has_repeated_run(password) {
        issues.push("Contains common patterns".to_string());
        suggestions.push("Avoid common patterns and repeated characters".to_string());
        score -= 1;
    }

    // Entropy over the classes actually present in the input
    let charset_size = (if has_lower { LOWER_CLASS } else { 0 })
        + (if has_upper { UPPER_CLASS } else { 0 })
        + (if has_digit { DIGIT_CLASS } else { 0 })
        + (if has_symbol { SYMBOL_CLASS } else { 0 });
    let entropy_bits = if charset_size == 0 {
        0.0
    } else {
        length as f64 * f64::from(charset_size).log2()
    };

    // Classification uses the unclamped score; order of checks matters when
    // penalties pushed the score negative.
    let strength = if score <= 3 || entropy_bits < 40.0 {
        Strength::Weak
    } else if score <= 5 || entropy_bits < 60.0 {
        Strength::Medium
    } else {
        Strength::Strong
    };

    PasswordAnalysis {
        strength,
        score: score.clamp(0, SCORE_MAX),
        issues,
        suggestions,
        entropy_bits,
        estimated_crack_time: estimate_crack_time(entropy_bits),
    }
}

/// True when any character repeats three or more times consecutively.
fn has_repeated_run(password: &str) -> bool {
    let mut run = 1usize;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
            prev = Some(c);
        }
    }
    false
}

/// Bucket an entropy estimate into a human-readable crack-time string,
/// assuming an attacker averaging half the keyspace at
/// [`GUESSES_PER_SECOND`] guesses per second.
pub fn estimate_crack_time(entropy_bits: f64) -> String {
    let seconds = (entropy_bits - 1.0).exp2() / GUESSES_PER_SECOND;

    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 86_400.0;
    const YEAR: f64 = 31_536_000.0;
    const MILLENNIUM_ISH: f64 = 31_536_000_000.0;

    if seconds < MINUTE {
        "Less than a minute".to_string()
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE).round() as u64)
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR).round() as u64)
    } else if seconds < YEAR {
        format!("{} days", (seconds / DAY).round() as u64)
    } else if seconds < MILLENNIUM_ISH {
        format!("{} years", (seconds / YEAR).round() as u64)
    } else {
        "Centuries".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_short_circuits() {
        let analysis = analyze_password("");
        assert_eq!(analysis.strength, Strength::Weak);
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.entropy_bits, 0.0);
        assert_eq!(analysis.issues, vec!["No password provided"]);
    }

    #[test]
    fn repeated_characters_flag_missing_classes_and_pattern() {
        let analysis = analyze_password("aaaaaaaa");
        assert_eq!(analysis.strength, Strength::Weak);
        assert!(analysis
            .issues
            .iter()
            .any(|i| i == "Missing uppercase letters"));
        assert!(analysis.issues.iter().any(|i| i == "Missing numbers"));
        assert!(analysis
            .issues
            .iter()
            .any(|i| i == "Missing special characters"));
        assert!(analysis
            .issues
            .iter()
            .any(|i| i == "Contains common patterns"));
    }

    #[test]
    fn all_classes_long_password_scores_strong() {
        // 14 chars, all four classes, no banned pattern
        let analysis = analyze_password("Tr0ub4dor&3Xyz");
        assert_eq!(analysis.score, 6);
        assert_eq!(analysis.strength, Strength::Strong);
    }

    #[test]
    fn strength_is_monotone_in_length() {
        let short = analyze_password("Ab1!");
        let long = analyze_password("Ab1!Ab1!Ab1!");
        assert!(short.strength <= long.strength);
        assert!(short.entropy_bits <= long.entropy_bits);
    }

    #[test]
    fn entropy_is_never_negative() {
        for input in ["", "a", "~~~~", "    ", "password", "日本語のことば"] {
            let analysis = analyze_password(input);
            assert!(
                analysis.entropy_bits >= 0.0,
                "negative entropy for {:?}",
                input
            );
        }
    }

    #[test]
    fn pattern_penalties_compound() {
        // "password" and "123456" both match, plus the digit run holds no
        // repeated char; two penalties apply.
        let analysis = analyze_password("password123456");
        let pattern_hits = analysis
            .issues
            .iter()
            .filter(|i| *i == "Contains common patterns")
            .count();
        assert_eq!(pattern_hits, 2);
        assert_eq!(analysis.strength, Strength::Weak);
    }

    #[test]
    fn weak_substrings_match_case_insensitively() {
        let analysis = analyze_password("QWERTYuiop!2Extra");
        assert!(analysis
            .issues
            .iter()
            .any(|i| i == "Contains common patterns"));
    }

    #[test]
    fn negative_internal_score_clamps_to_zero() {
        // Short, single-class, substring plus repeated-run penalties: the
        // internal score goes negative but the returned score is clamped.
        let analysis = analyze_password("aaabc");
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.strength, Strength::Weak);
    }

    #[test]
    fn score_never_exceeds_max() {
        let analysis = analyze_password("XkP9#mQ2$vL7@nR4!wT6");
        assert!(analysis.score <= 6);
    }

    #[test]
    fn repeated_run_detection() {
        assert!(has_repeated_run("aaa"));
        assert!(has_repeated_run("xxaaaxx"));
        assert!(!has_repeated_run("aabbaabb"));
        assert!(!has_repeated_run(""));
        assert!(!has_repeated_run("ab"));
    }

    #[test]
    fn crack_time_buckets() {
        assert_eq!(estimate_crack_time(0.0), "Less than a minute");
        assert_eq!(estimate_crack_time(30.0), "Less than a minute");
        // 2^39 / 1e9 ≈ 550 s → 9 minutes
        assert_eq!(estimate_crack_time(40.0), "9 minutes");
        // 2^46 / 1e9 ≈ 70369 s → 20 hours
        assert_eq!(estimate_crack_time(47.0), "20 hours");
        // 2^51 / 1e9 ≈ 2.25e6 s → 26 days
        assert_eq!(estimate_crack_time(52.0), "26 days");
        // 2^59 / 1e9 ≈ 5.76e8 s → 18 years
        assert_eq!(estimate_crack_time(60.0), "18 years");
        assert_eq!(estimate_crack_time(120.0), "Centuries");
    }

    #[test]
    fn medium_band_between_thresholds() {
        // 10 chars, all four classes: score 5, entropy ≈ 65.5 → medium
        let analysis = analyze_password("Xk9#mQ2$vL");
        assert_eq!(analysis.score, 5);
        assert_eq!(analysis.strength, Strength::Medium);
    }
}
