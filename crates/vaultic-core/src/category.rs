//! Keyword-based category suggestion.
//!
//! A heuristic, not a statistical model: a fixed table of category →
//! keyword lists is matched against the lowercased title and URL, and the
//! first category with the highest accumulated score wins.

use crate::defaults::DEFAULT_CATEGORY;
use crate::models::CategorySuggestion;

/// Fixed keyword table, in tie-break priority order.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Social Media",
        &[
            "facebook",
            "twitter",
            "instagram",
            "linkedin",
            "tiktok",
            "snapchat",
            "discord",
            "reddit",
            "youtube",
        ],
    ),
    (
        "Work",
        &[
            "work",
            "office",
            "company",
            "corporate",
            "business",
            "slack",
            "teams",
            "zoom",
            "jira",
            "confluence",
        ],
    ),
    (
        "Banking",
        &[
            "bank",
            "credit",
            "paypal",
            "stripe",
            "finance",
            "investment",
            "trading",
            "wallet",
            "crypto",
        ],
    ),
    (
        "Entertainment",
        &[
            "netflix",
            "spotify",
            "gaming",
            "steam",
            "xbox",
            "playstation",
            "twitch",
            "hulu",
            "disney",
        ],
    ),
    (
        "Shopping",
        &[
            "amazon",
            "ebay",
            "shop",
            "store",
            "retail",
            "cart",
            "buy",
            "purchase",
            "marketplace",
        ],
    ),
];

/// Suggest a category for a title/URL pair.
///
/// Each keyword substring match anywhere in the combined title+URL scores
/// +1, with a +0.5 bonus when the title equals the keyword exactly or the
/// URL contains it. Ties keep the first category in table order. A zero
/// total falls back to the default category at confidence 0.5.
pub fn suggest_category(title: &str, url: Option<&str>) -> CategorySuggestion {
    let title_lower = title.to_lowercase();
    let url_lower = url.unwrap_or_default().to_lowercase();
    let combined = format!("{} {}", title_lower, url_lower);

    let mut best: (&str, f64) = ("", 0.0);
    for (category, keywords) in CATEGORY_KEYWORDS {
        let mut score = 0.0;
        for keyword in *keywords {
            if combined.contains(keyword) {
                score += 1.0;
                if title_lower == *keyword || url_lower.contains(keyword) {
                    score += 0.5;
                }
            }
        }
        // Strictly greater keeps the first maximal category on ties
        if score > best.1 {
            best = (category, score);
        }
    }

    if best.1 == 0.0 {
        return CategorySuggestion {
            category: DEFAULT_CATEGORY.to_string(),
            confidence: 0.5,
            reasoning: "No specific category patterns detected".to_string(),
        };
    }

    CategorySuggestion {
        category: best.0.to_string(),
        confidence: (best.1 / 2.0).min(1.0),
        reasoning: format!(
            "Detected {} keywords in title/URL",
            best.0.to_lowercase()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facebook_login_is_social_media() {
        let suggestion = suggest_category("Facebook Login", Some("facebook.com"));
        assert_eq!(suggestion.category, "Social Media");
        assert!(suggestion.confidence > 0.5);
    }

    #[test]
    fn unmatched_title_falls_back_to_other() {
        let suggestion = suggest_category("Random Thing", Some(""));
        assert_eq!(suggestion.category, "Other");
        assert_eq!(suggestion.confidence, 0.5);
        assert_eq!(
            suggestion.reasoning,
            "No specific category patterns detected"
        );
    }

    #[test]
    fn missing_url_behaves_like_empty() {
        let with_none = suggest_category("Netflix", None);
        let with_empty = suggest_category("Netflix", Some(""));
        assert_eq!(with_none.category, "Entertainment");
        assert_eq!(with_none.category, with_empty.category);
    }

    #[test]
    fn exact_title_match_earns_bonus() {
        // "netflix" as the exact title: 1.0 + 0.5 bonus → confidence 0.75
        let suggestion = suggest_category("netflix", None);
        assert_eq!(suggestion.category, "Entertainment");
        assert!((suggestion.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn url_match_earns_bonus() {
        let suggestion = suggest_category("My Shows", Some("https://netflix.com/browse"));
        assert_eq!(suggestion.category, "Entertainment");
        assert!((suggestion.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn confidence_is_capped_at_one() {
        let suggestion = suggest_category(
            "amazon ebay shop store retail",
            Some("https://amazon.com/cart"),
        );
        assert_eq!(suggestion.category, "Shopping");
        assert_eq!(suggestion.confidence, 1.0);
    }

    #[test]
    fn ties_resolve_to_first_category_in_table_order() {
        // One keyword hit each for Social Media and Banking; Social Media
        // comes first in the table.
        let suggestion = suggest_category("reddit bank", None);
        assert_eq!(suggestion.category, "Social Media");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let suggestion = suggest_category("SLACK Workspace", None);
        assert_eq!(suggestion.category, "Work");
    }

    #[test]
    fn reasoning_names_the_winner() {
        let suggestion = suggest_category("PayPal", Some("paypal.com"));
        assert_eq!(suggestion.category, "Banking");
        assert!(suggestion.reasoning.contains("banking"));
    }
}
