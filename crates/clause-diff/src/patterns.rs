//! Keyword banks and text helpers shared by the risk rules
//!
//! All keyword lists are lowercase stems matched against lowercased text.

/// Clause types whose rewrites are treated as high risk by the fallback rule
pub const HIGH_RISK_CLAUSE_TYPES: &[&str] = &[
    "confidential",
    "indemni",
    "liabilit",
    "intellectual property",
    "terminat",
    "non-compete",
    "arbitrat",
    "warrant",
    "payment",
];

/// Keywords that make a removed clause a critical loss
pub const REMOVED_CRITICAL_KEYWORDS: &[&str] = &[
    "confidential",
    "liabilit",
    "indemnif",
    "intellectual property",
    "warrant",
];

/// Keywords that make a removed clause an important loss
pub const REMOVED_IMPORTANT_KEYWORDS: &[&str] =
    &["terminat", "payment", "dispute", "governing law"];

/// Keywords that make an added clause critical
pub const ADDED_CRITICAL_KEYWORDS: &[&str] = &[
    "liabilit",
    "indemnif",
    "penalt",
    "liquidated damages",
];

/// Keywords that make an added clause notable
pub const ADDED_NOTABLE_KEYWORDS: &[&str] =
    &["confidential", "terminat", "obligat", "restrict"];

/// Phrases that introduce a restriction on competing
pub const NON_COMPETE_KEYWORDS: &[&str] = &[
    "non-compete",
    "noncompete",
    "non compete",
    "non-competition",
    "not to compete",
    "shall not compete",
    "will not compete",
];

/// Check if lowercased text contains any of the keywords
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}

/// Check if text restricts a party from competing
pub fn has_non_compete(text_lower: &str) -> bool {
    contains_any(text_lower, NON_COMPETE_KEYWORDS)
}

/// Truncate text to at most `limit` characters on a char boundary
pub fn excerpt(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any() {
        assert!(contains_any("limitation of liability", HIGH_RISK_CLAUSE_TYPES));
        assert!(!contains_any("notices", HIGH_RISK_CLAUSE_TYPES));
    }

    #[test]
    fn test_has_non_compete() {
        assert!(has_non_compete("the receiving party agrees not to compete"));
        assert!(has_non_compete("12. non-compete"));
        assert!(!has_non_compete("competitive pricing"));
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("é".repeat(10).as_str(), 3), "ééé");
        assert_eq!(excerpt("short", 800), "short");
    }
}
