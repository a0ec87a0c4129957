// Agreement term changes
use super::{ClauseChange, RiskFinding};
use crate::extractors::extract_duration;
use crate::patterns::contains_any;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::Severity;

pub const TERM_EXTENDED: &str = "Agreement term extended";

const TERM_PHRASES: &[&str] = &["term of this agreement", "initial term", "agreement term"];

lazy_static! {
    // "Term", "3. TERM" but not "Terms", "Termination" or "Determine"
    static ref TERM_WORD: Regex = Regex::new(r"(?i)\bterm\b").unwrap();
}

/// Flags a longer agreement term (Medium). Shorter terms are left to the
/// fallback.
pub fn check_agreement_term(change: &ClauseChange) -> Option<RiskFinding> {
    let titled_term =
        TERM_WORD.is_match(change.title) && !change.title_lower.contains("terminat");
    if !titled_term && !contains_any(&change.old_lower, TERM_PHRASES) {
        return None;
    }

    let old = extract_duration(change.old)?;
    let new = extract_duration(change.new)?;
    if new.months() <= old.months() {
        return None;
    }

    Some(RiskFinding::new(
        Severity::Medium,
        format!("{} from {} to {}", TERM_EXTENDED, old, new),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(old: &str, new: &str, title: &str) -> Option<RiskFinding> {
        check_agreement_term(&ClauseChange::new(old, new, title))
    }

    #[test]
    fn test_extended_term_is_medium() {
        let finding = check(
            "This Agreement continues for one (1) year.",
            "This Agreement continues for three (3) years.",
            "2. TERM",
        )
        .unwrap();
        assert_eq!(finding.severity, Severity::Medium);
        assert_eq!(finding.description, "Agreement term extended from 1 year to 3 years");
    }

    #[test]
    fn test_term_phrase_in_text() {
        let finding = check(
            "The initial term is 12 months.",
            "The initial term is 24 months.",
            "",
        );
        assert!(finding.is_some());
    }

    #[test]
    fn test_termination_title_declines() {
        assert!(check("Lasts 1 year.", "Lasts 2 years.", "Term and Termination").is_none());
    }

    #[test]
    fn test_payment_terms_title_declines() {
        assert!(check("Lasts 1 year.", "Lasts 2 years.", "Payment Terms").is_none());
    }

    #[test]
    fn test_shorter_term_declines() {
        assert!(check("Lasts 3 years.", "Lasts 1 year.", "Term").is_none());
    }
}
