//! Risk pattern detection for changed clauses
//!
//! Each rule looks at one topic (confidentiality, payment, ...) and either
//! returns a finding or declines. Rules run in a fixed order and the first
//! finding wins; when every rule declines, severity falls back to how far the
//! clause text diverged.

pub mod attorney_fees;
pub mod confidentiality;
pub mod dispute;
pub mod governing_law;
pub mod liability;
pub mod non_compete;
pub mod payment;
pub mod term;
pub mod termination;
pub mod unmatched;

use crate::patterns::{contains_any, HIGH_RISK_CLAUSE_TYPES};
use crate::segment::WHOLE_DOCUMENT_TITLE;
use crate::similarity;
use shared_types::Severity;

/// Severity and human-readable description of a detected change
#[derive(Debug, Clone, PartialEq)]
pub struct RiskFinding {
    pub severity: Severity,
    pub description: String,
}

impl RiskFinding {
    pub fn new(severity: Severity, description: impl Into<String>) -> Self {
        Self {
            severity,
            description: description.into(),
        }
    }
}

/// A matched clause pair under evaluation
#[derive(Debug, Clone)]
pub struct ClauseChange<'a> {
    pub old: &'a str,
    pub new: &'a str,
    pub title: &'a str,
    pub old_lower: String,
    pub new_lower: String,
    pub title_lower: String,
    /// Content similarity of `old` and `new`
    pub similarity: f64,
}

impl<'a> ClauseChange<'a> {
    pub fn new(old: &'a str, new: &'a str, title: &'a str) -> Self {
        Self::with_similarity(old, new, title, similarity::ratio(old, new))
    }

    /// Build a change whose content similarity is already known
    pub fn with_similarity(old: &'a str, new: &'a str, title: &'a str, similarity: f64) -> Self {
        Self {
            old,
            new,
            title,
            old_lower: old.to_lowercase(),
            new_lower: new.to_lowercase(),
            title_lower: title.to_lowercase(),
            similarity,
        }
    }

    /// Keyword appears in the title or either version of the text
    pub fn mentions(&self, keyword: &str) -> bool {
        self.title_lower.contains(keyword)
            || self.old_lower.contains(keyword)
            || self.new_lower.contains(keyword)
    }

    /// Keyword appears in the title or the original text
    pub fn originally_about(&self, keyword: &str) -> bool {
        self.title_lower.contains(keyword) || self.old_lower.contains(keyword)
    }

    /// Keyword appears in the heading; the original text decides only when
    /// the clause has no heading of its own
    pub fn headed_about(&self, keyword: &str) -> bool {
        if self.is_untitled() {
            self.old_lower.contains(keyword)
        } else {
            self.title_lower.contains(keyword)
        }
    }

    fn is_untitled(&self) -> bool {
        let title = self.title.trim();
        title.is_empty() || title == WHOLE_DOCUMENT_TITLE
    }
}

type Rule = fn(&ClauseChange) -> Option<RiskFinding>;

/// Specialized rules, in priority order
const RULES: &[Rule] = &[
    confidentiality::check_confidentiality_period,
    termination::check_termination_notice,
    payment::check_payment_terms,
    liability::check_liability_cap,
    non_compete::check_non_compete,
    governing_law::check_governing_law,
    dispute::check_dispute_resolution,
    attorney_fees::check_attorney_fees,
    term::check_agreement_term,
];

/// Classify a change between two versions of a clause
pub fn detect_risk_patterns(old_text: &str, new_text: &str, clause_title: &str) -> RiskFinding {
    classify_change(&ClauseChange::new(old_text, new_text, clause_title))
}

/// Run the rule chain over a prepared change
pub fn classify_change(change: &ClauseChange) -> RiskFinding {
    RULES
        .iter()
        .find_map(|rule| rule(change))
        .unwrap_or_else(|| classify_by_similarity(change))
}

/// Severity from text divergence, weighted by clause type
pub fn classify_by_similarity(change: &ClauseChange) -> RiskFinding {
    let clause_type = if change.title_lower.trim().is_empty() {
        &change.old_lower
    } else {
        &change.title_lower
    };
    let high_risk_clause = contains_any(clause_type, HIGH_RISK_CLAUSE_TYPES);
    let sim = change.similarity;

    if sim < 0.4 && high_risk_clause {
        RiskFinding::new(Severity::High, "Significant change to critical clause")
    } else if sim < 0.6 && high_risk_clause {
        RiskFinding::new(Severity::Medium, "Moderate change to critical clause")
    } else if sim < 0.5 {
        RiskFinding::new(Severity::Medium, "Significant change")
    } else if sim < 0.8 {
        RiskFinding::new(Severity::Low, "Moderate wording change")
    } else {
        RiskFinding::new(Severity::Low, "Minor change")
    }
}

/// Fractional reduction from `old` to `new`; zero unless `new < old`
pub(crate) fn reduction(old: f64, new: f64) -> f64 {
    if old <= 0.0 || new >= old {
        0.0
    } else {
        (old - new) / old
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback(old: &str, new: &str, title: &str, similarity: f64) -> RiskFinding {
        classify_by_similarity(&ClauseChange::with_similarity(old, new, title, similarity))
    }

    #[test]
    fn test_fallback_thresholds_for_critical_clause() {
        assert_eq!(fallback("a", "b", "Warranty", 0.3).severity, Severity::High);
        assert_eq!(fallback("a", "b", "Warranty", 0.55).severity, Severity::Medium);
        assert_eq!(fallback("a", "b", "Warranty", 0.7).severity, Severity::Low);
    }

    #[test]
    fn test_fallback_thresholds_for_ordinary_clause() {
        assert_eq!(fallback("a", "b", "Notices", 0.3).severity, Severity::Medium);
        assert_eq!(fallback("a", "b", "Notices", 0.55).severity, Severity::Low);
        let minor = fallback("a", "b", "Notices", 0.9);
        assert_eq!(minor.severity, Severity::Low);
        assert_eq!(minor.description, "Minor change");
    }

    #[test]
    fn test_untitled_clause_uses_text_for_type() {
        let finding = fallback("The warranty lasts a while.", "Something else.", "", 0.3);
        assert_eq!(finding.severity, Severity::High);
    }

    #[test]
    fn test_first_rule_wins() {
        // Confidentiality rule fires before the term rule would
        let finding = detect_risk_patterns(
            "Confidential for the term of this agreement and 5 years",
            "Confidential for the term of this agreement and 1 year",
            "Term",
        );
        assert!(finding.description.starts_with(confidentiality::PERIOD_REDUCED));
    }

    #[test]
    fn test_unrelated_change_uses_fallback() {
        let finding = detect_risk_patterns(
            "Notices shall be sent by mail.",
            "Notices shall be sent by email.",
            "Notices",
        );
        assert_eq!(finding.severity, Severity::Low);
    }

    #[test]
    fn test_reduction() {
        assert_eq!(reduction(60.0, 30.0), 0.5);
        assert_eq!(reduction(30.0, 60.0), 0.0);
        assert_eq!(reduction(0.0, 0.0), 0.0);
    }
}
