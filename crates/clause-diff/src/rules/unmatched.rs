// Severity of clauses present in only one version
use super::RiskFinding;
use crate::patterns::{
    contains_any, has_non_compete, ADDED_CRITICAL_KEYWORDS, ADDED_NOTABLE_KEYWORDS,
    REMOVED_CRITICAL_KEYWORDS, REMOVED_IMPORTANT_KEYWORDS,
};
use shared_types::{Clause, Severity};

/// Classify a clause that exists only in the original version
pub fn classify_removed(clause: &Clause) -> RiskFinding {
    let text = clause_text(clause);

    if contains_any(&text, REMOVED_CRITICAL_KEYWORDS) {
        RiskFinding::new(Severity::High, "A critical protection was removed")
    } else if contains_any(&text, REMOVED_IMPORTANT_KEYWORDS) {
        RiskFinding::new(Severity::Medium, "An important term was removed")
    } else {
        RiskFinding::new(Severity::Low, "A minor provision was removed")
    }
}

/// Classify a clause that exists only in the revised version
pub fn classify_added(clause: &Clause) -> RiskFinding {
    let text = clause_text(clause);

    if has_non_compete(&text) {
        RiskFinding::new(Severity::High, "A new non-compete restriction was added")
    } else if contains_any(&text, ADDED_CRITICAL_KEYWORDS) {
        RiskFinding::new(Severity::High, "A new liability or penalty provision was added")
    } else if contains_any(&text, ADDED_NOTABLE_KEYWORDS) {
        RiskFinding::new(Severity::Medium, "A new obligation or restriction was added")
    } else {
        RiskFinding::new(Severity::Low, "A minor provision was added")
    }
}

fn clause_text(clause: &Clause) -> String {
    format!("{} {}", clause.title, clause.content).to_lowercase()
}
