// Newly introduced restrictions on competition
use super::{ClauseChange, RiskFinding};
use crate::extractors::extract_duration;
use crate::patterns::has_non_compete;
use shared_types::Severity;

pub const NON_COMPETE_ADDED: &str = "New non-compete restriction introduced";

/// Flags a non-compete that the original version did not contain.
///
/// Always High; the duration is only reported, never used to soften it.
pub fn check_non_compete(change: &ClauseChange) -> Option<RiskFinding> {
    if !has_non_compete(&change.new_lower) || has_non_compete(&change.old_lower) {
        return None;
    }

    let description = match extract_duration(change.new) {
        Some(duration) => format!("{} lasting {}", NON_COMPETE_ADDED, duration),
        None => NON_COMPETE_ADDED.to_string(),
    };
    Some(RiskFinding::new(Severity::High, description))
}
