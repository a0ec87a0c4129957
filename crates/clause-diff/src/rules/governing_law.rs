// Governing law changes
use super::{ClauseChange, RiskFinding};
use crate::extractors::extract_state;
use crate::patterns::contains_any;
use shared_types::Severity;

pub const GOVERNING_LAW_CHANGED: &str = "Governing law changed";

const GOVERNING_LAW_KEYWORDS: &[&str] = &["governing law", "governed by", "laws of", "jurisdiction"];

/// Flags a move from one state's law to another's (Medium).
///
/// Both versions must name a state; a clause that drops or adds its only
/// state reference is left to the fallback.
pub fn check_governing_law(change: &ClauseChange) -> Option<RiskFinding> {
    let on_topic = contains_any(&change.title_lower, GOVERNING_LAW_KEYWORDS)
        || contains_any(&change.old_lower, GOVERNING_LAW_KEYWORDS)
        || contains_any(&change.new_lower, GOVERNING_LAW_KEYWORDS);
    if !on_topic {
        return None;
    }

    let old = extract_state(change.old)?;
    let new = extract_state(change.new)?;
    if old == new {
        return None;
    }

    Some(RiskFinding::new(
        Severity::Medium,
        format!("{} from {} to {}", GOVERNING_LAW_CHANGED, old, new),
    ))
}
