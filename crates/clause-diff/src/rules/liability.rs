// Liability cap changes
use super::{ClauseChange, RiskFinding};
use crate::extractors::{first_amount, format_amount};
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::Severity;

pub const UNLIMITED_LIABILITY: &str = "Unlimited liability introduced";
pub const CAP_REMOVED: &str = "Liability cap removed";
pub const CAP_INCREASED: &str = "Liability cap increased";

lazy_static! {
    // "cap", "caps", "capped" but not "capacity" or "capital"
    static ref CAP_WORD: Regex = Regex::new(r"(?i)\bcap(?:s|ped)?\b").unwrap();
}

/// Flags loss or loosening of a liability limit.
///
/// High when "unlimited" appears for the first time, when a capped amount
/// disappears, or when the word "cap" disappears. A cap that survives with a
/// larger amount is Medium.
pub fn check_liability_cap(change: &ClauseChange) -> Option<RiskFinding> {
    if !(change.originally_about("liabilit") || change.originally_about("indemnif")) {
        return None;
    }

    if change.new_lower.contains("unlimited") && !change.old_lower.contains("unlimited") {
        return Some(RiskFinding::new(
            Severity::High,
            format!("{}; {}", UNLIMITED_LIABILITY, CAP_REMOVED.to_lowercase()),
        ));
    }

    let old_amount = first_amount(change.old);
    let new_amount = first_amount(change.new);

    if let (Some(old), None) = (old_amount, new_amount) {
        return Some(RiskFinding::new(
            Severity::High,
            format!("{} (previously {})", CAP_REMOVED, format_amount(old)),
        ));
    }

    if CAP_WORD.is_match(change.old) && !CAP_WORD.is_match(change.new) {
        return Some(RiskFinding::new(Severity::High, CAP_REMOVED));
    }

    match (old_amount, new_amount) {
        (Some(old), Some(new)) if new > old => Some(RiskFinding::new(
            Severity::Medium,
            format!(
                "{} from {} to {}",
                CAP_INCREASED,
                format_amount(old),
                format_amount(new)
            ),
        )),
        _ => None,
    }
}
