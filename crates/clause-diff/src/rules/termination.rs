// Termination notice changes
use super::{reduction, ClauseChange, RiskFinding};
use crate::extractors::extract_days;
use shared_types::Severity;

pub const NOTICE_REDUCED: &str = "Termination notice period reduced";

/// Flags a shortened termination notice period.
///
/// Only clauses headed as termination clauses qualify, so a payment clause
/// that merely mentions termination keeps its payment finding. A cut of 40%
/// or more is High, 20% or more is Medium; smaller cuts are left to the
/// similarity fallback.
pub fn check_termination_notice(change: &ClauseChange) -> Option<RiskFinding> {
    if !change.headed_about("terminat") {
        return None;
    }

    let old = extract_days(change.old)?;
    let new = extract_days(change.new)?;
    let cut = reduction(f64::from(old), f64::from(new));

    let severity = if cut >= 0.4 {
        Severity::High
    } else if cut >= 0.2 {
        Severity::Medium
    } else {
        return None;
    };

    Some(RiskFinding::new(
        severity,
        format!("{} from {} to {} days", NOTICE_REDUCED, old, new),
    ))
}
