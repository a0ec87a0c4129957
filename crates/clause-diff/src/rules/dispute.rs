// Dispute resolution forum changes
use super::{ClauseChange, RiskFinding};
use crate::patterns::contains_any;
use shared_types::Severity;

pub const FORUM_CHANGED: &str = "Dispute resolution changed";

const LITIGATION_KEYWORDS: &[&str] = &["court", "litigat", "judicial", "jury"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Forum {
    Arbitration,
    Litigation,
}

impl Forum {
    fn detect(text_lower: &str) -> Option<Self> {
        if text_lower.contains("arbitrat") {
            Some(Forum::Arbitration)
        } else if contains_any(text_lower, LITIGATION_KEYWORDS) {
            Some(Forum::Litigation)
        } else {
            None
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Forum::Arbitration => "arbitration",
            Forum::Litigation => "court litigation",
        }
    }
}

/// Flags a switch between arbitration and court litigation, either way (Medium)
pub fn check_dispute_resolution(change: &ClauseChange) -> Option<RiskFinding> {
    if !(change.mentions("dispute") || change.mentions("arbitrat")) {
        return None;
    }

    let old = Forum::detect(&change.old_lower)?;
    let new = Forum::detect(&change.new_lower)?;
    if old == new {
        return None;
    }

    Some(RiskFinding::new(
        Severity::Medium,
        format!("{} from {} to {}", FORUM_CHANGED, old.label(), new.label()),
    ))
}
