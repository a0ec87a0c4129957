use super::{ClauseChange, RiskFinding};
use shared_types::Severity;

pub const PREVAILING_PARTY_REMOVED: &str = "Prevailing party fee-shifting provision removed";
pub const RECIPROCAL_FEES_REMOVED: &str = "Reciprocal attorney fee provision removed";

/// Flags the loss of a reciprocal attorney fee clause.
///
/// "Prevailing party" language lets whichever side wins recover its legal
/// fees. Losing it, or losing other mutual fee language ("either party",
/// "both parties"), is Medium. If the revised text makes one side pay the
/// other's fees, the finding says so.
pub fn check_attorney_fees(change: &ClauseChange) -> Option<RiskFinding> {
    let on_topic = change.mentions("attorney")
        || change.mentions("legal fee")
        || change.mentions("legal cost");
    if !on_topic {
        return None;
    }

    let had_prevailing_party = change.old_lower.contains("prevailing party");
    let has_prevailing_party = change.new_lower.contains("prevailing party");

    let mut description = if had_prevailing_party && !has_prevailing_party {
        PREVAILING_PARTY_REMOVED.to_string()
    } else if is_reciprocal(&change.old_lower) && !is_reciprocal(&change.new_lower) {
        RECIPROCAL_FEES_REMOVED.to_string()
    } else {
        return None;
    };

    if shifts_fees_one_way(&change.new_lower) {
        description.push_str("; revised terms make one party bear the other's fees");
    }

    Some(RiskFinding::new(Severity::Medium, description))
}

/// Check for mutual fee recovery language
fn is_reciprocal(text_lower: &str) -> bool {
    text_lower.contains("prevailing party")
        || text_lower.contains("either party")
        || text_lower.contains("both parties")
}

/// Check if one party must pay the other's attorney fees or legal costs
fn shifts_fees_one_way(text_lower: &str) -> bool {
    let pays = text_lower.contains("shall pay")
        || text_lower.contains("agrees to pay")
        || text_lower.contains("will pay")
        || text_lower.contains("shall reimburse");
    let fees = text_lower.contains("attorney") || text_lower.contains("legal");

    pays && fees && !is_reciprocal(text_lower)
}
