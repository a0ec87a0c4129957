// Payment amount and deadline changes
use super::{ClauseChange, RiskFinding};
use crate::extractors::{extract_days, first_amount, format_amount};
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::Severity;

pub const AMOUNT_INCREASED: &str = "Payment amount increased";
pub const AMOUNT_DECREASED: &str = "Payment amount decreased";
pub const DEADLINE_SHORTENED: &str = "Payment deadline shortened";

/// Increase at or above this fraction of the original amount is High
const MATERIAL_INCREASE: f64 = 0.25;
/// A deadline cut of this many days is High whenever amounts are in play
const MATERIAL_DEADLINE_CUT: u32 = 15;

lazy_static! {
    // "fee", "fees" but not "feedback" or "coffee"
    static ref FEE_WORD: Regex = Regex::new(r"(?i)\bfees?\b").unwrap();
}

/// Flags changes to payment amounts and payment deadlines.
///
/// Only fires when at least one version states a dollar amount. An increase
/// of 25% or more is High, a smaller increase Medium, a decrease Low. A
/// deadline shortened by 15 days or more is High regardless of the amount.
pub fn check_payment_terms(change: &ClauseChange) -> Option<RiskFinding> {
    let about_fees = [change.title, change.old, change.new]
        .iter()
        .any(|text| FEE_WORD.is_match(text));
    if !(change.mentions("payment") || about_fees) {
        return None;
    }

    let old_amount = first_amount(change.old);
    let new_amount = first_amount(change.new);
    if old_amount.is_none() && new_amount.is_none() {
        return None;
    }

    let deadline_cut = match (extract_days(change.old), extract_days(change.new)) {
        (Some(old), Some(new)) if old.saturating_sub(new) >= MATERIAL_DEADLINE_CUT => {
            Some((old, new))
        }
        _ => None,
    };
    let deadline_note = deadline_cut
        .map(|(old, new)| format!("{} from {} to {} days", DEADLINE_SHORTENED, old, new));

    match (old_amount, new_amount) {
        (Some(old), Some(new)) if new > old => {
            let material = old <= 0.0 || (new - old) / old >= MATERIAL_INCREASE;
            let severity = if material || deadline_cut.is_some() {
                Severity::High
            } else {
                Severity::Medium
            };

            let mut description = format!(
                "{} from {} to {}",
                AMOUNT_INCREASED,
                format_amount(old),
                format_amount(new)
            );
            if old > 0.0 {
                description.push_str(&format!(" (+{:.0}%)", (new - old) / old * 100.0));
            }
            if let Some(note) = deadline_note {
                description.push_str("; ");
                description.push_str(&note.to_lowercase());
            }
            Some(RiskFinding::new(severity, description))
        }
        (Some(old), Some(new)) => match deadline_note {
            Some(note) => Some(RiskFinding::new(Severity::High, note)),
            None if new < old => Some(RiskFinding::new(
                Severity::Low,
                format!(
                    "{} from {} to {}",
                    AMOUNT_DECREASED,
                    format_amount(old),
                    format_amount(new)
                ),
            )),
            None => None,
        },
        _ => deadline_note.map(|note| RiskFinding::new(Severity::High, note)),
    }
}
