// Confidentiality period changes
use super::{reduction, ClauseChange, RiskFinding};
use crate::extractors::extract_duration;
use shared_types::Severity;

pub const PERIOD_REDUCED: &str = "Confidentiality period reduced";

/// Flags a shortened confidentiality period.
///
/// A cut of half or more of the original period is High, any smaller cut is
/// Medium. Periods are compared in months so "2 years" vs "18 months" works.
pub fn check_confidentiality_period(change: &ClauseChange) -> Option<RiskFinding> {
    if !change.originally_about("confidential") {
        return None;
    }

    let old = extract_duration(change.old)?;
    let new = extract_duration(change.new)?;
    if new.months() >= old.months() {
        return None;
    }

    let severity = if reduction(old.months() as f64, new.months() as f64) >= 0.5 {
        Severity::High
    } else {
        Severity::Medium
    };

    Some(RiskFinding::new(
        severity,
        format!("{} from {} to {}", PERIOD_REDUCED, old, new),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::detect_risk_patterns;

    fn check(old: &str, new: &str, title: &str) -> Option<RiskFinding> {
        check_confidentiality_period(&ClauseChange::new(old, new, title))
    }

    #[test]
    fn test_large_reduction_is_high() {
        let finding = detect_risk_patterns(
            "confidentiality obligations for a period of five (5) years",
            "confidentiality obligations for a period of one (1) year",
            "Confidentiality Period",
        );
        assert_eq!(finding.severity, Severity::High);
        assert!(finding.description.to_lowercase().contains("reduced"));
        assert!(finding.description.contains('5'));
        assert!(finding.description.contains('1'));
    }

    #[test]
    fn test_small_reduction_is_medium() {
        let finding = check(
            "Confidential information is protected for 5 years.",
            "Confidential information is protected for 4 years.",
            "CONFIDENTIALITY",
        )
        .unwrap();
        assert_eq!(finding.severity, Severity::Medium);
    }

    #[test]
    fn test_mixed_units() {
        let finding = check(
            "Confidential for 2 years.",
            "Confidential for 6 months.",
            "",
        )
        .unwrap();
        assert_eq!(finding.severity, Severity::High);
        assert_eq!(
            finding.description,
            "Confidentiality period reduced from 2 years to 6 months"
        );
    }

    #[test]
    fn test_extension_declines() {
        assert!(check("Confidential for 1 year.", "Confidential for 3 years.", "").is_none());
    }

    #[test]
    fn test_missing_period_declines() {
        // A period that disappears is not read as a reduction to zero
        assert!(check("Confidential for 5 years.", "Confidential indefinitely.", "").is_none());
        assert!(check("Confidential indefinitely.", "Confidential for 1 year.", "").is_none());
    }

    #[test]
    fn test_off_topic_declines() {
        assert!(check("Deliver within 5 years.", "Deliver within 1 year.", "Delivery").is_none());
    }
}
