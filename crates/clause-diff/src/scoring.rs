//! Aggregate risk score for a set of diffs
//!
//! Every diff contributes base points for its severity, and diffs describing
//! a few well-known harmful changes earn a fixed bonus on top. The sum is
//! clamped to 0..=100, so adding a diff never lowers the score.

use crate::config::ScoringConfig;
use shared_types::{DiffEntry, Severity};

/// Summary phrases that earn extra points, matched case-insensitively
const CRITICAL_PHRASE_BONUSES: &[(&str, u32)] = &[
    ("confidentiality period reduced", 15),
    ("unlimited liability", 12),
    ("non-compete", 12),
    ("termination notice period reduced", 10),
];

pub const MAX_RISK_SCORE: u8 = 100;

pub fn risk_score(diffs: &[DiffEntry], config: &ScoringConfig) -> u8 {
    let total = diffs.iter().fold(0u32, |acc, diff| {
        acc.saturating_add(base_points(diff.severity, config))
            .saturating_add(phrase_bonus(&diff.summary))
    });

    total.min(u32::from(MAX_RISK_SCORE)) as u8
}

fn base_points(severity: Severity, config: &ScoringConfig) -> u32 {
    match severity {
        Severity::High => config.high,
        Severity::Medium => config.medium,
        Severity::Low => config.low,
    }
}

fn phrase_bonus(summary: &str) -> u32 {
    let summary = summary.to_lowercase();
    CRITICAL_PHRASE_BONUSES
        .iter()
        .filter(|(phrase, _)| summary.contains(phrase))
        .map(|(_, bonus)| *bonus)
        .fold(0u32, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ChangeType;

    pub(crate) fn diff(severity: Severity, summary: &str) -> DiffEntry {
        DiffEntry {
            clause: "Clause".to_string(),
            change_type: ChangeType::Modified,
            summary: summary.to_string(),
            old_text: String::new(),
            new_text: String::new(),
            severity,
            explanation: String::new(),
            suggestions: Vec::new(),
            confidence: 50.0,
        }
    }

    #[test]
    fn test_no_diffs_scores_zero() {
        assert_eq!(risk_score(&[], &ScoringConfig::default()), 0);
    }

    #[test]
    fn test_base_points() {
        let diffs = vec![
            diff(Severity::High, "Minor change"),
            diff(Severity::Medium, "Minor change"),
            diff(Severity::Low, "Minor change"),
        ];
        assert_eq!(risk_score(&diffs, &ScoringConfig::default()), 31);
    }

    #[test]
    fn test_critical_phrase_bonus() {
        let diffs = vec![diff(
            Severity::High,
            "Confidentiality period reduced from 5 years to 1 year. Wording and terms have been modified.",
        )];
        assert_eq!(risk_score(&diffs, &ScoringConfig::default()), 33);
    }

    #[test]
    fn test_each_phrase_bonus() {
        let config = ScoringConfig::default();
        let score = |summary: &str| risk_score(&[diff(Severity::High, summary)], &config);

        assert_eq!(score("Unlimited liability introduced. Wording and terms have been modified."), 30);
        assert_eq!(score("New non-compete restriction introduced"), 30);
        assert_eq!(score("Termination notice period reduced from 60 to 30 days"), 28);
    }

    #[test]
    fn test_bonuses_stack_within_one_summary() {
        let diffs = vec![diff(
            Severity::High,
            "Unlimited liability introduced alongside a new Non-Compete covenant",
        )];
        assert_eq!(risk_score(&diffs, &ScoringConfig::default()), 42);
    }

    #[test]
    fn test_bonuses_add_across_diffs() {
        let diffs = vec![
            diff(Severity::High, "Confidentiality period reduced from 5 years to 1 year"),
            diff(Severity::Medium, "Termination notice period reduced from 30 to 21 days"),
        ];
        // (18 + 15) + (10 + 10)
        assert_eq!(risk_score(&diffs, &ScoringConfig::default()), 53);
    }

    #[test]
    fn test_score_saturates_at_100() {
        let diffs: Vec<_> = (0..20)
            .map(|_| diff(Severity::High, "Unlimited liability introduced"))
            .collect();
        assert_eq!(risk_score(&diffs, &ScoringConfig::default()), 100);
    }

    #[test]
    fn test_custom_points() {
        let config = ScoringConfig {
            high: 40,
            medium: 5,
            low: 0,
        };
        let diffs = vec![
            diff(Severity::High, "Minor change"),
            diff(Severity::Low, "Minor change"),
        ];
        assert_eq!(risk_score(&diffs, &config), 40);
    }
}
