//! Narrative text for a comparison report
//!
//! Everything here is a pure function of the diffs, their severity counts and
//! the risk score.

use shared_types::{ChangeType, DiffEntry, Severity, SeverityCounts};

/// Most High-severity items named in a summary or risk narrative
const MAX_NAMED_CONCERNS: usize = 3;

pub const NO_DIFFERENCES_SUMMARY: &str =
    "No material differences were found between the two versions.";

pub const NO_SIGNIFICANT_RISK: &str =
    "No significant risk factors were identified. The changes are minor and unlikely to affect either party's position.";

const CALL_TO_ACTION: &str =
    "Review the flagged clauses with counsel before signing the revised version.";

pub fn severity_counts(diffs: &[DiffEntry]) -> SeverityCounts {
    SeverityCounts::from_diffs(diffs)
}

/// One-paragraph overview: change counts, severity counts, critical concerns
pub fn build_summary(diffs: &[DiffEntry], counts: &SeverityCounts) -> String {
    if diffs.is_empty() {
        return NO_DIFFERENCES_SUMMARY.to_string();
    }

    let count_of = |change_type: ChangeType| {
        diffs
            .iter()
            .filter(|d| d.change_type == change_type)
            .count()
    };
    let total = counts.total();

    let mut summary = format!(
        "Found {} {}: {} added, {} removed, {} modified {}.",
        total,
        plural(total, "difference", "differences"),
        count_of(ChangeType::Added),
        count_of(ChangeType::Removed),
        count_of(ChangeType::Modified),
        plural(total, "clause", "clauses"),
    );

    summary.push_str(&format!(
        " {} high-severity and {} medium-severity {}.",
        counts.high,
        counts.medium,
        plural(counts.high + counts.medium, "issue", "issues"),
    ));

    let concerns: Vec<String> = high_severity(diffs)
        .map(|d| first_sentence(&d.summary).to_string())
        .collect();
    if !concerns.is_empty() {
        summary.push_str(" Critical concerns: ");
        summary.push_str(&concerns.join("; "));
        summary.push('.');
    }

    summary
}

/// Overall assessment selected by risk score tier
pub fn build_verdict(risk_score: u8) -> String {
    let verdict = match risk_score {
        75.. => "The revised version carries significantly higher risk than the original. A thorough legal review is strongly recommended before signing.",
        50..=74 => "The revised version carries moderate to high risk. Consider renegotiating the flagged clauses before accepting it.",
        30..=49 => "The revised version contains notable differences that introduce moderate risk. Review the flagged changes carefully.",
        15..=29 => "The revised version contains minor to moderate changes. A brief review is recommended.",
        _ => "The two versions are substantially similar and the changes pose minimal risk.",
    };
    verdict.to_string()
}

/// Risk narrative naming the clauses that need attention
pub fn build_risk_report(diffs: &[DiffEntry], counts: &SeverityCounts) -> String {
    if counts.high == 0 && counts.medium == 0 {
        return NO_SIGNIFICANT_RISK.to_string();
    }

    let mut sentences = Vec::new();

    if counts.high > 0 {
        let titles: Vec<&str> = high_severity(diffs).map(|d| d.clause.as_str()).collect();
        sentences.push(format!(
            "{} high-severity {} found, including: {}.",
            counts.high,
            plural(counts.high, "change was", "changes were"),
            titles.join(", "),
        ));
    }

    if counts.medium > 0 {
        sentences.push(format!(
            "{} medium-severity {} should be reviewed.",
            counts.medium,
            plural(counts.medium, "change", "changes"),
        ));
    }

    sentences.push(CALL_TO_ACTION.to_string());
    sentences.join(" ")
}

fn high_severity(diffs: &[DiffEntry]) -> impl Iterator<Item = &DiffEntry> {
    diffs
        .iter()
        .filter(|d| d.severity == Severity::High)
        .take(MAX_NAMED_CONCERNS)
}

/// Rule description part of a summary, without the length note
fn first_sentence(summary: &str) -> &str {
    summary
        .split_once(". ")
        .map(|(head, _)| head)
        .unwrap_or(summary)
        .trim_end_matches('.')
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
