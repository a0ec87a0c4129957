// Plain-text rendering of a comparison report
use shared_types::{ChangeType, DiffEntry, Report};
use std::fmt::Write;

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Risk score: {}/100", report.risk_score);
    let _ = writeln!(out, "Verdict: {}", report.verdict);
    let _ = writeln!(
        out,
        "Changes: {} added, {} removed, {} modified ({} total)",
        report.diffs_of(ChangeType::Added).count(),
        report.diffs_of(ChangeType::Removed).count(),
        report.diffs_of(ChangeType::Modified).count(),
        report.severity_counts().total()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", report.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", report.risk_report);

    for (i, diff) in report.diffs.iter().enumerate() {
        let _ = writeln!(out);
        render_diff(&mut out, i + 1, diff);
    }

    out
}

fn render_diff(out: &mut String, position: usize, diff: &DiffEntry) {
    let _ = writeln!(
        out,
        "[{}] {} ({}, {} severity, {:.1}% confidence)",
        position, diff.clause, diff.change_type, diff.severity, diff.confidence
    );
    let _ = writeln!(out, "    {}", diff.summary);

    if !diff.old_text.is_empty() {
        let _ = writeln!(out, "    - {}", diff.old_text);
    }
    if !diff.new_text.is_empty() {
        let _ = writeln!(out, "    + {}", diff.new_text);
    }
    if !diff.explanation.is_empty() {
        let _ = writeln!(out, "    Why it matters: {}", diff.explanation);
    }
    for suggestion in &diff.suggestions {
        let _ = writeln!(out, "    * {}", suggestion);
    }
}
