//! Clause-level comparison of two versions of an agreement
//!
//! Both texts are split into clauses, clauses are paired across versions,
//! and every material change is classified by risk. The result is a
//! [`Report`] with per-clause diffs, an aggregate 0-100 risk score and
//! narrative summary text.
//!
//! ```no_run
//! use clause_diff::DiffEngine;
//!
//! let engine = DiffEngine::new();
//! let report = engine.compare("CONFIDENTIALITY\nKept secret for 5 years.",
//!                             "CONFIDENTIALITY\nKept secret for 1 year.")?;
//! println!("{} {}", report.risk_score, report.verdict);
//! # Ok::<(), clause_diff::DiffError>(())
//! ```

pub mod config;
pub mod error;
pub mod explain;
pub mod extractors;
pub mod jurisdiction;
pub mod matcher;
pub mod patterns;
pub mod report;
pub mod rules;
pub mod scoring;
pub mod segment;
pub mod similarity;

pub use config::EngineConfig;
pub use error::{ConfigError, DiffError, DocumentSide, ExplainError};
pub use explain::{enhance_diffs, Explainer, Explanation, TemplateExplainer};

use matcher::{match_clauses, unmatched_indices};
use patterns::excerpt;
use rules::{classify_change, ClauseChange, RiskFinding};
use segment::segment_clauses;
use shared_types::{ChangeType, Clause, DiffEntry, MatchedPair, Report};
use tracing::debug;

const REMOVED_NOTE: &str = "This clause was removed from the new version.";
const ADDED_NOTE: &str = "This is a new clause added in the new version.";

/// Word-count difference beyond which a change counts as an expansion or cut
const LENGTH_NOTE_WORDS: usize = 20;

/// DiffEngine entry point
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    config: EngineConfig,
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare two agreement texts, rejecting empty input
    pub fn compare(&self, original: &str, revised: &str) -> Result<Report, DiffError> {
        if original.trim().is_empty() {
            return Err(DiffError::EmptyInput {
                side: DocumentSide::Original,
            });
        }
        if revised.trim().is_empty() {
            return Err(DiffError::EmptyInput {
                side: DocumentSide::Revised,
            });
        }
        Ok(self.generate_report(original, revised))
    }

    /// Compare two agreement texts; empty input yields an empty or one-sided report
    pub fn generate_report(&self, original: &str, revised: &str) -> Report {
        let clauses_a = segment_clauses(original);
        let clauses_b = segment_clauses(revised);
        let matches = match_clauses(&clauses_a, &clauses_b, &self.config.matching);

        debug!(
            clauses_a = clauses_a.len(),
            clauses_b = clauses_b.len(),
            matched = matches.len(),
            "segmented and matched clauses"
        );

        let mut diffs: Vec<DiffEntry> = matches
            .iter()
            .filter_map(|pair| {
                self.modified_entry(pair, &clauses_a[pair.index_a], &clauses_b[pair.index_b])
            })
            .collect();

        for index in unmatched_indices(clauses_a.len(), matches.iter().map(|m| m.index_a)) {
            let clause = &clauses_a[index];
            if !clause.is_blank() {
                diffs.push(self.removed_entry(clause));
            }
        }

        for index in unmatched_indices(clauses_b.len(), matches.iter().map(|m| m.index_b)) {
            let clause = &clauses_b[index];
            if !clause.is_blank() {
                diffs.push(self.added_entry(clause));
            }
        }

        let risk_score = scoring::risk_score(&diffs, &self.config.scoring);
        let counts = report::severity_counts(&diffs);

        debug!(
            diffs = diffs.len(),
            high = counts.high,
            medium = counts.medium,
            low = counts.low,
            risk_score,
            "comparison complete"
        );

        Report {
            risk_score,
            summary: report::build_summary(&diffs, &counts),
            verdict: report::build_verdict(risk_score),
            risk_report: report::build_risk_report(&diffs, &counts),
            diffs,
        }
    }

    fn modified_entry(&self, pair: &MatchedPair, a: &Clause, b: &Clause) -> Option<DiffEntry> {
        if pair.similarity >= self.config.matching.materiality_threshold {
            return None;
        }
        if a.content == b.content {
            return None;
        }

        let title = if a.title.is_empty() { &b.title } else { &a.title };
        let change = ClauseChange::with_similarity(&a.content, &b.content, title, pair.similarity);
        let RiskFinding {
            severity,
            description,
        } = classify_change(&change);

        Some(DiffEntry {
            clause: label(title, "Unnamed Clause"),
            change_type: ChangeType::Modified,
            summary: format!("{}. {}", description, length_note(&a.content, &b.content)),
            old_text: excerpt(&a.content, self.config.report.excerpt_limit),
            new_text: excerpt(&b.content, self.config.report.excerpt_limit),
            severity,
            explanation: String::new(),
            suggestions: Vec::new(),
            confidence: (pair.similarity * 1000.0).round() / 10.0,
        })
    }

    fn removed_entry(&self, clause: &Clause) -> DiffEntry {
        let finding = rules::unmatched::classify_removed(clause);
        DiffEntry {
            clause: label(&clause.title, "Removed Clause"),
            change_type: ChangeType::Removed,
            summary: format!("{}. {}", finding.description, REMOVED_NOTE),
            old_text: excerpt(&clause.content, self.config.report.excerpt_limit),
            new_text: String::new(),
            severity: finding.severity,
            explanation: String::new(),
            suggestions: Vec::new(),
            confidence: 100.0,
        }
    }

    fn added_entry(&self, clause: &Clause) -> DiffEntry {
        let finding = rules::unmatched::classify_added(clause);
        DiffEntry {
            clause: label(&clause.title, "Added Clause"),
            change_type: ChangeType::Added,
            summary: format!("{}. {}", finding.description, ADDED_NOTE),
            old_text: String::new(),
            new_text: excerpt(&clause.content, self.config.report.excerpt_limit),
            severity: finding.severity,
            explanation: String::new(),
            suggestions: Vec::new(),
            confidence: 100.0,
        }
    }
}

fn label(title: &str, fallback: &str) -> String {
    if title.is_empty() {
        fallback.to_string()
    } else {
        title.to_string()
    }
}

/// Note on how the clause length changed, by word count
fn length_note(old: &str, new: &str) -> &'static str {
    let old_words = old.split_whitespace().count();
    let new_words = new.split_whitespace().count();

    if new_words > old_words + LENGTH_NOTE_WORDS {
        "Clause expanded with additional terms."
    } else if old_words > new_words + LENGTH_NOTE_WORDS {
        "Clause shortened, some terms removed."
    } else {
        "Wording and terms have been modified."
    }
}
