//! Plain-language explanations and negotiation suggestions for diffs
//!
//! Explanations are advisory text only. They never change severity, score or
//! any other field of a diff.

use crate::error::ExplainError;
use crate::patterns::contains_any;
use shared_types::{ChangeType, DiffEntry, Severity};
use tracing::warn;

/// Explanation text and suggested counter-proposals for one diff
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub explanation: String,
    pub suggestions: Vec<String>,
}

/// Source of explanations, e.g. fixed templates or a hosted model
pub trait Explainer {
    fn explain(&self, diff: &DiffEntry) -> Result<Explanation, ExplainError>;
}

struct Topic {
    keywords: &'static [&'static str],
    explanation: &'static str,
    suggestions: [&'static str; 2],
}

/// Topical templates, checked in order against the old and new text
const TOPICS: &[Topic] = &[
    Topic {
        keywords: &["confidential"],
        explanation: "Confidentiality terms set how long and how strictly shared information must be protected. A shorter or weaker obligation can leave your own sensitive information exposed once the period ends.",
        suggestions: [
            "Ask for the same confidentiality period to apply to both parties",
            "Exclude information that is already public or independently developed",
        ],
    },
    Topic {
        keywords: &["payment", "fee", "$"],
        explanation: "Payment terms change what you owe and when you owe it. Check that any increase matches the value delivered and that deadlines leave enough time to process invoices.",
        suggestions: [
            "Tie payments to delivery milestones",
            "Cap annual increases at a fixed percentage",
        ],
    },
    Topic {
        keywords: &["liabilit", "indemnif"],
        explanation: "Liability terms decide how much you can lose if something goes wrong. Removing or raising a cap increases your financial exposure, sometimes without limit.",
        suggestions: [
            "Cap each party's liability at the fees paid under the agreement",
            "Limit uncapped exposure to gross negligence and willful misconduct",
        ],
    },
    Topic {
        keywords: &["terminat"],
        explanation: "Termination terms control how easily either side can leave the agreement. Shorter notice gives you less time to find a replacement or wind down work.",
        suggestions: [
            "Ask for equal termination rights and notice periods for both parties",
            "Add termination for convenience with reasonable notice",
        ],
    },
    Topic {
        keywords: &["intellectual property", "copyright", "patent"],
        explanation: "Intellectual property terms decide who owns the work and inventions produced under the agreement. Changes here can transfer valuable assets away from you.",
        suggestions: [
            "Keep ownership of materials you created before the agreement",
            "Request a license back to jointly developed work",
        ],
    },
];

/// Explainer backed by fixed topical templates
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExplainer;

impl TemplateExplainer {
    pub fn new() -> Self {
        Self
    }
}

impl Explainer for TemplateExplainer {
    fn explain(&self, diff: &DiffEntry) -> Result<Explanation, ExplainError> {
        let text = format!("{} {}", diff.old_text, diff.new_text).to_lowercase();

        if let Some(topic) = TOPICS.iter().find(|t| contains_any(&text, t.keywords)) {
            return Ok(Explanation {
                explanation: topic.explanation.to_string(),
                suggestions: topic.suggestions.iter().map(|s| s.to_string()).collect(),
            });
        }

        Ok(Explanation {
            explanation: generic_explanation(diff.severity).to_string(),
            suggestions: default_suggestions(diff.severity, diff.change_type),
        })
    }
}

fn generic_explanation(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "This change touches an important term and could materially affect your rights, obligations or exposure. Have it reviewed by counsel before accepting.",
        Severity::Medium => "This change alters your obligations or rights in a way worth confirming. Make sure the new wording matches what was agreed.",
        Severity::Low => "This looks like a wording change that does not alter the substance of the clause. Confirm it reads the way you expect.",
    }
}

/// Suggestions used when no topical template applies or the explainer fails
pub fn default_suggestions(severity: Severity, change_type: ChangeType) -> Vec<String> {
    let suggestions: [&str; 2] = match (severity, change_type) {
        (Severity::High, ChangeType::Added) => [
            "Ask for the new clause to be removed",
            "Propose reciprocal terms that bind both parties equally",
        ],
        (Severity::High, ChangeType::Removed) => [
            "Ask for the original clause to be reinstated",
            "Propose an alternative safeguard covering the same risk",
        ],
        (Severity::High, ChangeType::Modified) => [
            "Propose reverting to the original wording",
            "Ask for a written justification of the change",
        ],
        (Severity::Medium, _) => [
            "Ask for the business reason behind the change",
            "Propose compromise wording that addresses both parties' concerns",
        ],
        (Severity::Low, _) => [
            "Accept the change if the meaning is unchanged",
            "Ask for clarification of any ambiguous wording",
        ],
    };
    suggestions.iter().map(|s| s.to_string()).collect()
}

/// Attach explanations to every diff
///
/// A failing explainer leaves the diff with an empty explanation and the
/// default suggestions for its severity and change type.
pub fn enhance_diffs(diffs: &mut [DiffEntry], explainer: &dyn Explainer) {
    for diff in diffs.iter_mut() {
        match explainer.explain(diff) {
            Ok(explained) => {
                diff.explanation = explained.explanation;
                diff.suggestions = explained.suggestions;
            }
            Err(e) => {
                warn!(clause = %diff.clause, error = %e, "explanation failed, using defaults");
                diff.explanation = String::new();
                diff.suggestions = default_suggestions(diff.severity, diff.change_type);
            }
        }
    }
}
