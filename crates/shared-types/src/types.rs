use serde::{Deserialize, Serialize};

/// A titled or untitled span of agreement text, the unit of comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub title: String,          // Empty when no heading preceded the text
    pub number: Option<String>, // Leading numeral of "1. HEADING" style titles
    pub content: String,        // Whitespace-normalized body text
}

impl Clause {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            number: None,
            content: content.into(),
        }
    }

    pub fn numbered(
        number: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            number: Some(number.into()),
            content: content.into(),
        }
    }

    /// True if the clause has no body text worth reporting
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// How a pair of clauses was matched across the two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// Same leading clause number in both documents
    Number,
    /// Best weighted title + content similarity above the acceptance floor
    Similarity,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedPair {
    pub index_a: usize,
    pub index_b: usize,
    /// Content-only similarity in [0, 1]; drives materiality and severity
    pub similarity: f64,
    /// Evidence the match was accepted on (fixed for number matches)
    pub score: f64,
    pub method: MatchMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    Added,
    Removed,
    Modified,
}

/// Ordinal risk classification, declared low to high so `Ord` follows risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    pub clause: String,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub summary: String,
    pub old_text: String, // Truncated excerpt
    pub new_text: String, // Truncated excerpt
    pub severity: Severity,
    pub explanation: String, // Filled by an explanation collaborator, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    pub confidence: f64, // 0-100
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn from_diffs(diffs: &[DiffEntry]) -> Self {
        let mut counts = Self::default();
        for diff in diffs {
            match diff.severity {
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub risk_score: u8, // Always within 0..=100
    pub summary: String,
    pub verdict: String,
    pub risk_report: String,
    pub diffs: Vec<DiffEntry>,
}

impl Report {
    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts::from_diffs(&self.diffs)
    }

    pub fn diffs_of(&self, change_type: ChangeType) -> impl Iterator<Item = &DiffEntry> {
        self.diffs
            .iter()
            .filter(move |d| d.change_type == change_type)
    }
}
