//! Clause segmentation
//!
//! Splits plain agreement text into an ordered list of [`Clause`] records.
//! A clause runs from one heading to the next heading; blank lines inside a
//! clause are ignored rather than treated as boundaries, so paragraphs of the
//! same section stay together.
//!
//! A line is a heading when it is:
//! - ALL CAPS and 4 to 99 characters long ("CONFIDENTIALITY AGREEMENT")
//! - under 100 characters and ends with a colon ("Payment Terms:")
//! - a numbered capitalized heading ("3. TERMINATION")

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::Clause;

lazy_static! {
    static ref NUMBERED_HEADING: Regex = Regex::new(r"^\d+\.\s*[A-Z][A-Z\s]+$").unwrap();
    static ref LEADING_NUMBER: Regex = Regex::new(r"^(\d+)\.").unwrap();
}

/// Title used when a document has no recognizable clause structure
pub const WHOLE_DOCUMENT_TITLE: &str = "Document";

const MIN_CAPS_HEADING_LEN: usize = 4;
const MAX_HEADING_LEN: usize = 100;

/// Segment document text into clauses using heading boundaries
pub fn segment_clauses(text: &str) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let mut title = String::new();
    let mut content = String::new();

    for line in text.lines() {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }

        if is_heading(stripped) {
            flush(&mut clauses, &title, &mut content);
            title = stripped.to_string();
        } else {
            content.push_str(stripped);
            content.push(' ');
        }
    }
    flush(&mut clauses, &title, &mut content);

    if clauses.is_empty() {
        clauses.push(Clause::new(WHOLE_DOCUMENT_TITLE, normalize_whitespace(text)));
    }

    clauses
}

/// Check whether a trimmed, non-empty line is a clause heading
pub fn is_heading(line: &str) -> bool {
    let len = line.chars().count();

    let all_caps = (MIN_CAPS_HEADING_LEN..MAX_HEADING_LEN).contains(&len) && is_upper(line);
    let colon_terminated = len < MAX_HEADING_LEN && line.ends_with(':');

    all_caps || colon_terminated || NUMBERED_HEADING.is_match(line)
}

/// Leading clause number of a heading such as "12. GOVERNING LAW"
pub fn heading_number(heading: &str) -> Option<String> {
    LEADING_NUMBER
        .captures(heading)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Collapse runs of whitespace to single spaces and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn flush(clauses: &mut Vec<Clause>, title: &str, content: &mut String) {
    let body = normalize_whitespace(content);
    content.clear();
    if body.is_empty() {
        return;
    }

    clauses.push(Clause {
        title: title.to_string(),
        number: heading_number(title),
        content: body,
    });
}

/// At least one cased letter, and no lowercase letters
fn is_upper(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numbered_headings() {
        let text = "
1. CONFIDENTIALITY
This is the confidentiality clause.

2. PAYMENT TERMS
This is the payment clause.

3. TERMINATION
This is the termination clause.
";
        let clauses = segment_clauses(text);
        assert_eq!(
            clauses,
            vec![
                Clause::numbered("1", "1. CONFIDENTIALITY", "This is the confidentiality clause."),
                Clause::numbered("2", "2. PAYMENT TERMS", "This is the payment clause."),
                Clause::numbered("3", "3. TERMINATION", "This is the termination clause."),
            ]
        );
    }

    #[test]
    fn test_blank_lines_do_not_split_a_clause() {
        let text = "PAYMENT\nFirst paragraph.\n\nSecond paragraph.\n";
        let clauses = segment_clauses(text);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].content, "First paragraph. Second paragraph.");
    }

    #[test]
    fn test_consecutive_headings_keep_the_last() {
        let text = "CONFIDENTIALITY AGREEMENT\n\n1. CONFIDENTIAL INFORMATION\nKeep it secret.";
        let clauses = segment_clauses(text);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].title, "1. CONFIDENTIAL INFORMATION");
        assert_eq!(clauses[0].number.as_deref(), Some("1"));
    }

    #[test]
    fn test_untitled_leading_clause() {
        let text = "This Agreement is made between the parties.\nGoverning Law:\nDelaware law applies.";
        let clauses = segment_clauses(text);
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].title, "");
        assert_eq!(clauses[0].number, None);
        assert_eq!(clauses[1].title, "Governing Law:");
    }

    #[test]
    fn test_no_structure_falls_back_to_whole_document() {
        let clauses = segment_clauses("");
        assert_eq!(clauses, vec![Clause::new(WHOLE_DOCUMENT_TITLE, "")]);

        let clauses = segment_clauses("TERMS\nDEFINITIONS");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].title, WHOLE_DOCUMENT_TITLE);
        assert_eq!(clauses[0].content, "TERMS DEFINITIONS");
    }

    #[test]
    fn test_heading_rules() {
        assert!(is_heading("INDEMNIFICATION"));
        assert!(is_heading("Payment Terms:"));
        assert!(is_heading("4. GOVERNING LAW"));
        assert!(!is_heading("ABC")); // too short for caps rule
        assert!(!is_heading("Payment is due within 30 days."));
        assert!(!is_heading("4. Governing law applies"));
        assert!(!is_heading("$10,000"));
        assert!(!is_heading(&"A".repeat(100)));
    }

    #[test]
    fn test_heading_number() {
        assert_eq!(heading_number("12. GOVERNING LAW"), Some("12".to_string()));
        assert_eq!(heading_number("12. Notices:"), Some("12".to_string()));
        assert_eq!(heading_number("GOVERNING LAW"), None);
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let clauses = segment_clauses("NOTICES\n   Notices   must be\twritten.   ");
        assert_eq!(clauses[0].content, "Notices must be written.");
    }
}
