// Governing-law state lookup
use crate::jurisdiction::State;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Whole-word, case-insensitive alternation of every state name, longest
    /// first so "West Virginia" is preferred over "Virginia"
    static ref STATE_NAME_PATTERN: Regex = {
        let mut names: Vec<&str> = State::ALL.iter().map(|s| s.name()).collect();
        names.sort_by_key(|name| std::cmp::Reverse(name.len()));
        let alternation = names
            .iter()
            .map(|name| regex::escape(name).replace(' ', r"\s+"))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
    };
}

/// First US state named in the text, e.g. "laws of Delaware" -> DE
pub fn extract_state(text: &str) -> Option<State> {
    let found = STATE_NAME_PATTERN.find(text)?;
    let name = found.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
    State::parse_code(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_state() {
        assert_eq!(extract_state("laws of Delaware"), Some(State::DE));
        assert_eq!(extract_state("California jurisdiction"), Some(State::CA));
        assert_eq!(extract_state("no state mentioned"), None);
    }

    #[test]
    fn test_prefers_longest_name() {
        assert_eq!(extract_state("the laws of West Virginia"), Some(State::WV));
        assert_eq!(extract_state("courts of Arkansas"), Some(State::AR));
        assert_eq!(extract_state("the State of New\nYork"), Some(State::NY));
    }

    #[test]
    fn test_whole_words_only() {
        // "Kansas" inside "Arkansas" and "Maine" inside "Mainely" are not matches
        assert_eq!(extract_state("Mainely harmless text"), None);
        assert_eq!(extract_state("governed by the laws of texas"), Some(State::TX));
    }
}
