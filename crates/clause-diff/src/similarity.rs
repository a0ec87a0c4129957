//! Sequence similarity between two clause strings
//!
//! Ratcliff/Obershelp "gestalt" matching: find the longest common block,
//! recurse on the text to either side of it, and score `2 * M / T` where `M`
//! is the total length of matched blocks and `T` the combined length of both
//! strings. Comparison is over case-folded characters and preserves order.
//!
//! For a second operand of 200 or more characters, characters that make up
//! more than 1% of it are "popular": they never start a match, but a match
//! found from rarer characters is still extended across them. This keeps long
//! clauses fast and scores them the way `difflib.SequenceMatcher` does.
//!
//! An empty operand scores 0.0 so that two blank clauses are never treated
//! as equivalent.

use std::collections::HashMap;
use std::mem;

/// Second operands shorter than this keep every character as a match seed
const POPULAR_MIN_LEN: usize = 200;

/// Similarity ratio in [0, 1]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a = fold(a);
    let b = fold(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let matched = matching_chars(&a, &b);
    score(matched, a.len() + b.len())
}

/// Upper bound on [`ratio`] from shared character counts, ignoring order
pub fn quick_ratio(a: &str, b: &str) -> f64 {
    let a = fold(a);
    let b = fold(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut available: HashMap<char, usize> = HashMap::new();
    for &c in &b {
        *available.entry(c).or_insert(0) += 1;
    }

    let mut matched = 0;
    for c in &a {
        if let Some(count) = available.get_mut(c) {
            if *count > 0 {
                *count -= 1;
                matched += 1;
            }
        }
    }

    score(matched, a.len() + b.len())
}

/// Cheapest upper bound on [`ratio`], from lengths alone
pub fn real_quick_ratio(a: &str, b: &str) -> f64 {
    let la = fold(a).len();
    let lb = fold(b).len();
    if la == 0 || lb == 0 {
        return 0.0;
    }
    score(la.min(lb), la + lb)
}

fn fold(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

fn score(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (2.0 * matched as f64) / total as f64
    }
}

/// Positions of each character in `b`, without popular characters
fn seed_index(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    if b.len() >= POPULAR_MIN_LEN {
        let limit = b.len() / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= limit);
    }
    b2j
}

/// Run lengths of the previous and current row of `a`, indexed by `j + 1`.
///
/// Both rows are all zeros between rows; only touched slots are cleared.
struct RunRows {
    prev: Vec<usize>,
    curr: Vec<usize>,
    prev_touched: Vec<usize>,
    curr_touched: Vec<usize>,
}

impl RunRows {
    fn new(b_len: usize) -> Self {
        Self {
            prev: vec![0; b_len + 1],
            curr: vec![0; b_len + 1],
            prev_touched: Vec::new(),
            curr_touched: Vec::new(),
        }
    }

    fn set(&mut self, slot: usize, len: usize) {
        self.curr[slot] = len;
        self.curr_touched.push(slot);
    }

    /// Make the current row the previous one and start a fresh current row
    fn advance(&mut self) {
        self.clear_prev();
        mem::swap(&mut self.prev, &mut self.curr);
        mem::swap(&mut self.prev_touched, &mut self.curr_touched);
    }

    fn clear_prev(&mut self) {
        for &slot in &self.prev_touched {
            self.prev[slot] = 0;
        }
        self.prev_touched.clear();
    }
}

/// Total length of all matching blocks between `a` and `b`
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let b2j = seed_index(b);
    let mut rows = RunRows::new(b.len());

    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, &b2j, &mut rows, (alo, ahi), (blo, bhi));
        if size == 0 {
            continue;
        }
        total += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    total
}

/// Longest block `a[i..i+size] == b[j..j+size]` within the given ranges.
///
/// Ties resolve to the earliest block in `a`, then the earliest in `b`, so
/// the result is deterministic for identical inputs.
fn longest_match(
    a: &[char],
    b: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    rows: &mut RunRows,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                // prev[j] is the run ending at a[i - 1] and b[j - 1]
                let k = rows.prev[j] + 1;
                rows.set(j + 1, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        rows.advance();
    }
    rows.clear_prev();

    // Popular characters never seed a block but do extend one
    while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
        best_i -= 1;
        best_j -= 1;
        best_size += 1;
    }
    while best_i + best_size < ahi
        && best_j + best_size < bhi
        && a[best_i + best_size] == b[best_j + best_size]
    {
        best_size += 1;
    }

    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(ratio("Payment within 30 days", "Payment within 30 days"), 1.0);
    }

    #[test]
    fn test_case_folded() {
        assert_eq!(ratio("CONFIDENTIALITY", "confidentiality"), 1.0);
    }

    #[test]
    fn test_empty_operand_scores_zero() {
        assert_eq!(ratio("", ""), 0.0);
        assert_eq!(ratio("", "text"), 0.0);
        assert_eq!(ratio("text", ""), 0.0);
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_known_ratio() {
        // Matching blocks "a" and "cd": M = 3, T = 8
        assert!((ratio("abcd", "acdx") - 0.75).abs() < 1e-9);
        // "abxcd" vs "abcd": "ab" + "cd"
        assert!((ratio("abxcd", "abcd") - 8.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_matters() {
        // Same characters in reverse order share only one block
        assert!(ratio("abcdef", "fedcba") < 0.5);
        assert_eq!(quick_ratio("abcdef", "fedcba"), 1.0);
    }

    #[test]
    fn test_upper_bounds_hold() {
        let pairs = [
            ("fee of $10,000 within 30 days", "fee of $15,000 within 15 days"),
            ("Confidential for five (5) years", "Confidential for one (1) year"),
            ("short", "a considerably longer string"),
        ];
        for (a, b) in pairs {
            let exact = ratio(a, b);
            assert!(quick_ratio(a, b) >= exact);
            assert!(real_quick_ratio(a, b) >= quick_ratio(a, b));
        }
    }

    fn numbered_sections(offset: usize) -> String {
        (0..30)
            .map(|i| format!("section {} requires notice within {} days. ", i, i * 3 + offset))
            .collect()
    }

    #[test]
    fn test_long_clause_small_edit_is_material() {
        let old = "The Receiving Party shall hold all Confidential Information in strict \
                   confidence and shall not disclose it to any third party without the prior \
                   written consent of the Disclosing Party. The obligations in this Section \
                   survive termination of this Agreement for a period of five (5) years. Upon \
                   request, the Receiving Party shall promptly return or destroy all copies, \
                   including notes and analyses, and certify such destruction in writing.";
        let new = old.replace("five (5) years", "one (1) year");
        let sim = ratio(old, &new);
        // Same value difflib.SequenceMatcher reports for the lowercased pair
        assert!((sim - 0.6298850574712643).abs() < 1e-12, "got {}", sim);
    }

    #[test]
    fn test_text_of_only_popular_chars() {
        // Every character is popular, so only edge extension from the start matches
        let sim = ratio(&numbered_sections(0), &numbered_sections(1));
        assert!((sim - 0.1128084606345476).abs() < 1e-12, "got {}", sim);
    }

    #[test]
    fn test_short_operands_keep_every_seed() {
        // Under 200 characters nothing is popular
        let a = "a".repeat(150);
        let b = format!("{}b", "a".repeat(149));
        assert!((ratio(&a, &b) - 298.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_small_edit_stays_high() {
        let old = "Confidential information shall be protected for 5 years.";
        let new = "Confidential information shall be protected for 1 year.";
        let sim = ratio(old, new);
        // 54 matched chars out of 56 + 55
        assert!((sim - 108.0 / 111.0).abs() < 1e-9, "got {}", sim);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: ratio always lies in [0, 1]
        #[test]
        fn ratio_is_bounded(a in "\\PC{0,60}", b in "\\PC{0,60}") {
            let r = ratio(&a, &b);
            prop_assert!((0.0..=1.0).contains(&r));
        }

        /// Property: a non-empty string is fully similar to itself
        #[test]
        fn ratio_of_self_is_one(a in "[a-zA-Z0-9 ]{1,80}") {
            prop_assert_eq!(ratio(&a, &a), 1.0);
        }

        /// Property: quick ratios never underestimate the exact ratio
        #[test]
        fn quick_ratios_are_upper_bounds(a in "[a-e ]{0,40}", b in "[a-e ]{0,40}") {
            let exact = ratio(&a, &b);
            prop_assert!(quick_ratio(&a, &b) + 1e-12 >= exact);
            prop_assert!(real_quick_ratio(&a, &b) + 1e-12 >= exact);
        }
    }
}
