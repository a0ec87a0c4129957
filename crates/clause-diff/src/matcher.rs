//! Clause matching across two document versions
//!
//! Greedy, one-to-one, in the order of the original document:
//!
//! 1. A clause with a leading number pairs with the first unused revised
//!    clause carrying the same number.
//! 2. Otherwise every unused revised clause is scored by weighted title and
//!    content similarity, and the best candidate above the acceptance floor
//!    wins. Ties keep the earliest revised clause.
//!
//! Clauses without body text take no part in matching.
//!
//! The stored `similarity` of every pair is content-only, so severity is
//! judged on how the body text diverged regardless of title rewrites.

use crate::config::MatchingConfig;
use crate::similarity::{quick_ratio, ratio, real_quick_ratio};
use shared_types::{Clause, MatchMethod, MatchedPair};
use tracing::trace;

/// Pair clauses of `a` with clauses of `b`
pub fn match_clauses(a: &[Clause], b: &[Clause], config: &MatchingConfig) -> Vec<MatchedPair> {
    let mut matches = Vec::new();
    let mut used_b = vec![false; b.len()];

    for (index_a, clause_a) in a.iter().enumerate() {
        if clause_a.is_blank() {
            continue;
        }

        if let Some(pair) = match_by_number(index_a, clause_a, b, &used_b, config) {
            trace!(index_a, index_b = pair.index_b, "matched by clause number");
            used_b[pair.index_b] = true;
            matches.push(pair);
            continue;
        }

        if let Some(pair) = match_by_similarity(index_a, clause_a, b, &used_b, config) {
            trace!(
                index_a,
                index_b = pair.index_b,
                score = pair.score,
                "matched by similarity"
            );
            used_b[pair.index_b] = true;
            matches.push(pair);
        }
    }

    matches
}

fn match_by_number(
    index_a: usize,
    clause_a: &Clause,
    b: &[Clause],
    used_b: &[bool],
    config: &MatchingConfig,
) -> Option<MatchedPair> {
    let number = clause_a.number.as_deref()?;

    b.iter()
        .enumerate()
        .find(|(j, clause_b)| {
            !used_b[*j] && !clause_b.is_blank() && clause_b.number.as_deref() == Some(number)
        })
        .map(|(index_b, clause_b)| MatchedPair {
            index_a,
            index_b,
            similarity: ratio(&clause_a.content, &clause_b.content),
            score: config.number_match_score,
            method: MatchMethod::Number,
        })
}

fn match_by_similarity(
    index_a: usize,
    clause_a: &Clause,
    b: &[Clause],
    used_b: &[bool],
    config: &MatchingConfig,
) -> Option<MatchedPair> {
    let title_weight = config.title_weight;
    let content_weight = config.content_weight();

    let mut best: Option<(usize, f64, f64)> = None; // (index_b, score, content similarity)
    let mut best_score = config.acceptance_floor;

    for (index_b, clause_b) in b.iter().enumerate() {
        if used_b[index_b] || clause_b.is_blank() {
            continue;
        }

        let title_sim = ratio(&clause_a.title, &clause_b.title);
        let title_part = title_weight * title_sim;

        // Skip the exact content comparison when even a perfect-looking
        // upper bound cannot beat the current best
        if title_part + content_weight * real_quick_ratio(&clause_a.content, &clause_b.content)
            <= best_score
        {
            continue;
        }
        if title_part + content_weight * quick_ratio(&clause_a.content, &clause_b.content)
            <= best_score
        {
            continue;
        }

        let content_sim = ratio(&clause_a.content, &clause_b.content);
        let score = title_part + content_weight * content_sim;
        if score > best_score {
            best_score = score;
            best = Some((index_b, score, content_sim));
        }
    }

    best.map(|(index_b, score, similarity)| MatchedPair {
        index_a,
        index_b,
        similarity,
        score,
        method: MatchMethod::Similarity,
    })
}

/// Indices of `count` clauses not covered by `matched`
pub fn unmatched_indices(count: usize, matched: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut covered = vec![false; count];
    for index in matched {
        if index < count {
            covered[index] = true;
        }
    }
    (0..count).filter(|i| !covered[*i]).collect()
}
