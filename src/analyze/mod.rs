pub mod clarity;
pub mod keywords;
pub mod length;
pub mod repetition;
pub mod structure;

use crate::keywords::KeywordSets;
use crate::types::scoring::{Breakdown, Degeneracy, Evaluation};
use std::collections::HashSet;
use tracing::debug;

pub const REPETITION_THRESHOLD: f32 = 0.7;
pub const REPETITION_MIN_CHARS: usize = 10;

/// Scores a prompt against the fixed heuristic. Total over all inputs:
/// degenerate text (empty, character-dominated, single token) short-circuits
/// to zero, everything else sums four capped components and clamps to 100.
pub fn evaluate(text: &str, sets: &KeywordSets) -> Evaluation {
    let normalized = text.to_lowercase();
    let normalized = normalized.trim();
    let char_count = normalized.chars().count();
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let unique: HashSet<&str> = words.iter().copied().collect();
    let word_count = words.len();
    let unique_word_count = unique.len();

    if char_count == 0 {
        return Evaluation::degenerate(Degeneracy::Empty, word_count, unique_word_count, 0);
    }
    if repetition::is_highly_repetitive(normalized, REPETITION_THRESHOLD, REPETITION_MIN_CHARS) {
        return Evaluation::degenerate(
            Degeneracy::Repetitive,
            word_count,
            unique_word_count,
            char_count,
        );
    }
    if word_count < 2 {
        return Evaluation::degenerate(
            Degeneracy::SingleToken,
            word_count,
            unique_word_count,
            char_count,
        );
    }

    let breakdown = Breakdown {
        length: length::length_score(char_count, word_count, unique_word_count),
        action_keywords: keywords::action_score(normalized, sets),
        tech_keywords: keywords::tech_score(&words, sets),
        structure: structure::structure_score(normalized),
        clarity: clarity::clarity_score(normalized, word_count),
    };
    debug!(?breakdown, word_count, unique_word_count, "component scores");

    Evaluation::from_breakdown(breakdown, word_count, unique_word_count, char_count)
}
