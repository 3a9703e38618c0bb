use crate::keywords::KeywordSets;

pub const ACTION_POINTS: u32 = 3;
pub const ACTION_CAP: u32 = 20;
pub const TECH_POINTS: u32 = 4;
pub const TECH_CAP: u32 = 20;

const TRAILING_PUNCT: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Whole-word action keyword matches over the normalized text, 3 points
/// each, capped at 20. A keyword counts once however often it appears.
pub fn action_score(text: &str, sets: &KeywordSets) -> u32 {
    let matched = sets
        .action_patterns()
        .iter()
        .filter(|pattern| pattern.is_match(text))
        .count() as u32;
    (matched * ACTION_POINTS).min(ACTION_CAP)
}

/// Per-token technology set membership, 4 points per matching token, capped
/// at 20. One trailing punctuation character is stripped before the lookup.
pub fn tech_score(words: &[&str], sets: &KeywordSets) -> u32 {
    let matched = words
        .iter()
        .filter(|word| sets.is_tech_term(strip_trailing_punct(word)))
        .count() as u32;
    (matched * TECH_POINTS).min(TECH_CAP)
}

fn strip_trailing_punct(word: &str) -> &str {
    word.strip_suffix(TRAILING_PUNCT).unwrap_or(word)
}
