pub const STRUCTURE_CHARS: [char; 5] = ['`', ':', '{', '[', '<'];
pub const STRUCTURE_POINTS: u32 = 3;
pub const STRUCTURE_CAP: u32 = 15;

/// Presence, not count: each structure character contributes once no matter
/// how often it appears.
pub fn structure_score(text: &str) -> u32 {
    let present = STRUCTURE_CHARS
        .iter()
        .filter(|&&ch| text.contains(ch))
        .count() as u32;
    (present * STRUCTURE_POINTS).min(STRUCTURE_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_scores_zero() {
        assert_eq!(structure_score("how do i sort a list"), 0);
    }

    #[test]
    fn each_distinct_character_counts_once() {
        assert_eq!(structure_score("wrap `this` in `backticks`"), STRUCTURE_POINTS);
        assert_eq!(structure_score("code: `x`"), 2 * STRUCTURE_POINTS);
    }

    #[test]
    fn all_five_characters_reach_the_cap() {
        assert_eq!(structure_score("`code`: {a: [1, 2]} <tag>"), STRUCTURE_CAP);
    }
}
