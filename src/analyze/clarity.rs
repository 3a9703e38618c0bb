pub const CLARITY_CAP: u32 = 15;

/// Sentence punctuation bonuses. A trailing question mark earns both the
/// terminal-punctuation bonus and the question bonus.
pub fn clarity_score(text: &str, word_count: usize) -> u32 {
    let mut points = 0;
    if text.ends_with('?') || text.ends_with('.') {
        points += 5;
    }
    // rough proxy for multiple sentences: a period somewhere before the end
    if word_count > 5 && text.contains('.') && !text.ends_with('.') {
        points += 5;
    }
    if text.ends_with('?') {
        points += 5;
    }
    points.min(CLARITY_CAP)
}
