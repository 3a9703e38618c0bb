use std::collections::HashMap;

/// Returns true when a single character dominates the text: strictly more
/// than `threshold` of all characters. Texts shorter than `min_length`
/// characters are too short to judge and never trigger.
pub fn is_highly_repetitive(text: &str, threshold: f32, min_length: usize) -> bool {
    let char_count = text.chars().count();
    if char_count < min_length {
        return false;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }

    match counts.values().max() {
        Some(&max) => max as f32 / char_count as f32 > threshold,
        None => true,
    }
}
