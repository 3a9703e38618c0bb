pub const LENGTH_CAP: u32 = 30;

pub fn length_score(char_count: usize, word_count: usize, unique_word_count: usize) -> u32 {
    let mut points = 0;
    if word_count > 1 {
        points += 5;
    }
    if word_count > 3 && unique_word_count > 2 {
        points += 10;
    }
    if word_count > 7 && unique_word_count > 4 {
        points += 10;
    }
    if char_count > 100 && unique_word_count > 7 {
        points += 5;
    }
    points.min(LENGTH_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_words_earn_base_points() {
        assert_eq!(length_score(10, 2, 2), 5);
    }

    #[test]
    fn repeated_words_limit_diversity_points() {
        // ten words but a single distinct one
        assert_eq!(length_score(39, 10, 1), 5);
    }

    #[test]
    fn long_varied_text_reaches_the_cap() {
        assert_eq!(length_score(150, 20, 15), LENGTH_CAP);
    }

    #[test]
    fn length_bonus_requires_both_length_and_variety() {
        assert_eq!(length_score(150, 20, 7), 25);
        assert_eq!(length_score(100, 20, 15), 25);
    }
}
