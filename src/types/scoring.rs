use serde::Serialize;
use std::fmt;

pub type Score = u8;

/// Why an input was forced to score zero before any component ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Degeneracy {
    Empty,
    Repetitive,
    SingleToken,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Degeneracy::Empty => "empty input",
            Degeneracy::Repetitive => "highly repetitive input",
            Degeneracy::SingleToken => "single token input",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub length: u32,
    pub action_keywords: u32,
    pub tech_keywords: u32,
    pub structure: u32,
    pub clarity: u32,
}

impl Breakdown {
    pub fn total(&self) -> u32 {
        self.length + self.action_keywords + self.tech_keywords + self.structure + self.clarity
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub score: Score,
    pub degeneracy: Option<Degeneracy>,
    pub breakdown: Breakdown,
    pub word_count: usize,
    pub unique_word_count: usize,
    pub char_count: usize,
}

impl Evaluation {
    pub fn degenerate(
        reason: Degeneracy,
        word_count: usize,
        unique_word_count: usize,
        char_count: usize,
    ) -> Self {
        Self {
            score: 0,
            degeneracy: Some(reason),
            breakdown: Breakdown::default(),
            word_count,
            unique_word_count,
            char_count,
        }
    }

    pub fn from_breakdown(
        breakdown: Breakdown,
        word_count: usize,
        unique_word_count: usize,
        char_count: usize,
    ) -> Self {
        Self {
            score: breakdown.total().min(100) as Score,
            degeneracy: None,
            breakdown,
            word_count,
            unique_word_count,
            char_count,
        }
    }

}
