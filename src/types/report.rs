use crate::types::scoring::{Breakdown, Degeneracy, Evaluation, Score};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub score: Score,
    pub degeneracy: Option<Degeneracy>,
    pub breakdown: Breakdown,
    pub word_count: usize,
    pub unique_word_count: usize,
    pub char_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl ScoreReport {
    pub fn new(evaluation: &Evaluation) -> Self {
        Self {
            score: evaluation.score,
            degeneracy: evaluation.degeneracy,
            breakdown: evaluation.breakdown,
            word_count: evaluation.word_count,
            unique_word_count: evaluation.unique_word_count,
            char_count: evaluation.char_count,
            generated_at: Utc::now(),
        }
    }
}
