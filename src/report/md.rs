use crate::analyze::clarity::CLARITY_CAP;
use crate::analyze::keywords::{ACTION_CAP, TECH_CAP};
use crate::analyze::length::LENGTH_CAP;
use crate::analyze::structure::STRUCTURE_CAP;
use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Prompt Score\n\n");
    output.push_str(&format!("Score: {}/100\n\n", report.score));

    if let Some(reason) = report.degeneracy {
        output.push_str(&format!("Forced to zero: {}\n\n", reason));
    }

    output.push_str("## Components\n\n");
    output.push_str(&format!(
        "- length/diversity: {} (cap {})\n- action keywords: {} (cap {})\n- technology keywords: {} (cap {})\n- structure: {} (cap {})\n- clarity: {} (cap {})\n\n",
        report.breakdown.length,
        LENGTH_CAP,
        report.breakdown.action_keywords,
        ACTION_CAP,
        report.breakdown.tech_keywords,
        TECH_CAP,
        report.breakdown.structure,
        STRUCTURE_CAP,
        report.breakdown.clarity,
        CLARITY_CAP
    ));

    output.push_str("## Input\n\n");
    output.push_str(&format!(
        "- words: {}\n- unique words: {}\n- characters: {}\n",
        report.word_count, report.unique_word_count, report.char_count
    ));

    output
}
