use crate::types::report::ScoreReport;

pub const BAR_WIDTH: usize = 25;

/// Proportional text bar with the "{score}/100" label.
pub fn to_bar(report: &ScoreReport) -> String {
    let filled = report.score as usize * BAR_WIDTH / 100;
    format!(
        "Prompt Score [{}{}] {}/100",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        report.score
    )
}
