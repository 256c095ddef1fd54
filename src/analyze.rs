use crate::normalize::Normalized;
use crate::reference::ReferenceTable;
use crate::scoring::{self, detail};
use crate::types::config::Thresholds;
use crate::types::report::{AverageReport, DayReport, Interpretation, ScoreReport};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct ReportSettings {
    /// Contributors kept per day and in the average.
    pub top: usize,
    pub thresholds: Thresholds,
}

pub fn analyze(
    normalized: &Normalized,
    reference: &ReferenceTable,
    settings: &ReportSettings,
) -> ScoreReport {
    let results: Vec<scoring::DayResult> = normalized
        .days
        .iter()
        .map(|day| scoring::score_day(day, reference))
        .collect();
    let average = scoring::aggregate(&results);

    let days = normalized
        .days
        .iter()
        .zip(&results)
        .map(|(day, result)| {
            debug!(date = %result.date, score = result.total_score, "scored day");
            DayReport {
                date: result.date,
                score: result.total_score,
                interpretation: Interpretation::classify(result.total_score, &settings.thresholds),
                nutrients_scored: result.contributions.len(),
                contributors: result
                    .contributions
                    .iter()
                    .take(settings.top)
                    .filter_map(|contribution| {
                        detail::explain(day, contribution, reference, result.total_score)
                    })
                    .collect(),
            }
        })
        .collect();

    ScoreReport {
        source: normalized.format,
        average: AverageReport {
            days: average.days,
            score: average.average_score,
            interpretation: Interpretation::classify(average.average_score, &settings.thresholds),
            contributors: average
                .average_contributions
                .into_iter()
                .take(settings.top)
                .collect(),
        },
        days,
        recognized_columns: normalized.recognized_columns.clone(),
        unused_columns: normalized.unused_columns.clone(),
    }
}
