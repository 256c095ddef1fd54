use crate::normalize::SourceFormat;
use crate::scoring::detail::ContributionDetail;
use crate::scoring::Contribution;
use crate::types::config::Thresholds;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    AntiInflammatory,
    Neutral,
    ProInflammatory,
}

impl Interpretation {
    pub fn classify(score: f64, thresholds: &Thresholds) -> Self {
        if score < thresholds.anti_inflammatory_below {
            Interpretation::AntiInflammatory
        } else if score < thresholds.pro_inflammatory_from {
            Interpretation::Neutral
        } else {
            Interpretation::ProInflammatory
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interpretation::AntiInflammatory => "Anti-inflammatory",
            Interpretation::Neutral => "Neutral",
            Interpretation::ProInflammatory => "Pro-inflammatory",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub score: f64,
    pub interpretation: Interpretation,
    pub nutrients_scored: usize,
    pub contributors: Vec<ContributionDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AverageReport {
    pub days: usize,
    pub score: f64,
    pub interpretation: Interpretation,
    pub contributors: Vec<Contribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub source: SourceFormat,
    pub average: AverageReport,
    pub days: Vec<DayReport>,
    pub recognized_columns: Vec<String>,
    pub unused_columns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpretation_uses_half_open_bands() {
        let thresholds = Thresholds::default();
        assert_eq!(
            Interpretation::classify(-1.5, &thresholds),
            Interpretation::AntiInflammatory
        );
        assert_eq!(
            Interpretation::classify(-1.0, &thresholds),
            Interpretation::Neutral
        );
        assert_eq!(
            Interpretation::classify(0.99, &thresholds),
            Interpretation::Neutral
        );
        assert_eq!(
            Interpretation::classify(1.0, &thresholds),
            Interpretation::ProInflammatory
        );
    }
}
