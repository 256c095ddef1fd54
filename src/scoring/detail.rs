use super::{z_score, Contribution};
use crate::reference::{NutrientId, ReferenceTable};
use crate::types::day::DayRecord;
use serde::Serialize;

/// What to do about a nutrient, judged from the sign of its effect and of
/// its weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    /// Anti-inflammatory nutrient eaten below the global average.
    Increase,
    /// Pro-inflammatory nutrient eaten below the global average.
    KeepLimiting,
    /// Anti-inflammatory nutrient eaten above the global average.
    KeepUp,
    /// Pro-inflammatory nutrient eaten above the global average.
    Reduce,
    AtReference,
}

impl Advice {
    pub fn classify(inflammatory_score: f64, weighted_score: f64) -> Self {
        if weighted_score == 0.0 {
            Advice::AtReference
        } else if inflammatory_score < 0.0 && weighted_score > 0.0 {
            Advice::Increase
        } else if inflammatory_score > 0.0 && weighted_score < 0.0 {
            Advice::KeepLimiting
        } else if inflammatory_score < 0.0 {
            Advice::KeepUp
        } else {
            Advice::Reduce
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Advice::Increase => "Increase intake (currently below global average)",
            Advice::KeepLimiting => "Continue limiting intake (below global average)",
            Advice::KeepUp => "Continue current intake (above global average)",
            Advice::Reduce => "Consider reducing intake (above global average)",
            Advice::AtReference => "Intake matches the global average",
        }
    }

    /// Whether the nutrient is pushing the score against its usual direction.
    pub fn is_counter_intuitive(self) -> bool {
        matches!(self, Advice::Increase | Advice::KeepLimiting)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionDetail {
    pub nutrient: NutrientId,
    pub name: &'static str,
    pub intake: f64,
    pub global_mean: f64,
    pub inflammatory_score: f64,
    pub z_score: f64,
    pub weighted_score: f64,
    /// `|weighted_score| / |total| * 100`, absent when the total is zero.
    pub share_of_total: Option<f64>,
    pub advice: Advice,
}

/// Expands a ranked contribution with the intake behind it. Returns `None`
/// when the day or the reference table does not know the nutrient.
pub fn explain(
    day: &DayRecord,
    contribution: &Contribution,
    reference: &ReferenceTable,
    total_score: f64,
) -> Option<ContributionDetail> {
    let spec = reference.get(contribution.nutrient)?;
    let intake = day.get(contribution.nutrient)?;

    let share_of_total = if total_score != 0.0 {
        Some(contribution.weighted_score.abs() / total_score.abs() * 100.0)
    } else {
        None
    };

    Some(ContributionDetail {
        nutrient: spec.id,
        name: spec.name,
        intake,
        global_mean: spec.global_mean,
        inflammatory_score: spec.inflammatory_score,
        z_score: z_score(intake, spec),
        weighted_score: contribution.weighted_score,
        share_of_total,
        advice: Advice::classify(spec.inflammatory_score, contribution.weighted_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_day;
    use chrono::NaiveDate;

    #[test]
    fn advice_covers_all_sign_combinations() {
        assert_eq!(Advice::classify(-0.6, 0.3), Advice::Increase);
        assert_eq!(Advice::classify(0.3, -0.1), Advice::KeepLimiting);
        assert_eq!(Advice::classify(-0.6, -0.3), Advice::KeepUp);
        assert_eq!(Advice::classify(0.3, 0.1), Advice::Reduce);
        assert_eq!(Advice::classify(0.3, 0.0), Advice::AtReference);
        assert!(Advice::Increase.is_counter_intuitive());
        assert!(!Advice::Reduce.is_counter_intuitive());
    }

    #[test]
    fn explain_reports_intake_and_share() {
        let reference = ReferenceTable::builtin();
        let day = DayRecord::new(NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"))
            .with(NutrientId::Fiber, 8.0)
            .with(NutrientId::Energy, 2056.0);
        let result = score_day(&day, reference);

        let top = &result.contributions[0];
        let detail = explain(&day, top, reference, result.total_score).expect("fiber is known");
        assert_eq!(detail.nutrient, NutrientId::Fiber);
        assert_eq!(detail.intake, 8.0);
        assert!((detail.z_score - (8.0 - 18.8) / 4.9).abs() < 1e-12);
        assert_eq!(detail.advice, Advice::Increase);
        let share = detail.share_of_total.expect("total is non-zero");
        assert!((share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn explain_without_total_has_no_share() {
        let reference = ReferenceTable::builtin();
        let day = DayRecord::new(NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"))
            .with(NutrientId::Energy, 2056.0);
        let result = score_day(&day, reference);
        let detail = explain(&day, &result.contributions[0], reference, result.total_score)
            .expect("energy is known");
        assert_eq!(detail.share_of_total, None);
        assert_eq!(detail.advice, Advice::AtReference);
    }
}
