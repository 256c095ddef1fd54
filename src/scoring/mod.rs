pub mod detail;

use crate::reference::{NutrientId, NutrientSpec, ReferenceTable};
use crate::types::day::DayRecord;
use chrono::NaiveDate;
use serde::Serialize;
use statrs::function::erf::erf;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub nutrient: NutrientId,
    pub weighted_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayResult {
    pub date: NaiveDate,
    pub total_score: f64,
    /// Ranked by absolute weighted score, largest first.
    pub contributions: Vec<Contribution>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub days: usize,
    pub average_score: f64,
    pub average_contributions: Vec<Contribution>,
}

pub fn z_score(value: f64, spec: &NutrientSpec) -> f64 {
    (value - spec.global_mean) / spec.global_sd
}

/// Centered percentile `2Φ(z) - 1`, which equals `erf(z / √2)`.
pub fn centered_percentile(z: f64) -> f64 {
    erf(z / std::f64::consts::SQRT_2)
}

pub fn weighted_score(value: f64, spec: &NutrientSpec) -> f64 {
    centered_percentile(z_score(value, spec)) * spec.inflammatory_score
}

/// Scores one day. Nutrients absent from the record contribute nothing.
pub fn score_day(day: &DayRecord, reference: &ReferenceTable) -> DayResult {
    let mut contributions: Vec<Contribution> = reference
        .iter()
        .filter_map(|spec| {
            day.get(spec.id).map(|value| Contribution {
                nutrient: spec.id,
                weighted_score: weighted_score(value, spec),
            })
        })
        .collect();

    let total_score = contributions.iter().map(|c| c.weighted_score).sum();
    rank(&mut contributions);

    DayResult {
        date: day.date,
        total_score,
        contributions,
    }
}

/// Averages each nutrient over the days that logged it, then sums those
/// averages. No days yields a zero score.
pub fn aggregate(days: &[DayResult]) -> AggregateResult {
    let mut totals: BTreeMap<NutrientId, (f64, usize)> = BTreeMap::new();
    for day in days {
        for contribution in &day.contributions {
            let (sum, count) = totals.entry(contribution.nutrient).or_insert((0.0, 0));
            *sum += contribution.weighted_score;
            *count += 1;
        }
    }

    let mut average_contributions: Vec<Contribution> = totals
        .into_iter()
        .map(|(nutrient, (sum, count))| Contribution {
            nutrient,
            weighted_score: sum / count as f64,
        })
        .collect();

    let average_score = average_contributions.iter().map(|c| c.weighted_score).sum();
    rank(&mut average_contributions);

    AggregateResult {
        days: days.len(),
        average_score,
        average_contributions,
    }
}

fn rank(contributions: &mut [Contribution]) {
    // stable: ties keep reference order
    contributions.sort_by(|a, b| {
        b.weighted_score
            .abs()
            .partial_cmp(&a.weighted_score.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
