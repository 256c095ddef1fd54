use crate::reference::{NutrientSpec, ReferenceTable};
use crate::types::report::ScoreReport;

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn reference_to_json(reference: &ReferenceTable) -> Result<String, serde_json::Error> {
    let specs: Vec<&NutrientSpec> = reference.iter().collect();
    serde_json::to_string_pretty(&specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::SourceFormat;
    use crate::reference::NutrientId;
    use crate::scoring::Contribution;
    use crate::types::report::{AverageReport, Interpretation};
    use serde_json::Value;

    #[test]
    fn json_report_contains_average_score() {
        let report = ScoreReport {
            source: SourceFormat::Cronometer,
            average: AverageReport {
                days: 1,
                score: 0.5,
                interpretation: Interpretation::Neutral,
                contributors: vec![Contribution {
                    nutrient: NutrientId::Fiber,
                    weighted_score: 0.5,
                }],
            },
            days: vec![],
            recognized_columns: vec!["Fiber (g)".to_string()],
            unused_columns: vec![],
        };

        let rendered = to_json(&report).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("json should parse back");
        assert_eq!(value["source"], "cronometer");
        assert_eq!(value["average"]["score"], 0.5);
        assert_eq!(value["average"]["interpretation"], "neutral");
        assert_eq!(value["average"]["contributors"][0]["nutrient"], "FIBER");
    }

    #[test]
    fn reference_json_lists_every_nutrient() {
        let rendered = reference_to_json(ReferenceTable::builtin()).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("json should parse back");
        let entries = value.as_array().expect("array of specs");
        assert_eq!(entries.len(), 45);
        assert_eq!(entries[0]["id"], "SATFAT");
    }
}
