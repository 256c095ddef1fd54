use crate::reference::NutrientId;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One canonical day of intake. A nutrient that was not logged is absent
/// from `nutrients`; it is never stored as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub nutrients: BTreeMap<NutrientId, f64>,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            nutrients: BTreeMap::new(),
        }
    }

    #[cfg(test)]
    pub fn with(mut self, nutrient: NutrientId, value: f64) -> Self {
        self.nutrients.insert(nutrient, value);
        self
    }

    pub fn get(&self, nutrient: NutrientId) -> Option<f64> {
        self.nutrients.get(&nutrient).copied()
    }
}
