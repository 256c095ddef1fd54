use super::ColumnMapping;
use crate::reference::NutrientId;

pub const REQUIRED_COLUMNS: &[&str] = &["Date", "Meal", "Calories"];

/// MyFitnessPal "Nutrition Summary" export, one row per meal. Vitamin A,
/// vitamin C and iron are reported as % of the daily value.
pub const MAPPINGS: &[ColumnMapping] = &[
    ColumnMapping::new("Calories", NutrientId::Energy),
    ColumnMapping::new("Fat (g)", NutrientId::TotalFat),
    ColumnMapping::new("Saturated Fat", NutrientId::SaturatedFat),
    ColumnMapping::new("Polyunsaturated Fat", NutrientId::Pufa),
    ColumnMapping::new("Monounsaturated Fat", NutrientId::Mufa),
    ColumnMapping::new("Trans Fat", NutrientId::TransFat),
    ColumnMapping::new("Cholesterol", NutrientId::Cholesterol),
    ColumnMapping::new("Carbohydrates (g)", NutrientId::Carbohydrate),
    ColumnMapping::new("Fiber", NutrientId::Fiber),
    ColumnMapping::new("Protein (g)", NutrientId::Protein),
    // 100% = 900 µg RAE
    ColumnMapping::scaled("Vitamin A", NutrientId::VitaminA, 9.0),
    // 100% = 90 mg
    ColumnMapping::scaled("Vitamin C", NutrientId::VitaminC, 0.9),
    // 100% = 18 mg
    ColumnMapping::scaled("Iron", NutrientId::Iron, 0.18),
];
