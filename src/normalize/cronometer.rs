use super::ColumnMapping;
use crate::reference::NutrientId;

pub const REQUIRED_COLUMNS: &[&str] = &["Date", "Energy (kcal)"];

/// Cronometer "Daily Nutrition" export, one row per day.
pub const MAPPINGS: &[ColumnMapping] = &[
    ColumnMapping::new("Alcohol (g)", NutrientId::Alcohol),
    ColumnMapping::new("B12 (Cobalamin) (µg)", NutrientId::VitaminB12),
    ColumnMapping::new("B6 (Pyridoxine) (mg)", NutrientId::VitaminB6),
    ColumnMapping::new("Caffeine (mg)", NutrientId::Caffeine),
    ColumnMapping::new("Carbs (g)", NutrientId::Carbohydrate),
    ColumnMapping::new("Cholesterol (mg)", NutrientId::Cholesterol),
    ColumnMapping::new("Energy (kcal)", NutrientId::Energy),
    ColumnMapping::new("Fat (g)", NutrientId::TotalFat),
    ColumnMapping::new("Fiber (g)", NutrientId::Fiber),
    ColumnMapping::new("Folate (µg)", NutrientId::Folate),
    ColumnMapping::new("Iron (mg)", NutrientId::Iron),
    ColumnMapping::new("Magnesium (mg)", NutrientId::Magnesium),
    ColumnMapping::new("Monounsaturated (g)", NutrientId::Mufa),
    ColumnMapping::new("B3 (Niacin) (mg)", NutrientId::Niacin),
    ColumnMapping::new("Omega-3 (g)", NutrientId::Omega3),
    ColumnMapping::new("Omega-6 (g)", NutrientId::Omega6),
    ColumnMapping::new("Protein (g)", NutrientId::Protein),
    ColumnMapping::new("Polyunsaturated (g)", NutrientId::Pufa),
    ColumnMapping::new("B2 (Riboflavin) (mg)", NutrientId::Riboflavin),
    ColumnMapping::new("Saturated (g)", NutrientId::SaturatedFat),
    ColumnMapping::new("Selenium (µg)", NutrientId::Selenium),
    ColumnMapping::new("B1 (Thiamine) (mg)", NutrientId::Thiamin),
    ColumnMapping::new("Trans-Fats (g)", NutrientId::TransFat),
    ColumnMapping::new("Vitamin A (µg)", NutrientId::VitaminA),
    ColumnMapping::new("Vitamin C (mg)", NutrientId::VitaminC),
    // 40 IU = 1 µg
    ColumnMapping::scaled("Vitamin D (IU)", NutrientId::VitaminD, 1.0 / 40.0),
    ColumnMapping::new("Vitamin E (mg)", NutrientId::VitaminE),
    ColumnMapping::new("Zinc (mg)", NutrientId::Zinc),
];
