use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Canonical nutrient identifier. Declaration order is the reference table
/// order, from most pro-inflammatory to most anti-inflammatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NutrientId {
    SaturatedFat,
    TotalFat,
    TransFat,
    Energy,
    Cholesterol,
    VitaminB12,
    Carbohydrate,
    Iron,
    Protein,
    Mufa,
    Rosemary,
    Riboflavin,
    Thiamin,
    Thyme,
    Caffeine,
    Anthocyanidins,
    Pepper,
    Eugenol,
    Saffron,
    Omega6,
    Folate,
    Selenium,
    Niacin,
    Flavanones,
    Alcohol,
    Onion,
    Zinc,
    Pufa,
    VitaminB6,
    VitaminA,
    Garlic,
    Flavan3ols,
    VitaminE,
    VitaminC,
    Omega3,
    VitaminD,
    Ginger,
    Flavonols,
    Magnesium,
    Tea,
    BetaCarotene,
    Isoflavones,
    Flavones,
    Fiber,
    Turmeric,
}

impl NutrientId {
    /// Short upper-case code used in reports and JSON output.
    pub const fn code(self) -> &'static str {
        match self {
            NutrientId::SaturatedFat => "SATFAT",
            NutrientId::TotalFat => "TOTALFAT",
            NutrientId::TransFat => "TRANSFAT",
            NutrientId::Energy => "KCAL",
            NutrientId::Cholesterol => "CHOLES",
            NutrientId::VitaminB12 => "VITB12",
            NutrientId::Carbohydrate => "CARB",
            NutrientId::Iron => "IRON",
            NutrientId::Protein => "PROTEIN",
            NutrientId::Mufa => "MUFA",
            NutrientId::Rosemary => "ROSEMARY",
            NutrientId::Riboflavin => "RIBOFLAVIN",
            NutrientId::Thiamin => "THIAMIN",
            NutrientId::Thyme => "THYME",
            NutrientId::Caffeine => "CAFFEINE",
            NutrientId::Anthocyanidins => "ANTHOC",
            NutrientId::Pepper => "PEPPER",
            NutrientId::Eugenol => "EUGENOL",
            NutrientId::Saffron => "SAFFRON",
            NutrientId::Omega6 => "N6FAT",
            NutrientId::Folate => "FOLICACID",
            NutrientId::Selenium => "SE",
            NutrientId::Niacin => "NIACIN",
            NutrientId::Flavanones => "FLAVONONES",
            NutrientId::Alcohol => "ALCOHOL",
            NutrientId::Onion => "ONION",
            NutrientId::Zinc => "ZN",
            NutrientId::Pufa => "PUFA",
            NutrientId::VitaminB6 => "VITB6",
            NutrientId::VitaminA => "VITA",
            NutrientId::Garlic => "GARLIC",
            NutrientId::Flavan3ols => "FLA3OL",
            NutrientId::VitaminE => "VITE",
            NutrientId::VitaminC => "VITC",
            NutrientId::Omega3 => "N3FAT",
            NutrientId::VitaminD => "VITD",
            NutrientId::Ginger => "GINGER",
            NutrientId::Flavonols => "FLAVONOLS",
            NutrientId::Magnesium => "MG",
            NutrientId::Tea => "TEA",
            NutrientId::BetaCarotene => "BCAROTENE",
            NutrientId::Isoflavones => "ISOFLAVONES",
            NutrientId::Flavones => "FLAVONES",
            NutrientId::Fiber => "FIBER",
            NutrientId::Turmeric => "TURMERIC",
        }
    }
}

impl fmt::Display for NutrientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for NutrientId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientSpec {
    pub id: NutrientId,
    pub name: &'static str,
    pub global_mean: f64,
    pub global_sd: f64,
    pub inflammatory_score: f64,
}

const fn spec(
    id: NutrientId,
    name: &'static str,
    inflammatory_score: f64,
    global_mean: f64,
    global_sd: f64,
) -> NutrientSpec {
    NutrientSpec {
        id,
        name,
        global_mean,
        global_sd,
        inflammatory_score,
    }
}

// (id, name, inflammatory score, global mean, global sd)
const BUILTIN_SPECS: &[NutrientSpec] = &[
    spec(NutrientId::SaturatedFat, "Saturated fat", 0.373, 28.6, 8.0),
    spec(NutrientId::TotalFat, "Total fat", 0.298, 71.4, 19.4),
    spec(NutrientId::TransFat, "Trans fat", 0.229, 3.15, 3.75),
    spec(NutrientId::Energy, "Energy", 0.18, 2056.0, 338.0),
    spec(NutrientId::Cholesterol, "Cholesterol", 0.11, 279.4, 51.2),
    spec(NutrientId::VitaminB12, "Vitamin B12", 0.106, 5.15, 2.7),
    spec(NutrientId::Carbohydrate, "Carbohydrate", 0.097, 272.2, 40.0),
    spec(NutrientId::Iron, "Iron", 0.032, 13.35, 3.71),
    spec(NutrientId::Protein, "Protein", 0.021, 79.4, 13.9),
    spec(NutrientId::Mufa, "Monounsaturated fat", -0.009, 27.0, 6.1),
    spec(NutrientId::Rosemary, "Rosemary", -0.013, 1.0, 15.0),
    spec(NutrientId::Riboflavin, "Riboflavin (B2)", -0.068, 1.7, 0.79),
    spec(NutrientId::Thiamin, "Thiamin (B1)", -0.098, 1.7, 0.66),
    spec(NutrientId::Thyme, "Thyme/oregano", -0.102, 0.33, 0.99),
    spec(NutrientId::Caffeine, "Caffeine", -0.11, 8.05, 6.67),
    spec(NutrientId::Anthocyanidins, "Anthocyanidins", -0.131, 18.05, 21.14),
    spec(NutrientId::Pepper, "Pepper", -0.131, 10.0, 7.07),
    spec(NutrientId::Eugenol, "Eugenol", -0.14, 0.01, 0.08),
    spec(NutrientId::Saffron, "Saffron", -0.14, 0.37, 1.78),
    spec(NutrientId::Omega6, "Omega-6 fat", -0.159, 10.8, 7.5),
    spec(NutrientId::Folate, "Folic acid", -0.19, 273.0, 70.7),
    spec(NutrientId::Selenium, "Selenium", -0.191, 67.0, 25.1),
    spec(NutrientId::Niacin, "Niacin (B3)", -0.246, 25.9, 11.77),
    spec(NutrientId::Flavanones, "Flavanones", -0.25, 11.7, 3.82),
    spec(NutrientId::Alcohol, "Alcohol", -0.278, 13.98, 3.72),
    spec(NutrientId::Onion, "Onion", -0.301, 35.9, 18.4),
    spec(NutrientId::Zinc, "Zinc", -0.313, 9.84, 2.19),
    spec(NutrientId::Pufa, "Polyunsaturated fat", -0.337, 13.88, 3.76),
    spec(NutrientId::VitaminB6, "Vitamin B6", -0.365, 1.47, 0.74),
    spec(NutrientId::VitaminA, "Vitamin A", -0.401, 983.9, 518.6),
    spec(NutrientId::Garlic, "Garlic", -0.412, 4.35, 2.9),
    spec(NutrientId::Flavan3ols, "Flavan-3-ols", -0.415, 95.8, 85.9),
    spec(NutrientId::VitaminE, "Vitamin E", -0.419, 8.73, 1.49),
    spec(NutrientId::VitaminC, "Vitamin C", -0.424, 118.2, 43.46),
    spec(NutrientId::Omega3, "Omega-3 fat", -0.436, 1.06, 1.06),
    spec(NutrientId::VitaminD, "Vitamin D", -0.446, 6.26, 2.21),
    spec(NutrientId::Ginger, "Ginger", -0.453, 59.0, 63.2),
    spec(NutrientId::Flavonols, "Flavonols", -0.467, 17.7, 6.79),
    spec(NutrientId::Magnesium, "Magnesium", -0.484, 310.1, 139.4),
    spec(NutrientId::Tea, "Green/black tea", -0.536, 1.69, 1.53),
    spec(NutrientId::BetaCarotene, "Beta-carotene", -0.584, 3718.0, 1720.0),
    spec(NutrientId::Isoflavones, "Isoflavones", -0.593, 1.2, 0.2),
    spec(NutrientId::Flavones, "Flavones", -0.616, 1.55, 0.07),
    spec(NutrientId::Fiber, "Fiber", -0.663, 18.8, 4.9),
    spec(NutrientId::Turmeric, "Turmeric", -0.785, 533.6, 754.3),
];

static BUILTIN: ReferenceTable = ReferenceTable {
    specs: Cow::Borrowed(BUILTIN_SPECS),
};

/// Global intake reference values used to standardise a day's nutrients.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    specs: Cow<'static, [NutrientSpec]>,
}

impl ReferenceTable {
    /// The published DII reference table, shared process-wide.
    pub fn builtin() -> &'static ReferenceTable {
        &BUILTIN
    }

    #[cfg(test)]
    pub fn from_specs(specs: Vec<NutrientSpec>) -> Self {
        Self {
            specs: Cow::Owned(specs),
        }
    }

    pub fn get(&self, id: NutrientId) -> Option<&NutrientSpec> {
        self.specs.iter().find(|spec| spec.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NutrientSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
