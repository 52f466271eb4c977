use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of nutrient categories this system tracks. Any provider
/// nutrient name that does not match one of these is dropped.
///
/// Declaration order is load-bearing: `BTreeMap`s keyed by this enum iterate
/// in this order, which fixes the order of deficiency reports and the
/// recommendations derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrackedNutrient {
    Protein,
    Fiber,
    #[serde(rename = "Vitamin C")]
    VitaminC,
    Iron,
    Calcium,
}

impl TrackedNutrient {
    pub const ALL: [Self; 5] = [
        Self::Protein,
        Self::Fiber,
        Self::VitaminC,
        Self::Iron,
        Self::Calcium,
    ];

    /// Match order for raw provider names. Distinct from declaration order:
    /// Protein is checked first, Fiber last, and the first hit wins.
    const MATCH_ORDER: [Self; 5] = [
        Self::Protein,
        Self::VitaminC,
        Self::Iron,
        Self::Calcium,
        Self::Fiber,
    ];

    /// Case-insensitive substring triggers. No tokenization, no stemming.
    fn triggers(self) -> &'static [&'static str] {
        match self {
            Self::Protein => &["protein"],
            Self::VitaminC => &["vitamin c", "ascorbic acid"],
            Self::Iron => &["iron"],
            Self::Calcium => &["calcium"],
            Self::Fiber => &["fiber", "dietary fiber"],
        }
    }

    /// Maps a raw nutrient name from the food-data provider onto a tracked
    /// category, or `None` if the name matches no trigger.
    pub fn from_raw_name(raw: &str) -> Option<Self> {
        let lowered = raw.to_lowercase();
        Self::MATCH_ORDER
            .into_iter()
            .find(|nutrient| nutrient.triggers().iter().any(|t| lowered.contains(t)))
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Protein => "Protein",
            Self::Fiber => "Fiber",
            Self::VitaminC => "Vitamin C",
            Self::Iron => "Iron",
            Self::Calcium => "Calcium",
        }
    }

    /// Protein and Fiber totals are milligram-equivalents of grams (g × 1000)
    /// and are rendered back in grams.
    pub fn is_gram_family(self) -> bool {
        matches!(self, Self::Protein | Self::Fiber)
    }
}

impl fmt::Display for TrackedNutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One nutrient reading from the food-data provider, as reported per 100 g
/// of food. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientSample {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// Per-category running totals in canonical milligrams. Built from zero by a
/// single aggregation pass and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutrientTotals(BTreeMap<TrackedNutrient, f64>);

impl NutrientTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, nutrient: TrackedNutrient, amount_mg: f64) {
        *self.0.entry(nutrient).or_insert(0.0) += amount_mg;
    }

    pub fn get(&self, nutrient: TrackedNutrient) -> f64 {
        self.0.get(&nutrient).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrackedNutrient, f64)> + '_ {
        self.0.iter().map(|(nutrient, total)| (*nutrient, *total))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    /// Lenient parse matching the reference behavior: anything that is not
    /// "female" or "other" falls back to male.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "female" => Self::Female,
            "other" => Self::Other,
            _ => Self::Male,
        }
    }
}

/// Used only to derive BMI and pick the gender-specific Iron baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserProfile {
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl UserProfile {
    /// BMI in kg/m². Zero when height is not positive, which disables the
    /// baseline adjustment.
    pub fn bmi(&self) -> f64 {
        if self.height_cm <= 0.0 {
            return 0.0;
        }
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}
