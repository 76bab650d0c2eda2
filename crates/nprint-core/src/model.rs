use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// National income classification driving production factors and average
/// sewage-removal rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeTier {
    High,
    UpperMiddle,
    LowerMiddle,
    Low,
}

impl IncomeTier {
    pub const ALL: [IncomeTier; 4] = [
        IncomeTier::High,
        IncomeTier::UpperMiddle,
        IncomeTier::LowerMiddle,
        IncomeTier::Low,
    ];

    /// The label used as column name in the production-factor table and as
    /// row key in the sewage-removal table.
    pub fn canonical_label(&self) -> &'static str {
        match self {
            IncomeTier::High => "High-income countries",
            IncomeTier::UpperMiddle => "Upper-middle-income countries",
            IncomeTier::LowerMiddle => "Lower-middle-income countries",
            IncomeTier::Low => "Low-income countries",
        }
    }

    /// Accepts both the short labels from the income table ("High income")
    /// and the canonical forms.
    pub fn from_label(s: &str) -> Option<IncomeTier> {
        match s.trim() {
            "High income" | "High-income countries" => Some(IncomeTier::High),
            "Upper middle income" | "Upper-middle-income countries" => Some(IncomeTier::UpperMiddle),
            "Lower middle income" | "Lower-middle-income countries" => Some(IncomeTier::LowerMiddle),
            "Low income" | "Low-income countries" => Some(IncomeTier::Low),
            _ => None,
        }
    }

    /// Sewage treatment level typically found in countries of this tier.
    pub fn typical_treatment(&self) -> Treatment {
        match self {
            IncomeTier::High | IncomeTier::UpperMiddle => Treatment::Secondary,
            IncomeTier::LowerMiddle | IncomeTier::Low => Treatment::None,
        }
    }
}

impl fmt::Display for IncomeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_label())
    }
}

/// Map a raw income label to its canonical form. Unrecognized labels pass
/// through trimmed, so downstream lookups simply miss and default to 0.
pub fn canonicalize_income_label(raw: &str) -> String {
    match IncomeTier::from_label(raw) {
        Some(tier) => tier.canonical_label().to_string(),
        None => raw.trim().to_string(),
    }
}

/// Household sewage treatment level with its fixed nitrogen removal fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Treatment {
    #[default]
    Unknown,
    None,
    Primary,
    Secondary,
    Tertiary,
}

impl Treatment {
    pub fn removal_fraction(&self) -> f64 {
        match self {
            Treatment::Unknown | Treatment::None => 0.0,
            Treatment::Primary => 0.05,
            Treatment::Secondary => 0.2,
            Treatment::Tertiary => 0.9,
        }
    }

    pub fn from_key(s: &str) -> Option<Treatment> {
        match s.trim().to_lowercase().as_str() {
            "unknown" => Some(Treatment::Unknown),
            "none" | "no" => Some(Treatment::None),
            "primary" => Some(Treatment::Primary),
            "secondary" => Some(Treatment::Secondary),
            "tertiary" => Some(Treatment::Tertiary),
            _ => None,
        }
    }
}

/// Personal spending level on goods and services, with its fixed annual
/// nitrogen loss in kg N/yr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendingTier {
    #[default]
    None,
    Minimal,
    Moderate,
    High,
}

impl SpendingTier {
    pub fn annual_n(&self) -> f64 {
        match self {
            SpendingTier::None => 0.0,
            SpendingTier::Minimal => 1.27,
            SpendingTier::Moderate => 2.54,
            SpendingTier::High => 3.82,
        }
    }

    pub fn from_key(s: &str) -> Option<SpendingTier> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(SpendingTier::None),
            "minimal" => Some(SpendingTier::Minimal),
            "moderate" => Some(SpendingTier::Moderate),
            "high" => Some(SpendingTier::High),
            _ => None,
        }
    }
}

/// The three mutually exclusive breakdown buckets every food category
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodBucket {
    Meat,
    Dairy,
    Plant,
}

/// The closed set of food categories the calculator knows about. Category
/// keys match the reference tables after lower-casing and trimming.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum FoodCategory {
    #[serde(rename = "poultry")]
    Poultry,
    #[serde(rename = "pork")]
    Pork,
    #[serde(rename = "beef")]
    Beef,
    #[serde(rename = "fish and seafood")]
    FishAndSeafood,
    #[serde(rename = "milk")]
    Milk,
    #[serde(rename = "cheese")]
    Cheese,
    #[serde(rename = "eggs")]
    Eggs,
    #[serde(rename = "grains and cereals")]
    GrainsAndCereals,
    #[serde(rename = "rice")]
    Rice,
    #[serde(rename = "vegetables")]
    Vegetables,
    #[serde(rename = "beans and other legumes")]
    BeansAndOtherLegumes,
    #[serde(rename = "starchy roots")]
    StarchyRoots,
    #[serde(rename = "fruit")]
    Fruit,
    #[serde(rename = "mutton and goat meat")]
    MuttonAndGoatMeat,
    #[serde(rename = "offals")]
    Offals,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 15] = [
        FoodCategory::Poultry,
        FoodCategory::Pork,
        FoodCategory::Beef,
        FoodCategory::FishAndSeafood,
        FoodCategory::Milk,
        FoodCategory::Cheese,
        FoodCategory::Eggs,
        FoodCategory::GrainsAndCereals,
        FoodCategory::Rice,
        FoodCategory::Vegetables,
        FoodCategory::BeansAndOtherLegumes,
        FoodCategory::StarchyRoots,
        FoodCategory::Fruit,
        FoodCategory::MuttonAndGoatMeat,
        FoodCategory::Offals,
    ];

    /// The lower-cased key this category has in the reference tables.
    pub fn key(&self) -> &'static str {
        match self {
            FoodCategory::Poultry => "poultry",
            FoodCategory::Pork => "pork",
            FoodCategory::Beef => "beef",
            FoodCategory::FishAndSeafood => "fish and seafood",
            FoodCategory::Milk => "milk",
            FoodCategory::Cheese => "cheese",
            FoodCategory::Eggs => "eggs",
            FoodCategory::GrainsAndCereals => "grains and cereals",
            FoodCategory::Rice => "rice",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::BeansAndOtherLegumes => "beans and other legumes",
            FoodCategory::StarchyRoots => "starchy roots",
            FoodCategory::Fruit => "fruit",
            FoodCategory::MuttonAndGoatMeat => "mutton and goat meat",
            FoodCategory::Offals => "offals",
        }
    }

    pub fn bucket(&self) -> FoodBucket {
        match self {
            FoodCategory::Poultry
            | FoodCategory::Pork
            | FoodCategory::Beef
            | FoodCategory::MuttonAndGoatMeat
            | FoodCategory::Offals => FoodBucket::Meat,
            FoodCategory::Milk | FoodCategory::Cheese | FoodCategory::Eggs => FoodBucket::Dairy,
            _ => FoodBucket::Plant,
        }
    }

    pub fn from_key(s: &str) -> Option<FoodCategory> {
        let key = s.trim().to_lowercase();
        FoodCategory::ALL.iter().copied().find(|c| c.key() == key)
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Everything the user enters: weekly food servings plus energy, travel
/// and spending habits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInputs {
    /// Weekly consumption count per food category; absent categories count
    /// as 0.
    #[serde(default)]
    pub servings_per_week: BTreeMap<FoodCategory, u32>,
    #[serde(default)]
    pub electricity_kwh_month: f64,
    #[serde(default)]
    pub natural_gas_m3_month: f64,
    /// Floored at 1 when used.
    #[serde(default)]
    pub household_size: u32,
    #[serde(default)]
    pub flying_hours_year: f64,
    #[serde(default)]
    pub transit_km_week: f64,
    #[serde(default)]
    pub car_km_week: f64,
    #[serde(default)]
    pub spending: SpendingTier,
}

impl UserInputs {
    pub fn servings(&self, category: FoodCategory) -> u32 {
        self.servings_per_week.get(&category).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_label_roundtrip() {
        // A short label from the income table canonicalizes to the exact
        // string used as production-factor column and sewage-removal key.
        for (raw, tier) in [
            ("High income", IncomeTier::High),
            ("Upper middle income", IncomeTier::UpperMiddle),
            ("Lower middle income", IncomeTier::LowerMiddle),
            ("Low income", IncomeTier::Low),
        ] {
            let canonical = canonicalize_income_label(raw);
            assert_eq!(canonical, tier.canonical_label());
            assert_eq!(IncomeTier::from_label(&canonical), Some(tier));
        }
    }

    #[test]
    fn test_unrecognized_income_label_passthrough() {
        assert_eq!(canonicalize_income_label("  Emerging  "), "Emerging");
        assert_eq!(IncomeTier::from_label("Emerging"), None);
    }

    #[test]
    fn test_treatment_removal_fractions() {
        assert_eq!(Treatment::Unknown.removal_fraction(), 0.0);
        assert_eq!(Treatment::None.removal_fraction(), 0.0);
        assert_eq!(Treatment::Primary.removal_fraction(), 0.05);
        assert_eq!(Treatment::Secondary.removal_fraction(), 0.2);
        assert_eq!(Treatment::Tertiary.removal_fraction(), 0.9);
    }

    #[test]
    fn test_spending_levels() {
        assert_eq!(SpendingTier::High.annual_n(), 3.82);
        assert_eq!(SpendingTier::Moderate.annual_n(), 2.54);
        assert_eq!(SpendingTier::Minimal.annual_n(), 1.27);
        assert_eq!(SpendingTier::None.annual_n(), 0.0);
        assert_eq!(SpendingTier::from_key("Moderate"), Some(SpendingTier::Moderate));
        assert_eq!(SpendingTier::from_key("lavish"), None);
    }

    #[test]
    fn test_every_category_has_exactly_one_bucket() {
        let meat = FoodCategory::ALL
            .iter()
            .filter(|c| c.bucket() == FoodBucket::Meat)
            .count();
        let dairy = FoodCategory::ALL
            .iter()
            .filter(|c| c.bucket() == FoodBucket::Dairy)
            .count();
        let plant = FoodCategory::ALL
            .iter()
            .filter(|c| c.bucket() == FoodBucket::Plant)
            .count();
        assert_eq!(meat, 5);
        assert_eq!(dairy, 3);
        assert_eq!(plant, 7);
        assert_eq!(meat + dairy + plant, FoodCategory::ALL.len());
    }

    #[test]
    fn test_category_from_key() {
        assert_eq!(
            FoodCategory::from_key("  Fish and Seafood "),
            Some(FoodCategory::FishAndSeafood)
        );
        assert_eq!(FoodCategory::from_key("tofu"), None);
    }

    #[test]
    fn test_typical_treatment_by_tier() {
        assert_eq!(IncomeTier::High.typical_treatment(), Treatment::Secondary);
        assert_eq!(IncomeTier::UpperMiddle.typical_treatment(), Treatment::Secondary);
        assert_eq!(IncomeTier::LowerMiddle.typical_treatment(), Treatment::None);
        assert_eq!(IncomeTier::Low.typical_treatment(), Treatment::None);
    }
}
