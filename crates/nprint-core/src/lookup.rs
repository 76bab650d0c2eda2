use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::model::{canonicalize_income_label, FoodCategory, IncomeTier};
use crate::tables::schema::{CountryFoodRow, SewageRemovalRow};
use crate::tables::NormalizedTables;

/// Countries the upstream dataset carries but the selector hides.
const EXCLUDED_COUNTRIES: [&str; 3] = [
    "China, Macao SAR",
    "Micronesia (Federated States of)",
    "Tuvalu",
];

/// Production-factor multipliers for one category, one per income tier.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TierFactors {
    pub high: f64,
    pub upper_middle: f64,
    pub lower_middle: f64,
    pub low: f64,
}

impl TierFactors {
    pub fn get(&self, tier: IncomeTier) -> f64 {
        match tier {
            IncomeTier::High => self.high,
            IncomeTier::UpperMiddle => self.upper_middle,
            IncomeTier::LowerMiddle => self.lower_middle,
            IncomeTier::Low => self.low,
        }
    }
}

/// Static attributes of one food category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FoodAttributes {
    /// Fraction in [0, 1]; percentage inputs are re-normalized at build time.
    pub food_waste_fraction: f64,
    pub fossil_fuel_factor: f64,
    pub nitrogen_content: f64,
    pub serving_size: f64,
}

/// Read-only indexes derived from a normalized snapshot, rebuilt fresh on
/// every calculation. Absent keys are simply not present; callers default
/// to 0.
#[derive(Debug, Clone, Default)]
pub struct LookupIndexes {
    pub iso_by_country: HashMap<String, String>,
    pub income_by_iso: HashMap<String, String>,
    pub production_factor_by_category: HashMap<String, TierFactors>,
    pub attributes_by_category: HashMap<String, FoodAttributes>,
}

impl LookupIndexes {
    pub fn build(tables: &NormalizedTables) -> LookupIndexes {
        // Food-consumption table populates first; the energy table only
        // fills countries still missing (first-table wins).
        let mut iso_by_country = HashMap::new();
        for row in &tables.country_food {
            let country = row.area.trim();
            let iso = row.iso_a3.trim().to_uppercase();
            if !country.is_empty() && !iso.is_empty() {
                iso_by_country.insert(country.to_string(), iso);
            }
        }
        for row in &tables.country_energy {
            let country = row.country.trim();
            let iso = row.code.trim().to_uppercase();
            if !country.is_empty() && !iso.is_empty() {
                iso_by_country
                    .entry(country.to_string())
                    .or_insert(iso);
            }
        }

        // Last row wins for the same ISO.
        let mut income_by_iso = HashMap::new();
        for row in &tables.country_income {
            let iso = row.iso_a3.trim().to_uppercase();
            if !iso.is_empty() {
                income_by_iso.insert(iso, canonicalize_income_label(&row.income));
            }
        }

        let mut production_factor_by_category = HashMap::new();
        for row in &tables.production_factors {
            let category = row.category.trim().to_lowercase();
            if category.is_empty() {
                continue;
            }
            production_factor_by_category.insert(
                category,
                TierFactors {
                    high: row.high,
                    upper_middle: row.upper_middle,
                    lower_middle: row.lower_middle,
                    low: row.low,
                },
            );
        }

        let mut attributes_by_category = HashMap::new();
        for row in &tables.food_attributes {
            let category = row.name.trim().to_lowercase();
            if category.is_empty() {
                continue;
            }
            // Some sheets carry the waste column as a percentage.
            let mut waste = row.food_waste;
            if waste > 1.0 {
                waste /= 100.0;
            }
            attributes_by_category.insert(
                category,
                FoodAttributes {
                    food_waste_fraction: waste,
                    fossil_fuel_factor: row.fossil_fuel,
                    nitrogen_content: row.n_content,
                    serving_size: row.serving_size,
                },
            );
        }

        debug!(
            countries = iso_by_country.len(),
            incomes = income_by_iso.len(),
            factors = production_factor_by_category.len(),
            attributes = attributes_by_category.len(),
            "built lookup indexes"
        );

        LookupIndexes {
            iso_by_country,
            income_by_iso,
            production_factor_by_category,
            attributes_by_category,
        }
    }

    pub fn iso_for(&self, country: &str) -> Option<&str> {
        self.iso_by_country.get(country.trim()).map(|s| s.as_str())
    }

    /// Canonical income label for a country, through the ISO index.
    pub fn income_label_for(&self, country: &str) -> Option<&str> {
        let iso = self.iso_for(country)?.trim().to_uppercase();
        self.income_by_iso.get(&iso).map(|s| s.as_str())
    }

    /// Production factor for a category under a tier; 0 when either is
    /// missing.
    pub fn production_factor(&self, category: FoodCategory, tier: Option<IncomeTier>) -> f64 {
        let Some(tier) = tier else {
            return 0.0;
        };
        self.production_factor_by_category
            .get(category.key())
            .map(|f| f.get(tier))
            .unwrap_or(0.0)
    }

    pub fn attributes(&self, category: FoodCategory) -> Option<&FoodAttributes> {
        self.attributes_by_category.get(category.key())
    }
}

/// Income-tier average nitrogen removal rate from the sewage table; 0 when
/// the label is unknown or has no row.
pub fn average_removal_rate(rows: &[SewageRemovalRow], income_label: Option<&str>) -> f64 {
    let Some(label) = income_label else {
        return 0.0;
    };
    rows.iter()
        .find(|r| r.income.trim() == label)
        .map(|r| r.removal_rating)
        .unwrap_or(0.0)
}

/// Per-capita annual consumption (kg) per category for one country,
/// restricted to the closed category set. Later rows win.
pub fn country_food_per_capita(
    rows: &[CountryFoodRow],
    country: &str,
) -> HashMap<FoodCategory, f64> {
    let mut per_capita = HashMap::new();
    for row in rows.iter().filter(|r| r.area == country) {
        if let Some(category) = FoodCategory::from_key(&row.category) {
            per_capita.insert(category, row.kg_per_capita_year);
        }
    }
    per_capita
}

/// Countries selectable for a calculation: the union of the food and
/// energy tables, minus a few upstream entries with unusable data.
pub fn available_countries(tables: &NormalizedTables) -> Vec<String> {
    let mut countries = BTreeSet::new();
    for row in &tables.country_food {
        let name = row.area.trim();
        if !name.is_empty() {
            countries.insert(name.to_string());
        }
    }
    for row in &tables.country_energy {
        let name = row.country.trim();
        if !name.is_empty() {
            countries.insert(name.to_string());
        }
    }
    countries
        .into_iter()
        .filter(|c| !EXCLUDED_COUNTRIES.contains(&c.as_str()))
        .collect()
}
