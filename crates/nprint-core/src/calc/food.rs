use std::collections::HashMap;

use crate::calc::outcome::FoodBreakdown;
use crate::calc::round2;
use crate::lookup::LookupIndexes;
use crate::model::{FoodBucket, FoodCategory, IncomeTier, Treatment, UserInputs};

/// Outcome of one food pass: the rounded pass total and the rescaled
/// bucket breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FoodPassResult {
    pub total: f64,
    pub breakdown: FoodBreakdown,
}

/// Running totals while iterating the category set. Consumption,
/// production and fuel losses accumulate separately because sewage
/// discounting applies to the consumption aggregate only.
#[derive(Debug, Default)]
struct PassTotals {
    consumption: f64,
    production: f64,
    fuel: f64,
    buckets: FoodBreakdown,
}

impl PassTotals {
    /// Shared per-category formula for both passes. Categories with
    /// frequency 0 contribute nothing; missing attributes or factors read
    /// as 0 but the category still flows through.
    fn add_category(
        &mut self,
        category: FoodCategory,
        frequency: f64,
        lookups: &LookupIndexes,
        tier: Option<IncomeTier>,
    ) {
        if frequency == 0.0 {
            return;
        }

        let attrs = lookups.attributes(category).copied().unwrap_or_default();
        let consumption = frequency * attrs.serving_size * 52.0 * attrs.nitrogen_content;
        let production = consumption * lookups.production_factor(category, tier);
        let fuel = frequency * attrs.fossil_fuel_factor;

        self.consumption += consumption;
        self.production += production;
        self.fuel += fuel;

        let pre_treatment = consumption + production + fuel;
        match category.bucket() {
            FoodBucket::Meat => self.buckets.meat += pre_treatment,
            FoodBucket::Dairy => self.buckets.dairy += pre_treatment,
            FoodBucket::Plant => self.buckets.plant += pre_treatment,
        }
    }

    /// Apply sewage discounting to the consumption aggregate, round the
    /// pass total, and rescale buckets so they sum to it again.
    fn finish(self, removal_rate: f64) -> FoodPassResult {
        let adjusted_consumption = self.consumption * (1.0 - removal_rate);
        let total = round2(adjusted_consumption + self.production + self.fuel);

        let raw_sum = self.buckets.sum();
        let scale = if total > 0.0 && raw_sum > 0.0 {
            total / raw_sum
        } else {
            0.0
        };

        FoodPassResult {
            total,
            breakdown: FoodBreakdown {
                meat: self.buckets.meat * scale,
                dairy: self.buckets.dairy * scale,
                plant: self.buckets.plant * scale,
            },
        }
    }
}

/// Food pass over the user's entered weekly servings. The removal rate is
/// the user-selected treatment's fixed fraction.
pub fn user_pass(
    inputs: &UserInputs,
    lookups: &LookupIndexes,
    tier: Option<IncomeTier>,
    treatment: Treatment,
) -> FoodPassResult {
    let mut totals = PassTotals::default();
    for category in FoodCategory::ALL {
        totals.add_category(category, f64::from(inputs.servings(category)), lookups, tier);
    }
    totals.finish(treatment.removal_fraction())
}

/// Food pass over the country's per-capita consumption. Annual kg convert
/// to a weekly serving frequency through food waste and serving size; the
/// removal rate is the income-tier average from the sewage table.
pub fn average_pass(
    per_capita: &HashMap<FoodCategory, f64>,
    lookups: &LookupIndexes,
    tier: Option<IncomeTier>,
    average_removal: f64,
) -> FoodPassResult {
    let mut totals = PassTotals::default();
    for category in FoodCategory::ALL {
        let kg_year = per_capita.get(&category).copied().unwrap_or(0.0);
        if kg_year == 0.0 {
            continue;
        }
        let attrs = lookups.attributes(category).copied().unwrap_or_default();
        let consumed = kg_year * (1.0 - attrs.food_waste_fraction);
        let frequency = if attrs.serving_size > 0.0 && consumed > 0.0 {
            consumed / attrs.serving_size / 52.0
        } else {
            0.0
        };
        totals.add_category(category, frequency, lookups, tier);
    }
    totals.finish(average_removal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{FoodAttributes, TierFactors};
    use std::collections::BTreeMap;

    const EPS: f64 = 1e-9;

    fn beef_lookups() -> LookupIndexes {
        LookupIndexes {
            production_factor_by_category: HashMap::from([(
                "beef".to_string(),
                TierFactors {
                    high: 1.5,
                    upper_middle: 1.4,
                    lower_middle: 1.2,
                    low: 1.0,
                },
            )]),
            attributes_by_category: HashMap::from([(
                "beef".to_string(),
                FoodAttributes {
                    food_waste_fraction: 0.25,
                    fossil_fuel_factor: 0.2,
                    nitrogen_content: 0.3,
                    serving_size: 0.1,
                },
            )]),
            ..Default::default()
        }
    }

    fn beef_inputs(servings: u32) -> UserInputs {
        UserInputs {
            servings_per_week: BTreeMap::from([(FoodCategory::Beef, servings)]),
            ..Default::default()
        }
    }

    #[test]
    fn test_user_pass_untreated_total() {
        // 2/week x 0.1 kg x 52 x 0.3 kg N/kg = 3.12 consumption,
        // x1.5 = 4.68 production, 2 x 0.2 = 0.4 fuel -> 8.2.
        let result = user_pass(
            &beef_inputs(2),
            &beef_lookups(),
            Some(IncomeTier::High),
            Treatment::None,
        );
        assert_eq!(result.total, 8.2);
        assert!((result.breakdown.meat - 8.2).abs() < EPS);
        assert_eq!(result.breakdown.dairy, 0.0);
        assert_eq!(result.breakdown.plant, 0.0);
    }

    #[test]
    fn test_user_pass_secondary_treatment() {
        // Consumption discounted by 0.2: 3.12 * 0.8 + 4.68 + 0.4 = 7.576 -> 7.58.
        let result = user_pass(
            &beef_inputs(2),
            &beef_lookups(),
            Some(IncomeTier::High),
            Treatment::Secondary,
        );
        assert_eq!(result.total, 7.58);
    }

    #[test]
    fn test_zero_frequency_contributes_nothing() {
        let result = user_pass(
            &beef_inputs(0),
            &beef_lookups(),
            Some(IncomeTier::High),
            Treatment::None,
        );
        assert_eq!(result.total, 0.0);
        assert_eq!(result.breakdown, FoodBreakdown::default());
    }

    #[test]
    fn test_missing_tier_zeroes_production_only() {
        // Tier unresolved: consumption 3.12 + fuel 0.4 survive, production 0.
        let result = user_pass(&beef_inputs(2), &beef_lookups(), None, Treatment::None);
        assert_eq!(result.total, 3.52);
    }

    #[test]
    fn test_missing_attributes_still_processes_category() {
        let lookups = LookupIndexes {
            production_factor_by_category: beef_lookups().production_factor_by_category,
            ..Default::default()
        };
        let result = user_pass(
            &beef_inputs(2),
            &lookups,
            Some(IncomeTier::High),
            Treatment::None,
        );
        // Everything reads as 0 without attributes; no panic, no NaN.
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_sewage_monotonicity() {
        let treatments = [
            Treatment::None,
            Treatment::Primary,
            Treatment::Secondary,
            Treatment::Tertiary,
        ];
        let mut previous = f64::INFINITY;
        for treatment in treatments {
            let result = user_pass(
                &beef_inputs(3),
                &beef_lookups(),
                Some(IncomeTier::High),
                treatment,
            );
            assert!(result.total <= previous);
            assert!(result.total >= 0.0);
            previous = result.total;
        }
    }

    #[test]
    fn test_bucket_sum_matches_total() {
        let inputs = UserInputs {
            servings_per_week: BTreeMap::from([
                (FoodCategory::Beef, 2),
                (FoodCategory::Milk, 7),
                (FoodCategory::Vegetables, 10),
            ]),
            ..Default::default()
        };
        let mut lookups = beef_lookups();
        lookups.attributes_by_category.insert(
            "milk".to_string(),
            FoodAttributes {
                food_waste_fraction: 0.12,
                fossil_fuel_factor: 0.05,
                nitrogen_content: 0.05,
                serving_size: 0.2,
            },
        );
        lookups.attributes_by_category.insert(
            "vegetables".to_string(),
            FoodAttributes {
                food_waste_fraction: 0.4,
                fossil_fuel_factor: 0.03,
                nitrogen_content: 0.02,
                serving_size: 0.1,
            },
        );
        let result = user_pass(
            &inputs,
            &lookups,
            Some(IncomeTier::High),
            Treatment::Secondary,
        );
        assert!(result.total > 0.0);
        assert!((result.breakdown.sum() - result.total).abs() < EPS);
        assert!(result.breakdown.meat > 0.0);
        assert!(result.breakdown.dairy > 0.0);
        assert!(result.breakdown.plant > 0.0);
    }

    #[test]
    fn test_average_pass_from_per_capita() {
        // 5.2 kg/yr, 25% waste -> 3.9 consumed; /0.1 serving /52 = 0.75/week.
        // Consumption 1.17, production x1.2 = 1.404, fuel 0.15; removal 0.1
        // -> round2(1.053 + 1.404 + 0.15) = 2.61.
        let per_capita = HashMap::from([(FoodCategory::Beef, 5.2)]);
        let result = average_pass(
            &per_capita,
            &beef_lookups(),
            Some(IncomeTier::LowerMiddle),
            0.1,
        );
        assert_eq!(result.total, 2.61);
        assert!((result.breakdown.meat - 2.61).abs() < EPS);
    }

    #[test]
    fn test_average_pass_zero_serving_size_skips() {
        let mut lookups = beef_lookups();
        lookups
            .attributes_by_category
            .get_mut("beef")
            .unwrap()
            .serving_size = 0.0;
        let per_capita = HashMap::from([(FoodCategory::Beef, 5.2)]);
        let result = average_pass(&per_capita, &lookups, Some(IncomeTier::High), 0.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_average_pass_empty_country() {
        let result = average_pass(
            &HashMap::new(),
            &beef_lookups(),
            Some(IncomeTier::High),
            0.8,
        );
        assert_eq!(result.total, 0.0);
        assert_eq!(result.breakdown, FoodBreakdown::default());
    }
}
