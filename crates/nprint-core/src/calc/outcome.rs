use serde::{Deserialize, Serialize};

/// Food nitrogen loss split over the three category buckets, in kg N/yr.
/// Post-rescale, the three components sum to the pass's food total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodBreakdown {
    pub meat: f64,
    pub dairy: f64,
    pub plant: f64,
}

impl FoodBreakdown {
    pub fn sum(&self) -> f64 {
        self.meat + self.dairy + self.plant
    }
}

/// The seven energy components, in kg N/yr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub electricity: f64,
    pub natural_gas: f64,
    pub flight: f64,
    pub car: f64,
    pub public_transit: f64,
    pub spending: f64,
    pub top_down: f64,
}

impl EnergyBreakdown {
    pub fn components(&self) -> [f64; 7] {
        [
            self.electricity,
            self.natural_gas,
            self.flight,
            self.car,
            self.public_transit,
            self.spending,
            self.top_down,
        ]
    }
}

/// Sub-totals backing the breakdowns and the combined figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub total_user_food: f64,
    pub total_user_energy: f64,
    pub total_average_food: f64,
    /// The country-average energy aggregate, unrounded; it is already part
    /// of `average_n`.
    pub total_average_energy: f64,
}

/// One complete calculation outcome: the user's footprint, the
/// country-average baseline and the breakdowns behind both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// User food + user energy, kg N/yr.
    pub total_n: f64,
    /// Country-average food + country-average energy aggregate, kg N/yr.
    pub average_n: f64,
    pub food_breakdown: FoodBreakdown,
    pub average_food_breakdown: FoodBreakdown,
    pub energy_breakdown: EnergyBreakdown,
    /// Only the top-down component is populated for the average pass; the
    /// itemized components have no country-average counterpart.
    pub average_energy_breakdown: EnergyBreakdown,
    pub details: Details,
}
