pub mod cell;
pub mod normalize;
pub mod sample;
pub mod schema;
pub mod workbook;

use serde::{Deserialize, Serialize};

use crate::error::NprintError;
use normalize::normalize;
use schema::{
    CountryEnergyRow, CountryFoodRow, CountryIncomeRow, FoodAttributeRow, ProductionFactorRow,
    ServingSizeRow, SewageRemovalRow,
};

/// Raw reference-table snapshot as delivered by the data provider: per
/// logical table, an ordered list of string rows whose first row is the
/// header. Produced once per refresh cycle and treated as immutable for
/// the duration of a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceTables {
    #[serde(default)]
    pub production_factors: Vec<Vec<String>>,
    #[serde(default)]
    pub food_attributes: Vec<Vec<String>>,
    #[serde(default)]
    pub sewage_removal: Vec<Vec<String>>,
    #[serde(default)]
    pub country_food: Vec<Vec<String>>,
    #[serde(default)]
    pub country_income: Vec<Vec<String>>,
    #[serde(default)]
    pub country_energy: Vec<Vec<String>>,
    #[serde(default)]
    pub serving_sizes: Vec<Vec<String>>,
}

impl ReferenceTables {
    /// True when no table has any rows; `calculate` refuses to run against
    /// such a snapshot.
    pub fn is_empty(&self) -> bool {
        self.production_factors.is_empty()
            && self.food_attributes.is_empty()
            && self.sewage_removal.is_empty()
            && self.country_food.is_empty()
            && self.country_income.is_empty()
            && self.country_energy.is_empty()
            && self.serving_sizes.is_empty()
    }
}

/// The seven tables after header validation and positional typing. Rebuilt
/// fresh from the raw snapshot on every calculation.
#[derive(Debug, Clone, Default)]
pub struct NormalizedTables {
    pub production_factors: Vec<ProductionFactorRow>,
    pub food_attributes: Vec<FoodAttributeRow>,
    pub sewage_removal: Vec<SewageRemovalRow>,
    pub country_food: Vec<CountryFoodRow>,
    pub country_income: Vec<CountryIncomeRow>,
    pub country_energy: Vec<CountryEnergyRow>,
    pub serving_sizes: Vec<ServingSizeRow>,
}

impl NormalizedTables {
    pub fn from_raw(raw: &ReferenceTables) -> Result<NormalizedTables, NprintError> {
        Ok(NormalizedTables {
            production_factors: normalize(
                &raw.production_factors,
                &schema::PRODUCTION_FACTOR_HEADERS,
                "production_factors",
            )?
            .iter()
            .map(|c| ProductionFactorRow::from_cells(c))
            .collect(),
            food_attributes: normalize(
                &raw.food_attributes,
                &schema::FOOD_ATTRIBUTE_HEADERS,
                "food_attributes",
            )?
            .iter()
            .map(|c| FoodAttributeRow::from_cells(c))
            .collect(),
            sewage_removal: normalize(
                &raw.sewage_removal,
                &schema::SEWAGE_REMOVAL_HEADERS,
                "sewage_removal",
            )?
            .iter()
            .map(|c| SewageRemovalRow::from_cells(c))
            .collect(),
            country_food: normalize(
                &raw.country_food,
                &schema::COUNTRY_FOOD_HEADERS,
                "country_food",
            )?
            .iter()
            .map(|c| CountryFoodRow::from_cells(c))
            .collect(),
            country_income: normalize(
                &raw.country_income,
                &schema::COUNTRY_INCOME_HEADERS,
                "country_income",
            )?
            .iter()
            .map(|c| CountryIncomeRow::from_cells(c))
            .collect(),
            country_energy: normalize(
                &raw.country_energy,
                &schema::COUNTRY_ENERGY_HEADERS,
                "country_energy",
            )?
            .iter()
            .map(|c| CountryEnergyRow::from_cells(c))
            .collect(),
            serving_sizes: normalize(
                &raw.serving_sizes,
                &schema::SERVING_SIZE_HEADERS,
                "serving_sizes",
            )?
            .iter()
            .map(|c| ServingSizeRow::from_cells(c))
            .collect(),
        })
    }
}
