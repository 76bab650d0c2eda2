//! Header schemas and typed row structs for the seven reference tables.
//!
//! The header arrays are the exact first rows the upstream spreadsheets
//! carry; `normalize` checks them against incoming data before any
//! positional zipping happens.

use serde::{Deserialize, Serialize};

use super::cell::{numeric, text};

pub const PRODUCTION_FACTOR_HEADERS: [&str; 5] = [
    "Category",
    "High-income countries",
    "Upper-middle-income countries",
    "Lower-middle-income countries",
    "Low-income countries",
];

pub const FOOD_ATTRIBUTE_HEADERS: [&str; 5] = [
    "name",
    "Food waste %",
    "Fossil fuel (kg N/year)",
    "N content (kg N/kg food)",
    "Serving size",
];

pub const SEWAGE_REMOVAL_HEADERS: [&str; 2] = ["Income", "N_removal_rating"];

pub const COUNTRY_FOOD_HEADERS: [&str; 4] = ["iso_a3", "Area", "Category", "kg/cap/year"];

pub const COUNTRY_INCOME_HEADERS: [&str; 3] = ["Country", "iso_a3", "Income"];

pub const COUNTRY_ENERGY_HEADERS: [&str; 22] = [
    "Country",
    "code",
    "pop",
    "Data source (NG)",
    "Final consumption (NG)",
    "Road (NG)",
    "Other transport (NG)",
    "Commerce and public services (NG)",
    "Households (NG)",
    "Other consumers (NG)",
    "Rest (NG)",
    "Data source (Elec)",
    "Final consumption (Elec)",
    "Road (Elec)",
    "Other transport (Elec)",
    "Commerce and public services (Elec)",
    "Households (Elec)",
    "Other consumers (Elec)",
    "Rest (Elec)",
    "Flights per capita",
    "flight time (hours)",
    "renewables",
];

pub const SERVING_SIZE_HEADERS: [&str; 2] = ["name", "Serving size"];

/// One row of the production-factor table: a category and its multiplier
/// per income tier. Blank tier cells read as 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionFactorRow {
    pub category: String,
    pub high: f64,
    pub upper_middle: f64,
    pub lower_middle: f64,
    pub low: f64,
}

impl ProductionFactorRow {
    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            category: text(cells, 0),
            high: numeric(cells, 1),
            upper_middle: numeric(cells, 2),
            lower_middle: numeric(cells, 3),
            low: numeric(cells, 4),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodAttributeRow {
    pub name: String,
    /// As found in the sheet; may be a fraction or a percentage. The lookup
    /// builder re-normalizes values > 1.
    pub food_waste: f64,
    pub fossil_fuel: f64,
    pub n_content: f64,
    pub serving_size: f64,
}

impl FoodAttributeRow {
    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            name: text(cells, 0),
            food_waste: numeric(cells, 1),
            fossil_fuel: numeric(cells, 2),
            n_content: numeric(cells, 3),
            serving_size: numeric(cells, 4),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SewageRemovalRow {
    pub income: String,
    pub removal_rating: f64,
}

impl SewageRemovalRow {
    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            income: text(cells, 0),
            removal_rating: numeric(cells, 1),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryFoodRow {
    pub iso_a3: String,
    pub area: String,
    pub category: String,
    pub kg_per_capita_year: f64,
}

impl CountryFoodRow {
    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            iso_a3: text(cells, 0),
            area: text(cells, 1),
            category: text(cells, 2),
            kg_per_capita_year: numeric(cells, 3),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryIncomeRow {
    pub country: String,
    pub iso_a3: String,
    pub income: String,
}

impl CountryIncomeRow {
    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            country: text(cells, 0),
            iso_a3: text(cells, 1),
            income: text(cells, 2),
        }
    }
}

/// One country's energy profile: population, per-sector natural-gas and
/// electricity consumption in terajoules, flight statistics and the
/// renewable-mix electricity factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryEnergyRow {
    pub country: String,
    pub code: String,
    pub population: f64,
    pub data_source_ng: String,
    pub final_consumption_ng: f64,
    pub road_ng: f64,
    pub other_transport_ng: f64,
    pub commerce_ng: f64,
    pub households_ng: f64,
    pub other_consumers_ng: f64,
    pub rest_ng: f64,
    pub data_source_elec: String,
    pub final_consumption_elec: f64,
    pub road_elec: f64,
    pub other_transport_elec: f64,
    pub commerce_elec: f64,
    pub households_elec: f64,
    pub other_consumers_elec: f64,
    pub rest_elec: f64,
    pub flights_per_capita: f64,
    pub flight_time_hours: f64,
    pub renewables: f64,
}

impl CountryEnergyRow {
    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            country: text(cells, 0),
            code: text(cells, 1),
            population: numeric(cells, 2),
            data_source_ng: text(cells, 3),
            final_consumption_ng: numeric(cells, 4),
            road_ng: numeric(cells, 5),
            other_transport_ng: numeric(cells, 6),
            commerce_ng: numeric(cells, 7),
            households_ng: numeric(cells, 8),
            other_consumers_ng: numeric(cells, 9),
            rest_ng: numeric(cells, 10),
            data_source_elec: text(cells, 11),
            final_consumption_elec: numeric(cells, 12),
            road_elec: numeric(cells, 13),
            other_transport_elec: numeric(cells, 14),
            commerce_elec: numeric(cells, 15),
            households_elec: numeric(cells, 16),
            other_consumers_elec: numeric(cells, 17),
            rest_elec: numeric(cells, 18),
            flights_per_capita: numeric(cells, 19),
            flight_time_hours: numeric(cells, 20),
            renewables: numeric(cells, 21),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServingSizeRow {
    pub name: String,
    pub serving_size: f64,
}

impl ServingSizeRow {
    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            name: text(cells, 0),
            serving_size: numeric(cells, 1),
        }
    }
}
