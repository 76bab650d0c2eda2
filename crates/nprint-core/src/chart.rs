use serde::{Deserialize, Serialize};

use crate::calc::outcome::CalculationResult;

/// Which breakdown to derive a chart from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Food,
    Energy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub percent_of_total: f64,
}

/// Derive a chart series from a calculation result: the user-pass
/// breakdown of the requested kind, with each component's share of its
/// sub-total. Zero and negative components are filtered out.
pub fn chart_series(result: &CalculationResult, kind: ChartKind) -> Vec<ChartPoint> {
    let (entries, total): (Vec<(&str, f64)>, f64) = match kind {
        ChartKind::Food => (
            vec![
                ("Meat Products", result.food_breakdown.meat),
                ("Dairy & Eggs", result.food_breakdown.dairy),
                ("Plant-based", result.food_breakdown.plant),
            ],
            result.details.total_user_food,
        ),
        ChartKind::Energy => (
            vec![
                ("Household Electricity", result.energy_breakdown.electricity),
                ("Household Natural Gas", result.energy_breakdown.natural_gas),
                ("Flights", result.energy_breakdown.flight),
                ("Car Travel", result.energy_breakdown.car),
                ("Public Transit", result.energy_breakdown.public_transit),
                ("Spending", result.energy_breakdown.spending),
                ("Other (Top-down)", result.energy_breakdown.top_down),
            ],
            result.details.total_user_energy,
        ),
    };

    let total = if total > 0.0 { total } else { 1.0 };

    entries
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|(label, value)| ChartPoint {
            label: label.to_string(),
            value,
            percent_of_total: value / total * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::outcome::{Details, EnergyBreakdown, FoodBreakdown};

    fn result() -> CalculationResult {
        CalculationResult {
            food_breakdown: FoodBreakdown {
                meat: 6.0,
                dairy: 2.0,
                plant: 0.0,
            },
            energy_breakdown: EnergyBreakdown {
                electricity: 1.0,
                spending: 2.54,
                ..Default::default()
            },
            details: Details {
                total_user_food: 8.0,
                total_user_energy: 3.54,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_food_series_filters_zero_components() {
        let series = chart_series(&result(), ChartKind::Food);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Meat Products");
        assert_eq!(series[0].value, 6.0);
        assert!((series[0].percent_of_total - 75.0).abs() < 1e-9);
        assert_eq!(series[1].label, "Dairy & Eggs");
    }

    #[test]
    fn test_energy_series() {
        let series = chart_series(&result(), ChartKind::Energy);
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Household Electricity", "Spending"]);
    }

    #[test]
    fn test_empty_result_yields_empty_series() {
        let series = chart_series(&CalculationResult::default(), ChartKind::Food);
        assert!(series.is_empty());
    }
}
