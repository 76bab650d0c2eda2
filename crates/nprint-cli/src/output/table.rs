use nprint_core::{chart_series, CalculationResult, ChartKind};

pub fn print(result: &CalculationResult, country: &str) {
    println!("=== Nitrogen footprint: {country} ===\n");

    println!("  Your total:       {:>8.2} kg N/yr", result.total_n);
    println!("    Food:           {:>8.2} kg N/yr", result.details.total_user_food);
    println!("    Energy:         {:>8.2} kg N/yr", result.details.total_user_energy);
    println!("  Country average:  {:>8.2} kg N/yr\n", result.average_n);

    let food = chart_series(result, ChartKind::Food);
    if !food.is_empty() {
        println!("  Food breakdown");
        print_series(&food);
    }

    let energy = chart_series(result, ChartKind::Energy);
    if !energy.is_empty() {
        println!("  Energy breakdown");
        print_series(&energy);
    }
}

fn print_series(series: &[nprint_core::ChartPoint]) {
    let max_label = series.iter().map(|p| p.label.len()).max().unwrap_or(10);
    for point in series {
        println!(
            "    {:<width$}  {:>8.2} kg N/yr  ({:.1}%)",
            point.label,
            point.value,
            point.percent_of_total,
            width = max_label
        );
    }
    println!();
}
