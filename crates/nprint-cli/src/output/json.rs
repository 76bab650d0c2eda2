use nprint_core::error::NprintError;
use nprint_core::CalculationResult;

pub fn print(result: &CalculationResult) -> Result<(), NprintError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
