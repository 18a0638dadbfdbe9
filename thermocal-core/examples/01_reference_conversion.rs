//! Reference Table Conversion Example
//!
//! Converts readings with the built-in K, E and S reference tables and shows
//! how each conversion failure is meant to be handled.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_reference_conversion
//! ```

use thermocal_core::{CalibrationEngine, ConversionError};

fn report(label: &str, result: Result<f64, ConversionError>, unit: &str) {
    match result {
        Ok(value) => println!("  {label:<24} {value:>10.3} {unit}"),
        Err(ConversionError::OutOfRange { min, max, .. }) => {
            // Recoverable: ask again within the permitted interval
            println!("  {label:<24} rejected, enter a value in [{min}, {max}]");
        }
        Err(ConversionError::UnknownType { type_id }) => {
            println!("  {label:<24} no table for type {type_id}");
        }
        Err(e) => println!("  {label:<24} {e}"),
    }
}

fn main() {
    let mut engine = CalibrationEngine::reference();

    for type_id in ["K", "E", "S"] {
        if let Err(e) = engine.set_type(type_id) {
            println!("{e}");
            continue;
        }

        let range = engine.current_range();
        println!(
            "Type {type_id}: {}°C ~ {}°C, {}mV ~ {}mV",
            range.temp_min, range.temp_max, range.mv_min, range.mv_max
        );

        report("temperature 425.0°C", engine.temperature_to_voltage(425.0), "mV");
        report("voltage 5.000mV", engine.voltage_to_temperature(5.0), "°C");
        report("temperature 1500.0°C", engine.temperature_to_voltage(1500.0), "mV");
    }

    // Per-call selection leaves the active type alone
    report("type J, 100.0°C", engine.temperature_to_voltage_for("J", 100.0), "mV");
    println!("Active type is still {}", engine.current_type());
}
