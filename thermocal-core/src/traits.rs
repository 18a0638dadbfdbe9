//! Core traits for calibration curves
//!
//! Keep them simple - a calibration curve only needs to know its domain and
//! how to map one quantity onto the other.

use crate::errors::ConversionResult;
use crate::range::{CalibrationRange, Quantity};

/// Bidirectional temperature/voltage conversion for one sensor type
pub trait Calibration {
    /// Identifier of the sensor type this curve describes
    fn type_id(&self) -> &str;

    /// Inclusive input domains
    fn range(&self) -> CalibrationRange;

    /// Map `value` on the `from` axis onto the opposite axis
    fn convert(&self, from: Quantity, value: f64) -> ConversionResult<f64>;

    /// Thermoelectric voltage (mV) for a temperature (°C)
    fn temperature_to_voltage(&self, temp: f64) -> ConversionResult<f64> {
        self.convert(Quantity::Temperature, temp)
    }

    /// Temperature (°C) for a thermoelectric voltage (mV)
    fn voltage_to_temperature(&self, mv: f64) -> ConversionResult<f64> {
        self.convert(Quantity::Voltage, mv)
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is usable (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
