//! Valid input domains of a calibration table
//!
//! A thermocouple table is only meaningful between its first and last
//! breakpoint. Both ends are inclusive: a reading exactly at the table
//! extreme is a published reference value, not an extrapolation.

use core::fmt;

use crate::constants::thermocouple::{TEMPERATURE_UNIT, VOLTAGE_UNIT};
use crate::errors::{ConversionError, ConversionResult};
use crate::traits::Validatable;

/// The two physical quantities a calibration table relates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Quantity {
    /// Hot-junction temperature in °C
    Temperature,
    /// Thermoelectric voltage in mV
    Voltage,
}

impl Quantity {
    /// Display unit for values of this quantity
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => TEMPERATURE_UNIT,
            Self::Voltage => VOLTAGE_UNIT,
        }
    }

    /// The opposite axis of the table
    pub const fn other(self) -> Self {
        match self {
            Self::Temperature => Self::Voltage,
            Self::Voltage => Self::Temperature,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => f.write_str("temperature"),
            Self::Voltage => f.write_str("voltage"),
        }
    }
}

/// One of the four range bounds, named as in the dataset format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Lowest temperature
    TempMin,
    /// Highest temperature
    TempMax,
    /// Lowest voltage
    MvMin,
    /// Highest voltage
    MvMax,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TempMin => "temp_min",
            Self::TempMax => "temp_max",
            Self::MvMin => "mv_min",
            Self::MvMax => "mv_max",
        })
    }
}

/// Inclusive temperature and voltage bounds of a table
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationRange {
    /// Lowest valid temperature (°C)
    pub temp_min: f64,
    /// Highest valid temperature (°C)
    pub temp_max: f64,
    /// Lowest valid voltage (mV)
    pub mv_min: f64,
    /// Highest valid voltage (mV)
    pub mv_max: f64,
}

impl CalibrationRange {
    /// Bounds for one quantity as `(min, max)`
    pub fn bounds(&self, quantity: Quantity) -> (f64, f64) {
        match quantity {
            Quantity::Temperature => (self.temp_min, self.temp_max),
            Quantity::Voltage => (self.mv_min, self.mv_max),
        }
    }

    /// Value of a single named bound
    pub fn bound(&self, bound: Bound) -> f64 {
        match bound {
            Bound::TempMin => self.temp_min,
            Bound::TempMax => self.temp_max,
            Bound::MvMin => self.mv_min,
            Bound::MvMax => self.mv_max,
        }
    }

    /// Whether `value` lies inside the inclusive interval for `quantity`
    pub fn contains(&self, quantity: Quantity, value: f64) -> bool {
        let (min, max) = self.bounds(quantity);
        min <= value && value <= max
    }

    /// Reject non-finite or out-of-range input
    pub fn check(&self, quantity: Quantity, value: f64) -> ConversionResult<()> {
        if !value.is_valid() {
            return Err(ConversionError::NonFinite { quantity });
        }

        if self.contains(quantity, value) {
            Ok(())
        } else {
            let (min, max) = self.bounds(quantity);
            Err(ConversionError::OutOfRange {
                quantity,
                value,
                min,
                max,
            })
        }
    }

    /// Bounds as the `(temp_min, temp_max, mv_min, mv_max)` tuple
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.temp_min, self.temp_max, self.mv_min, self.mv_max)
    }
}

impl From<CalibrationRange> for (f64, f64, f64, f64) {
    fn from(range: CalibrationRange) -> Self {
        range.as_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const K_RANGE: CalibrationRange = CalibrationRange {
        temp_min: 0.0,
        temp_max: 1000.0,
        mv_min: 0.0,
        mv_max: 41.276,
    };

    #[test]
    fn bounds_are_inclusive() {
        assert!(K_RANGE.check(Quantity::Temperature, 0.0).is_ok());
        assert!(K_RANGE.check(Quantity::Temperature, 1000.0).is_ok());
        assert!(K_RANGE.check(Quantity::Voltage, 41.276).is_ok());
    }

    #[test]
    fn out_of_range_carries_bounds() {
        let err = K_RANGE.check(Quantity::Voltage, 42.0).unwrap_err();
        assert_eq!(
            err,
            ConversionError::OutOfRange {
                quantity: Quantity::Voltage,
                value: 42.0,
                min: 0.0,
                max: 41.276,
            }
        );
    }

    #[test]
    fn non_finite_rejected_before_range() {
        assert_eq!(
            K_RANGE.check(Quantity::Temperature, f64::NAN),
            Err(ConversionError::NonFinite { quantity: Quantity::Temperature })
        );
        assert_eq!(
            K_RANGE.check(Quantity::Voltage, f64::INFINITY),
            Err(ConversionError::NonFinite { quantity: Quantity::Voltage })
        );
    }

    #[test]
    fn tuple_order() {
        assert_eq!(K_RANGE.as_tuple(), (0.0, 1000.0, 0.0, 41.276));
        assert_eq!(Quantity::Temperature.other(), Quantity::Voltage);
    }
}
