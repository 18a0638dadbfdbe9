//! Calibration tables for a single thermocouple type
//!
//! A table is validated once when it is built and never changes afterwards.
//! Range bounds are derived from the first and last breakpoint, so the table
//! and its domain cannot drift apart.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::constants::thermocouple::MIN_BREAKPOINTS;
use crate::errors::{ConversionError, ConversionResult, TableError};
use crate::lookup;
use crate::range::{Bound, CalibrationRange, Quantity};
use crate::traits::{Calibration, Validatable};

/// A published (temperature, voltage) reference point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Hot-junction temperature (°C)
    pub temperature: f64,
    /// Thermoelectric voltage (mV)
    pub voltage: f64,
}

impl Breakpoint {
    /// Create a breakpoint from temperature (°C) and voltage (mV)
    pub const fn new(temperature: f64, voltage: f64) -> Self {
        Self { temperature, voltage }
    }

    /// Value on the given axis
    #[inline]
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Temperature => self.temperature,
            Quantity::Voltage => self.voltage,
        }
    }
}

impl From<(f64, f64)> for Breakpoint {
    fn from((temperature, voltage): (f64, f64)) -> Self {
        Self::new(temperature, voltage)
    }
}

/// Immutable calibration curve for one sensor type
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationTable {
    type_id: String,
    range: CalibrationRange,
    breakpoints: Vec<Breakpoint>,
}

impl CalibrationTable {
    /// Build a table, deriving its range from the breakpoint extremes
    pub fn new(
        type_id: impl Into<String>,
        breakpoints: impl Into<Vec<Breakpoint>>,
    ) -> Result<Self, TableError> {
        let type_id = type_id.into();
        let breakpoints = breakpoints.into();

        if type_id.is_empty() {
            return Err(TableError::EmptyTypeId);
        }

        validate_breakpoints(&breakpoints)?;

        let first = breakpoints[0];
        let last = breakpoints[breakpoints.len() - 1];
        let range = CalibrationRange {
            temp_min: first.temperature,
            temp_max: last.temperature,
            mv_min: first.voltage,
            mv_max: last.voltage,
        };

        Ok(Self {
            type_id,
            range,
            breakpoints,
        })
    }

    /// Build a table and cross-check an independently supplied range
    ///
    /// Every declared bound must equal the matching breakpoint extreme.
    pub fn with_declared_range(
        type_id: impl Into<String>,
        breakpoints: impl Into<Vec<Breakpoint>>,
        declared: CalibrationRange,
    ) -> Result<Self, TableError> {
        let table = Self::new(type_id, breakpoints)?;

        for bound in [Bound::TempMin, Bound::TempMax, Bound::MvMin, Bound::MvMax] {
            let derived = table.range.bound(bound);
            let declared = declared.bound(bound);
            if declared != derived {
                return Err(TableError::RangeMismatch {
                    bound,
                    declared,
                    derived,
                });
            }
        }

        Ok(table)
    }

    /// Sensor type identifier
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Inclusive temperature and voltage bounds
    pub fn range(&self) -> CalibrationRange {
        self.range
    }

    /// Breakpoints in ascending order
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Number of breakpoints
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Always false; a table holds at least two breakpoints
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }
}

impl Calibration for CalibrationTable {
    fn type_id(&self) -> &str {
        &self.type_id
    }

    fn range(&self) -> CalibrationRange {
        self.range
    }

    fn convert(&self, from: Quantity, value: f64) -> ConversionResult<f64> {
        self.range.check(from, value)?;

        match lookup::interpolate(&self.breakpoints, from, value) {
            Some(result) if result.is_valid() => Ok(result),
            _ => {
                log_warn!(
                    "Table {}: no finite {} for {} {}",
                    self.type_id,
                    from.other(),
                    from,
                    value
                );
                Err(ConversionError::InternalInconsistency {
                    type_id: self.type_id.to_string(),
                    quantity: from,
                    value,
                })
            }
        }
    }
}

fn validate_breakpoints(points: &[Breakpoint]) -> Result<(), TableError> {
    if points.len() < MIN_BREAKPOINTS {
        return Err(TableError::TooFewBreakpoints { count: points.len() });
    }

    if let Some(index) = points
        .iter()
        .position(|p| !p.temperature.is_valid() || !p.voltage.is_valid())
    {
        return Err(TableError::NonFinite { index });
    }

    for quantity in [Quantity::Temperature, Quantity::Voltage] {
        if let Some(offset) = points
            .windows(2)
            .position(|pair| pair[1].get(quantity) <= pair[0].get(quantity))
        {
            return Err(TableError::NonMonotonic {
                quantity,
                index: offset + 1,
            });
        }

        if let Some(offset) = points
            .windows(2)
            .position(|pair| !(pair[1].get(quantity) - pair[0].get(quantity)).is_valid())
        {
            return Err(TableError::UnboundedSegment {
                quantity,
                index: offset + 1,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn k_excerpt() -> Vec<Breakpoint> {
        vec![
            Breakpoint::new(0.0, 0.000),
            Breakpoint::new(100.0, 4.096),
            Breakpoint::new(200.0, 8.138),
        ]
    }

    #[test]
    fn range_derived_from_extremes() {
        let table = CalibrationTable::new("K", k_excerpt()).unwrap();

        assert_eq!(table.range().as_tuple(), (0.0, 200.0, 0.0, 8.138));
        assert_eq!(table.breakpoints().len(), 3);
        assert_eq!(table.type_id(), "K");
    }

    #[test]
    fn rejects_short_tables() {
        assert_eq!(
            CalibrationTable::new("K", vec![Breakpoint::new(0.0, 0.0)]),
            Err(TableError::TooFewBreakpoints { count: 1 })
        );
        assert_eq!(
            CalibrationTable::new("K", Vec::new()),
            Err(TableError::TooFewBreakpoints { count: 0 })
        );
    }

    #[test]
    fn rejects_non_monotonic_temperature() {
        let points = vec![
            Breakpoint::new(0.0, 0.0),
            Breakpoint::new(100.0, 4.096),
            Breakpoint::new(100.0, 5.0),
        ];
        assert_eq!(
            CalibrationTable::new("K", points),
            Err(TableError::NonMonotonic {
                quantity: Quantity::Temperature,
                index: 2,
            })
        );
    }

    #[test]
    fn rejects_non_monotonic_voltage() {
        let points = vec![
            Breakpoint::new(0.0, 0.0),
            Breakpoint::new(100.0, 4.096),
            Breakpoint::new(200.0, 4.0),
        ];
        assert_eq!(
            CalibrationTable::new("K", points),
            Err(TableError::NonMonotonic {
                quantity: Quantity::Voltage,
                index: 2,
            })
        );
    }

    #[test]
    fn rejects_non_finite_and_empty_id() {
        let points = vec![Breakpoint::new(0.0, 0.0), Breakpoint::new(f64::NAN, 1.0)];
        assert_eq!(
            CalibrationTable::new("K", points),
            Err(TableError::NonFinite { index: 1 })
        );
        assert_eq!(CalibrationTable::new("", k_excerpt()), Err(TableError::EmptyTypeId));
    }

    #[test]
    fn rejects_steps_that_overflow() {
        let points = vec![Breakpoint::new(0.0, -1e308), Breakpoint::new(1.0, 1e308)];
        assert_eq!(
            CalibrationTable::new("K", points),
            Err(TableError::UnboundedSegment {
                quantity: Quantity::Voltage,
                index: 1,
            })
        );

        let points = vec![
            Breakpoint::new(-1e308, 0.0),
            Breakpoint::new(0.0, 1.0),
            Breakpoint::new(1e308, 2.0),
            Breakpoint::new(1.7e308, 3.0),
        ];
        assert!(CalibrationTable::new("K", points).is_ok());
    }

    #[test]
    fn overflowing_interpolation_is_inconsistency() {
        let points = vec![Breakpoint::new(0.0, 0.0), Breakpoint::new(1e300, 1e300)];
        let table = CalibrationTable::new("K", points).unwrap();

        assert_eq!(
            table.temperature_to_voltage(5e299),
            Err(ConversionError::InternalInconsistency {
                type_id: "K".to_string(),
                quantity: Quantity::Temperature,
                value: 5e299,
            })
        );
        assert_eq!(table.voltage_to_temperature(1e300), Ok(1e300));
    }

    #[test]
    fn declared_range_must_match() {
        let declared = CalibrationRange {
            temp_min: 0.0,
            temp_max: 200.0,
            mv_min: 0.0,
            mv_max: 8.138,
        };
        assert!(CalibrationTable::with_declared_range("K", k_excerpt(), declared).is_ok());

        let drifted = CalibrationRange {
            mv_max: 8.2,
            ..declared
        };
        assert_eq!(
            CalibrationTable::with_declared_range("K", k_excerpt(), drifted),
            Err(TableError::RangeMismatch {
                bound: Bound::MvMax,
                declared: 8.2,
                derived: 8.138,
            })
        );
    }

    #[test]
    fn converts_through_trait() {
        let table = CalibrationTable::new("K", k_excerpt()).unwrap();

        let mv = table.temperature_to_voltage(50.0).unwrap();
        assert!((mv - 2.048).abs() < 1e-12);
        assert_eq!(table.voltage_to_temperature(8.138), Ok(200.0));
        assert!(matches!(
            table.temperature_to_voltage(200.1),
            Err(ConversionError::OutOfRange { .. })
        ));
    }
}
