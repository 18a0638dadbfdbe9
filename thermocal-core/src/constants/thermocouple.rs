//! Thermocouple Calibration Constants
//!
//! Sensor type identifiers, units, and limits that apply to every
//! calibration table regardless of alloy pair.

// ===== SENSOR TYPES =====

/// Sensor type selected when no other type is configured.
///
/// Type K (chromel-alumel) is the general-purpose industrial thermocouple
/// and the one most reference tools default to.
pub const DEFAULT_SENSOR_TYPE: &str = "K";

/// Type K (chromel-alumel), -270°C to 1372°C nominal.
pub const TYPE_K: &str = "K";

/// Type E (chromel-constantan), highest output per degree of the base-metal types.
pub const TYPE_E: &str = "E";

/// Type S (platinum-10% rhodium / platinum), noble-metal type for high temperatures.
pub const TYPE_S: &str = "S";

// ===== TABLE LIMITS =====

/// Minimum number of breakpoints in a calibration table.
///
/// Linear interpolation needs at least one segment, which takes two points.
pub const MIN_BREAKPOINTS: usize = 2;

// ===== UNITS =====

/// Display unit for temperatures.
///
/// Calibration tables are published in degrees Celsius (ITS-90).
pub const TEMPERATURE_UNIT: &str = "°C";

/// Display unit for thermoelectric voltages.
///
/// Reference tables give EMF in millivolts with the reference junction at 0°C.
pub const VOLTAGE_UNIT: &str = "mV";

// ===== NUMERICS =====

/// Relative tolerance for temperature -> voltage -> temperature round trips.
///
/// Both directions interpolate on the same segment, so the only error left
/// is floating-point rounding.
pub const ROUND_TRIP_RELATIVE_TOLERANCE: f64 = 1e-9;
