//! Constants for Thermocal Core
//!
//! Centralized, documented constants used throughout the calibration engine.
//! Every numeric value lives here with a note on where it comes from.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference the governing standard where one applies
//! 3. Use descriptive names that include units

/// Thermocouple sensor types, units and table limits.
pub mod thermocouple;
