//! Core calibration engine for Thermocal
//!
//! Converts between hot-junction temperature and thermoelectric voltage for
//! thermocouple types (K, E, S, ...) using piecewise-linear reference tables.
//!
//! Key constraints:
//! - Inputs outside a table's inclusive range are rejected, never extrapolated
//! - Published breakpoints convert exactly, with no interpolation error
//! - Tables are validated once at construction and immutable afterwards
//!
//! ```no_run
//! use thermocal_core::CalibrationEngine;
//!
//! let engine = CalibrationEngine::reference();
//!
//! // Convert a type K reading
//! match engine.voltage_to_temperature(20.644) {
//!     Ok(temp) => {}, // 500.0°C
//!     Err(e) => {},   // Re-prompt with e's bounds
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod engine;
pub mod errors;
pub mod lookup;
pub mod range;
pub mod reference;
pub mod table;
pub mod traits;

// Public API
pub use engine::CalibrationEngine;
pub use errors::{ConversionError, ConversionResult, EngineError, TableError};
pub use range::{Bound, CalibrationRange, Quantity};
pub use table::{Breakpoint, CalibrationTable};
pub use traits::{Calibration, Validatable};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
