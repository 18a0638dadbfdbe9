//! Error Types for Calibration Failures
//!
//! ## Design Philosophy
//!
//! Every failure in the engine is synchronous and deterministic: the same
//! input against the same table always fails the same way. Errors therefore
//! carry everything a caller needs to react without asking the engine again.
//!
//! ## Error Categories
//!
//! ### Construction
//! - `TableError`: a calibration table is malformed (too short, not monotonic,
//!   declared range disagrees with the breakpoints)
//! - `EngineError`: a set of tables cannot form an engine (duplicate ids,
//!   default type absent)
//!
//! ### Conversion
//! - `ConversionError::UnknownType`: caller asked for an unregistered type
//! - `ConversionError::OutOfRange`: input outside the table's inclusive domain;
//!   carries the bounds so the caller can re-prompt directly
//! - `ConversionError::NonFinite`: NaN or infinite input
//! - `ConversionError::InternalInconsistency`: no bracketing segment for an
//!   in-range value. This is a defect in table validation, never user error.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use thermocal_core::{CalibrationEngine, ConversionError};
//!
//! let engine = CalibrationEngine::reference();
//!
//! match engine.temperature_to_voltage(1500.0) {
//!     Ok(mv) => {
//!         // Show the reading
//!         let _ = mv;
//!     }
//!     Err(ConversionError::OutOfRange { min, max, .. }) => {
//!         // Re-prompt with the permitted interval
//!         assert_eq!((min, max), (0.0, 1000.0));
//!     }
//!     Err(other) => panic!("unexpected: {other}"),
//! }
//! ```

use alloc::string::String;

use thiserror_no_std::Error;

use crate::range::{Bound, Quantity};

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors raised while converting between temperature and voltage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Requested sensor type has no calibration table
    #[error("Unknown thermocouple type: {type_id}")]
    UnknownType {
        /// The identifier that was looked up
        type_id: String,
    },

    /// Input outside the inclusive range of the active table
    #[error("{quantity} {value} {} outside range [{min}, {max}] {}", .quantity.unit(), .quantity.unit())]
    OutOfRange {
        /// Which domain the input belongs to
        quantity: Quantity,
        /// The rejected input
        value: f64,
        /// Lowest accepted input
        min: f64,
        /// Highest accepted input
        max: f64,
    },

    /// Input is NaN or infinite
    #[error("Invalid {quantity}: not a finite number")]
    NonFinite {
        /// Which domain the input belongs to
        quantity: Quantity,
    },

    /// In-range input with no bracketing segment.
    ///
    /// Unreachable for tables built through `CalibrationTable::new`.
    #[error("Table {type_id} has no segment bracketing {quantity} {value}")]
    InternalInconsistency {
        /// Table being searched
        type_id: String,
        /// Axis that was searched
        quantity: Quantity,
        /// Value that could not be bracketed
        value: f64,
    },
}

impl ConversionError {
    /// Whether the caller can recover by supplying different input
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InternalInconsistency { .. })
    }
}

/// Malformed calibration table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Sensor type identifier is empty
    #[error("Sensor type identifier must not be empty")]
    EmptyTypeId,

    /// Fewer than two breakpoints
    #[error("Calibration table needs at least 2 breakpoints, got {count}")]
    TooFewBreakpoints {
        /// Number of breakpoints supplied
        count: usize,
    },

    /// A breakpoint holds NaN or infinity
    #[error("Breakpoint {index} is not a finite number")]
    NonFinite {
        /// Position of the offending breakpoint
        index: usize,
    },

    /// A column does not strictly increase
    #[error("{quantity} does not strictly increase at breakpoint {index}")]
    NonMonotonic {
        /// Column that failed
        quantity: Quantity,
        /// Position of the breakpoint that is not above its predecessor
        index: usize,
    },

    /// Distance between neighbouring breakpoints overflows `f64`
    #[error("{quantity} step into breakpoint {index} is too large to interpolate")]
    UnboundedSegment {
        /// Column whose step overflows
        quantity: Quantity,
        /// Position of the upper breakpoint of the segment
        index: usize,
    },

    /// Declared range bound differs from the breakpoint extreme
    #[error("Declared {bound} {declared} does not match table extreme {derived}")]
    RangeMismatch {
        /// Which bound disagrees
        bound: Bound,
        /// Value supplied alongside the table
        declared: f64,
        /// Value derived from the breakpoints
        derived: f64,
    },
}

/// A set of tables cannot form an engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// No tables supplied
    #[error("Calibration engine needs at least one table")]
    NoTables,

    /// Two tables share an identifier
    #[error("Duplicate thermocouple type: {type_id}")]
    DuplicateType {
        /// The repeated identifier
        type_id: String,
    },

    /// Configured default type has no table
    #[error("Default thermocouple type {type_id} has no calibration table")]
    DefaultTypeMissing {
        /// The configured default
        type_id: String,
    },
}
