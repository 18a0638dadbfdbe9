//! Calibration Dataset Format and Loader
//!
//! ## Overview
//!
//! The calibration engine never reads files. This crate owns the dataset
//! contract: a JSON document mapping sensor type identifiers to breakpoint
//! tables. It parses the document, validates every table, and hands back a
//! ready [`CalibrationEngine`].
//!
//! ## Dataset Layout
//!
//! ```json
//! {
//!   "types": {
//!     "K": {
//!       "range": { "temp_min": 0, "temp_max": 1000, "mv_min": 0, "mv_max": 41.276 },
//!       "data": [ { "temp": 0, "mv": 0.000 }, { "temp": 50, "mv": 2.023 }, ... ]
//!     }
//!   }
//! }
//! ```
//!
//! - `data` must hold at least two points, strictly increasing in both
//!   `temp` and `mv`
//! - `range` is optional. When present it is a cross-check: each bound must
//!   equal the matching extreme of `data`, otherwise loading fails. The
//!   engine always uses the bounds derived from `data`.
//!
//! ## Failure Model
//!
//! Loading is all-or-nothing. The first malformed table aborts the load with
//! a [`LoadError`] naming the type and the violated rule; conversion errors
//! (`ConversionError`) are a separate type and never appear here.
//!
//! ## Usage Example
//!
//! ```rust
//! use thermocal_schemas::load_str;
//!
//! let engine = load_str(r#"{
//!     "types": {
//!         "K": { "data": [ { "temp": 0, "mv": 0.0 }, { "temp": 100, "mv": 4.096 } ] }
//!     }
//! }"#)?;
//!
//! assert_eq!(engine.temperature_to_voltage(100.0)?, 4.096);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod dataset;
pub mod loader;

pub use dataset::{BreakpointRecord, Dataset, RangeRecord, TypeRecord};
pub use loader::{load, load_path, load_reader, load_str, load_with, LoaderOptions};

use thermocal_core::{EngineError, TableError};

/// Dataset loading errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum LoadError {
    /// Dataset file could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid JSON or has the wrong shape
    #[error("Failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Root object has no `types` key
    #[error("Dataset has no \"types\" object")]
    MissingTypes,

    /// A type omits `range` while ranges are required
    #[error("Type {type_id} declares no range")]
    MissingRange {
        /// Offending sensor type
        type_id: String,
    },

    /// A type's table is malformed
    #[error("Calibration table {type_id} is malformed: {source}")]
    Table {
        /// Offending sensor type
        type_id: String,
        /// Violated table rule
        source: TableError,
    },

    /// Tables cannot form an engine
    #[error("Cannot build calibration engine: {0}")]
    Engine(#[from] EngineError),
}
