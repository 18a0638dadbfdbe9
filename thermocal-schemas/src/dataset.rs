//! Calibration dataset records
//!
//! Mirrors the on-disk JSON layout one to one:
//!
//! ```json
//! {
//!   "types": {
//!     "K": {
//!       "range": { "temp_min": 0, "temp_max": 100, "mv_min": 0, "mv_max": 4.096 },
//!       "data": [ { "temp": 0, "mv": 0.0 }, { "temp": 100, "mv": 4.096 } ]
//!     }
//!   }
//! }
//! ```
//!
//! Records are plain data with no invariants; [`crate::load`] turns them into
//! validated tables.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thermocal_core::{Breakpoint, CalibrationEngine, CalibrationRange, CalibrationTable};

use crate::LoadError;

/// A complete calibration dataset, keyed by sensor type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    /// Per-type tables, ordered by type identifier
    pub types: BTreeMap<String, TypeRecord>,
}

/// One sensor type's table as stored in the dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    /// Declared bounds, cross-checked against `data` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeRecord>,

    /// Breakpoints, ascending by temperature
    #[serde(default)]
    pub data: Vec<BreakpointRecord>,
}

/// Declared temperature and voltage bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeRecord {
    /// Lowest temperature (°C)
    pub temp_min: f64,
    /// Highest temperature (°C)
    pub temp_max: f64,
    /// Lowest voltage (mV)
    pub mv_min: f64,
    /// Highest voltage (mV)
    pub mv_max: f64,
}

/// One calibration point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakpointRecord {
    /// Temperature (°C)
    pub temp: f64,
    /// Voltage (mV)
    pub mv: f64,
}

/// Root object as parsed, before the `types` key is confirmed
#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    types: Option<BTreeMap<String, TypeRecord>>,
}

impl Dataset {
    /// Parse a dataset from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse a dataset from a JSON byte stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let raw: RawDataset = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Read and parse a dataset file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        log::debug!("Reading calibration dataset from {}", path.display());

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Capture the tables of a loaded engine, with derived ranges written out
    pub fn from_engine(engine: &CalibrationEngine) -> Self {
        let types = engine
            .tables()
            .map(|table| (table.type_id().to_string(), TypeRecord::from(table)))
            .collect();

        Self { types }
    }

    /// Serialize in the on-disk layout
    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Number of sensor types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the dataset holds no types
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn from_raw(raw: RawDataset) -> Result<Self, LoadError> {
        let types = raw.types.ok_or(LoadError::MissingTypes)?;
        Ok(Self { types })
    }
}

impl TypeRecord {
    /// Breakpoints in core form
    pub fn breakpoints(&self) -> Vec<Breakpoint> {
        self.data.iter().map(|&p| p.into()).collect()
    }
}

impl From<&CalibrationTable> for TypeRecord {
    fn from(table: &CalibrationTable) -> Self {
        Self {
            range: Some(table.range().into()),
            data: table.breakpoints().iter().map(|&p| p.into()).collect(),
        }
    }
}

impl From<RangeRecord> for CalibrationRange {
    fn from(r: RangeRecord) -> Self {
        Self {
            temp_min: r.temp_min,
            temp_max: r.temp_max,
            mv_min: r.mv_min,
            mv_max: r.mv_max,
        }
    }
}

impl From<CalibrationRange> for RangeRecord {
    fn from(r: CalibrationRange) -> Self {
        Self {
            temp_min: r.temp_min,
            temp_max: r.temp_max,
            mv_min: r.mv_min,
            mv_max: r.mv_max,
        }
    }
}

impl From<BreakpointRecord> for Breakpoint {
    fn from(p: BreakpointRecord) -> Self {
        Breakpoint::new(p.temp, p.mv)
    }
}

impl From<Breakpoint> for BreakpointRecord {
    fn from(p: Breakpoint) -> Self {
        Self {
            temp: p.temperature,
            mv: p.voltage,
        }
    }
}
