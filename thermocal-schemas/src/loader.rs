//! Dataset loading
//!
//! Loading is a one-shot, fail-fast step: every table is validated before the
//! engine exists, so a malformed dataset never reaches a conversion call.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thermocal_core::{constants::thermocouple::DEFAULT_SENSOR_TYPE, CalibrationEngine, CalibrationTable};

use crate::dataset::{Dataset, TypeRecord};
use crate::LoadError;

/// Loader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Sensor type active after loading
    pub default_type: String,

    /// Reject types that omit the `range` object
    pub require_declared_range: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            default_type: DEFAULT_SENSOR_TYPE.to_string(),
            require_declared_range: false,
        }
    }
}

impl LoaderOptions {
    /// Options with a different initial sensor type
    pub fn with_default_type(mut self, type_id: impl Into<String>) -> Self {
        self.default_type = type_id.into();
        self
    }

    /// Require every type to declare its range
    pub fn strict(mut self) -> Self {
        self.require_declared_range = true;
        self
    }
}

/// Build an engine from a parsed dataset with default options
pub fn load(dataset: &Dataset) -> Result<CalibrationEngine, LoadError> {
    load_with(dataset, &LoaderOptions::default())
}

/// Build an engine from a parsed dataset
pub fn load_with(dataset: &Dataset, options: &LoaderOptions) -> Result<CalibrationEngine, LoadError> {
    let tables = dataset
        .types
        .iter()
        .map(|(type_id, record)| build_table(type_id, record, options))
        .collect::<Result<Vec<_>, _>>()?;

    let engine = CalibrationEngine::new(tables, &options.default_type)?;

    log::info!(
        "Loaded {} calibration tables, active type {}",
        dataset.len(),
        engine.current_type()
    );
    Ok(engine)
}

/// Parse JSON text and build an engine
pub fn load_str(json: &str) -> Result<CalibrationEngine, LoadError> {
    load(&Dataset::from_json_str(json)?)
}

/// Parse a JSON stream and build an engine
pub fn load_reader<R: Read>(reader: R) -> Result<CalibrationEngine, LoadError> {
    load(&Dataset::from_reader(reader)?)
}

/// Read a dataset file and build an engine
pub fn load_path(path: impl AsRef<Path>) -> Result<CalibrationEngine, LoadError> {
    load(&Dataset::from_path(path)?)
}

fn build_table(
    type_id: &str,
    record: &TypeRecord,
    options: &LoaderOptions,
) -> Result<CalibrationTable, LoadError> {
    let breakpoints = record.breakpoints();

    let table = match record.range {
        Some(declared) => CalibrationTable::with_declared_range(type_id, breakpoints, declared.into()),
        None if options.require_declared_range => {
            return Err(LoadError::MissingRange {
                type_id: type_id.to_string(),
            })
        }
        None => {
            log::warn!("Type {type_id} declares no range; using breakpoint extremes");
            CalibrationTable::new(type_id, breakpoints)
        }
    }
    .map_err(|source| LoadError::Table {
        type_id: type_id.to_string(),
        source,
    })?;

    log::debug!("Type {}: {} breakpoints, range {:?}", type_id, table.len(), table.range());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermocal_core::{EngineError, Quantity, TableError};

    const TWO_TYPES: &str = r#"{
        "types": {
            "K": {
                "range": { "temp_min": 0, "temp_max": 200, "mv_min": 0, "mv_max": 8.138 },
                "data": [
                    { "temp": 0, "mv": 0.000 },
                    { "temp": 100, "mv": 4.096 },
                    { "temp": 200, "mv": 8.138 }
                ]
            },
            "E": {
                "data": [
                    { "temp": 0, "mv": 0.000 },
                    { "temp": 100, "mv": 6.319 }
                ]
            }
        }
    }"#;

    #[test]
    fn loads_with_default_type() {
        let engine = load_str(TWO_TYPES).unwrap();

        assert_eq!(engine.current_type(), "K");
        assert_eq!(engine.current_range().as_tuple(), (0.0, 200.0, 0.0, 8.138));
        assert_eq!(engine.range_of("E").unwrap().mv_max, 6.319);
    }

    #[test]
    fn configured_default_type() {
        let dataset = Dataset::from_json_str(TWO_TYPES).unwrap();
        let options = LoaderOptions::default().with_default_type("E");

        let engine = load_with(&dataset, &options).unwrap();
        assert_eq!(engine.current_type(), "E");

        let missing = LoaderOptions::default().with_default_type("S");
        assert!(matches!(
            load_with(&dataset, &missing),
            Err(LoadError::Engine(EngineError::DefaultTypeMissing { .. }))
        ));
    }

    #[test]
    fn strict_mode_requires_ranges() {
        let dataset = Dataset::from_json_str(TWO_TYPES).unwrap();

        let err = load_with(&dataset, &LoaderOptions::default().strict()).unwrap_err();
        assert!(matches!(err, LoadError::MissingRange { ref type_id } if type_id == "E"));
    }

    #[test]
    fn short_table_fails_load() {
        let json = r#"{ "types": { "K": { "data": [ { "temp": 0, "mv": 0 } ] } } }"#;

        let err = load_str(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Table { ref type_id, source: TableError::TooFewBreakpoints { count: 1 } }
                if type_id == "K"
        ));
    }

    #[test]
    fn non_monotonic_table_fails_load() {
        let json = r#"{ "types": { "K": { "data": [
            { "temp": 0, "mv": 0 },
            { "temp": 100, "mv": 4.096 },
            { "temp": 50, "mv": 8.138 }
        ] } } }"#;

        let err = load_str(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Table {
                source: TableError::NonMonotonic { quantity: Quantity::Temperature, index: 2 },
                ..
            }
        ));
    }

    #[test]
    fn drifted_range_fails_load() {
        let json = r#"{ "types": { "K": {
            "range": { "temp_min": 0, "temp_max": 1000, "mv_min": 0, "mv_max": 4.096 },
            "data": [ { "temp": 0, "mv": 0 }, { "temp": 100, "mv": 4.096 } ]
        } } }"#;

        let err = load_str(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Table { source: TableError::RangeMismatch { .. }, .. }
        ));
        assert!(err.to_string().contains("temp_max"));
    }

    #[test]
    fn empty_type_map_fails_load() {
        assert!(matches!(
            load_str(r#"{ "types": {} }"#),
            Err(LoadError::Engine(EngineError::NoTables))
        ));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: LoaderOptions = serde_json::from_str(r#"{ "default_type": "S" }"#).unwrap();

        assert_eq!(options.default_type, "S");
        assert!(!options.require_declared_range);
    }
}
