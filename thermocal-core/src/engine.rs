//! Calibration engine: sensor type selection and conversion
//!
//! The engine owns one validated [`CalibrationTable`] per sensor type and
//! remembers which type is active. Conversions are pure functions of
//! `(active type, tables, input)`; the active type is the only mutable state.
//!
//! Two ways to pick a table:
//!
//! - **Stateful**: `set_type("E")`, then `temperature_to_voltage(t)`. Mirrors a
//!   bench tool with a type selector.
//! - **Per call**: `temperature_to_voltage_for("E", t)`. Needs only `&self`,
//!   so a shared engine can serve many callers without coordination.
//!
//! ```rust
//! use thermocal_core::CalibrationEngine;
//!
//! let mut engine = CalibrationEngine::reference();
//! assert_eq!(engine.current_type(), "K");
//!
//! let mv = engine.temperature_to_voltage(100.0)?;
//! assert_eq!(mv, 4.096);
//!
//! engine.set_type("E")?;
//! assert_eq!(engine.temperature_to_voltage(100.0)?, 6.319);
//! # Ok::<(), thermocal_core::ConversionError>(())
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::constants::thermocouple::DEFAULT_SENSOR_TYPE;
use crate::errors::{ConversionError, ConversionResult, EngineError};
use crate::range::{CalibrationRange, Quantity};
use crate::reference;
use crate::table::CalibrationTable;
use crate::traits::Calibration;

/// Table registry with an active sensor type
#[derive(Debug, Clone)]
pub struct CalibrationEngine {
    tables: BTreeMap<String, CalibrationTable>,
    current_type: String,
}

impl CalibrationEngine {
    /// Assemble an engine from validated tables
    ///
    /// `default_type` becomes the active type and must be one of the tables.
    pub fn new(
        tables: impl IntoIterator<Item = CalibrationTable>,
        default_type: &str,
    ) -> Result<Self, EngineError> {
        let mut registry = BTreeMap::new();

        for table in tables {
            let type_id = table.type_id().to_string();
            if registry.contains_key(&type_id) {
                return Err(EngineError::DuplicateType { type_id });
            }
            registry.insert(type_id, table);
        }

        if registry.is_empty() {
            return Err(EngineError::NoTables);
        }

        if !registry.contains_key(default_type) {
            return Err(EngineError::DefaultTypeMissing {
                type_id: default_type.to_string(),
            });
        }

        Ok(Self {
            tables: registry,
            current_type: default_type.to_string(),
        })
    }

    /// Engine over the built-in K, E and S reference tables, type K active
    pub fn reference() -> Self {
        let tables = reference::standard_tables()
            .into_iter()
            .map(|table| (table.type_id().to_string(), table))
            .collect();

        Self {
            tables,
            current_type: DEFAULT_SENSOR_TYPE.to_string(),
        }
    }

    /// Select the active sensor type
    ///
    /// On failure the active type is left unchanged.
    pub fn set_type(&mut self, type_id: &str) -> ConversionResult<()> {
        self.table(type_id)?;

        if self.current_type != type_id {
            log_debug!("Thermocouple type {} -> {}", self.current_type, type_id);
            self.current_type = type_id.to_string();
        }

        Ok(())
    }

    /// Identifier of the active sensor type
    pub fn current_type(&self) -> &str {
        &self.current_type
    }

    /// Registered sensor type identifiers, sorted
    pub fn known_types(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Whether a table exists for `type_id`
    pub fn contains_type(&self, type_id: &str) -> bool {
        self.tables.contains_key(type_id)
    }

    /// Table for a specific sensor type
    pub fn table(&self, type_id: &str) -> ConversionResult<&CalibrationTable> {
        self.tables
            .get(type_id)
            .ok_or_else(|| ConversionError::UnknownType {
                type_id: type_id.to_string(),
            })
    }

    /// Table of the active sensor type
    pub fn current_table(&self) -> &CalibrationTable {
        // current_type is only ever set to a registered key
        &self.tables[&self.current_type]
    }

    /// All tables, ordered by type identifier
    pub fn tables(&self) -> impl Iterator<Item = &CalibrationTable> {
        self.tables.values()
    }

    /// Valid range of the active sensor type
    pub fn current_range(&self) -> CalibrationRange {
        self.current_table().range()
    }

    /// Valid range of a specific sensor type
    pub fn range_of(&self, type_id: &str) -> ConversionResult<CalibrationRange> {
        self.table(type_id).map(CalibrationTable::range)
    }

    /// Voltage (mV) for a temperature (°C) using the active type
    pub fn temperature_to_voltage(&self, temp: f64) -> ConversionResult<f64> {
        self.current_table().convert(Quantity::Temperature, temp)
    }

    /// Temperature (°C) for a voltage (mV) using the active type
    pub fn voltage_to_temperature(&self, mv: f64) -> ConversionResult<f64> {
        self.current_table().convert(Quantity::Voltage, mv)
    }

    /// Voltage (mV) for a temperature (°C) using an explicit type
    pub fn temperature_to_voltage_for(&self, type_id: &str, temp: f64) -> ConversionResult<f64> {
        self.table(type_id)?.convert(Quantity::Temperature, temp)
    }

    /// Temperature (°C) for a voltage (mV) using an explicit type
    pub fn voltage_to_temperature_for(&self, type_id: &str, mv: f64) -> ConversionResult<f64> {
        self.table(type_id)?.convert(Quantity::Voltage, mv)
    }

    /// Convert many readings with the active type, stopping at the first failure
    pub fn convert_all(&self, from: Quantity, values: &[f64]) -> ConversionResult<Vec<f64>> {
        let table = self.current_table();
        values.iter().map(|&v| table.convert(from, v)).collect()
    }
}
