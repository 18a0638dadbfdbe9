//! Common test utilities and table generators for integration tests
//!
//! This module provides:
//! - Small hand-checked table excerpts
//! - Proptest strategies for arbitrary well-formed tables
//! - Assertion helpers for floating-point comparisons

#![allow(dead_code)]

use proptest::prelude::*;

use thermocal_core::{Breakpoint, CalibrationEngine, CalibrationTable};

/// Type K excerpt used for the hand-worked interpolation scenario
pub const K_EXCERPT: [(f64, f64); 3] = [(0.0, 0.000), (100.0, 4.096), (200.0, 8.138)];

/// Type E excerpt over the same temperatures as [`K_EXCERPT`]
pub const E_EXCERPT: [(f64, f64); 3] = [(0.0, 0.000), (100.0, 6.319), (200.0, 13.421)];

/// Build a table from `(°C, mV)` pairs, panicking on malformed data
pub fn table(type_id: &str, points: &[(f64, f64)]) -> CalibrationTable {
    let breakpoints: Vec<Breakpoint> = points.iter().copied().map(Breakpoint::from).collect();
    CalibrationTable::new(type_id, breakpoints).expect("fixture table is well formed")
}

/// Engine holding the K and E excerpts with K active
pub fn excerpt_engine() -> CalibrationEngine {
    CalibrationEngine::new(
        vec![table("K", &K_EXCERPT), table("E", &E_EXCERPT)],
        "K",
    )
    .expect("fixture engine is well formed")
}

/// Assert `actual` is within `rel` relative tolerance of `expected`
///
/// Values near zero are compared against an absolute floor of `rel`.
pub fn assert_close(actual: f64, expected: f64, rel: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= rel * scale,
        "expected {expected}, got {actual} (tolerance {rel})"
    );
}

/// Strategy for strictly increasing breakpoint sequences
///
/// Temperature steps are bounded away from zero so neighbouring breakpoints
/// never collapse under floating-point rounding. Segment slopes stay within
/// 0.005..1 mV/°C, which covers every standard thermocouple sensitivity.
pub fn arb_breakpoints() -> impl Strategy<Value = Vec<Breakpoint>> {
    (
        -300.0f64..300.0,
        -10.0f64..10.0,
        prop::collection::vec((0.1f64..100.0, 0.005f64..1.0), 1..24),
    )
        .prop_map(|(t0, v0, steps)| {
            let mut points = Vec::with_capacity(steps.len() + 1);
            points.push(Breakpoint::new(t0, v0));

            let (mut t, mut v) = (t0, v0);
            for (dt, slope) in steps {
                t += dt;
                v += dt * slope;
                points.push(Breakpoint::new(t, v));
            }
            points
        })
}

/// Strategy for arbitrary well-formed tables
pub fn arb_table() -> impl Strategy<Value = CalibrationTable> {
    arb_breakpoints().prop_map(table_from)
}

fn table_from(points: Vec<Breakpoint>) -> CalibrationTable {
    CalibrationTable::new("X", points).expect("generated table is well formed")
}
