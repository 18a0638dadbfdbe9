//! Piecewise-Linear Lookup Over Calibration Breakpoints
//!
//! ## Motivation
//!
//! Thermocouple reference tables publish EMF at fixed temperature steps.
//! Between two published points the curve is close enough to a straight line
//! that linear interpolation reproduces the reference polynomials to within
//! the tolerance of the table itself, without evaluating 10th-order
//! polynomials per reading.
//!
//! ## Segment Search
//!
//! Breakpoints are strictly increasing in both columns, so either column can
//! be searched with a binary search:
//!
//! ```text
//! temperature:  0      50      100      150
//!               |-------|---x----|--------|
//!                        ^ lower  ^ upper
//! ```
//!
//! `partition_point` returns the first breakpoint not below the query. If
//! that breakpoint equals the query we return its partner value directly;
//! otherwise the segment is `[idx - 1, idx]`.
//!
//! ## Exactness at Breakpoints
//!
//! Evaluating the segment formula at its *upper* end gives
//! `y1 + (x2 - x1) * (y2 - y1) / (x2 - x1)`, which is not guaranteed to
//! round to `y2`. Exact matches are therefore resolved before interpolating,
//! so a published reference value always comes back bit-for-bit.
//!
//! ## Interpolation
//!
//! ```text
//! y = y1 + (x - x1) * (y2 - y1) / (x2 - x1)
//! ```
//!
//! The same formula serves both directions; only the roles of the two
//! columns swap.

use crate::range::Quantity;
use crate::table::Breakpoint;

/// Where a query value falls in a breakpoint sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Query equals the breakpoint at this index
    Exact(usize),
    /// Query lies strictly between `index` and `index + 1`
    Between(usize),
}

/// Locate `value` on the `axis` column using binary search
///
/// Returns `None` when the value is below the first or above the last
/// breakpoint.
pub fn locate(points: &[Breakpoint], axis: Quantity, value: f64) -> Option<Segment> {
    let idx = points.partition_point(|p| p.get(axis) < value);

    if idx < points.len() && points[idx].get(axis) == value {
        return Some(Segment::Exact(idx));
    }

    if idx == 0 || idx == points.len() {
        return None;
    }

    Some(Segment::Between(idx - 1))
}

/// Locate `value` by walking segments from the lowest breakpoint upward
///
/// Yields the same segment as [`locate`] for any strictly increasing table.
pub fn locate_linear(points: &[Breakpoint], axis: Quantity, value: f64) -> Option<Segment> {
    for (i, pair) in points.windows(2).enumerate() {
        let (lo, hi) = (pair[0].get(axis), pair[1].get(axis));

        if value == lo {
            return Some(Segment::Exact(i));
        }
        if value == hi {
            return Some(Segment::Exact(i + 1));
        }
        if lo < value && value < hi {
            return Some(Segment::Between(i));
        }
    }

    None
}

/// Resolve a located segment into a value on the opposite axis
pub fn evaluate(points: &[Breakpoint], from: Quantity, value: f64, segment: Segment) -> Option<f64> {
    let to = from.other();

    match segment {
        Segment::Exact(idx) => points.get(idx).map(|p| p.get(to)),
        Segment::Between(idx) => {
            let lower = points.get(idx)?;
            let upper = points.get(idx + 1)?;
            Some(interpolate_linear(
                value,
                (lower.get(from), lower.get(to)),
                (upper.get(from), upper.get(to)),
            ))
        }
    }
}

/// Map `value` on the `from` column onto the other column
pub fn interpolate(points: &[Breakpoint], from: Quantity, value: f64) -> Option<f64> {
    let segment = locate(points, from, value)?;
    evaluate(points, from, value, segment)
}

/// Straight-line interpolation through `(x1, y1)` and `(x2, y2)`
#[inline]
pub fn interpolate_linear(x: f64, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}
