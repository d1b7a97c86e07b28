//! Assertion utilities for testing.
//!
//! Floating-point comparisons for coordinates and whole tables.

use warehouse_mapper::CoordinateTable;

/// Default epsilon for coordinate comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two tables have the same rows, colors and layout, with
/// coordinates compared up to `epsilon`.
pub fn assert_tables_approx_eq(actual: &CoordinateTable, expected: &CoordinateTable) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Tables have different lengths: actual = {}, expected = {}",
        actual.len(),
        expected.len()
    );
    assert_eq!(actual.has_color_column(), expected.has_color_column());

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a.latitude - e.latitude).abs() <= DEFAULT_EPSILON
                && (a.longitude - e.longitude).abs() <= DEFAULT_EPSILON,
            "Row {} differs: actual = ({}, {}), expected = ({}, {})",
            i,
            a.latitude,
            a.longitude,
            e.latitude,
            e.longitude
        );
        assert_eq!(a.color, e.color, "Row {} color differs", i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.0 + 1e-12, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }
}
