//! Domain-specific assertion macros for knorm harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* cell broke *which* normalisation invariant.

use knorm_core::Value;

// ---------------------------------------------------------------------------
// Cell assertions
// ---------------------------------------------------------------------------

/// Assert that a cell is a `Float` equal to the expected value.
///
/// ```rust
/// assert_float!(normalize(&"12k".into()).unwrap(), 12000.0);
/// ```
#[macro_export]
macro_rules! assert_float {
    ($value:expr, $expected:expr) => {{
        let value: knorm_core::Value = $value;
        let expected: f64 = $expected;
        match value {
            knorm_core::Value::Float(actual) if actual == expected => {}
            other => panic!(
                "assert_float! failed:\n  expected: Float({:?})\n  actual:   {:?}",
                expected, other
            ),
        }
    }};
}

/// Assert that a value came back with the same variant and payload.
#[macro_export]
macro_rules! assert_unchanged {
    ($input:expr, $output:expr) => {{
        let input: &knorm_core::Value = &$input;
        let output: &knorm_core::Value = &$output;
        if input != output {
            panic!(
                "assert_unchanged! failed:\n  input:  {:?} ({})\n  output: {:?} ({})",
                input,
                input.kind(),
                output,
                output.kind()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Column assertions
// ---------------------------------------------------------------------------

/// Assert that a column holds exactly the expected values, in order.
///
/// ```rust
/// assert_column!(table, "gdp_pcapita", [Value::Float(12000.0), Value::Null]);
/// ```
#[macro_export]
macro_rules! assert_column {
    ($table:expr, $name:expr, $expected:expr) => {{
        let table: &knorm_core::Table = &$table;
        let name: &str = $name;
        let expected: Vec<knorm_core::Value> = $expected.into_iter().collect();
        match table.column(name) {
            Some(column) => pretty_assertions::assert_eq!(
                column.values,
                expected,
                "column {:?} differs",
                name
            ),
            None => panic!(
                "assert_column! failed: no column {:?}.\n  Available: {:?}",
                name,
                table.column_names().collect::<Vec<_>>()
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Positional invariant helpers
// ---------------------------------------------------------------------------

/// Assert that `after` is a valid element-wise normalisation of `before`:
/// same length, and every position either unchanged or a marked text cell
/// turned into a float.
pub fn assert_positional(before: &[Value], after: &[Value]) {
    assert_eq!(
        before.len(),
        after.len(),
        "normalised column must keep its length"
    );
    for (row, (b, a)) in before.iter().zip(after).enumerate() {
        let marked = b.as_text().is_some_and(knorm_core::normalizer::has_marker);
        if marked {
            assert!(
                matches!(a, Value::Float(_)),
                "row {row}: marked {b:?} should become a float, got {a:?}"
            );
        } else {
            assert_eq!(b, a, "row {row}: unmarked value must pass through");
        }
    }
}
