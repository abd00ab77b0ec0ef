use scalargrad_core::Value;

// Helper to build leaf values for integration tests.
// Added allow(dead_code) because usage across different test crates isn't
// detected easily.
#[allow(dead_code)]
pub(crate) fn leaves(values: &[f64]) -> Vec<Value> {
    values.iter().map(|&v| Value::new(v)).collect()
}
