use crate::value::Value;

/// Checks that a node holds the expected scalar and gradient, within
/// tolerance. Panics with a formatted diagnostic on mismatch.
pub fn check_value_near(actual: &Value, expected_data: f64, expected_grad: f64, tolerance: f64) {
    let data = actual.data();
    let diff = (data - expected_data).abs();
    if diff > tolerance {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            data, expected_data, diff, tolerance
        );
    }

    let grad = actual.grad();
    let diff = (grad - expected_grad).abs();
    if diff > tolerance {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad, expected_grad, diff, tolerance
        );
    }
}
