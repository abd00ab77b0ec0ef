use crate::error::ScalarGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {loss_plus}, f(x-eps): {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a scalar expression over the given leaves. The analytical
/// gradients come from one forward and backward pass; the numerical gradient
/// of input `i` is `(f(x_i + eps) - f(x_i - eps)) / (2 * eps)`, each side
/// evaluated on a fresh graph. The two are compared with a combined
/// absolute/relative tolerance.
///
/// Expressions that are kinked at the evaluation point (a ReLU input within
/// `epsilon` of zero) produce one-sided numerical gradients and will report
/// a mismatch; keep test points away from such boundaries.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- 1. Analytical gradients from one forward and backward pass ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- 2. Numerical gradients, perturbing one input at a time ---
    for (i, &x) in inputs.iter().enumerate() {
        let loss_plus = eval_at(&func, inputs, i, x + epsilon)?;
        let loss_minus = eval_at(&func, inputs, i, x - epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        let analytical_grad = analytical[i];
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        log::debug!(
            "check_grad: input {} analytical {} numerical {}",
            i,
            analytical_grad,
            numerical_grad
        );

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Re-evaluates `func` on a fresh graph with input `index` replaced by `x`.
fn eval_at<F>(func: &F, inputs: &[f64], index: usize, x: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let mut perturbed: Vec<Value> = inputs.iter().map(|&v| Value::new(v)).collect();
    perturbed[index] = Value::new(x);
    let output = func(&perturbed).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.data())
}

// --- Tests ---
