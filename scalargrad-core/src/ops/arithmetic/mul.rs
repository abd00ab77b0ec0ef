// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::backward_op::BackwardOp;
use crate::autograd::{accumulate_gradient, upgrade_node};
use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value::Value;
use crate::value_data::ValueData;
use std::ops::Mul;
use std::sync::{Arc, RwLock, Weak};

// --- Backward Operation Structure ---

/// Backward context for n-ary multiplication.
///
/// Keeps the operand forward values captured at construction: the local
/// derivative with respect to operand `k` is the product of every *other*
/// operand's value.
#[derive(Debug)]
struct MulBackward {
    inputs: Vec<Weak<RwLock<ValueData>>>,
    output: Weak<RwLock<ValueData>>,
    values: Vec<f64>,
}

// --- Backward Operation Implementation ---

impl BackwardOp for MulBackward {
    fn backward(&self) -> Result<(), ScalarGradError> {
        let output = upgrade_node(&self.output, Op::Mul)?;
        let grad_output = output.read().expect("RwLock poisoned").grad;

        // Product-of-others per position, assembled from prefix and suffix
        // products rather than dividing the total, so operands equal to zero
        // keep a well-defined gradient.
        let n = self.values.len();
        let mut suffix = vec![1.0; n + 1];
        for k in (0..n).rev() {
            suffix[k] = suffix[k + 1] * self.values[k];
        }

        let mut prefix = 1.0;
        for (k, input) in self.inputs.iter().enumerate() {
            let others = prefix * suffix[k + 1];
            accumulate_gradient(input, grad_output * others, Op::Mul)?;
            prefix *= self.values[k];
        }
        Ok(())
    }
}

// --- Forward Operation ---

/// Multiplies a non-empty sequence of values, recording the operation on
/// the graph.
///
/// A single operand is the degenerate fold: the result mirrors it with a
/// local derivative of 1.
pub fn mul_op(inputs: &[Value]) -> Result<Value, ScalarGradError> {
    if inputs.is_empty() {
        return Err(ScalarGradError::EmptyOperandList { operation: Op::Mul });
    }
    Ok(build_mul(inputs.to_vec()))
}

/// Assembles the result node; callers guarantee `inputs` is non-empty.
fn build_mul(inputs: Vec<Value>) -> Value {
    let values: Vec<f64> = inputs.iter().map(Value::data).collect();
    let product: f64 = values.iter().product();

    let operand_refs: Vec<Weak<RwLock<ValueData>>> =
        inputs.iter().map(Value::downgrade).collect();
    let result = Value::from_op(product, Op::Mul, inputs);
    let grad_fn = MulBackward {
        inputs: operand_refs,
        output: result.downgrade(),
        values,
    };
    result.set_grad_fn(Arc::new(grad_fn));
    result
}

impl Mul for &Value {
    type Output = Value;

    /// `&a * &b` records a two-operand multiplication on the graph.
    fn mul(self, rhs: &Value) -> Value {
        build_mul(vec![self.clone(), rhs.clone()])
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        build_mul(vec![self, rhs])
    }
}

impl Mul<&Value> for Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        build_mul(vec![self, rhs.clone()])
    }
}

impl Mul<Value> for &Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        build_mul(vec![self.clone(), rhs])
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
