// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::backward_op::BackwardOp;
use crate::autograd::{accumulate_gradient, upgrade_node};
use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value::Value;
use crate::value_data::ValueData;
use std::ops::Sub;
use std::sync::{Arc, RwLock, Weak};

// --- Backward Operation Structure ---

/// Backward context for n-ary subtraction.
#[derive(Debug)]
struct SubBackward {
    inputs: Vec<Weak<RwLock<ValueData>>>,
    output: Weak<RwLock<ValueData>>,
}

// --- Backward Operation Implementation ---

impl BackwardOp for SubBackward {
    fn backward(&self) -> Result<(), ScalarGradError> {
        let output = upgrade_node(&self.output, Op::Sub)?;
        let grad_output = output.read().expect("RwLock poisoned").grad;

        // Position decides the sign: the minuend gets +1, every subtrahend -1.
        for (k, input) in self.inputs.iter().enumerate() {
            let contribution = if k == 0 { grad_output } else { -grad_output };
            accumulate_gradient(input, contribution, Op::Sub)?;
        }
        Ok(())
    }
}

// --- Forward Operation ---

/// Subtracts every later value from the first, recording the operation on
/// the graph: `inputs[0] - inputs[1] - ... - inputs[n-1]`.
///
/// A single operand is the degenerate fold: the result mirrors it with a
/// local derivative of 1.
pub fn sub_op(inputs: &[Value]) -> Result<Value, ScalarGradError> {
    if inputs.is_empty() {
        return Err(ScalarGradError::EmptyOperandList { operation: Op::Sub });
    }
    Ok(build_sub(inputs.to_vec()))
}

/// Assembles the result node; callers guarantee `inputs` is non-empty.
fn build_sub(inputs: Vec<Value>) -> Value {
    let mut difference = inputs[0].data();
    for value in &inputs[1..] {
        difference -= value.data();
    }

    let operand_refs: Vec<Weak<RwLock<ValueData>>> =
        inputs.iter().map(Value::downgrade).collect();
    let result = Value::from_op(difference, Op::Sub, inputs);
    let grad_fn = SubBackward {
        inputs: operand_refs,
        output: result.downgrade(),
    };
    result.set_grad_fn(Arc::new(grad_fn));
    result
}

impl Sub for &Value {
    type Output = Value;

    /// `&a - &b` records a two-operand subtraction on the graph.
    fn sub(self, rhs: &Value) -> Value {
        build_sub(vec![self.clone(), rhs.clone()])
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        build_sub(vec![self, rhs])
    }
}

impl Sub<&Value> for Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        build_sub(vec![self, rhs.clone()])
    }
}

impl Sub<Value> for &Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        build_sub(vec![self.clone(), rhs])
    }
}

// --- Tests ---
