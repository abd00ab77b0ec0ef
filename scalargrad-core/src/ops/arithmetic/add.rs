// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::backward_op::BackwardOp;
use crate::autograd::{accumulate_gradient, upgrade_node};
use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value::Value;
use crate::value_data::ValueData;
use std::ops::Add;
use std::sync::{Arc, RwLock, Weak};

// --- Backward Operation Structure ---

/// Backward context for n-ary addition.
#[derive(Debug)]
struct AddBackward {
    inputs: Vec<Weak<RwLock<ValueData>>>,
    output: Weak<RwLock<ValueData>>,
}

// --- Backward Operation Implementation ---

impl BackwardOp for AddBackward {
    fn backward(&self) -> Result<(), ScalarGradError> {
        let output = upgrade_node(&self.output, Op::Add)?;
        let grad_output = output.read().expect("RwLock poisoned").grad;

        // The local derivative of a sum with respect to any addend is 1.
        for input in &self.inputs {
            accumulate_gradient(input, grad_output, Op::Add)?;
        }
        Ok(())
    }
}

// --- Forward Operation ---

/// Sums a non-empty sequence of values, recording the addition on the graph.
///
/// A single operand is the degenerate fold: the result mirrors it with a
/// local derivative of 1.
pub fn add_op(inputs: &[Value]) -> Result<Value, ScalarGradError> {
    if inputs.is_empty() {
        return Err(ScalarGradError::EmptyOperandList { operation: Op::Add });
    }
    Ok(build_add(inputs.to_vec()))
}

/// Assembles the result node; callers guarantee `inputs` is non-empty.
fn build_add(inputs: Vec<Value>) -> Value {
    let sum: f64 = inputs.iter().map(Value::data).sum();

    let operand_refs: Vec<Weak<RwLock<ValueData>>> =
        inputs.iter().map(Value::downgrade).collect();
    let result = Value::from_op(sum, Op::Add, inputs);
    let grad_fn = AddBackward {
        inputs: operand_refs,
        output: result.downgrade(),
    };
    result.set_grad_fn(Arc::new(grad_fn));
    result
}

impl Add for &Value {
    type Output = Value;

    /// `&a + &b` records a two-operand addition on the graph.
    fn add(self, rhs: &Value) -> Value {
        build_add(vec![self.clone(), rhs.clone()])
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        build_add(vec![self, rhs])
    }
}

impl Add<&Value> for Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        build_add(vec![self, rhs.clone()])
    }
}

impl Add<Value> for &Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        build_add(vec![self.clone(), rhs])
    }
}

// --- Tests ---
