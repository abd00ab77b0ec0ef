use crate::autograd::backward_op::BackwardOp;
use crate::autograd::{accumulate_gradient, upgrade_node};
use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value::Value;
use crate::value_data::ValueData;
use std::sync::{Arc, RwLock, Weak};

// --- Forward Operation ---

impl Value {
    /// Applies the Rectified Linear Unit (ReLU) activation function.
    /// ReLU(x) = max(0, x)
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

/// Clamps a value at zero from below, recording the operation on the graph.
pub fn relu_op(input: &Value) -> Value {
    let x = input.data();
    let result = Value::from_op(
        if x > 0.0 { x } else { 0.0 },
        Op::Relu,
        vec![input.clone()],
    );
    let grad_fn = ReluBackward {
        input: input.downgrade(),
        output: result.downgrade(),
    };
    result.set_grad_fn(Arc::new(grad_fn));
    result
}

// --- Backward Operation ---

#[derive(Debug)]
struct ReluBackward {
    input: Weak<RwLock<ValueData>>,
    output: Weak<RwLock<ValueData>>,
}

impl BackwardOp for ReluBackward {
    fn backward(&self) -> Result<(), ScalarGradError> {
        let output = upgrade_node(&self.output, Op::Relu)?;
        let (out_data, grad_output) = {
            let guard = output.read().expect("RwLock poisoned");
            (guard.data, guard.grad)
        };

        // Gradient passes only where the output is strictly positive; the
        // sub-gradient at zero is taken as 0.
        if out_data > 0.0 {
            accumulate_gradient(&self.input, grad_output, Op::Relu)?;
        }
        Ok(())
    }
}

// --- Tests ---
