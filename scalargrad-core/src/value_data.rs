// src/value_data.rs

use crate::autograd::backward_op::BackwardOp;
use crate::types::Op;
use crate::value::Value;
use std::sync::Arc;

/// Internal state of a graph node.
///
/// This struct holds the forward scalar, the gradient accumulator, and the
/// provenance links used by the backward pass. It is wrapped in
/// `Arc<RwLock<ValueData>>` by the [`Value`] handle to allow shared ownership
/// and interior mutability.
#[derive(Debug)]
pub struct ValueData {
    /// The scalar computed in the forward pass; never rewritten.
    pub(crate) data: f64,
    /// Gradient accumulator. Starts at zero and receives additive
    /// contributions during the backward pass, one per consumer.
    pub(crate) grad: f64,
    /// The operation that produced this node (`Op::Leaf` for inputs).
    pub(crate) op: Op,
    /// Owning links to the operand nodes, in operation order. Empty for
    /// leaves. These edges keep the graph alive and drive the traversal.
    pub(crate) prev: Vec<Value>,
    /// Backward context recorded by the producing operation.
    /// Leaf values have `grad_fn = None`.
    pub(crate) grad_fn: Option<Arc<dyn BackwardOp + Send + Sync>>,
}

impl ValueData {
    /// Creates the state for a leaf node.
    pub(crate) fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            prev: Vec::new(),
            grad_fn: None,
        }
    }

    /// Creates the state for a node produced by `op` over `prev`.
    ///
    /// The backward context is attached separately, once the result handle
    /// exists and can be captured by weak reference.
    pub(crate) fn from_op(data: f64, op: Op, prev: Vec<Value>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            prev,
            grad_fn: None,
        }
    }
}

impl Drop for ValueData {
    /// Releases the operand chain iteratively.
    ///
    /// The default recursive drop would grow the call stack with graph depth.
    /// Operands are drained onto an explicit work stack instead; a node is
    /// dismantled only when this was its last owner, so nodes shared with
    /// other live parents are left untouched.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.prev);
        while let Some(node) = stack.pop() {
            let Value { data } = node;
            if let Some(cell) = Arc::into_inner(data) {
                let mut inner = cell.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
                stack.extend(std::mem::take(&mut inner.prev));
            }
        }
    }
}
