// src/value/mod.rs

use crate::autograd::backward_op::BackwardOp;
use crate::autograd::graph::NodeId;
use crate::types::Op;
use crate::value_data::ValueData;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

mod autograd_methods;
mod traits;

/// A scalar node in a runtime-built computation graph.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node is kept alive by every downstream result
///     that consumed it, and by any handle the client still holds. Clones are
///     cheap and observe the same state.
/// 2.  **Interior Mutability:** the gradient accumulator inside [`ValueData`]
///     is written during the backward pass through immutable handles, guarded
///     by the `RwLock`.
///
/// The scalar, the operator tag, and the operand list are fixed at
/// construction; the gradient is the only field mutated afterwards.
pub struct Value {
    /// Arc for shared ownership, RwLock for interior mutability of ValueData.
    pub(crate) data: Arc<RwLock<ValueData>>,
}

impl Value {
    /// Creates a new leaf value from a scalar.
    ///
    /// Leaves have no operands and no backward context; their gradient
    /// starts at zero and is only ever accumulated into.
    pub fn new(data: f64) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::new(data))),
        }
    }

    /// Creates a value produced by `op` over `prev`, with the forward result
    /// already computed. The caller attaches the backward context afterwards
    /// via [`set_grad_fn`](Value::set_grad_fn).
    pub(crate) fn from_op(data: f64, op: Op, prev: Vec<Value>) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::from_op(data, op, prev))),
        }
    }

    /// Returns the scalar computed in the forward pass.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the operation that produced this value.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Acquires a read lock on the node state.
    ///
    /// The lock is released when the guard goes out of scope.
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> RwLockReadGuard<'_, ValueData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node state.
    ///
    /// The lock is released when the guard goes out of scope.
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> RwLockWriteGuard<'_, ValueData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Stable identity of the underlying node.
    ///
    /// Distinct nodes holding equal scalars stay distinct; a clone of a
    /// handle shares its identity. Visited sets and the `Hash`/`PartialEq`
    /// impls key on this.
    pub(crate) fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }

    /// Observer handle for backward contexts; does not keep the node alive.
    pub(crate) fn downgrade(&self) -> Weak<RwLock<ValueData>> {
        Arc::downgrade(&self.data)
    }

    /// Attaches the backward context. Called once, by the operation that
    /// created this node.
    pub(crate) fn set_grad_fn(&self, grad_fn: Arc<dyn BackwardOp + Send + Sync>) {
        self.write_data().grad_fn = Some(grad_fn);
    }
}
