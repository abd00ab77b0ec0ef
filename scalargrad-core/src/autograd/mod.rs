use crate::error::ScalarGradError;
use crate::types::Op;
use crate::value_data::ValueData;
use std::sync::{Arc, RwLock, Weak};

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::BackwardOp;

/// Upgrades a weak node handle held by a backward context.
///
/// During a traversal the topological ordering holds strong references to
/// every visited node, so a failed upgrade means the context outlived its
/// graph.
pub(crate) fn upgrade_node(
    target: &Weak<RwLock<ValueData>>,
    operation: Op,
) -> Result<Arc<RwLock<ValueData>>, ScalarGradError> {
    target
        .upgrade()
        .ok_or(ScalarGradError::ReleasedNode { operation })
}

/// Adds `contribution` to the gradient accumulator of the node behind
/// `target`.
///
/// The write lock is taken per call and released immediately, so an
/// operation that lists the same node several times accumulates one
/// contribution per listing.
pub(crate) fn accumulate_gradient(
    target: &Weak<RwLock<ValueData>>,
    contribution: f64,
    operation: Op,
) -> Result<(), ScalarGradError> {
    let node = upgrade_node(target, operation)?;
    let mut guard = node.write().expect("RwLock poisoned");
    guard.grad += contribution;
    Ok(())
}
