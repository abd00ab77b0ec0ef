// src/value/autograd_methods.rs

use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use std::sync::Arc;

impl Value {
    /// Returns the gradient accumulated by the most recent backward
    /// traversal. Zero until a traversal rooted at some descendant has run.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the backward context recorded by the producing operation.
    /// Leaf values return `None`.
    pub fn grad_fn(&self) -> Option<Arc<dyn BackwardOp + Send + Sync>> {
        self.read_data().grad_fn.clone()
    }

    /// Creates a new leaf holding the same scalar, detached from the
    /// computation graph: no operands, no backward context, gradient zero.
    pub fn detach(&self) -> Value {
        Value::new(self.data())
    }

    /// Computes gradients of this value with respect to every node that
    /// contributed to it.
    ///
    /// Seeds this node's gradient with 1 (assigned, not accumulated), orders
    /// the reachable graph so every node follows its operands, then walks
    /// that order in reverse invoking each backward context. By the time a
    /// node is reached, all of its consumers have contributed, so the
    /// gradient it propagates is final.
    ///
    /// Contributions are additive: a second call without an intervening
    /// [`zero_grad`](Value::zero_grad) stacks onto the gradients left by the
    /// first.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        let sorted = topological_sort(self);
        log::debug!("backward: graph holds {} node(s)", sorted.len());

        // The root's derivative with respect to itself.
        self.write_data().grad = 1.0;

        for node in sorted.iter().rev() {
            let grad_fn = node.read_data().grad_fn.clone();
            if let Some(grad_fn) = grad_fn {
                log::trace!(
                    "backward: node {:?} ({}) grad {}",
                    node.node_id(),
                    node.op(),
                    node.grad()
                );
                grad_fn.backward()?;
            }
        }
        Ok(())
    }

    /// Resets the gradient of every node reachable from this value to zero.
    ///
    /// Run this between backward traversals when fresh gradients are wanted
    /// instead of accumulated ones.
    pub fn zero_grad(&self) {
        let sorted = topological_sort(self);
        log::debug!("zero_grad: resetting {} node(s)", sorted.len());
        for node in &sorted {
            node.write_data().grad = 0.0;
        }
    }
}
