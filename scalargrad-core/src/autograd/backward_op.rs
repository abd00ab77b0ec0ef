use crate::error::ScalarGradError;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable
/// operation.
///
/// Every operation that creates a non-leaf [`Value`](crate::value::Value)
/// stores one of these in the result's `grad_fn` field. During `backward()`,
/// the graph walk invokes each context in reverse topological order to
/// propagate gradients according to the chain rule.
///
/// A context captures weak handles to its operands and to its own result,
/// plus whatever forward state its rule needs (multiplication keeps the
/// operand values). It is invoked with no arguments: by the time the walk
/// reaches a node, every consumer has already contributed, so the result's
/// stored gradient is final and the rule only has to push
/// `d(result)/d(operand) * result.grad` into each operand's accumulator.
///
/// The trait requires `Debug + Send + Sync` because the `Arc<dyn BackwardOp>`
/// holding the context is shared with the graph and may cross threads with
/// it.
pub trait BackwardOp: Debug + Send + Sync {
    /// Propagates the result's accumulated gradient to the operands.
    ///
    /// Contributions are added, never assigned, so a value consumed by
    /// several operations collects every path's share.
    fn backward(&self) -> Result<(), ScalarGradError>;
}
