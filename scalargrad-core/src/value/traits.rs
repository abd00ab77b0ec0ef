// src/value/traits.rs

use crate::value::Value;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

// --- Trait Implementations ---

impl Clone for Value {
    /// Clones the handle. This is a shallow clone that increases the
    /// reference count of the shared node; gradients accumulated through one
    /// handle are visible through the others.
    fn clone(&self) -> Self {
        Value {
            data: Arc::clone(&self.data),
        }
    }
}

impl Debug for Value {
    /// Formats the node for debugging without following operand links, so
    /// printing a node from a deep graph stays cheap.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.read() {
            Ok(guard) => f
                .debug_struct("Value")
                .field("data", &guard.data)
                .field("grad", &guard.grad)
                .field("op", &guard.op)
                .field("operands", &guard.prev.len())
                .finish(),
            Err(_) => write!(f, "Value(<poisoned>)"),
        }
    }
}

impl PartialEq for Value {
    /// Node identity: two handles are equal when they point at the same node.
    /// Distinct nodes holding equal scalars compare unequal.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    /// Hashes the address of the shared node, consistent with `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}
