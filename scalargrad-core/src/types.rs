use std::fmt;

/// Identifies the operation that produced a value node.
///
/// The operator set is closed: the backward pass matches on these variants,
/// and every variant's local derivative rule lives with its operation in
/// [`crate::ops`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Input node created directly from a scalar; has no operands.
    Leaf,
    /// N-ary addition.
    Add,
    /// N-ary subtraction: the first operand minus the sum of the rest.
    Sub,
    /// N-ary multiplication.
    Mul,
    /// Rectified linear unit.
    Relu,
}

impl Op {
    /// Short symbol used when rendering graph nodes.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Relu => "relu",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
