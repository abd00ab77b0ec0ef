// Core modules of the crate
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod utils;

pub mod error;
pub mod types;

// Re-export the node handle so it is reachable as `scalargrad_core::Value`
pub use value::Value;

pub use error::ScalarGradError;
pub use types::Op;

// Primary operation entry points
pub use ops::activation::relu_op;
pub use ops::arithmetic::{add_op, mul_op, sub_op};
