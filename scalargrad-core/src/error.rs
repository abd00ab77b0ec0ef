use crate::types::Op;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Cannot apply {operation:?} to an empty operand list")]
    EmptyOperandList { operation: Op },

    #[error("Backward rule for {operation:?} reached a value that was already released")]
    ReleasedNode { operation: Op },
}
