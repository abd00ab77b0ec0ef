// Export foundational arithmetic operations directly
pub mod add;
pub mod mul;
pub mod sub;

// Re-export the primary operation functions
pub use add::add_op;
pub use mul::mul_op;
pub use sub::sub_op;
