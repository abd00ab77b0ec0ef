//! # Value Operations Module (`ops`)
//!
//! Central hub for the differentiable operations of the engine, grouped into
//! submodules by category.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`)
//!   that computes the forward result eagerly and records the backward
//!   context on the new node.
//! - **`Backward` Structs:** Each operation has a corresponding struct
//!   (e.g., `AddBackward`, `MulBackward`) implementing
//!   [`BackwardOp`](crate::autograd::backward_op::BackwardOp) with the
//!   operation's local derivative rule. The struct captures weak handles to
//!   the operands and to its own result, plus any forward state the rule
//!   needs.
//! - **Operator sugar:** The binary forms also come as `std::ops` impls on
//!   borrowed and owned values.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: n-ary addition, subtraction, and multiplication.
//! - [`activation`]: rectified linear unit.

pub mod activation;
pub mod arithmetic;
