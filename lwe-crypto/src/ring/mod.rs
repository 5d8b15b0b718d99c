#![allow(non_snake_case)] // Allow non-snake_case identifiers (like matrix variable names)

//! # Ring Module
//!
//! Provides the [`Ring`] struct for arithmetic in Z_q and the [`Matrix`] value type
//! together with the modular matrix engine built on top of it.

pub mod math;
pub mod matrix;
pub mod matrix_ops;

/// Represents a single matrix row using a `Vec<i64>`.
pub type Vector = Vec<i64>;

pub use math::{MAX_MODULUS, Ring};
pub use matrix::Matrix;
pub use matrix_ops::{identity_matrix, matrix_add, matrix_mul, transpose};
