//! Abstract interfaces for boolean relations
//!
//! This module defines the trait abstractions shared by relation types.
//! Traits are pure interfaces - no concrete implementations.

pub mod matrix;

pub use matrix::BooleanMatrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
