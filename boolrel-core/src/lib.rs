#![no_std]

//! boolrel core - sparse boolean relation definitions
//!
//! This crate provides the `SparseRelation` row-of-sets matrix and the
//! abstract traits used to query boolean matrices without I/O.
//!
//! Operations on a relation never fail: writes past the last row grow the
//! row sequence and reads past it answer `false`.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod relation;
pub mod traits;

#[cfg(feature = "alloc")]
pub use relation::*;
pub use traits::*;
