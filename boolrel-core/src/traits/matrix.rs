//! Core matrix abstraction traits for boolean relations
//!
//! This module defines the fundamental traits that every boolean matrix
//! implementation satisfies, independent of how rows are stored.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Core boolean matrix trait for storage-agnostic access
///
/// This trait provides the minimal interface that all boolean matrix
/// implementations must provide. Reads are pure: querying a cell never
/// changes the matrix.
pub trait BooleanMatrix {
    /// Check whether the cell at the specified position is set
    ///
    /// Returns `false` for any position outside the stored rows.
    fn get(&self, row: usize, col: usize) -> bool;

    /// Get matrix dimensions as (rows, cols)
    ///
    /// The column count is derived from the largest stored column id.
    fn dimensions(&self) -> (usize, usize);

    /// Get number of set cells
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column operations (requires alloc feature)
///
/// Only available when the `alloc` feature is enabled.
#[cfg(feature = "alloc")]
pub trait MatrixOperations: BooleanMatrix {
    /// Get the column ids set in a row
    ///
    /// Ids are returned in ascending order. A row outside the matrix is
    /// empty.
    fn get_row(&self, row_index: usize) -> Vec<usize>;

    /// Get the row ids that have the given column set
    ///
    /// Ids are returned in ascending order.
    fn get_col(&self, col_index: usize) -> Vec<usize>;
}
