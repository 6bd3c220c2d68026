//! Sparse boolean relation stored as one column-id set per row
//!
//! A `SparseRelation` represents a binary relation over two integer
//! domains (users x items, items x items, ...). Storage is proportional to
//! the number of set cells. Rows are created lazily and never removed;
//! columns have no explicit count and are derived from the ids in use.

use alloc::vec::Vec;
use hashbrown::HashSet;

use crate::traits::{BooleanMatrix, MatrixOperations};

/// Set of column ids held by one row
pub type RowSet = HashSet<usize>;

/// Sparse boolean matrix with fast row-wise access
///
/// Indexes are zero-based. Writing to a row at or beyond `row_count()`
/// grows the row sequence with empty rows; reading such a row through
/// [`SparseRelation::get`] or [`SparseRelation::row`] answers `false` /
/// `None` and leaves the relation untouched.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseRelation {
    rows: Vec<RowSet>,
}

impl SparseRelation {
    /// Create an empty relation with zero rows
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a relation with `row_count` empty rows
    pub fn with_rows(row_count: usize) -> Self {
        let mut rows = Vec::with_capacity(row_count);
        rows.resize_with(row_count, RowSet::new);
        Self { rows }
    }

    /// Check whether cell (row, col) is set
    ///
    /// Rows beyond `row_count()` read as empty; the relation does not grow.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows.get(row).is_some_and(|cols| cols.contains(&col))
    }

    /// Set or clear cell (row, col)
    ///
    /// Both directions make sure the row exists, so clearing a cell in a
    /// row past the end still grows the relation.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if value {
            self.insert(row, col);
        } else {
            self.remove(row, col);
        }
    }

    /// Set cell (row, col), returning `true` if it was previously clear
    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        self.row_mut(row).insert(col)
    }

    /// Clear cell (row, col), returning `true` if it was previously set
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        self.row_mut(row).remove(&col)
    }

    /// Get the column set of a row without growing the relation
    pub fn row(&self, row: usize) -> Option<&RowSet> {
        self.rows.get(row)
    }

    /// Get the column set of a row, creating it if needed
    ///
    /// If `row >= row_count()`, empty rows are appended up to and including
    /// `row` before the set is returned. The growth is permanent even if the
    /// caller never writes through the returned set.
    pub fn row_mut(&mut self, row: usize) -> &mut RowSet {
        if row >= self.rows.len() {
            self.rows.resize_with(row + 1, RowSet::new);
        }
        &mut self.rows[row]
    }

    /// Iterate over every row with its id, including empty rows
    pub fn rows(&self) -> impl ExactSizeIterator<Item = (usize, &RowSet)> + '_ {
        self.rows.iter().enumerate()
    }

    /// Iterate over rows holding at least one set cell
    pub fn non_empty_rows(&self) -> impl Iterator<Item = (usize, &RowSet)> + '_ {
        self.rows().filter(|(_, cols)| !cols.is_empty())
    }

    /// Ids of rows holding at least one set cell
    pub fn non_empty_row_ids(&self) -> HashSet<usize> {
        self.non_empty_rows().map(|(row, _)| row).collect()
    }

    /// Ids of columns set in at least one row
    ///
    /// Scans every entry.
    pub fn non_empty_column_ids(&self) -> HashSet<usize> {
        self.rows.iter().flatten().copied().collect()
    }

    /// Iterate over every set cell as (row, col)
    ///
    /// Rows are visited in ascending order; columns within a row are not.
    pub fn iter_entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows()
            .flat_map(|(row, cols)| cols.iter().map(move |&col| (row, col)))
    }

    /// Number of rows, including empty rows created by growth
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns: one past the largest column id in use
    ///
    /// This is derived by scanning every entry, so avoid calling it inside
    /// a hot loop. An empty relation has zero columns.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .filter_map(|cols| cols.iter().max())
            .max()
            .map_or(0, |&max_col| max_col + 1)
    }

    /// Number of set cells
    pub fn entry_count(&self) -> usize {
        self.rows.iter().map(RowSet::len).sum()
    }

    /// Check whether no cell is set
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(RowSet::is_empty)
    }

    /// Remove a column and close the gap
    ///
    /// Column `col` is dropped from every row and every higher column id is
    /// decremented by one. Lower ids are untouched.
    pub fn remove_column(&mut self, col: usize) {
        self.reindex_columns(core::slice::from_ref(&col));
    }

    /// Remove several columns and close the gaps
    ///
    /// Every id in `cols` is dropped. A surviving id `c` becomes `c - k`,
    /// where `k` is the number of distinct ids in `cols` below `c` in the
    /// original numbering. Order and duplicates in `cols` do not matter.
    pub fn remove_columns(&mut self, cols: &[usize]) {
        let mut targets = cols.to_vec();
        targets.sort_unstable();
        targets.dedup();
        self.reindex_columns(&targets);
    }

    /// Apply column removal with sorted, deduplicated targets
    fn reindex_columns(&mut self, targets: &[usize]) {
        let Some(&lowest) = targets.first() else {
            return;
        };

        for cols in &mut self.rows {
            if cols.iter().all(|&col| col < lowest) {
                continue;
            }
            let original: Vec<usize> = cols.drain().collect();
            cols.extend(
                original
                    .into_iter()
                    .filter_map(|col| reindex_column(col, targets)),
            );
        }
    }

    /// Build the transpose: cell (j, i) is set iff (i, j) is set here
    ///
    /// The result owns fresh storage; its row count is this relation's
    /// column count.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new();
        for (row, col) in self.iter_entries() {
            transposed.insert(col, row);
        }
        transposed
    }

    /// Count cells set both here and in `other`
    ///
    /// Only entries of `self` are visited; each is checked with `other`'s
    /// cell read, which answers `false` for rows it does not have.
    pub fn overlap<M: BooleanMatrix + ?Sized>(&self, other: &M) -> usize {
        self.iter_entries()
            .filter(|&(row, col)| other.get(row, col))
            .count()
    }
}

/// New id of column `col` after removing the sorted, deduplicated `targets`
///
/// Returns `None` when `col` is itself removed.
pub fn reindex_column(col: usize, targets: &[usize]) -> Option<usize> {
    match targets.binary_search(&col) {
        Ok(_) => None,
        Err(below) => Some(col - below),
    }
}

/// Two relations are equal when they hold the same set cells
///
/// Trailing empty rows left behind by growth do not affect equality.
impl PartialEq for SparseRelation {
    fn eq(&self, other: &Self) -> bool {
        let (longer, shorter) = if self.rows.len() >= other.rows.len() {
            (&self.rows, &other.rows)
        } else {
            (&other.rows, &self.rows)
        };
        longer[..shorter.len()] == shorter[..]
            && longer[shorter.len()..].iter().all(RowSet::is_empty)
    }
}

impl Eq for SparseRelation {}

impl BooleanMatrix for SparseRelation {
    fn get(&self, row: usize, col: usize) -> bool {
        SparseRelation::get(self, row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    fn nnz(&self) -> usize {
        self.entry_count()
    }
}

impl MatrixOperations for SparseRelation {
    fn get_row(&self, row_index: usize) -> Vec<usize> {
        let mut cols: Vec<usize> = self
            .row(row_index)
            .map(|cols| cols.iter().copied().collect())
            .unwrap_or_default();
        cols.sort_unstable();
        cols
    }

    fn get_col(&self, col_index: usize) -> Vec<usize> {
        self.rows()
            .filter(|(_, cols)| cols.contains(&col_index))
            .map(|(row, _)| row)
            .collect()
    }
}

impl FromIterator<(usize, usize)> for SparseRelation {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut relation = Self::new();
        relation.extend(iter);
        relation
    }
}

impl Extend<(usize, usize)> for SparseRelation {
    fn extend<I: IntoIterator<Item = (usize, usize)>>(&mut self, iter: I) {
        for (row, col) in iter {
            self.insert(row, col);
        }
    }
}
