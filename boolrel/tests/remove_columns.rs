//! Property tests for column removal and re-indexing

use boolrel::{MatrixOperations, SparseRelation};
use proptest::prelude::*;

fn arb_entries() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..12, 0usize..40), 0..120)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]
    /// Batch removal matches removing distinct targets one at a time, highest first
    #[test]
    fn batch_matches_sequential(
        entries in arb_entries(),
        targets in prop::collection::vec(0usize..45, 0..10),
    ) {
        let mut batch: SparseRelation = entries.iter().copied().collect();
        batch.remove_columns(&targets);

        let mut distinct = targets.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let mut sequential: SparseRelation = entries.iter().copied().collect();
        for &col in distinct.iter().rev() {
            sequential.remove_column(col);
        }

        prop_assert_eq!(batch, sequential);
    }

    /// Target order and repetition do not change the result
    #[test]
    fn batch_ignores_order_and_duplicates(
        entries in arb_entries(),
        targets in prop::collection::vec(0usize..45, 1..10),
    ) {
        let mut sorted_targets = targets.clone();
        sorted_targets.sort_unstable();
        sorted_targets.dedup();

        let mut messy_targets = targets.clone();
        messy_targets.reverse();
        messy_targets.extend_from_slice(&targets);

        let mut expected: SparseRelation = entries.iter().copied().collect();
        expected.remove_columns(&sorted_targets);

        let mut actual: SparseRelation = entries.iter().copied().collect();
        actual.remove_columns(&messy_targets);

        prop_assert_eq!(actual, expected);
    }

    /// Removal drops exactly the entries in removed columns and keeps row count
    #[test]
    fn removal_preserves_surviving_entries(
        entries in arb_entries(),
        col in 0usize..45,
    ) {
        let before: SparseRelation = entries.iter().copied().collect();
        let mut after = before.clone();
        after.remove_column(col);

        let dropped = before.get_col(col).len();
        prop_assert_eq!(after.entry_count(), before.entry_count() - dropped);
        prop_assert_eq!(after.row_count(), before.row_count());

        for (row, c) in before.iter_entries() {
            if c < col {
                prop_assert!(after.get(row, c));
            } else if c > col {
                prop_assert!(after.get(row, c - 1));
            }
        }
    }

    /// Removing a column shrinks the column count by at most one
    #[test]
    fn removal_column_count(
        entries in arb_entries(),
        col in 0usize..45,
    ) {
        let mut relation: SparseRelation = entries.iter().copied().collect();
        let before = relation.column_count();
        relation.remove_column(col);
        let after = relation.column_count();

        prop_assert!(after <= before);
        if col < before && !relation.is_empty() {
            prop_assert!(before - after >= 1);
        }
    }
}
