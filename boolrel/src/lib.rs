//! boolrel - sparse boolean relations for recommender systems
//!
//! This library provides the `SparseRelation` matrix from `boolrel-core`
//! together with the in-memory rating store and predictor scaffolding that
//! concrete recommenders build on.
//!
//! ## Architecture
//!
//! - **boolrel-core**: the relation type and matrix traits (`no_std`, no I/O)
//! - **boolrel**: rating storage, the `RatingPredictor` contract and errors
//!
//! ## Quick Start
//!
//! ```rust
//! use boolrel::{InMemoryRatings, RatingEvent, SparseRelation};
//!
//! let ratings: InMemoryRatings = vec![
//!     RatingEvent::new(0, 2, 4.0),
//!     RatingEvent::new(1, 2, 3.5),
//! ]
//! .into();
//!
//! let user_items = ratings.user_item_relation();
//! assert!(user_items.get(1, 2));
//!
//! let item_users: SparseRelation = user_items.transpose();
//! assert_eq!(item_users.row(2).map(|users| users.len()), Some(2));
//! ```

// Re-export core abstractions
pub use boolrel_core::{
    // Core traits
    BooleanMatrix, MatrixOperations,
    // Relation type
    reindex_column, RowSet, SparseRelation,
};

pub mod error;
pub mod predictor;
pub mod ratings;

pub use error::{PredictorError, Result};
pub use predictor::{MemoryModel, RatingPredictor};
pub use ratings::{InMemoryRatings, RatingEvent, RatingStore};
