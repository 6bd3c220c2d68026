//! Rating-predictor contract for memory-based recommenders
//!
//! Concrete predictors keep their training data in a [`RatingStore`] held by
//! a [`MemoryModel`]. The model tracks the largest user and item ids seen so
//! far, which decides whether a prediction can be made at all.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{PredictorError, Result};
use crate::ratings::{RatingEvent, RatingStore};

/// Shared state of predictors that keep rating data in memory
#[derive(Debug, Clone)]
pub struct MemoryModel<R: RatingStore> {
    ratings: R,
    max_user_id: Option<usize>,
    max_item_id: Option<usize>,
    min_rating: f64,
    max_rating: f64,
}

impl<R: RatingStore> MemoryModel<R> {
    /// Default lower end of the rating scale
    pub const DEFAULT_MIN_RATING: f64 = 1.0;

    /// Default upper end of the rating scale
    pub const DEFAULT_MAX_RATING: f64 = 5.0;

    /// Create a model over a rating store, taking its id bounds
    pub fn new(ratings: R) -> Self {
        Self {
            max_user_id: ratings.max_user_id(),
            max_item_id: ratings.max_item_id(),
            ratings,
            min_rating: Self::DEFAULT_MIN_RATING,
            max_rating: Self::DEFAULT_MAX_RATING,
        }
    }

    /// Set the rating scale
    pub fn with_rating_range(mut self, min_rating: f64, max_rating: f64) -> Self {
        self.min_rating = min_rating;
        self.max_rating = max_rating;
        self
    }

    /// Get the rating store
    pub fn ratings(&self) -> &R {
        &self.ratings
    }

    /// Get the rating store for direct modification
    ///
    /// Changes made this way do not update the id bounds.
    pub fn ratings_mut(&mut self) -> &mut R {
        &mut self.ratings
    }

    /// Replace the rating store and take its id bounds
    pub fn set_ratings(&mut self, ratings: R) {
        self.max_user_id = ratings.max_user_id();
        self.max_item_id = ratings.max_item_id();
        self.ratings = ratings;
        debug!(
            ratings = self.ratings.len(),
            max_user_id = ?self.max_user_id,
            max_item_id = ?self.max_item_id,
            "replaced rating store"
        );
    }

    pub fn max_user_id(&self) -> Option<usize> {
        self.max_user_id
    }

    pub fn max_item_id(&self) -> Option<usize> {
        self.max_item_id
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    pub fn max_rating(&self) -> f64 {
        self.max_rating
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.min_rating = min_rating;
    }

    pub fn set_max_rating(&mut self, max_rating: f64) {
        self.max_rating = max_rating;
    }

    /// Check whether both ids fall inside the observed bounds
    pub fn can_predict(&self, user_id: usize, item_id: usize) -> bool {
        self.max_user_id.is_some_and(|max| user_id <= max)
            && self.max_item_id.is_some_and(|max| item_id <= max)
    }

    /// Add a rating and extend both id bounds
    pub fn add_rating(&mut self, user_id: usize, item_id: usize, rating: f64) {
        self.ratings
            .add_rating(RatingEvent::new(user_id, item_id, rating));
        self.extend_user_bound(user_id);
        self.extend_item_bound(item_id);
    }

    /// Change the value of an existing rating
    pub fn update_rating(&mut self, user_id: usize, item_id: usize, rating: f64) -> Result<()> {
        match self.ratings.find_rating_mut(user_id, item_id) {
            Some(event) => {
                event.rating = rating;
                Ok(())
            }
            None => Err(not_found(user_id, item_id)),
        }
    }

    /// Remove an existing rating
    pub fn remove_rating(&mut self, user_id: usize, item_id: usize) -> Result<()> {
        self.ratings
            .remove_rating(user_id, item_id)
            .map(|_| ())
            .ok_or_else(|| not_found(user_id, item_id))
    }

    /// Register a user and extend the user bound
    pub fn add_user(&mut self, user_id: usize) {
        self.ratings.add_user(user_id);
        self.extend_user_bound(user_id);
    }

    /// Register an item and extend the item bound
    pub fn add_item(&mut self, item_id: usize) {
        self.ratings.add_item(item_id);
        self.extend_item_bound(item_id);
    }

    /// Remove a user's ratings; the user bound is kept
    pub fn remove_user(&mut self, user_id: usize) {
        self.ratings.remove_user(user_id);
    }

    /// Remove an item's ratings; the item bound is kept
    pub fn remove_item(&mut self, item_id: usize) {
        self.ratings.remove_item(item_id);
    }

    fn extend_user_bound(&mut self, user_id: usize) {
        if self.max_user_id.map_or(true, |max| user_id > max) {
            debug!(user_id, "extending user id bound");
            self.max_user_id = Some(user_id);
        }
    }

    fn extend_item_bound(&mut self, item_id: usize) {
        if self.max_item_id.map_or(true, |max| item_id > max) {
            debug!(item_id, "extending item id bound");
            self.max_item_id = Some(item_id);
        }
    }
}

fn not_found(user_id: usize, item_id: usize) -> PredictorError {
    warn!(user_id, item_id, "rating not found");
    PredictorError::NotFound { user_id, item_id }
}

/// Contract of a rating predictor backed by in-memory rating data
///
/// Implementors supply the model itself (`predict`, `train`, persistence)
/// and expose their [`MemoryModel`]; the rating maintenance methods are
/// provided on top of it and may be overridden to keep a trained model in
/// sync incrementally.
pub trait RatingPredictor {
    /// Rating store the predictor trains on
    type Store: RatingStore;

    /// Get the shared in-memory state
    fn memory(&self) -> &MemoryModel<Self::Store>;

    /// Get the shared in-memory state for modification
    fn memory_mut(&mut self) -> &mut MemoryModel<Self::Store>;

    /// Predict the rating of an item by a user
    fn predict(&self, user_id: usize, item_id: usize) -> f64;

    /// Learn the model parameters from the current ratings
    fn train(&mut self);

    /// Write the model parameters to a file
    fn save_model(&self, path: &Path) -> Result<()>;

    /// Read the model parameters from a file
    fn load_model(&mut self, path: &Path) -> Result<()>;

    /// Check whether a prediction can be made for the pair
    fn can_predict(&self, user_id: usize, item_id: usize) -> bool {
        self.memory().can_predict(user_id, item_id)
    }

    fn add_rating(&mut self, user_id: usize, item_id: usize, rating: f64) {
        self.memory_mut().add_rating(user_id, item_id, rating);
    }

    /// Fails with [`PredictorError::NotFound`] if the pair has no rating
    fn update_rating(&mut self, user_id: usize, item_id: usize, rating: f64) -> Result<()> {
        self.memory_mut().update_rating(user_id, item_id, rating)
    }

    /// Fails with [`PredictorError::NotFound`] if the pair has no rating
    fn remove_rating(&mut self, user_id: usize, item_id: usize) -> Result<()> {
        self.memory_mut().remove_rating(user_id, item_id)
    }

    fn add_user(&mut self, user_id: usize) {
        self.memory_mut().add_user(user_id);
    }

    fn add_item(&mut self, item_id: usize) {
        self.memory_mut().add_item(item_id);
    }

    fn remove_user(&mut self, user_id: usize) {
        self.memory_mut().remove_user(user_id);
    }

    fn remove_item(&mut self, item_id: usize) {
        self.memory_mut().remove_item(item_id);
    }
}
