//! In-memory rating storage
//!
//! This module provides the rating event type, the `RatingStore` contract
//! predictors delegate to, and a simple vector-backed store that can
//! export its user/item pairs as a [`SparseRelation`].

use boolrel_core::SparseRelation;
use hashbrown::HashMap;
use tracing::trace;

/// A single rating of an item by a user
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingEvent {
    /// User who gave the rating
    pub user_id: usize,
    /// Item that was rated
    pub item_id: usize,
    /// Rating value
    pub rating: f64,
}

impl RatingEvent {
    /// Create a new rating event
    pub const fn new(user_id: usize, item_id: usize, rating: f64) -> Self {
        Self {
            user_id,
            item_id,
            rating,
        }
    }
}

/// Storage for rating events keyed by (user, item)
///
/// At most one rating is kept per pair. Id bounds only grow: removing
/// users, items or ratings never lowers `max_user_id` / `max_item_id`.
pub trait RatingStore {
    /// Add a rating, replacing any existing rating for the same pair
    fn add_rating(&mut self, event: RatingEvent);

    /// Find the rating for a user/item pair
    fn find_rating(&self, user_id: usize, item_id: usize) -> Option<&RatingEvent>;

    /// Find the rating for a user/item pair for in-place modification
    fn find_rating_mut(&mut self, user_id: usize, item_id: usize) -> Option<&mut RatingEvent>;

    /// Remove the rating for a user/item pair, returning it if present
    fn remove_rating(&mut self, user_id: usize, item_id: usize) -> Option<RatingEvent>;

    /// Register a user id without ratings
    fn add_user(&mut self, user_id: usize);

    /// Register an item id without ratings
    fn add_item(&mut self, item_id: usize);

    /// Remove every rating given by a user
    fn remove_user(&mut self, user_id: usize);

    /// Remove every rating given to an item
    fn remove_item(&mut self, item_id: usize);

    /// Largest user id observed, if any
    fn max_user_id(&self) -> Option<usize>;

    /// Largest item id observed, if any
    fn max_item_id(&self) -> Option<usize>;

    /// Number of stored ratings
    fn len(&self) -> usize;

    /// Check whether no rating is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vector-backed rating store with an O(1) pair index
#[derive(Debug, Clone, Default)]
pub struct InMemoryRatings {
    events: Vec<RatingEvent>,
    index: HashMap<(usize, usize), usize>,
    max_user_id: Option<usize>,
    max_item_id: Option<usize>,
}

impl InMemoryRatings {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the stored ratings
    pub fn iter(&self) -> std::slice::Iter<'_, RatingEvent> {
        self.events.iter()
    }

    /// Build the users x items relation of the stored ratings
    ///
    /// Every observed user id gets a row, even without ratings.
    pub fn user_item_relation(&self) -> SparseRelation {
        let mut relation = SparseRelation::with_rows(self.max_user_id.map_or(0, |id| id + 1));
        relation.extend(self.events.iter().map(|e| (e.user_id, e.item_id)));
        trace!(
            rows = relation.row_count(),
            entries = relation.entry_count(),
            "built user-item relation"
        );
        relation
    }

    /// Build the items x users relation of the stored ratings
    ///
    /// Every observed item id gets a row, even without ratings.
    pub fn item_user_relation(&self) -> SparseRelation {
        let mut relation = SparseRelation::with_rows(self.max_item_id.map_or(0, |id| id + 1));
        relation.extend(self.events.iter().map(|e| (e.item_id, e.user_id)));
        trace!(
            rows = relation.row_count(),
            entries = relation.entry_count(),
            "built item-user relation"
        );
        relation
    }

    fn observe(&mut self, user_id: usize, item_id: usize) {
        self.max_user_id = self.max_user_id.max(Some(user_id));
        self.max_item_id = self.max_item_id.max(Some(item_id));
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .events
            .iter()
            .enumerate()
            .map(|(pos, e)| ((e.user_id, e.item_id), pos))
            .collect();
    }
}

impl RatingStore for InMemoryRatings {
    fn add_rating(&mut self, event: RatingEvent) {
        self.observe(event.user_id, event.item_id);
        match self.index.get(&(event.user_id, event.item_id)) {
            Some(&pos) => self.events[pos].rating = event.rating,
            None => {
                self.index
                    .insert((event.user_id, event.item_id), self.events.len());
                self.events.push(event);
            }
        }
    }

    fn find_rating(&self, user_id: usize, item_id: usize) -> Option<&RatingEvent> {
        let &pos = self.index.get(&(user_id, item_id))?;
        self.events.get(pos)
    }

    fn find_rating_mut(&mut self, user_id: usize, item_id: usize) -> Option<&mut RatingEvent> {
        let &pos = self.index.get(&(user_id, item_id))?;
        self.events.get_mut(pos)
    }

    fn remove_rating(&mut self, user_id: usize, item_id: usize) -> Option<RatingEvent> {
        let pos = self.index.remove(&(user_id, item_id))?;
        let removed = self.events.swap_remove(pos);
        if let Some(moved) = self.events.get(pos) {
            self.index.insert((moved.user_id, moved.item_id), pos);
        }
        Some(removed)
    }

    fn add_user(&mut self, user_id: usize) {
        self.max_user_id = self.max_user_id.max(Some(user_id));
    }

    fn add_item(&mut self, item_id: usize) {
        self.max_item_id = self.max_item_id.max(Some(item_id));
    }

    fn remove_user(&mut self, user_id: usize) {
        self.events.retain(|e| e.user_id != user_id);
        self.rebuild_index();
    }

    fn remove_item(&mut self, item_id: usize) {
        self.events.retain(|e| e.item_id != item_id);
        self.rebuild_index();
    }

    fn max_user_id(&self) -> Option<usize> {
        self.max_user_id
    }

    fn max_item_id(&self) -> Option<usize> {
        self.max_item_id
    }

    fn len(&self) -> usize {
        self.events.len()
    }
}

impl FromIterator<RatingEvent> for InMemoryRatings {
    fn from_iter<I: IntoIterator<Item = RatingEvent>>(iter: I) -> Self {
        let mut store = Self::new();
        for event in iter {
            store.add_rating(event);
        }
        store
    }
}

impl From<Vec<RatingEvent>> for InMemoryRatings {
    fn from(events: Vec<RatingEvent>) -> Self {
        events.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a InMemoryRatings {
    type Item = &'a RatingEvent;
    type IntoIter = std::slice::Iter<'a, RatingEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
