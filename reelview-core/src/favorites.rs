//! The set of bookmarked movie ids.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::movie::MovieId;

/// Bookmarked movie ids, unique and order-irrelevant.
///
/// Serialized as a plain id list, which is also the durable-storage format.
/// The set is only authoritative while a session is active; without one it is
/// a stale local cache carried over from the last authenticated visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: BTreeSet<MovieId>,
}

impl FavoriteSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_ids<I: IntoIterator<Item = MovieId>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, id: MovieId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// New snapshot with `id` flipped in or out.
    #[must_use]
    pub fn with_toggled(&self, id: MovieId) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        Self { ids }
    }

    pub fn iter(&self) -> impl Iterator<Item = MovieId> + '_ {
        self.ids.iter().copied()
    }
}
