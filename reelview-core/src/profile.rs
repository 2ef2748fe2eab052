//! The single-owner application profile snapshot.
use crate::favorites::FavoriteSet;
use crate::session::Session;

/// Who is logged in and what they have bookmarked.
///
/// A value type: every mutation path produces a new snapshot, and the engine
/// persists a snapshot before handing it back, so the in-memory and durable
/// copies never diverge across a reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub session: Option<Session>,
    pub favorites: FavoriteSet,
}

impl Profile {
    /// The favorite set is only authoritative when this holds.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    #[must_use]
    pub fn with_favorites(mut self, favorites: FavoriteSet) -> Self {
        self.favorites = favorites;
        self
    }
}

/// Failure modes of a favorite toggle.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    /// Toggling requires a session; the caller should prompt for sign-in.
    #[error("sign in to keep favorites")]
    NotAuthenticated,
    /// The remote mutation or the follow-up persist failed; local state was
    /// left exactly as it was.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}
