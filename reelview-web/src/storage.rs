//! localStorage-backed profile persistence.
//!
//! Two namespaced records: the serialized session and the favorite-id list.
//! Anything unreadable is reported as absent, so stale or hand-edited
//! entries can never wedge startup.
use gloo::storage::{LocalStorage, Storage};

use reelview_core::{FavoriteSet, ProfileStore, Session};

const SESSION_KEY: &str = "reelview.session";
const FAVORITES_KEY: &str = "reelview.favorites";

#[derive(Debug, thiserror::Error)]
pub enum WebStoreError {
    #[error("storage error: {0}")]
    Storage(String),
}

/// Browser localStorage implementation of [`ProfileStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WebProfileStore;

impl ProfileStore for WebProfileStore {
    type Error = WebStoreError;

    fn save_session(&self, session: &Session) -> Result<(), Self::Error> {
        LocalStorage::set(SESSION_KEY, session)
            .map_err(|e| WebStoreError::Storage(format!("{e:?}")))
    }

    fn load_session(&self) -> Result<Option<Session>, Self::Error> {
        match LocalStorage::get(SESSION_KEY) {
            Ok(session) => Ok(Some(session)),
            Err(_) => Ok(None), // Absent or unreadable record
        }
    }

    fn clear_session(&self) -> Result<(), Self::Error> {
        LocalStorage::delete(SESSION_KEY);
        Ok(())
    }

    fn save_favorites(&self, favorites: &FavoriteSet) -> Result<(), Self::Error> {
        LocalStorage::set(FAVORITES_KEY, favorites)
            .map_err(|e| WebStoreError::Storage(format!("{e:?}")))
    }

    fn load_favorites(&self) -> Result<Option<FavoriteSet>, Self::Error> {
        match LocalStorage::get(FAVORITES_KEY) {
            Ok(favorites) => Ok(Some(favorites)),
            Err(_) => Ok(None),
        }
    }

    fn clear_favorites(&self) -> Result<(), Self::Error> {
        LocalStorage::delete(FAVORITES_KEY);
        Ok(())
    }
}
