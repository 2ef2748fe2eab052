//! Reelview core
//!
//! Platform-agnostic logic for the Reelview movie-discovery client: catalog
//! data types, the session/favorites engine, and the pure view transforms.
//! No UI or browser dependencies live here.

pub mod favorites;
pub mod movie;
pub mod pagination;
pub mod profile;
pub mod query;
pub mod search;
pub mod session;
pub mod viewmodel;

// Re-export commonly used types
pub use favorites::FavoriteSet;
pub use movie::{
    CastMember, Credits, Genre, ListingKind, Movie, MovieDetail, MovieId, MoviePage,
};
pub use pagination::{MAX_PAGE, PageControls, clamp_page, clamp_total, page_controls};
pub use profile::{Profile, ToggleError};
pub use query::QueryParams;
pub use search::{DEBOUNCE_MS, SearchSequencer, SearchTicket};
pub use session::{Account, AuthCallback, Session};

/// Trait for the remote movie catalog service.
/// Platform-specific implementations issue the actual HTTP requests.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    type Error: std::error::Error + Send + Sync + 'static;

    /// One page of a browsable listing. A failed fetch is reported by the
    /// implementation and surfaces as `None`; callers treat it as "nothing
    /// found".
    async fn listing(&self, kind: ListingKind, page: u32) -> Option<MoviePage>;

    /// One page of search results, same failure contract as [`Self::listing`].
    async fn search(&self, query: &str, page: u32) -> Option<MoviePage>;

    /// Full detail for a movie, with embedded cast.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success response, so the
    /// caller can render an explicit error state.
    async fn movie_detail(&self, id: MovieId) -> Result<MovieDetail, Self::Error>;

    /// Request a short-lived login token.
    ///
    /// # Errors
    ///
    /// Returns an error when the remote reports non-success.
    async fn new_request_token(&self) -> Result<String, Self::Error>;

    /// Exchange an approved token for a session id.
    ///
    /// # Errors
    ///
    /// Returns an error when no session id is issued.
    async fn create_session(&self, request_token: &str) -> Result<String, Self::Error>;

    /// Resolve a session id to its account.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success response.
    async fn account(&self, session_id: &str) -> Result<Account, Self::Error>;

    /// Mark or unmark a movie as a favorite of the account.
    ///
    /// # Errors
    ///
    /// Returns an error when the remote reports non-success; the caller must
    /// leave local state untouched in that case.
    async fn set_favorite(
        &self,
        account_id: u64,
        session_id: &str,
        movie_id: MovieId,
        favorite: bool,
    ) -> Result<(), Self::Error>;

    /// One page of the account's favorite movies. Callers loop until
    /// `page >= total_pages`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success response.
    async fn favorite_movies(
        &self,
        account_id: u64,
        session_id: &str,
        page: u32,
    ) -> Result<MoviePage, Self::Error>;
}

/// Trait for the durable profile records.
/// Platform-specific implementations should provide this.
pub trait ProfileStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the session record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save_session(&self, session: &Session) -> Result<(), Self::Error>;

    /// Load the session record. Absent data is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if stored data exists but cannot be read.
    fn load_session(&self) -> Result<Option<Session>, Self::Error>;

    /// Remove the session record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be removed.
    fn clear_session(&self) -> Result<(), Self::Error>;

    /// Persist the favorite-id record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save_favorites(&self, favorites: &FavoriteSet) -> Result<(), Self::Error>;

    /// Load the favorite-id record. Absent data is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if stored data exists but cannot be read.
    fn load_favorites(&self) -> Result<Option<FavoriteSet>, Self::Error>;

    /// Remove the favorite-id record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be removed.
    fn clear_favorites(&self) -> Result<(), Self::Error>;
}

/// Reconciles the profile between memory, durable storage, and the remote
/// catalog.
///
/// Precedence rule, applied uniformly: the remote list is authoritative only
/// when it is reachable; otherwise the last persisted snapshot stands. Every
/// successful mutation persists before the new snapshot is handed back, so
/// memory and storage cannot diverge across a reload.
pub struct ProfileEngine<C, S>
where
    C: CatalogApi,
    S: ProfileStore,
{
    catalog: C,
    store: S,
}

impl<C, S> ProfileEngine<C, S>
where
    C: CatalogApi,
    S: ProfileStore,
{
    pub const fn new(catalog: C, store: S) -> Self {
        Self { catalog, store }
    }

    /// Load the last persisted profile.
    ///
    /// Malformed or absent records degrade to the anonymous defaults; storage
    /// trouble never propagates out of startup.
    #[must_use]
    pub fn restore(&self) -> Profile {
        Profile {
            session: self.store.load_session().ok().flatten(),
            favorites: self.store.load_favorites().ok().flatten().unwrap_or_default(),
        }
    }

    /// Promote an approved request token to an authenticated profile.
    ///
    /// Exchanges the token for a session, resolves the account, persists the
    /// session record, then refreshes favorites from the remote.
    ///
    /// # Errors
    ///
    /// Returns an error if any exchange step or the session persist fails;
    /// the profile stays anonymous in that case.
    pub async fn complete_login(&self, request_token: &str) -> Result<Profile, anyhow::Error> {
        let session_id = self
            .catalog
            .create_session(request_token)
            .await
            .map_err(anyhow::Error::new)?;
        let account = self
            .catalog
            .account(&session_id)
            .await
            .map_err(anyhow::Error::new)?;
        let session = Session::new(session_id, account);
        self.store
            .save_session(&session)
            .map_err(anyhow::Error::new)?;

        let profile = Profile {
            session: Some(session),
            favorites: self.store.load_favorites().ok().flatten().unwrap_or_default(),
        };
        Ok(self.refresh_favorites(profile).await)
    }

    /// Replace the favorite snapshot with the authoritative remote list.
    ///
    /// Pages are fetched until `page >= total_pages`. An empty but successful
    /// fetch does replace the snapshot with an empty set; any fetch or
    /// persist failure keeps the snapshot exactly as it was. Anonymous
    /// profiles pass through untouched.
    pub async fn refresh_favorites(&self, profile: Profile) -> Profile {
        let Some(session) = profile.session.clone() else {
            return profile;
        };

        let mut ids = Vec::new();
        let mut page = 1;
        loop {
            match self
                .catalog
                .favorite_movies(session.account_id, &session.session_id, page)
                .await
            {
                Ok(fetched) => {
                    ids.extend(fetched.results.iter().map(|m| m.id));
                    if page >= fetched.total_pages {
                        break;
                    }
                    page += 1;
                }
                // Remote unreachable: the local snapshot stands.
                Err(_) => return profile,
            }
        }

        let favorites = FavoriteSet::from_ids(ids);
        if self.store.save_favorites(&favorites).is_err() {
            return profile;
        }
        profile.with_favorites(favorites)
    }

    /// Flip a movie in or out of the favorites.
    ///
    /// The remote mutation goes first; the in-memory set and the persisted
    /// record are only updated once it succeeds.
    ///
    /// # Errors
    ///
    /// [`ToggleError::NotAuthenticated`] without a session; otherwise
    /// [`ToggleError::Failed`] with local state untouched.
    pub async fn toggle_favorite(
        &self,
        profile: &Profile,
        movie_id: MovieId,
    ) -> Result<Profile, ToggleError> {
        let Some(session) = profile.session.as_ref() else {
            return Err(ToggleError::NotAuthenticated);
        };

        let favorite = !profile.favorites.contains(movie_id);
        self.catalog
            .set_favorite(session.account_id, &session.session_id, movie_id, favorite)
            .await
            .map_err(|e| ToggleError::Failed(anyhow::Error::new(e)))?;

        let favorites = profile.favorites.with_toggled(movie_id);
        self.store
            .save_favorites(&favorites)
            .map_err(|e| ToggleError::Failed(anyhow::Error::new(e)))?;
        Ok(profile.clone().with_favorites(favorites))
    }

    /// Drop the session: both durable records removed, favorites cleared.
    #[must_use]
    pub fn logout(&self) -> Profile {
        let _ = self.store.clear_session();
        let _ = self.store.clear_favorites();
        Profile::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Debug, thiserror::Error)]
    #[error("scripted failure: {0}")]
    struct ScriptedError(&'static str);

    fn movie(id: MovieId) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            poster_path: None,
            backdrop_path: None,
            vote_average: 7.0,
            release_date: None,
            overview: String::new(),
        }
    }

    fn page_of(ids: &[MovieId], page: u32, total_pages: u32) -> MoviePage {
        MoviePage {
            page,
            results: ids.iter().copied().map(movie).collect(),
            total_pages,
        }
    }

    #[derive(Clone, Default)]
    struct ScriptedCatalog {
        favorite_pages: Rc<RefCell<HashMap<u32, MoviePage>>>,
        fail_favorites: Rc<Cell<bool>>,
        fail_set_favorite: Rc<Cell<bool>>,
        marks: Rc<RefCell<Vec<(MovieId, bool)>>>,
        listing_pages_seen: Rc<RefCell<Vec<u32>>>,
    }

    impl ScriptedCatalog {
        fn with_favorite_pages(pages: &[(&[MovieId], u32)]) -> Self {
            let catalog = Self::default();
            for (idx, (ids, total_pages)) in pages.iter().enumerate() {
                let number = u32::try_from(idx).unwrap() + 1;
                catalog
                    .favorite_pages
                    .borrow_mut()
                    .insert(number, page_of(ids, number, *total_pages));
            }
            catalog
        }
    }

    impl CatalogApi for ScriptedCatalog {
        type Error = ScriptedError;

        async fn listing(&self, _kind: ListingKind, page: u32) -> Option<MoviePage> {
            self.listing_pages_seen.borrow_mut().push(page);
            Some(page_of(&[1], page, 3))
        }

        async fn search(&self, _query: &str, page: u32) -> Option<MoviePage> {
            Some(page_of(&[2], page, 1))
        }

        async fn movie_detail(&self, id: MovieId) -> Result<MovieDetail, Self::Error> {
            Ok(MovieDetail {
                movie: movie(id),
                genres: vec![],
                runtime: None,
                tagline: None,
                credits: None,
            })
        }

        async fn new_request_token(&self) -> Result<String, Self::Error> {
            Ok("token-1".into())
        }

        async fn create_session(&self, request_token: &str) -> Result<String, Self::Error> {
            if request_token == "approved-token" {
                Ok("session-1".into())
            } else {
                Err(ScriptedError("token not approved"))
            }
        }

        async fn account(&self, _session_id: &str) -> Result<Account, Self::Error> {
            Ok(Account {
                id: 9,
                username: "casey".into(),
                avatar_path: None,
            })
        }

        async fn set_favorite(
            &self,
            _account_id: u64,
            _session_id: &str,
            movie_id: MovieId,
            favorite: bool,
        ) -> Result<(), Self::Error> {
            if self.fail_set_favorite.get() {
                return Err(ScriptedError("favorite rejected"));
            }
            self.marks.borrow_mut().push((movie_id, favorite));
            Ok(())
        }

        async fn favorite_movies(
            &self,
            _account_id: u64,
            _session_id: &str,
            page: u32,
        ) -> Result<MoviePage, Self::Error> {
            if self.fail_favorites.get() {
                return Err(ScriptedError("favorites unreachable"));
            }
            self.favorite_pages
                .borrow()
                .get(&page)
                .cloned()
                .ok_or(ScriptedError("missing page"))
        }
    }

    /// Stores the serialized form, so byte-level identity is checkable.
    #[derive(Clone, Default)]
    struct MemoryStore {
        session: Rc<RefCell<Option<String>>>,
        favorites: Rc<RefCell<Option<String>>>,
    }

    impl MemoryStore {
        fn persisted_favorites(&self) -> Option<String> {
            self.favorites.borrow().clone()
        }

        fn seed_favorites_raw(&self, raw: &str) {
            *self.favorites.borrow_mut() = Some(raw.to_string());
        }
    }

    impl ProfileStore for MemoryStore {
        type Error = ScriptedError;

        fn save_session(&self, session: &Session) -> Result<(), Self::Error> {
            *self.session.borrow_mut() = Some(serde_json::to_string(session).unwrap());
            Ok(())
        }

        fn load_session(&self) -> Result<Option<Session>, Self::Error> {
            self.session
                .borrow()
                .as_deref()
                .map(|raw| serde_json::from_str(raw).map_err(|_| ScriptedError("bad session")))
                .transpose()
        }

        fn clear_session(&self) -> Result<(), Self::Error> {
            *self.session.borrow_mut() = None;
            Ok(())
        }

        fn save_favorites(&self, favorites: &FavoriteSet) -> Result<(), Self::Error> {
            *self.favorites.borrow_mut() = Some(serde_json::to_string(favorites).unwrap());
            Ok(())
        }

        fn load_favorites(&self) -> Result<Option<FavoriteSet>, Self::Error> {
            self.favorites
                .borrow()
                .as_deref()
                .map(|raw| serde_json::from_str(raw).map_err(|_| ScriptedError("bad favorites")))
                .transpose()
        }

        fn clear_favorites(&self) -> Result<(), Self::Error> {
            *self.favorites.borrow_mut() = None;
            Ok(())
        }
    }

    fn authenticated_profile(favorites: &[MovieId]) -> Profile {
        Profile {
            session: Some(Session::new(
                "session-1".into(),
                Account {
                    id: 9,
                    username: "casey".into(),
                    avatar_path: None,
                },
            )),
            favorites: FavoriteSet::from_ids(favorites.iter().copied()),
        }
    }

    #[test]
    fn restore_survives_malformed_records() {
        let store = MemoryStore::default();
        store.seed_favorites_raw("{not json");
        let engine = ProfileEngine::new(ScriptedCatalog::default(), store);

        let profile = engine.restore();
        assert!(!profile.is_authenticated());
        assert!(profile.favorites.is_empty());
    }

    #[test]
    fn refresh_collects_every_remote_page() {
        let catalog = ScriptedCatalog::with_favorite_pages(&[(&[1, 2], 2), (&[3], 2)]);
        let store = MemoryStore::default();
        let engine = ProfileEngine::new(catalog, store.clone());

        let refreshed = block_on(engine.refresh_favorites(authenticated_profile(&[99])));
        assert_eq!(refreshed.favorites, FavoriteSet::from_ids([1, 2, 3]));
        // Persisted record matches the in-memory set.
        assert_eq!(
            store.persisted_favorites().as_deref(),
            Some(serde_json::to_string(&refreshed.favorites).unwrap().as_str())
        );
    }

    #[test]
    fn refresh_failure_keeps_the_local_snapshot() {
        let catalog = ScriptedCatalog::default();
        catalog.fail_favorites.set(true);
        let store = MemoryStore::default();
        store.seed_favorites_raw("[40,41]");
        let engine = ProfileEngine::new(catalog, store.clone());

        let profile = authenticated_profile(&[40, 41]);
        let refreshed = block_on(engine.refresh_favorites(profile.clone()));
        assert_eq!(refreshed, profile);
        assert_eq!(store.persisted_favorites().as_deref(), Some("[40,41]"));
    }

    #[test]
    fn refresh_replaces_snapshot_with_authoritative_empty_list() {
        let catalog = ScriptedCatalog::with_favorite_pages(&[(&[], 1)]);
        let store = MemoryStore::default();
        let engine = ProfileEngine::new(catalog, store.clone());

        let refreshed = block_on(engine.refresh_favorites(authenticated_profile(&[5, 6])));
        assert!(refreshed.favorites.is_empty());
        assert_eq!(store.persisted_favorites().as_deref(), Some("[]"));
    }

    #[test]
    fn anonymous_toggle_is_rejected_and_touches_nothing() {
        let catalog = ScriptedCatalog::default();
        let store = MemoryStore::default();
        let engine = ProfileEngine::new(catalog.clone(), store.clone());

        let result = block_on(engine.toggle_favorite(&Profile::default(), 12));
        assert!(matches!(result, Err(ToggleError::NotAuthenticated)));
        assert!(catalog.marks.borrow().is_empty());
        assert_eq!(store.persisted_favorites(), None);
    }

    #[test]
    fn failed_toggle_leaves_both_sets_byte_identical() {
        let catalog = ScriptedCatalog::default();
        catalog.fail_set_favorite.set(true);
        let store = MemoryStore::default();
        store.seed_favorites_raw("[5]");
        let engine = ProfileEngine::new(catalog, store.clone());

        let profile = authenticated_profile(&[5]);
        let before = store.persisted_favorites();
        let result = block_on(engine.toggle_favorite(&profile, 12));

        assert!(matches!(result, Err(ToggleError::Failed(_))));
        assert_eq!(profile.favorites, FavoriteSet::from_ids([5]));
        assert_eq!(store.persisted_favorites(), before);
    }

    #[test]
    fn successful_toggle_updates_memory_and_storage_together() {
        let catalog = ScriptedCatalog::default();
        let store = MemoryStore::default();
        let engine = ProfileEngine::new(catalog.clone(), store.clone());

        let profile = authenticated_profile(&[]);
        let toggled = block_on(engine.toggle_favorite(&profile, 12)).unwrap();
        assert!(toggled.favorites.contains(12));
        assert_eq!(store.persisted_favorites().as_deref(), Some("[12]"));
        assert_eq!(catalog.marks.borrow().as_slice(), &[(12, true)]);

        let untoggled = block_on(engine.toggle_favorite(&toggled, 12)).unwrap();
        assert!(untoggled.favorites.is_empty());
        assert_eq!(store.persisted_favorites().as_deref(), Some("[]"));
        assert_eq!(catalog.marks.borrow().as_slice(), &[(12, true), (12, false)]);
    }

    #[test]
    fn login_persists_session_and_pulls_favorites() {
        let catalog = ScriptedCatalog::with_favorite_pages(&[(&[21], 1)]);
        let store = MemoryStore::default();
        let engine = ProfileEngine::new(catalog, store.clone());

        let profile = block_on(engine.complete_login("approved-token")).unwrap();
        assert!(profile.is_authenticated());
        assert_eq!(profile.username(), Some("casey"));
        assert_eq!(profile.favorites, FavoriteSet::from_ids([21]));
        assert!(store.session.borrow().is_some());
    }

    #[test]
    fn failed_login_leaves_no_session_behind() {
        let engine = ProfileEngine::new(ScriptedCatalog::default(), MemoryStore::default());
        let result = block_on(engine.complete_login("stale-token"));
        assert!(result.is_err());
        assert!(!engine.restore().is_authenticated());
    }

    #[test]
    fn logout_clears_memory_and_both_records() {
        let catalog = ScriptedCatalog::with_favorite_pages(&[(&[21], 1)]);
        let store = MemoryStore::default();
        let engine = ProfileEngine::new(catalog, store.clone());

        let profile = block_on(engine.complete_login("approved-token")).unwrap();
        assert!(!profile.favorites.is_empty());

        let cleared = engine.logout();
        assert!(!cleared.is_authenticated());
        assert!(cleared.favorites.is_empty());
        assert!(store.session.borrow().is_none());
        assert!(store.persisted_favorites().is_none());
    }

    #[test]
    fn listing_passes_the_requested_page_through() {
        let catalog = ScriptedCatalog::default();
        for page in [1, 2, 17, 499, 500] {
            let fetched = block_on(catalog.listing(ListingKind::Popular, page)).unwrap();
            assert_eq!(fetched.page, page);
        }
        assert_eq!(
            catalog.listing_pages_seen.borrow().as_slice(),
            &[1, 2, 17, 499, 500]
        );
    }
}
