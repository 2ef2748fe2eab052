//! Event handlers wiring DOM events back into the profile engine and the
//! catalog. Each `build_*` returns a `Callback` that clones the state
//! handles it needs.
use reelview_core::{CatalogApi, DEBOUNCE_MS, MovieId, viewmodel};
use yew::prelude::*;

use crate::app::state::AppState;
use crate::catalog::TmdbCatalog;
use crate::{config, dom};

#[derive(Clone)]
pub struct AppHandlers {
    pub login: Callback<()>,
    pub logout: Callback<()>,
    pub toggle_favorite: Callback<MovieId>,
    pub search_input: Callback<String>,
    pub search_submit: Callback<()>,
    pub dismiss_notice: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            login: build_login(state),
            logout: build_logout(state),
            toggle_favorite: build_toggle_favorite(state),
            search_input: build_search_input(state),
            search_submit: build_search_submit(state),
            dismiss_notice: build_dismiss_notice(state),
        }
    }
}

/// Start the delegated login round-trip: fetch a request token, then hand
/// the browser to the remote authorize page with a redirect back here.
pub fn build_login(_state: &AppState) -> Callback<()> {
    Callback::from(move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            match TmdbCatalog.new_request_token().await {
                Ok(token) => {
                    let here = dom::current_url();
                    dom::navigate_to(&format!(
                        "{}/{token}?redirect_to={}",
                        config::authorize_base(),
                        urlencoding::encode(&here),
                    ));
                }
                Err(e) => {
                    log::error!("could not start sign-in: {e}");
                    dom::alert("Could not reach the sign-in service. Try again later.");
                }
            }
        });
    })
}

pub fn build_logout(state: &AppState) -> Callback<()> {
    let profile_handle = state.profile.clone();
    Callback::from(move |()| {
        let engine = crate::create_profile_engine();
        profile_handle.set(engine.logout());
    })
}

/// Remote-first toggle: local state only moves once the catalog confirms.
pub fn build_toggle_favorite(state: &AppState) -> Callback<MovieId> {
    let profile_handle = state.profile.clone();
    Callback::from(move |movie_id: MovieId| {
        let current = (*profile_handle).clone();
        if !current.is_authenticated() {
            dom::alert("Sign in to keep favorites.");
            return;
        }
        let profile_handle = profile_handle.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let engine = crate::create_profile_engine();
            match engine.toggle_favorite(&current, movie_id).await {
                Ok(updated) => profile_handle.set(updated),
                Err(e) => {
                    log::error!("favorite toggle failed: {e}");
                    dom::alert("Could not update favorites. Try again later.");
                }
            }
        });
    })
}

/// Debounced dropdown search. Every keystroke issues a fresh ticket; the
/// fetch only fires after the quiet period if its ticket is still current,
/// and the response is dropped if a newer keystroke overtook it in flight.
pub fn build_search_input(state: &AppState) -> Callback<String> {
    let input_handle = state.search_input.clone();
    let suggestions_handle = state.suggestions.clone();
    let sequencer = state.search_seq.clone();
    Callback::from(move |value: String| {
        input_handle.set(value.clone());

        let query = value.trim().to_string();
        if query.is_empty() {
            sequencer.cancel_all();
            suggestions_handle.set(Vec::new());
            return;
        }

        let ticket = sequencer.issue();
        let sequencer = sequencer.clone();
        let suggestions_handle = suggestions_handle.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if dom::sleep_ms(DEBOUNCE_MS as i32).await.is_err() {
                return;
            }
            if !sequencer.is_current(ticket) {
                return;
            }
            let fetched = TmdbCatalog.search(&query, 1).await;
            if !sequencer.is_current(ticket) {
                return;
            }
            suggestions_handle.set(fetched.map(|page| page.results).unwrap_or_default());
        });
    })
}

/// Enter in the search box: close the dropdown and open the full result page.
pub fn build_search_submit(state: &AppState) -> Callback<()> {
    let input_handle = state.search_input.clone();
    let suggestions_handle = state.suggestions.clone();
    let sequencer = state.search_seq.clone();
    Callback::from(move |()| {
        let query = input_handle.trim().to_string();
        if query.is_empty() {
            return;
        }
        sequencer.cancel_all();
        suggestions_handle.set(Vec::new());
        dom::navigate_to(&viewmodel::search_href(&query, 1));
    })
}

pub fn build_dismiss_notice(state: &AppState) -> Callback<()> {
    let notice_handle = state.notice.clone();
    Callback::from(move |()| notice_handle.set(None))
}
