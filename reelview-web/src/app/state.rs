use std::rc::Rc;

use reelview_core::{Movie, Profile, SearchSequencer};
use yew::prelude::*;

/// The single-owner application state threaded through the page controller.
///
/// The profile snapshot is the only durable piece; the rest is transient UI
/// state (search box, dropdown preview, notice banner).
#[derive(Clone)]
pub struct AppState {
    pub profile: UseStateHandle<Profile>,
    pub search_input: UseStateHandle<String>,
    pub suggestions: UseStateHandle<Vec<Movie>>,
    pub notice: UseStateHandle<Option<String>>,
    /// Debounce tickets for the dropdown search.
    pub search_seq: Rc<SearchSequencer>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        profile: use_state(Profile::default),
        search_input: use_state(String::new),
        suggestions: use_state(Vec::new),
        notice: use_state(|| None),
        search_seq: use_memo((), |()| SearchSequencer::new()),
    }
}
