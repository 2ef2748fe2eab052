//! Routed pages. Each page owns its transient fetch state and its own
//! failure boundary; navigation rebuilds it from scratch.
pub mod detail;
pub mod favorites;
pub mod home;
pub mod movies;
pub mod not_found;
pub mod search;

use reelview_core::{Movie, MoviePage};

/// Fetch lifecycle of a movie-list section.
#[derive(Clone, Debug, PartialEq)]
pub enum Section {
    Loading,
    Ready(Vec<Movie>),
    Failed,
}

/// Listing fetches collapse failures to `None`; map that onto a section.
#[must_use]
pub fn section_from(fetched: Option<MoviePage>) -> Section {
    match fetched {
        Some(page) => Section::Ready(page.results),
        None => Section::Failed,
    }
}

/// Fetch lifecycle of a paginated grid, keeping the whole page for its
/// `total_pages`.
#[derive(Clone, Debug, PartialEq)]
pub enum GridSection {
    Loading,
    Ready(MoviePage),
    Failed,
}
