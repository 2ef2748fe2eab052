use reelview_core::{FavoriteSet, Movie, MovieId, viewmodel};
use yew::prelude::*;

use crate::components::movie_card::MovieCard;

#[derive(Properties, Clone, PartialEq)]
pub struct MovieGridProps {
    pub movies: Vec<Movie>,
    pub favorites: FavoriteSet,
    pub on_toggle_favorite: Callback<MovieId>,
}

/// Responsive card grid used by the listing, search, and favorites pages.
#[function_component(MovieGrid)]
pub fn movie_grid(props: &MovieGridProps) -> Html {
    if props.movies.is_empty() {
        return html! { <p class="grid-empty">{ "No movies found." }</p> };
    }
    let cards = viewmodel::movie_cards(&props.movies, &props.favorites);
    html! {
        <div class="movie-grid" data-testid="movie-grid">
            { for cards.into_iter().map(|card| {
                let id = card.id;
                html! {
                <MovieCard
                    key={id}
                    card={card}
                    on_toggle_favorite={props.on_toggle_favorite.clone()}
                />
            } }) }
        </div>
    }
}
