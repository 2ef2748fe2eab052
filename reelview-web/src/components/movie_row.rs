use reelview_core::{FavoriteSet, MovieId, viewmodel};
use yew::prelude::*;

use crate::components::error_notice::ErrorNotice;
use crate::components::movie_card::MovieCard;
use crate::pages::Section;

/// How far one nav-button press scrolls the strip, in pixels.
const SCROLL_STEP: f64 = 640.0;

#[derive(Properties, Clone, PartialEq)]
pub struct MovieRowProps {
    pub title: AttrValue,
    pub section: Section,
    pub browse_href: AttrValue,
    pub favorites: FavoriteSet,
    pub on_toggle_favorite: Callback<MovieId>,
}

/// Horizontal strip of movie cards with scroll buttons, one per home
/// listing.
#[function_component(MovieRow)]
pub fn movie_row(props: &MovieRowProps) -> Html {
    let strip_ref = use_node_ref();

    let scroll_by = {
        let strip_ref = strip_ref.clone();
        Callback::from(move |delta: f64| {
            if let Some(el) = strip_ref.cast::<web_sys::Element>() {
                el.scroll_by_with_x_and_y(delta, 0.0);
            }
        })
    };
    let scroll_left = {
        let scroll_by = scroll_by.clone();
        Callback::from(move |_: MouseEvent| scroll_by.emit(-SCROLL_STEP))
    };
    let scroll_right = Callback::from(move |_: MouseEvent| scroll_by.emit(SCROLL_STEP));

    let body = match &props.section {
        Section::Loading => html! { <p class="row-status">{ "Loading…" }</p> },
        Section::Failed => html! {
            <ErrorNotice message="Could not load this listing. Try again later." />
        },
        Section::Ready(movies) => {
            let cards = viewmodel::movie_cards(movies, &props.favorites);
            html! {
                <div class="movie-strip" ref={strip_ref.clone()}>
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
    };

    html! {
        <section class="movie-row">
            <div class="movie-row-head">
                <h2>{ props.title.clone() }</h2>
                <a class="see-all" href={props.browse_href.clone()}>{ "See all" }</a>
                <div class="row-nav">
                    <button class="btn btn-ghost" aria-label="Scroll left" onclick={scroll_left}>
                        { "‹" }
                    </button>
                    <button class="btn btn-ghost" aria-label="Scroll right" onclick={scroll_right}>
                        { "›" }
                    </button>
                </div>
            </div>
            { body }
        </section>
    }
}
