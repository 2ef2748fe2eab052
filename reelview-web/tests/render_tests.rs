//! Native SSR renders of the pure view paths: no browser, no fetches, just
//! props in and markup out.
use futures::executor::block_on;
use reelview_core::{FavoriteSet, Movie, page_controls, viewmodel};
use reelview_web::app::state::use_app_state;
use reelview_web::app::view::render_app;
use reelview_web::components::error_notice::{ErrorNotice, ErrorNoticeProps};
use reelview_web::components::movie_card::{MovieCard, MovieCardProps};
use reelview_web::components::movie_row::{MovieRow, MovieRowProps};
use reelview_web::components::pagination::{Pagination, PaginationProps};
use reelview_web::components::search_box::{SearchBox, SearchBoxProps};
use reelview_web::pages::Section;
use reelview_web::router::Route;
use yew::prelude::*;
use yew::LocalServerRenderer;

fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/p{id}.jpg")),
        backdrop_path: Some(format!("/b{id}.jpg")),
        vote_average: 7.3,
        release_date: Some("2008-07-18".into()),
        overview: "An overview.".into(),
    }
}

#[derive(Properties, PartialEq)]
struct HarnessProps {
    route: Route,
    #[prop_or_default]
    query: String,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let state = use_app_state();
    render_app(&state, Some(&props.route), &props.query)
}

fn render_route(route: Route, query: &str) -> String {
    block_on(
        LocalServerRenderer::<Harness>::with_props(HarnessProps {
            route,
            query: query.to_string(),
        })
        .render(),
    )
}

#[test]
fn movie_card_renders_title_rating_and_favorite_state() {
    let card = viewmodel::movie_card(&movie(5, "Heat"), &FavoriteSet::from_ids([5]));
    let html = block_on(
        LocalServerRenderer::<MovieCard>::with_props(MovieCardProps {
            card,
            on_toggle_favorite: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Heat"));
    assert!(html.contains("/detail?id=5"));
    assert!(html.contains("⭐ 7.3"));
    assert!(html.contains("2008"));
    assert!(html.contains("aria-pressed=\"true\""));
}

#[test]
fn unfavorited_card_offers_the_outline_heart() {
    let card = viewmodel::movie_card(&movie(6, "Ronin"), &FavoriteSet::new());
    let html = block_on(
        LocalServerRenderer::<MovieCard>::with_props(MovieCardProps {
            card,
            on_toggle_favorite: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("aria-pressed=\"false\""));
    assert!(html.contains('♡'));
}

#[test]
fn failed_row_shows_its_own_error_boundary() {
    let html = block_on(
        LocalServerRenderer::<MovieRow>::with_props(MovieRowProps {
            title: "Popular".into(),
            section: Section::Failed,
            browse_href: "/movies?type=popular&page=1".into(),
            favorites: FavoriteSet::new(),
            on_toggle_favorite: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Could not load this listing"));
    assert!(html.contains("role=\"alert\""));
}

#[test]
fn pagination_never_offers_pages_past_the_cap() {
    let html = block_on(
        LocalServerRenderer::<Pagination>::with_props(PaginationProps {
            controls: page_controls(9999, 47_000),
            href_for: Callback::from(|page: u32| format!("/movies?type=popular&page={page}")),
        })
        .render(),
    );
    assert!(html.contains(">500<"));
    assert!(!html.contains("page=501"));
    assert!(html.contains("aria-current=\"page\""));
    // Clamped to the last page, so the forward control is inert.
    assert!(html.contains("is-disabled"));
}

#[test]
fn search_dropdown_previews_at_most_five_results() {
    let suggestions: Vec<Movie> = (1..=8)
        .map(|i| movie(i, &format!("Result {i}")))
        .collect();
    let html = block_on(
        LocalServerRenderer::<SearchBox>::with_props(SearchBoxProps {
            value: "res".into(),
            suggestions,
            on_input: Callback::noop(),
            on_submit: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Result 1"));
    assert!(html.contains("Result 5"));
    assert!(!html.contains("Result 6"));
}

#[test]
fn error_notice_is_an_alert() {
    let html = block_on(
        LocalServerRenderer::<ErrorNotice>::with_props(ErrorNoticeProps {
            message: "Try again later.".into(),
        })
        .render(),
    );
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Try again later."));
}

#[test]
fn home_route_renders_all_three_listings() {
    let html = render_route(Route::Home, "");
    assert!(html.contains("Reelview"));
    assert!(html.contains("Popular"));
    assert!(html.contains("Top Rated"));
    assert!(html.contains("Upcoming"));
}

#[test]
fn favorites_route_prompts_anonymous_visitors() {
    let html = render_route(Route::Favorites, "");
    assert!(html.contains("Sign in to see the movies you have bookmarked."));
}

#[test]
fn detail_route_without_an_id_is_not_found() {
    let html = render_route(Route::Detail, "");
    assert!(html.contains("Page not found"));

    let html = render_route(Route::Detail, "id=12");
    assert!(html.contains("Loading…"));
}

#[test]
fn movies_route_titles_follow_the_type_param() {
    let html = render_route(Route::Movies, "type=top_rated&page=2");
    assert!(html.contains("Top Rated Movies"));

    // Junk types fall back to the popular listing.
    let html = render_route(Route::Movies, "type=bogus");
    assert!(html.contains("Popular Movies"));
}

#[test]
fn search_route_echoes_the_query() {
    let html = render_route(Route::Search, "q=batman&page=1");
    assert!(html.contains("Results for"));
    assert!(html.contains("batman"));
}
