use reelview_core::{MAX_PAGE, MovieId, Profile, clamp_page, page_controls, viewmodel};
use yew::prelude::*;

use crate::components::error_notice::ErrorNotice;
use crate::components::movie_grid::MovieGrid;
use crate::components::pagination::Pagination;
use crate::pages::GridSection;

#[derive(Properties, Clone, PartialEq)]
pub struct SearchPageProps {
    pub query: String,
    pub page: u32,
    pub profile: Profile,
    pub on_toggle_favorite: Callback<MovieId>,
}

/// Full-page search results with the same grid and pagination as listings.
#[function_component(SearchPage)]
pub fn search_page(props: &SearchPageProps) -> Html {
    let section = use_state(|| GridSection::Loading);
    let requested = clamp_page(props.page, MAX_PAGE);

    #[cfg(target_arch = "wasm32")]
    {
        let section = section.clone();
        use_effect_with(
            (props.query.clone(), requested),
            move |(query, page): &(String, u32)| {
                let query = query.clone();
                let page = *page;
                section.set(GridSection::Loading);
                wasm_bindgen_futures::spawn_local(async move {
                    use crate::catalog::TmdbCatalog;
                    use reelview_core::CatalogApi;

                    if query.trim().is_empty() {
                        section.set(GridSection::Ready(reelview_core::MoviePage {
                            page: 1,
                            results: vec![],
                            total_pages: 0,
                        }));
                        return;
                    }
                    match TmdbCatalog.search(&query, page).await {
                        Some(fetched) => section.set(GridSection::Ready(fetched)),
                        None => section.set(GridSection::Failed),
                    }
                });
            },
        );
    }

    let query = props.query.clone();
    let body = match &*section {
        GridSection::Loading => html! { <p class="page-status">{ "Searching…" }</p> },
        GridSection::Failed => html! {
            <ErrorNotice message="Search is unavailable right now. Try again later." />
        },
        GridSection::Ready(fetched) => {
            let controls = page_controls(requested, fetched.total_pages);
            let href_query = query.clone();
            let href_for =
                Callback::from(move |page: u32| viewmodel::search_href(&href_query, page));
            html! {
                <>
                    <MovieGrid
                        movies={fetched.results.clone()}
                        favorites={props.profile.favorites.clone()}
                        on_toggle_favorite={props.on_toggle_favorite.clone()}
                    />
                    <Pagination controls={controls} href_for={href_for} />
                </>
            }
        }
    };

    html! {
        <div class="search-page" data-testid="search-page">
            <h1>{ format!("Results for “{query}”") }</h1>
            { body }
        </div>
    }
}
