use reelview_core::{ListingKind, MAX_PAGE, MovieId, Profile, clamp_page, page_controls, viewmodel};
use yew::prelude::*;

use crate::components::error_notice::ErrorNotice;
use crate::components::movie_grid::MovieGrid;
use crate::components::pagination::Pagination;
use crate::pages::GridSection;

#[derive(Properties, Clone, PartialEq)]
pub struct MoviesPageProps {
    pub kind: ListingKind,
    pub page: u32,
    pub profile: Profile,
    pub on_toggle_favorite: Callback<MovieId>,
}

/// Paginated grid for one listing type.
#[function_component(MoviesPage)]
pub fn movies_page(props: &MoviesPageProps) -> Html {
    let section = use_state(|| GridSection::Loading);
    // Out-of-range URLs are clamped before the request ever leaves.
    let requested = clamp_page(props.page, MAX_PAGE);

    #[cfg(target_arch = "wasm32")]
    {
        let section = section.clone();
        use_effect_with((props.kind, requested), move |&(kind, page)| {
            section.set(GridSection::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                use crate::catalog::TmdbCatalog;
                use reelview_core::CatalogApi;

                match TmdbCatalog.listing(kind, page).await {
                    Some(fetched) => section.set(GridSection::Ready(fetched)),
                    None => section.set(GridSection::Failed),
                }
            });
        });
    }

    let kind = props.kind;
    let body = match &*section {
        GridSection::Loading => html! { <p class="page-status">{ "Loading…" }</p> },
        GridSection::Failed => html! {
            <ErrorNotice message="Could not load movies. Try again later." />
        },
        GridSection::Ready(fetched) => {
            let controls = page_controls(requested, fetched.total_pages);
            let href_for = Callback::from(move |page: u32| viewmodel::listing_href(kind, page));
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
        <div class="movies-page" data-testid="movies-page">
            <h1>{ format!("{} Movies", kind.title()) }</h1>
            { body }
        </div>
    }
}
