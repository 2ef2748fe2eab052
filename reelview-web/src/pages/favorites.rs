use reelview_core::{MovieId, Profile};
use yew::prelude::*;

use crate::components::error_notice::ErrorNotice;
use crate::components::movie_grid::MovieGrid;
use crate::pages::Section;

#[derive(Properties, Clone, PartialEq)]
pub struct FavoritesPageProps {
    pub profile: Profile,
    pub on_toggle_favorite: Callback<MovieId>,
    pub on_login: Callback<()>,
}

/// The signed-in account's favorite shelf; anonymous visitors get a sign-in
/// prompt instead.
#[function_component(FavoritesPage)]
pub fn favorites_page(props: &FavoritesPageProps) -> Html {
    let section = use_state(|| Section::Loading);

    #[cfg(target_arch = "wasm32")]
    {
        let section = section.clone();
        let session = props.profile.session.clone();
        use_effect_with(session, move |session: &Option<reelview_core::Session>| {
            let Some(session) = session.clone() else {
                return;
            };
            section.set(Section::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                use crate::catalog::TmdbCatalog;
                use reelview_core::CatalogApi;

                let mut movies: Vec<reelview_core::Movie> = Vec::new();
                let mut page = 1;
                loop {
                    match TmdbCatalog
                        .favorite_movies(session.account_id, &session.session_id, page)
                        .await
                    {
                        Ok(fetched) => {
                            movies.extend(fetched.results);
                            if page >= fetched.total_pages {
                                break;
                            }
                            page += 1;
                        }
                        Err(e) => {
                            log::error!("failed to load favorites: {e}");
                            section.set(Section::Failed);
                            return;
                        }
                    }
                }
                section.set(Section::Ready(movies));
            });
        });
    }

    if !props.profile.is_authenticated() {
        let on_login = {
            let on_login = props.on_login.clone();
            Callback::from(move |_: MouseEvent| on_login.emit(()))
        };
        return html! {
            <div class="favorites-page" data-testid="favorites-page">
                <div class="card sign-in-prompt">
                    <h1>{ "Your favorites" }</h1>
                    <p>{ "Sign in to see the movies you have bookmarked." }</p>
                    <button class="btn btn-primary" onclick={on_login}>{ "Sign in" }</button>
                </div>
            </div>
        };
    }

    let body = match &*section {
        Section::Loading => html! { <p class="page-status">{ "Loading…" }</p> },
        Section::Failed => html! {
            <ErrorNotice message="Could not load your favorites. Try again later." />
        },
        Section::Ready(movies) => html! {
            <MovieGrid
                movies={movies.clone()}
                favorites={props.profile.favorites.clone()}
                on_toggle_favorite={props.on_toggle_favorite.clone()}
            />
        },
    };

    html! {
        <div class="favorites-page" data-testid="favorites-page">
            <h1>{ "Your favorites" }</h1>
            { body }
        </div>
    }
}
