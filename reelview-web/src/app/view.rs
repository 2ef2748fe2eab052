//! Top-level render: header chrome plus the routed page, dispatched on the
//! pathname and query parameters.
use reelview_core::{ListingKind, QueryParams};
use yew::prelude::*;

use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::detail::DetailPage;
use crate::pages::favorites::FavoritesPage;
use crate::pages::home::HomePage;
use crate::pages::movies::MoviesPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::search::SearchPage;
use crate::router::Route;

pub fn render_app(state: &AppState, route: Option<&Route>, query: &str) -> Html {
    let handlers = AppHandlers::new(state);
    let params = QueryParams::parse(query);
    let profile = (*state.profile).clone();

    let main_view = match route.cloned().unwrap_or(Route::Home) {
        Route::Home => html! {
            <HomePage
                profile={profile.clone()}
                on_toggle_favorite={handlers.toggle_favorite.clone()}
            />
        },
        Route::Movies => {
            let kind = params
                .get("type")
                .and_then(ListingKind::from_param)
                .unwrap_or(ListingKind::Popular);
            html! {
                <MoviesPage
                    kind={kind}
                    page={params.page()}
                    profile={profile.clone()}
                    on_toggle_favorite={handlers.toggle_favorite.clone()}
                />
            }
        }
        Route::Detail => match params.id() {
            Some(id) => html! {
                <DetailPage
                    id={id}
                    profile={profile.clone()}
                    on_toggle_favorite={handlers.toggle_favorite.clone()}
                />
            },
            None => html! { <NotFoundPage /> },
        },
        Route::Favorites => html! {
            <FavoritesPage
                profile={profile.clone()}
                on_toggle_favorite={handlers.toggle_favorite.clone()}
                on_login={handlers.login.clone()}
            />
        },
        Route::Search => html! {
            <SearchPage
                query={params.get("q").unwrap_or_default().to_string()}
                page={params.page()}
                profile={profile.clone()}
                on_toggle_favorite={handlers.toggle_favorite.clone()}
            />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <>
            <Header
                profile={profile}
                search_input={(*state.search_input).clone()}
                suggestions={(*state.suggestions).clone()}
                notice={(*state.notice).clone()}
                on_search_input={handlers.search_input.clone()}
                on_search_submit={handlers.search_submit.clone()}
                on_login={handlers.login.clone()}
                on_logout={handlers.logout.clone()}
                on_dismiss_notice={handlers.dismiss_notice.clone()}
            />
            <main id="main" role="main">
                { main_view }
            </main>
            <Footer />
        </>
    }
}
