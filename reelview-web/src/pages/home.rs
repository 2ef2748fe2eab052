use reelview_core::{ListingKind, MovieId, Profile, viewmodel};
use yew::prelude::*;

use crate::components::hero_carousel::HeroCarousel;
use crate::components::movie_row::MovieRow;
use crate::pages::Section;

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub profile: Profile,
    pub on_toggle_favorite: Callback<MovieId>,
}

/// Home: hero carousel over the popular listing, plus one row per listing.
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let popular = use_state(|| Section::Loading);
    let top_rated = use_state(|| Section::Loading);
    let upcoming = use_state(|| Section::Loading);

    #[cfg(target_arch = "wasm32")]
    {
        let popular = popular.clone();
        let top_rated = top_rated.clone();
        let upcoming = upcoming.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                use crate::catalog::TmdbCatalog;
                use crate::pages::section_from;
                use reelview_core::CatalogApi;

                // Awaited one after another, but each row keeps its own
                // failure boundary: one outage cannot blank the others.
                popular.set(section_from(
                    TmdbCatalog.listing(ListingKind::Popular, 1).await,
                ));
                top_rated.set(section_from(
                    TmdbCatalog.listing(ListingKind::TopRated, 1).await,
                ));
                upcoming.set(section_from(
                    TmdbCatalog.listing(ListingKind::Upcoming, 1).await,
                ));
            });
        });
    }

    let hero = if let Section::Ready(movies) = &*popular {
        let slides = viewmodel::hero_slides(movies);
        if slides.is_empty() {
            Html::default()
        } else {
            html! { <HeroCarousel slides={slides} /> }
        }
    } else {
        Html::default()
    };

    let row = |kind: ListingKind, section: &UseStateHandle<Section>| {
        html! {
            <MovieRow
                title={kind.title()}
                section={(**section).clone()}
                browse_href={viewmodel::listing_href(kind, 1)}
                favorites={props.profile.favorites.clone()}
                on_toggle_favorite={props.on_toggle_favorite.clone()}
            />
        }
    };

    html! {
        <div class="home-page" data-testid="home-page">
            { hero }
            { row(ListingKind::Popular, &popular) }
            { row(ListingKind::TopRated, &top_rated) }
            { row(ListingKind::Upcoming, &upcoming) }
        </div>
    }
}
