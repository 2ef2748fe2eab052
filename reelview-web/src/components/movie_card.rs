use reelview_core::MovieId;
use reelview_core::viewmodel::MovieCardVm;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MovieCardProps {
    pub card: MovieCardVm,
    pub on_toggle_favorite: Callback<MovieId>,
}

#[function_component(MovieCard)]
pub fn movie_card(props: &MovieCardProps) -> Html {
    let card = &props.card;

    let on_favorite = {
        let on_toggle = props.on_toggle_favorite.clone();
        let id = card.id;
        Callback::from(move |e: MouseEvent| {
            // The button sits inside the detail link.
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    html! {
        <div class="card movie-card" data-testid="movie-card">
            <a class="movie-card-link" href={card.detail_href.clone()}>
                <img
                    class="movie-poster"
                    src={card.poster.clone()}
                    alt={card.title.clone()}
                    loading="lazy"
                />
            </a>
            <div class="card-body">
                <h3 class="card-title">{ card.title.clone() }</h3>
                <p class="card-meta">
                    <span class="rating">{ format!("⭐ {}", card.rating) }</span>
                    { card.year.map_or_else(Html::default, |year| html! {
                        <span class="year">{ year }</span>
                    }) }
                </p>
                <button
                    class={classes!(
                        "btn",
                        "btn-ghost",
                        "favorite-btn",
                        card.favorite.then_some("is-favorite"),
                    )}
                    aria-pressed={card.favorite.to_string()}
                    aria-label={format!("Toggle favorite for {}", card.title)}
                    onclick={on_favorite}
                >
                    { if card.favorite { "♥" } else { "♡" } }
                </button>
            </div>
        </div>
    }
}
