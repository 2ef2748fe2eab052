use reelview_core::{MovieDetail, MovieId, Profile, viewmodel};
use yew::prelude::*;

use crate::components::error_notice::ErrorNotice;

#[derive(Clone, Debug, PartialEq)]
enum DetailSection {
    Loading,
    Ready(Box<MovieDetail>),
    Failed,
}

#[derive(Properties, Clone, PartialEq)]
pub struct DetailPageProps {
    pub id: MovieId,
    pub profile: Profile,
    pub on_toggle_favorite: Callback<MovieId>,
}

/// Single-movie page with embedded cast; failures render an explicit error
/// state rather than an empty shell.
#[function_component(DetailPage)]
pub fn detail_page(props: &DetailPageProps) -> Html {
    let section = use_state(|| DetailSection::Loading);

    #[cfg(target_arch = "wasm32")]
    {
        let section = section.clone();
        use_effect_with(props.id, move |&id| {
            section.set(DetailSection::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                use crate::catalog::TmdbCatalog;
                use reelview_core::CatalogApi;

                match TmdbCatalog.movie_detail(id).await {
                    Ok(detail) => section.set(DetailSection::Ready(Box::new(detail))),
                    Err(e) => {
                        log::error!("failed to load movie {id}: {e}");
                        section.set(DetailSection::Failed);
                    }
                }
            });
        });
    }

    let body = match &*section {
        DetailSection::Loading => html! { <p class="page-status">{ "Loading…" }</p> },
        DetailSection::Failed => html! {
            <ErrorNotice message="Error loading movie details." />
        },
        DetailSection::Ready(detail) => {
            let vm = viewmodel::detail_vm(detail, &props.profile.favorites);
            let on_favorite = {
                let on_toggle = props.on_toggle_favorite.clone();
                let id = vm.id;
                Callback::from(move |_: MouseEvent| on_toggle.emit(id))
            };
            let backdrop = vm.backdrop.as_ref().map(|url| {
                html! { <img class="detail-backdrop" src={url.clone()} alt="" /> }
            });
            let mut meta = vec![format!("⭐ {}", vm.rating)];
            meta.extend(vm.year.map(|y| y.to_string()));
            meta.extend(vm.runtime.clone());
            html! {
                <article class="movie-detail" data-testid="movie-detail">
                    { backdrop.unwrap_or_default() }
                    <div class="detail-body">
                        <img class="detail-poster" src={vm.poster.clone()} alt={vm.title.clone()} />
                        <div class="detail-text">
                            <h1>
                                { vm.title.clone() }
                                { vm.year.map_or_else(Html::default, |year| html! {
                                    <span class="detail-year">{ format!(" ({year})") }</span>
                                }) }
                            </h1>
                            { vm.tagline.as_ref().map_or_else(Html::default, |tagline| html! {
                                <p class="detail-tagline"><em>{ tagline.clone() }</em></p>
                            }) }
                            <p class="detail-meta">{ meta.join(" · ") }</p>
                            <div class="genre-badges">
                                { for vm.genres.iter().map(|genre| html! {
                                    <span class="badge">{ genre.clone() }</span>
                                }) }
                            </div>
                            <p class="detail-overview">{ vm.overview.clone() }</p>
                            <button
                                class={classes!(
                                    "btn",
                                    "favorite-btn",
                                    if vm.favorite { "btn-primary" } else { "btn-ghost" },
                                )}
                                aria-pressed={vm.favorite.to_string()}
                                onclick={on_favorite}
                            >
                                { if vm.favorite { "♥ In favorites" } else { "♡ Add to favorites" } }
                            </button>
                        </div>
                    </div>
                    { cast_section(&vm) }
                </article>
            }
        }
    };

    html! { <div class="detail-page">{ body }</div> }
}

fn cast_section(vm: &viewmodel::DetailVm) -> Html {
    if vm.cast.is_empty() {
        return Html::default();
    }
    html! {
        <section class="cast-section">
            <h2>{ "Top Billed Cast" }</h2>
            <div class="cast-strip">
                { for vm.cast.iter().map(|member| html! {
                    <div class="cast-card">
                        { member.headshot.as_ref().map_or_else(
                            || html! { <div class="cast-placeholder" aria-hidden="true" /> },
                            |url| html! { <img class="cast-photo" src={url.clone()} alt={member.name.clone()} /> },
                        ) }
                        <p class="cast-name">{ member.name.clone() }</p>
                        <p class="cast-role">{ member.character.clone() }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
