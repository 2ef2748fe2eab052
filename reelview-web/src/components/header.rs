use reelview_core::{ListingKind, Movie, Profile, viewmodel};
use yew::prelude::*;

use crate::components::search_box::SearchBox;

/// Scroll offset past which the top bar switches to its solid style.
#[cfg(target_arch = "wasm32")]
const SCROLL_THRESHOLD: f64 = 40.0;

#[derive(Properties, Clone, PartialEq)]
pub struct HeaderProps {
    pub profile: Profile,
    pub search_input: AttrValue,
    pub suggestions: Vec<Movie>,
    pub notice: Option<String>,
    pub on_search_input: Callback<String>,
    pub on_search_submit: Callback<()>,
    pub on_login: Callback<()>,
    pub on_logout: Callback<()>,
    pub on_dismiss_notice: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_state(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |()| {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let listener = Closure::<dyn FnMut()>::new(move || {
                let offset = crate::dom::window().scroll_y().unwrap_or(0.0);
                scrolled.set(offset > SCROLL_THRESHOLD);
            });
            let window = crate::dom::window();
            let _ = window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            move || {
                let _ = crate::dom::window().remove_event_listener_with_callback(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                );
                drop(listener);
            }
        });
    }

    let account = match &props.profile.session {
        Some(session) => {
            let on_logout = {
                let on_logout = props.on_logout.clone();
                Callback::from(move |_: MouseEvent| on_logout.emit(()))
            };
            let avatar = session.avatar_path.as_deref().map(|path| {
                html! {
                    <img
                        class="avatar"
                        src={format!("{}{path}", viewmodel::HEADSHOT_BASE)}
                        alt=""
                    />
                }
            });
            html! {
                <div class="account-controls">
                    { avatar.unwrap_or_default() }
                    <span class="username">{ session.username.clone() }</span>
                    <button class="btn btn-ghost" onclick={on_logout} data-testid="logout-btn">
                        { "Sign out" }
                    </button>
                </div>
            }
        }
        None => {
            let on_login = {
                let on_login = props.on_login.clone();
                Callback::from(move |_: MouseEvent| on_login.emit(()))
            };
            html! {
                <button class="btn btn-primary" onclick={on_login} data-testid="login-btn">
                    { "Sign in" }
                </button>
            }
        }
    };

    let notice = props.notice.as_ref().map(|message| {
        let on_dismiss = {
            let on_dismiss = props.on_dismiss_notice.clone();
            Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
        };
        html! {
            <div class="notice-banner" role="status" data-testid="notice-banner">
                <span>{ message.clone() }</span>
                <button class="btn btn-ghost" aria-label="Dismiss" onclick={on_dismiss}>
                    { "✕" }
                </button>
            </div>
        }
    });

    html! {
        <>
            <header class={classes!("top-bar", (*scrolled).then_some("is-scrolled"))}>
                <a class="brand" href="/">{ "Reelview" }</a>
                <nav class="main-nav" aria-label="Primary">
                    <a href="/">{ "Home" }</a>
                    <a href={viewmodel::listing_href(ListingKind::Popular, 1)}>{ "Movies" }</a>
                    <a href="/favorites">{ "Favorites" }</a>
                </nav>
                <SearchBox
                    value={props.search_input.clone()}
                    suggestions={props.suggestions.clone()}
                    on_input={props.on_search_input.clone()}
                    on_submit={props.on_search_submit.clone()}
                />
                { account }
            </header>
            { notice.unwrap_or_default() }
        </>
    }
}
