use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">
            <p>{ "Reelview — movie data from the TMDB catalog." }</p>
        </footer>
    }
}
