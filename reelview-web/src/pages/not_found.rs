use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found-page" data-testid="not-found-page">
            <h1>{ "Page not found" }</h1>
            <p>{ "The page you are looking for does not exist." }</p>
            <a class="btn btn-primary" href="/">{ "Back to home" }</a>
        </div>
    }
}
