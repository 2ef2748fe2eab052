use reelview_core::{Movie, viewmodel};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SearchBoxProps {
    pub value: AttrValue,
    pub suggestions: Vec<Movie>,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Header search input with the debounced dropdown preview.
#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    let onkeydown = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_submit.emit(());
            }
        })
    };

    let entries = viewmodel::suggestions(&props.suggestions);
    let dropdown = (!props.value.is_empty() && !entries.is_empty()).then(|| {
        html! {
            <ul class="search-dropdown" data-testid="search-dropdown">
                { for entries.into_iter().map(|entry| html! {
                    <li key={entry.id}>
                        <a class="search-suggestion" href={entry.detail_href.clone()}>
                            <img class="suggestion-poster" src={entry.poster.clone()} alt="" />
                            <span class="suggestion-title">{ entry.title.clone() }</span>
                            { entry.year.map_or_else(Html::default, |year| html! {
                                <span class="suggestion-year">{ year }</span>
                            }) }
                        </a>
                    </li>
                }) }
            </ul>
        }
    });

    html! {
        <div class="search-box" role="search">
            <input
                class="search-input"
                type="search"
                placeholder="Search movies…"
                value={props.value.clone()}
                aria-label="Search movies"
                {oninput}
                {onkeydown}
            />
            { dropdown.unwrap_or_default() }
        </div>
    }
}
