use reelview_core::PageControls;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PaginationProps {
    pub controls: PageControls,
    /// Maps a page number to the href for that page of the current grid.
    pub href_for: Callback<u32, String>,
}

/// Numbered pagination strip; the controls are pre-clamped so nothing past
/// the API page cap can be offered.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let controls = &props.controls;
    if controls.total <= 1 {
        return Html::default();
    }

    let edge = |page: Option<u32>, label: &str, name: &str| match page {
        Some(page) => html! {
            <a class="page-link" href={props.href_for.emit(page)} aria-label={name.to_string()}>
                { label }
            </a>
        },
        None => html! { <span class="page-link is-disabled">{ label }</span> },
    };

    html! {
        <nav class="pagination" aria-label="Pagination">
            { edge(controls.prev, "‹ Prev", "Previous page") }
            { for controls.numbered.iter().map(|&page| {
                let href = props.href_for.emit(page);
                if page == controls.current {
                    html! { <span class="page-link is-current" aria-current="page">{ page }</span> }
                } else {
                    html! { <a class="page-link" href={href}>{ page }</a> }
                }
            }) }
            { edge(controls.next, "Next ›", "Next page") }
        </nav>
    }
}
