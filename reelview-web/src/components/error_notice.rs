use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: AttrValue,
}

/// Inline failure text; every fetch site renders its own.
#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <p class="error-notice" role="alert" data-testid="error-notice">
            { props.message.clone() }
        </p>
    }
}
