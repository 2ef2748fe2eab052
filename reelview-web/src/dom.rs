//! Thin wrappers over the browser globals the app touches.
use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Perform a GET fetch and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let resp_value = JsFuture::from(window().fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Perform a POST fetch with a JSON body and return the browser `Response`.
///
/// # Errors
/// Returns an error if the request cannot be built, the fetch fails, or the
/// result is not a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_post_json(url: &str, body: &str) -> Result<Response, JsValue> {
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));
    let request = web_sys::Request::new_with_str_and_init(url, &init)?;
    request
        .headers()
        .set("content-type", "application/json;charset=utf-8")?;
    let resp_value = JsFuture::from(window().fetch_with_request(&request)).await?;
    resp_value.dyn_into::<Response>()
}

/// Current query string, with its leading `?` when non-empty.
#[must_use]
pub fn current_query() -> String {
    window().location().search().unwrap_or_default()
}

/// Full current URL, for use as a login redirect target.
#[must_use]
pub fn current_url() -> String {
    window().location().href().unwrap_or_default()
}

/// Hard-navigate the browser.
pub fn navigate_to(url: &str) {
    if let Err(e) = window().location().set_href(url) {
        console_error(&format!("navigation failed: {}", js_error_message(&e)));
    }
}

/// Replace the visible query string in place, without reloading.
///
/// Used to strip transient auth-callback parameters so a refresh cannot
/// re-process them.
pub fn replace_query(query: &str) {
    let location = window().location();
    let path = location.pathname().unwrap_or_else(|_| "/".into());
    let url = if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    };
    match window().history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                console_error(&format!("failed to clean url: {}", js_error_message(&e)));
            }
        }
        Err(e) => console_error(&format!("history unavailable: {}", js_error_message(&e))),
    }
}

/// Blocking user-facing notification.
pub fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}
