//! Startup reconciliation: restore the persisted profile, handle the auth
//! redirect callback, and pull the authoritative favorites when signed in.
#[cfg(target_arch = "wasm32")]
use reelview_core::{AuthCallback, Profile, query};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use crate::dom;

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
struct BootstrapHandles {
    profile: UseStateHandle<Profile>,
    notice: UseStateHandle<Option<String>>,
}

#[cfg(target_arch = "wasm32")]
fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        profile: app_state.profile.clone(),
        notice: app_state.notice.clone(),
    }
}

#[cfg(target_arch = "wasm32")]
async fn run_bootstrap(handles: BootstrapHandles) {
    let engine = crate::create_profile_engine();
    let mut profile = engine.restore();

    let callback = AuthCallback::from_query(&dom::current_query());
    let needs_cleanup = callback.needs_url_cleanup();
    match callback {
        AuthCallback::Approved { request_token } => {
            match engine.complete_login(&request_token).await {
                Ok(signed_in) => profile = signed_in,
                Err(e) => {
                    // Promotion failed: stay anonymous, but still clean the
                    // URL below so a refresh does not replay the token.
                    log::error!("sign-in failed: {e}");
                    handles
                        .notice
                        .set(Some("Sign-in failed. Please try again.".into()));
                }
            }
        }
        AuthCallback::Denied => {
            handles.notice.set(Some("Sign-in was cancelled.".into()));
        }
        AuthCallback::None => {
            if profile.is_authenticated() {
                profile = engine.refresh_favorites(profile).await;
            }
        }
    }
    if needs_cleanup {
        let cleaned =
            query::without_keys(&dom::current_query(), AuthCallback::TRANSIENT_PARAMS);
        dom::replace_query(&cleaned);
    }

    handles.profile.set(profile);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            run_bootstrap(handles).await;
        });
        || {}
    });
}
