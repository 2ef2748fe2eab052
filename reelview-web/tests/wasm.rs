//! Browser-only storage checks, run with
//! `cargo test --target wasm32-unknown-unknown`.
#![cfg(target_arch = "wasm32")]

use reelview_core::{Account, FavoriteSet, ProfileStore, Session};
use reelview_web::storage::WebProfileStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn profile_records_round_trip() {
    let store = WebProfileStore;

    let session = Session::new(
        "sess-wasm".into(),
        Account {
            id: 1,
            username: "w".into(),
            avatar_path: None,
        },
    );
    store.save_session(&session).unwrap();
    assert_eq!(store.load_session().unwrap(), Some(session));

    let favorites = FavoriteSet::from_ids([1, 2]);
    store.save_favorites(&favorites).unwrap();
    assert_eq!(store.load_favorites().unwrap(), Some(favorites));

    store.clear_session().unwrap();
    store.clear_favorites().unwrap();
    assert_eq!(store.load_session().unwrap(), None);
    assert_eq!(store.load_favorites().unwrap(), None);
}
