#![cfg(target_arch = "wasm32")]

use filmfind::countdown::{initialize, now_millis, read_target};
use filmfind::storage::{KvStore, LocalStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_store(key: &str) -> LocalStore {
    let store = LocalStore::open().expect("localStorage available in test browser");
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(key);
    }
    store
}

#[wasm_bindgen_test]
fn local_store_round_trips_strings() {
    let store = fresh_store("filmfind_test_roundtrip");
    assert_eq!(store.get("filmfind_test_roundtrip").unwrap(), None);
    store.set("filmfind_test_roundtrip", "199000000").unwrap();
    assert_eq!(
        store.get("filmfind_test_roundtrip").unwrap().as_deref(),
        Some("199000000")
    );
}

#[wasm_bindgen_test]
fn deadline_survives_a_second_load() {
    let key = "filmfind_test_deadline";
    let store = fresh_store(key);
    let now = now_millis();
    let first = initialize(&store, key, 198_000, now);
    assert_eq!(first, now + 198_000_000);

    let reopened = LocalStore::open().unwrap();
    assert_eq!(read_target(&reopened, key), Ok(Some(first)));
    assert_eq!(initialize(&reopened, key, 198_000, now + 5_000), first);
}

#[wasm_bindgen_test]
fn corrupt_browser_value_is_replaced() {
    let key = "filmfind_test_corrupt";
    let store = fresh_store(key);
    store.set(key, "not-a-number").unwrap();
    let target = initialize(&store, key, 10, 1_000);
    assert_eq!(target, 11_000);
    assert_eq!(store.get(key).unwrap().as_deref(), Some("11000"));
}
