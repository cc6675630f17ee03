#![cfg(target_arch = "wasm32")]

use filmfind::components::ad_container::AdContainer;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::js_sys::{Array, Reflect};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root(id: &str) -> web_sys::Element {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document in test browser");
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

#[wasm_bindgen_test(async)]
async fn ad_slot_mounts_and_queues_one_request_once_laid_out() {
    let window = web_sys::window().unwrap();
    let _ = Reflect::delete_property(&window, &JsValue::from_str("adsbygoogle"));

    let root = mount_root("ad-container-test");
    let _app = yew::Renderer::<AdContainer>::with_root(root.clone()).render();

    TimeoutFuture::new(0).await;
    assert!(root.query_selector(".ad-glass").unwrap().is_some());

    // Several poll periods: the slot has a width as soon as it is in the body.
    TimeoutFuture::new(500).await;
    assert!(root.query_selector("ins.adsbygoogle").unwrap().is_some());
    assert!(root.query_selector(".ad-loading").unwrap().is_none());

    let queue: Array = Reflect::get(&window, &JsValue::from_str("adsbygoogle"))
        .unwrap()
        .dyn_into()
        .expect("adsbygoogle queue is an array");
    assert_eq!(queue.length(), 1);
}
