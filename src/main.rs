use leptos::prelude::*;
use snapshot_viewer::App;
use snapshot_viewer::config::ROOT_ELEMENT_ID;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id(ROOT_ELEMENT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
