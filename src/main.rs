//! Roadmap Viewer Entry Point
//!
//! Mounts the app into the pre-existing `#content` container.

mod app;
mod components;
mod context;
mod counters;
mod data;
mod links;
mod models;
mod router;
mod store;
mod tree;

use app::App;
use leptos::mount::mount_to;
use wasm_bindgen::JsCast;

/// Id of the container element the page must provide
const CONTAINER_ID: &str = "content";

fn main() {
    console_error_panic_hook::set_once();

    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONTAINER_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match target {
        Some(target) => mount_to(target, App).forget(),
        None => {
            web_sys::console::error_1(&format!("[APP] #{CONTAINER_ID} container not found").into())
        }
    }
}
