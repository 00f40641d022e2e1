//! Input data loading
//!
//! Prefers the inline JSON block the build step produces; falls back to a
//! pre-existing `window.data` array global, then to empty.

use wasm_bindgen::JsValue;

use crate::models::ItemRecord;

/// Id of the inline `<script type="application/json">` placeholder
pub const INLINE_JSON_ID: &str = "a2z-json";

pub fn load_data() -> Vec<ItemRecord> {
    if let Some(items) = load_inline_json() {
        return items;
    }
    if let Some(items) = load_window_global() {
        return items;
    }
    Vec::new()
}

fn load_inline_json() -> Option<Vec<ItemRecord>> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(INLINE_JSON_ID)?.text_content()?;
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Vec<ItemRecord>>(&text) {
        Ok(items) => Some(items),
        Err(e) => {
            web_sys::console::error_1(&format!("[DATA] Invalid inline JSON: {e}").into());
            None
        }
    }
}

fn load_window_global() -> Option<Vec<ItemRecord>> {
    let window = web_sys::window()?;
    let global = js_sys::Reflect::get(&window, &JsValue::from_str("data")).ok()?;
    if !js_sys::Array::is_array(&global) {
        return None;
    }
    serde_wasm_bindgen::from_value(global).ok()
}
