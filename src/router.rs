//! Event Router
//!
//! One delegated `change` listener on the tree container instead of a
//! handler per checkbox. Each toggle touches exactly the two affected
//! counter signals and writes one storage entry.

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::context::AppContext;

/// Handle a bubbled `change` event from anywhere inside the container.
///
/// Non-checkbox targets (and anything outside an item row) are ignored.
pub fn handle_change(ctx: &AppContext, ev: &web_sys::Event) {
    let Some(target) = ev.target() else { return };
    let Ok(input) = target.dyn_into::<HtmlInputElement>() else {
        return;
    };
    if input.type_() != "checkbox" {
        return;
    }
    let Some(key) = input.get_attribute("data-key") else {
        return;
    };

    // Recover step/substep identity from the enclosing row
    let Ok(Some(row)) = input.closest("li") else {
        return;
    };
    let (Some(step_key), Some(sub_key)) =
        (row.get_attribute("data-step"), row.get_attribute("data-sub"))
    else {
        return;
    };

    let checked = input.checked();
    let delta = if checked { 1 } else { -1 };
    ctx.counters.apply_toggle(&step_key, &sub_key, delta);

    // Write-through for durability; a failed write is dropped silently and
    // the in-memory counters stay the session's source of truth
    let _ = ctx.store.save(&key, checked);
}
