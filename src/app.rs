//! Roadmap App
//!
//! Loads the item data, builds the step/substep tree, seeds counters from
//! persisted state, and renders the collapsible checklist. A single
//! delegated `change` listener on the container routes all toggles.

use leptos::prelude::*;
use std::sync::Arc;

use crate::components::StepSection;
use crate::context::AppContext;
use crate::counters::Counters;
use crate::data;
use crate::router;
use crate::store::{DoneStore, LocalStore};
use crate::tree::group_by_step;

#[component]
pub fn App() -> impl IntoView {
    let items = data::load_data();
    web_sys::console::log_1(&format!("[APP] Loaded {} items", items.len()).into());

    if items.is_empty() {
        return view! { <p class="empty">"No data found."</p> }.into_any();
    }

    let tree = group_by_step(&items);
    let store: Arc<dyn DoneStore + Send + Sync> = Arc::new(LocalStore);
    let counters = Counters::seed(&tree, store.as_ref());

    let ctx = AppContext::new(counters, store);
    provide_context(ctx.clone());

    let on_change = move |ev: web_sys::Event| router::handle_change(&ctx, &ev);

    view! {
        <div class="roadmap" on:change=on_change>
            <For
                each=move || tree.clone()
                key=|step| step.key.clone()
                children=|step| view! { <StepSection step=step/> }
            />
        </div>
    }
    .into_any()
}
