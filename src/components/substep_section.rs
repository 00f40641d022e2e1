//! Substep Section Component
//!
//! Collapsible `<details>` for one substep. Item rows are built lazily on
//! the first expand and at most once per page load; later collapse/expand
//! cycles reuse the already-built rows via the `<details>` open state.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{CounterLabel, ItemRow};
use crate::context::AppContext;
use crate::counters::Count;
use crate::tree::SubNode;

#[component]
pub fn SubstepSection(step_key: String, sub: SubNode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let sub_key = sub.key.clone();
    let count = ctx
        .counters
        .sub(&step_key, &sub_key)
        .unwrap_or_else(|| ArcRwSignal::new(Count::default()));

    let (built, set_built) = signal(false);
    let on_toggle = move |ev: web_sys::Event| {
        let open = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlDetailsElement>().ok())
            .map(|d| d.open())
            .unwrap_or(false);
        if open && !built.get_untracked() {
            set_built.set(true);
        }
    };

    let items = sub.items.clone();
    let row_step_key = step_key.clone();
    let row_sub_key = sub_key.clone();
    let rows = move || {
        built.get().then(|| {
            let step_key = row_step_key.clone();
            let sub_key = row_sub_key.clone();
            view! {
                <ul>
                    <For
                        each={
                            let items = items.clone();
                            move || items.clone().into_iter().enumerate()
                        }
                        key=|(i, _)| *i
                        children=move |(_, item)| {
                            view! {
                                <ItemRow
                                    step_key=step_key.clone()
                                    sub_key=sub_key.clone()
                                    item=item
                                />
                            }
                        }
                    />
                </ul>
            }
        })
    };

    view! {
        <details on:toggle=on_toggle>
            <summary>
                <span class="badge small">{format!("{step_key}.{sub_key}")}</span>
                " "
                {sub.title.clone()}
                " "
                <CounterLabel count=count/>
            </summary>
            {rows}
        </details>
    }
}
