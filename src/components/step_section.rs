//! Step Section Component
//!
//! Top-level collapsible `<details>` for one step: badge, title, counter
//! label, and the step's substeps in tree order.

use leptos::prelude::*;

use crate::components::{CounterLabel, SubstepSection};
use crate::context::AppContext;
use crate::counters::Count;
use crate::tree::StepNode;

#[component]
pub fn StepSection(step: StepNode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let step_key = step.key.clone();
    let count = ctx
        .counters
        .step(&step_key)
        .unwrap_or_else(|| ArcRwSignal::new(Count::default()));

    let subs = step.subs.clone();
    let sub_step_key = step_key.clone();

    view! {
        <details>
            <summary>
                <span class="badge">{format!("Step {step_key}")}</span>
                " "
                {step.title.clone()}
                " "
                <CounterLabel count=count/>
            </summary>
            <For
                each=move || subs.clone()
                key=|sub| sub.key.clone()
                children=move |sub| {
                    view! { <SubstepSection step_key=sub_step_key.clone() sub=sub/> }
                }
            />
        </details>
    }
}
