//! Counter Label Component

use leptos::prelude::*;

use crate::counters::Count;

/// A `(done/total)` label driven by exactly one counter signal
#[component]
pub fn CounterLabel(count: ArcRwSignal<Count>) -> impl IntoView {
    view! { <span class="counts">{move || count.get().label()}</span> }
}
