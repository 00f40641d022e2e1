//! Item Row Component
//!
//! One checklist entry: checkbox, title, and the fixed auxiliary link slots.
//! The row carries the step/substep identity and the checkbox carries the
//! storage key, so the delegated change handler can resolve a toggle without
//! any per-row listeners.

use leptos::prelude::*;

use crate::components::ResourceLink;
use crate::context::AppContext;
use crate::models::ItemRecord;

#[component]
pub fn ItemRow(step_key: String, sub_key: String, item: ItemRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let key = item.storage_key();
    let checked = ctx.store.load(&key).unwrap_or(false);
    let title = item.title.clone().unwrap_or_else(|| "(untitled)".to_string());

    let title_cell = match &item.article {
        Some(article) if !article.is_empty() => view! {
            <ResourceLink href=article.clone() label=title class="item-title"/>
        }
        .into_any(),
        _ => view! { <div class="item-title">{title}</div> }.into_any(),
    };

    view! {
        <li data-step=step_key data-sub=sub_key>
            <div class="item-row">
                <div class="title-cell">
                    <input type="checkbox" data-key=key checked=checked/>
                    {title_cell}
                </div>
                <LinkCol url=item.gfg.clone() label="GfG"/>
                <LinkCol url=item.leetcode.clone() label="LeetCode"/>
                <LinkCol url=item.solution.clone() label="Solution"/>
                <LinkCol url=item.video.clone() label="Video"/>
            </div>
        </li>
    }
}

/// Fixed-label auxiliary link slot; the column renders even when empty so
/// rows keep their alignment
#[component]
fn LinkCol(url: Option<String>, label: &'static str) -> impl IntoView {
    view! {
        <div class="link-col">
            {url.filter(|u| !u.is_empty()).map(|u| {
                view! {
                    <div class="links">
                        <ResourceLink href=u label=label.to_string()/>
                    </div>
                }
            })}
        </div>
    }
}
