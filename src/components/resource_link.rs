//! Resource Link Component

use leptos::prelude::*;

use crate::links::link_text;

/// External link opening in a new tab. `rel="noopener"` keeps the opened
/// page from reaching back to this one. Without a label the display text is
/// derived from the URL's host and path (raw string when unparseable).
#[component]
pub fn ResourceLink(
    href: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] class: Option<&'static str>,
) -> impl IntoView {
    let text = label.unwrap_or_else(|| link_text(&href));
    view! {
        <a href=href target="_blank" rel="noopener" class=class>
            {text}
        </a>
    }
}
