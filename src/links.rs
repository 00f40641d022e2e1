//! Link display text derivation.

use url::Url;

/// Display text for a resource link: host + path of the URL, or the raw
/// string when it does not parse (the link is still rendered, best effort).
pub fn link_text(href: &str) -> String {
    match Url::parse(href) {
        Ok(url) => format!("{}{}", url.host_str().unwrap_or_default(), url.path()),
        Err(_) => href.to_string(),
    }
}
