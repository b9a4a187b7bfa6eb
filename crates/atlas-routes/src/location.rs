//! Extracting the route path from a location string.
//!
//! The desktop shell uses hash history, so pages are addressed as
//! `index.html#/about` or `tauri://localhost/index.html#/about`. Plain paths
//! and ordinary URLs are accepted as well.

/// Document every window loads; the route lives in the fragment.
pub const APP_DOCUMENT: &str = "index.html";

/// Route path carried by `location`.
///
/// - a fragment wins: `index.html#/about` → `/about`
/// - the app document itself, with no route in its fragment, is the root:
///   `index.html`, `index.html#`, `tauri://localhost/index.html` → `/`
/// - a URL contributes its path: `https://host/prompts?x=1` → `/prompts`
/// - anything else is returned without its query string
///
/// No normalization beyond that: case and trailing slashes are kept, other
/// documents (`/page.html`) are kept as paths, and an empty location stays
/// empty, so matching stays exact.
#[must_use]
pub fn route_path(location: &str) -> &str {
    if let Some((document, fragment)) = location.split_once('#') {
        let fragment = strip_query(fragment);
        if !fragment.is_empty() {
            return fragment;
        }
        if document.is_empty() {
            return "/";
        }
        return document_path(document);
    }
    document_path(location)
}

fn document_path(location: &str) -> &str {
    let path = strip_query(after_authority(location));
    if is_app_document(path) { "/" } else { path }
}

fn strip_query(value: &str) -> &str {
    value.split_once('?').map_or(value, |(path, _)| path)
}

/// Path part of a URL; `/` when the URL names only a host.
fn after_authority(location: &str) -> &str {
    location.split_once("://").map_or(location, |(_, rest)| {
        rest.find('/').map_or("/", |index| &rest[index..])
    })
}

fn is_app_document(path: &str) -> bool {
    path.strip_suffix(APP_DOCUMENT)
        .is_some_and(|dir| dir.is_empty() || dir.ends_with('/'))
}
