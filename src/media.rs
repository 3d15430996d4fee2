//! The static asset manifest declared by a widget.

/// The scripts and stylesheets a widget's client runtime requires, as URLs
/// relative to wherever the consumer serves them from.
///
/// Script order matters: the runtime core must load before its utilities, so
/// consumers should emit `<script>` elements in the order given here. The
/// manifest is recomputed from the widget configuration on every call and is
/// never cached, so it always reflects the current base URL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Media {
    /// Script URLs, in load order.
    pub js: Vec<String>,
    /// Stylesheet URLs.
    pub css: Vec<String>,
}

/// Joins a relative asset path onto a base URL, inserting exactly one `/` at
/// the seam. The base is not validated; a malformed base yields a
/// best-effort, possibly invalid, URL.
pub(crate) fn join_media_url(base: &str, rel: &str) -> String {
    match (base.ends_with('/'), rel.starts_with('/')) {
        (true, true) => format!("{base}{}", &rel[1..]),
        (true, false) | (false, true) => format!("{base}{rel}"),
        (false, false) => format!("{base}/{rel}"),
    }
}
