//! HTML attribute flattening for form controls.

use html_escape::encode_double_quoted_attribute;
use indexmap::IndexMap;
use std::fmt::Write as _;

/// An ordered set of HTML attributes. Insertion order is preserved so that
/// rendered markup is deterministic.
pub type AttrMap = IndexMap<String, String>;

/// Flattens an attribute map into the ` key="value"` form used inside an
/// opening tag. Values are escaped for a double-quoted attribute context;
/// attribute names are trusted, like everything else the caller controls.
pub(crate) fn flatten(attrs: &AttrMap) -> String {
    let mut out = String::new();
    for (key, value) in attrs {
        // Infallible when writing to a String.
        let _ = write!(out, " {key}=\"{}\"", encode_double_quoted_attribute(value));
    }
    out
}
