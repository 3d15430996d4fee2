//! A typed wrapper for HTML output that has already been escaped.

use core::fmt;
use std::borrow::Cow;

/// A fragment of pre-escaped HTML.
///
/// Values of this type are only produced by the widget render operation, so
/// holding one is proof that any embedded user data has already been run
/// through the appropriate escaper. Embedding layers must emit the contents
/// verbatim rather than escaping them a second time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Markup(String);

impl Markup {
    /// Wraps markup whose contents are already escaped. Deliberately not
    /// public: arbitrary strings must not be markable as safe from outside
    /// the crate.
    pub(crate) fn new(html: String) -> Self {
        Self(html)
    }

    /// The markup as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps the markup into its backing string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Markup {
    fn into_response(self) -> axum::response::Response {
        use axum::response::IntoResponse as _;
        (
            [(
                axum::http::header::CONTENT_TYPE,
                "text/html; charset=utf-8",
            )],
            self.0,
        )
            .into_response()
    }
}

/// Escapes a string for interpolation into a double- or single-quoted
/// JavaScript string literal inside a `<script>` element.
///
/// `<` is emitted as a unicode escape so that `</script>` can never appear in
/// the output, and the JS line terminators U+2028/U+2029 are escaped because
/// string literals may not contain them raw.
pub(crate) fn escape_js(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', '"', '\'', '\n', '\r', '<', '\u{2028}', '\u{2029}']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003C"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
