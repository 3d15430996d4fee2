//! Editor widget configuration.
//!
//! A [`EditorConfig`] is built once, by merging caller overrides over the
//! built-in defaults, and is immutable afterwards. Widgets never share
//! configuration storage, so overrides applied to one widget cannot leak into
//! another.

use crate::markup::escape_js;
use indexmap::IndexMap;

/// The default base URL under which the CodeMirror distribution is served.
pub const DEFAULT_MEDIA_URL: &str = "/static/codemirror/";

/// The default syntax mode.
pub const DEFAULT_MODE: &str = "htmlmixed";

/// A value for an editor option, rendered into the bootstrap script as the
/// corresponding JavaScript literal.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A boolean literal.
    Bool(bool),
    /// An integer literal.
    Int(i64),
    /// A string literal.
    Str(String),
}

impl ConfigValue {
    /// Formats the value as a JavaScript literal. Strings are quoted and
    /// escaped so they cannot break out of the literal or the enclosing
    /// `<script>` element.
    pub(crate) fn to_js(&self) -> String {
        match self {
            ConfigValue::Bool(b) => b.to_string(),
            ConfigValue::Int(i) => i.to_string(),
            ConfigValue::Str(s) => format!("\"{}\"", escape_js(s)),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

/// The merged configuration for a rich-editor widget.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditorConfig {
    media_url: String,
    mode: String,
    options: IndexMap<String, ConfigValue>,
}

impl EditorConfig {
    /// Starts building a configuration from the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The base URL for the editor's static assets.
    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    /// The syntax mode the editor is initialised with.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Extra editor options forwarded to the bootstrap script.
    pub fn options(&self) -> &IndexMap<String, ConfigValue> {
        &self.options
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig::builder().build()
    }
}

/// Builder for [`EditorConfig`]. Later settings win over earlier ones and
/// over the defaults; building cannot fail.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    media_url: Option<String>,
    mode: Option<String>,
    options: IndexMap<String, ConfigValue>,
}

impl ConfigBuilder {
    /// Overrides the base URL for static assets.
    pub fn media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = Some(url.into());
        self
    }

    /// Overrides the syntax mode.
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Sets an extra editor option, replacing any earlier value for the same
    /// key. The option is passed through to the client runtime verbatim; no
    /// validation is performed here.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Merges the overrides over the defaults into an immutable
    /// configuration.
    pub fn build(self) -> EditorConfig {
        EditorConfig {
            media_url: self.media_url.unwrap_or_else(|| DEFAULT_MEDIA_URL.into()),
            mode: self.mode.unwrap_or_else(|| DEFAULT_MODE.into()),
            options: self.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.media_url(), DEFAULT_MEDIA_URL);
        assert_eq!(config.mode(), DEFAULT_MODE);
        assert!(config.options().is_empty());
    }

    #[test]
    fn overrides_win_over_defaults() {
        let config = EditorConfig::builder()
            .media_url("/assets/cm/")
            .mode("python")
            .option("lineNumbers", false)
            .option("indentUnit", 2i64)
            .option("indentUnit", 8i64)
            .build();
        assert_eq!(config.media_url(), "/assets/cm/");
        assert_eq!(config.mode(), "python");
        assert_eq!(config.options()["lineNumbers"], ConfigValue::Bool(false));
        // Later settings replace earlier ones for the same key.
        assert_eq!(config.options()["indentUnit"], ConfigValue::Int(8));
    }

    #[test]
    fn builders_do_not_share_state() {
        let a = EditorConfig::builder().mode("css").build();
        let b = EditorConfig::builder().build();
        assert_eq!(a.mode(), "css");
        assert_eq!(b.mode(), DEFAULT_MODE);
    }

    #[test]
    fn values_format_as_js_literals() {
        assert_eq!(ConfigValue::Bool(true).to_js(), "true");
        assert_eq!(ConfigValue::Int(-4).to_js(), "-4");
        assert_eq!(ConfigValue::from("a\"b").to_js(), r#""a\"b""#);
    }

    #[test]
    fn values_deserialize_untagged() {
        let parsed: IndexMap<String, ConfigValue> =
            serde_json::from_str(r#"{"lineWrapping": true, "undoDepth": 200, "theme": "night"}"#)
                .unwrap();
        assert_eq!(parsed["lineWrapping"], ConfigValue::Bool(true));
        assert_eq!(parsed["undoDepth"], ConfigValue::Int(200));
        assert_eq!(parsed["theme"], ConfigValue::from("night"));
    }
}
