//! The CodeMirror form-field widget.

use crate::{
    attrs::{self, AttrMap},
    config::{ConfigValue, EditorConfig},
    markup::Markup,
    media::{Media, join_media_url},
};
use indexmap::IndexMap;
use sailfish::TemplateSimple;

/// All errors that may occur while rendering a widget.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A templating engine error.
    #[error(transparent)]
    Template(#[from] sailfish::RenderError),
}

/// The render contract a form-input widget fulfils for its embedding
/// framework: produce pre-escaped markup for one field, and declare the
/// static assets that markup depends on.
pub trait FormWidget {
    /// Renders the widget for the field `name` holding `value`. A missing
    /// value renders exactly like an empty one. `attrs` are extra HTML
    /// attributes for the fallback control.
    fn render(&self, name: &str, value: Option<&str>, attrs: &AttrMap) -> Result<Markup, Error>;

    /// The scripts and stylesheets the rendered markup requires.
    fn media(&self) -> Media;
}

/// The runtime scripts, as paths relative to the media base URL, in the load
/// order the runtime expects: the core first, then its utilities.
const EDITOR_JS: &[&str] = &[
    "lib/codemirror.js",
    "lib/util/searchcursor.js",
    "lib/util/match-highlighter.js",
    "lib/util/foldcode.js",
    "lib/util/loadmode.js",
    "lib/util/formatting.js",
    "lib/util/search.js",
    "lib/util/dialog.js",
    "lib/util/simple-hint.js",
    "lib/util/javascript-hint.js",
];

/// The runtime stylesheets. Themes live under `theme/` in the distribution
/// and are loaded by the consumer, not declared here.
const EDITOR_CSS: &[&str] = &[
    "lib/codemirror.css",
    "lib/util/dialog.css",
    "lib/util/simple-hint.css",
];

/// A form-field widget that renders a `<textarea>` fallback plus the script
/// fragment upgrading it into a CodeMirror editor.
///
/// Rendering is a pure function of the field binding and the immutable
/// configuration, so one widget instance may serve concurrent requests.
#[derive(Clone, Debug, Default)]
pub struct CodeMirrorEditor {
    config: EditorConfig,
}

impl CodeMirrorEditor {
    /// Creates a widget using the given configuration.
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    /// The widget's merged configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Merges the final attribute set for the fallback textarea. The `id` and
    /// `name` attributes always derive from the field name, since the
    /// bootstrap script locates the element by that identifier; caller
    /// overrides for those two keys are ignored.
    fn build_attrs(&self, name: &str, extra: &AttrMap) -> AttrMap {
        let mut merged = AttrMap::new();
        merged.insert("id".into(), format!("id_{name}"));
        merged.insert("name".into(), name.into());
        merged.insert("rows".into(), "10".into());
        merged.insert("cols".into(), "40".into());
        for (key, value) in extra {
            if key != "id" && key != "name" {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

impl FormWidget for CodeMirrorEditor {
    fn render(&self, name: &str, value: Option<&str>, attrs: &AttrMap) -> Result<Markup, Error> {
        log::trace!("Rendering CodeMirror widget for field '{name}'");

        let flat = attrs::flatten(&self.build_attrs(name, attrs));
        let html = EditorHtml {
            attrs: &flat,
            value: value.unwrap_or(""),
            name,
            media_url: self.config.media_url(),
            mode: self.config.mode(),
            options: self.config.options(),
        }
        .render_once()?;

        Ok(Markup::new(html))
    }

    fn media(&self) -> Media {
        let join = |rels: &[&str]| -> Vec<String> {
            rels.iter()
                .map(|rel| join_media_url(self.config.media_url(), rel))
                .collect()
        };

        Media {
            js: join(EDITOR_JS),
            css: join(EDITOR_CSS),
        }
    }
}

/// The widget markup: fallback textarea first, then the bootstrap fragment.
///
/// Widget parameters are substituted here, at template render time. The
/// `%N` token inside the mode loader URL belongs to the client runtime's own
/// templating stage and passes through as literal text.
#[derive(TemplateSimple)]
#[template(path = "editor.stpl")]
struct EditorHtml<'a> {
    /// The flattened, pre-escaped textarea attributes.
    attrs: &'a str,
    /// The current field value.
    value: &'a str,
    /// The form field name.
    name: &'a str,
    /// The base URL for the editor's static assets.
    media_url: &'a str,
    /// The syntax mode to initialise the editor with.
    mode: &'a str,
    /// Extra editor options, emitted as `setOption` calls.
    options: &'a IndexMap<String, ConfigValue>,
}

pub(crate) mod filter {
    use crate::markup::escape_js;
    use sailfish::{
        RenderError,
        runtime::{Buffer, Render},
    };

    /// Escapes a value for embedding in a quoted JavaScript string literal.
    pub fn js<T>(expr: &T) -> Js<'_, T>
    where
        T: Render + ?Sized,
    {
        Js(expr)
    }

    /// Emits an already-escaped value verbatim.
    pub fn raw<T>(expr: &T) -> Raw<'_, T>
    where
        T: Render + ?Sized,
    {
        Raw(expr)
    }

    /// A pass-through for values escaped before they reach the template.
    pub(crate) struct Raw<'a, T>(&'a T)
    where
        T: Render + ?Sized;
    impl<T> Render for Raw<'_, T>
    where
        T: Render + ?Sized,
    {
        fn render(&self, b: &mut Buffer) -> Result<(), RenderError> {
            self.0.render(b)
        }

        fn render_escaped(&self, b: &mut Buffer) -> Result<(), RenderError> {
            self.0.render(b)
        }
    }

    /// An escaper for quoted JavaScript string literals.
    pub(crate) struct Js<'a, T>(&'a T)
    where
        T: Render + ?Sized;
    impl<T> Render for Js<'_, T>
    where
        T: Render + ?Sized,
    {
        fn render(&self, b: &mut Buffer) -> Result<(), RenderError> {
            self.0.render(b)
        }

        fn render_escaped(&self, b: &mut Buffer) -> Result<(), RenderError> {
            let mut tmp = Buffer::new();
            self.0.render(&mut tmp)?;
            b.push_str(&escape_js(tmp.as_str()));
            Ok(())
        }
    }
}
