//! A CodeMirror rich-editor form widget.
//!
//! Renders a plain, safely escaped `<textarea>` fallback for a form field
//! together with the script fragment that upgrades it into a CodeMirror
//! editing surface, and declares the static assets the browser must load for
//! the upgrade to work. If the assets fail to load, the textarea remains a
//! usable plain input.
//!
//! <https://codemirror.net/doc/manual.html#config>
//!
//! The generated editor binds the following keys:
//!
//! * Ctrl-F / Cmd-F: start searching
//! * Ctrl-G / Cmd-G: find next
//! * Shift-Ctrl-G / Shift-Cmd-G: find previous
//! * Shift-Ctrl-F / Cmd-Option-F: replace
//! * Shift-Ctrl-R / Shift-Cmd-Option-F: replace all
//! * Ctrl-Q: fold the block at the cursor
//! * Ctrl-H: show a dialog listing these bindings
//! * Ctrl-Space: trigger autocompletion

pub mod attrs;
pub mod config;
pub mod markup;
pub mod media;
pub mod widget;

pub use attrs::AttrMap;
pub use config::{ConfigBuilder, ConfigValue, EditorConfig};
pub use markup::Markup;
pub use media::Media;
pub use widget::{CodeMirrorEditor, Error, FormWidget};
