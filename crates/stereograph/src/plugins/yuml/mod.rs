//! yUML output plugin
//!
//! Renders the classified model as yUML class diagram text.

mod renderer;

pub use renderer::{YumlRenderer, YUML_PREAMBLE};
