//! DOT output plugin
//!
//! Renders the classified model as a Graphviz digraph.

mod renderer;

pub use renderer::{DotRenderer, DOT_FOOTER, DOT_HEADER};
