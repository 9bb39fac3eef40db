//! JSON input plugin
//!
//! Decodes type events emitted by the external structural parser.

mod parser;

pub use parser::JsonEventParser;
