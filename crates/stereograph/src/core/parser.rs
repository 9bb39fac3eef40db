//! Core parser trait for type event input
//!
//! This trait defines the interface for decoding the upstream parser's
//! output into records stored in a [`TypeRegistry`].

use anyhow::Result;

use super::TypeRegistry;

/// Core trait for input parsers
///
/// # Example
/// ```
/// use stereograph::core::{Parser, TypeRegistry};
/// use stereograph::plugins::json::JsonEventParser;
///
/// let parser = JsonEventParser::new();
/// let mut registry = TypeRegistry::new();
/// parser.parse(r#"{"name": "Shape"}"#, &mut registry).unwrap();
/// assert_eq!(registry.len(), 1);
/// ```
pub trait Parser: Send + Sync {
    /// Parse input into the provided registry
    fn parse(&self, input: &str, registry: &mut TypeRegistry) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input looks like something this parser reads
    fn can_parse(&self, input: &str) -> bool;
}
