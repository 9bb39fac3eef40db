//! Stereograph - Stereotype classification for type hierarchies
//!
//! Reads type events (name, members, base list) and produces a class diagram
//! in which every type is tagged as an interface, a datatype or a plain type,
//! and every inheritance edge is drawn as a realization or a generalization.
//!
//! # Quick Start
//!
//! ```rust
//! use stereograph::render;
//!
//! let input = r#"{"name": "Shape", "public": {"methods": [{"name": "area", "abstract": true}]}}"#;
//! let yuml = render(input).unwrap();
//! assert!(yuml.ends_with("[«Interface»;Shape||+ area();]\n"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use stereograph::prelude::*;
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .insert(
//!         TypeRecord::builder("Shape")
//!             .method(Method::pure("area", Visibility::Public))
//!             .build(),
//!     )
//!     .unwrap();
//! registry
//!     .insert(TypeRecord::builder("Square").base("Shape").build())
//!     .unwrap();
//!
//! let model = DiagramModel::build(&registry);
//! assert_eq!(model.stereotype("Shape"), Some(Stereotype::Interface));
//! assert_eq!(model.edges()[0].kind, EdgeKind::Realization);
//!
//! let dot = DotRenderer::new().render(&model).unwrap();
//! assert!(dot.starts_with("digraph hierarchy {"));
//! ```

pub mod core;
pub mod plugins;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Attribute, DiagramError, DiagramModel, DuplicatePolicy, Edge, EdgeKind, Method,
        MethodKind, OutputFormat, Parser, RenderConfig, Renderer, Stereotype, Stereotypes,
        TypeListener, TypeRecord, TypeRegistry, Visibility,
    };
    pub use crate::plugins::{DotRenderer, JsonEventParser, Orchestrator, YumlRenderer};
}

/// Render JSON type events to a yUML class diagram
///
/// Uses the default configuration: yUML output with its directive preamble,
/// rejecting duplicate type names.
///
/// # Example
/// ```rust
/// use stereograph::render;
///
/// let yuml = render(r#"[{"name": "Base"}, {"name": "Derived", "bases": ["Base"]}]"#).unwrap();
/// assert!(yuml.contains("[«Datatype»;Base]^-[«Datatype»;Derived]"));
/// ```
pub fn render(input: &str) -> anyhow::Result<String> {
    render_with_config(input, RenderConfig::default())
}

/// Render JSON type events with a specific configuration
///
/// # Example
/// ```rust
/// use stereograph::{render_with_config, OutputFormat, RenderConfig};
///
/// let config = RenderConfig::new(OutputFormat::Dot).with_preamble(false);
/// let dot = render_with_config(r#"{"name": "Base"}"#, config).unwrap();
/// assert_eq!(dot, "0[label = \"{«Datatype»\\nBase||}\"]\n");
/// ```
pub fn render_with_config(input: &str, config: RenderConfig) -> anyhow::Result<String> {
    use crate::plugins::orchestrator::Orchestrator;

    Orchestrator::with_config(config).process(input)
}

/// Parse JSON type events into a registry without rendering
///
/// Useful when you need to inspect the ingested records or build the model
/// yourself.
///
/// # Example
/// ```rust
/// use stereograph::parse;
///
/// let registry = parse(r#"{"name": "b"} {"name": "a"}"#).unwrap();
/// assert_eq!(registry.len(), 2);
/// assert!(registry.contains("a"));
/// ```
pub fn parse(input: &str) -> anyhow::Result<TypeRegistry> {
    use crate::core::Parser as _;
    use crate::plugins::json::JsonEventParser;

    let parser = JsonEventParser::new();
    let mut registry = TypeRegistry::new();
    parser.parse(input, &mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_has_preamble() {
        let output = render(r#"{"name": "foo"}"#).unwrap();
        assert_eq!(
            output,
            "// {type:class}\n// {direction:topDown}\n// {generate:true}\n[«Datatype»;foo||]\n"
        );
    }

    #[test]
    fn test_render_with_config_dot() {
        let config = RenderConfig::new(OutputFormat::Dot);
        let output = render_with_config(r#"{"name": "foo"}"#, config).unwrap();
        assert!(output.starts_with("digraph hierarchy {"));
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_parse_returns_registry() {
        let registry = parse(r#"[{"name": "a", "bases": ["b"]}]"#).unwrap();
        let record = registry.lookup("a").unwrap();
        assert_eq!(record.base_names(), ["b".to_string()]);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse("[{").is_err());
    }
}
