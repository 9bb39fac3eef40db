//! Core renderer trait for diagram output
//!
//! This trait defines the interface for serializing a classified model
//! into a diagram notation (yUML, DOT).

use anyhow::Result;

use super::DiagramModel;

/// Core trait for diagram renderers
///
/// # Example
/// ```
/// use stereograph::core::{DiagramModel, Renderer, TypeRegistry};
/// use stereograph::plugins::yuml::YumlRenderer;
///
/// let registry = TypeRegistry::new();
/// let model = DiagramModel::build(&registry);
/// let output = YumlRenderer::new().render(&model).unwrap();
/// assert!(output.starts_with("// {type:class}"));
/// ```
pub trait Renderer: Send + Sync {
    /// Render the classified model
    fn render(&self, model: &DiagramModel<'_>) -> Result<String>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the output format
    fn format(&self) -> &'static str;
}
