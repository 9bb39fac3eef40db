//! Pipeline orchestrator
//!
//! Runs the whole transform for one input:
//! Parser → Registry → Classifier → Relationship Builder → Renderer

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info, span, Level};

use crate::core::{
    DiagramModel, EdgeKind, OutputFormat, Parser, RenderConfig, Renderer, Stereotype, TypeRegistry,
};
use crate::plugins::dot::DotRenderer;
use crate::plugins::json::JsonEventParser;
use crate::plugins::yuml::YumlRenderer;

/// Stereotype of one type, as listed by [`Orchestrator::classify`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedName {
    pub name: String,
    pub stereotype: Stereotype,
}

/// Counts describing an ingested model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub types: usize,
    pub interfaces: usize,
    pub datatypes: usize,
    pub plain: usize,
    pub edges: usize,
    pub realizations: usize,
    pub generalizations: usize,
}

/// Plugin orchestrator that coordinates the entire pipeline
pub struct Orchestrator {
    config: RenderConfig,
    parser: Box<dyn Parser>,
}

impl Orchestrator {
    /// Create an orchestrator with the default configuration
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create an orchestrator with a specific configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            parser: Box::new(JsonEventParser::new()),
        }
    }

    /// Replace the input parser
    pub fn with_parser(mut self, parser: Box<dyn Parser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    fn renderer(&self) -> Box<dyn Renderer> {
        match self.config.format {
            OutputFormat::Yuml => Box::new(YumlRenderer::new().with_preamble(self.config.preamble)),
            OutputFormat::Dot => Box::new(DotRenderer::new().with_preamble(self.config.preamble)),
        }
    }

    /// Build the registry for one input
    pub fn ingest(&self, input: &str) -> Result<TypeRegistry> {
        let ingest_span = span!(Level::DEBUG, "pipeline_ingest", parser = self.parser.name());
        let _enter = ingest_span.enter();

        let mut registry = TypeRegistry::with_policy(self.config.duplicates);
        self.parser.parse(input, &mut registry)?;
        debug!(type_count = registry.len(), "Registry populated");
        Ok(registry)
    }

    /// Process input through the complete pipeline
    pub fn process(&self, input: &str) -> Result<String> {
        let process_span = span!(
            Level::INFO,
            "process_types",
            input_len = input.len(),
            format = %self.config.format
        );
        let _enter = process_span.enter();

        info!("Starting diagram generation pipeline");
        let registry = self.ingest(input)?;
        let output = self.render_registry(&registry)?;
        info!(output_len = output.len(), "Pipeline completed successfully");
        Ok(output)
    }

    /// Classify, relate and render an already populated registry
    pub fn render_registry(&self, registry: &TypeRegistry) -> Result<String> {
        let model = DiagramModel::build(registry);

        let render_span = span!(Level::DEBUG, "pipeline_render");
        let _enter = render_span.enter();
        self.renderer().render(&model)
    }

    /// Stereotype of every type, in name order
    pub fn classify(&self, input: &str) -> Result<Vec<ClassifiedName>> {
        let registry = self.ingest(input)?;
        let model = DiagramModel::build(&registry);
        Ok(model
            .types()
            .iter()
            .map(|ty| ClassifiedName {
                name: ty.name().to_string(),
                stereotype: ty.stereotype,
            })
            .collect())
    }

    /// Ingest and count without rendering
    pub fn summarize(&self, input: &str) -> Result<ModelSummary> {
        let registry = self.ingest(input)?;
        let model = DiagramModel::build(&registry);

        let mut summary = ModelSummary {
            types: model.type_count(),
            edges: model.edge_count(),
            ..ModelSummary::default()
        };
        for ty in model.types() {
            match ty.stereotype {
                Stereotype::Interface => summary.interfaces += 1,
                Stereotype::Datatype => summary.datatypes += 1,
                Stereotype::Plain => summary.plain += 1,
            }
        }
        for edge in model.edges() {
            match edge.kind {
                EdgeKind::Realization => summary.realizations += 1,
                EdgeKind::Generalization => summary.generalizations += 1,
            }
        }
        Ok(summary)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
