//! Classified diagram model
//!
//! The read-only view a renderer consumes: every registered type with its
//! stereotype, in name order, followed by the ordered edge list.

use tracing::{debug, span, Level};

use super::{Edge, RelationshipBuilder, Stereotype, Stereotypes, TypeRecord, TypeRegistry};

/// A registered type together with its stereotype
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedType<'r> {
    pub record: &'r TypeRecord,
    pub stereotype: Stereotype,
}

impl<'r> ClassifiedType<'r> {
    pub fn name(&self) -> &'r str {
        self.record.name()
    }
}

/// Types and edges ready for serialization
#[derive(Debug, Clone)]
pub struct DiagramModel<'r> {
    types: Vec<ClassifiedType<'r>>,
    edges: Vec<Edge>,
    stereotypes: Stereotypes<'r>,
}

impl<'r> DiagramModel<'r> {
    /// Classify the registry and derive its relationships
    pub fn build(registry: &'r TypeRegistry) -> Self {
        let model_span = span!(Level::DEBUG, "build_model", type_count = registry.len());
        let _enter = model_span.enter();

        let stereotypes = Stereotypes::classify(registry);
        let edges = RelationshipBuilder::new(registry, &stereotypes).build();

        let types = registry
            .all_sorted_by_name()
            .filter_map(|record| {
                stereotypes.get(record.name()).map(|stereotype| ClassifiedType { record, stereotype })
            })
            .collect::<Vec<_>>();

        debug!(type_count = types.len(), edge_count = edges.len(), "Model built");
        Self {
            types,
            edges,
            stereotypes,
        }
    }

    /// Types in ascending name order
    pub fn types(&self) -> &[ClassifiedType<'r>] {
        &self.types
    }

    /// Edges ordered by derived name, then base name
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn stereotype(&self, name: &str) -> Option<Stereotype> {
        self.stereotypes.get(name)
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
