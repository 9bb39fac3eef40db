//! Relationship building
//!
//! Derives the inheritance edges of the diagram from the base lists stored in
//! the registry. Edges point from base to derived type and are keyed by name,
//! so diamonds and cycles need no special handling.

use tracing::{debug, span, trace, Level};

use super::{Edge, EdgeKind, Stereotypes, TypeRegistry};

/// Builds the ordered edge list of a registry
pub struct RelationshipBuilder<'a, 'r> {
    registry: &'r TypeRegistry,
    stereotypes: &'a Stereotypes<'r>,
}

impl<'a, 'r> RelationshipBuilder<'a, 'r> {
    pub fn new(registry: &'r TypeRegistry, stereotypes: &'a Stereotypes<'r>) -> Self {
        Self {
            registry,
            stereotypes,
        }
    }

    /// Every resolvable base edge
    ///
    /// Ordered by derived name, then by base name. Bases missing from the
    /// registry produce no edge; a base repeated in one list produces one.
    pub fn build(&self) -> Vec<Edge> {
        let build_span = span!(Level::DEBUG, "build_relationships");
        let _enter = build_span.enter();

        let mut edges = Vec::new();
        let mut skipped = 0usize;

        for derived in self.registry.all_sorted_by_name() {
            let mut bases: Vec<&str> = derived.base_names().iter().map(String::as_str).collect();
            bases.sort_unstable();
            bases.dedup();

            for base_name in bases {
                let Some(base) = self.registry.lookup(base_name) else {
                    trace!(derived = derived.name(), base = base_name, "Skipping unknown base");
                    skipped += 1;
                    continue;
                };
                let Some(stereotype) = self.stereotypes.get(base.name()) else {
                    continue;
                };

                let edge = Edge::new(base.name(), derived.name(), EdgeKind::for_base(stereotype));
                trace!(from = %edge.from, to = %edge.to, kind = %edge.kind, "Built edge");
                edges.push(edge);
            }
        }

        debug!(edge_count = edges.len(), skipped, "Relationships built");
        edges
    }
}
