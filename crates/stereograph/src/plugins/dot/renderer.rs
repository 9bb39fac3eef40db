//! Graphviz DOT renderer
//!
//! Emits record-shaped nodes numbered in name order. Inheritance edges run
//! from base to derived with the hollow triangle on the base end; realization
//! edges are dashed.

use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, span, Level};

use crate::core::{
    display_type, ClassifiedType, DiagramError, DiagramModel, Edge, EdgeKind, Renderer, Visibility,
};

/// Fixed graph header
pub const DOT_HEADER: &str = "digraph hierarchy {\n\
size=\"5, 5\"\n\
node[shape=record,style=filled,fillcolor=gray95]\n\
edge[dir=\"both\", arrowtail=\"empty\", arrowhead=\"empty\", labeldistance=\"2.0\"]\n";

/// Fixed graph footer
pub const DOT_FOOTER: &str = "}\n";

/// DOT renderer
pub struct DotRenderer {
    preamble: bool,
}

impl DotRenderer {
    pub fn new() -> Self {
        Self { preamble: true }
    }

    /// Toggle the graph header and footer
    pub fn with_preamble(mut self, preamble: bool) -> Self {
        self.preamble = preamble;
        self
    }

    /// Escape record-label metacharacters
    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    fn render_node(&self, id: usize, ty: &ClassifiedType<'_>) -> String {
        let mut label = String::new();
        if let Some(stereotype) = ty.stereotype.label() {
            label.push_str(&format!("«{stereotype}»\\n"));
        }
        label.push_str(&Self::escape(ty.name()));
        label.push('|');

        for visibility in Visibility::ALL {
            for attribute in ty.record.attributes().iter().filter(|a| a.visibility == visibility) {
                label.push_str(&format!(
                    "{} {} : {}\\l",
                    visibility.to_char(),
                    Self::escape(&attribute.name),
                    Self::escape(display_type(&attribute.type_name))
                ));
            }
        }
        label.push('|');

        for visibility in Visibility::ALL {
            for method in ty
                .record
                .displayable_methods()
                .filter(|m| m.visibility == visibility)
            {
                label.push_str(&format!(
                    "{} {}()\\l",
                    visibility.to_char(),
                    Self::escape(&method.name)
                ));
            }
        }

        format!("{id}[label = \"{{{label}}}\"]")
    }

    fn render_edge(&self, ids: &HashMap<&str, usize>, edge: &Edge) -> Result<String> {
        let lookup = |name: &str| {
            ids.get(name).copied().ok_or_else(|| {
                DiagramError::render_error(format!("edge endpoint {name} has no node"))
            })
        };
        let from = lookup(&edge.from)?;
        let to = lookup(&edge.to)?;

        let attributes = match edge.kind {
            EdgeKind::Generalization => "arrowhead=\"none\"",
            EdgeKind::Realization => "arrowhead=\"none\", style=\"dashed\"",
        };
        Ok(format!("{from}->{to}[{attributes}]"))
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for DotRenderer {
    fn render(&self, model: &DiagramModel<'_>) -> Result<String> {
        let render_span = span!(Level::DEBUG, "render_dot", type_count = model.type_count());
        let _enter = render_span.enter();

        let mut output = String::new();
        if self.preamble {
            output.push_str(DOT_HEADER);
        }

        let mut ids = HashMap::with_capacity(model.type_count());
        for (id, ty) in model.types().iter().enumerate() {
            ids.insert(ty.name(), id);
            output.push_str(&self.render_node(id, ty));
            output.push('\n');
        }

        for edge in model.edges() {
            output.push_str(&self.render_edge(&ids, edge)?);
            output.push('\n');
        }

        if self.preamble {
            output.push_str(DOT_FOOTER);
        }

        debug!(output_len = output.len(), "DOT rendered");
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "dot"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "dot"
    }
}
