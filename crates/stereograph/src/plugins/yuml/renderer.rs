//! yUML class diagram renderer
//!
//! One line per box, then one line per edge:
//!
//! ```text
//! [«Interface»;Shape||+ area();]
//! [«Datatype»;Square|- side:number;|+ area();]
//! [«Interface»;Shape]^-.-[«Datatype»;Square]
//! ```

use anyhow::Result;
use tracing::{debug, span, Level};

use crate::core::{display_type, ClassifiedType, DiagramModel, Edge, EdgeKind, Renderer, Stereotype, Visibility};

/// Fixed directive block emitted before the boxes
pub const YUML_PREAMBLE: &str = "// {type:class}\n// {direction:topDown}\n// {generate:true}\n";

/// yUML renderer
pub struct YumlRenderer {
    preamble: bool,
}

impl YumlRenderer {
    pub fn new() -> Self {
        Self { preamble: true }
    }

    /// Toggle the directive block
    pub fn with_preamble(mut self, preamble: bool) -> Self {
        self.preamble = preamble;
        self
    }

    /// `«Interface»;`, `«Datatype»;` or nothing for plain types
    fn marker(stereotype: Option<Stereotype>) -> String {
        stereotype
            .and_then(Stereotype::label)
            .map(|label| format!("«{label}»;"))
            .unwrap_or_default()
    }

    fn render_box(&self, ty: &ClassifiedType<'_>) -> String {
        let mut line = format!("[{}{}|", Self::marker(Some(ty.stereotype)), ty.name());

        for visibility in Visibility::ALL {
            for attribute in ty.record.attributes().iter().filter(|a| a.visibility == visibility) {
                line.push_str(&format!(
                    "{} {}:{};",
                    visibility.to_char(),
                    attribute.name,
                    display_type(&attribute.type_name)
                ));
            }
        }
        line.push('|');

        for visibility in Visibility::ALL {
            for method in ty
                .record
                .displayable_methods()
                .filter(|m| m.visibility == visibility)
            {
                line.push_str(&format!("{} {}();", visibility.to_char(), method.name));
            }
        }
        line.push(']');
        line
    }

    fn render_edge(&self, model: &DiagramModel<'_>, edge: &Edge) -> String {
        let connector = match edge.kind {
            EdgeKind::Generalization => "^-",
            EdgeKind::Realization => "^-.-",
        };
        format!(
            "[{}{}]{}[{}{}]",
            Self::marker(model.stereotype(&edge.from)),
            edge.from,
            connector,
            Self::marker(model.stereotype(&edge.to)),
            edge.to
        )
    }
}

impl Default for YumlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for YumlRenderer {
    fn render(&self, model: &DiagramModel<'_>) -> Result<String> {
        let render_span = span!(Level::DEBUG, "render_yuml", type_count = model.type_count());
        let _enter = render_span.enter();

        let mut output = String::new();
        if self.preamble {
            output.push_str(YUML_PREAMBLE);
        }

        for ty in model.types() {
            output.push_str(&self.render_box(ty));
            output.push('\n');
        }

        for edge in model.edges() {
            output.push_str(&self.render_edge(model, edge));
            output.push('\n');
        }

        debug!(output_len = output.len(), "yUML rendered");
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "yuml"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "yuml"
    }
}
