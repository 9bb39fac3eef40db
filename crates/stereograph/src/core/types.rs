//! Core type definitions for stereotype classification
//!
//! This module contains the structural model handed over by the upstream
//! parser (visibility, method kinds, attributes, methods, type records) and
//! the derived values computed from it (stereotypes, relationship edges).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Member visibility
///
/// Declaration order doubles as display order: public, protected, private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,    // +
    Protected, // #
    Private,   // -
}

impl Visibility {
    /// All visibilities in display order
    pub const ALL: [Visibility; 3] = [Visibility::Public, Visibility::Protected, Visibility::Private];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Visibility::Public),
            '#' => Some(Visibility::Protected),
            '-' => Some(Visibility::Private),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Protected => '#',
            Visibility::Private => '-',
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        };
        write!(f, "{}", name)
    }
}

/// Distinguishes ordinary methods from special members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    Destructor,
    AssignmentOperator,
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MethodKind::Ordinary => "ordinary",
            MethodKind::Constructor => "constructor",
            MethodKind::Destructor => "destructor",
            MethodKind::AssignmentOperator => "assignment_operator",
        };
        write!(f, "{}", name)
    }
}

/// A member method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub kind: MethodKind,
    /// Declared without a body and marked pure
    pub is_abstract: bool,
    pub visibility: Visibility,
}

impl Method {
    pub fn new(name: impl Into<String>, kind: MethodKind, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            kind,
            is_abstract: false,
            visibility,
        }
    }

    /// An ordinary method with a body
    pub fn ordinary(name: impl Into<String>, visibility: Visibility) -> Self {
        Self::new(name, MethodKind::Ordinary, visibility)
    }

    /// A pure ordinary method
    pub fn pure(name: impl Into<String>, visibility: Visibility) -> Self {
        Self::ordinary(name, visibility).with_abstract(true)
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Only ordinary methods appear in a rendered box.
    pub fn is_displayable(&self) -> bool {
        self.kind == MethodKind::Ordinary
    }
}

/// A member attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub type_name: String,
    pub name: String,
    pub visibility: Visibility,
}

impl Attribute {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            visibility,
        }
    }
}

/// One compound type as discovered by the upstream parser
///
/// Attributes and methods are kept grouped by visibility in display order;
/// within a group, declaration order is preserved. Records are never mutated
/// once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    name: String,
    attributes: Vec<Attribute>,
    methods: Vec<Method>,
    base_names: Vec<String>,
}

impl TypeRecord {
    /// Start building a record with the given name
    pub fn builder(name: impl Into<String>) -> TypeRecordBuilder {
        TypeRecordBuilder {
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
            base_names: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Direct bases in declaration order
    pub fn base_names(&self) -> &[String] {
        &self.base_names
    }

    /// Methods rendered as box members
    pub fn displayable_methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter().filter(|m| m.is_displayable())
    }
}

/// Builder for [`TypeRecord`]
#[derive(Debug, Clone)]
pub struct TypeRecordBuilder {
    name: String,
    attributes: Vec<Attribute>,
    methods: Vec<Method>,
    base_names: Vec<String>,
}

impl TypeRecordBuilder {
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn base(mut self, name: impl Into<String>) -> Self {
        self.base_names.push(name.into());
        self
    }

    pub fn build(mut self) -> TypeRecord {
        // Stable sorts: grouped by visibility, declaration order inside a group.
        self.attributes.sort_by_key(|a| a.visibility);
        self.methods.sort_by_key(|m| m.visibility);
        TypeRecord {
            name: self.name,
            attributes: self.attributes,
            methods: self.methods,
            base_names: self.base_names,
        }
    }
}

/// Classification tag attached to a type for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stereotype {
    /// Entire effective method set is public and abstract
    Interface,
    /// Concrete type
    Datatype,
    /// Construction or assignment semantics make stereotyping inapplicable
    Plain,
}

impl Stereotype {
    /// Text shown inside the guillemets, if any
    pub fn label(self) -> Option<&'static str> {
        match self {
            Stereotype::Interface => Some("Interface"),
            Stereotype::Datatype => Some("Datatype"),
            Stereotype::Plain => None,
        }
    }
}

impl fmt::Display for Stereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stereotype::Interface => "interface",
            Stereotype::Datatype => "datatype",
            Stereotype::Plain => "plain",
        };
        write!(f, "{}", name)
    }
}

/// Kind of an inheritance edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Inheriting from an interface
    Realization,
    /// Inheriting from a concrete type
    Generalization,
}

impl EdgeKind {
    /// Edge kind implied by the stereotype of the base type
    pub fn for_base(base: Stereotype) -> Self {
        match base {
            Stereotype::Interface => EdgeKind::Realization,
            Stereotype::Datatype | Stereotype::Plain => EdgeKind::Generalization,
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Realization => write!(f, "realization"),
            EdgeKind::Generalization => write!(f, "generalization"),
        }
    }
}

/// Directed inheritance edge from a base to a derived type, by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
        }
    }
}

/// Output notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OutputFormat {
    /// yUML class diagram text
    #[default]
    Yuml,
    /// Graphviz DOT with record-shaped nodes
    Dot,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yuml => write!(f, "yuml"),
            OutputFormat::Dot => write!(f, "dot"),
        }
    }
}

/// What the registry does when a name is inserted twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DuplicatePolicy {
    /// Fail the insert and keep the first record
    #[default]
    Reject,
    /// Replace the earlier record
    LastWriteWins,
}

/// Rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Emit the fixed document preamble (and DOT footer)
    pub preamble: bool,
    pub duplicates: DuplicatePolicy,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_preamble(mut self, preamble: bool) -> Self {
        self.preamble = preamble;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            preamble: true,
            duplicates: DuplicatePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_conversion() {
        assert_eq!(Visibility::from_char('+'), Some(Visibility::Public));
        assert_eq!(Visibility::from_char('#'), Some(Visibility::Protected));
        assert_eq!(Visibility::from_char('-'), Some(Visibility::Private));
        assert_eq!(Visibility::from_char('~'), None);

        assert_eq!(Visibility::Public.to_char(), '+');
        assert_eq!(Visibility::Protected.to_char(), '#');
        assert_eq!(Visibility::Private.to_char(), '-');
    }

    #[test]
    fn test_visibility_display_order() {
        let mut all = vec![Visibility::Private, Visibility::Public, Visibility::Protected];
        all.sort();
        assert_eq!(all, Visibility::ALL.to_vec());
    }

    #[test]
    fn test_builder_groups_by_visibility_keeping_declaration_order() {
        let record = TypeRecord::builder("Widget")
            .method(Method::ordinary("z_private", Visibility::Private))
            .method(Method::ordinary("b_public", Visibility::Public))
            .method(Method::ordinary("m_protected", Visibility::Protected))
            .method(Method::ordinary("a_public", Visibility::Public))
            .attribute(Attribute::new("int", "y", Visibility::Private))
            .attribute(Attribute::new("int", "x", Visibility::Private))
            .attribute(Attribute::new("int", "w", Visibility::Public))
            .build();

        let methods: Vec<_> = record.methods().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, vec!["b_public", "a_public", "m_protected", "z_private"]);

        let attributes: Vec<_> = record.attributes().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(attributes, vec!["w", "y", "x"]);
    }

    #[test]
    fn test_base_names_keep_declaration_order() {
        let record = TypeRecord::builder("D").base("Zeta").base("Alpha").build();
        assert_eq!(record.base_names(), ["Zeta".to_string(), "Alpha".to_string()]);
    }

    #[test]
    fn test_displayable_methods_are_ordinary_only() {
        let record = TypeRecord::builder("Foo")
            .method(Method::new("Foo", MethodKind::Constructor, Visibility::Public))
            .method(Method::new("~Foo", MethodKind::Destructor, Visibility::Public))
            .method(Method::new("operator=", MethodKind::AssignmentOperator, Visibility::Public))
            .method(Method::pure("bar", Visibility::Public))
            .build();

        let shown: Vec<_> = record.displayable_methods().map(|m| m.name.as_str()).collect();
        assert_eq!(shown, vec!["bar"]);
    }

    #[test]
    fn test_edge_kind_for_base() {
        assert_eq!(EdgeKind::for_base(Stereotype::Interface), EdgeKind::Realization);
        assert_eq!(EdgeKind::for_base(Stereotype::Datatype), EdgeKind::Generalization);
        assert_eq!(EdgeKind::for_base(Stereotype::Plain), EdgeKind::Generalization);
    }

    #[test]
    fn test_stereotype_label() {
        assert_eq!(Stereotype::Interface.label(), Some("Interface"));
        assert_eq!(Stereotype::Datatype.label(), Some("Datatype"));
        assert_eq!(Stereotype::Plain.label(), None);
    }

    #[test]
    fn test_render_config_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.format, OutputFormat::Yuml);
        assert!(config.preamble);
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);

        let dot = RenderConfig::new(OutputFormat::Dot)
            .with_preamble(false)
            .with_duplicates(DuplicatePolicy::LastWriteWins);
        assert_eq!(dot.format, OutputFormat::Dot);
        assert!(!dot.preamble);
        assert_eq!(dot.duplicates, DuplicatePolicy::LastWriteWins);
    }
}
