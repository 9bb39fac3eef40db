//! Type event payloads
//!
//! The structural parser that reads source code lives outside this crate. It
//! reports each compound type it finishes as one JSON event; this module
//! defines that payload and turns it into a [`TypeRecord`].
//!
//! ```json
//! {
//!   "name": "Shape",
//!   "bases": ["Drawable"],
//!   "public": {
//!     "attributes": [{ "type": "int", "name": "x" }],
//!     "methods": [{ "name": "area", "kind": "ordinary", "abstract": true }]
//!   },
//!   "private": { "methods": [{ "name": "Shape", "kind": "constructor" }] }
//! }
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    Attribute, DiagramError, Method, MethodKind, TypeRecord, TypeRegistry, Visibility,
};

/// One attribute as reported by the parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEvent {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
}

/// One method as reported by the parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEvent {
    pub name: String,
    #[serde(default)]
    pub kind: MethodKind,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
}

/// Members declared under one visibility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberGroup {
    pub attributes: Vec<AttributeEvent>,
    pub methods: Vec<MethodEvent>,
}

/// Everything the parser reports about one compound type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeEvent {
    pub name: Option<String>,
    pub bases: Vec<String>,
    pub public: MemberGroup,
    pub protected: MemberGroup,
    pub private: MemberGroup,
}

impl TypeEvent {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    fn group(&self, visibility: Visibility) -> &MemberGroup {
        match visibility {
            Visibility::Public => &self.public,
            Visibility::Protected => &self.protected,
            Visibility::Private => &self.private,
        }
    }

    /// Convert the payload into a record
    ///
    /// Returns `Ok(None)` for events without a usable name. Abstract
    /// constructors are rejected; abstract destructors are accepted and
    /// recorded as concrete.
    pub fn into_record(self) -> Result<Option<TypeRecord>, DiagramError> {
        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Ok(None),
        };

        let mut builder = TypeRecord::builder(name.as_str());

        for visibility in Visibility::ALL {
            let group = self.group(visibility);

            for attribute in &group.attributes {
                builder = builder.attribute(Attribute::new(
                    attribute.type_name.trim(),
                    attribute.name.trim(),
                    visibility,
                ));
            }

            for method in &group.methods {
                let is_abstract = match method.kind {
                    MethodKind::Constructor if method.is_abstract => {
                        return Err(DiagramError::invalid_member(
                            name.as_str(),
                            method.name.as_str(),
                            "a constructor cannot be abstract",
                        ));
                    }
                    MethodKind::Destructor => false,
                    _ => method.is_abstract,
                };
                builder = builder.method(
                    Method::new(method.name.trim(), method.kind, visibility).with_abstract(is_abstract),
                );
            }
        }

        for base in &self.bases {
            let base = base.trim();
            if !base.is_empty() {
                builder = builder.base(base);
            }
        }

        Ok(Some(builder.build()))
    }
}

/// Receives type events as the parser discovers them
pub trait TypeListener {
    fn on_type(&mut self, event: TypeEvent) -> Result<()>;
}

impl TypeListener for TypeRegistry {
    fn on_type(&mut self, event: TypeEvent) -> Result<()> {
        match event.into_record()? {
            Some(record) => self.insert(record),
            None => {
                debug!("Dropped type event without a name");
                Ok(())
            }
        }
    }
}

/// Decode a JSON array of events, or a stream of whitespace separated events
pub fn decode_events(input: &str) -> Result<Vec<TypeEvent>, DiagramError> {
    if input.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(input)?);
    }

    serde_json::Deserializer::from_str(input)
        .into_iter::<TypeEvent>()
        .map(|event| event.map_err(DiagramError::from))
        .collect()
}
