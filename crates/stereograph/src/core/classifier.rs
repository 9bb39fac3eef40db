//! Stereotype classification
//!
//! [`classify`] decides the stereotype a single record earns on its own
//! members. [`Stereotypes`] runs it once per registered type and then lets
//! concrete bases downgrade interfaces that inherit from them: a type cannot
//! be a pure contract while it inherits an implementation.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, span, trace, Level};

use super::{MethodKind, Stereotype, TypeRecord, TypeRegistry, Visibility};

/// Entry of the effective method set
#[derive(Debug, Clone, Copy)]
struct EffectiveEntry {
    visibility: Visibility,
    is_abstract: bool,
}

impl EffectiveEntry {
    fn is_pure_public(self) -> bool {
        self.is_abstract && self.visibility == Visibility::Public
    }
}

/// Classify a record from its own members, ignoring its bases
///
/// Rules in priority order:
/// 1. any constructor makes the type [`Stereotype::Plain`];
/// 2. so does any assignment operator with a body;
/// 3. otherwise the effective set (ordinary methods, pure assignment
///    operators, one concrete entry per attribute, plus one concrete entry
///    standing for any destructor) decides:
///    empty means [`Stereotype::Datatype`], all public and pure means
///    [`Stereotype::Interface`], anything else [`Stereotype::Datatype`].
pub fn classify(record: &TypeRecord) -> Stereotype {
    let mut effective = Vec::with_capacity(record.methods().len());
    let mut has_destructor = false;

    for method in record.methods() {
        match method.kind {
            MethodKind::Constructor => return Stereotype::Plain,
            MethodKind::AssignmentOperator if !method.is_abstract => return Stereotype::Plain,
            MethodKind::AssignmentOperator | MethodKind::Ordinary => {
                effective.push(EffectiveEntry {
                    visibility: method.visibility,
                    is_abstract: method.is_abstract,
                });
            }
            // Destructors count as concrete whatever their declared form.
            MethodKind::Destructor => has_destructor = true,
        }
    }

    // Data members are state, so they count as concrete entries too.
    effective.extend(record.attributes().iter().map(|attribute| EffectiveEntry {
        visibility: attribute.visibility,
        is_abstract: false,
    }));

    if has_destructor {
        effective.push(EffectiveEntry {
            visibility: Visibility::Public,
            is_abstract: false,
        });
    }

    if effective.is_empty() {
        return Stereotype::Datatype;
    }

    if effective.iter().all(|entry| entry.is_pure_public()) {
        Stereotype::Interface
    } else {
        Stereotype::Datatype
    }
}

/// Stereotype of every registered type, computed once per run
#[derive(Debug, Clone)]
pub struct Stereotypes<'r> {
    by_name: HashMap<&'r str, Stereotype>,
}

impl<'r> Stereotypes<'r> {
    /// Classify every type in the registry
    ///
    /// Each type starts from its intrinsic [`classify`] result. Every
    /// non-interface then demotes the interfaces deriving from it (directly
    /// or transitively) to [`Stereotype::Datatype`]. Bases missing from the
    /// registry are ignored. The propagation only ever turns interfaces into
    /// datatypes, so it terminates on cyclic hierarchies and its result does
    /// not depend on visiting order.
    pub fn classify(registry: &'r TypeRegistry) -> Self {
        let classify_span = span!(Level::DEBUG, "classify_types", type_count = registry.len());
        let _enter = classify_span.enter();

        let mut by_name: HashMap<&'r str, Stereotype> = HashMap::with_capacity(registry.len());
        let mut derived_by_base: HashMap<&'r str, Vec<&'r str>> = HashMap::new();

        for record in registry.all_sorted_by_name() {
            let stereotype = classify(record);
            trace!(name = record.name(), %stereotype, "Intrinsic stereotype");
            by_name.insert(record.name(), stereotype);

            for base_name in record.base_names() {
                if let Some(base) = registry.lookup(base_name) {
                    derived_by_base
                        .entry(base.name())
                        .or_default()
                        .push(record.name());
                }
            }
        }

        let mut pending: VecDeque<&'r str> = registry
            .all_sorted_by_name()
            .map(TypeRecord::name)
            .filter(|name| by_name.get(name) != Some(&Stereotype::Interface))
            .collect();

        let mut demoted = 0usize;
        while let Some(base) = pending.pop_front() {
            let Some(children) = derived_by_base.get(base) else {
                continue;
            };
            for &child in children {
                if let Some(stereotype) = by_name.get_mut(child) {
                    if *stereotype == Stereotype::Interface {
                        *stereotype = Stereotype::Datatype;
                        demoted += 1;
                        trace!(name = child, base, "Interface inherits an implementation");
                        pending.push_back(child);
                    }
                }
            }
        }

        debug!(type_count = by_name.len(), demoted, "Classification completed");
        Self { by_name }
    }

    /// Stereotype of a registered type
    pub fn get(&self, name: &str) -> Option<Stereotype> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Attribute, Method};

    fn assignment(visibility: Visibility, is_abstract: bool) -> Method {
        Method::new("operator=", MethodKind::AssignmentOperator, visibility).with_abstract(is_abstract)
    }

    fn constructor() -> Method {
        Method::new("foo", MethodKind::Constructor, Visibility::Public)
    }

    fn destructor() -> Method {
        Method::new("~foo", MethodKind::Destructor, Visibility::Public)
    }

    #[test]
    fn test_single_public_pure_method_is_interface() {
        let record = TypeRecord::builder("foo")
            .method(Method::pure("bar", Visibility::Public))
            .build();
        assert_eq!(classify(&record), Stereotype::Interface);
    }

    #[test]
    fn test_concrete_method_is_datatype() {
        let record = TypeRecord::builder("foo")
            .method(Method::ordinary("bar", Visibility::Public))
            .build();
        assert_eq!(classify(&record), Stereotype::Datatype);
    }

    #[test]
    fn test_non_public_pure_method_is_datatype() {
        for visibility in [Visibility::Private, Visibility::Protected] {
            let record = TypeRecord::builder("foo")
                .method(Method::pure("bar", visibility))
                .build();
            assert_eq!(classify(&record), Stereotype::Datatype, "{visibility}");
        }
    }

    #[test]
    fn test_mixed_pure_and_concrete_is_datatype() {
        let record = TypeRecord::builder("foo")
            .method(Method::pure("bar", Visibility::Public))
            .method(Method::ordinary("foobar", Visibility::Public))
            .build();
        assert_eq!(classify(&record), Stereotype::Datatype);
    }

    #[test]
    fn test_several_public_pure_methods_are_interface() {
        let record = TypeRecord::builder("foo")
            .method(Method::pure("bar", Visibility::Public))
            .method(Method::pure("foobar", Visibility::Public))
            .build();
        assert_eq!(classify(&record), Stereotype::Interface);
    }

    #[test]
    fn test_constructor_overrides_interface() {
        let record = TypeRecord::builder("foo")
            .method(constructor())
            .method(Method::pure("bar", Visibility::Public))
            .build();
        assert_eq!(classify(&record), Stereotype::Plain);
    }

    #[test]
    fn test_constructor_beats_everything() {
        let record = TypeRecord::builder("foo")
            .method(destructor())
            .method(assignment(Visibility::Public, true))
            .method(Method::new("foo", MethodKind::Constructor, Visibility::Private))
            .build();
        assert_eq!(classify(&record), Stereotype::Plain);
    }

    #[test]
    fn test_destructor_downgrades_interface() {
        let record = TypeRecord::builder("foo")
            .method(destructor())
            .method(Method::pure("bar", Visibility::Public))
            .build();
        assert_eq!(classify(&record), Stereotype::Datatype);
    }

    #[test]
    fn test_abstract_destructor_still_counts_as_concrete() {
        let record = TypeRecord::builder("foo")
            .method(destructor().with_abstract(true))
            .method(Method::pure("bar", Visibility::Public))
            .build();
        assert_eq!(classify(&record), Stereotype::Datatype);
    }

    #[test]
    fn test_lone_destructor_is_datatype() {
        let record = TypeRecord::builder("foo").method(destructor()).build();
        assert_eq!(classify(&record), Stereotype::Datatype);
    }

    #[test]
    fn test_concrete_assignment_is_plain_at_any_visibility() {
        for visibility in Visibility::ALL {
            let record = TypeRecord::builder("foo")
                .method(Method::pure("bar", Visibility::Public))
                .method(assignment(visibility, false))
                .build();
            assert_eq!(classify(&record), Stereotype::Plain, "{visibility}");
        }
    }

    #[test]
    fn test_public_pure_assignment_keeps_interface() {
        let record = TypeRecord::builder("foo")
            .method(Method::pure("bar", Visibility::Public))
            .method(assignment(Visibility::Public, true))
            .build();
        assert_eq!(classify(&record), Stereotype::Interface);
    }

    #[test]
    fn test_private_pure_assignment_is_datatype() {
        let record = TypeRecord::builder("foo")
            .method(Method::pure("bar", Visibility::Public))
            .method(assignment(Visibility::Private, true))
            .build();
        assert_eq!(classify(&record), Stereotype::Datatype);
    }

    #[test]
    fn test_no_methods_is_datatype() {
        let empty = TypeRecord::builder("foo").build();
        assert_eq!(classify(&empty), Stereotype::Datatype);

        let data_only = TypeRecord::builder("point")
            .attribute(Attribute::new("int", "x", Visibility::Public))
            .build();
        assert_eq!(classify(&data_only), Stereotype::Datatype);
    }

    #[test]
    fn test_any_attribute_disqualifies_interface() {
        for visibility in Visibility::ALL {
            let record = TypeRecord::builder("foo")
                .attribute(Attribute::new("int", "f", visibility))
                .method(Method::pure("bar", Visibility::Public))
                .build();
            assert_eq!(classify(&record), Stereotype::Datatype, "{visibility}");
        }
    }

    fn registry(records: Vec<TypeRecord>) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        for record in records {
            registry.insert(record).unwrap();
        }
        registry
    }

    fn interface(name: &str) -> crate::core::TypeRecordBuilder {
        TypeRecord::builder(name).method(Method::pure("m", Visibility::Public))
    }

    fn datatype(name: &str) -> crate::core::TypeRecordBuilder {
        TypeRecord::builder(name).method(Method::ordinary("m", Visibility::Public))
    }

    #[test]
    fn test_interface_chain_stays_interface() {
        let registry = registry(vec![
            interface("object_one").build(),
            interface("object_two").base("object_one").build(),
            interface("foo").base("object_two").build(),
        ]);
        let stereotypes = Stereotypes::classify(&registry);

        assert_eq!(stereotypes.len(), 3);
        for name in ["object_one", "object_two", "foo"] {
            assert_eq!(stereotypes.get(name), Some(Stereotype::Interface), "{name}");
        }
    }

    #[test]
    fn test_concrete_base_demotes_whole_descent() {
        let registry = registry(vec![
            datatype("object_one").build(),
            interface("object_two").base("object_one").build(),
            interface("foo").base("object_two").build(),
        ]);
        let stereotypes = Stereotypes::classify(&registry);

        assert_eq!(stereotypes.get("object_one"), Some(Stereotype::Datatype));
        assert_eq!(stereotypes.get("object_two"), Some(Stereotype::Datatype));
        assert_eq!(stereotypes.get("foo"), Some(Stereotype::Datatype));
    }

    #[test]
    fn test_plain_base_demotes_interface() {
        let registry = registry(vec![
            interface("Base").method(constructor()).build(),
            interface("Derived").base("Base").build(),
        ]);
        let stereotypes = Stereotypes::classify(&registry);

        assert_eq!(stereotypes.get("Base"), Some(Stereotype::Plain));
        assert_eq!(stereotypes.get("Derived"), Some(Stereotype::Datatype));
    }

    #[test]
    fn test_bases_never_promote_or_replace_plain() {
        let registry = registry(vec![
            datatype("Base").build(),
            interface("Derived").method(constructor()).base("Base").build(),
            datatype("Other").base("Base").build(),
        ]);
        let stereotypes = Stereotypes::classify(&registry);

        assert_eq!(stereotypes.get("Derived"), Some(Stereotype::Plain));
        assert_eq!(stereotypes.get("Other"), Some(Stereotype::Datatype));
    }

    #[test]
    fn test_unknown_base_is_ignored() {
        let registry = registry(vec![interface("foo").base("object").build()]);
        let stereotypes = Stereotypes::classify(&registry);
        assert_eq!(stereotypes.get("foo"), Some(Stereotype::Interface));
        assert_eq!(stereotypes.get("object"), None);
    }

    #[test]
    fn test_diamond_with_one_concrete_side() {
        let registry = registry(vec![
            interface("object_one").build(),
            interface("object_two").base("object_one").build(),
            datatype("object_three").base("object_one").build(),
            interface("foo").base("object_two").base("object_three").build(),
        ]);
        let stereotypes = Stereotypes::classify(&registry);

        assert_eq!(stereotypes.get("object_one"), Some(Stereotype::Interface));
        assert_eq!(stereotypes.get("object_two"), Some(Stereotype::Interface));
        assert_eq!(stereotypes.get("object_three"), Some(Stereotype::Datatype));
        assert_eq!(stereotypes.get("foo"), Some(Stereotype::Datatype));
    }

    #[test]
    fn test_cycle_of_interfaces_terminates() {
        let registry = registry(vec![
            interface("A").base("B").build(),
            interface("B").base("A").build(),
        ]);
        let stereotypes = Stereotypes::classify(&registry);
        assert_eq!(stereotypes.get("A"), Some(Stereotype::Interface));
        assert_eq!(stereotypes.get("B"), Some(Stereotype::Interface));
    }

    #[test]
    fn test_cycle_fed_by_concrete_base_is_demoted() {
        let registry = registry(vec![
            interface("A").base("B").build(),
            interface("B").base("A").base("C").build(),
            datatype("C").build(),
        ]);
        let stereotypes = Stereotypes::classify(&registry);
        assert_eq!(stereotypes.get("A"), Some(Stereotype::Datatype));
        assert_eq!(stereotypes.get("B"), Some(Stereotype::Datatype));
    }
}
