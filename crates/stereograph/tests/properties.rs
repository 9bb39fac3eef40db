//! Property tests for ordering, determinism and edge kinds

use proptest::prelude::*;
use stereograph::prelude::*;

/// (name index, base indices, pure method?, constructor?)
type Shape = (usize, Vec<usize>, bool, bool);

fn shapes_strategy() -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(
        (
            0usize..12,
            prop::collection::vec(0usize..14, 0..4),
            any::<bool>(),
            prop::bool::weighted(0.1),
        ),
        0..12,
    )
    .prop_map(|mut shapes| {
        // one record per name
        shapes.sort_by_key(|shape| shape.0);
        shapes.dedup_by_key(|shape| shape.0);
        shapes
    })
}

fn record(shape: &Shape) -> TypeRecord {
    let (name, bases, pure, constructor) = shape;
    let mut builder = TypeRecord::builder(format!("t{name:02}")).method(if *pure {
        Method::pure("run", Visibility::Public)
    } else {
        Method::ordinary("run", Visibility::Public)
    });
    if *constructor {
        builder = builder.method(Method::new(format!("t{name:02}"), MethodKind::Constructor, Visibility::Public));
    }
    for base in bases {
        builder = builder.base(format!("t{base:02}"));
    }
    builder.build()
}

fn registry<'a>(shapes: impl Iterator<Item = &'a Shape>) -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    for shape in shapes {
        registry.insert(record(shape)).unwrap();
    }
    registry
}

fn check_insertion_order_is_irrelevant(shapes: &[Shape]) -> Result<(), TestCaseError> {
    let forward = registry(shapes.iter());
    let backward = registry(shapes.iter().rev());

    let renderer = YumlRenderer::new();
    let a = renderer.render(&DiagramModel::build(&forward)).unwrap();
    let b = renderer.render(&DiagramModel::build(&backward)).unwrap();
    prop_assert_eq!(a, b);
    Ok(())
}

fn check_edges_are_sorted_and_resolved(shapes: &[Shape]) -> Result<(), TestCaseError> {
    let registry = registry(shapes.iter());
    let model = DiagramModel::build(&registry);

    let keys: Vec<(&str, &str)> = model
        .edges()
        .iter()
        .map(|edge| (edge.to.as_str(), edge.from.as_str()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    sorted.dedup();
    prop_assert_eq!(&keys, &sorted);

    for edge in model.edges() {
        prop_assert!(registry.contains(&edge.from));
        prop_assert!(registry.contains(&edge.to));
        let base = model.stereotype(&edge.from).unwrap();
        prop_assert_eq!(edge.kind, EdgeKind::for_base(base));
    }
    Ok(())
}

fn check_interfaces_only_extend_interfaces(shapes: &[Shape]) -> Result<(), TestCaseError> {
    let registry = registry(shapes.iter());
    let model = DiagramModel::build(&registry);

    for edge in model.edges() {
        if model.stereotype(&edge.to) == Some(Stereotype::Interface) {
            prop_assert_eq!(model.stereotype(&edge.from), Some(Stereotype::Interface));
        }
    }
    Ok(())
}

fn check_one_box_per_type(shapes: &[Shape]) -> Result<(), TestCaseError> {
    let registry = registry(shapes.iter());
    let model = DiagramModel::build(&registry);
    let output = YumlRenderer::new()
        .with_preamble(false)
        .render(&model)
        .unwrap();

    let boxes = output.lines().filter(|line| !line.contains("]^-")).count();
    prop_assert_eq!(boxes, registry.len());
    prop_assert_eq!(output.lines().count(), registry.len() + model.edge_count());
    Ok(())
}

proptest! {
    #[test]
    fn insertion_order_is_irrelevant(shapes in shapes_strategy()) {
        check_insertion_order_is_irrelevant(&shapes)?;
    }

    #[test]
    fn edges_are_sorted_and_resolved(shapes in shapes_strategy()) {
        check_edges_are_sorted_and_resolved(&shapes)?;
    }

    #[test]
    fn interfaces_only_extend_interfaces(shapes in shapes_strategy()) {
        check_interfaces_only_extend_interfaces(&shapes)?;
    }

    #[test]
    fn one_box_per_type(shapes in shapes_strategy()) {
        check_one_box_per_type(&shapes)?;
    }
}
