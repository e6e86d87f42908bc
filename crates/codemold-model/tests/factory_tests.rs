use super::*;
use crate::def::ObjectKind;

#[test]
fn test_array_of_rejects_void() {
    let model = CodeModel::new();
    let err = model.array_of(TypeId::VOID).unwrap_err();
    assert!(matches!(
        err,
        StructuralError::IllegalTypePlacement {
            position: TypePosition::ArrayComponent,
            kind: TypeKind::Void,
            ..
        }
    ));

    let ints = model.array_of(TypeId::INT).unwrap();
    assert_eq!(model.kind(ints), TypeKind::Array);
    assert_eq!(model.array_component(ints).unwrap(), TypeId::INT);
    let matrix = model.array_of(ints).unwrap();
    assert_eq!(model.array_component(matrix).unwrap(), ints);
}

#[test]
fn test_wildcard_bounds_must_be_reference_types() {
    let model = CodeModel::new();
    assert!(model.wildcard_extends(TypeId::INT).is_err());
    assert!(model.wildcard_super(TypeId::VOID).is_err());
    assert!(model.wildcard_extends(model.wildcard()).is_err());

    let upper = model.wildcard_extends(model.string_type()).unwrap();
    assert_eq!(
        model.wildcard_bound(upper).unwrap(),
        WildcardBound::Extends(model.string_type())
    );
    assert_eq!(model.wildcard_bound(model.wildcard()).unwrap(), WildcardBound::Unbounded);
}

#[test]
fn test_intersection_dedups_and_collapses() {
    let model = CodeModel::new();
    let a = model.interface("A").unwrap().erasure();
    let b = model.interface("B").unwrap().erasure();

    let both = model.intersection(&[a, b, a]).unwrap();
    assert_eq!(model.kind(both), TypeKind::Intersection);
    assert_eq!(model.intersection_components(both).unwrap().as_slice(), &[a, b]);
    assert_eq!(model.to_list_of_intersected_types(both), vec![a, b]);

    assert_eq!(model.intersection(&[a]).unwrap(), a);
    assert_eq!(model.intersection(&[a, a]).unwrap(), a);
    assert_eq!(model.to_list_of_intersected_types(a), vec![a]);
}

#[test]
fn test_intersection_rejects_empty_and_non_object() {
    let model = CodeModel::new();
    let a = model.interface("A").unwrap().erasure();

    assert_eq!(model.intersection(&[]), Err(StructuralError::EmptyIntersection));
    let err = model.intersection(&[a, TypeId::INT]).unwrap_err();
    assert!(matches!(
        err,
        StructuralError::IllegalTypePlacement {
            position: TypePosition::IntersectionComponent,
            kind: TypeKind::Primitive,
            ..
        }
    ));
    assert!(model.intersection(&[model.variable("T")]).is_err());
}

#[test]
fn test_contains_wildcards() {
    let model = CodeModel::new();
    let mut boxed = model.class("Box").unwrap();
    boxed.type_parameter("T").unwrap();
    let mut inner = boxed.inner_class(ObjectKind::Class, "Inner").unwrap();
    inner.type_parameter("U").unwrap();

    let box_string = model.narrow(boxed.erasure(), &[model.string_type()]).unwrap();
    let box_any = model.narrow(boxed.erasure(), &[model.wildcard()]).unwrap();
    assert!(!model.contains_wildcards(box_string));
    assert!(model.contains_wildcards(box_any));

    let inner_in_any = model.object_raw_type(inner.id(), Some(box_any)).unwrap();
    let inner_string = model.narrow(inner_in_any, &[model.string_type()]).unwrap();
    assert!(model.contains_wildcards(inner_string));

    assert!(!model.contains_wildcards(TypeId::INT));
    assert!(!model.contains_wildcards(model.wildcard()));
}

#[test]
fn test_kind_specific_accessors_fail_on_wrong_kind() {
    let model = CodeModel::new();
    let t = model.variable("T");

    assert_eq!(model.variable_name(t).unwrap(), model.intern("T"));
    assert_eq!(model.as_primitive(TypeId::BOOLEAN).unwrap(), PrimitiveKind::Boolean);
    assert_eq!(
        model.array_component(t),
        Err(KindMismatch {
            expected: "array",
            found: TypeKind::TypeVariable,
        })
    );
    assert!(model.as_object_type(TypeId::INT).is_err());
    assert!(model.as_executable_type(model.object_type()).is_err());
    assert!(model.variable_name(TypeId::VOID).is_err());
    assert!(model.intersection_components(model.object_type()).is_err());
    assert!(model.as_primitive(TypeId::VOID).is_err());
}

#[test]
fn test_void_and_primitive_factories() {
    let model = CodeModel::new();
    assert_eq!(model.void_type(), TypeId::VOID);
    assert_eq!(model.primitive(PrimitiveKind::Float), TypeId::FLOAT);
    assert_eq!(model.variable("T"), model.variable("T"));
    assert_ne!(model.variable("T"), model.variable("U"));
}
