use super::*;
use crate::ModelConfig;
use crate::def::ObjectKind;

#[test]
fn test_builder_layers_on_base() {
    let model = CodeModel::new();
    let t = model.intern("T");
    let u = model.intern("U");

    let mut base = TypeEnvironment::builder();
    base.put(t, TypeId::INT).put(u, TypeId::CHAR);
    let base = base.build();

    let mut layered = TypeEnvironment::builder_from(&base);
    layered.put(t, model.string_type());
    let layered = layered.build();

    assert_eq!(layered.get(t), Some(model.string_type()));
    assert_eq!(layered.get(u), Some(TypeId::CHAR));
    assert_eq!(base.get(t), Some(TypeId::INT));
    assert_eq!(layered.len(), 2);
}

#[test]
fn test_substitute_variable_and_leave_unbound() {
    let model = CodeModel::new();
    let t = model.variable("T");
    let m = model.variable("M");

    let mut env = TypeEnvironment::builder();
    env.put(model.intern("T"), model.string_type());
    let env = env.build();

    assert_eq!(model.substitute(t, &env), model.string_type());
    assert_eq!(model.substitute(m, &env), m);
    assert_eq!(model.substitute(TypeId::INT, &env), TypeId::INT);
}

#[test]
fn test_substitute_structural_components() {
    let model = CodeModel::new();
    let mut boxed = model.class("Box").unwrap();
    let t = boxed.type_parameter("T").unwrap();

    let array = model.array_of(t).unwrap();
    let bounded = model.wildcard_extends(t).unwrap();
    let box_of_wildcard = model.narrow(boxed.erasure(), &[bounded]).unwrap();

    let mut env = TypeEnvironment::builder();
    env.put(model.intern("T"), model.string_type());
    let env = env.build();

    let string = model.string_type();
    assert_eq!(model.substitute(array, &env), model.array_of(string).unwrap());
    let expected = model
        .narrow(boxed.erasure(), &[model.wildcard_extends(string).unwrap()])
        .unwrap();
    assert_eq!(model.substitute(box_of_wildcard, &env), expected);
}

#[test]
fn test_substitution_is_identity_on_closed_types() {
    let model = CodeModel::new();
    let mut list = model.class("List").unwrap();
    list.type_parameter("E").unwrap();
    let closed = model.narrow(list.erasure(), &[model.string_type()]).unwrap();
    let closed_array = model.array_of(closed).unwrap();

    let mut env = TypeEnvironment::builder();
    env.put(model.intern("E"), model.object_type());
    let env = env.build();

    assert_eq!(model.substitute(closed, &env), closed);
    assert_eq!(model.substitute(closed_array, &env), closed_array);
    assert_eq!(model.substitute(closed, &TypeEnvironment::new()), closed);
}

#[test]
fn test_definition_environment_binds_own_parameters() {
    let model = CodeModel::new();
    let mut pair = model.class("Pair").unwrap();
    pair.type_parameter("A").unwrap();
    pair.type_parameter("B").unwrap();
    let item = model.class("Item").unwrap();

    let narrowed = model
        .narrow(pair.erasure(), &[model.string_type(), item.erasure()])
        .unwrap();
    let env = model.definition_environment(narrowed).unwrap();
    assert_eq!(env.get(model.intern("A")), Some(model.string_type()));
    assert_eq!(env.get(model.intern("B")), Some(item.erasure()));

    let raw_env = model.definition_environment(pair.erasure()).unwrap();
    assert!(raw_env.is_empty());
}

#[test]
fn test_capture_chaining_resolves_outer_variable() {
    let model = CodeModel::new();
    let mut outer = model.class("Outer").unwrap();
    let x = outer.type_parameter("X").unwrap();
    let mut inner = outer.inner_class(ObjectKind::Class, "Inner").unwrap();
    inner.type_parameter("Y").unwrap();
    let item = model.class("Item").unwrap();

    let outer_string = model.narrow(outer.erasure(), &[model.string_type()]).unwrap();
    let inner_raw = inner.definition().raw_type(Some(outer_string)).unwrap();
    let inner_item = model.narrow(inner_raw, &[item.erasure()]).unwrap();

    let env = model.definition_environment(inner_item).unwrap();
    assert_eq!(model.substitute(x, &env), model.string_type());
    assert_eq!(
        env.get(model.intern("Y")),
        Some(item.erasure())
    );
}

#[test]
fn test_inner_binding_shadows_outer() {
    let model = CodeModel::new();
    let mut outer = model.class("Outer").unwrap();
    let t = outer.type_parameter("T").unwrap();
    let mut inner = outer.inner_class(ObjectKind::Class, "Inner").unwrap();
    inner.type_parameter("T").unwrap();
    let item = model.class("Item").unwrap();

    let outer_string = model.narrow(outer.erasure(), &[model.string_type()]).unwrap();
    let inner_raw = model.object_raw_type(inner.id(), Some(outer_string)).unwrap();
    let inner_item = model.narrow(inner_raw, &[item.erasure()]).unwrap();

    let env = model.definition_environment(inner_item).unwrap();
    assert_eq!(model.substitute(t, &env), item.erasure());
}

#[test]
fn test_definition_environment_is_memoized() {
    let model = CodeModel::new();
    let mut boxed = model.class("Box").unwrap();
    boxed.type_parameter("T").unwrap();
    let narrowed = model.narrow(boxed.erasure(), &[model.string_type()]).unwrap();

    let first = model.definition_environment(narrowed).unwrap();
    let second = model.definition_environment(narrowed).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn test_definition_environment_of_non_generic_kind_fails() {
    let model = CodeModel::new();
    let err = model.definition_environment(TypeId::INT).unwrap_err();
    assert_eq!(err.found, crate::TypeKind::Primitive);
}

#[test]
fn test_substitution_stops_at_configured_depth() {
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::WARN)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let config = ModelConfig {
        max_substitution_depth: 1,
        ..ModelConfig::default()
    };
    let model = CodeModel::with_config(config);
    let mut boxed = model.class("Box").unwrap();
    let t = boxed.type_parameter("T").unwrap();
    let box_t = model.narrow(boxed.erasure(), &[t]).unwrap();
    let box_box_t = model.narrow(boxed.erasure(), &[box_t]).unwrap();

    let mut env = TypeEnvironment::builder();
    env.put(model.intern("T"), model.string_type());
    let env = env.build();

    assert_eq!(model.substitute(box_box_t, &env), box_box_t);

    let unlimited = CodeModel::new();
    let mut boxed = unlimited.class("Box").unwrap();
    let t = boxed.type_parameter("T").unwrap();
    let box_t = unlimited.narrow(boxed.erasure(), &[t]).unwrap();
    let box_box_t = unlimited.narrow(boxed.erasure(), &[box_t]).unwrap();
    let mut env = TypeEnvironment::builder();
    env.put(unlimited.intern("T"), unlimited.string_type());
    let env = env.build();

    let box_string = unlimited
        .narrow(boxed.erasure(), &[unlimited.string_type()])
        .unwrap();
    let expected = unlimited.narrow(boxed.erasure(), &[box_string]).unwrap();
    assert_eq!(unlimited.substitute(box_box_t, &env), expected);
}
