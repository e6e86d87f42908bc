use super::*;
use crate::def::ObjectKind;

#[test]
fn test_display_primitive_and_arrays() {
    let model = CodeModel::new();
    let ints = model.array_of(TypeId::INT).unwrap();
    assert_eq!(model.display_type(TypeId::VOID), "void");
    assert_eq!(model.display_type(ints), "int[]");
    assert_eq!(model.display_type(model.array_of(ints).unwrap()), "int[][]");
}

#[test]
fn test_display_parameterized_types() {
    let model = CodeModel::new();
    let util = model.package("java.util");
    let mut map = model.top_level(util, ObjectKind::Interface, "Map").unwrap();
    map.type_parameter("K").unwrap();
    let v = map.type_parameter("V").unwrap();

    let upper = model.wildcard_extends(v).unwrap();
    let narrowed = model.narrow(map.erasure(), &[model.string_type(), upper]).unwrap();
    assert_eq!(
        model.display_type(narrowed),
        "java.util.Map<java.lang.String, ? extends V>"
    );

    let lower = model.wildcard_super(model.object_type()).unwrap();
    let narrowed = model.narrow(map.erasure(), &[model.wildcard(), lower]).unwrap();
    assert_eq!(
        model.display_type(narrowed),
        "java.util.Map<?, ? super java.lang.Object>"
    );
}

#[test]
fn test_display_captured_enclosing_type() {
    let model = CodeModel::new();
    let mut outer = model.class("Outer").unwrap();
    outer.type_parameter("X").unwrap();
    let inner = outer.inner_class(ObjectKind::Class, "Inner").unwrap();

    let outer_string = model.narrow(outer.erasure(), &[model.string_type()]).unwrap();
    let inner_raw = model.object_raw_type(inner.id(), Some(outer_string)).unwrap();
    assert_eq!(model.display_type(inner_raw), "Outer<java.lang.String>.Inner");
    assert_eq!(model.display_type(inner.erasure()), "Outer.Inner");
}

#[test]
fn test_display_intersection() {
    let model = CodeModel::new();
    let a = model.interface("A").unwrap().erasure();
    let b = model.interface("B").unwrap().erasure();
    let both = model.intersection(&[a, b]).unwrap();
    assert_eq!(model.display_type(both), "A & B");
}

#[test]
fn test_display_executables() {
    let model = CodeModel::new();
    let mut boxed = model.class("Box").unwrap();
    boxed.type_parameter("T").unwrap();
    let get = boxed.method("get");
    let mut create = boxed.static_method("create");
    create.add_parameter(TypeId::INT, "size").unwrap();
    let ctor = boxed.add_constructor().unwrap();

    let box_string = model.narrow(boxed.erasure(), &[model.string_type()]).unwrap();
    let get_type = model.raw_type(get.id(), Some(box_string)).unwrap();
    let create_type = model.raw_type(create.id(), None).unwrap();

    assert_eq!(model.display_type(get_type), "Box<java.lang.String>.get()");
    assert_eq!(model.display_type(create_type), "Box.create(int)");
    assert_eq!(model.executable_name(ctor.id()), "Box.<init>");
    let ctor_type = model.raw_type(ctor.id(), Some(box_string)).unwrap();
    assert_eq!(model.display_type(ctor_type), "Box<java.lang.String>.<init>()");
}
