use super::*;

#[test]
fn test_well_known_definitions() {
    let model = CodeModel::new();
    let known = model.well_known();

    assert_eq!(model.qualified_name(known.object), "java.lang.Object");
    assert_eq!(model.qualified_name(known.runtime_exception), "java.lang.RuntimeException");
    assert_eq!(model.find_top_level(known.java_lang, "String"), Some(known.string));
    assert!(model.definition(known.string).is_final());
    assert!(!model.definition(known.throwable).is_final());
    assert_eq!(model.kind(model.object_type()), TypeKind::Object);
}

#[test]
fn test_well_known_exception_hierarchy() {
    let model = CodeModel::new();
    let known = model.well_known();

    let exception = model.definition(known.exception);
    assert_eq!(
        exception.declared_superclass(),
        Some(model.definition(known.throwable).erasure())
    );
    assert!(model.is_subclass_of(known.runtime_exception, known.throwable));
    assert!(!model.is_subclass_of(known.throwable, known.exception));
}

#[test]
fn test_object_has_no_superclass() {
    let model = CodeModel::new();
    let known = model.well_known();
    assert_eq!(model.definition(known.object).extends_class(), None);
    assert_eq!(
        model.definition(known.string).extends_class(),
        Some(model.object_type())
    );
}

#[test]
fn test_packages_are_interned() {
    let model = CodeModel::new();
    let first = model.package("com.example");
    let second = model.package("com.example");
    let other = model.package("com.other");

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(&*model.package_name(first), "com.example");
    assert_eq!(model.package("java.lang"), model.well_known().java_lang);
}

#[test]
fn test_top_level_names_unique_per_package() {
    let model = CodeModel::new();
    let app = model.package("app");
    let lib = model.package("lib");

    let first = model.top_level(app, ObjectKind::Class, "Widget").unwrap();
    let err = model.top_level(app, ObjectKind::Interface, "Widget").err();
    assert_eq!(
        err,
        Some(StructuralError::DuplicateName {
            owner: "app".to_string(),
            name: "Widget".to_string(),
        })
    );
    let other = model.top_level(lib, ObjectKind::Class, "Widget").unwrap();

    assert_ne!(first.id(), other.id());
    assert_eq!(model.find_top_level(app, "Widget"), Some(first.id()));
    assert_eq!(model.find_top_level(lib, "Widget"), Some(other.id()));
}

#[test]
fn test_qualified_names() {
    let model = CodeModel::new();
    let package = model.package("com.example");
    let mut outer = model.top_level(package, ObjectKind::Class, "Outer").unwrap();
    let inner = outer
        .static_nested_class(ObjectKind::Class, "Inner")
        .unwrap();
    let plain = model.class("Plain").unwrap();

    assert_eq!(model.qualified_name(inner.id()), "com.example.Outer.Inner");
    assert_eq!(model.qualified_name(plain.id()), "Plain");
}

#[test]
fn test_default_package_from_config() {
    let model = CodeModel::with_config(ModelConfig::default().with_default_package("app"));
    let main = model.class("Main").unwrap();
    assert_eq!(main.definition().qualified_name(), "app.Main");
    assert_eq!(model.find_top_level(model.package("app"), "Main"), Some(main.id()));
}

#[test]
fn test_check_placement() {
    let model = CodeModel::new();
    assert!(model.check_placement(TypeId::INT, TypePosition::Field).is_ok());
    let err = model
        .check_placement(TypeId::VOID, TypePosition::Field)
        .unwrap_err();
    assert_eq!(
        err,
        StructuralError::IllegalTypePlacement {
            position: TypePosition::Field,
            kind: TypeKind::Void,
            ty: "void".to_string(),
        }
    );
}
