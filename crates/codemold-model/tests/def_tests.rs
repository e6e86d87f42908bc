use super::*;
use crate::types::TypeList;
use crate::TypeInterner;
use codemold_common::Interner;

fn register_class(store: &DefinitionStore, types: &TypeInterner, name: Atom) -> DefId {
    let id = store.next_object_id();
    let erasure = types.object(id, TypeList::new(), None, false);
    store.register_object(ObjectDefinitionInfo::new(
        ObjectKind::Class,
        name,
        Residence::TopLevel {
            package: PackageId(0),
        },
        erasure,
    ))
}

#[test]
fn test_register_object_hands_out_next_id() {
    let names = Interner::new();
    let types = TypeInterner::new();
    let store = DefinitionStore::new();

    assert_eq!(store.next_object_id(), DefId(0));
    let first = register_class(&store, &types, names.intern("First"));
    let second = register_class(&store, &types, names.intern("Second"));
    assert_eq!(first, DefId(0));
    assert_eq!(second, DefId(1));
    assert_eq!(store.object_count(), 2);
    assert_eq!(store.object(second).name, names.intern("Second"));
}

#[test]
fn test_object_mut_is_visible_through_object() {
    let names = Interner::new();
    let types = TypeInterner::new();
    let store = DefinitionStore::new();
    let id = register_class(&store, &types, names.intern("Mutable"));

    store.object_mut(id).is_final = true;
    assert!(store.object(id).is_final);
}

#[test]
fn test_type_params_per_owner() {
    let names = Interner::new();
    let types = TypeInterner::new();
    let store = DefinitionStore::new();
    let id = register_class(&store, &types, names.intern("Pair"));
    let owner = GenericOwner::Object(id);

    store.push_type_param(
        owner,
        TypeParameter {
            name: names.intern("A"),
            bounds: SmallVec::new(),
        },
    );
    store.push_type_param(
        owner,
        TypeParameter {
            name: names.intern("B"),
            bounds: SmallVec::new(),
        },
    );

    let params = store.type_params(owner);
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, names.intern("A"));
    assert_eq!(params[1].name, names.intern("B"));
}

#[test]
fn test_executables_and_fields_have_own_arenas() {
    let names = Interner::new();
    let types = TypeInterner::new();
    let store = DefinitionStore::new();
    let parent = register_class(&store, &types, names.intern("Owner"));

    let exec = store.register_executable(ExecutableInfo {
        kind: ExecutableKind::Constructor,
        nesting: Nesting::new(parent, false),
        type_params: Vec::new(),
        params: Vec::new(),
        throws: Vec::new(),
        param_scope: ScopeId(0),
        body_scope: ScopeId(1),
    });
    let field = store.register_field(FieldInfo {
        name: names.intern("count"),
        type_id: TypeId::INT,
        is_final: false,
        nesting: Nesting::new(parent, true),
    });

    assert_eq!(exec, ExecId(0));
    assert_eq!(field, FieldId(0));
    assert_eq!(store.executable_count(), 1);
    assert_eq!(store.field_count(), 1);
    assert!(store.field(field).nesting.is_static);
    assert_eq!(store.executable(exec).kind, ExecutableKind::Constructor);
}

#[test]
fn test_object_kind_rules() {
    assert!(ObjectKind::Class.is_class());
    assert!(!ObjectKind::Enum.is_class());
    assert!(ObjectKind::Interface.is_interface());
    assert!(!ObjectKind::Class.requires_static_nesting());
    assert!(ObjectKind::Enum.requires_static_nesting());
    assert!(ObjectKind::Annotation.requires_static_nesting());
    assert_eq!(ObjectKind::Annotation.to_string(), "@interface");
}
