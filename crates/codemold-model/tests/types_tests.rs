use super::*;

#[test]
fn test_intrinsic_ids_follow_primitive_order() {
    for (index, kind) in PrimitiveKind::ALL.iter().enumerate() {
        assert_eq!(kind.type_id(), TypeId(index as u32 + 1));
        assert!(kind.type_id().is_intrinsic());
    }
    assert!(TypeId::VOID.is_intrinsic());
    assert!(!TypeId(TypeId::FIRST_USER).is_intrinsic());
}

#[test]
fn test_void_is_only_a_method_result() {
    assert!(TypeKind::Void.can_be_method_result());
    assert!(!TypeKind::Void.can_be_declared_variable_type());
    assert!(!TypeKind::Void.can_be_type_argument());
    assert!(!TypeKind::Void.can_be_type_variable_bound());
}

#[test]
fn test_primitives_are_not_type_arguments() {
    assert!(!TypeKind::Primitive.can_be_type_argument());
    assert!(TypeKind::Primitive.can_be_declared_variable_type());
    assert!(TypeKind::Primitive.can_be_method_result());
}

#[test]
fn test_executable_is_never_a_value_type() {
    let kind = TypeKind::Executable;
    assert!(!kind.can_be_type_argument());
    assert!(!kind.can_be_method_result());
    assert!(!kind.can_be_declared_variable_type());
    assert!(!kind.can_be_type_variable_bound());
    assert!(kind.is_generic());
}

#[test]
fn test_wildcard_only_as_type_argument() {
    let kind = TypeKind::Wildcard;
    assert!(kind.can_be_type_argument());
    assert!(!kind.can_be_declared_variable_type());
    assert!(!kind.can_be_method_result());
}

#[test]
fn test_intersection_only_as_bound() {
    assert!(TypeKind::Intersection.can_be_type_variable_bound());
    assert!(!TypeKind::Intersection.can_be_type_argument());
    assert!(!TypeKind::Intersection.can_be_declared_variable_type());
}

#[test]
fn test_position_admits() {
    assert!(!TypePosition::Field.admits(TypeKind::Void));
    assert!(!TypePosition::Parameter.admits(TypeKind::Void));
    assert!(TypePosition::MethodResult.admits(TypeKind::Void));
    assert!(TypePosition::ArrayComponent.admits(TypeKind::Primitive));
    assert!(!TypePosition::WildcardBound.admits(TypeKind::Primitive));
    assert!(TypePosition::WildcardBound.admits(TypeKind::Array));
    assert!(TypePosition::IntersectionComponent.admits(TypeKind::Object));
    assert!(!TypePosition::IntersectionComponent.admits(TypeKind::TypeVariable));
}

#[test]
fn test_wildcard_bound_accessor() {
    assert_eq!(WildcardBound::Unbounded.bound(), None);
    assert_eq!(WildcardBound::Extends(TypeId::INT).bound(), Some(TypeId::INT));
    assert_eq!(WildcardBound::Super(TypeId::CHAR).bound(), Some(TypeId::CHAR));
}

#[test]
fn test_type_data_kind() {
    assert_eq!(TypeData::Void.kind(), TypeKind::Void);
    assert_eq!(TypeData::Array(TypeId::INT).kind(), TypeKind::Array);
    assert_eq!(
        TypeData::Wildcard(WildcardBound::Unbounded).kind(),
        TypeKind::Wildcard
    );
    assert_eq!(TypeKind::TypeVariable.to_string(), "type variable");
    assert_eq!(PrimitiveKind::Double.keyword(), "double");
}
