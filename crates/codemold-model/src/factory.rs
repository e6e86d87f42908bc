//! Checked type factories and kind-specific accessors.
//!
//! The factories enforce the placement rules of component positions
//! (array components, wildcard bounds, intersection components). Object
//! and executable types are produced by definitions and narrowing instead.

use crate::CodeModel;
use crate::error::{KindMismatch, StructuralError};
use crate::types::{
    ExecutableType, ObjectType, PrimitiveKind, TypeData, TypeId, TypeKind, TypeList, TypePosition,
    WildcardBound,
};
use codemold_common::Atom;

impl CodeModel {
    // =========================================================================
    // Factories
    // =========================================================================

    pub const fn void_type(&self) -> TypeId {
        TypeId::VOID
    }

    pub const fn primitive(&self, kind: PrimitiveKind) -> TypeId {
        kind.type_id()
    }

    /// A type variable reference. Resolution happens by name at
    /// substitution time.
    pub fn variable(&self, name: &str) -> TypeId {
        self.types.variable(self.names.intern(name))
    }

    pub fn array_of(&self, component: TypeId) -> Result<TypeId, StructuralError> {
        self.check_placement(component, TypePosition::ArrayComponent)?;
        Ok(self.types.array(component))
    }

    /// The unbounded wildcard `?`.
    pub fn wildcard(&self) -> TypeId {
        self.types.wildcard(WildcardBound::Unbounded)
    }

    pub fn wildcard_extends(&self, upper: TypeId) -> Result<TypeId, StructuralError> {
        self.check_placement(upper, TypePosition::WildcardBound)?;
        Ok(self.types.wildcard(WildcardBound::Extends(upper)))
    }

    pub fn wildcard_super(&self, lower: TypeId) -> Result<TypeId, StructuralError> {
        self.check_placement(lower, TypePosition::WildcardBound)?;
        Ok(self.types.wildcard(WildcardBound::Super(lower)))
    }

    /// Intersection of object types. Duplicates are dropped keeping the
    /// first occurrence; a single component is returned as itself.
    pub fn intersection(&self, components: &[TypeId]) -> Result<TypeId, StructuralError> {
        if components.is_empty() {
            return Err(StructuralError::EmptyIntersection);
        }
        let mut unique = TypeList::new();
        for &component in components {
            self.check_placement(component, TypePosition::IntersectionComponent)?;
            if !unique.contains(&component) {
                unique.push(component);
            }
        }
        match unique.as_slice() {
            [single] => Ok(*single),
            _ => Ok(self.types.intersection(unique)),
        }
    }

    /// Components of an intersection, or `[ty]` for any other type.
    pub fn to_list_of_intersected_types(&self, ty: TypeId) -> Vec<TypeId> {
        match self.types.lookup(ty) {
            TypeData::Intersection(components) => components.to_vec(),
            _ => vec![ty],
        }
    }

    /// Whether a type argument of `ty`, or of a type it captures, is a
    /// wildcard.
    pub fn contains_wildcards(&self, ty: TypeId) -> bool {
        let Ok(application) = self.generic_application(ty) else {
            return false;
        };
        application
            .args
            .iter()
            .any(|&arg| self.kind(arg) == TypeKind::Wildcard)
            || application
                .enclosing
                .is_some_and(|outer| self.contains_wildcards(outer))
    }

    // =========================================================================
    // Kind-specific accessors
    // =========================================================================

    fn mismatch(&self, expected: &'static str, ty: TypeId) -> KindMismatch {
        KindMismatch {
            expected,
            found: self.kind(ty),
        }
    }

    pub fn as_primitive(&self, ty: TypeId) -> Result<PrimitiveKind, KindMismatch> {
        match self.types.lookup(ty) {
            TypeData::Primitive(kind) => Ok(kind),
            _ => Err(self.mismatch("primitive", ty)),
        }
    }

    pub fn array_component(&self, ty: TypeId) -> Result<TypeId, KindMismatch> {
        match self.types.lookup(ty) {
            TypeData::Array(component) => Ok(component),
            _ => Err(self.mismatch("array", ty)),
        }
    }

    pub fn variable_name(&self, ty: TypeId) -> Result<Atom, KindMismatch> {
        match self.types.lookup(ty) {
            TypeData::TypeVariable(name) => Ok(name),
            _ => Err(self.mismatch("type variable", ty)),
        }
    }

    pub fn wildcard_bound(&self, ty: TypeId) -> Result<WildcardBound, KindMismatch> {
        match self.types.lookup(ty) {
            TypeData::Wildcard(bound) => Ok(bound),
            _ => Err(self.mismatch("wildcard", ty)),
        }
    }

    pub fn intersection_components(&self, ty: TypeId) -> Result<TypeList, KindMismatch> {
        match self.types.lookup(ty) {
            TypeData::Intersection(components) => Ok(components),
            _ => Err(self.mismatch("intersection", ty)),
        }
    }

    pub fn as_object_type(&self, ty: TypeId) -> Result<ObjectType, KindMismatch> {
        self.types
            .as_object(ty)
            .ok_or_else(|| self.mismatch("object", ty))
    }

    pub fn as_executable_type(&self, ty: TypeId) -> Result<ExecutableType, KindMismatch> {
        self.types
            .as_executable(ty)
            .ok_or_else(|| self.mismatch("executable", ty))
    }
}

#[cfg(test)]
#[path = "../tests/factory_tests.rs"]
mod tests;
