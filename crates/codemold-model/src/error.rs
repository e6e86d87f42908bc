//! Errors reported by the declaration model.
//!
//! [`StructuralError`] covers violations of declaration-shape rules and is
//! always reported by the mutating or narrowing call that triggered it.
//! [`KindMismatch`] is a contract violation: a kind-specific accessor was
//! called on a type of another kind.

use crate::def::ObjectKind;
use crate::types::{TypeKind, TypePosition};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("{owner}.{name} already defined")]
    DuplicateName { owner: String, name: String },

    #[error("type parameter {name} is already declared on {owner}")]
    DuplicateTypeParameter { owner: String, name: String },

    #[error("{owner} declares no type parameter {name}")]
    UnknownTypeParameter { owner: String, name: String },

    #[error("{kind} type {ty} is not allowed as {position}")]
    IllegalTypePlacement {
        position: TypePosition,
        kind: TypeKind,
        ty: String,
    },

    #[error("wildcards are not allowed in the {clause} clause of {owner}: {ty}")]
    WildcardInSupertype {
        owner: String,
        clause: &'static str,
        ty: String,
    },

    #[error("{target} expects {expected} type argument(s), but {found} were given")]
    ArityMismatch {
        target: String,
        expected: usize,
        found: usize,
    },

    #[error("type argument {argument} is not within the bounds of {parameter} on {target}")]
    BoundViolation {
        target: String,
        parameter: String,
        argument: String,
    },

    #[error("{owner} cannot use {ty} as a supertype: {reason}")]
    InvalidSupertype {
        owner: String,
        ty: String,
        reason: &'static str,
    },

    #[error("{owner} already extends {existing}")]
    SuperclassAlreadySet { owner: String, existing: String },

    #[error("{owner} cannot extend final class {superclass}")]
    FinalSuperclass { owner: String, superclass: String },

    #[error("{owner} can only extend a final class under the require-final policy: {superclass}")]
    NonFinalSuperclass { owner: String, superclass: String },

    #[error("only object types can be thrown by {owner}: {ty}")]
    NonObjectThrowable { owner: String, ty: String },

    #[error("generic class {ty} can't be used as throwable exception in {owner}")]
    GenericThrowable { owner: String, ty: String },

    #[error("{kind} {name} should always be static when nested in {owner}")]
    NonStaticNestedType {
        owner: String,
        name: String,
        kind: ObjectKind,
    },

    #[error("{what} is not applicable to {owner}")]
    NotApplicable { owner: String, what: &'static str },

    #[error("{member}: {reason}")]
    ResidenceMismatch { member: String, reason: &'static str },

    #[error("intersection type needs at least one component")]
    EmptyIntersection,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{expected} type expected, found {found}")]
pub struct KindMismatch {
    pub expected: &'static str,
    pub found: TypeKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error(transparent)]
    KindMismatch(#[from] KindMismatch),
}

impl ModelError {
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Structural(_))
    }

    pub const fn as_structural(&self) -> Option<&StructuralError> {
        match self {
            Self::Structural(err) => Some(err),
            Self::KindMismatch(_) => None,
        }
    }
}
