//! Type representation for the declaration model.
//!
//! Types are interned by [`crate::TypeInterner`] and referred to by
//! [`TypeId`]. The set of kinds is closed: every consumer matches on
//! [`TypeData`] exhaustively, and the kind predicates on [`TypeKind`] decide
//! which kinds are legal in which declaration positions.

use crate::def::{DefId, ExecId};
use codemold_common::Atom;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Interned type handle.
///
/// Two structurally identical types always share a `TypeId`, so type
/// equality is id equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const VOID: Self = Self(0);
    pub const BOOLEAN: Self = Self(1);
    pub const BYTE: Self = Self(2);
    pub const SHORT: Self = Self(3);
    pub const INT: Self = Self(4);
    pub const LONG: Self = Self(5);
    pub const FLOAT: Self = Self(6);
    pub const DOUBLE: Self = Self(7);
    pub const CHAR: Self = Self(8);

    /// First id handed out for non-intrinsic types.
    pub const FIRST_USER: u32 = 9;

    pub const fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

/// Ordered list of type arguments or intersection components.
pub type TypeList = SmallVec<[TypeId; 2]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

impl PrimitiveKind {
    /// All primitive kinds in intrinsic id order.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Char,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
        }
    }

    /// The pre-interned id of this primitive.
    pub const fn type_id(self) -> TypeId {
        match self {
            Self::Boolean => TypeId::BOOLEAN,
            Self::Byte => TypeId::BYTE,
            Self::Short => TypeId::SHORT,
            Self::Int => TypeId::INT,
            Self::Long => TypeId::LONG,
            Self::Float => TypeId::FLOAT,
            Self::Double => TypeId::DOUBLE,
            Self::Char => TypeId::CHAR,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    /// `?`
    Unbounded,
    /// `? extends T`
    Extends(TypeId),
    /// `? super T`
    Super(TypeId),
}

impl WildcardBound {
    pub const fn bound(self) -> Option<TypeId> {
        match self {
            Self::Unbounded => None,
            Self::Extends(ty) | Self::Super(ty) => Some(ty),
        }
    }
}

/// An application of an object definition.
///
/// `args` are the definition's own type arguments; arguments of enclosing
/// generic definitions are reached through `enclosing`, which is the
/// captured enclosing instance type of an instance-nested definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectType {
    pub def: DefId,
    pub args: TypeList,
    pub enclosing: Option<TypeId>,
    /// Set by narrowing with a non-empty argument list.
    pub narrowed: bool,
}

/// The type of a method or constructor as seen from a particular
/// (possibly instantiated) enclosing type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExecutableType {
    pub exec: ExecId,
    /// Arguments for the executable's own (method-level) type parameters.
    pub args: TypeList,
    /// Parent instance type for instance members, `None` for static ones.
    pub enclosing: Option<TypeId>,
    pub narrowed: bool,
}

/// Structural type data stored in the interner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Void,
    Primitive(PrimitiveKind),
    Array(TypeId),
    TypeVariable(Atom),
    Wildcard(WildcardBound),
    Intersection(TypeList),
    Object(ObjectType),
    Executable(ExecutableType),
}

impl TypeData {
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Void => TypeKind::Void,
            Self::Primitive(_) => TypeKind::Primitive,
            Self::Array(_) => TypeKind::Array,
            Self::TypeVariable(_) => TypeKind::TypeVariable,
            Self::Wildcard(_) => TypeKind::Wildcard,
            Self::Intersection(_) => TypeKind::Intersection,
            Self::Object(_) => TypeKind::Object,
            Self::Executable(_) => TypeKind::Executable,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Void,
    Primitive,
    Array,
    TypeVariable,
    Wildcard,
    Intersection,
    Object,
    Executable,
}

impl TypeKind {
    pub const fn can_be_type_argument(self) -> bool {
        matches!(
            self,
            Self::Array | Self::Wildcard | Self::Object | Self::TypeVariable
        )
    }

    pub const fn can_be_method_result(self) -> bool {
        matches!(
            self,
            Self::Array | Self::Object | Self::Primitive | Self::TypeVariable | Self::Void
        )
    }

    pub const fn can_be_declared_variable_type(self) -> bool {
        matches!(
            self,
            Self::Array | Self::Object | Self::Primitive | Self::TypeVariable
        )
    }

    pub const fn can_be_type_variable_bound(self) -> bool {
        matches!(self, Self::Intersection | Self::Object | Self::TypeVariable)
    }

    /// Kinds that carry type parameters and can be narrowed.
    pub const fn is_generic(self) -> bool {
        matches!(self, Self::Object | Self::Executable)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Primitive => "primitive",
            Self::Array => "array",
            Self::TypeVariable => "type variable",
            Self::Wildcard => "wildcard",
            Self::Intersection => "intersection",
            Self::Object => "object",
            Self::Executable => "executable",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declaration positions that restrict which type kinds may appear.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypePosition {
    Field,
    Parameter,
    MethodResult,
    TypeArgument,
    TypeVariableBound,
    ArrayComponent,
    WildcardBound,
    IntersectionComponent,
}

impl TypePosition {
    /// Whether a type of `kind` may appear in this position.
    pub const fn admits(self, kind: TypeKind) -> bool {
        match self {
            Self::Field | Self::Parameter | Self::ArrayComponent => {
                kind.can_be_declared_variable_type()
            }
            Self::MethodResult => kind.can_be_method_result(),
            Self::TypeArgument => kind.can_be_type_argument(),
            Self::TypeVariableBound => kind.can_be_type_variable_bound(),
            Self::WildcardBound => {
                matches!(kind, TypeKind::Array | TypeKind::Object | TypeKind::TypeVariable)
            }
            Self::IntersectionComponent => matches!(kind, TypeKind::Object),
        }
    }
}

impl fmt::Display for TypePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Field => "field type",
            Self::Parameter => "parameter type",
            Self::MethodResult => "method result type",
            Self::TypeArgument => "type argument",
            Self::TypeVariableBound => "type variable bound",
            Self::ArrayComponent => "array component type",
            Self::WildcardBound => "wildcard bound",
            Self::IntersectionComponent => "intersection component",
        })
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
