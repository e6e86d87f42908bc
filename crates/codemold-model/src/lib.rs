//! Declaration model for source-code generation.
//!
//! This crate holds the in-memory model a code generator populates before
//! rendering source text:
//!
//! - **Interned types**: a closed set of type kinds (`TypeData`) addressed by
//!   `TypeId`, with kind predicates deciding legal placements
//! - **Definitions**: classes, interfaces, enums and annotations with their
//!   fields, methods, constructors and nested declarations, stored in an
//!   index-based arena so declarations can refer to each other (and to
//!   themselves) before they are populated
//! - **Generics**: type parameters, narrowing, erasure and capture of
//!   enclosing instance types
//! - **Substitution**: type environments chained through captured enclosing
//!   types, with memoized member-type queries
//!
//! Everything is owned by a single [`CodeModel`]. Builders and views borrow
//! it; the model is single-threaded and uses interior mutability so any
//! number of builders can be alive at once.

pub mod builder;
pub mod config;
pub mod def;
pub mod environment;
pub mod error;
mod factory;
mod format;
pub mod generics;
mod intern;
pub mod member_types;
mod model;
pub mod residence;
pub mod scope;
pub mod types;
pub mod view;

pub use builder::{ExecutableBuilder, FieldBuilder, ObjectBuilder};
pub use codemold_common::{Atom, Interner};
pub use config::{FinalSuperclassPolicy, ModelConfig};
pub use def::{
    DefId, ExecId, FieldId, GenericOwner, ObjectKind, PackageId, Parameter, TypeParameter,
};
pub use environment::{TypeEnvironment, TypeEnvironmentBuilder};
pub use error::{KindMismatch, ModelError, StructuralError};
pub use generics::GenericApplication;
pub use intern::TypeInterner;
pub use model::{CodeModel, WellKnownDefs};
pub use residence::{Nesting, Residence};
pub use types::{
    ExecutableType, ObjectType, PrimitiveKind, TypeData, TypeId, TypeKind, TypeList,
    TypePosition, WildcardBound,
};
pub use view::{ExecutableDefinition, FieldDeclaration, ObjectDefinition};
