//! Definition identifiers and storage.
//!
//! Every declaration (object definition, method or constructor, field) is
//! allocated a stable index in the [`DefinitionStore`] arena when its
//! builder is created. Handles are plain indices, so declarations can refer
//! to themselves and to each other before they are populated, and cycles in
//! the declaration graph never become ownership cycles.
//!
//! | Handle | Arena entry | Created by |
//! |--------|-------------|------------|
//! | `DefId` | [`ObjectDefinitionInfo`] | top-level/nested class builders |
//! | `ExecId` | [`ExecutableInfo`] | `method`, `static_method`, `add_constructor` |
//! | `FieldId` | [`FieldInfo`] | `field`, `static_field` |

use crate::residence::{Nesting, Residence};
use crate::scope::ScopeId;
use crate::types::TypeId;
use codemold_common::Atom;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use tracing::trace;

/// Name-keyed, insertion-ordered member table.
pub type MemberMap<V> = IndexMap<Atom, V, FxBuildHasher>;

// =============================================================================
// Handles
// =============================================================================

/// Object (class, interface, enum, annotation) definition handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefId(pub u32);

/// Executable (method or constructor) definition handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExecId(pub u32);

/// Field declaration handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

/// Package handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(pub u32);

/// Anything that declares its own type parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GenericOwner {
    Object(DefId),
    Executable(ExecId),
}

// =============================================================================
// Kinds
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl ObjectKind {
    pub const fn is_class(self) -> bool {
        matches!(self, Self::Class)
    }

    pub const fn is_interface(self) -> bool {
        matches!(self, Self::Interface)
    }

    /// Kinds that may only be nested in a static context.
    pub const fn requires_static_nesting(self) -> bool {
        matches!(self, Self::Interface | Self::Enum | Self::Annotation)
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Annotation => "@interface",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// =============================================================================
// Arena entries
// =============================================================================

/// A declared type parameter with zero or more bounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeParameter {
    pub name: Atom,
    pub bounds: SmallVec<[TypeId; 1]>,
}

/// A declared method or constructor parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: Atom,
    pub type_id: TypeId,
    pub is_final: bool,
}

#[derive(Clone, Debug)]
pub struct ObjectDefinitionInfo {
    pub kind: ObjectKind,
    pub name: Atom,
    pub residence: Residence,
    pub is_final: bool,
    pub type_params: Vec<TypeParameter>,
    /// Explicit superclass; `None` means the implicit top type.
    pub extends: Option<TypeId>,
    pub implements: Vec<TypeId>,
    pub fields: MemberMap<FieldId>,
    /// Static fields in declaration (and initialization) order.
    pub static_init_order: Vec<FieldId>,
    /// Instance fields in declaration (and initialization) order.
    pub instance_init_order: Vec<FieldId>,
    pub methods: Vec<ExecId>,
    pub constructors: Vec<ExecId>,
    pub nested: MemberMap<DefId>,
    /// Interned unparameterized type of this definition.
    pub erasure: TypeId,
}

impl ObjectDefinitionInfo {
    pub fn new(kind: ObjectKind, name: Atom, residence: Residence, erasure: TypeId) -> Self {
        Self {
            kind,
            name,
            residence,
            is_final: false,
            type_params: Vec::new(),
            extends: None,
            implements: Vec::new(),
            fields: MemberMap::default(),
            static_init_order: Vec::new(),
            instance_init_order: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            nested: MemberMap::default(),
            erasure,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExecutableKind {
    Method { name: Atom, result: TypeId },
    Constructor,
}

#[derive(Clone, Debug)]
pub struct ExecutableInfo {
    pub kind: ExecutableKind,
    pub nesting: Nesting,
    pub type_params: Vec<TypeParameter>,
    pub params: Vec<Parameter>,
    pub throws: Vec<TypeId>,
    /// Scope holding the parameter names.
    pub param_scope: ScopeId,
    /// Scope for body locals, nested in `param_scope`.
    pub body_scope: ScopeId,
}

#[derive(Clone, Debug)]
pub struct FieldInfo {
    pub name: Atom,
    pub type_id: TypeId,
    pub is_final: bool,
    pub nesting: Nesting,
}

// =============================================================================
// DefinitionStore
// =============================================================================

/// Arena owning every declaration of one construction session.
///
/// Accessors hand out short-lived `Ref`/`RefMut` guards. Callers never hold
/// a guard across another store call.
#[derive(Default)]
pub struct DefinitionStore {
    objects: RefCell<Vec<ObjectDefinitionInfo>>,
    executables: RefCell<Vec<ExecutableInfo>>,
    fields: RefCell<Vec<FieldInfo>>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next `DefId` that `register_object` will hand out.
    pub fn next_object_id(&self) -> DefId {
        DefId(self.objects.borrow().len() as u32)
    }

    pub fn register_object(&self, info: ObjectDefinitionInfo) -> DefId {
        let mut objects = self.objects.borrow_mut();
        let id = DefId(objects.len() as u32);
        trace!(def_id = id.0, kind = ?info.kind, "DefinitionStore::register_object");
        objects.push(info);
        id
    }

    pub fn register_executable(&self, info: ExecutableInfo) -> ExecId {
        let mut executables = self.executables.borrow_mut();
        let id = ExecId(executables.len() as u32);
        trace!(exec_id = id.0, kind = ?info.kind, "DefinitionStore::register_executable");
        executables.push(info);
        id
    }

    pub fn register_field(&self, info: FieldInfo) -> FieldId {
        let mut fields = self.fields.borrow_mut();
        let id = FieldId(fields.len() as u32);
        trace!(field_id = id.0, "DefinitionStore::register_field");
        fields.push(info);
        id
    }

    /// Object definition entry. `id` must come from this store.
    pub fn object(&self, id: DefId) -> Ref<'_, ObjectDefinitionInfo> {
        Ref::map(self.objects.borrow(), |objects| &objects[id.0 as usize])
    }

    pub fn object_mut(&self, id: DefId) -> RefMut<'_, ObjectDefinitionInfo> {
        RefMut::map(self.objects.borrow_mut(), |objects| {
            &mut objects[id.0 as usize]
        })
    }

    pub fn executable(&self, id: ExecId) -> Ref<'_, ExecutableInfo> {
        Ref::map(self.executables.borrow(), |execs| &execs[id.0 as usize])
    }

    pub fn executable_mut(&self, id: ExecId) -> RefMut<'_, ExecutableInfo> {
        RefMut::map(self.executables.borrow_mut(), |execs| {
            &mut execs[id.0 as usize]
        })
    }

    pub fn field(&self, id: FieldId) -> Ref<'_, FieldInfo> {
        Ref::map(self.fields.borrow(), |fields| &fields[id.0 as usize])
    }

    pub fn field_mut(&self, id: FieldId) -> RefMut<'_, FieldInfo> {
        RefMut::map(self.fields.borrow_mut(), |fields| &mut fields[id.0 as usize])
    }

    /// Own type parameters of a generic owner.
    pub fn type_params(&self, owner: GenericOwner) -> Vec<TypeParameter> {
        match owner {
            GenericOwner::Object(id) => self.object(id).type_params.clone(),
            GenericOwner::Executable(id) => self.executable(id).type_params.clone(),
        }
    }

    pub fn push_type_param(&self, owner: GenericOwner, param: TypeParameter) {
        match owner {
            GenericOwner::Object(id) => self.object_mut(id).type_params.push(param),
            GenericOwner::Executable(id) => self.executable_mut(id).type_params.push(param),
        }
    }

    /// Append `bound` to the parameter at `index` unless it is already there.
    pub fn push_type_param_bound(&self, owner: GenericOwner, index: usize, bound: TypeId) {
        let push = |params: &mut Vec<TypeParameter>| {
            if let Some(param) = params.get_mut(index) {
                if !param.bounds.contains(&bound) {
                    param.bounds.push(bound);
                }
            }
        };
        match owner {
            GenericOwner::Object(id) => push(&mut self.object_mut(id).type_params),
            GenericOwner::Executable(id) => push(&mut self.executable_mut(id).type_params),
        }
    }

    pub fn object_count(&self) -> usize {
        self.objects.borrow().len()
    }

    pub fn executable_count(&self) -> usize {
        self.executables.borrow().len()
    }

    pub fn field_count(&self) -> usize {
        self.fields.borrow().len()
    }
}

#[cfg(test)]
#[path = "../tests/def_tests.rs"]
mod tests;
