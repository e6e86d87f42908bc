//! Type interning.
//!
//! Every [`TypeData`] is stored once and addressed by [`TypeId`]. Interning
//! gives O(1) type equality and a stable identity that memo caches can key
//! on.
//!
//! The intrinsic types (`void` and the primitives) are registered first so
//! their ids are the constants on [`TypeId`].

use crate::def::{DefId, ExecId};
use crate::types::{
    ExecutableType, ObjectType, PrimitiveKind, TypeData, TypeId, TypeKind, TypeList, WildcardBound,
};
use codemold_common::Atom;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use tracing::trace;

#[derive(Default)]
struct InternerState {
    types: Vec<TypeData>,
    lookup: FxHashMap<TypeData, TypeId>,
}

/// Session-local type interner.
pub struct TypeInterner {
    state: RefCell<InternerState>,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    pub fn new() -> Self {
        let interner = Self {
            state: RefCell::new(InternerState::default()),
        };
        let void = interner.intern(TypeData::Void);
        debug_assert_eq!(void, TypeId::VOID);
        for kind in PrimitiveKind::ALL {
            let id = interner.intern(TypeData::Primitive(kind));
            debug_assert_eq!(id, kind.type_id());
        }
        interner
    }

    /// Intern `data`, returning the existing id for structurally equal data.
    pub fn intern(&self, data: TypeData) -> TypeId {
        let mut state = self.state.borrow_mut();
        if let Some(&id) = state.lookup.get(&data) {
            return id;
        }
        let id = TypeId(state.types.len() as u32);
        trace!(type_id = id.0, kind = %data.kind(), "TypeInterner::intern");
        state.types.push(data.clone());
        state.lookup.insert(data, id);
        id
    }

    /// Structural data for `id`.
    ///
    /// `id` must have been produced by this interner.
    pub fn lookup(&self, id: TypeId) -> TypeData {
        self.state.borrow().types[id.0 as usize].clone()
    }

    pub fn kind(&self, id: TypeId) -> TypeKind {
        self.state.borrow().types[id.0 as usize].kind()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Constructors
    // =========================================================================
    // These do not validate placement rules; `CodeModel` wraps them with the
    // checked factories.

    pub const fn void(&self) -> TypeId {
        TypeId::VOID
    }

    pub const fn primitive(&self, kind: PrimitiveKind) -> TypeId {
        kind.type_id()
    }

    pub fn array(&self, component: TypeId) -> TypeId {
        self.intern(TypeData::Array(component))
    }

    pub fn variable(&self, name: Atom) -> TypeId {
        self.intern(TypeData::TypeVariable(name))
    }

    pub fn wildcard(&self, bound: WildcardBound) -> TypeId {
        self.intern(TypeData::Wildcard(bound))
    }

    pub fn intersection(&self, components: TypeList) -> TypeId {
        self.intern(TypeData::Intersection(components))
    }

    pub fn object(
        &self,
        def: DefId,
        args: TypeList,
        enclosing: Option<TypeId>,
        narrowed: bool,
    ) -> TypeId {
        self.intern(TypeData::Object(ObjectType {
            def,
            args,
            enclosing,
            narrowed,
        }))
    }

    pub fn executable(
        &self,
        exec: ExecId,
        args: TypeList,
        enclosing: Option<TypeId>,
        narrowed: bool,
    ) -> TypeId {
        self.intern(TypeData::Executable(ExecutableType {
            exec,
            args,
            enclosing,
            narrowed,
        }))
    }

    // =========================================================================
    // Kind-checked accessors
    // =========================================================================

    pub fn as_object(&self, id: TypeId) -> Option<ObjectType> {
        match self.lookup(id) {
            TypeData::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_executable(&self, id: TypeId) -> Option<ExecutableType> {
        match self.lookup(id) {
            TypeData::Executable(exec) => Some(exec),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;
