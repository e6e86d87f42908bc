//! Member types as seen from an instantiated enclosing type.
//!
//! A member's declared types mention the type variables of every generic
//! owner in scope. The queries here resolve them through the definition
//! environment of the instantiated parent (or of the executable type
//! itself), memoizing the substituted parameter and throws lists per
//! executable type id.

use crate::CodeModel;
use crate::def::{DefId, ExecId, ExecutableKind, FieldId, Parameter};
use crate::environment::TypeEnvironment;
use crate::error::{KindMismatch, ModelError, StructuralError};
use crate::residence::Nesting;
use crate::types::{TypeId, TypeList};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// Memo tables keyed by instantiated type id. Entries are never evicted.
#[derive(Default)]
pub struct MemberTypeCache {
    pub(crate) environments: RefCell<FxHashMap<TypeId, Rc<TypeEnvironment>>>,
    pub(crate) parameters: RefCell<FxHashMap<TypeId, Rc<[Parameter]>>>,
    pub(crate) throws: RefCell<FxHashMap<TypeId, Rc<[TypeId]>>>,
}

impl MemberTypeCache {
    pub fn len(&self) -> usize {
        self.environments.borrow().len() + self.parameters.borrow().len() + self.throws.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CodeModel {
    /// Check `parent` against a member's nesting and return the enclosing
    /// instance type the member's type captures.
    fn enclosing_for(
        &self,
        member: impl FnOnce() -> String,
        nesting: Option<Nesting>,
        parent: Option<TypeId>,
    ) -> Result<Option<TypeId>, ModelError> {
        let captured = nesting.filter(|nesting| nesting.captures_enclosing());
        match (captured, parent) {
            (None, None) => Ok(None),
            (None, Some(_)) => Err(StructuralError::ResidenceMismatch {
                member: member(),
                reason: "a static or top-level declaration takes no enclosing instance",
            }
            .into()),
            (Some(_), None) => Err(StructuralError::ResidenceMismatch {
                member: member(),
                reason: "an instance member requires an enclosing instance type",
            }
            .into()),
            (Some(nesting), Some(parent)) => {
                let object = self.as_object_type(parent)?;
                if object.def != nesting.parent {
                    return Err(StructuralError::ResidenceMismatch {
                        member: member(),
                        reason: "the enclosing instance type applies a different definition",
                    }
                    .into());
                }
                if object.enclosing.is_none() && self.residence(object.def).captured_parent().is_some()
                {
                    return Err(StructuralError::ResidenceMismatch {
                        member: member(),
                        reason: "the enclosing instance type does not capture its own enclosing instance",
                    }
                    .into());
                }
                Ok(Some(parent))
            }
        }
    }

    /// Unparameterized type of a nested or top-level object definition as
    /// seen from `parent`.
    pub fn object_raw_type(&self, def: DefId, parent: Option<TypeId>) -> Result<TypeId, ModelError> {
        let nesting = self.residence(def).nesting();
        let enclosing = self.enclosing_for(|| self.qualified_name(def), nesting, parent)?;
        Ok(self.types.object(def, TypeList::new(), enclosing, false))
    }

    /// Unparameterized type of a method or constructor as seen from
    /// `parent`.
    pub fn raw_type(&self, exec: ExecId, parent: Option<TypeId>) -> Result<TypeId, ModelError> {
        let nesting = self.defs.executable(exec).nesting;
        let enclosing = self.enclosing_for(|| self.executable_name(exec), Some(nesting), parent)?;
        Ok(self.types.executable(exec, TypeList::new(), enclosing, false))
    }

    /// Parameters of an executable type with their types substituted.
    pub fn parameters(&self, ty: TypeId) -> Result<Rc<[Parameter]>, KindMismatch> {
        if let Some(params) = self.caches.parameters.borrow().get(&ty) {
            return Ok(Rc::clone(params));
        }
        let exec = self.as_executable_type(ty)?;
        let env = self.definition_environment(ty)?;
        let declared = self.defs.executable(exec.exec).params.clone();
        let params: Rc<[Parameter]> = declared
            .into_iter()
            .map(|param| Parameter {
                type_id: self.substitute(param.type_id, &env),
                ..param
            })
            .collect();
        trace!(type_id = ty.0, count = params.len(), "parameters: computed");
        self.caches
            .parameters
            .borrow_mut()
            .insert(ty, Rc::clone(&params));
        Ok(params)
    }

    /// Throws list of an executable type with its types substituted.
    pub fn throws_list(&self, ty: TypeId) -> Result<Rc<[TypeId]>, KindMismatch> {
        if let Some(throws) = self.caches.throws.borrow().get(&ty) {
            return Ok(Rc::clone(throws));
        }
        let exec = self.as_executable_type(ty)?;
        let env = self.definition_environment(ty)?;
        let declared = self.defs.executable(exec.exec).throws.clone();
        let throws: Rc<[TypeId]> = self.substitute_all(&declared, &env).into();
        trace!(type_id = ty.0, count = throws.len(), "throws_list: computed");
        self.caches
            .throws
            .borrow_mut()
            .insert(ty, Rc::clone(&throws));
        Ok(throws)
    }

    /// Result type of an executable type. A constructor yields the
    /// instance type it is seen from.
    pub fn return_type(&self, ty: TypeId) -> Result<TypeId, KindMismatch> {
        let exec = self.as_executable_type(ty)?;
        let (kind, parent) = {
            let info = self.defs.executable(exec.exec);
            (info.kind, info.nesting.parent)
        };
        match kind {
            ExecutableKind::Constructor => Ok(exec
                .enclosing
                .unwrap_or_else(|| self.defs.object(parent).erasure)),
            ExecutableKind::Method { result, .. } => {
                let env = self.definition_environment(ty)?;
                Ok(self.substitute(result, &env))
            }
        }
    }

    fn member_parent(&self, nesting: Nesting, instance: TypeId) -> Option<TypeId> {
        nesting.captures_enclosing().then_some(instance)
    }

    /// Raw types of the methods of the definition `ty` applies, as seen
    /// from `ty`.
    pub fn methods_of(&self, ty: TypeId) -> Result<Vec<TypeId>, ModelError> {
        let object = self.as_object_type(ty)?;
        let methods = self.defs.object(object.def).methods.clone();
        methods
            .into_iter()
            .map(|exec| {
                let nesting = self.defs.executable(exec).nesting;
                self.raw_type(exec, self.member_parent(nesting, ty))
            })
            .collect()
    }

    pub fn constructors_of(&self, ty: TypeId) -> Result<Vec<TypeId>, ModelError> {
        let object = self.as_object_type(ty)?;
        let constructors = self.defs.object(object.def).constructors.clone();
        constructors
            .into_iter()
            .map(|exec| self.raw_type(exec, Some(ty)))
            .collect()
    }

    /// Declared type of `field` substituted through `parent`'s environment.
    pub fn field_type_in(&self, field: FieldId, parent: Option<TypeId>) -> Result<TypeId, ModelError> {
        let (name, declared, nesting) = {
            let info = self.defs.field(field);
            (info.name, info.type_id, info.nesting)
        };
        let member = || {
            format!(
                "{}.{}",
                self.qualified_name(nesting.parent),
                self.names.resolve(name)
            )
        };
        match self.enclosing_for(member, Some(nesting), parent)? {
            Some(parent) => {
                let env = self.definition_environment(parent)?;
                Ok(self.substitute(declared, &env))
            }
            None => Ok(declared),
        }
    }

    /// Superclass of the definition `ty` applies, substituted through `ty`.
    ///
    /// Definitions without an explicit superclass extend `Object`; `Object`
    /// itself has none.
    pub fn superclass_of(&self, ty: TypeId) -> Result<Option<TypeId>, KindMismatch> {
        let object = self.as_object_type(ty)?;
        if object.def == self.well_known().object {
            return Ok(None);
        }
        let declared = self.defs.object(object.def).extends;
        match declared {
            Some(superclass) => {
                let env = self.definition_environment(ty)?;
                Ok(Some(self.substitute(superclass, &env)))
            }
            None => Ok(Some(self.object_type())),
        }
    }

    pub fn interfaces_of(&self, ty: TypeId) -> Result<Vec<TypeId>, KindMismatch> {
        let object = self.as_object_type(ty)?;
        let declared = self.defs.object(object.def).implements.clone();
        let env = self.definition_environment(ty)?;
        Ok(self.substitute_all(&declared, &env))
    }
}

#[cfg(test)]
#[path = "../tests/member_types_tests.rs"]
mod tests;
