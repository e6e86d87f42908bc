//! Generic definitions and narrowing.
//!
//! An object or executable type is an application of a generic owner to
//! its own type arguments, plus the captured enclosing instance type that
//! carries the arguments of outer definitions. Narrowing replaces the own
//! arguments and never touches the capture.

use crate::CodeModel;
use crate::def::{DefId, ExecId, GenericOwner, TypeParameter};
use crate::error::{KindMismatch, ModelError, StructuralError};
use crate::types::{TypeData, TypeId, TypeList, TypePosition, WildcardBound};
use codemold_common::limits::MAX_SUPERTYPE_WALK;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

/// The generic shape of an object or executable type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericApplication {
    pub owner: GenericOwner,
    pub args: TypeList,
    pub enclosing: Option<TypeId>,
    pub narrowed: bool,
}

impl CodeModel {
    pub fn generic_application(&self, ty: TypeId) -> Result<GenericApplication, KindMismatch> {
        match self.types.lookup(ty) {
            TypeData::Object(object) => Ok(GenericApplication {
                owner: GenericOwner::Object(object.def),
                args: object.args,
                enclosing: object.enclosing,
                narrowed: object.narrowed,
            }),
            TypeData::Executable(exec) => Ok(GenericApplication {
                owner: GenericOwner::Executable(exec.exec),
                args: exec.args,
                enclosing: exec.enclosing,
                narrowed: exec.narrowed,
            }),
            other => Err(KindMismatch {
                expected: "object or executable",
                found: other.kind(),
            }),
        }
    }

    fn intern_application(
        &self,
        owner: GenericOwner,
        args: TypeList,
        enclosing: Option<TypeId>,
        narrowed: bool,
    ) -> TypeId {
        match owner {
            GenericOwner::Object(def) => self.types.object(def, args, enclosing, narrowed),
            GenericOwner::Executable(exec) => self.types.executable(exec, args, enclosing, narrowed),
        }
    }

    /// The definition a generic type applies.
    pub fn generic_definition(&self, ty: TypeId) -> Result<GenericOwner, KindMismatch> {
        Ok(self.generic_application(ty)?.owner)
    }

    /// Own type parameters of a generic owner, in declaration order.
    pub fn type_parameters(&self, owner: GenericOwner) -> Vec<TypeParameter> {
        self.defs.type_params(owner)
    }

    /// Bind the own type parameters of `ty` to `args`.
    ///
    /// Fails on an arity mismatch, on an argument that cannot be a type
    /// argument, or on an argument outside its parameter's bounds. An empty
    /// argument list yields the raw type.
    pub fn narrow(&self, ty: TypeId, args: &[TypeId]) -> Result<TypeId, ModelError> {
        let application = self.generic_application(ty)?;
        let params = self.defs.type_params(application.owner);
        if params.len() != args.len() {
            return Err(StructuralError::ArityMismatch {
                target: self.display_type(ty),
                expected: params.len(),
                found: args.len(),
            }
            .into());
        }
        for &arg in args {
            self.check_placement(arg, TypePosition::TypeArgument)?;
        }
        for (param, &arg) in params.iter().zip(args) {
            for &bound in &param.bounds {
                if !self.satisfies_bound(arg, bound) {
                    return Err(StructuralError::BoundViolation {
                        target: self.display_type(ty),
                        parameter: self.names.resolve(param.name).to_string(),
                        argument: self.display_type(arg),
                    }
                    .into());
                }
            }
        }

        let narrowed = !args.is_empty();
        let result = self.intern_application(
            application.owner,
            args.iter().copied().collect(),
            application.enclosing,
            narrowed,
        );
        debug!(
            type_id = ty.0,
            result = result.0,
            arity = args.len(),
            "CodeModel::narrow"
        );
        Ok(result)
    }

    /// `ty` without its own type arguments. The captured enclosing type is
    /// kept.
    pub fn erasure(&self, ty: TypeId) -> Result<TypeId, KindMismatch> {
        let application = self.generic_application(ty)?;
        Ok(self.intern_application(
            application.owner,
            TypeList::new(),
            application.enclosing,
            false,
        ))
    }

    pub fn type_arguments(&self, ty: TypeId) -> Result<TypeList, KindMismatch> {
        Ok(self.generic_application(ty)?.args)
    }

    /// A generic type used without its own arguments.
    pub fn is_raw(&self, ty: TypeId) -> Result<bool, KindMismatch> {
        let application = self.generic_application(ty)?;
        Ok(!application.narrowed && !self.defs.type_params(application.owner).is_empty())
    }

    pub fn is_narrowed(&self, ty: TypeId) -> Result<bool, KindMismatch> {
        Ok(!self.is_raw(ty)?)
    }

    pub fn captured_enclosing_type(&self, ty: TypeId) -> Result<Option<TypeId>, KindMismatch> {
        Ok(self.generic_application(ty)?.enclosing)
    }

    /// The type of `def` as seen from inside its own declaration: narrowed
    /// with its own type variables and capturing the parent's internal type.
    pub fn internal_type(&self, def: DefId) -> TypeId {
        let enclosing = self
            .residence(def)
            .captured_parent()
            .map(|parent| self.internal_type(parent));
        self.own_variables_application(GenericOwner::Object(def), enclosing)
    }

    /// Executable counterpart of [`CodeModel::internal_type`].
    pub fn executable_internal_type(&self, exec: ExecId) -> TypeId {
        let nesting = self.defs.executable(exec).nesting;
        let enclosing = nesting
            .captures_enclosing()
            .then(|| self.internal_type(nesting.parent));
        self.own_variables_application(GenericOwner::Executable(exec), enclosing)
    }

    fn own_variables_application(&self, owner: GenericOwner, enclosing: Option<TypeId>) -> TypeId {
        let args: TypeList = self
            .defs
            .type_params(owner)
            .iter()
            .map(|param| self.types.variable(param.name))
            .collect();
        let narrowed = !args.is_empty();
        self.intern_application(owner, args, enclosing, narrowed)
    }

    pub(crate) fn generic_owner_name(&self, owner: GenericOwner) -> String {
        match owner {
            GenericOwner::Object(def) => self.qualified_name(def),
            GenericOwner::Executable(exec) => self.executable_name(exec),
        }
    }

    /// Declare a type parameter on `owner` and return its type variable.
    pub(crate) fn add_type_parameter(
        &self,
        owner: GenericOwner,
        name: &str,
        bounds: &[TypeId],
    ) -> Result<TypeId, StructuralError> {
        let atom = self.names.intern(name);
        if self
            .defs
            .type_params(owner)
            .iter()
            .any(|param| param.name == atom)
        {
            return Err(StructuralError::DuplicateTypeParameter {
                owner: self.generic_owner_name(owner),
                name: name.to_string(),
            });
        }
        for &bound in bounds {
            self.check_placement(bound, TypePosition::TypeVariableBound)?;
        }
        let bounds: SmallVec<[TypeId; 1]> = bounds.iter().copied().collect();
        trace!(?owner, name, bounds = bounds.len(), "add_type_parameter");
        self.defs.push_type_param(
            owner,
            TypeParameter {
                name: atom,
                bounds,
            },
        );
        Ok(self.types.variable(atom))
    }

    /// Add a bound to an already declared type parameter of `owner`.
    ///
    /// Declaring first and bounding afterwards lets a bound mention the
    /// parameter itself, as in `Node<T extends Node<T>>`.
    pub(crate) fn add_type_parameter_bound(
        &self,
        owner: GenericOwner,
        name: &str,
        bound: TypeId,
    ) -> Result<(), StructuralError> {
        let index = self.names.get(name).and_then(|atom| {
            self.defs
                .type_params(owner)
                .iter()
                .position(|param| param.name == atom)
        });
        let Some(index) = index else {
            return Err(StructuralError::UnknownTypeParameter {
                owner: self.generic_owner_name(owner),
                name: name.to_string(),
            });
        };
        self.check_placement(bound, TypePosition::TypeVariableBound)?;
        trace!(?owner, name, bound = bound.0, "add_type_parameter_bound");
        self.defs.push_type_param_bound(owner, index, bound);
        Ok(())
    }

    /// Whether `arg` is within `bound`, decided on erasures.
    pub fn satisfies_bound(&self, arg: TypeId, bound: TypeId) -> bool {
        match self.types.lookup(bound) {
            TypeData::Intersection(components) => components
                .iter()
                .all(|&component| self.satisfies_bound(arg, component)),
            TypeData::Object(target) => {
                if target.def == self.well_known().object {
                    return true;
                }
                match self.types.lookup(arg) {
                    TypeData::Object(arg) => self.is_subclass_of(arg.def, target.def),
                    TypeData::Intersection(components) => components.iter().any(|&component| {
                        self.types
                            .as_object(component)
                            .is_some_and(|object| self.is_subclass_of(object.def, target.def))
                    }),
                    TypeData::Wildcard(WildcardBound::Extends(upper)) => {
                        self.satisfies_bound(upper, bound)
                    }
                    TypeData::TypeVariable(_)
                    | TypeData::Wildcard(WildcardBound::Unbounded | WildcardBound::Super(_)) => {
                        true
                    }
                    _ => false,
                }
            }
            _ => true,
        }
    }

    /// Whether `ancestor` is `def` or one of its nominal supertypes.
    pub fn is_subclass_of(&self, def: DefId, ancestor: DefId) -> bool {
        if def == ancestor || ancestor == self.well_known().object {
            return true;
        }
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::from([def]);
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if visited.len() > MAX_SUPERTYPE_WALK {
                warn!(
                    def = def.0,
                    ancestor = ancestor.0,
                    "supertype walk limit reached"
                );
                return false;
            }
            let supertypes: Vec<TypeId> = {
                let info = self.defs.object(current);
                info.extends.iter().chain(&info.implements).copied().collect()
            };
            for supertype in supertypes {
                if let Some(object) = self.types.as_object(supertype) {
                    if object.def == ancestor {
                        return true;
                    }
                    queue.push_back(object.def);
                }
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "../tests/generics_tests.rs"]
mod tests;
