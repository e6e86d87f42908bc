//! Type environments and substitution.
//!
//! A [`TypeEnvironment`] maps type-parameter names to argument types. The
//! environment of an instantiated type is built by taking the environment
//! of its captured enclosing type as the base and overlaying the
//! definition's own parameter-to-argument bindings, so inner bindings
//! shadow outer ones.
//!
//! Substitution is best-effort graph rewriting and never fails: a variable
//! with no binding stays as it is, because it may be a method-level type
//! variable that is bound later.

use crate::CodeModel;
use crate::error::KindMismatch;
use crate::types::{TypeData, TypeId, TypeList, WildcardBound};
use codemold_common::Atom;
use rustc_hash::FxHashMap;
use std::rc::Rc;
use tracing::{trace, warn};

/// Immutable mapping from type-parameter name to type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeEnvironment {
    bindings: FxHashMap<Atom, TypeId>,
}

impl TypeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TypeEnvironmentBuilder {
        TypeEnvironmentBuilder {
            bindings: FxHashMap::default(),
        }
    }

    /// Start a builder layered on top of `base`.
    pub fn builder_from(base: &TypeEnvironment) -> TypeEnvironmentBuilder {
        TypeEnvironmentBuilder {
            bindings: base.bindings.clone(),
        }
    }

    pub fn get(&self, name: Atom) -> Option<TypeId> {
        self.bindings.get(&name).copied()
    }

    pub fn contains(&self, name: Atom) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Atom, TypeId)> + '_ {
        self.bindings.iter().map(|(&name, &ty)| (name, ty))
    }
}

pub struct TypeEnvironmentBuilder {
    bindings: FxHashMap<Atom, TypeId>,
}

impl TypeEnvironmentBuilder {
    /// Bind `name`, replacing a binding inherited from the base.
    pub fn put(&mut self, name: Atom, ty: TypeId) -> &mut Self {
        self.bindings.insert(name, ty);
        self
    }

    pub fn build(self) -> TypeEnvironment {
        TypeEnvironment {
            bindings: self.bindings,
        }
    }
}

/// Structural substitution over interned types.
struct TypeSubstituter<'a> {
    model: &'a CodeModel,
    env: &'a TypeEnvironment,
    depth: u32,
    max_depth: u32,
    depth_exceeded: bool,
}

impl<'a> TypeSubstituter<'a> {
    fn new(model: &'a CodeModel, env: &'a TypeEnvironment) -> Self {
        Self {
            model,
            env,
            depth: 0,
            max_depth: model.config().max_substitution_depth,
            depth_exceeded: false,
        }
    }

    fn substitute(&mut self, ty: TypeId) -> TypeId {
        if ty.is_intrinsic() {
            return ty;
        }
        if self.depth >= self.max_depth {
            self.depth_exceeded = true;
            return ty;
        }
        self.depth += 1;
        let result = self.substitute_data(ty);
        self.depth -= 1;
        result
    }

    fn substitute_list(&mut self, list: &TypeList) -> TypeList {
        list.iter().map(|&ty| self.substitute(ty)).collect()
    }

    fn substitute_data(&mut self, ty: TypeId) -> TypeId {
        let model = self.model;
        let types = &model.types;
        match types.lookup(ty) {
            TypeData::Void | TypeData::Primitive(_) => ty,
            TypeData::TypeVariable(name) => self.env.get(name).unwrap_or(ty),
            TypeData::Array(component) => {
                let component = self.substitute(component);
                types.array(component)
            }
            TypeData::Wildcard(bound) => {
                let bound = match bound {
                    WildcardBound::Unbounded => WildcardBound::Unbounded,
                    WildcardBound::Extends(upper) => WildcardBound::Extends(self.substitute(upper)),
                    WildcardBound::Super(lower) => WildcardBound::Super(self.substitute(lower)),
                };
                types.wildcard(bound)
            }
            TypeData::Intersection(components) => {
                let components = self.substitute_list(&components);
                types.intersection(components)
            }
            TypeData::Object(object) => {
                let args = self.substitute_list(&object.args);
                let enclosing = object.enclosing.map(|outer| self.substitute(outer));
                types.object(object.def, args, enclosing, object.narrowed)
            }
            TypeData::Executable(exec) => {
                let args = self.substitute_list(&exec.args);
                let enclosing = exec.enclosing.map(|outer| self.substitute(outer));
                types.executable(exec.exec, args, enclosing, exec.narrowed)
            }
        }
    }
}

impl CodeModel {
    /// Apply `env` to `ty`.
    pub fn substitute(&self, ty: TypeId, env: &TypeEnvironment) -> TypeId {
        if env.is_empty() {
            return ty;
        }
        let mut substituter = TypeSubstituter::new(self, env);
        let result = substituter.substitute(ty);
        if substituter.depth_exceeded {
            warn!(
                type_id = ty.0,
                max_depth = substituter.max_depth,
                "substitution depth limit reached, leaving the rest unsubstituted"
            );
        }
        result
    }

    pub fn substitute_all(&self, types: &[TypeId], env: &TypeEnvironment) -> Vec<TypeId> {
        types.iter().map(|&ty| self.substitute(ty, env)).collect()
    }

    /// Environment binding the type parameters visible in an instantiated
    /// object or executable type.
    ///
    /// Parameters and arguments are consumed pairwise; parameters without a
    /// matching argument (raw applications) stay unbound. Memoized per type.
    pub fn definition_environment(&self, ty: TypeId) -> Result<Rc<TypeEnvironment>, KindMismatch> {
        if let Some(env) = self.caches.environments.borrow().get(&ty) {
            trace!(type_id = ty.0, "definition_environment: cache hit");
            return Ok(Rc::clone(env));
        }

        let application = self.generic_application(ty)?;
        let mut builder = match application.enclosing {
            Some(enclosing) => {
                let base = self.definition_environment(enclosing)?;
                TypeEnvironment::builder_from(&base)
            }
            None => TypeEnvironment::builder(),
        };
        let params = self.defs.type_params(application.owner);
        for (param, &arg) in params.iter().zip(application.args.iter()) {
            builder.put(param.name, arg);
        }
        let env = Rc::new(builder.build());
        trace!(
            type_id = ty.0,
            bindings = env.len(),
            "definition_environment: computed"
        );

        self.caches
            .environments
            .borrow_mut()
            .insert(ty, Rc::clone(&env));
        Ok(env)
    }
}

#[cfg(test)]
#[path = "../tests/environment_tests.rs"]
mod tests;
