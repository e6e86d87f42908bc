use crate::CodeModel;
use crate::def::{ExecId, ExecutableKind, GenericOwner, Parameter};
use crate::error::StructuralError;
use crate::scope::ScopeId;
use crate::types::{TypeId, TypePosition};
use crate::view::ExecutableDefinition;
use codemold_common::Atom;
use tracing::trace;

/// Builder for a method or constructor.
pub struct ExecutableBuilder<'m> {
    model: &'m CodeModel,
    id: ExecId,
}

impl<'m> ExecutableBuilder<'m> {
    pub(crate) fn new(model: &'m CodeModel, id: ExecId) -> Self {
        Self { model, id }
    }

    pub fn id(&self) -> ExecId {
        self.id
    }

    pub fn definition(&self) -> ExecutableDefinition<'m> {
        ExecutableDefinition::new(self.model, self.id)
    }

    fn owner_name(&self) -> String {
        self.model.executable_name(self.id)
    }

    pub fn type_parameter(&mut self, name: &str) -> Result<TypeId, StructuralError> {
        self.type_parameter_bounded(name, &[])
    }

    pub fn type_parameter_bounded(
        &mut self,
        name: &str,
        bounds: &[TypeId],
    ) -> Result<TypeId, StructuralError> {
        self.model
            .add_type_parameter(GenericOwner::Executable(self.id), name, bounds)
    }

    pub fn add_type_parameter_bound(
        &mut self,
        name: &str,
        bound: TypeId,
    ) -> Result<(), StructuralError> {
        self.model
            .add_type_parameter_bound(GenericOwner::Executable(self.id), name, bound)
    }

    pub fn add_parameter(&mut self, ty: TypeId, name: &str) -> Result<Parameter, StructuralError> {
        self.push_parameter(ty, name, false)
    }

    pub fn add_final_parameter(
        &mut self,
        ty: TypeId,
        name: &str,
    ) -> Result<Parameter, StructuralError> {
        self.push_parameter(ty, name, true)
    }

    /// Append a parameter, renaming `name` if it is already taken in the
    /// parameter scope.
    fn push_parameter(
        &mut self,
        ty: TypeId,
        name: &str,
        is_final: bool,
    ) -> Result<Parameter, StructuralError> {
        self.model.check_placement(ty, TypePosition::Parameter)?;
        let scope = self.model.defs.executable(self.id).param_scope;
        let name = self.introduce(scope, name);
        let parameter = Parameter {
            name,
            type_id: ty,
            is_final,
        };
        self.model
            .defs
            .executable_mut(self.id)
            .params
            .push(parameter);
        Ok(parameter)
    }

    fn introduce(&self, scope: ScopeId, proposed: &str) -> Atom {
        let model = self.model;
        let name = model.scopes.make_introducable(
            &model.names,
            scope,
            proposed,
            model.config().reject_reserved_words,
        );
        model.scopes.introduce(scope, name);
        trace!(exec_id = self.id.0, proposed, "ExecutableBuilder::introduce");
        name
    }

    /// Declare a local in the body scope and return the name it got.
    pub fn introduce_local(&mut self, name: &str) -> Atom {
        let scope = self.model.defs.executable(self.id).body_scope;
        self.introduce(scope, name)
    }

    pub fn throws_exception(&mut self, ty: TypeId) -> Result<(), StructuralError> {
        let model = self.model;
        let Some(object) = model.types.as_object(ty) else {
            return Err(StructuralError::NonObjectThrowable {
                owner: self.owner_name(),
                ty: model.display_type(ty),
            });
        };
        if !model.defs.object(object.def).type_params.is_empty() {
            return Err(StructuralError::GenericThrowable {
                owner: self.owner_name(),
                ty: model.display_type(ty),
            });
        }
        let mut info = model.defs.executable_mut(self.id);
        if !info.throws.contains(&ty) {
            info.throws.push(ty);
        }
        Ok(())
    }

    /// Set a method's result type. The default is `void`.
    pub fn set_result_type(&mut self, ty: TypeId) -> Result<(), StructuralError> {
        let model = self.model;
        if matches!(model.defs.executable(self.id).kind, ExecutableKind::Constructor) {
            return Err(StructuralError::NotApplicable {
                owner: self.owner_name(),
                what: "a result type",
            });
        }
        model.check_placement(ty, TypePosition::MethodResult)?;
        if let ExecutableKind::Method { result, .. } = &mut model.defs.executable_mut(self.id).kind {
            *result = ty;
        }
        Ok(())
    }

    /// The executable narrowed with its own type variables.
    pub fn internal_type(&self) -> TypeId {
        self.model.executable_internal_type(self.id)
    }
}
