use super::{ExecutableBuilder, FieldBuilder};
use crate::CodeModel;
use crate::config::FinalSuperclassPolicy;
use crate::def::{DefId, ExecutableInfo, ExecutableKind, FieldInfo, GenericOwner, ObjectKind};
use crate::error::StructuralError;
use crate::residence::{Nesting, Residence};
use crate::types::{TypeId, TypePosition};
use crate::view::ObjectDefinition;
use tracing::debug;

/// Builder for a class, interface, enum or annotation declaration.
pub struct ObjectBuilder<'m> {
    model: &'m CodeModel,
    id: DefId,
}

impl<'m> ObjectBuilder<'m> {
    pub(crate) fn new(model: &'m CodeModel, id: DefId) -> Self {
        Self { model, id }
    }

    pub fn id(&self) -> DefId {
        self.id
    }

    pub fn model(&self) -> &'m CodeModel {
        self.model
    }

    /// Live view of the declaration being built.
    pub fn definition(&self) -> ObjectDefinition<'m> {
        ObjectDefinition::new(self.model, self.id)
    }

    /// Unparameterized type with no captured enclosing instance.
    ///
    /// For an instance-nested definition this form cannot stand in for a
    /// parent instance; `CodeModel::object_raw_type` with the parent
    /// instance gives the captured one.
    pub fn erasure(&self) -> TypeId {
        self.model.defs.object(self.id).erasure
    }

    /// This declaration narrowed with its own type variables.
    pub fn internal_type(&self) -> TypeId {
        self.model.internal_type(self.id)
    }

    fn kind(&self) -> ObjectKind {
        self.model.defs.object(self.id).kind
    }

    fn owner_name(&self) -> String {
        self.model.qualified_name(self.id)
    }

    pub fn set_final(&mut self, is_final: bool) -> Result<(), StructuralError> {
        if !matches!(self.kind(), ObjectKind::Class | ObjectKind::Enum) {
            return Err(StructuralError::NotApplicable {
                owner: self.owner_name(),
                what: "the final modifier",
            });
        }
        self.model.defs.object_mut(self.id).is_final = is_final;
        Ok(())
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
            .add_type_parameter(GenericOwner::Object(self.id), name, bounds)
    }

    /// Bound a type parameter declared earlier on this definition.
    pub fn add_type_parameter_bound(
        &mut self,
        name: &str,
        bound: TypeId,
    ) -> Result<(), StructuralError> {
        self.model
            .add_type_parameter_bound(GenericOwner::Object(self.id), name, bound)
    }

    // =========================================================================
    // Supertypes
    // =========================================================================

    pub fn extends_class(&mut self, ty: TypeId) -> Result<(), StructuralError> {
        let model = self.model;
        let existing = model.defs.object(self.id).extends;
        if let Some(existing) = existing {
            return Err(StructuralError::SuperclassAlreadySet {
                owner: self.owner_name(),
                existing: model.display_type(existing),
            });
        }
        if !self.kind().is_class() {
            return Err(StructuralError::NotApplicable {
                owner: self.owner_name(),
                what: "an extends-class clause",
            });
        }
        let target = self.supertype_definition(ty)?;
        let (target_kind, target_final) = {
            let info = model.defs.object(target);
            (info.kind, info.is_final)
        };
        if !target_kind.is_class() {
            return Err(self.invalid_supertype(ty, "it does not denote a class"));
        }
        match model.config().final_superclass_policy {
            FinalSuperclassPolicy::RejectFinal if target_final => {
                return Err(StructuralError::FinalSuperclass {
                    owner: self.owner_name(),
                    superclass: model.display_type(ty),
                });
            }
            FinalSuperclassPolicy::RequireFinal if !target_final => {
                return Err(StructuralError::NonFinalSuperclass {
                    owner: self.owner_name(),
                    superclass: model.display_type(ty),
                });
            }
            _ => {}
        }
        self.check_no_wildcards(ty, "extends")?;

        debug!(def_id = self.id.0, superclass = ty.0, "ObjectBuilder::extends_class");
        model.defs.object_mut(self.id).extends = Some(ty);
        Ok(())
    }

    pub fn implements_interface(&mut self, ty: TypeId) -> Result<(), StructuralError> {
        let model = self.model;
        if self.kind() == ObjectKind::Annotation {
            return Err(StructuralError::NotApplicable {
                owner: self.owner_name(),
                what: "an implements clause",
            });
        }
        let target = self.supertype_definition(ty)?;
        if !model.defs.object(target).kind.is_interface() {
            return Err(self.invalid_supertype(ty, "it does not denote an interface"));
        }
        self.check_no_wildcards(ty, "implements")?;

        let mut info = model.defs.object_mut(self.id);
        if !info.implements.contains(&ty) {
            debug!(def_id = self.id.0, interface = ty.0, "ObjectBuilder::implements_interface");
            info.implements.push(ty);
        }
        Ok(())
    }

    fn supertype_definition(&self, ty: TypeId) -> Result<DefId, StructuralError> {
        self.model
            .types
            .as_object(ty)
            .map(|object| object.def)
            .ok_or_else(|| self.invalid_supertype(ty, "it is not an object type"))
    }

    fn invalid_supertype(&self, ty: TypeId, reason: &'static str) -> StructuralError {
        StructuralError::InvalidSupertype {
            owner: self.owner_name(),
            ty: self.model.display_type(ty),
            reason,
        }
    }

    fn check_no_wildcards(&self, ty: TypeId, clause: &'static str) -> Result<(), StructuralError> {
        if self.model.contains_wildcards(ty) {
            return Err(StructuralError::WildcardInSupertype {
                owner: self.owner_name(),
                clause,
                ty: self.model.display_type(ty),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Members
    // =========================================================================

    pub fn field(&mut self, ty: TypeId, name: &str) -> Result<FieldBuilder<'m>, StructuralError> {
        self.add_field(ty, name, false)
    }

    pub fn static_field(
        &mut self,
        ty: TypeId,
        name: &str,
    ) -> Result<FieldBuilder<'m>, StructuralError> {
        self.add_field(ty, name, true)
    }

    fn add_field(
        &mut self,
        ty: TypeId,
        name: &str,
        is_static: bool,
    ) -> Result<FieldBuilder<'m>, StructuralError> {
        let model = self.model;
        let atom = model.names.intern(name);
        if model.defs.object(self.id).fields.contains_key(&atom) {
            return Err(StructuralError::DuplicateName {
                owner: self.owner_name(),
                name: name.to_string(),
            });
        }
        model.check_placement(ty, TypePosition::Field)?;

        let field = model.defs.register_field(FieldInfo {
            name: atom,
            type_id: ty,
            is_final: false,
            nesting: Nesting::new(self.id, is_static),
        });
        let mut info = model.defs.object_mut(self.id);
        info.fields.insert(atom, field);
        if is_static {
            info.static_init_order.push(field);
        } else {
            info.instance_init_order.push(field);
        }
        Ok(FieldBuilder::new(model, field))
    }

    pub fn method(&mut self, name: &str) -> ExecutableBuilder<'m> {
        self.add_method(name, false)
    }

    pub fn static_method(&mut self, name: &str) -> ExecutableBuilder<'m> {
        self.add_method(name, true)
    }

    fn add_method(&mut self, name: &str, is_static: bool) -> ExecutableBuilder<'m> {
        let name = self.model.names.intern(name);
        let kind = ExecutableKind::Method {
            name,
            result: TypeId::VOID,
        };
        let exec = self.register_executable(kind, is_static);
        self.model.defs.object_mut(self.id).methods.push(exec.id());
        exec
    }

    pub fn add_constructor(&mut self) -> Result<ExecutableBuilder<'m>, StructuralError> {
        if !matches!(self.kind(), ObjectKind::Class | ObjectKind::Enum) {
            return Err(StructuralError::NotApplicable {
                owner: self.owner_name(),
                what: "a constructor",
            });
        }
        let exec = self.register_executable(ExecutableKind::Constructor, false);
        self.model
            .defs
            .object_mut(self.id)
            .constructors
            .push(exec.id());
        Ok(exec)
    }

    fn register_executable(&self, kind: ExecutableKind, is_static: bool) -> ExecutableBuilder<'m> {
        let model = self.model;
        let param_scope = model.scopes.create_top_level();
        let body_scope = model.scopes.create_nested(param_scope);
        let id = model.defs.register_executable(ExecutableInfo {
            kind,
            nesting: Nesting::new(self.id, is_static),
            type_params: Vec::new(),
            params: Vec::new(),
            throws: Vec::new(),
            param_scope,
            body_scope,
        });
        ExecutableBuilder::new(model, id)
    }

    // =========================================================================
    // Nested declarations
    // =========================================================================

    /// Nested declaration without an enclosing instance.
    pub fn static_nested_class(
        &mut self,
        kind: ObjectKind,
        name: &str,
    ) -> Result<ObjectBuilder<'m>, StructuralError> {
        self.add_nested(kind, name, true)
    }

    /// Nested class bound to an instance of this declaration. Only classes
    /// can be nested this way.
    pub fn inner_class(
        &mut self,
        kind: ObjectKind,
        name: &str,
    ) -> Result<ObjectBuilder<'m>, StructuralError> {
        self.add_nested(kind, name, false)
    }

    fn add_nested(
        &mut self,
        kind: ObjectKind,
        name: &str,
        is_static: bool,
    ) -> Result<ObjectBuilder<'m>, StructuralError> {
        let model = self.model;
        let atom = model.names.intern(name);
        if model.defs.object(self.id).nested.contains_key(&atom) {
            return Err(StructuralError::DuplicateName {
                owner: self.owner_name(),
                name: name.to_string(),
            });
        }
        if !is_static && kind.requires_static_nesting() {
            return Err(StructuralError::NonStaticNestedType {
                owner: self.owner_name(),
                name: name.to_string(),
                kind,
            });
        }
        if !is_static && !matches!(self.kind(), ObjectKind::Class | ObjectKind::Enum) {
            return Err(StructuralError::NotApplicable {
                owner: self.owner_name(),
                what: "an inner class",
            });
        }

        let nested = model.register_definition(
            kind,
            atom,
            Residence::Nested(Nesting::new(self.id, is_static)),
        );
        model.defs.object_mut(self.id).nested.insert(atom, nested);
        debug!(
            parent = self.id.0,
            def_id = nested.0,
            is_static,
            "ObjectBuilder::add_nested"
        );
        Ok(ObjectBuilder::new(model, nested))
    }
}
