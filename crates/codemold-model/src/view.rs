//! Read-only definition views.
//!
//! A view is a model reference plus an arena handle. Every accessor reads
//! the live arena entry, so a view obtained right after a builder was
//! created reflects everything added to that builder later. Collections are
//! returned as snapshots taken at the time of the call.

use crate::CodeModel;
use crate::def::{DefId, ExecId, ExecutableKind, FieldId, GenericOwner, ObjectKind, Parameter, TypeParameter};
use crate::error::ModelError;
use crate::residence::Residence;
use crate::types::TypeId;
use std::fmt;
use std::rc::Rc;

macro_rules! view_identity {
    ($view:ident, $id:ty) => {
        impl<'m> $view<'m> {
            pub fn id(&self) -> $id {
                self.id
            }

            pub fn model(&self) -> &'m CodeModel {
                self.model
            }
        }

        impl PartialEq for $view<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id && std::ptr::eq(self.model, other.model)
            }
        }

        impl Eq for $view<'_> {}

        impl fmt::Debug for $view<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($view)).field(&self.id).finish()
            }
        }
    };
}

// =============================================================================
// ObjectDefinition
// =============================================================================

#[derive(Copy, Clone)]
pub struct ObjectDefinition<'m> {
    model: &'m CodeModel,
    id: DefId,
}

view_identity!(ObjectDefinition, DefId);

impl<'m> ObjectDefinition<'m> {
    pub(crate) fn new(model: &'m CodeModel, id: DefId) -> Self {
        Self { model, id }
    }

    pub fn kind(&self) -> ObjectKind {
        self.model.defs.object(self.id).kind
    }

    pub fn simple_name(&self) -> Rc<str> {
        let name = self.model.defs.object(self.id).name;
        self.model.names.resolve(name)
    }

    pub fn qualified_name(&self) -> String {
        self.model.qualified_name(self.id)
    }

    pub fn is_final(&self) -> bool {
        self.model.defs.object(self.id).is_final
    }

    pub fn residence(&self) -> Residence {
        self.model.residence(self.id)
    }

    /// Definition this one is nested in.
    pub fn enclosing_definition(&self) -> Option<ObjectDefinition<'m>> {
        self.residence()
            .nesting()
            .map(|nesting| ObjectDefinition::new(self.model, nesting.parent))
    }

    pub fn type_parameters(&self) -> Vec<TypeParameter> {
        self.model.defs.type_params(GenericOwner::Object(self.id))
    }

    pub fn is_generic(&self) -> bool {
        !self.model.defs.object(self.id).type_params.is_empty()
    }

    /// Superclass as written, `None` when it was never set.
    pub fn declared_superclass(&self) -> Option<TypeId> {
        self.model.defs.object(self.id).extends
    }

    /// Superclass, falling back to `Object`. `Object` itself has none.
    pub fn extends_class(&self) -> Option<TypeId> {
        if self.id == self.model.well_known().object {
            return None;
        }
        Some(
            self.declared_superclass()
                .unwrap_or_else(|| self.model.object_type()),
        )
    }

    pub fn implements_interfaces(&self) -> Vec<TypeId> {
        self.model.defs.object(self.id).implements.clone()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> Vec<FieldDeclaration<'m>> {
        let fields: Vec<FieldId> = self.model.defs.object(self.id).fields.values().copied().collect();
        self.field_views(fields)
    }

    pub fn field(&self, name: &str) -> Option<FieldDeclaration<'m>> {
        let name = self.model.names.get(name)?;
        let id = self.model.defs.object(self.id).fields.get(&name).copied()?;
        Some(FieldDeclaration::new(self.model, id))
    }

    pub fn static_initialization_order(&self) -> Vec<FieldDeclaration<'m>> {
        let fields = self.model.defs.object(self.id).static_init_order.clone();
        self.field_views(fields)
    }

    pub fn instance_initialization_order(&self) -> Vec<FieldDeclaration<'m>> {
        let fields = self.model.defs.object(self.id).instance_init_order.clone();
        self.field_views(fields)
    }

    fn field_views(&self, fields: Vec<FieldId>) -> Vec<FieldDeclaration<'m>> {
        fields
            .into_iter()
            .map(|id| FieldDeclaration::new(self.model, id))
            .collect()
    }

    pub fn methods(&self) -> Vec<ExecutableDefinition<'m>> {
        let methods = self.model.defs.object(self.id).methods.clone();
        methods
            .into_iter()
            .map(|id| ExecutableDefinition::new(self.model, id))
            .collect()
    }

    pub fn constructors(&self) -> Vec<ExecutableDefinition<'m>> {
        let constructors = self.model.defs.object(self.id).constructors.clone();
        constructors
            .into_iter()
            .map(|id| ExecutableDefinition::new(self.model, id))
            .collect()
    }

    pub fn nested_definitions(&self) -> Vec<ObjectDefinition<'m>> {
        let nested: Vec<DefId> = self.model.defs.object(self.id).nested.values().copied().collect();
        nested
            .into_iter()
            .map(|id| ObjectDefinition::new(self.model, id))
            .collect()
    }

    pub fn nested(&self, name: &str) -> Option<ObjectDefinition<'m>> {
        let name = self.model.names.get(name)?;
        let id = self.model.defs.object(self.id).nested.get(&name).copied()?;
        Some(ObjectDefinition::new(self.model, id))
    }

    /// Unparameterized type with no captured enclosing instance.
    ///
    /// For an instance-nested definition this form cannot stand in for a
    /// parent instance; `CodeModel::object_raw_type` with the parent
    /// instance gives the captured one.
    pub fn erasure(&self) -> TypeId {
        self.model.defs.object(self.id).erasure
    }

    pub fn internal_type(&self) -> TypeId {
        self.model.internal_type(self.id)
    }

    pub fn raw_type(&self, parent: Option<TypeId>) -> Result<TypeId, ModelError> {
        self.model.object_raw_type(self.id, parent)
    }
}

// =============================================================================
// ExecutableDefinition
// =============================================================================

#[derive(Copy, Clone)]
pub struct ExecutableDefinition<'m> {
    model: &'m CodeModel,
    id: ExecId,
}

view_identity!(ExecutableDefinition, ExecId);

impl<'m> ExecutableDefinition<'m> {
    pub(crate) fn new(model: &'m CodeModel, id: ExecId) -> Self {
        Self { model, id }
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self.model.defs.executable(self.id).kind, ExecutableKind::Constructor)
    }

    /// Method name; `None` for constructors.
    pub fn name(&self) -> Option<Rc<str>> {
        match self.model.defs.executable(self.id).kind {
            ExecutableKind::Method { name, .. } => Some(self.model.names.resolve(name)),
            ExecutableKind::Constructor => None,
        }
    }

    /// Declared result type; `None` for constructors.
    pub fn result_type(&self) -> Option<TypeId> {
        match self.model.defs.executable(self.id).kind {
            ExecutableKind::Method { result, .. } => Some(result),
            ExecutableKind::Constructor => None,
        }
    }

    pub fn declaring_definition(&self) -> ObjectDefinition<'m> {
        let parent = self.model.defs.executable(self.id).nesting.parent;
        ObjectDefinition::new(self.model, parent)
    }

    pub fn is_static(&self) -> bool {
        self.model.defs.executable(self.id).nesting.is_static
    }

    pub fn type_parameters(&self) -> Vec<TypeParameter> {
        self.model.defs.type_params(GenericOwner::Executable(self.id))
    }

    pub fn parameters(&self) -> Vec<Parameter> {
        self.model.defs.executable(self.id).params.clone()
    }

    pub fn throws_list(&self) -> Vec<TypeId> {
        self.model.defs.executable(self.id).throws.clone()
    }

    pub fn internal_type(&self) -> TypeId {
        self.model.executable_internal_type(self.id)
    }

    pub fn raw_type(&self, parent: Option<TypeId>) -> Result<TypeId, ModelError> {
        self.model.raw_type(self.id, parent)
    }
}

// =============================================================================
// FieldDeclaration
// =============================================================================

#[derive(Copy, Clone)]
pub struct FieldDeclaration<'m> {
    model: &'m CodeModel,
    id: FieldId,
}

view_identity!(FieldDeclaration, FieldId);

impl<'m> FieldDeclaration<'m> {
    pub(crate) fn new(model: &'m CodeModel, id: FieldId) -> Self {
        Self { model, id }
    }

    pub fn name(&self) -> Rc<str> {
        let name = self.model.defs.field(self.id).name;
        self.model.names.resolve(name)
    }

    pub fn type_id(&self) -> TypeId {
        self.model.defs.field(self.id).type_id
    }

    pub fn is_final(&self) -> bool {
        self.model.defs.field(self.id).is_final
    }

    pub fn is_static(&self) -> bool {
        self.model.defs.field(self.id).nesting.is_static
    }

    pub fn declaring_definition(&self) -> ObjectDefinition<'m> {
        let parent = self.model.defs.field(self.id).nesting.parent;
        ObjectDefinition::new(self.model, parent)
    }

    /// Field type as seen from `parent`.
    pub fn type_in(&self, parent: Option<TypeId>) -> Result<TypeId, ModelError> {
        self.model.field_type_in(self.id, parent)
    }
}

impl CodeModel {
    pub fn definition(&self, def: DefId) -> ObjectDefinition<'_> {
        ObjectDefinition::new(self, def)
    }

    pub fn executable(&self, exec: ExecId) -> ExecutableDefinition<'_> {
        ExecutableDefinition::new(self, exec)
    }

    pub fn field(&self, field: FieldId) -> FieldDeclaration<'_> {
        FieldDeclaration::new(self, field)
    }
}

#[cfg(test)]
#[path = "../tests/view_tests.rs"]
mod tests;
