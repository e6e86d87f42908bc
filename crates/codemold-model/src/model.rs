//! The construction-session root.
//!
//! A [`CodeModel`] owns every arena of one session: names, types,
//! declarations, variable scopes and the memo caches of member-type
//! queries. Builders and definition views borrow it, so any number of
//! builders can be alive at once and refer to each other's definitions.

use crate::builder::ObjectBuilder;
use crate::config::ModelConfig;
use crate::def::{DefId, DefinitionStore, ObjectDefinitionInfo, ObjectKind, PackageId};
use crate::error::StructuralError;
use crate::intern::TypeInterner;
use crate::member_types::MemberTypeCache;
use crate::residence::Residence;
use crate::scope::ScopeArena;
use crate::types::{TypeData, TypeId, TypeKind, TypePosition};
use codemold_common::{Atom, Interner};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

#[derive(Default)]
struct PackageTable {
    names: Vec<Atom>,
    by_name: FxHashMap<Atom, PackageId>,
    top_level: FxHashMap<(PackageId, Atom), DefId>,
}

/// Definitions every model starts with.
#[derive(Copy, Clone, Debug)]
pub struct WellKnownDefs {
    pub java_lang: PackageId,
    /// Implicit top type and root of the class hierarchy.
    pub object: DefId,
    pub string: DefId,
    pub throwable: DefId,
    pub exception: DefId,
    pub runtime_exception: DefId,
}

pub struct CodeModel {
    config: ModelConfig,
    pub(crate) names: Interner,
    pub(crate) types: TypeInterner,
    pub(crate) defs: DefinitionStore,
    pub(crate) scopes: ScopeArena,
    pub(crate) caches: MemberTypeCache,
    packages: RefCell<PackageTable>,
    well_known: WellKnownDefs,
}

impl CodeModel {
    pub fn new() -> Self {
        Self::with_config(ModelConfig::default())
    }

    pub fn with_config(config: ModelConfig) -> Self {
        let names = Interner::new();
        let types = TypeInterner::new();
        let defs = DefinitionStore::new();
        let mut packages = PackageTable::default();

        let java_lang = intern_package(&mut packages, names.intern("java.lang"));
        let mut register = |name: &str, is_final: bool, extends: Option<TypeId>| {
            let name = names.intern(name);
            let id = defs.next_object_id();
            let erasure = types.object(id, Default::default(), None, false);
            let mut info = ObjectDefinitionInfo::new(
                ObjectKind::Class,
                name,
                Residence::TopLevel { package: java_lang },
                erasure,
            );
            info.is_final = is_final;
            info.extends = extends;
            packages.top_level.insert((java_lang, name), id);
            (defs.register_object(info), erasure)
        };
        let (object, _) = register("Object", false, None);
        let (string, _) = register("String", true, None);
        let (throwable, throwable_type) = register("Throwable", false, None);
        let (exception, exception_type) = register("Exception", false, Some(throwable_type));
        let (runtime_exception, _) = register("RuntimeException", false, Some(exception_type));

        debug!(
            policy = ?config.final_superclass_policy,
            max_substitution_depth = config.max_substitution_depth,
            "CodeModel::with_config"
        );
        Self {
            config,
            names,
            types,
            defs,
            scopes: ScopeArena::new(),
            caches: MemberTypeCache::default(),
            packages: RefCell::new(packages),
            well_known: WellKnownDefs {
                java_lang,
                object,
                string,
                throwable,
                exception,
                runtime_exception,
            },
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn well_known(&self) -> WellKnownDefs {
        self.well_known
    }

    // =========================================================================
    // Names
    // =========================================================================

    pub fn intern(&self, text: &str) -> Atom {
        self.names.intern(text)
    }

    pub fn name(&self, atom: Atom) -> Rc<str> {
        self.names.resolve(atom)
    }

    // =========================================================================
    // Packages and top-level definitions
    // =========================================================================

    pub fn package(&self, name: &str) -> PackageId {
        let name = self.names.intern(name);
        intern_package(&mut self.packages.borrow_mut(), name)
    }

    pub fn default_package(&self) -> PackageId {
        self.package(&self.config.default_package)
    }

    pub fn package_name(&self, package: PackageId) -> Rc<str> {
        let atom = self
            .packages
            .borrow()
            .names
            .get(package.0 as usize)
            .copied()
            .unwrap_or(Atom::EMPTY);
        self.names.resolve(atom)
    }

    pub fn find_top_level(&self, package: PackageId, name: &str) -> Option<DefId> {
        let name = self.names.get(name)?;
        self.packages.borrow().top_level.get(&(package, name)).copied()
    }

    /// Start a top-level definition in `package`.
    pub fn top_level(
        &self,
        package: PackageId,
        kind: ObjectKind,
        name: &str,
    ) -> Result<ObjectBuilder<'_>, StructuralError> {
        let atom = self.names.intern(name);
        if self.packages.borrow().top_level.contains_key(&(package, atom)) {
            return Err(StructuralError::DuplicateName {
                owner: self.package_name(package).to_string(),
                name: name.to_string(),
            });
        }
        let id = self.register_definition(kind, atom, Residence::TopLevel { package });
        self.packages
            .borrow_mut()
            .top_level
            .insert((package, atom), id);
        Ok(ObjectBuilder::new(self, id))
    }

    /// Start a top-level class in the default package.
    pub fn class(&self, name: &str) -> Result<ObjectBuilder<'_>, StructuralError> {
        self.top_level(self.default_package(), ObjectKind::Class, name)
    }

    /// Start a top-level interface in the default package.
    pub fn interface(&self, name: &str) -> Result<ObjectBuilder<'_>, StructuralError> {
        self.top_level(self.default_package(), ObjectKind::Interface, name)
    }

    pub(crate) fn register_definition(
        &self,
        kind: ObjectKind,
        name: Atom,
        residence: Residence,
    ) -> DefId {
        let id = self.defs.next_object_id();
        let erasure = self.types.object(id, Default::default(), None, false);
        let registered = self
            .defs
            .register_object(ObjectDefinitionInfo::new(kind, name, residence, erasure));
        debug_assert_eq!(registered, id);
        id
    }

    /// `package.Outer.Inner` form of a definition's name.
    pub fn qualified_name(&self, def: DefId) -> String {
        let (name, residence) = {
            let info = self.defs.object(def);
            (info.name, info.residence)
        };
        let simple = self.names.resolve(name);
        match residence {
            Residence::TopLevel { package } => {
                let package = self.package_name(package);
                if package.is_empty() {
                    simple.to_string()
                } else {
                    format!("{package}.{simple}")
                }
            }
            Residence::Nested(nesting) => {
                format!("{}.{simple}", self.qualified_name(nesting.parent))
            }
        }
    }

    // =========================================================================
    // Types
    // =========================================================================

    pub fn types(&self) -> &TypeInterner {
        &self.types
    }

    pub fn lookup(&self, ty: TypeId) -> TypeData {
        self.types.lookup(ty)
    }

    pub fn kind(&self, ty: TypeId) -> TypeKind {
        self.types.kind(ty)
    }

    /// Erasure of `java.lang.Object`.
    pub fn object_type(&self) -> TypeId {
        self.defs.object(self.well_known.object).erasure
    }

    /// Erasure of `java.lang.String`.
    pub fn string_type(&self) -> TypeId {
        self.defs.object(self.well_known.string).erasure
    }

    /// Fail unless `ty` may appear in `position`.
    pub(crate) fn check_placement(
        &self,
        ty: TypeId,
        position: TypePosition,
    ) -> Result<(), StructuralError> {
        let kind = self.kind(ty);
        if position.admits(kind) {
            Ok(())
        } else {
            Err(StructuralError::IllegalTypePlacement {
                position,
                kind,
                ty: self.display_type(ty),
            })
        }
    }
}

impl Default for CodeModel {
    fn default() -> Self {
        Self::new()
    }
}

fn intern_package(packages: &mut PackageTable, name: Atom) -> PackageId {
    if let Some(&id) = packages.by_name.get(&name) {
        return id;
    }
    let id = PackageId(packages.names.len() as u32);
    packages.names.push(name);
    packages.by_name.insert(name, id);
    id
}

#[cfg(test)]
#[path = "../tests/model_tests.rs"]
mod tests;
