//! Where a declaration lives.
//!
//! A declaration is either top-level in a package or nested in an object
//! definition. Nesting is static (no enclosing instance) or instance-bound;
//! only instance-bound nesting captures the enclosing definition's type
//! parameters. This is the single place that distinction is decided.

use crate::CodeModel;
use crate::def::{DefId, GenericOwner, PackageId, TypeParameter};
use codemold_common::Atom;

/// Membership of a nested declaration or of a member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Nesting {
    pub parent: DefId,
    pub is_static: bool,
}

impl Nesting {
    pub const fn new(parent: DefId, is_static: bool) -> Self {
        Self { parent, is_static }
    }

    /// Whether the enclosing definition's type parameters are in scope.
    pub const fn captures_enclosing(self) -> bool {
        !self.is_static
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Residence {
    TopLevel { package: PackageId },
    Nested(Nesting),
}

impl Residence {
    pub const fn is_nested(self) -> bool {
        matches!(self, Self::Nested(_))
    }

    pub const fn nesting(self) -> Option<Nesting> {
        match self {
            Self::TopLevel { .. } => None,
            Self::Nested(nesting) => Some(nesting),
        }
    }

    /// Parent whose instance this declaration depends on, if any.
    pub const fn captured_parent(self) -> Option<DefId> {
        match self {
            Self::Nested(Nesting {
                parent,
                is_static: false,
            }) => Some(parent),
            _ => None,
        }
    }

    /// True for top-level declarations and static members.
    pub const fn is_static_context(self) -> bool {
        self.captured_parent().is_none()
    }
}

impl CodeModel {
    /// Residence of an object definition.
    pub fn residence(&self, def: DefId) -> Residence {
        self.defs.object(def).residence
    }

    /// The definition whose instance a generic owner captures, if any.
    pub(crate) fn captured_parent_of(&self, owner: GenericOwner) -> Option<DefId> {
        match owner {
            GenericOwner::Object(def) => self.residence(def).captured_parent(),
            GenericOwner::Executable(exec) => {
                let nesting = self.defs.executable(exec).nesting;
                nesting.captures_enclosing().then_some(nesting.parent)
            }
        }
    }

    /// Type parameters visible from inside `owner`, innermost first.
    ///
    /// Walks the owner's own list, then the enclosing definitions' lists,
    /// stopping at the first static residence edge. Shadowed names appear
    /// more than once; the first occurrence wins.
    pub fn visible_type_parameters(&self, owner: GenericOwner) -> Vec<(GenericOwner, TypeParameter)> {
        let mut out = Vec::new();
        let mut current = Some(owner);
        while let Some(owner) = current {
            out.extend(
                self.defs
                    .type_params(owner)
                    .into_iter()
                    .map(|param| (owner, param)),
            );
            current = self.captured_parent_of(owner).map(GenericOwner::Object);
        }
        out
    }

    /// Resolve a type-variable name from inside `owner`.
    ///
    /// Returns the declaring owner and the parameter's index in its list.
    pub fn lookup_type_parameter(&self, owner: GenericOwner, name: &str) -> Option<(GenericOwner, usize)> {
        let name: Atom = self.names.get(name)?;
        let mut current = Some(owner);
        while let Some(owner) = current {
            if let Some(index) = self
                .defs
                .type_params(owner)
                .iter()
                .position(|param| param.name == name)
            {
                return Some((owner, index));
            }
            current = self.captured_parent_of(owner).map(GenericOwner::Object);
        }
        None
    }
}

#[cfg(test)]
#[path = "../tests/residence_tests.rs"]
mod tests;
