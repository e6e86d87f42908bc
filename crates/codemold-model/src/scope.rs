//! Variable-naming scopes.
//!
//! Each executable owns a parameter scope and a body scope nested in it.
//! Proposed names are made introducable by appending the smallest numeric
//! suffix that is free in the whole scope chain, so generated code can
//! propose natural names without deduplicating them itself.

use codemold_common::limits::MAX_RENAME_ATTEMPTS;
use codemold_common::{Atom, Interner};
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use tracing::{trace, warn};

/// Reserved words of the host language plus the literal keywords.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

#[derive(Debug, Default)]
struct ScopeData {
    parent: Option<ScopeId>,
    names: FxHashSet<Atom>,
}

#[derive(Debug, Default)]
pub struct ScopeArena {
    scopes: RefCell<Vec<ScopeData>>,
}

impl ScopeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_top_level(&self) -> ScopeId {
        self.push(None)
    }

    pub fn create_nested(&self, parent: ScopeId) -> ScopeId {
        self.push(Some(parent))
    }

    fn push(&self, parent: Option<ScopeId>) -> ScopeId {
        let mut scopes = self.scopes.borrow_mut();
        let id = ScopeId(scopes.len() as u32);
        scopes.push(ScopeData {
            parent,
            names: FxHashSet::default(),
        });
        id
    }

    /// Whether `name` is introduced in `scope` or any enclosing scope.
    pub fn is_introduced(&self, scope: ScopeId, name: Atom) -> bool {
        let scopes = self.scopes.borrow();
        let mut current = Some(scope);
        while let Some(id) = current {
            let data = &scopes[id.0 as usize];
            if data.names.contains(&name) {
                return true;
            }
            current = data.parent;
        }
        false
    }

    pub fn introduce(&self, scope: ScopeId, name: Atom) {
        self.scopes.borrow_mut()[scope.0 as usize].names.insert(name);
    }

    /// Find a variant of `proposed` that can be introduced in `scope`.
    ///
    /// The proposed name itself is returned when free; otherwise `name1`,
    /// `name2`, ... are tried in order. Past `MAX_RENAME_ATTEMPTS` the search
    /// keeps going with a warning, so the result is always free. Reserved
    /// words count as taken when `avoid_reserved` is set.
    pub fn make_introducable(
        &self,
        names: &Interner,
        scope: ScopeId,
        proposed: &str,
        avoid_reserved: bool,
    ) -> Atom {
        let is_free = |candidate: &str| {
            if avoid_reserved && is_reserved_word(candidate) {
                return None;
            }
            let atom = names.intern(candidate);
            (!self.is_introduced(scope, atom)).then_some(atom)
        };

        if let Some(atom) = is_free(proposed) {
            return atom;
        }
        for suffix in 1..MAX_RENAME_ATTEMPTS {
            let candidate = format!("{proposed}{suffix}");
            if let Some(atom) = is_free(&candidate) {
                trace!(proposed, renamed = %candidate, "ScopeArena::make_introducable");
                return atom;
            }
        }
        warn!(
            proposed,
            attempts = MAX_RENAME_ATTEMPTS,
            "rename attempt limit reached, continuing past it"
        );
        let mut suffix = MAX_RENAME_ATTEMPTS;
        loop {
            let candidate = format!("{proposed}{suffix}");
            if let Some(atom) = is_free(&candidate) {
                return atom;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/scope_tests.rs"]
mod tests;
