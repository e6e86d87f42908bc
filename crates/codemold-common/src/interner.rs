//! String interning for declaration, parameter and type-variable names.
//!
//! Names travel through the model as [`Atom`]s: comparing two names is a
//! `u32` comparison and type data that mentions names stays `Copy + Hash`.
//!
//! The interner is owned by a single construction session and uses interior
//! mutability so that interning only needs `&self`.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Interned string handle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// The empty string, pre-registered by every interner.
    pub const EMPTY: Self = Self(0);

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({})", self.0)
    }
}

#[derive(Default)]
struct InternerState {
    strings: Vec<Rc<str>>,
    lookup: FxHashMap<Rc<str>, Atom>,
}

/// Session-local string interner.
pub struct Interner {
    state: RefCell<InternerState>,
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl Interner {
    pub fn new() -> Self {
        let interner = Self {
            state: RefCell::new(InternerState::default()),
        };
        let empty = interner.intern("");
        debug_assert_eq!(empty, Atom::EMPTY);
        interner
    }

    /// Intern `text`, returning the existing atom when it was seen before.
    pub fn intern(&self, text: &str) -> Atom {
        let mut state = self.state.borrow_mut();
        if let Some(&atom) = state.lookup.get(text) {
            return atom;
        }
        let atom = Atom(state.strings.len() as u32);
        let shared: Rc<str> = Rc::from(text);
        state.strings.push(Rc::clone(&shared));
        state.lookup.insert(shared, atom);
        atom
    }

    /// Look up `text` without interning it.
    pub fn get(&self, text: &str) -> Option<Atom> {
        self.state.borrow().lookup.get(text).copied()
    }

    /// Resolve an atom back to its text.
    ///
    /// Atoms from a different interner resolve to the empty string.
    pub fn resolve(&self, atom: Atom) -> Rc<str> {
        self.state
            .borrow()
            .strings
            .get(atom.index())
            .cloned()
            .unwrap_or_else(|| Rc::from(""))
    }

    pub fn len(&self) -> usize {
        self.state.borrow().strings.len()
    }

    pub fn is_empty(&self) -> bool {
        // The empty string is always present.
        self.len() <= 1
    }
}

impl fmt::Debug for Interner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interner")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod tests;
