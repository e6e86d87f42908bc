//! Declaration builders.
//!
//! Builders are the only way to mutate the definition arena. Each one is a
//! model reference plus the handle of the entry it populates, and its
//! `definition()` view is usable by other builders from the moment it is
//! created. Every precondition is checked before the arena is written, so
//! a failed call leaves the declaration as it was.

mod executable;
mod field;
mod object;

pub use executable::ExecutableBuilder;
pub use field::FieldBuilder;
pub use object::ObjectBuilder;

#[cfg(test)]
#[path = "../../tests/builder_tests.rs"]
mod tests;
