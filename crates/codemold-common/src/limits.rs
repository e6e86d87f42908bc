//! Centralized limits and thresholds for the declaration model.
//!
//! Graph-walking algorithms in the model only recurse along type-argument
//! and bound edges, which are finite for well-formed declarations. These
//! limits catch the malformed cases (a type argument that mentions itself
//! through a chain of captured enclosing types, a superclass cycle built by
//! hand) and turn them into a bounded bail-out instead of a stack overflow.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum depth for type substitution.
///
/// Substitution recurses into type arguments, array components, wildcard
/// bounds, intersection components and captured enclosing types. When this
/// depth is exceeded the substituter stops and returns the partially
/// substituted type unchanged from that point down.
///
/// # Java example
///
/// ```java
/// // Each level of nesting adds one level of substitution recursion:
/// Map<String, List<Map<String, List<Optional<T>>>>> deep;
///
/// // An inner class of an inner class of a generic outer class captures
/// // every enclosing instance type in turn:
/// Outer<String>.Middle<Integer>.Inner<T> chain;
/// ```
pub const MAX_SUBSTITUTION_DEPTH: u32 = 64;

// =============================================================================
// Operation Count Limits
// =============================================================================

/// Maximum number of definitions visited while walking a supertype graph.
///
/// Used by the bound check performed during narrowing: the argument's
/// superclass and interfaces are followed breadth-first until the bound's
/// definition is found. A visited set already prevents revisiting; this
/// limit bounds pathological hierarchies.
///
/// # Java example
///
/// ```java
/// class Box<T extends Comparable<T>> {}
/// // Narrowing Box<Money> walks Money -> Number -> Object plus every
/// // interface on the way, looking for Comparable.
/// ```
pub const MAX_SUPERTYPE_WALK: usize = 10_000;

/// Number of numeric suffixes tried when making a variable name
/// introducable in a scope before a warning is logged. The search continues
/// past it until a free name is found.
///
/// # Java example
///
/// ```java
/// // Proposed name `value` collides, so the scope tries value1, value2, ...
/// void set(int value, int value1, int value2) {}
/// ```
pub const MAX_RENAME_ATTEMPTS: u32 = 100_000;
