//! Common types and utilities for the codemold declaration model.
//!
//! This crate provides foundational pieces used by `codemold-model`:
//! - String interning for declaration and variable names (`Atom`, `Interner`)
//! - Centralized recursion and iteration limits

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Centralized limits and thresholds
pub mod limits;
