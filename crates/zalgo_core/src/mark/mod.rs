//! Combining-mark catalog grouped by placement.
//!
//! # Responsibility
//! - Own the three static mark tables used by the transformer.
//! - Map a placement category to its table and intensity multiplier.
//!
//! # Invariants
//! - The three tables are disjoint and never empty.
//! - Every entry is a single combining code point, never whitespace.

pub mod catalog;

pub use catalog::{category_of, MarkCategory};
