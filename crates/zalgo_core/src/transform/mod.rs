//! Zalgo transformer.
//!
//! # Responsibility
//! - Decorate each non-whitespace character with random combining marks.
//! - Keep every decorated unit within `MAX_UNIT_CHARS`.
//!
//! # Invariants
//! - Output holds exactly one unit per input character, in input order.
//! - Whitespace (and U+001C..=U+001F) is copied through and never decorated.
//! - Categories are applied Above, Middle, Below; disabled ones add nothing.
//! - No shared mutable state: randomness comes from the caller or from a
//!   thread-local generator.

pub mod zalgo;

pub use zalgo::{transform, transform_with_rng, MAX_UNIT_CHARS};
