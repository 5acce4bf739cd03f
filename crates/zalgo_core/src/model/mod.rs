//! Request-side model for the transformer.
//!
//! # Responsibility
//! - Normalize caller-supplied intensity into a bounded value.
//! - Bundle the per-category toggles that shape one transform call.
//!
//! # Invariants
//! - An `Intensity` is always within `[Intensity::MIN, Intensity::MAX]`.
//! - Options are plain values; nothing here is persisted or shared.

pub mod options;
