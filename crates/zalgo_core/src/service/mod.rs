//! Use-case services behind the web form and JSON API.
//!
//! # Responsibility
//! - Turn loosely-typed form/JSON input into `TransformOptions`.
//! - Recover locally from malformed density values.
//! - Hide internal failure detail from API callers.
//!
//! # Invariants
//! - Services never panic on user input.
//! - Log events carry character counts only, never user text.

pub mod api_service;
pub mod form_service;

/// Parses a real number the way form and JSON string fields are read.
///
/// Surrounding whitespace is ignored. NaN is rejected so callers fall back
/// to their default instead of carrying a non-real density.
pub(crate) fn parse_real(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}
