//! Intensity and toggle options for one transform call.

use crate::mark::MarkCategory;
use serde::{Deserialize, Serialize};

/// Clamped density knob controlling marks per character.
///
/// Construction never fails: values below `MIN` become `MIN`, values above
/// `MAX` become `MAX`, and NaN is treated as `MIN`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Intensity(f64);

impl Intensity {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 3.0;
    /// Form and library default.
    pub const DEFAULT: f64 = 1.5;

    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(Self::MIN);
        }
        Self(raw.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Upper bound (inclusive) for how many marks of `category` one
    /// character may receive: `floor(intensity * multiplier)`.
    pub fn max_marks(self, category: MarkCategory) -> usize {
        (self.0 * category.multiplier()).floor() as usize
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<f64> for Intensity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Intensity> for f64 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

/// Inputs for one transform call besides the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformOptions {
    pub intensity: Intensity,
    pub above: bool,
    pub middle: bool,
    pub below: bool,
}

impl TransformOptions {
    /// Creates options with all three categories enabled.
    pub fn new(intensity: impl Into<Intensity>) -> Self {
        Self {
            intensity: intensity.into(),
            above: true,
            middle: true,
            below: true,
        }
    }

    /// Creates options from explicit category toggles.
    pub fn with_toggles(
        intensity: impl Into<Intensity>,
        above: bool,
        middle: bool,
        below: bool,
    ) -> Self {
        Self {
            intensity: intensity.into(),
            above,
            middle,
            below,
        }
    }

    pub fn enabled(&self, category: MarkCategory) -> bool {
        match category {
            MarkCategory::Above => self.above,
            MarkCategory::Middle => self.middle,
            MarkCategory::Below => self.below,
        }
    }

    /// Effective maximum for `category`, zero when it is disabled.
    pub fn budget(&self, category: MarkCategory) -> usize {
        if self.enabled(category) {
            self.intensity.max_marks(category)
        } else {
            0
        }
    }

    /// Returns `true` when no character could receive a mark.
    pub fn is_noop(&self) -> bool {
        MarkCategory::ALL
            .into_iter()
            .all(|category| self.budget(category) == 0)
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::new(Intensity::default())
    }
}
