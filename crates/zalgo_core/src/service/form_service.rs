//! Web form use-case.
//!
//! # Responsibility
//! - Decode submitted form fields with checkbox semantics.
//! - Produce the view model rendered by `view::page`.
//!
//! # Invariants
//! - Missing checkboxes mean "disabled", never an error.
//! - Missing or unparseable density falls back to `FORM_DEFAULT_DENSITY`.
//! - Whitespace-only text is not transformed.

use crate::model::options::{Intensity, TransformOptions};
use crate::service::parse_real;
use crate::transform::transform_with_rng;
use crate::transform::zalgo::passes_through;
use log::debug;
use rand::Rng;

/// Density used for the initial page and for unreadable submissions.
pub const FORM_DEFAULT_DENSITY: f64 = Intensity::DEFAULT;

/// Decoded form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    pub text: String,
    /// Submitted density, not yet clamped.
    pub density: f64,
    pub up: bool,
    pub mid: bool,
    pub down: bool,
}

impl FormSubmission {
    /// Builds a submission from decoded `application/x-www-form-urlencoded`
    /// pairs. When a key repeats, its first value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut text: Option<String> = None;
        let mut density: Option<String> = None;
        let (mut up, mut mid, mut down) = (false, false, false);

        for (key, value) in pairs {
            match key.as_ref() {
                "text" if text.is_none() => text = Some(value.as_ref().to_string()),
                "density" if density.is_none() => density = Some(value.as_ref().to_string()),
                "up" => up = true,
                "mid" => mid = true,
                "down" => down = true,
                _ => {}
            }
        }

        Self {
            text: text.unwrap_or_default(),
            density: density
                .as_deref()
                .and_then(parse_real)
                .unwrap_or(FORM_DEFAULT_DENSITY),
            up,
            mid,
            down,
        }
    }

    pub fn options(&self) -> TransformOptions {
        TransformOptions::with_toggles(self.density, self.up, self.mid, self.down)
    }
}

/// View model for the form page.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPage {
    /// Text echoed back into the textarea (unescaped).
    pub user_text: String,
    /// Density echoed back into the slider, as submitted.
    pub density: f64,
    pub show_above: bool,
    pub show_middle: bool,
    pub show_below: bool,
    /// Transformed text (unescaped); empty when nothing was transformed.
    pub zalgo_result: String,
}

impl FormPage {
    /// Page shown before any submission: empty text, all categories on.
    pub fn initial() -> Self {
        Self {
            user_text: String::new(),
            density: FORM_DEFAULT_DENSITY,
            show_above: true,
            show_middle: true,
            show_below: true,
            zalgo_result: String::new(),
        }
    }
}

/// Handles a form submission with the thread-local generator.
pub fn handle_form_submission(submission: &FormSubmission) -> FormPage {
    handle_form_submission_with_rng(submission, &mut rand::thread_rng())
}

/// Handles a form submission, drawing randomness from `rng`.
pub fn handle_form_submission_with_rng<R: Rng>(
    submission: &FormSubmission,
    rng: &mut R,
) -> FormPage {
    let zalgo_result = if submission.text.chars().all(passes_through) {
        String::new()
    } else {
        transform_with_rng(&submission.text, &submission.options(), rng)
    };

    debug!(
        "event=form_submit module=service status=ok input_chars={} output_chars={} density={}",
        submission.text.chars().count(),
        zalgo_result.chars().count(),
        submission.options().intensity.value()
    );

    FormPage {
        user_text: submission.text.clone(),
        density: submission.density,
        show_above: submission.up,
        show_middle: submission.mid,
        show_below: submission.down,
        zalgo_result,
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_form_submission, FormPage, FormSubmission, FORM_DEFAULT_DENSITY};

    #[test]
    fn initial_page_enables_all_categories() {
        let page = FormPage::initial();
        assert!(page.show_above && page.show_middle && page.show_below);
        assert_eq!(page.density, FORM_DEFAULT_DENSITY);
        assert!(page.user_text.is_empty());
        assert!(page.zalgo_result.is_empty());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let submission = FormSubmission::from_pairs(Vec::<(&str, &str)>::new());
        assert_eq!(submission.text, "");
        assert_eq!(submission.density, FORM_DEFAULT_DENSITY);
        assert!(!submission.up && !submission.mid && !submission.down);
    }

    #[test]
    fn checkbox_presence_enables_category_regardless_of_value() {
        let submission = FormSubmission::from_pairs([("up", "on"), ("down", "")]);
        assert!(submission.up);
        assert!(!submission.mid);
        assert!(submission.down);
    }

    #[test]
    fn first_value_wins_for_repeated_keys() {
        let submission =
            FormSubmission::from_pairs([("text", "first"), ("text", "second"), ("density", "2")]);
        assert_eq!(submission.text, "first");
        assert_eq!(submission.density, 2.0);
    }

    #[test]
    fn unparseable_density_falls_back() {
        let submission = FormSubmission::from_pairs([("density", "lots")]);
        assert_eq!(submission.density, FORM_DEFAULT_DENSITY);
    }

    #[test]
    fn separator_only_text_is_not_transformed() {
        let submission = FormSubmission::from_pairs([("text", " \u{1c}\u{1f}\n"), ("up", "on")]);
        let page = handle_form_submission(&submission);
        assert!(page.zalgo_result.is_empty());
    }

    #[test]
    fn options_clamp_density_but_submission_keeps_it() {
        let submission = FormSubmission::from_pairs([("density", "7"), ("mid", "on")]);
        assert_eq!(submission.density, 7.0);
        let options = submission.options();
        assert_eq!(options.intensity.value(), 3.0);
        assert!(!options.above && options.middle && !options.below);
    }
}
