//! Core logic for the zalgo text service.
//! This crate owns the transformer and every rule the web boundary applies.

pub mod logging;
pub mod mark;
pub mod model;
pub mod service;
pub mod transform;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use mark::{category_of, MarkCategory};
pub use model::options::{Intensity, TransformOptions};
pub use service::api_service::{
    handle_zalgo_api, handle_zalgo_api_with_rng, is_json_content_type, ApiBody, ApiError,
    ApiReply, ApiRequest, API_DEFAULT_DENSITY, API_ERROR_MESSAGE, API_FALLBACK_DENSITY,
};
pub use service::form_service::{
    handle_form_submission, handle_form_submission_with_rng, FormPage, FormSubmission,
    FORM_DEFAULT_DENSITY,
};
pub use transform::{transform, transform_with_rng, MAX_UNIT_CHARS};
pub use view::{escape_html, render_page};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
