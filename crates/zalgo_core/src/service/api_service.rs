//! JSON API use-case for `POST /api/zalgo`.
//!
//! # Responsibility
//! - Read `text`, `density`, `up`, `mid`, `down` from a loosely-typed payload.
//! - Map every failure to one generic error body.
//!
//! # Invariants
//! - Absent `density` means `API_DEFAULT_DENSITY`; present but unreadable
//!   means `API_FALLBACK_DENSITY`.
//! - Absent toggles mean enabled; present toggles use JSON truthiness.
//! - Error replies never include internal error detail.

use crate::model::options::TransformOptions;
use crate::service::parse_real;
use crate::transform::transform_with_rng;
use log::{info, warn};
use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Density used when the payload has no `density` field.
pub const API_DEFAULT_DENSITY: f64 = 1.0;
/// Density used when `density` is present but cannot be read as a number.
pub const API_FALLBACK_DENSITY: f64 = 1.5;
/// The only error message API callers ever see.
pub const API_ERROR_MESSAGE: &str = "Something went wrong";

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Internal API failure taxonomy. Logged, never returned to callers.
#[derive(Debug)]
pub enum ApiError {
    /// Body was declared JSON but did not parse.
    InvalidJson(serde_json::Error),
    /// Payload is a non-empty JSON value other than an object.
    UnsupportedPayload(&'static str),
    /// `text` is present but not a string.
    InvalidText(&'static str),
}

impl ApiError {
    /// Stable code for structured log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "invalid_json",
            Self::UnsupportedPayload(_) => "unsupported_payload",
            Self::InvalidText(_) => "invalid_text",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(err) => write!(f, "request body is not valid JSON: {err}"),
            Self::UnsupportedPayload(kind) => {
                write!(f, "expected a JSON object payload, got {kind}")
            }
            Self::InvalidText(kind) => write!(f, "`text` must be a string, got {kind}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson(err) => Some(err),
            _ => None,
        }
    }
}

/// Normalized API request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub text: String,
    pub options: TransformOptions,
}

impl ApiRequest {
    /// Parses a raw request body.
    ///
    /// A body that is not declared JSON is read as an empty object, so every
    /// field takes its default.
    pub fn parse(body: &[u8], is_json: bool) -> Result<Self, ApiError> {
        if !is_json {
            return Self::from_payload(&Value::Object(Map::new()));
        }
        let payload: Value = serde_json::from_slice(body).map_err(ApiError::InvalidJson)?;
        Self::from_payload(&payload)
    }

    /// Builds a request from an already-decoded JSON payload.
    pub fn from_payload(payload: &Value) -> Result<Self, ApiError> {
        let empty = Map::new();
        let fields = match payload {
            Value::Object(map) => map,
            other if !is_truthy(other) => &empty,
            other => return Err(ApiError::UnsupportedPayload(json_kind(other))),
        };

        let text = match fields.get("text") {
            None => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => return Err(ApiError::InvalidText(json_kind(other))),
        };

        let options = TransformOptions::with_toggles(
            density_from(fields.get("density")),
            toggle_from(fields.get("up")),
            toggle_from(fields.get("mid")),
            toggle_from(fields.get("down")),
        );

        Ok(Self { text, options })
    }
}

/// Response body, serialized as `{"zalgo": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ApiBody {
    Zalgo { zalgo: String },
    Error { error: String },
}

/// Status code plus body for one API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ApiBody,
}

impl ApiReply {
    fn success(zalgo: String) -> Self {
        Self {
            status: STATUS_OK,
            body: ApiBody::Zalgo { zalgo },
        }
    }

    fn failure() -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            body: ApiBody::Error {
                error: API_ERROR_MESSAGE.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Returns whether a `Content-Type` value denotes a JSON body
/// (`application/json` or `application/*+json`).
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(raw) = content_type else {
        return false;
    };
    let mime = raw
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Handles one API call with the thread-local generator.
pub fn handle_zalgo_api(body: &[u8], is_json: bool) -> ApiReply {
    handle_zalgo_api_with_rng(body, is_json, &mut rand::thread_rng())
}

/// Handles one API call, drawing randomness from `rng`.
///
/// # Side effects
/// - Emits one `api_zalgo` log event with status, counts and duration.
pub fn handle_zalgo_api_with_rng<R: Rng>(body: &[u8], is_json: bool, rng: &mut R) -> ApiReply {
    let started_at = Instant::now();
    match ApiRequest::parse(body, is_json) {
        Ok(request) => {
            let zalgo = transform_with_rng(&request.text, &request.options, rng);
            info!(
                "event=api_zalgo module=service status=ok duration_ms={} input_chars={} output_chars={}",
                started_at.elapsed().as_millis(),
                request.text.chars().count(),
                zalgo.chars().count()
            );
            ApiReply::success(zalgo)
        }
        Err(err) => {
            warn!(
                "event=api_zalgo module=service status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            ApiReply::failure()
        }
    }
}

fn density_from(value: Option<&Value>) -> f64 {
    match value {
        None => API_DEFAULT_DENSITY,
        Some(Value::Number(number)) => number.as_f64().unwrap_or(API_FALLBACK_DENSITY),
        Some(Value::Bool(flag)) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::String(raw)) => parse_real(raw).unwrap_or(API_FALLBACK_DENSITY),
        Some(_) => API_FALLBACK_DENSITY,
    }
}

fn toggle_from(value: Option<&Value>) -> bool {
    value.map(is_truthy).unwrap_or(true)
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays and
/// objects are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
