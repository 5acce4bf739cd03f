//! Route table and request handlers.

use actix_web::http::header::{ContentType, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};
use zalgo_core::{
    handle_form_submission, handle_zalgo_api, is_json_content_type, render_page, ApiBody,
    FormPage, FormSubmission, API_ERROR_MESSAGE,
};

type FormPairs = web::Form<Vec<(String, String)>>;

/// Returns a service configurator registering every route with body limits
/// of `max_body_bytes`.
pub fn configure(max_body_bytes: usize) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::PayloadConfig::new(max_body_bytes))
            .app_data(web::FormConfig::default().limit(max_body_bytes))
            .route("/", web::get().to(index))
            .route("/", web::post().to(submit_form))
            .route("/api/zalgo", web::post().to(zalgo_api));
    }
}

async fn index() -> HttpResponse {
    html(render_page(&FormPage::initial()))
}

/// A body that cannot be decoded as a form reads as an empty submission:
/// no text, fallback density, every box unchecked.
async fn submit_form(form: Option<FormPairs>) -> HttpResponse {
    let pairs = match form {
        Some(form) => form.into_inner(),
        None => {
            debug!("event=form_decode module=server status=fallback reason=undecodable_body");
            Vec::new()
        }
    };
    let submission = FormSubmission::from_pairs(pairs);
    html(render_page(&handle_form_submission(&submission)))
}

async fn zalgo_api(
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
) -> HttpResponse {
    let body = match body {
        Ok(body) => body,
        Err(err) => {
            warn!(
                "event=api_zalgo module=server status=error error_code=payload_rejected error={}",
                err
            );
            return HttpResponse::BadRequest().json(ApiBody::Error {
                error: API_ERROR_MESSAGE.to_string(),
            });
        }
    };

    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let reply = handle_zalgo_api(&body, is_json_content_type(content_type));
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_REQUEST);
    HttpResponse::build(status).json(reply.body)
}

fn html(page: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(page)
}
