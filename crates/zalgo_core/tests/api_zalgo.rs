use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use zalgo_core::{
    category_of, handle_zalgo_api, handle_zalgo_api_with_rng, ApiBody, ApiRequest,
    API_ERROR_MESSAGE, API_FALLBACK_DENSITY,
};

fn call(payload: &Value) -> (u16, Value) {
    let body = serde_json::to_vec(payload).unwrap();
    let reply = handle_zalgo_api(&body, true);
    (reply.status, serde_json::to_value(&reply.body).unwrap())
}

#[test]
fn unparseable_density_falls_back_and_succeeds() {
    let request = ApiRequest::from_payload(&json!({"text": "hi", "density": "oops"})).unwrap();
    assert_eq!(request.options.intensity.value(), API_FALLBACK_DENSITY);

    let (status, body) = call(&json!({"text": "hi", "density": "oops"}));
    assert_eq!(status, 200);
    let zalgo = body["zalgo"].as_str().expect("zalgo field");
    let bases: String = zalgo.chars().filter(|ch| category_of(*ch).is_none()).collect();
    assert_eq!(bases, "hi");
}

#[test]
fn missing_text_returns_empty_zalgo() {
    let (status, body) = call(&json!({"density": 2}));
    assert_eq!(status, 200);
    assert_eq!(body, json!({"zalgo": ""}));
}

#[test]
fn non_json_request_uses_defaults() {
    let reply = handle_zalgo_api(b"text=hello", false);
    assert!(reply.is_success());
    assert_eq!(
        reply.body,
        ApiBody::Zalgo {
            zalgo: String::new()
        }
    );
}

#[test]
fn disabled_toggles_return_text_unchanged() {
    let (status, body) = call(&json!({
        "text": "The static is calling.",
        "density": 3,
        "up": false,
        "mid": 0,
        "down": null
    }));
    assert_eq!(status, 200);
    assert_eq!(body["zalgo"], "The static is calling.");
}

#[test]
fn zero_density_returns_text_unchanged() {
    let (_, body) = call(&json!({"text": "calm", "density": "0"}));
    assert_eq!(body["zalgo"], "calm");
}

#[test]
fn failures_return_generic_400() {
    let malformed = handle_zalgo_api(b"{\"text\": ", true);
    assert_eq!(malformed.status, 400);
    assert_eq!(
        serde_json::to_value(&malformed.body).unwrap(),
        json!({"error": API_ERROR_MESSAGE})
    );

    let (status, body) = call(&json!(["not", "an", "object"]));
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Something went wrong"}));

    let (status, body) = call(&json!({"text": ["h", "i"]}));
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Something went wrong"}));
}

#[test]
fn empty_declared_json_body_is_an_error() {
    let reply = handle_zalgo_api(b"", true);
    assert_eq!(reply.status, 400);
}

#[test]
fn seeded_calls_are_reproducible() {
    let body = br#"{"text": "same seed", "density": 2.5}"#;
    let first = handle_zalgo_api_with_rng(body, true, &mut StdRng::seed_from_u64(3));
    let second = handle_zalgo_api_with_rng(body, true, &mut StdRng::seed_from_u64(3));
    assert_eq!(first, second);
}
