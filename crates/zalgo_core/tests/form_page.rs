use rand::rngs::StdRng;
use rand::SeedableRng;
use zalgo_core::{
    category_of, handle_form_submission, handle_form_submission_with_rng, render_page, FormPage,
    FormSubmission, FORM_DEFAULT_DENSITY,
};

#[test]
fn submission_without_checkboxes_disables_all_categories() {
    let submission = FormSubmission::from_pairs([("text", "plain words"), ("density", "3")]);
    let page = handle_form_submission(&submission);
    assert_eq!(page.zalgo_result, "plain words");
    assert!(!page.show_above && !page.show_middle && !page.show_below);
}

#[test]
fn invalid_density_falls_back_to_default() {
    let submission = FormSubmission::from_pairs([("text", "x"), ("density", "abc"), ("up", "on")]);
    let page = handle_form_submission(&submission);
    assert_eq!(page.density, FORM_DEFAULT_DENSITY);
    assert!(render_page(&page).contains(r#"value="1.5""#));
}

#[test]
fn whitespace_only_text_is_not_transformed() {
    let submission = FormSubmission::from_pairs([
        ("text", "   \n\t"),
        ("up", "on"),
        ("mid", "on"),
        ("down", "on"),
    ]);
    let page = handle_form_submission(&submission);
    assert_eq!(page.user_text, "   \n\t");
    assert!(page.zalgo_result.is_empty());
}

#[test]
fn checked_submission_decorates_and_echoes_state() {
    let submission = FormSubmission::from_pairs([
        ("text", "summon"),
        ("density", "2.0"),
        ("up", "on"),
        ("down", "on"),
    ]);
    let page = handle_form_submission_with_rng(&submission, &mut StdRng::seed_from_u64(11));
    let bases: String = page
        .zalgo_result
        .chars()
        .filter(|ch| category_of(*ch).is_none())
        .collect();
    assert_eq!(bases, "summon");
    assert!(page.show_above && !page.show_middle && page.show_below);

    let html = render_page(&page);
    assert!(html.contains(r#"name="up" checked"#));
    assert!(html.contains(r#"<input type="checkbox" name="mid">"#));
    assert!(html.contains(r#"value="2.0""#));
}

#[test]
fn rendered_page_escapes_submitted_text() {
    let submission = FormSubmission::from_pairs([("text", "<i>&</i>")]);
    let page = handle_form_submission(&submission);
    let html = render_page(&page);
    assert!(html.contains("&lt;i&gt;&amp;&lt;/i&gt;</textarea>"));
    assert!(!html.contains("<i>&</i>"));
}

#[test]
fn initial_page_renders_api_usage() {
    let html = render_page(&FormPage::initial());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("/api/zalgo"));
    assert!(html.contains(r#"<form method="post">"#));
}
