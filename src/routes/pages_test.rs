use super::*;

#[test]
fn raw_segment_extracts_client_id() {
    assert_eq!(raw_segment("/clients/{id}", "/clients/abc123"), Some("abc123"));
}

#[test]
fn raw_segment_keeps_percent_encoding() {
    assert_eq!(raw_segment("/knowledge/{category}", "/knowledge/sales%20ops"), Some("sales%20ops"));
}

#[test]
fn raw_segment_rejects_empty_and_nested_segments() {
    assert_eq!(raw_segment("/clients/{id}", "/clients/"), None);
    assert_eq!(raw_segment("/clients/{id}", "/clients/a/b"), None);
}

#[test]
fn raw_segment_requires_a_dynamic_pattern() {
    assert_eq!(raw_segment("/clients", "/clients"), None);
}

#[test]
fn page_error_statuses() {
    assert_eq!(PageError::NotFound { path: "/x".into() }.status(), StatusCode::NOT_FOUND);
    assert_eq!(PageError::Forbidden { capability: Capability::ViewOverview }.status(), StatusCode::FORBIDDEN);
    assert_eq!(PageError::Render { message: "boom".into() }.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn forbidden_message_names_capability() {
    let err = PageError::Forbidden { capability: Capability::ViewOverview };
    assert_eq!(err.to_string(), "this page requires the view.overview capability");
}

#[test]
fn page_error_renders_status_page() {
    let response = PageError::NotFound { path: "/nope".into() }.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let content_type = response.headers().get(axum::http::header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[test]
fn trailing_slash_target_trims_and_keeps_query() {
    assert_eq!(trailing_slash_target(&Uri::from_static("/dashboard/")).as_deref(), Some("/dashboard"));
    assert_eq!(trailing_slash_target(&Uri::from_static("/knowledge/sales//")).as_deref(), Some("/knowledge/sales"));
    assert_eq!(
        trailing_slash_target(&Uri::from_static("/clients/?demo_restricted=true")).as_deref(),
        Some("/clients?demo_restricted=true")
    );
}

#[test]
fn trailing_slash_target_leaves_other_paths_alone() {
    assert_eq!(trailing_slash_target(&Uri::from_static("/")), None);
    assert_eq!(trailing_slash_target(&Uri::from_static("/tasks")), None);
    assert_eq!(trailing_slash_target(&Uri::from_static("//evil.example/")), None);
}
