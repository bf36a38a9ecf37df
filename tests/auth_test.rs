//! Integration tests for the caller-identity gate.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn health_needs_no_identity() {
    let app = helpers::TestApp::without_db();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn catalog_routes_require_an_identity() {
    let app = helpers::TestApp::without_db();

    for (method, path) in [
        ("GET", "/collections"),
        ("GET", "/collections/demo"),
        ("GET", "/datamanagers"),
        ("GET", "/filetypes"),
        ("GET", "/filetypes/groups"),
        ("GET", "/versions/demo"),
        ("GET", "/files/1"),
    ] {
        let response = app.request(method, path, None, None).await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{method} {path}"
        );
        assert_eq!(response.body["error"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn blank_identity_is_rejected() {
    let app = helpers::TestApp::without_db();

    let response = app.request("GET", "/collections", None, Some("   ")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
