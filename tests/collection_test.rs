//! Integration tests for collection registry operations.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn malformed_slugs_are_rejected_without_touching_the_store() {
    // The lazy pool never connects; a slug failure past validation would
    // surface as a 500, not a 400.
    let app = helpers::TestApp::without_db();

    for slug in ["has space", "dot.dot", "slash/slash", "Ünicode", ""] {
        let response = app
            .request(
                "POST",
                "/collections",
                Some(json!({ "slug": slug, "name": "Demo", "doi": "10.1/x" })),
                Some("tester"),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "slug: {slug:?}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn collection_lifecycle() {
    let Some(app) = helpers::TestApp::with_db().await else {
        return;
    };

    // Create a collection; the response carries the new id.
    let response = app
        .request(
            "POST",
            "/collections",
            Some(json!({ "slug": "demo", "name": "Demo", "doi": "10.1/x" })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let collection_id = response.body["data"]["collection_id"]
        .as_i64()
        .expect("collection_id");

    // A duplicate slug is a conflict; the original is unaffected.
    let response = app
        .request(
            "POST",
            "/collections",
            Some(json!({ "slug": "demo", "name": "Other", "doi": "10.2/y" })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("demo")
    );

    // Detail includes the description (still null) and a zero file count.
    let response = app
        .request("GET", "/collections/demo", None, Some("tester"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["collection_id"].as_i64(), Some(collection_id));
    assert_eq!(response.body["data"]["collection_name"], "Demo");
    assert!(response.body["data"]["description"].is_null());
    assert_eq!(response.body["data"]["file_count"].as_i64(), Some(0));

    // The listing includes the empty collection with an explicit zero.
    let response = app
        .request("GET", "/collections", None, Some("tester"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let listed = response.body["data"].as_array().expect("array");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["file_count"].as_i64(), Some(0));

    // The initial version was created together with the collection.
    let response = app
        .request("GET", "/versions/demo", None, Some("tester"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let versions = response.body["data"].as_array().expect("array");
    assert_eq!(versions.len(), 1);
    let first_version_id = versions[0]["version_id"].as_i64().expect("version_id");

    // The version-scoped detail resolves for the real version only.
    let response = app
        .request(
            "GET",
            &format!("/collections/demo/{first_version_id}"),
            None,
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let response = app
        .request("GET", "/collections/demo/999999", None, Some("tester"))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // Update the description in place.
    let response = app
        .request(
            "POST",
            "/collections/demo",
            Some(json!({ "description": "A demo collection" })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["description"], "A demo collection");

    // Appending a version to an unknown collection names the slug.
    let response = app
        .request(
            "POST",
            "/versions/missing",
            Some(json!({ "name": "v2" })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("missing")
    );

    // Appending to the real collection yields a strictly larger id.
    let response = app
        .request(
            "POST",
            "/versions/demo",
            Some(json!({ "name": "v2", "description": "second" })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let second_version_id = response.body["data"]["version_id"]
        .as_i64()
        .expect("version_id");
    assert!(second_version_id > first_version_id);

    // Unknown collections are a 404 on the detail route.
    let response = app
        .request("GET", "/collections/missing", None, Some("tester"))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
