//! Integration tests for the file import workflow.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn blank_mime_type_is_rejected_before_the_workflow_starts() {
    let app = helpers::TestApp::without_db();

    let response = app
        .request(
            "POST",
            "/files/import",
            Some(json!({
                "collection_slug": "demo",
                "data_manager_name": "managerA",
                "external_id": "ext-1",
                "mime_type": ""
            })),
            Some("tester"),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn import_end_to_end() {
    let Some(app) = helpers::TestApp::with_db().await else {
        return;
    };

    // Seed a collection (which creates its initial version) and a manager.
    let response = app
        .request(
            "POST",
            "/collections",
            Some(json!({ "slug": "demo", "name": "Demo", "doi": "10.1/x" })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/datamanagers",
            Some(json!({ "name": "managerA" })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Importing for an unknown data manager fails, names the manager, and
    // leaves no file row behind (the transaction rolls back every step).
    let response = app
        .request(
            "POST",
            "/files/import",
            Some(json!({
                "collection_slug": "demo",
                "data_manager_name": "managerB",
                "external_id": "ext-0",
                "mime_type": "image/png"
            })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("managerB")
    );
    let file_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM file")
        .fetch_one(&app.db_pool)
        .await
        .expect("count");
    assert_eq!(file_rows, 0);

    // An unknown collection slug fails on the first step.
    let response = app
        .request(
            "POST",
            "/files/import",
            Some(json!({
                "collection_slug": "nope",
                "data_manager_name": "managerA",
                "external_id": "ext-0",
                "mime_type": "image/png"
            })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("nope")
    );

    // The happy path registers the file and attaches it to the latest
    // version in one shot.
    let response = app
        .request(
            "POST",
            "/files/import",
            Some(json!({
                "collection_slug": "demo",
                "data_manager_name": "managerA",
                "external_id": "ext-1",
                "mime_type": "image/png"
            })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let file_id = response.body["data"]["file_id"].as_i64().expect("file_id");

    // The file detail joins the manager name and mime type.
    let response = app
        .request("GET", &format!("/files/{file_id}"), None, Some("tester"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["data_manager_name"], "managerA");
    assert_eq!(response.body["data"]["mime_type"], "image/png");
    assert_eq!(response.body["data"]["external_id"], "ext-1");
    assert!(response.body["data"]["group_name"].is_null());

    // The file is listed under the collection's latest version.
    let response = app
        .request("GET", "/versions/demo", None, Some("tester"))
        .await;
    let versions = response.body["data"].as_array().expect("array");
    let latest_version_id = versions
        .iter()
        .map(|v| v["version_id"].as_i64().expect("version_id"))
        .max()
        .expect("at least one version");

    let response = app
        .request(
            "GET",
            &format!("/files/demo/{latest_version_id}"),
            None,
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let files = response.body["data"].as_array().expect("array");
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["file_id"].as_i64(), Some(file_id));

    // The collection's aggregate file count reflects the import.
    let response = app
        .request("GET", "/collections/demo", None, Some("tester"))
        .await;
    assert_eq!(response.body["data"]["file_count"].as_i64(), Some(1));

    // Attaching to a nonexistent version is a validation error and adds
    // no join row.
    let response = app
        .request(
            "POST",
            &format!("/versions/999999/{file_id}"),
            None,
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let join_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM version_file")
        .fetch_one(&app.db_pool)
        .await
        .expect("count");
    assert_eq!(join_rows, 1);

    // A file may belong to several versions; the distinct aggregate count
    // does not double-count it.
    let response = app
        .request(
            "POST",
            "/versions/demo",
            Some(json!({ "name": "v2" })),
            Some("tester"),
        )
        .await;
    let second_version_id = response.body["data"]["version_id"]
        .as_i64()
        .expect("version_id");

    let response = app
        .request(
            "POST",
            &format!("/versions/{second_version_id}/{file_id}"),
            None,
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/collections/demo", None, Some("tester"))
        .await;
    assert_eq!(response.body["data"]["file_count"].as_i64(), Some(1));

    // A second import of the same mime type reuses the file type row.
    let response = app
        .request(
            "POST",
            "/files/import",
            Some(json!({
                "collection_slug": "demo",
                "data_manager_name": "managerA",
                "external_id": "ext-2",
                "mime_type": "image/png"
            })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let type_rows: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM file_type WHERE mime_type = 'image/png'")
            .fetch_one(&app.db_pool)
            .await
            .expect("count");
    assert_eq!(type_rows, 1);
}
