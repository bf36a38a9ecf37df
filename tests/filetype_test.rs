//! Integration tests for the file type taxonomy.

mod helpers;

use http::StatusCode;
use serde_json::json;

use catalog_database::repositories::file_type::FileTypeRepository;

#[tokio::test]
async fn empty_group_name_is_rejected() {
    let app = helpers::TestApp::without_db();

    let response = app
        .request(
            "POST",
            "/filetypes/groups",
            Some(json!({ "name": "" })),
            Some("tester"),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn taxonomy_lifecycle() {
    let Some(app) = helpers::TestApp::with_db().await else {
        return;
    };

    // Sequential get-or-create returns the same id and keeps one row.
    let repo = FileTypeRepository::new(app.db_pool.clone());
    let first = repo.get_or_create("image/png").await.expect("create");
    let second = repo.get_or_create("image/png").await.expect("lookup");
    assert_eq!(first, second);

    // Concurrent first-use of a new mime type also converges on one row
    // with every caller observing the same id.
    let results = futures::future::join_all((0..8).map(|_| {
        let repo = FileTypeRepository::new(app.db_pool.clone());
        async move { repo.get_or_create("application/x-hdf5").await }
    }))
    .await;
    let ids: Vec<i64> = results
        .into_iter()
        .map(|r| r.expect("no caller may observe a uniqueness error"))
        .collect();
    assert!(ids.windows(2).all(|w| w[0] == w[1]), "ids: {ids:?}");

    let row_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM file_type WHERE mime_type = $1")
            .bind("application/x-hdf5")
            .fetch_one(&app.db_pool)
            .await
            .expect("count");
    assert_eq!(row_count, 1);

    // Create a group; duplicates conflict.
    let response = app
        .request(
            "POST",
            "/filetypes/groups",
            Some(json!({ "name": "images" })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let group_id = response.body["data"]["file_type_group_id"]
        .as_i64()
        .expect("file_type_group_id");

    let response = app
        .request(
            "POST",
            "/filetypes/groups",
            Some(json!({ "name": "images" })),
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("images")
    );

    // Assigning with a dangling id in either position names the id.
    let response = app
        .request(
            "POST",
            &format!("/filetypes/group/999999/{group_id}"),
            None,
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("999999")
    );

    let response = app
        .request(
            "POST",
            &format!("/filetypes/group/{first}/999999"),
            None,
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // A real assignment shows up in the joined listing.
    let response = app
        .request(
            "POST",
            &format!("/filetypes/group/{first}/{group_id}"),
            None,
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/filetypes?mime_type=image/png", None, Some("tester"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let types = response.body["data"].as_array().expect("array");
    assert_eq!(types.len(), 1);
    assert_eq!(types[0]["file_type_group_name"], "images");

    // Ungrouped types carry an explicit null group name.
    let response = app
        .request(
            "GET",
            "/filetypes?mime_type=application/x-hdf5",
            None,
            Some("tester"),
        )
        .await;
    let types = response.body["data"].as_array().expect("array");
    assert_eq!(types.len(), 1);
    assert!(types[0]["file_type_group_name"].is_null());

    // Group listing: filtered and unfiltered forms both return lists; an
    // unmatched filter is an empty list.
    let response = app
        .request(
            "GET",
            "/filetypes/groups?group_name=images",
            None,
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().expect("array").len(), 1);

    let response = app
        .request(
            "GET",
            "/filetypes/groups?group_name=unknown",
            None,
            Some("tester"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].as_array().expect("array").is_empty());
}
