//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use catalog_core::config::AppConfig;
use catalog_core::config::database::DatabaseConfig;
use catalog_core::config::logging::LoggingConfig;
use catalog_core::config::server::ServerConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (Null when empty or not JSON).
    pub body: Value,
}

impl TestApp {
    /// Build the app over a live test database.
    ///
    /// Returns `None` when `CATALOG_TEST_DATABASE_URL` is not set, so
    /// database-backed tests are skipped on machines without a test
    /// PostgreSQL instance.
    pub async fn with_db() -> Option<Self> {
        let url = std::env::var("CATALOG_TEST_DATABASE_URL").ok()?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("Failed to connect to test database");

        catalog_database::migration::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        clean_database(&pool).await;

        Some(Self::build(pool))
    }

    /// Build the app over a lazy pool that never connects.
    ///
    /// Good for routing, auth, and validation paths that fail before any
    /// query is issued.
    pub fn without_db() -> Self {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost:5432/catalog_test")
            .expect("Failed to build lazy pool");
        Self::build(pool)
    }

    fn build(pool: PgPool) -> Self {
        let config = test_config();
        let router = catalog_api::app::build_app(config, pool.clone());
        Self {
            router,
            db_pool: pool,
        }
    }

    /// Issue a request against the in-process router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        user: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(user) = user {
            builder = builder.header("x-auth-user", user);
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Remove all rows from every catalog table.
async fn clean_database(pool: &PgPool) {
    sqlx::query(
        "TRUNCATE version_file, file, version, collection, \
         file_type, file_type_group, data_manager RESTART IDENTITY CASCADE",
    )
    .execute(pool)
    .await
    .expect("Failed to clean test database");
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        logging: LoggingConfig::default(),
    }
}
