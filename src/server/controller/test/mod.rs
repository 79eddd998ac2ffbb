use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod catalog;

/// Builds an in-memory database with every table and returns the connection.
async fn setup() -> DatabaseConnection {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();

    test.db.unwrap()
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

/// Sends a GET request through the router and parses the JSON body.
async fn get(db: &DatabaseConnection, uri: &str) -> (StatusCode, Value) {
    let response = app(db)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

/// Tests that database failures are reported without leaking the cause.
///
/// The database has no tables, so every query fails.
///
/// Expected: 500 with `failed to retrieve <resource>`
#[tokio::test]
async fn reports_database_failure_as_500() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.unwrap();

    let cases = [
        ("/regions", "failed to retrieve regions"),
        ("/systems/1/planets", "failed to retrieve planets"),
        ("/stargates", "failed to retrieve stargates"),
        ("/systems/1/kills/summary", "failed to retrieve system kills"),
        ("/rankings/regions/top", "failed to retrieve top regions"),
        (
            "/reports/spectral-class-counts",
            "failed to retrieve spectral class counts",
        ),
    ];

    for (uri, message) in cases {
        let (status, body) = get(&db, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["error"], message, "{}", uri);
    }
}

/// Tests that browsers may read responses from any origin.
///
/// Expected: `access-control-allow-origin: *` on a GET with an Origin header
#[tokio::test]
async fn allows_cross_origin_reads() {
    let db = setup().await;

    let response = app(&db)
        .oneshot(
            Request::builder()
                .uri("/regions")
                .header(header::ORIGIN, "https://map.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
