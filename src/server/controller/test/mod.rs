use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::{
    model::api::APPLICATION_PROBLEM_JSON,
    server::{router, state::AppState},
};


/// Builds the full application router backed by an in-memory database.
async fn app() -> Router {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    router::router().with_state(AppState::new(db))
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

/// Splits a response into its status, content type, and JSON body.
async fn problem_parts(response: Response<Body>) -> (StatusCode, String, serde_json::Value) {
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap();

    (status, content_type, json)
}
