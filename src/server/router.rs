use axum::{
    http::{Method, Uri},
    routing::get,
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::debug,
    error::{handle_panic, problem_for, AppError},
    state::AppState,
    util::http_status::KnownStatus,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Dormmate API"),
    tags((name = "debug", description = "Endpoints exercising error translation"))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(debug::raise_error))
        .routes(routes!(debug::validate))
        .split_for_parts();

    let router = router
        .route("/api/openapi.json", get(move || async move { Json(api) }))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found);

    apply_layers(router)
}

/// Wraps the router with panic recovery and request tracing.
///
/// Panics inside handlers become the generic 500 problem document.
pub fn apply_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::Problem(problem_for(
        KnownStatus::NOT_FOUND,
        format!("No endpoint {} {}.", method, uri.path()),
    ))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::Problem(problem_for(
        KnownStatus::METHOD_NOT_ALLOWED,
        format!("Request method '{}' is not supported for {}.", method, uri.path()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::server::error::{SERVER_ERROR_CODE, SERVER_ERROR_DETAIL};

    async fn panicking_handler() -> StatusCode {
        panic!("connection string postgres://admin:secret@db")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    /// Tests a panicking handler is answered with the generic server error document.
    ///
    /// Expected: 500 SERVER_ERROR without the panic message
    #[tokio::test]
    async fn converts_handler_panic_to_server_error() {
        let app = apply_layers(Router::new().route("/boom", get(panicking_handler)));

        let response = app
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["code"], SERVER_ERROR_CODE);
        assert_eq!(json["detail"], SERVER_ERROR_DETAIL);
        assert!(!json.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn not_found_fallback_returns_prebuilt_problem() {
        let response = not_found(Method::GET, Uri::from_static("/nope")).await;
        let problem = response.into_problem();

        assert_eq!(problem.status, 404);
        assert_eq!(problem.title, "Not Found");
        assert_eq!(problem.code, "404 NOT_FOUND");
        assert_eq!(problem.detail, "No endpoint GET /nope.");
    }
}
