//! # API REST
//!
//! Mock condition catalog served over HTTP.
//!
//! Handles:
//! - `GET /data` returning the catalog as JSON
//! - `GET /health` for monitoring
//! - The OpenAPI document at `/api-docs/openapi.json`
//! - CORS, so a browser page on another origin can fetch the catalog
//!
//! Uses `api-shared` for the wire types and `audience-core` for catalog loading.

#![warn(rust_2018_idioms)]

pub mod mock;

use axum::{
    extract::State,
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use api_shared::{CatalogRes, Condition, HealthRes, HealthService, Medication, SubCategory};
use audience_core::constants::DATA_PATH;

/// Application state for the catalog API
///
/// The catalog is loaded once at start-up and shared read-only by all handlers.
#[derive(Clone)]
struct AppState {
    catalog: Arc<CatalogRes>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, data),
    components(schemas(HealthRes, CatalogRes, Condition, SubCategory, Medication))
)]
pub struct ApiDoc;

/// Build the catalog API router.
///
/// # Arguments
/// * `catalog` - The catalog served by `GET /data`
pub fn router(catalog: CatalogRes) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route(DATA_PATH, get(data))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(cors)
        .with_state(AppState {
            catalog: Arc::new(catalog),
        })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the catalog API
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health("Audience catalog API"))
}

#[utoipa::path(
    get,
    path = "/data",
    responses(
        (status = 200, description = "Condition catalog", body = CatalogRes)
    )
)]
/// Serve the full condition catalog
///
/// Returns every condition with its subcategories and medications, in catalog order.
#[axum::debug_handler]
async fn data(State(state): State<AppState>) -> Json<CatalogRes> {
    tracing::debug!("serving {} conditions", state.catalog.conditions.len());
    Json(state.catalog.as_ref().clone())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn serves_catalog_as_camel_case_json() {
        let app = router(mock::default_catalog());

        let res = app
            .oneshot(Request::get("/data").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res).await;
        let conditions = json["conditions"].as_array().expect("conditions array");
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0]["name"], "Diabetes");
        assert_eq!(conditions[0]["subCategories"][1]["name"], "Type 2");
        assert_eq!(conditions[1]["medications"][0]["name"], "Lisinopril");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let app = router(mock::default_catalog());

        let res = app
            .oneshot(Request::get("/nonexistent").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = router(CatalogRes::default());

        let res = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["ok"], true);
    }

    #[tokio::test]
    async fn cross_origin_requests_are_allowed() {
        let app = router(mock::default_catalog());

        let res = app
            .oneshot(
                Request::get("/data")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            res.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn preflight_is_answered() {
        let app = router(mock::default_catalog());

        let res = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/data")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(res.status().is_success());
        assert!(res
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }

    #[tokio::test]
    async fn openapi_document_lists_data_path() {
        let app = router(CatalogRes::default());

        let res = app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_json(res).await["paths"].get("/data").is_some());
    }
}
