//! Top-level router: every route group plus the shared tower layers.

use std::any::Any;

use http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

use super::admin::admin_routes;
use super::checkout::checkout_routes;
use super::clubs::club_routes;
use super::error::ApiError;
use super::events::event_routes;
use super::manager::manager_routes;
use super::member::member_routes;
use super::state::AppState;
use super::users::user_routes;

pub const LIVENESS_MESSAGE: &str = "ClubHub server is connected!";

/// Builds the full application.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
        .merge(user_routes(state.clone()))
        .merge(club_routes(state.clone()))
        .merge(event_routes())
        .merge(manager_routes(state.clone()))
        .merge(member_routes(state.clone()))
        .merge(admin_routes(state.clone()))
        .merge(checkout_routes(state.clone()))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(cors_layer(server))
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Any origin unless origins are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin)
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Upstream(format!("handler panicked: {}", detail)).into_response()
}
