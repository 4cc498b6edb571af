//! API routes

pub mod health;
pub mod reservations;
pub mod slots;

use axum::extract::State;
use axum::http::{HeaderName, HeaderValue, Method, Uri, header};
use axum::routing::get;
use axum::{Router, middleware};
use shared::error::{AppError, ErrorCode};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware::logging_middleware;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Final handler for unrecognized routes and methods
///
/// The method and path are echoed back only in development.
async fn not_found(State(state): State<AppState>, method: Method, uri: Uri) -> AppError {
    let err = AppError::new(ErrorCode::RouteNotFound);
    if state.expose_error_detail {
        err.with_detail("method", method.as_str())
            .with_detail("path", uri.path())
    } else {
        err
    }
}

/// Build the routes (no middleware)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/reservations",
            get(reservations::list_reservations)
                .post(reservations::create_reservation)
                .delete(reservations::delete_reservation),
        )
        .route("/api/slots", get(slots::list_slots))
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
}

/// Build the fully configured application with middleware and state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    build_router()
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Propagate sits inside Set so it sees the generated id
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
