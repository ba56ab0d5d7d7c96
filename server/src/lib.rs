//! HTTP API for the cohort enrollment service.
//!
//! [`build_router`] wires the public enrollment endpoints and the admin
//! surface onto one shared [`AppState`]; the binary adds CORS and
//! graceful shutdown on top.

pub mod error;
pub mod notify;
pub mod routes;
pub mod validate;

use axum::routing::{get, post, put};
use axum::Router;
use cohort_store::EnrollmentStore;
use std::sync::Arc;

pub use error::{ApiError, ApiResult};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EnrollmentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EnrollmentStore>) -> Self {
        Self { store }
    }
}

/// Build the HTTP API router with the given application state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/plans", get(routes::get_plans))
        .route("/api/enrollments", post(routes::create_enrollment))
        .route("/api/enrollments/{email}", get(routes::get_enrollment))
        .route(
            "/api/enrollments/{email}/transaction",
            put(routes::update_transaction),
        )
        .route(
            "/api/admin/enrollments",
            get(routes::list_enrollments).delete(routes::clear_enrollments),
        )
        .route("/api/admin/enrollments.csv", get(routes::export_csv))
        .route("/api/admin/stats", get(routes::get_stats))
        .with_state(state)
}
