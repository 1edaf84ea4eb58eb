use crate::{AppState, fetch_employees, get_annual_salary, get_employee, health, list_employees};

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Employee endpoints
        .route("/employees", get(list_employees))
        .route("/employees/{id}", get(get_employee))
        .route("/employees/annual-salary/{id}", get(get_annual_salary))
        .route("/employees/fetch", post(fetch_employees))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers(Any),
        )
}
