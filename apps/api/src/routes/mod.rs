pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth::{self, require_session};
use crate::candidates::handlers as candidates;
use crate::mindset::handlers as mindset;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/v1/auth/logout", post(auth::handlers::handle_logout))
        // Candidate API
        .route(
            "/api/v1/candidates",
            get(candidates::handle_list).post(candidates::handle_submit),
        )
        .route("/api/v1/candidates/search", get(candidates::handle_search))
        // Mindset API
        .route("/api/v1/mindset/predict", post(mindset::handle_predict))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/auth/login", post(auth::handlers::handle_login))
        .merge(protected)
        .with_state(state)
}
