pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

use crate::cors::{cors_layer, reject_disallowed_origin};
use crate::mentors::handlers as mentors;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_allowed_ports.clone());
    let origin_guard = middleware::from_fn_with_state(state.clone(), reject_disallowed_origin);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/test",
            get(health::test_handler).post(health::test_echo_handler),
        )
        .route("/generate-roadmap", post(roadmap::handle_generate_roadmap))
        .route("/mentors", get(mentors::handle_list_mentors))
        .route("/mentors/:id", get(mentors::handle_get_mentor))
        // CORS answers preflights before the origin guard sees them.
        .layer(ServiceBuilder::new().layer(cors).layer(origin_guard))
        .with_state(state)
}
