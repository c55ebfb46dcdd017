use axum::{
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod health;
mod middleware_auth;
pub mod tasks;

pub use middleware_auth::AuthUser;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let task_router = Router::new()
        .route("/", post(tasks::routes::create).get(tasks::routes::list))
        .route(
            "/{id}",
            put(tasks::routes::update).delete(tasks::routes::delete),
        )
        .route("/{id}/toggle", patch(tasks::routes::toggle))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middleware_auth::require_auth,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health::health))
        .nest("/api/tasks", task_router)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
