use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::server::{handlers, state::AppState};

/// Router with every endpoint mounted both at the root and under `/api`.
pub fn app(state: AppState) -> Router {
    let routes = Router::new()
        .route("/render", post(handlers::render))
        .route("/download/{filename}", get(handlers::download))
        .route("/status", get(handlers::status))
        .route("/presets", get(handlers::presets))
        .route("/compositions", get(handlers::compositions));

    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "../../tests/unit/server/app.rs"]
mod tests;
