use axum::{extract::DefaultBodyLimit, routing, Router};
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::paste::routes as paste;
use crate::state::AppState;

/// Build the full axum Router with all routes and middleware.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let paste_routes = Router::new()
        .route("/", routing::get(paste::new_paste))
        .route(
            "/{id}",
            routing::get(paste::get_paste).post(paste::post_paste),
        )
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes));

    let mut router = Router::new().merge(paste_routes);

    // /static shadows a paste named "static"
    if let Some(dir) = config.server.static_dir.as_deref() {
        router = with_static_assets(router, dir);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn with_static_assets(router: Router<AppState>, dir: &Path) -> Router<AppState> {
    if !dir.is_dir() {
        tracing::warn!(
            "Static directory {} not found, /static disabled",
            dir.display()
        );
        return router;
    }
    tracing::info!("Serving static assets from {}", dir.display());
    router.nest_service("/static", ServeDir::new(dir))
}
