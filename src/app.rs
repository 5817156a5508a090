use crate::handlers;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(handlers::home))
        .route("/blog-archive", get(handlers::blog_archive))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::track_visits,
        ));

    Router::new()
        .merge(pages)
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
