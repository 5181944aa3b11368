use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use canary_core::middleware::request_id_layer;

use crate::config::Variant;
use crate::handlers::{health, ready, root};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health
        .route("/health", get(health))
        // Greeting
        .route("/", get(root));
    // `/ready` only ever existed in the full variant; elsewhere it falls
    // through to axum's 404 like any other unknown path.
    if state.variant == Variant::Full {
        router = router.route("/ready", get(ready));
    }
    router
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
