mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::images::ImageStore;
use crate::session::SessionManager;
use crate::settings::Settings;

/// Shared state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionManager,
    pub settings: Settings,
    pub images: ImageStore,
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Sessions
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/{id}", get(handlers::get_session))
        .route("/sessions/{id}", delete(handlers::delete_session))
        .route("/sessions/{id}/click", post(handlers::click_session))
        // Settings
        .route("/settings/credential", get(handlers::get_credential_status))
        .route("/settings/credential", put(handlers::set_credential))
        .route("/settings/credential", delete(handlers::clear_credential))
        // Vocabulary and images
        .route("/vocabulary", get(handlers::list_vocabulary))
        .route("/images/{filename}", get(handlers::get_image_url))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
