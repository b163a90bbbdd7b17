use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::AppConfig;
pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/config", get(handlers::get_config))
        .route("/parse-url", post(handlers::parse_url))
        .route("/get-recent-posts", post(handlers::get_recent_posts))
        .route("/create-all-blogs", post(handlers::create_all_blogs))
        .route("/token", post(handlers::token))
        .route("/content", post(handlers::content))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{AppConfig, AppState};
    pub use bp_core::{Error, ParsedArticle, Result};
}
