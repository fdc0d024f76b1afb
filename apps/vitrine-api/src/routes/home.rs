//! Home feed routes

use axum::{routing::get, Router};

use crate::{
    handlers::home::{genre_content_handler, home_events_handler, home_handler},
    AppState,
};

/// Create home feed routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(home_handler))
        .route("/home/events", get(home_events_handler))
        .route("/genres/:genre_id/content", get(genre_content_handler))
}
