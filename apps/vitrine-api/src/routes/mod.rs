//! API routes

pub mod home;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::home::{ErrorResponse, GenreContentResponse},
    handlers,
    views::HomeSnapshot,
    AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::home::home_handler,
        handlers::home::home_events_handler,
        handlers::home::genre_content_handler,
        health_handler
    ),
    components(
        schemas(HomeSnapshot, GenreContentResponse, ErrorResponse)
    ),
    tags(
        (name = "home", description = "Home feed endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Vitrine API",
        version = "0.1.0",
        description = "Home feed of the Vitrine streaming catalog",
        contact(
            name = "Vitrine Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(home::routes())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
