//! Vitrine API - Home Feed Service
//!
//! HTTP service rendering the home feed of the Vitrine streaming catalog.
//! Every request mounts a home presenter on a request-scoped view, backed by
//! the REST catalog of the backend-as-a-service.

mod config;
mod dto;
mod error;
mod handlers;
mod routes;
mod views;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vitrine_domain::{HomeModel, HomePresenter, HomeView, PresenterConfig, UserId};
use vitrine_rest::RestCatalog;

use crate::config::ApiConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<HomeModel<RestCatalog>>,
    pub presenter_config: PresenterConfig,
}

impl AppState {
    /// Mount a presenter on a request-scoped view
    pub fn presenter<V: HomeView>(
        &self,
        view: Arc<V>,
        session_user: Option<UserId>,
    ) -> HomePresenter<RestCatalog, V> {
        HomePresenter::new(self.model.clone(), view, self.presenter_config.clone())
            .with_session_user(session_user)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Vitrine API");

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    let catalog = RestCatalog::new(config.catalog.clone())?;
    let model = HomeModel::new(catalog, config.page_sizes);

    let state = AppState {
        model: Arc::new(model),
        presenter_config: config.presenter.clone(),
    };

    // Build HTTP router
    let app = routes::create_router(state);

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
