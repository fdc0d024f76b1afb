//! # Vitrine Domain Layer
//!
//! This crate contains the business logic of the Vitrine home feed, the
//! discovery screen of a video-streaming service. It follows hexagonal
//! architecture principles:
//!
//! - **Entities**: Catalog models (ContentItem, Genre)
//! - **Ports**: Trait definitions for the outside world (CatalogDataSource,
//!   HomeView)
//! - **Services**: HomeModel and the HomePresenter orchestration
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (HTTP, the
//! backend-as-a-service client, rendering). The catalog backend and the
//! rendering layer are expressed as traits implemented by adapter crates.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitrine_domain::{CatalogDataSource, HomeModel, HomePresenter, HomeView};
//!
//! // The presenter is generic over any data source and any view
//! async fn example<D: CatalogDataSource, V: HomeView>(source: D, view: Arc<V>) {
//!     let model = Arc::new(HomeModel::with_source(source));
//!     let presenter = HomePresenter::with_defaults(model, view);
//!     let outcome = presenter.load_initial_data().await;
//!     println!("Home feed loaded: {:?}", outcome);
//!     presenter.dispose();
//! }
//! ```

pub mod catalog;
pub mod home;

// Re-export commonly used types
pub use catalog::{
    CatalogDataSource, ContentByGenre, ContentItem, ContentType, FetchError, Genre, GenreId,
    UserId,
};
pub use home::{HomeModel, HomePresenter, HomeView, PresenterConfig, RunOutcome};
