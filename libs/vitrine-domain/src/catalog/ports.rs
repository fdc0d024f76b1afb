//! Port for the catalog backend
//!
//! The home feed reads everything through this trait. Adapters (the REST
//! BaaS client, in-memory fakes in tests) implement it; the domain never
//! names a concrete backend.
//!
//! Like the rest of the crate's ports it uses `impl Future` return types, so
//! services stay generic over the adapter and dispatch statically.

use std::future::Future;

use crate::catalog::{
    entity::{ContentItem, Genre},
    error::FetchError,
    ids::{GenreId, UserId},
};

/// Data access port for catalog queries
///
/// Every method is an independent remote call that may fail. Implementations
/// must translate their own failures into `FetchError` and must not retry;
/// retry policy, if any, belongs to the caller.
pub trait CatalogDataSource: Send + Sync {
    /// The single item promoted at the top of the home feed
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NotFound` when nothing is marked as featured.
    fn get_featured_content(&self) -> impl Future<Output = Result<ContentItem, FetchError>> + Send;

    /// Most watched items, at most `limit`
    fn get_trending_content(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send;

    /// Newest items, at most `limit`
    fn get_recent_content(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send;

    /// Best rated items, at most `limit`
    fn get_top_rated_content(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send;

    /// Every genre known to the catalog
    fn get_all_genres(&self) -> impl Future<Output = Result<Vec<Genre>, FetchError>> + Send;

    /// Items of one genre, at most `limit`
    fn get_content_by_genre(
        &self,
        genre_id: &GenreId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send;

    /// Items the user started but did not finish
    fn get_continue_watching(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send;

    /// Items recommended for the user
    fn get_recommended_content(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send;
}
