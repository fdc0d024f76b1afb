//! Home model - catalog queries with home-feed defaults
//!
//! The model is stateless: it wraps a `CatalogDataSource`, applies the row
//! page sizes and offers the per-genre batch fetch the presenter builds its
//! genre rows from.

use futures::future::join_all;
use tracing::{debug, warn};

use super::config::PageSizes;
use crate::catalog::{
    CatalogDataSource, ContentByGenre, ContentItem, FetchError, Genre, GenreId, UserId,
};

/// Result of fetching the rows of several genres at once
///
/// `content` always holds one entry per requested genre; genres whose fetch
/// failed map to an empty row and are also listed in `failed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreBatch {
    pub content: ContentByGenre,
    pub failed: Vec<GenreId>,
}

/// Service exposing the catalog queries the home feed needs
///
/// Generic over the data-source port, so the compiler generates one
/// specialized model per adapter.
pub struct HomeModel<D> {
    source: D,
    page_sizes: PageSizes,
}

impl<D> HomeModel<D>
where
    D: CatalogDataSource,
{
    /// Create a new HomeModel with the given data source and page sizes
    pub fn new(source: D, page_sizes: PageSizes) -> Self {
        Self { source, page_sizes }
    }

    /// Create a new HomeModel with default page sizes
    pub fn with_source(source: D) -> Self {
        Self::new(source, PageSizes::default())
    }

    /// The featured item shown at the top of the feed
    ///
    /// # Errors
    ///
    /// Propagates the data source failure as is; there is no retry.
    pub async fn get_featured_content(&self) -> Result<ContentItem, FetchError> {
        self.source.get_featured_content().await
    }

    pub async fn get_trending_content(&self) -> Result<Vec<ContentItem>, FetchError> {
        self.source
            .get_trending_content(self.page_sizes.trending)
            .await
    }

    pub async fn get_recent_content(&self) -> Result<Vec<ContentItem>, FetchError> {
        self.source.get_recent_content(self.page_sizes.recent).await
    }

    pub async fn get_top_rated_content(&self) -> Result<Vec<ContentItem>, FetchError> {
        self.source
            .get_top_rated_content(self.page_sizes.top_rated)
            .await
    }

    pub async fn get_all_genres(&self) -> Result<Vec<Genre>, FetchError> {
        self.source.get_all_genres().await
    }

    pub async fn get_content_by_genre(
        &self,
        genre_id: &GenreId,
    ) -> Result<Vec<ContentItem>, FetchError> {
        self.source
            .get_content_by_genre(genre_id, self.page_sizes.per_genre)
            .await
    }

    /// Items the user left unfinished
    ///
    /// The caller resolves the identity; anonymous viewers are passed the
    /// fallback id rather than skipped.
    pub async fn get_continue_watching(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ContentItem>, FetchError> {
        self.source.get_continue_watching(user_id).await
    }

    pub async fn get_recommended_content(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ContentItem>, FetchError> {
        self.source.get_recommended_content(user_id).await
    }

    /// Fetch the rows of every given genre concurrently
    ///
    /// A failing genre never fails the batch: it is logged and contributes
    /// an empty row.
    pub async fn get_content_by_genres(&self, genres: &[Genre]) -> ContentByGenre {
        self.fetch_genre_batch(genres).await.content
    }

    /// Same as [`get_content_by_genres`](Self::get_content_by_genres), also
    /// reporting which genres degraded to an empty row
    pub async fn fetch_genre_batch(&self, genres: &[Genre]) -> GenreBatch {
        let fetches = genres.iter().map(|genre| async move {
            (genre, self.get_content_by_genre(&genre.id).await)
        });

        let mut batch = GenreBatch::default();
        for (genre, result) in join_all(fetches).await {
            let items = match result {
                Ok(items) => {
                    debug!(genre_id = %genre.id, count = items.len(), "Loaded genre row");
                    items
                }
                Err(err) => {
                    warn!(
                        genre_id = %genre.id,
                        genre = %genre.name,
                        error = %err,
                        "Failed to load genre row, using empty row"
                    );
                    batch.failed.push(genre.id.clone());
                    Vec::new()
                }
            };
            batch.content.insert(genre.id.clone(), items);
        }

        batch
    }

    /// Get the page sizes applied by this model
    pub fn page_sizes(&self) -> &PageSizes {
        &self.page_sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::test_support::{item, ScriptedCatalog};

    #[tokio::test]
    async fn test_page_sizes_are_applied() {
        let catalog = ScriptedCatalog::default();
        let calls = catalog.calls();
        let model = HomeModel::with_source(catalog);

        model.get_trending_content().await.unwrap();
        model.get_recent_content().await.unwrap();
        model.get_top_rated_content().await.unwrap();
        model.get_content_by_genre(&GenreId::new("1")).await.unwrap();

        assert_eq!(
            calls.snapshot(),
            vec!["trending:20", "recent:15", "top_rated:15", "genre:1:10"]
        );
    }

    #[tokio::test]
    async fn test_custom_page_sizes() {
        let catalog = ScriptedCatalog::default();
        let calls = catalog.calls();
        let sizes = PageSizes {
            trending: 5,
            ..PageSizes::default()
        };
        let model = HomeModel::new(catalog, sizes);

        model.get_trending_content().await.unwrap();

        assert_eq!(calls.snapshot(), vec!["trending:5"]);
        assert_eq!(model.page_sizes().trending, 5);
    }

    #[tokio::test]
    async fn test_featured_failure_propagates() {
        let catalog = ScriptedCatalog {
            featured: Err(FetchError::transport("network down")),
            ..ScriptedCatalog::default()
        };
        let model = HomeModel::with_source(catalog);

        let result = model.get_featured_content().await;

        assert_eq!(result, Err(FetchError::transport("network down")));
    }

    #[tokio::test]
    async fn test_genre_batch_degrades_failed_genre() {
        let catalog = ScriptedCatalog::default()
            .with_genre("1", Ok(vec![item("a1")]))
            .with_genre("2", Err(FetchError::backend(500, "boom")))
            .with_genre("3", Ok(vec![item("c1"), item("c2")]));
        let model = HomeModel::with_source(catalog);
        let genres = vec![
            Genre::new("1", "Ação"),
            Genre::new("2", "Comédia"),
            Genre::new("3", "Drama"),
        ];

        let batch = model.fetch_genre_batch(&genres).await;

        assert_eq!(batch.content.len(), 3);
        assert_eq!(batch.content[&GenreId::new("1")], vec![item("a1")]);
        assert!(batch.content[&GenreId::new("2")].is_empty());
        assert_eq!(batch.content[&GenreId::new("3")].len(), 2);
        assert_eq!(batch.failed, vec![GenreId::new("2")]);
    }

    #[tokio::test]
    async fn test_content_by_genres_with_no_genres() {
        let model = HomeModel::with_source(ScriptedCatalog::default());

        let content = model.get_content_by_genres(&[]).await;

        assert!(content.is_empty());
    }

    #[tokio::test]
    async fn test_personalized_queries_forward_user() {
        let catalog = ScriptedCatalog::default();
        let calls = catalog.calls();
        let model = HomeModel::with_source(catalog);
        let user = UserId::new("u-42");

        model.get_continue_watching(&user).await.unwrap();
        model.get_recommended_content(&user).await.unwrap();

        assert_eq!(
            calls.snapshot(),
            vec!["continue_watching:u-42", "recommended:u-42"]
        );
    }
}
