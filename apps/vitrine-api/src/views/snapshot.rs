//! View that folds presenter updates into one serializable state

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use utoipa::ToSchema;
use vitrine_domain::{ContentByGenre, ContentItem, Genre, HomeView};

/// Rendered state of the home feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct HomeSnapshot {
    /// Whether the feed is still in its loading state
    pub loading: bool,
    #[schema(value_type = Option<Object>)]
    pub featured: Option<ContentItem>,
    #[schema(value_type = Vec<Object>)]
    pub trending: Vec<ContentItem>,
    #[schema(value_type = Vec<Object>)]
    pub recent: Vec<ContentItem>,
    #[schema(value_type = Vec<Object>)]
    pub top_rated: Vec<ContentItem>,
    #[schema(value_type = Vec<Object>)]
    pub genres: Vec<Genre>,
    /// Rows keyed by genre id
    #[schema(value_type = Object)]
    pub content_by_genre: ContentByGenre,
    #[schema(value_type = Vec<Object>)]
    pub continue_watching: Vec<ContentItem>,
    #[schema(value_type = Vec<Object>)]
    pub recommended: Vec<ContentItem>,
    /// Last user-facing error message, if any
    #[schema(example = "Não foi possível carregar os conteúdos. Tente novamente mais tarde.")]
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct SnapshotView {
    state: Mutex<HomeSnapshot>,
}

impl SnapshotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> HomeSnapshot {
        self.state().clone()
    }

    fn state(&self) -> MutexGuard<'_, HomeSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HomeView for SnapshotView {
    fn set_loading(&self, loading: bool) {
        self.state().loading = loading;
    }

    fn set_featured_content(&self, item: ContentItem) {
        self.state().featured = Some(item);
    }

    fn set_trending_content(&self, items: Vec<ContentItem>) {
        self.state().trending = items;
    }

    fn set_recent_content(&self, items: Vec<ContentItem>) {
        self.state().recent = items;
    }

    fn set_top_rated_content(&self, items: Vec<ContentItem>) {
        self.state().top_rated = items;
    }

    fn set_genres(&self, genres: Vec<Genre>) {
        self.state().genres = genres;
    }

    fn set_content_by_genre(&self, content: ContentByGenre) {
        self.state().content_by_genre.extend(content);
    }

    fn set_continue_watching(&self, items: Vec<ContentItem>) {
        self.state().continue_watching = items;
    }

    fn set_recommended_content(&self, items: Vec<ContentItem>) {
        self.state().recommended = items;
    }

    fn show_error(&self, message: String) {
        self.state().error = Some(message);
    }
}
