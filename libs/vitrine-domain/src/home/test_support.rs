//! In-memory catalog used by the home module tests

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::catalog::{
    CatalogDataSource, ContentItem, ContentType, FetchError, Genre, GenreId, UserId,
};

pub fn item(id: &str) -> ContentItem {
    ContentItem::new(id, ContentType::Movie, format!("Title {id}"), 2020, "L")
}

/// Shared log of the calls a `ScriptedCatalog` received, in call order
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn record(&self, call: String) {
        self.0.lock().unwrap().push(call);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }
}

/// Catalog answering every query with a canned result after `latency`
#[derive(Clone)]
pub struct ScriptedCatalog {
    pub featured: Result<ContentItem, FetchError>,
    pub trending: Result<Vec<ContentItem>, FetchError>,
    pub recent: Result<Vec<ContentItem>, FetchError>,
    pub top_rated: Result<Vec<ContentItem>, FetchError>,
    pub genres: Result<Vec<Genre>, FetchError>,
    pub by_genre: HashMap<GenreId, Result<Vec<ContentItem>, FetchError>>,
    pub continue_watching: Result<Vec<ContentItem>, FetchError>,
    pub recommended: Result<Vec<ContentItem>, FetchError>,
    pub latency: Duration,
    pub calls: CallLog,
}

impl Default for ScriptedCatalog {
    fn default() -> Self {
        Self {
            featured: Ok(item("featured")),
            trending: Ok(Vec::new()),
            recent: Ok(Vec::new()),
            top_rated: Ok(Vec::new()),
            genres: Ok(Vec::new()),
            by_genre: HashMap::new(),
            continue_watching: Ok(Vec::new()),
            recommended: Ok(Vec::new()),
            latency: Duration::ZERO,
            calls: CallLog::default(),
        }
    }
}

impl ScriptedCatalog {
    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }

    pub fn with_genre(mut self, id: &str, result: Result<Vec<ContentItem>, FetchError>) -> Self {
        self.by_genre.insert(GenreId::new(id), result);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn respond<T: Send + 'static>(
        &self,
        call: String,
        result: Result<T, FetchError>,
    ) -> impl Future<Output = Result<T, FetchError>> + Send {
        self.calls.record(call);
        let latency = self.latency;
        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            result
        }
    }
}

impl CatalogDataSource for ScriptedCatalog {
    fn get_featured_content(&self) -> impl Future<Output = Result<ContentItem, FetchError>> + Send {
        self.respond("featured".to_string(), self.featured.clone())
    }

    fn get_trending_content(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        self.respond(format!("trending:{limit}"), self.trending.clone())
    }

    fn get_recent_content(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        self.respond(format!("recent:{limit}"), self.recent.clone())
    }

    fn get_top_rated_content(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        self.respond(format!("top_rated:{limit}"), self.top_rated.clone())
    }

    fn get_all_genres(&self) -> impl Future<Output = Result<Vec<Genre>, FetchError>> + Send {
        self.respond("genres".to_string(), self.genres.clone())
    }

    fn get_content_by_genre(
        &self,
        genre_id: &GenreId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        let result = self
            .by_genre
            .get(genre_id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()));
        self.respond(format!("genre:{genre_id}:{limit}"), result)
    }

    fn get_continue_watching(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        self.respond(
            format!("continue_watching:{user_id}"),
            self.continue_watching.clone(),
        )
    }

    fn get_recommended_content(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        self.respond(format!("recommended:{user_id}"), self.recommended.clone())
    }
}
