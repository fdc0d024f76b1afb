//! REST Catalog Implementation
//!
//! This module implements the `CatalogDataSource` port against a
//! PostgREST-style backend-as-a-service. Each query is one HTTP request on a
//! table (or RPC) of the backend schema; every failure is converted to a
//! domain `FetchError`.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn, Instrument, Span};
use vitrine_domain::catalog::{
    CatalogDataSource, ContentItem, FetchError, Genre, GenreId, UserId,
};

const CONTENT_TABLE: &str = "conteudos";
const GENRE_TABLE: &str = "generos";
const HISTORY_TABLE: &str = "historico";
const RECOMMENDED_RPC: &str = "conteudos_recomendados";

/// Connection settings for the backend
#[derive(Debug, Clone)]
pub struct RestCatalogConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub base_url: String,
    /// Public (anon) API key sent with every request
    pub api_key: String,
    /// Timeout applied to each request (default: 10s)
    pub request_timeout: Duration,
}

impl RestCatalogConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Error body returned by the backend on non-success statuses
#[derive(Deserialize)]
struct BackendErrorBody {
    message: String,
}

/// Row of the watch history joined with its content
#[derive(Deserialize)]
struct HistoryRow {
    conteudo: Option<ContentItem>,
}

/// REST-based implementation of the CatalogDataSource port
///
/// This adapter translates catalog queries into PostgREST requests:
/// filters and ordering go in the query string (`genero_id=eq.3`,
/// `order=avaliacao.desc.nullslast`), personalized recommendations go
/// through an RPC endpoint.
///
/// ## Error Handling
///
/// - Connection failures and timeouts become `FetchError::Transport`
/// - Non-2xx answers become `FetchError::Backend` with the backend message
/// - Undecodable bodies become `FetchError::InvalidResponse`
#[derive(Clone)]
pub struct RestCatalog {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestCatalog {
    /// Create a new REST catalog from its configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::ConfigError` if the base URL is empty or the
    /// HTTP client cannot be built.
    pub fn new(config: RestCatalogConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| FetchError::config_error(format!("HTTP client: {err}")))?;

        Self::with_client(client, config.base_url, config.api_key)
    }

    /// Create a new REST catalog around an existing HTTP client
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(FetchError::config_error("backend URL is empty"));
        }

        info!(base_url = %base_url, "Initializing RestCatalog");
        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Get the backend URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, function)
    }

    fn select(&self, table: &str, query: &[(&str, String)]) -> RequestBuilder {
        self.client.get(self.table_url(table)).query(query)
    }

    /// Attach credentials and turn the request into a decoding future
    ///
    /// The request is built eagerly so the returned future owns everything
    /// it needs and does not borrow the adapter.
    fn fetch<T>(
        &self,
        what: &'static str,
        request: RequestBuilder,
    ) -> impl Future<Output = Result<T, FetchError>> + Send
    where
        T: DeserializeOwned + Send + 'static,
    {
        let request = request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);

        async move {
            debug!(what, "Sending backend request");

            let response = request.send().await.map_err(|err| {
                warn!(what, error = %err, "Backend request failed");
                FetchError::transport(err.to_string())
            })?;

            let status = response.status();
            let body = response.bytes().await.map_err(|err| {
                warn!(what, error = %err, "Failed to read backend response");
                FetchError::transport(err.to_string())
            })?;

            if !status.is_success() {
                let message = serde_json::from_slice::<BackendErrorBody>(&body)
                    .map(|body| body.message)
                    .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
                error!(what, status = status.as_u16(), message = %message, "Backend rejected request");
                return Err(FetchError::backend(status.as_u16(), message));
            }

            serde_json::from_slice(&body).map_err(|err| {
                error!(what, error = %err, "Failed to decode backend response");
                FetchError::invalid_response(format!("{what}: {err}"))
            })
        }
        .instrument(Span::current())
    }

    fn content_page(
        &self,
        what: &'static str,
        order: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        let request = self.select(
            CONTENT_TABLE,
            &[
                ("select", "*".to_string()),
                ("order", order.to_string()),
                ("limit", limit.to_string()),
            ],
        );
        self.fetch(what, request)
    }
}

impl CatalogDataSource for RestCatalog {
    #[instrument(skip(self))]
    fn get_featured_content(&self) -> impl Future<Output = Result<ContentItem, FetchError>> + Send {
        let request = self.select(
            CONTENT_TABLE,
            &[
                ("select", "*".to_string()),
                ("destaque", "eq.true".to_string()),
                ("order", "created_at.desc".to_string()),
                ("limit", "1".to_string()),
            ],
        );
        let rows = self.fetch::<Vec<ContentItem>>("featured", request);

        async move {
            rows.await?
                .into_iter()
                .next()
                .ok_or_else(|| FetchError::not_found("no featured content"))
        }
    }

    #[instrument(skip(self))]
    fn get_trending_content(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        self.content_page("trending", "visualizacoes.desc", limit)
    }

    #[instrument(skip(self))]
    fn get_recent_content(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        self.content_page("recent", "created_at.desc", limit)
    }

    #[instrument(skip(self))]
    fn get_top_rated_content(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        self.content_page("top_rated", "avaliacao.desc.nullslast", limit)
    }

    #[instrument(skip(self))]
    fn get_all_genres(&self) -> impl Future<Output = Result<Vec<Genre>, FetchError>> + Send {
        let request = self.select(
            GENRE_TABLE,
            &[
                ("select", "id,nome".to_string()),
                ("order", "nome.asc".to_string()),
            ],
        );
        self.fetch("genres", request)
    }

    #[instrument(skip(self), fields(genre_id = %genre_id))]
    fn get_content_by_genre(
        &self,
        genre_id: &GenreId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        let request = self.select(
            CONTENT_TABLE,
            &[
                ("select", "*".to_string()),
                ("genero_id", format!("eq.{genre_id}")),
                ("order", "visualizacoes.desc".to_string()),
                ("limit", limit.to_string()),
            ],
        );
        self.fetch("content_by_genre", request)
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    fn get_continue_watching(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        let request = self.select(
            HISTORY_TABLE,
            &[
                ("select", "conteudo:conteudos(*)".to_string()),
                ("usuario_id", format!("eq.{user_id}")),
                ("concluido", "eq.false".to_string()),
                ("order", "updated_at.desc".to_string()),
            ],
        );
        let rows = self.fetch::<Vec<HistoryRow>>("continue_watching", request);

        // history rows whose content was removed come back with a null join
        async move {
            Ok(rows
                .await?
                .into_iter()
                .filter_map(|row| row.conteudo)
                .collect())
        }
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    fn get_recommended_content(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<ContentItem>, FetchError>> + Send {
        let request = self
            .client
            .post(self.rpc_url(RECOMMENDED_RPC))
            .json(&serde_json::json!({ "usuario_id": user_id }));
        self.fetch("recommended", request)
    }
}
