//! Catalog entities consumed by the home feed
//!
//! Everything here is read-only data returned by the backend. The home
//! orchestration never mutates a `ContentItem`; it only routes them to the
//! view. Wire names follow the backend schema (Portuguese column names), with
//! English aliases accepted on input.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ids::{ContentId, GenreId};

/// Kind of catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[serde(alias = "filme")]
    Movie,
    #[serde(alias = "serie")]
    Series,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Movie => f.write_str("movie"),
            ContentType::Series => f.write_str("series"),
        }
    }
}

/// A catalog entry (movie or series)
///
/// The mandatory fields are what every row of the feed needs; the optional
/// ones are display metadata that may be missing for older entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,

    #[serde(rename = "tipo", alias = "type")]
    pub content_type: ContentType,

    #[serde(rename = "titulo", alias = "title")]
    pub title: String,

    #[serde(rename = "descricao", alias = "description", default)]
    pub description: String,

    #[serde(rename = "ano_lancamento", alias = "release_year")]
    pub release_year: u16,

    /// Age rating label, e.g. "L", "12", "16"
    #[serde(rename = "classificacao_etaria", alias = "age_rating")]
    pub age_rating: String,

    /// Whether the item can be watched without a subscription
    #[serde(rename = "gratuito", alias = "is_free", default)]
    pub is_free: bool,

    #[serde(rename = "avaliacao", alias = "rating", default)]
    pub rating: Option<f32>,

    #[serde(rename = "genero_id", alias = "genre_id", default)]
    pub genre_id: Option<GenreId>,

    #[serde(rename = "duracao_minutos", alias = "duration_minutes", default)]
    pub duration_minutes: Option<u32>,

    #[serde(rename = "thumbnail_url", default)]
    pub thumbnail_url: Option<String>,

    #[serde(rename = "banner_url", default)]
    pub banner_url: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContentItem {
    /// Build an item with only the mandatory fields set
    pub fn new(
        id: impl Into<ContentId>,
        content_type: ContentType,
        title: impl Into<String>,
        release_year: u16,
        age_rating: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content_type,
            title: title.into(),
            description: String::new(),
            release_year,
            age_rating: age_rating.into(),
            is_free: false,
            rating: None,
            genre_id: None,
            duration_minutes: None,
            thumbnail_url: None,
            banner_url: None,
            created_at: None,
        }
    }

    pub fn is_movie(&self) -> bool {
        self.content_type == ContentType::Movie
    }

    pub fn is_series(&self) -> bool {
        self.content_type == ContentType::Series
    }
}

/// A genre, used as the key space of the per-genre rows
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
}

impl Genre {
    pub fn new(id: impl Into<GenreId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Content rows keyed by genre
///
/// Genres are fetched concurrently so population order is not meaningful;
/// consumers get the map only once every genre has settled.
pub type ContentByGenre = HashMap<GenreId, Vec<ContentItem>>;
