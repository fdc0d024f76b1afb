//! Catalog domain module
//!
//! Entities, identifiers and errors shared by everything that reads the
//! streaming catalog, plus the port through which it is read.

pub mod entity;
pub mod error;
pub mod ids;
pub mod ports;

pub use entity::{ContentByGenre, ContentItem, ContentType, Genre};
pub use error::{FetchError, Result};
pub use ids::{ContentId, GenreId, RunId, UserId, ANONYMOUS_USER_ID};
pub use ports::CatalogDataSource;
