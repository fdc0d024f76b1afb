//! Infrastructure adapters backed by the REST backend

mod rest_catalog;

pub use rest_catalog::{RestCatalog, RestCatalogConfig};
