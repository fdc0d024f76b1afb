//! # Vitrine REST Adapter
//!
//! Implements the `CatalogDataSource` port of `vitrine-domain` on top of a
//! PostgREST-compatible backend-as-a-service (Supabase and friends).
//!
//! ```rust,no_run
//! use vitrine_rest::infrastructure::{RestCatalog, RestCatalogConfig};
//!
//! let config = RestCatalogConfig::new("https://xyz.supabase.co", "anon-key");
//! let catalog = RestCatalog::new(config).expect("valid backend configuration");
//! ```

pub mod infrastructure;

pub use infrastructure::{RestCatalog, RestCatalogConfig};
