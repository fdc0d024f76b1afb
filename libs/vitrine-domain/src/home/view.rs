//! View port of the home feed
//!
//! The rendering layer implements `HomeView`; the presenter pushes data into
//! it one row at a time. Setters take `&self` because renderers keep their
//! state behind their own synchronization and may be shared with the tasks
//! driving the presenter.

use crate::catalog::{ContentByGenre, ContentItem, Genre};

/// Setter callbacks the home presenter drives
///
/// Every method may be called zero or more times per load. Implementations
/// must not panic; a panicking view is a bug in the view.
#[cfg_attr(test, mockall::automock)]
pub trait HomeView: Send + Sync {
    /// Enter (`true`) or leave (`false`) the loading state
    fn set_loading(&self, loading: bool);

    fn set_featured_content(&self, item: ContentItem);

    fn set_trending_content(&self, items: Vec<ContentItem>);

    fn set_recent_content(&self, items: Vec<ContentItem>);

    fn set_top_rated_content(&self, items: Vec<ContentItem>);

    fn set_genres(&self, genres: Vec<Genre>);

    /// Publish genre rows
    ///
    /// An initial load sends the complete map once. Single-genre loads send a
    /// one-entry map, which the view merges into what it already shows.
    fn set_content_by_genre(&self, content: ContentByGenre);

    fn set_continue_watching(&self, items: Vec<ContentItem>);

    fn set_recommended_content(&self, items: Vec<ContentItem>);

    /// Show a user-facing error message
    fn show_error(&self, message: String);
}
