//! View that forwards every presenter update as an event

use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::trace;
use vitrine_domain::{ContentByGenre, ContentItem, Genre, HomeView};

/// One setter call of the presenter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ViewEvent {
    Loading(bool),
    Featured(ContentItem),
    Trending(Vec<ContentItem>),
    Recent(Vec<ContentItem>),
    TopRated(Vec<ContentItem>),
    Genres(Vec<Genre>),
    ContentByGenre(ContentByGenre),
    ContinueWatching(Vec<ContentItem>),
    Recommended(Vec<ContentItem>),
    Error(String),
}

impl ViewEvent {
    /// Event name used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            ViewEvent::Loading(_) => "loading",
            ViewEvent::Featured(_) => "featured",
            ViewEvent::Trending(_) => "trending",
            ViewEvent::Recent(_) => "recent",
            ViewEvent::TopRated(_) => "top_rated",
            ViewEvent::Genres(_) => "genres",
            ViewEvent::ContentByGenre(_) => "content_by_genre",
            ViewEvent::ContinueWatching(_) => "continue_watching",
            ViewEvent::Recommended(_) => "recommended",
            ViewEvent::Error(_) => "error",
        }
    }
}

pub struct EventView {
    sender: UnboundedSender<ViewEvent>,
}

impl EventView {
    /// Create a view and the receiving end of its events
    pub fn channel() -> (Self, UnboundedReceiver<ViewEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Resolves once the receiving side has been dropped
    pub async fn closed(&self) {
        self.sender.closed().await
    }

    fn emit(&self, event: ViewEvent) {
        let name = event.name();
        if self.sender.send(event).is_err() {
            trace!(event = name, "Event dropped, receiver is gone");
        }
    }
}

impl HomeView for EventView {
    fn set_loading(&self, loading: bool) {
        self.emit(ViewEvent::Loading(loading));
    }

    fn set_featured_content(&self, item: ContentItem) {
        self.emit(ViewEvent::Featured(item));
    }

    fn set_trending_content(&self, items: Vec<ContentItem>) {
        self.emit(ViewEvent::Trending(items));
    }

    fn set_recent_content(&self, items: Vec<ContentItem>) {
        self.emit(ViewEvent::Recent(items));
    }

    fn set_top_rated_content(&self, items: Vec<ContentItem>) {
        self.emit(ViewEvent::TopRated(items));
    }

    fn set_genres(&self, genres: Vec<Genre>) {
        self.emit(ViewEvent::Genres(genres));
    }

    fn set_content_by_genre(&self, content: ContentByGenre) {
        self.emit(ViewEvent::ContentByGenre(content));
    }

    fn set_continue_watching(&self, items: Vec<ContentItem>) {
        self.emit(ViewEvent::ContinueWatching(items));
    }

    fn set_recommended_content(&self, items: Vec<ContentItem>) {
        self.emit(ViewEvent::Recommended(items));
    }

    fn show_error(&self, message: String) {
        self.emit(ViewEvent::Error(message));
    }
}
