use std::time::Duration;

use crate::catalog::UserId;

/// Shortest time the home feed stays in its loading state
pub const MIN_LOADING_DURATION: Duration = Duration::from_millis(1500);

/// Page sizes used by the home model for each row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    /// Trending row (default: 20)
    pub trending: usize,
    /// Recently added row (default: 15)
    pub recent: usize,
    /// Top rated row (default: 15)
    pub top_rated: usize,
    /// Each per-genre row (default: 10)
    pub per_genre: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            trending: 20,
            recent: 15,
            top_rated: 15,
            per_genre: 10,
        }
    }
}

/// Configuration for the home presenter
#[derive(Debug, Clone)]
pub struct PresenterConfig {
    /// Minimum perceived loading time of an initial load (default: 1500ms)
    pub min_loading_duration: Duration,
    /// Identity used for personalized rows when no session user is known
    pub fallback_user_id: UserId,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            min_loading_duration: MIN_LOADING_DURATION,
            fallback_user_id: UserId::anonymous(),
        }
    }
}
