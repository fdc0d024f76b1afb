//! Home presenter - orchestration of the home feed load
//!
//! The presenter fans out the catalog queries through the [`HomeModel`],
//! applies the failure policy of each branch and pushes results into the
//! [`HomeView`]:
//!
//! - **Baseline** (featured, trending, recent, top rated, genres): all or
//!   nothing. One failure shows an error and publishes none of them.
//! - **Genre rows**: best effort per genre. A failing genre becomes an
//!   empty row.
//! - **Personalized rows** (continue watching, recommended): best effort as a
//!   unit. Failures are logged and never reach the view.
//!
//! An initial load keeps the view in its loading state for at least
//! [`PresenterConfig::min_loading_duration`] and always leaves it.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::{config::PresenterConfig, model::HomeModel, view::HomeView};
use crate::catalog::{
    CatalogDataSource, ContentByGenre, ContentItem, FetchError, Genre, GenreId, RunId, UserId,
};

/// Message shown when the home feed cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str =
    "Não foi possível carregar os conteúdos. Tente novamente mais tarde.";

/// Message shown when a single genre row cannot be loaded
pub fn genre_error_message(genre_id: &GenreId) -> String {
    format!("Não foi possível carregar os conteúdos do gênero {genre_id}. Tente novamente.")
}

/// Whether an initial load is currently running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// How an initial load ended
///
/// Only used for reporting: the view has already been told everything it
/// needs by the time this is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Every branch published its data
    Success,
    /// Baseline published, some best-effort data was dropped
    PartialFailure {
        failed_genres: Vec<GenreId>,
        personalized_failed: bool,
    },
    /// A baseline fetch failed; nothing was published and an error was shown
    Failed { reason: FetchError },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success)
    }
}

struct Baseline {
    featured: ContentItem,
    trending: Vec<ContentItem>,
    recent: Vec<ContentItem>,
    top_rated: Vec<ContentItem>,
    genres: Vec<Genre>,
}

/// Presenter of the home feed
///
/// Created once per view mount and disposed on unmount. It holds no
/// resources: disposing only stops further view updates, in-flight fetches
/// are left to finish and their results are dropped.
pub struct HomePresenter<D, V> {
    model: Arc<HomeModel<D>>,
    view: Arc<V>,
    config: PresenterConfig,
    session_user: Option<UserId>,
    active: AtomicBool,
    running_loads: AtomicUsize,
    active_genres: Mutex<HashSet<GenreId>>,
    loaded_genres: Mutex<HashSet<GenreId>>,
}

impl<D, V> HomePresenter<D, V>
where
    D: CatalogDataSource,
    V: HomeView,
{
    /// Create a presenter bound to a model and a view
    pub fn new(model: Arc<HomeModel<D>>, view: Arc<V>, config: PresenterConfig) -> Self {
        Self {
            model,
            view,
            config,
            session_user: None,
            active: AtomicBool::new(true),
            running_loads: AtomicUsize::new(0),
            active_genres: Mutex::new(HashSet::new()),
            loaded_genres: Mutex::new(HashSet::new()),
        }
    }

    /// Create a presenter with the default configuration
    pub fn with_defaults(model: Arc<HomeModel<D>>, view: Arc<V>) -> Self {
        Self::new(model, view, PresenterConfig::default())
    }

    /// Set the authenticated user whose personalized rows are loaded
    ///
    /// `None` keeps the configured fallback identity.
    pub fn with_session_user(mut self, user: Option<UserId>) -> Self {
        self.session_user = user;
        self
    }

    /// Alias of [`load_initial_data`](Self::load_initial_data)
    pub async fn initialize(&self) -> RunOutcome {
        self.load_initial_data().await
    }

    /// Load the whole home feed into the view
    ///
    /// Never fails: failures are either shown through
    /// [`HomeView::show_error`] or degraded to empty rows, and the loading
    /// state is always left.
    pub async fn load_initial_data(&self) -> RunOutcome {
        let run_id = RunId::new();
        let span = info_span!("home_load", run_id = %run_id);

        async {
            let started = Instant::now();
            self.running_loads.fetch_add(1, Ordering::AcqRel);
            self.present(|view| view.set_loading(true));

            let outcome = self.run_load().await;

            self.hold_loading_floor(started).await;
            self.present(|view| view.set_loading(false));
            self.running_loads.fetch_sub(1, Ordering::AcqRel);

            info!(
                outcome = ?outcome,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Home load finished"
            );
            outcome
        }
        .instrument(span)
        .await
    }

    async fn run_load(&self) -> RunOutcome {
        let baseline = match self.fetch_baseline().await {
            Ok(baseline) => baseline,
            Err(reason) => {
                self.present(|view| view.show_error(LOAD_ERROR_MESSAGE.to_string()));
                return RunOutcome::Failed { reason };
            }
        };

        let Baseline {
            featured,
            trending,
            recent,
            top_rated,
            genres,
        } = baseline;

        self.present(|view| view.set_featured_content(featured));
        self.present(|view| view.set_trending_content(trending));
        self.present(|view| view.set_recent_content(recent));
        self.present(|view| view.set_top_rated_content(top_rated));
        self.present(|view| view.set_genres(genres.clone()));

        let (failed_genres, personalized_failed) =
            tokio::join!(self.load_genre_rows(&genres), self.load_personalized_rows());

        if failed_genres.is_empty() && !personalized_failed {
            RunOutcome::Success
        } else {
            RunOutcome::PartialFailure {
                failed_genres,
                personalized_failed,
            }
        }
    }

    /// Fetch the five baseline queries concurrently, failing if any fails
    async fn fetch_baseline(&self) -> Result<Baseline, FetchError> {
        let (featured, trending, recent, top_rated, genres) = tokio::join!(
            self.model.get_featured_content(),
            self.model.get_trending_content(),
            self.model.get_recent_content(),
            self.model.get_top_rated_content(),
            self.model.get_all_genres(),
        );

        for (branch, failure) in [
            ("featured", featured.as_ref().err()),
            ("trending", trending.as_ref().err()),
            ("recent", recent.as_ref().err()),
            ("top_rated", top_rated.as_ref().err()),
            ("genres", genres.as_ref().err()),
        ] {
            if let Some(err) = failure {
                error!(branch, error = %err, "Baseline fetch failed");
            }
        }

        Ok(Baseline {
            featured: featured?,
            trending: trending?,
            recent: recent?,
            top_rated: top_rated?,
            genres: genres?,
        })
    }

    /// Publish one row per genre, returning the genres that degraded
    async fn load_genre_rows(&self, genres: &[Genre]) -> Vec<GenreId> {
        let batch = self.model.fetch_genre_batch(genres).await;

        lock(&self.loaded_genres).extend(
            batch
                .content
                .keys()
                .filter(|id| !batch.failed.contains(id))
                .cloned(),
        );

        self.present(|view| view.set_content_by_genre(batch.content));
        batch.failed
    }

    /// Publish the personalized rows, returning whether the branch failed
    async fn load_personalized_rows(&self) -> bool {
        let user_id = self.resolve_user_id();
        let (continue_watching, recommended) = tokio::join!(
            self.model.get_continue_watching(&user_id),
            self.model.get_recommended_content(&user_id),
        );

        match (continue_watching, recommended) {
            (Ok(continue_watching), Ok(recommended)) => {
                self.present(|view| view.set_continue_watching(continue_watching));
                self.present(|view| view.set_recommended_content(recommended));
                false
            }
            (continue_watching, recommended) => {
                for err in [continue_watching.err(), recommended.err()]
                    .into_iter()
                    .flatten()
                {
                    warn!(
                        user_id = %user_id,
                        error = %err,
                        "Personalized rows unavailable, skipping"
                    );
                }
                true
            }
        }
    }

    /// Load a single genre row and merge it into the view
    ///
    /// A failure shows a genre-scoped error; rows already shown are left
    /// untouched.
    pub async fn load_content_by_genre(&self, genre_id: &GenreId) {
        match self.model.get_content_by_genre(genre_id).await {
            Ok(items) => {
                debug!(genre_id = %genre_id, count = items.len(), "Loaded genre row");
                lock(&self.loaded_genres).insert(genre_id.clone());
                let update = ContentByGenre::from([(genre_id.clone(), items)]);
                self.present(|view| view.set_content_by_genre(update));
            }
            Err(err) => {
                error!(genre_id = %genre_id, error = %err, "Failed to load genre row");
                self.present(|view| view.show_error(genre_error_message(genre_id)));
            }
        }
    }

    /// Toggle a genre filter, returning whether it is now active
    ///
    /// Activating a genre whose row this presenter has not loaded yet loads
    /// it. Deactivating never fetches.
    pub async fn toggle_genre(&self, genre_id: &GenreId) -> bool {
        let (activated, needs_load) = {
            let mut active = lock(&self.active_genres);
            if active.remove(genre_id) {
                (false, false)
            } else {
                active.insert(genre_id.clone());
                (true, !lock(&self.loaded_genres).contains(genre_id))
            }
        };

        debug!(genre_id = %genre_id, activated, needs_load, "Genre toggled");

        if needs_load {
            self.load_content_by_genre(genre_id).await;
        }

        activated
    }

    /// Genres currently toggled on
    pub fn active_genres(&self) -> HashSet<GenreId> {
        lock(&self.active_genres).clone()
    }

    pub fn is_genre_active(&self, genre_id: &GenreId) -> bool {
        lock(&self.active_genres).contains(genre_id)
    }

    /// Stop pushing updates to the view
    ///
    /// Loads still in flight run to completion, but none of their results
    /// reach the view.
    pub fn dispose(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            info!("Home presenter disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        !self.active.load(Ordering::Acquire)
    }

    pub fn phase(&self) -> Phase {
        if self.running_loads.load(Ordering::Acquire) > 0 {
            Phase::Loading
        } else {
            Phase::Idle
        }
    }

    /// Get the presenter configuration
    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    fn resolve_user_id(&self) -> UserId {
        self.session_user
            .clone()
            .unwrap_or_else(|| self.config.fallback_user_id.clone())
    }

    async fn hold_loading_floor(&self, started: Instant) {
        let remaining = self
            .config
            .min_loading_duration
            .saturating_sub(started.elapsed());
        if !remaining.is_zero() {
            debug!(
                remaining_ms = remaining.as_millis() as u64,
                "Holding loading state"
            );
            sleep(remaining).await;
        }
    }

    fn present(&self, update: impl FnOnce(&V)) {
        if self.is_disposed() {
            debug!("Presenter disposed, dropping view update");
            return;
        }
        update(&self.view);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
