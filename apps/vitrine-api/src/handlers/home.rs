//! Home feed handlers
//!
//! Each request mounts its own presenter on a fresh view and disposes it
//! once the load is over (or the client is gone).

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, error, info, Instrument};
use vitrine_domain::GenreId;

use crate::{
    dto::home::{ErrorResponse, GenreContentResponse, HomeQuery},
    error::ApiError,
    views::{EventView, HomeSnapshot, SnapshotView, ViewEvent},
    AppState,
};

/// Load the whole home feed and return the rendered state
#[utoipa::path(
    get,
    path = "/home",
    params(HomeQuery),
    responses(
        (status = 200, description = "Rendered home feed; a failed load carries its message in `error`", body = HomeSnapshot)
    ),
    tag = "home"
)]
pub async fn home_handler(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Json<HomeSnapshot> {
    info!(user_id = ?query.user_id, "Received home feed request");

    let view = Arc::new(SnapshotView::new());
    let presenter = state.presenter(view.clone(), query.session_user());

    let outcome = presenter.load_initial_data().await;
    presenter.dispose();

    info!(success = outcome.is_success(), "Home feed rendered");
    Json(view.snapshot())
}

/// Stream the home feed load as server-sent events
///
/// Every view update is sent as one event named after the row it fills.
/// The stream ends when the load is over; a client that disconnects early
/// disposes the presenter.
#[utoipa::path(
    get,
    path = "/home/events",
    params(HomeQuery),
    responses(
        (status = 200, description = "Stream of view updates", content_type = "text/event-stream", body = String)
    ),
    tag = "home"
)]
pub async fn home_events_handler(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!(user_id = ?query.user_id, "Received home event stream request");

    let (view, receiver) = EventView::channel();
    let view = Arc::new(view);
    let presenter = state.presenter(view.clone(), query.session_user());

    tokio::spawn(
        async move {
            let load = presenter.load_initial_data();
            tokio::pin!(load);

            tokio::select! {
                outcome = &mut load => {
                    debug!(success = outcome.is_success(), "Home event stream finished");
                }
                _ = view.closed() => {
                    info!("Client disconnected, disposing presenter");
                    presenter.dispose();
                    load.await;
                }
            }

            presenter.dispose();
        }
        .in_current_span(),
    );

    let stream = UnboundedReceiverStream::new(receiver).map(|event| Ok(to_sse(&event)));
    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn to_sse(event: &ViewEvent) -> Event {
    let sse = Event::default().event(event.name());
    match sse.clone().json_data(event) {
        Ok(sse) => sse,
        Err(err) => {
            error!(event = event.name(), error = %err, "Failed to encode view event");
            sse.data("null")
        }
    }
}

/// Load a single genre row
#[utoipa::path(
    get,
    path = "/genres/{genre_id}/content",
    params(
        ("genre_id" = String, Path, description = "Genre identifier", example = "3")
    ),
    responses(
        (status = 200, description = "Content of the genre", body = GenreContentResponse),
        (status = 400, description = "Bad request - empty genre id", body = ErrorResponse),
        (status = 502, description = "The catalog backend failed", body = ErrorResponse)
    ),
    tag = "home"
)]
pub async fn genre_content_handler(
    State(state): State<AppState>,
    Path(genre_id): Path<String>,
) -> Result<Json<GenreContentResponse>, ApiError> {
    let genre_id = genre_id.trim();
    if genre_id.is_empty() {
        return Err(ApiError::InvalidGenreId);
    }
    let genre_id = GenreId::new(genre_id);
    info!(genre_id = %genre_id, "Received genre content request");

    let view = Arc::new(SnapshotView::new());
    let presenter = state.presenter(view.clone(), None);

    presenter.load_content_by_genre(&genre_id).await;
    presenter.dispose();

    let mut snapshot = view.snapshot();
    if let Some(message) = snapshot.error {
        error!(genre_id = %genre_id, "Genre content request failed");
        return Err(ApiError::Catalog(message));
    }

    let items = snapshot
        .content_by_genre
        .remove(&genre_id)
        .unwrap_or_default();

    Ok(Json(GenreContentResponse { genre_id, items }))
}
