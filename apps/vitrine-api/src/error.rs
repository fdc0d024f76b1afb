//! Handler errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::home::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Genre id cannot be empty")]
    InvalidGenreId,

    /// The catalog backend failed; carries the message the view was shown
    #[error("{0}")]
    Catalog(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidGenreId => StatusCode::BAD_REQUEST,
            ApiError::Catalog(_) => StatusCode::BAD_GATEWAY,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
