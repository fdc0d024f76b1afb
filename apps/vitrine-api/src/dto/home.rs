//! DTOs for home feed endpoints

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use vitrine_domain::{ContentItem, GenreId, UserId};

/// Query parameters of the home feed endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HomeQuery {
    /// Authenticated user; personalized rows fall back to the anonymous
    /// identity when omitted
    #[param(example = "8d1f6a42-3c5e-4b8e-9a51-0f2b7c6d9e10")]
    pub user_id: Option<String>,
}

impl HomeQuery {
    pub fn session_user(&self) -> Option<UserId> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(UserId::new)
    }
}

/// Response body of the single-genre endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct GenreContentResponse {
    #[schema(value_type = String, example = "3")]
    pub genre_id: GenreId,
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<ContentItem>,
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// User-facing error message
    #[schema(example = "Não foi possível carregar os conteúdos do gênero 3. Tente novamente.")]
    pub error: String,
}
