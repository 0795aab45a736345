use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::stories::domain::StoryId;

#[derive(Debug, derive_more::Error, derive_more::Display)]
pub(crate) enum RepositoryError {
    #[display("No story with id {id}")]
    StoryNotFound {
        id: StoryId,
    },
}

/// Failures surfaced to API callers, rendered as `{"msg": ...}`.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum ApiError {
    #[display("Invalid username or password!")]
    InvalidCredentials,

    #[display("Unauthorized")]
    Unauthorized,

    #[display("Title and description are required!")]
    MissingFields,

    #[display("No spoilers...")]
    NoSpoilers,

    #[display("Unable to delete this story spoiler!")]
    Undeletable,
}

/// Body of every story response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<StoryId>,
}

impl MessageResponse {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            story_id: None,
        }
    }

    pub(crate) fn with_story(msg: impl Into<String>, story_id: StoryId) -> Self {
        Self {
            msg: msg.into(),
            story_id: Some(story_id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MissingFields | Self::Undeletable => StatusCode::BAD_REQUEST,
            Self::NoSpoilers => StatusCode::NOT_FOUND,
        };
        let body = MessageResponse::new(self.to_string());

        (status, Json(body)).into_response()
    }
}
