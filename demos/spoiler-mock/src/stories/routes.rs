use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::info;

use super::domain::{StoryDraft, StoryId};
use super::repository::StoryRepository;
use crate::AppState;
use crate::errors::{ApiError, MessageResponse};

const CREATED: &str = "Successfully created!";
const EDITED: &str = "Successfully edited";
const DELETED: &str = "Deleted successfully!";

pub(crate) fn story_router() -> Router<AppState> {
    Router::new()
        .route("/Create", post(create_story))
        .route("/Edit/{story_id}", put(edit_story))
        .route("/All", get(list_stories))
        .route("/Delete/{story_id}", delete(delete_story))
}

async fn create_story(
    State(repo): State<StoryRepository>,
    Json(draft): Json<StoryDraft>,
) -> Result<impl IntoResponse, ApiError> {
    if !draft.is_complete() {
        return Err(ApiError::MissingFields);
    }

    let story_id = repo.create(draft).await;
    info!(%story_id, "story created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_story(CREATED, story_id)),
    ))
}

async fn edit_story(
    State(repo): State<StoryRepository>,
    Path(story_id): Path<String>,
    Json(draft): Json<StoryDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let story_id = StoryId::from(story_id);
    if !draft.is_complete() {
        return Err(ApiError::MissingFields);
    }

    repo.update(&story_id, draft).await.map_err(|err| {
        info!(%err, "edit refused");
        ApiError::NoSpoilers
    })?;

    Ok(Json(MessageResponse::new(EDITED)))
}

async fn list_stories(State(repo): State<StoryRepository>) -> impl IntoResponse {
    Json(repo.list().await)
}

async fn delete_story(
    State(repo): State<StoryRepository>,
    Path(story_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let story_id = StoryId::from(story_id);

    repo.delete(&story_id).await.map_err(|err| {
        info!(%err, "delete refused");
        ApiError::Undeletable
    })?;

    info!(%story_id, "story deleted");
    Ok(Json(MessageResponse::new(DELETED)))
}
