use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinError;

use crate::domain::post::PostId;
use crate::repository::errors::RepositoryError;

/// Failures of a related-posts lookup.
#[derive(Debug, Error)]
pub enum RelatedPostsError {
    #[error("no post id specified")]
    InvalidRequest,
    #[error("post {0} not found")]
    NotFound(PostId),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for RelatedPostsError {
    fn from(value: RepositoryError) -> Self {
        RelatedPostsError::Internal(value.to_string())
    }
}

impl From<JoinError> for RelatedPostsError {
    fn from(value: JoinError) -> Self {
        RelatedPostsError::Internal(format!("store task failed: {value}"))
    }
}

impl IntoResponse for RelatedPostsError {
    fn into_response(self) -> Response {
        match self {
            RelatedPostsError::InvalidRequest => {
                (StatusCode::BAD_REQUEST, "No post id specified").into_response()
            }
            RelatedPostsError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "Post not found").into_response()
            }
            RelatedPostsError::Internal(detail) => {
                log::error!("Failed to find related posts: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
