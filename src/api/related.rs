use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::api::AppState;
use crate::domain::post::{Post, PostId};
use crate::errors::RelatedPostsError;
use crate::processing::related::find_related_posts;
use crate::repository::PostReader;

#[derive(Debug, Deserialize, Default)]
pub struct RelatedPostsQuery {
    #[serde(rename = "postId")]
    pub post_id: Option<String>,
}

/// `GET /related?postId=<id>`: up to `max_results` posts similar to `postId`.
pub async fn related_posts<R>(
    State(state): State<AppState<R>>,
    query: Result<Query<RelatedPostsQuery>, QueryRejection>,
) -> Result<Json<Vec<Post>>, RelatedPostsError>
where
    R: PostReader + Clone + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|rejection| {
        log::warn!("Rejected related posts query: {rejection}");
        RelatedPostsError::InvalidRequest
    })?;

    let post_id = query
        .post_id
        .filter(|id| !id.is_empty())
        .map(PostId::from)
        .ok_or(RelatedPostsError::InvalidRequest)?;

    let posts = find_related_posts(state.repo.clone(), post_id, &state.related).await?;

    Ok(Json(posts))
}
