//! HTTP surface: router, shared state and handlers.

use axum::Router;
use axum::routing::get;

use crate::models::config::RelatedConfig;
use crate::repository::PostReader;

pub mod health;
pub mod related;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState<R> {
    pub repo: R,
    pub related: RelatedConfig,
}

impl<R> AppState<R> {
    pub fn new(repo: R, related: RelatedConfig) -> Self {
        Self { repo, related }
    }
}

pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: PostReader + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::health))
        .route("/related", get(related::related_posts::<R>))
        .with_state(state)
}
