use crate::db::{DbConnection, DbPool};
use crate::domain::post::{NewPost, Post, PostId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod post;

/// Diesel-backed repository sharing a SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait PostReader {
    fn get_post_by_id(&self, post_id: &PostId) -> RepositoryResult<Option<Post>>;
    /// Posts other than `post_id`, in store order, capped at `limit`.
    fn list_posts_excluding(&self, post_id: &PostId, limit: u32) -> RepositoryResult<Vec<Post>>;
}

pub trait PostWriter {
    fn create_posts(&self, posts: &[NewPost]) -> RepositoryResult<usize>;
}
