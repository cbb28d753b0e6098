//! Helpers for integration tests.

use related_posts::db::{DbPool, establish_connection_pool};
use related_posts::domain::post::NewPost;
use related_posts::repository::{DieselRepository, PostWriter};
use tempfile::TempDir;

/// Temporary database used in integration tests.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir.");
        let path = dir.path().join("posts.db");
        let url = path.to_str().expect("temp path is utf-8").to_string();

        let pool = establish_connection_pool(&url).expect("Failed to establish SQLite connection.");
        TestDb { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    /// Insert `(id, content)` pairs as posts.
    pub fn seed(&self, posts: &[(&str, Option<&str>)]) -> DieselRepository {
        let repo = self.repo();
        let new_posts = posts
            .iter()
            .map(|(id, content)| NewPost::new(*id, format!("Post {id}"), *content))
            .collect::<Vec<_>>();
        repo.create_posts(&new_posts)
            .expect("Failed to seed posts.");
        repo
    }
}
