//! SQLite connection pool and schema bootstrap.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

use crate::repository::errors::RepositoryResult;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const CREATE_BLOG_POSTS: &str = "CREATE TABLE IF NOT EXISTS blog_posts (
    id TEXT PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    content TEXT,
    author TEXT,
    created_at TIMESTAMP NOT NULL
)";

/// Build a pool for `database_url` and make sure the posts table exists.
pub fn establish_connection_pool(database_url: &str) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder().build(manager)?;

    let mut conn = pool.get()?;
    ensure_schema(&mut conn)?;

    Ok(pool)
}

pub fn ensure_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
    diesel::sql_query(CREATE_BLOG_POSTS).execute(conn)?;
    Ok(())
}
