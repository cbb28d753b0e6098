use chrono::Utc;
use diesel::prelude::*;

use crate::domain::post::{NewPost, Post, PostId};
use crate::models::post::{BlogPost, NewBlogPost};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, PostReader, PostWriter};

impl PostReader for DieselRepository {
    fn get_post_by_id(&self, post_id: &PostId) -> RepositoryResult<Option<Post>> {
        use crate::schema::blog_posts;

        let mut conn = self.conn()?;

        let post = blog_posts::table
            .filter(blog_posts::id.eq(post_id.as_str()))
            .select(BlogPost::as_select())
            .first::<BlogPost>(&mut conn)
            .optional()?;

        Ok(post.map(Post::from))
    }

    fn list_posts_excluding(&self, post_id: &PostId, limit: u32) -> RepositoryResult<Vec<Post>> {
        use crate::schema::blog_posts;

        let mut conn = self.conn()?;

        // No ORDER BY: candidates come back in the table's natural order
        let posts = blog_posts::table
            .filter(blog_posts::id.ne(post_id.as_str()))
            .select(BlogPost::as_select())
            .limit(i64::from(limit))
            .load::<BlogPost>(&mut conn)?;

        Ok(posts.into_iter().map(Post::from).collect())
    }
}

impl PostWriter for DieselRepository {
    fn create_posts(&self, posts: &[NewPost]) -> RepositoryResult<usize> {
        use crate::schema::blog_posts;

        if posts.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let rows = posts
            .iter()
            .map(|post| NewBlogPost::from_domain(post, now))
            .collect::<Vec<_>>();

        let inserted = conn.transaction(|conn| {
            diesel::insert_into(blog_posts::table)
                .values(&rows)
                .execute(conn)
        })?;

        Ok(inserted)
    }
}
