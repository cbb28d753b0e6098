//! Diesel row models for the `blog_posts` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::post::{NewPost as DomainNewPost, Post as DomainPost, PostId};
use crate::schema::blog_posts;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = blog_posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub author: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = blog_posts)]
pub struct NewBlogPost {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub author: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<BlogPost> for DomainPost {
    fn from(value: BlogPost) -> Self {
        Self {
            id: PostId::new(value.id),
            title: value.title,
            content: value.content,
            author: value.author,
            created_at: value.created_at,
        }
    }
}

impl NewBlogPost {
    pub fn from_domain(post: &DomainNewPost, created_at: NaiveDateTime) -> Self {
        Self {
            id: post.id.as_str().to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            created_at,
        }
    }
}
