use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a blog post.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: Option<String>,
    pub author: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Post {
    /// Text used for similarity scoring; missing content reads as empty.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Post payload accepted by the store. `created_at` is stamped on insert.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewPost {
    pub id: PostId,
    pub title: String,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl NewPost {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: Option<&str>) -> Self {
        Self {
            id: PostId::new(id),
            title: title.into(),
            content: content.map(str::to_string),
            author: None,
        }
    }
}
