//! Post domain model

use serde::{Deserialize, Serialize};

use crate::{CoreError, Result};

/// Store-assigned post identifier. Zero means "not stored yet".
pub type PostId = i64;

/// A blog post
///
/// Serialized with lowercase keys. Capitalized keys (`Title`, `ID`, ...) are
/// also accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(alias = "ID", alias = "Id")]
    pub id: PostId,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Slug")]
    pub slug: String,
    #[serde(alias = "Content")]
    pub content: String,
}

impl Post {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            slug: slug.into(),
            content: content.into(),
        }
    }

    pub fn with_id(mut self, id: PostId) -> Self {
        self.id = id;
        self
    }
}

/// Parse a post identifier taken from a request path.
///
/// Accepts an optionally signed decimal integer. Zero is never a valid
/// identifier because the store only hands out non-zero ids.
pub fn parse_post_id(raw: &str) -> Result<PostId> {
    let id: PostId = raw
        .parse()
        .map_err(|_| CoreError::InvalidId(raw.to_string()))?;

    if id == 0 {
        return Err(CoreError::ZeroId);
    }

    Ok(id)
}
