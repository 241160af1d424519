//! Persistence interface used by the HTTP layer

use async_trait::async_trait;
use blog_core::{Post, PostId};

use crate::Result;

/// Create, delete and look up posts.
///
/// Every call maps to exactly one statement against the backend. There are
/// no transactions and nothing is retried.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post and return it with the identifier the backend assigned.
    ///
    /// Any `id` already set on `post` is ignored. Duplicate titles and slugs are allowed.
    async fn create(&self, post: &Post) -> Result<Post>;

    /// Delete the post with `id`. Deleting an id that does not exist succeeds.
    async fn delete(&self, id: PostId) -> Result<()>;

    /// Fetch a post, failing with `StorageError::PostNotFound` when no row matches.
    async fn find_by_id(&self, id: PostId) -> Result<Post>;
}
