//! In-memory post store

use std::collections::BTreeMap;

use async_trait::async_trait;
use blog_core::{Post, PostId};
use tokio::sync::RwLock;

use crate::{PostStore, Result, StorageError};

#[derive(Default)]
struct Inner {
    posts: BTreeMap<PostId, Post>,
    last_id: PostId,
}

/// Post store kept entirely in process memory.
///
/// Ids start at 1 and are never reused, matching SQLite's `AUTOINCREMENT`.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.posts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.posts.is_empty()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn create(&self, post: &Post) -> Result<Post> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let stored = Post {
            id: inner.last_id,
            ..post.clone()
        };
        inner.posts.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn delete(&self, id: PostId) -> Result<()> {
        self.inner.write().await.posts.remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Post> {
        self.inner
            .read()
            .await
            .posts
            .get(&id)
            .cloned()
            .ok_or(StorageError::PostNotFound(id))
    }
}
