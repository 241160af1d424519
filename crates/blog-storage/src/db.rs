//! Database operations

use std::str::FromStr;

use async_trait::async_trait;
use blog_core::{Post, PostId};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use tracing::debug;

use crate::{PostStore, Result, StorageError};

/// Schema for the `posts` table. Only used by `init_schema`; the service
/// otherwise expects the table to exist already.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    slug TEXT NOT NULL,
    content TEXT NOT NULL
)
"#;

/// SQLite-backed post store
#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Open a connection pool for `database_url` (e.g. `sqlite:demo.sqlite`).
    ///
    /// The database file is created if it does not exist yet.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to `:memory:` opens its own empty database
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        debug!(database_url, "connected to database");

        Ok(Self { pool })
    }

    /// Create the `posts` table if it is missing.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn row_to_post(row: &SqliteRow) -> Result<Post> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        slug: row.try_get("slug")?,
        content: row.try_get("content")?,
    })
}

#[async_trait]
impl PostStore for Storage {
    async fn create(&self, post: &Post) -> Result<Post> {
        let result = sqlx::query("INSERT INTO posts (title, slug, content) VALUES (?, ?, ?)")
            .bind(&post.title)
            .bind(&post.slug)
            .bind(&post.content)
            .execute(&self.pool)
            .await?;

        Ok(Post {
            id: result.last_insert_rowid(),
            ..post.clone()
        })
    }

    async fn delete(&self, id: PostId) -> Result<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id, rows = result.rows_affected(), "deleted post");
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Post> {
        let row = sqlx::query("SELECT id, title, slug, content FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => row_to_post(&row),
            None => Err(StorageError::PostNotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_storage() -> (TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("test.sqlite").display());
        let storage = Storage::connect(&url, 5).await.unwrap();
        storage.init_schema().await.unwrap();
        (dir, storage)
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let (_dir, storage) = create_test_storage().await;

        let first = storage
            .create(&Post::new("Hello", "hello", "World"))
            .await
            .unwrap();
        let second = storage
            .create(&Post::new("Again", "again", "More"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.title, "Hello");
    }

    #[tokio::test]
    async fn test_create_ignores_caller_id() {
        let (_dir, storage) = create_test_storage().await;

        let created = storage
            .create(&Post::new("Hello", "hello", "World").with_id(99))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert!(storage.find_by_id(99).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_duplicate_slugs_allowed() {
        let (_dir, storage) = create_test_storage().await;
        let post = Post::new("Same", "same", "content");

        let a = storage.create(&post).await.unwrap();
        let b = storage.create(&post).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_find_by_id_round_trip() {
        let (_dir, storage) = create_test_storage().await;

        let created = storage
            .create(&Post::new("Hello", "hello", "World"))
            .await
            .unwrap();
        let found = storage.find_by_id(created.id).await.unwrap();

        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_missing_post() {
        let (_dir, storage) = create_test_storage().await;

        let err = storage.find_by_id(42).await.unwrap_err();
        assert!(matches!(err, StorageError::PostNotFound(42)));
    }

    #[tokio::test]
    async fn test_delete_then_find() {
        let (_dir, storage) = create_test_storage().await;

        let created = storage
            .create(&Post::new("Hello", "hello", "World"))
            .await
            .unwrap();
        storage.delete(created.id).await.unwrap();

        assert!(storage.find_by_id(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_post_succeeds() {
        let (_dir, storage) = create_test_storage().await;
        storage.delete(1234).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_table_is_database_error() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("empty.sqlite").display());
        let storage = Storage::connect(&url, 1).await.unwrap();

        let err = storage
            .create(&Post::new("Hello", "hello", "World"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Database(_)));
    }

    #[tokio::test]
    async fn test_in_memory_database() {
        let storage = Storage::connect("sqlite::memory:", 5).await.unwrap();
        storage.init_schema().await.unwrap();

        let created = storage
            .create(&Post::new("Hello", "hello", "World"))
            .await
            .unwrap();
        assert_eq!(storage.find_by_id(created.id).await.unwrap().slug, "hello");
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let (_dir, storage) = create_test_storage().await;
        storage.init_schema().await.unwrap();
    }
}
