//! Storage layer for blog
//!
//! This crate provides:
//! - The `PostStore` trait the HTTP layer talks to
//! - SQLite database operations
//! - An in-memory store with the same semantics

pub mod db;
pub mod error;
pub mod memory;
pub mod store;

pub use db::Storage;
pub use error::{Result, StorageError};
pub use memory::MemoryStore;
pub use store::PostStore;
