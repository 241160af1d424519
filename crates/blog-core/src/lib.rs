//! Core domain model for blog
//!
//! This crate contains:
//! - The `Post` record
//! - Post identifier parsing

pub mod error;
pub mod post;

pub use error::{CoreError, Result};
pub use post::{Post, PostId, parse_post_id};
