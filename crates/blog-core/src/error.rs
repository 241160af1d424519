use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid post ID: {0:?}")]
    InvalidId(String),

    #[error("Post ID must be non-zero")]
    ZeroId,
}

pub type Result<T> = std::result::Result<T, CoreError>;
