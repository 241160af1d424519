use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, info};

use blog_core::{Post, PostId, parse_post_id};

use crate::server::AppState;

pub const CREATED_MESSAGE: &str = "Your post was successfully created";

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Decode the first JSON value in `body`.
///
/// Trailing data after that value is ignored and a `null` body decodes to an
/// empty post. An empty body is an error.
fn decode_post(body: &[u8]) -> Result<Post, String> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Post>>();
    match values.next() {
        Some(Ok(post)) => Ok(post.unwrap_or_default()),
        Some(Err(e)) => Err(e.to_string()),
        None => Err("EOF".to_string()),
    }
}

/// Extract and validate the `:id` route parameter.
///
/// Segments that do not decode to UTF-8 are treated like any other bad id.
fn post_id(path: Result<Path<String>, PathRejection>) -> Option<PostId> {
    let Path(raw_id) = match path {
        Ok(p) => p,
        Err(e) => {
            debug!("Rejected post id: {}", e);
            return None;
        }
    };

    match parse_post_id(&raw_id) {
        Ok(id) => Some(id),
        Err(e) => {
            debug!("Rejected post id: {}", e);
            None
        }
    }
}

/// GET / - Server info / health check
pub async fn handle_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "blog",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Requests that match no route
pub async fn handle_not_found() -> Response {
    not_found()
}

/// POST /posts/create - Store a new post from a JSON body
pub async fn create_post(State(state): State<AppState>, body: Bytes) -> Response {
    let post = match decode_post(&body) {
        Ok(p) => p,
        Err(e) => {
            debug!("Rejected create request: {}", e);
            return (StatusCode::BAD_REQUEST, e).into_response();
        }
    };

    match state.store.create(&post).await {
        Ok(created) => {
            info!(id = created.id, slug = %created.slug, "Post created");
            (StatusCode::OK, CREATED_MESSAGE).into_response()
        }
        Err(e) => {
            error!("Failed to create post: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// /posts/delete/:id - Delete a post, whether or not it exists
pub async fn delete_post(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let Some(id) = post_id(path) else {
        return not_found();
    };

    match state.store.delete(id).await {
        Ok(()) => {
            info!(id, "Post deleted");
            (
                StatusCode::OK,
                format!("The post with ID {} was successfully deleted", id),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to delete post {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// /posts/view/:id - Render a post as JSON
pub async fn view_post(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let Some(id) = post_id(path) else {
        return not_found();
    };

    match state.store.find_by_id(id).await {
        Ok(post) => Json(post).into_response(),
        Err(e) => {
            if !e.is_not_found() {
                error!("Failed to load post {}: {}", id, e);
            }
            (
                StatusCode::NOT_FOUND,
                format!("The post with the ID, {} does not exist", id),
            )
                .into_response()
        }
    }
}
