use axum::{
    routing::{any, get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use blog_storage::PostStore;

use crate::handlers;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

/// HTTP front end for a post store
pub struct BlogServer {
    state: AppState,
}

impl BlogServer {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            state: AppState { store },
        }
    }

    /// Build the axum router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(handlers::handle_info))
            .route("/posts/create", post(handlers::create_post))
            .route("/posts/delete/:id", any(handlers::delete_post))
            .route("/posts/view/:id", any(handlers::view_post))
            .fallback(handlers::handle_not_found)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Bind `addr` (`host:port`) and serve until the listener fails
    pub async fn serve(&self, addr: &str) -> anyhow::Result<()> {
        let listener = TcpListener::bind(addr).await?;

        info!("Blog server listening on {}", addr);

        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}
