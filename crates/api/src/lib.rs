//! `api` crate — HTML front end for the golf bag inventory.
//!
//! Exposes:
//!   GET    /bags                 list every bag
//!   GET    /bags/new             creation form
//!   POST   /bags                 create a bag
//!   GET    /bags/{id}            bag detail with its clubs
//!   GET    /bags/{id}/edit       add-a-club form
//!   POST   /bags/{id}            add a club
//!   POST   /bags/delete/{id}     delete a bag and its clubs

pub mod error;
pub mod forms;
pub mod handlers;
pub mod views;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use bags::{BagStore, SqlBagStore};
use db::DbPool;

pub use error::ApiError;

/// Shared handler state.
///
/// Holds the store behind a trait object; axum clones it into every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BagStore>,
}

impl AppState {
    pub fn new(store: impl BagStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    use handlers::bags as bag_routes;

    Router::new()
        .route("/", get(handlers::index))
        .route("/bags", get(bag_routes::list).post(bag_routes::create))
        .route("/bags/new", get(bag_routes::new_form))
        .route("/bags/:id", get(bag_routes::show).post(bag_routes::update))
        .route("/bags/:id/edit", get(bag_routes::edit_form))
        .route("/bags/delete/:id", post(bag_routes::delete))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to `bind` and serve until Ctrl-C.
pub async fn serve(bind: &str, pool: DbPool) -> std::io::Result<()> {
    let app = router(AppState::new(SqlBagStore::new(pool)));

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("CaddyShack listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
