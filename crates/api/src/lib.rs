//! `api` crate — HTTP layer of the documents admin panel.
//!
//! Pages:
//!   GET  /  /documents  /reference  /queries  /table/{table_name}
//!
//! JSON API (always `{success, …}`, status 200 even on failure):
//!   GET  /api/table/{table_name}
//!   GET  /api/table_structure/{table_name}
//!   POST /api/add_record/{table_name}
//!   POST /api/update_record/{table_name}
//!   POST /api/execute_query

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod navigation;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use db::DbPool;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::ApiError;

/// State shared by every handler: the pool is the only resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

pub fn router(pool: DbPool) -> Router {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/documents", get(handlers::pages::documents))
        .route("/reference", get(handlers::pages::reference))
        .route("/queries", get(handlers::pages::queries))
        .route("/table/{table_name}", get(handlers::pages::table))
        .route("/static/app.js", get(handlers::pages::app_js))
        .route("/api/table/{table_name}", get(handlers::tables::rows))
        .route("/api/table_structure/{table_name}", get(handlers::tables::structure))
        .route("/api/add_record/{table_name}", post(handlers::tables::add))
        .route("/api/update_record/{table_name}", post(handlers::tables::update))
        .route("/api/execute_query", post(handlers::queries::execute))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pool })
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, pool: DbPool) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    warn!("/api/execute_query runs arbitrary SQL; expose this server to administrators only");

    axum::serve(listener, router(pool))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
