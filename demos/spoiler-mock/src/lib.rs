#![allow(missing_docs)]
use std::net::SocketAddr;

use anyhow::Context;
use state::AppState;
use tower_http::trace::TraceLayer;
use tracing::info;

mod auth;
mod errors;
mod routes;
mod state;

pub mod stories;

pub use self::auth::Account;
use self::routes::app_router;

/// Launch the server
///
/// # Errors
///
/// fail if the socket cannot be created (e.g. port already used)
/// fail if the server cannot be launch
pub async fn run(addr: SocketAddr, accounts: Vec<Account>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("opening {addr}"))?;
    info!("Using address {addr}");

    launch(listener, accounts).await
}

/// Launch the server, with an empty story store
///
/// # Errors
///
/// fail if the server cannot be launch
pub async fn launch(listener: tokio::net::TcpListener, accounts: Vec<Account>) -> anyhow::Result<()> {
    let state = AppState::new(accounts);
    let app = app_router(state).layer(TraceLayer::new_for_http());

    axum::serve(listener, app.into_make_service())
        .await
        .context("starting server")?;

    Ok(())
}
