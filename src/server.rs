use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::{
    net::TcpListener,
    sync::{Mutex, oneshot},
};

use crate::{api, errors::AuthError, types::PkceToken};

pub fn router(state: Arc<Mutex<Option<PkceToken>>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)))
}

pub async fn bind(address: &str) -> Result<TcpListener, AuthError> {
    let addr = SocketAddr::from_str(address)
        .map_err(|e| AuthError::Server(format!("invalid server address {}: {}", address, e)))?;

    TcpListener::bind(&addr)
        .await
        .map_err(|e| AuthError::Server(format!("cannot bind {}: {}", addr, e)))
}

/// Serves the callback router until `shutdown` fires (or its sender is dropped).
pub async fn serve(
    listener: TcpListener,
    state: Arc<Mutex<Option<PkceToken>>>,
    shutdown: oneshot::Receiver<()>,
) -> Result<(), AuthError> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = shutdown.await;
        })
        .await
        .map_err(|e| AuthError::Server(e.to_string()))
}
