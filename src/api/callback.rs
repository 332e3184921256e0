use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify::auth::exchange_code_pkce, types::PkceToken, warning};

/// Completes the sign-in: exchanges `?code=..` for a token and hands it to
/// the waiting [`crate::spotify::auth::sign_in`] through the shared state.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceToken>>>>,
) -> Html<&'static str> {
    if let Some(reason) = params.get("error") {
        warning!("Spotify denied the authorization: {}", reason);
        return Html("<h4>Authorization was denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let verifier = match shared_state.lock().await.as_ref() {
        Some(pkce_state) => pkce_state.code_verifier.clone(),
        None => return Html("<h4>Missing PKCE code verifier.</h4>"),
    };

    // the lock is released while Spotify answers the exchange
    let token = match exchange_code_pkce(code, &verifier).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return Html("<h4>Sign-in failed.</h4>");
        }
    };

    match shared_state.lock().await.as_mut() {
        Some(pkce_state) => {
            pkce_state.token = Some(token);
            Html("<h2>Signed in to Spotify.</h2><p>You can close this window.</p>")
        }
        None => Html("<h4>Sign-in was cancelled.</h4>"),
    }
}
