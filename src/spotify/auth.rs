use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::{Mutex, oneshot};

use crate::{
    config,
    errors::AuthError,
    info, server,
    types::{PkceToken, Token},
    utils, warning,
};

/// How long the sign-in flow waits for the browser to come back.
pub const SIGN_IN_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    scope: Option<String>,
    expires_in: Option<u64>,
}

impl TokenResponse {
    fn into_token(self) -> Result<Token, AuthError> {
        Ok(Token {
            access_token: self
                .access_token
                .filter(|t| !t.is_empty())
                .ok_or(AuthError::MissingField("access_token"))?,
            refresh_token: self.refresh_token,
            scope: self.scope.unwrap_or_default(),
            expires_in: self.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}

/// Runs the OAuth 2.0 PKCE sign-in once and returns the user's token.
///
/// Binds the local callback server, opens Spotify's authorization page in
/// the browser and waits up to [`SIGN_IN_TIMEOUT`] for the callback to
/// deliver a token. The server is shut down before returning, whatever the
/// outcome. There is no retry: on failure the user starts over.
pub async fn sign_in() -> Result<Token, AuthError> {
    let client_id = config::spotify_client_id()?;
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // verifier must be in place before the browser can call back
    let shared_state = Arc::new(Mutex::new(Some(PkceToken {
        code_verifier,
        token: None,
    })));

    let listener = server::bind(&config::server_addr()).await?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server_state = Arc::clone(&shared_state);
    let server_handle =
        tokio::spawn(async move { server::serve(listener, server_state, shutdown_rx).await });

    let auth_url = authorize_url(
        &config::spotify_apiauth_url(),
        &client_id,
        &config::spotify_redirect_uri(),
        &code_challenge,
        &config::spotify_scope(),
    )?;

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    } else {
        info!("Waiting for Spotify authorization in your browser...");
    }

    let token = wait_for_token(shared_state, SIGN_IN_TIMEOUT).await;

    let _ = shutdown_tx.send(());
    match server_handle.await {
        Ok(Err(e)) => warning!("Callback server stopped with an error: {}", e),
        Err(e) => warning!("Callback server task failed: {}", e),
        Ok(Ok(())) => {}
    }

    token.ok_or(AuthError::TimedOut)
}

/// Builds the authorization page URL with an S256 code challenge.
pub fn authorize_url(
    auth_url: &str,
    client_id: &str,
    redirect_uri: &str,
    code_challenge: &str,
    scope: &str,
) -> Result<Url, AuthError> {
    Url::parse_with_params(
        auth_url,
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("scope", scope),
        ],
    )
    .map_err(|e| AuthError::InvalidUrl(e.to_string()))
}

async fn wait_for_token(
    shared_state: Arc<Mutex<Option<PkceToken>>>,
    max_wait: Duration,
) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|pkce| pkce.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    None
}

/// Exchanges the authorization code delivered to `/callback` for a token.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, AuthError> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri();

    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    res.json::<TokenResponse>().await?.into_token()
}

/// Requests an app-level token through the client-credentials grant.
///
/// App tokens can search the catalog but cannot act on a user's account.
pub async fn request_client_token(
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Token, AuthError> {
    let res = Client::new()
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    res.json::<TokenResponse>().await?.into_token()
}

/// App token from the configured client id and secret.
///
/// Returns `Ok(None)` when no client secret is configured.
pub async fn app_token() -> Result<Option<Token>, AuthError> {
    let Some(client_secret) = config::spotify_client_secret() else {
        return Ok(None);
    };
    let client_id = config::spotify_client_id()?;

    request_client_token(&config::spotify_apitoken_url(), &client_id, &client_secret)
        .await
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_without_access_token_is_rejected() {
        let response = TokenResponse {
            access_token: None,
            refresh_token: None,
            scope: None,
            expires_in: None,
        };
        assert!(matches!(
            response.into_token(),
            Err(AuthError::MissingField("access_token"))
        ));
    }

    #[tokio::test]
    async fn wait_for_token_times_out_without_callback() {
        let state = Arc::new(Mutex::new(Some(PkceToken {
            code_verifier: "v".into(),
            token: None,
        })));
        assert!(wait_for_token(state, Duration::from_millis(10)).await.is_none());
    }
}
