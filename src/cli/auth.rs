use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    assembly::{ReauthPolicy, Reauthenticator},
    cli::render,
    info,
    management::TokenManager,
    spotify::{self, Catalog, SpotifyClient},
    success,
    types::{Credential, Token},
    warning,
};

/// Signs in through the browser and stores the token.
pub async fn auth() {
    if sign_in_and_persist().await.is_some() {
        success!("Authentication successful!");
    }
}

/// Forgets the stored token.
pub async fn logout() {
    match TokenManager::clear().await {
        Ok(true) => success!("Signed out."),
        Ok(false) => info!("Not signed in."),
        Err(e) => warning!("Failed to remove stored token: {}", e),
    }
}

/// Shows who the stored token belongs to.
pub async fn whoami() {
    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(_) => {
            warning!("Not signed in. Run wordplaylist auth first.");
            return;
        }
    };

    let mut client = SpotifyClient::new();
    client.set_access_token(Some(token_mgr.current_token().access_token.clone()));

    let pb = render::spinner("Looking up current user...");
    let outcome = client.current_user().await;
    pb.finish_and_clear();

    let reauth = BrowserSignIn::new();
    let mut outcome = ReauthPolicy::new(&reauth).inspect(outcome).await;

    // a rejected token was replaced by the sign-in, ask once more
    if let Some(token) = reauth.take_token().await {
        client.set_access_token(Some(token.access_token));
        outcome = client.current_user().await;
    }

    match outcome {
        Ok(user) => info!(
            "Signed in as {} ({})",
            user.display_name.as_deref().unwrap_or("<no display name>"),
            user.id
        ),
        Err(e) if e.is_unauthorized() => {
            warning!("The token was rejected. Run wordplaylist auth to sign in again.")
        }
        Err(e) => warning!("Failed to look up current user: {}", e),
    }
}

/// Picks the credential a session starts with.
///
/// The stored user token wins. Without one, an app token is requested when
/// a client secret is configured, which is enough for searching.
pub async fn load_credential() -> Option<Credential> {
    if let Ok(token_mgr) = TokenManager::load().await {
        return Some(token_mgr.credential());
    }

    match spotify::auth::app_token().await {
        Ok(Some(token)) => {
            info!("Not signed in, searching with an app token. Sign in to create playlists.");
            Some(Credential::App(token.access_token))
        }
        Ok(None) => None,
        Err(e) => {
            warning!("Failed to obtain an app token: {}", e);
            None
        }
    }
}

async fn sign_in_and_persist() -> Option<Token> {
    match spotify::auth::sign_in().await {
        Ok(token) => {
            if let Err(e) = TokenManager::new(token.clone()).persist().await {
                warning!("Failed to save token to cache: {}", e);
            }
            Some(token)
        }
        Err(e) => {
            warning!("Sign-in failed: {}", e);
            None
        }
    }
}

/// Re-authentication through the browser sign-in.
///
/// The token obtained by the last successful sign-in is kept until the
/// session picks it up with [`BrowserSignIn::take_token`].
#[derive(Default)]
pub struct BrowserSignIn {
    fresh: Mutex<Option<Token>>,
}

impl BrowserSignIn {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn take_token(&self) -> Option<Token> {
        self.fresh.lock().await.take()
    }
}

#[async_trait]
impl Reauthenticator for BrowserSignIn {
    async fn reauthenticate(&self) {
        warning!("Spotify needs you to sign in. Opening the sign-in page...");
        if let Some(token) = sign_in_and_persist().await {
            success!("Signed in. Submit your last action again.");
            *self.fresh.lock().await = Some(token);
        }
    }
}
