use std::path::{Path, PathBuf};

use crate::{
    config,
    errors::TokenError,
    types::{Credential, Token},
};

/// Owns the signed-in user's token and its on-disk cache.
///
/// The token is never checked for expiry here: Spotify tells us it expired
/// by rejecting a call, and the answer to that is a new sign-in.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, TokenError> {
        Self::load_from(&Self::token_path()).await
    }

    pub async fn load_from(path: &Path) -> Result<Self, TokenError> {
        let content = async_fs::read_to_string(path).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), TokenError> {
        self.persist_to(&Self::token_path()).await
    }

    pub async fn persist_to(&self, path: &Path) -> Result<(), TokenError> {
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Removes the cached token. Returns `false` if there was none.
    pub async fn clear() -> Result<bool, TokenError> {
        Self::clear_at(&Self::token_path()).await
    }

    pub async fn clear_at(path: &Path) -> Result<bool, TokenError> {
        match async_fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(TokenError::Io(e)),
        }
    }

    pub fn credential(&self) -> Credential {
        Credential::User(self.token.access_token.clone())
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache").join("token.json")
    }
}
