//! # API Module
//!
//! HTTP endpoints of the short-lived local server that completes the Spotify
//! sign-in.
//!
//! - [`callback`] - receives `?code=..` from Spotify's authorization page and
//!   exchanges it, together with the PKCE verifier, for an access token.
//! - [`health`] - reports status and version.
//!
//! The server only runs while a sign-in is in progress; see
//! [`crate::spotify::auth::sign_in`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
