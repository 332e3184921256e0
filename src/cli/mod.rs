//! # CLI Module
//!
//! User-facing commands of wordplaylist. Each command prints its own
//! progress and outcome with the crate's `info!`/`success!`/`warning!`
//! macros and never aborts the process on a remote failure.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Browser sign-in (OAuth 2.0 PKCE), token stored locally
//! - [`logout`] - Removes the stored token
//! - [`whoami`] - Looks up the user the stored token belongs to
//!
//! ### Words to playlist
//!
//! - [`search`] - Searches each word once and lists the singles found
//! - [`create`] - Searches, selects every single found, creates the playlist
//! - [`session`] - Interactive prompt: search more words, toggle tracks by
//!   number, name the playlist, create it
//!
//! Every command that talks to the catalog starts from the stored user
//! token, or from an app token when only a client secret is available.
//! When Spotify rejects the token, the sign-in page is opened once and the
//! user re-submits.

mod auth;
mod render;
mod search;
mod session;

pub use auth::BrowserSignIn;
pub use auth::auth;
pub use auth::logout;
pub use auth::whoami;
pub use search::create;
pub use search::search;
pub use session::SessionCommand;
pub use session::parse_command;
pub use session::session;
