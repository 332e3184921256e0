//! wordplaylist library
//!
//! Turns a comma-separated list of words into a Spotify playlist: every word
//! is searched in the catalog, the matching singles are offered for
//! selection, and the chosen tracks are written into a freshly created
//! playlist on the signed-in user's account.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `assembly` - Playlist assembly workflow and re-authentication policy
//! - `cli` - Command-line interface and interactive session
//! - `config` - Configuration management and environment variables
//! - `errors` - Error types shared across the crate
//! - `management` - Session state: token cache, search batches, selection
//! - `resolver` - Word splitting, concurrent search and single filtering
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - PKCE helpers
//!
//! # Example
//!
//! ```
//! use wordplaylist::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wordplaylist::errors::ConfigError> {
//!     config::load_env().await?;
//!     cli::search("be my, valentine".to_string()).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod assembly;
pub mod cli;
pub mod config;
pub mod errors;
pub mod management;
pub mod resolver;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching Spotify for {} words", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist {} created", name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for unrecoverable startup failures in the binary. Library code
/// reports problems with [`warning!`] and returns an error instead.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for every recoverable failure: rejected searches, failed workflow
/// steps, sign-in problems.
///
/// # Example
///
/// ```
/// warning!("Search for {} failed: {}", word, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
