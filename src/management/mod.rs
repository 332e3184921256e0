//! # Management Module
//!
//! Local state of the application, all of it owned and mutated by the task
//! driving the CLI.
//!
//! - [`TokenManager`] - the signed-in user's token and its cache file
//! - [`SearchBatches`] - append-only log of search results, numbered for
//!   selection
//! - [`SelectionStore`] - which tracks go into the playlist
//! - [`WordSession`] - ties the above to a catalog client and the playlist
//!   draft

mod auth;
mod batches;
mod selection;
mod session;

pub use auth::TokenManager;
pub use batches::{Candidate, SearchBatches};
pub use selection::SelectionStore;
pub use session::WordSession;
