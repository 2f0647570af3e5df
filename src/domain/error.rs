//! Error types for the marquee search controller.
//!
//! This module defines the collaborator-side error type [`SearchError`], the
//! user-surfaced taxonomy [`ControllerError`], and a [`SearchResult`] alias
//! for convenient signatures on the use-case traits. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.

use thiserror::Error;

/// Failure reported by an injected search or favorite collaborator.
///
/// Use-case implementations translate whatever goes wrong on their side
/// (HTTP transport, payload parsing, local persistence) into one of these
/// variants. The controller never inspects the variant (it only embeds the
/// description in the user-visible error string), but keeping the taxonomy
/// explicit lets implementations and tests be precise about failure origin.
///
/// # Examples
///
/// ```
/// use marquee::SearchError;
///
/// fn fetch_page() -> Result<(), SearchError> {
///     Err(SearchError::Transport("connection reset".to_string()))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The network round-trip failed.
    ///
    /// Covers connection errors, timeouts, and non-success HTTP statuses.
    /// The string contains a description of what went wrong.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response arrived but could not be parsed.
    ///
    /// Covers malformed payloads and schema mismatches.
    #[error("malformed response: {0}")]
    Decode(String),

    /// A local persistence operation failed.
    ///
    /// Reported by the favorite-toggle collaborator when it cannot record
    /// the new flag.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// User-surfaced error taxonomy for controller operations.
///
/// Exactly two things can fail from the user's point of view: a search
/// fetch, or a favorite toggle. Both are surfaced identically: the
/// `Display` output of this type is what lands in
/// [`SearchState::error`](crate::SearchState). Neither is fatal: the
/// controller stays ready to accept a new query or a retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The movie-search or show-search use-case failed.
    ///
    /// The search that produced this error left both result lists untouched;
    /// a partial success is never applied.
    #[error("search failed: {0}")]
    SearchFetch(SearchError),

    /// The toggle-favorite use-case failed.
    ///
    /// The favorite flag on the targeted entry is left unchanged.
    #[error("could not update favorite: {0}")]
    FavoriteToggle(SearchError),
}

/// A specialized `Result` type for collaborator calls.
///
/// Used as the return type of every use-case trait method.
///
/// # Examples
///
/// ```
/// use marquee::{SearchError, SearchResult};
///
/// fn toggle(ok: bool) -> SearchResult<()> {
///     if ok {
///         Ok(())
///     } else {
///         Err(SearchError::Storage("database locked".to_string()))
///     }
/// }
/// ```
pub type SearchResult<T> = std::result::Result<T, SearchError>;
