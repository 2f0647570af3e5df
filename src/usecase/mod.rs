//! Injected use-case contracts consumed by the controller.
//!
//! This module defines the async trait boundary between the controller and
//! its externally-supplied collaborators: two search fetchers, a favorite
//! toggler, and two detail fetchers. No wire format is implied; an
//! implementation may call a REST API, read a local database, or return
//! canned data in tests. Implementations report failure as
//! [`SearchError`](crate::SearchError).
//!
//! # Architecture
//!
//! Each contract is a single-method trait so hosts can inject exactly the
//! capabilities they have (structural substitutability, no inheritance
//! hierarchy). [`UseCases`] bundles the five trait objects the controller is
//! constructed with.
//!
//! The detail contracts ([`GetMovieDetail`], [`GetShowDetail`]) are part of
//! the injected set but are never invoked by the controller; detail
//! fetching belongs to the detail screen. They are accepted at construction
//! so a host can hand the controller its full capability set.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{MovieResult, SearchResult, ShowResult};

/// Searches the movie catalog.
#[async_trait]
pub trait SearchMovies: Send + Sync {
    /// Returns the movies matching `query` on the given result page, in
    /// backend relevance order.
    async fn execute(&self, query: &str, page: u32) -> SearchResult<Vec<MovieResult>>;
}

/// Searches the TV-show catalog.
#[async_trait]
pub trait SearchShows: Send + Sync {
    /// Returns the shows matching `query` on the given result page, in
    /// backend relevance order.
    async fn execute(&self, query: &str, page: u32) -> SearchResult<Vec<ShowResult>>;
}

/// Persists a favorite flag for a media item.
///
/// Idempotent from the caller's perspective: calling twice with the same
/// target flag yields the same end state.
#[async_trait]
pub trait ToggleFavorite: Send + Sync {
    /// Records `favorite` as the new flag for `item_id`.
    async fn execute(&self, item_id: u64, favorite: bool) -> SearchResult<()>;
}

/// Fetches full detail for a movie.
///
/// Present in the collaborator set for construction; the search controller
/// never calls it.
#[async_trait]
pub trait GetMovieDetail: Send + Sync {
    /// Returns the movie with the given id.
    async fn execute(&self, id: u64) -> SearchResult<MovieResult>;
}

/// Fetches full detail for a TV show.
///
/// Present in the collaborator set for construction; the search controller
/// never calls it.
#[async_trait]
pub trait GetShowDetail: Send + Sync {
    /// Returns the show with the given id.
    async fn execute(&self, id: u64) -> SearchResult<ShowResult>;
}

/// The full collaborator set a [`SearchController`](crate::SearchController)
/// is constructed with.
///
/// Trait objects are shared (`Arc`) so the controller can hold them across
/// spawned debounce tasks, and so hosts can reuse one implementation for
/// several screens.
///
/// # Examples
///
/// ```ignore
/// let usecases = UseCases {
///     search_movies: Arc::new(api.clone()),
///     search_shows: Arc::new(api.clone()),
///     toggle_favorite: Arc::new(store.clone()),
///     movie_detail: Arc::new(api.clone()),
///     show_detail: Arc::new(api),
/// };
/// ```
#[derive(Clone)]
pub struct UseCases {
    /// Movie catalog search.
    pub search_movies: Arc<dyn SearchMovies>,
    /// TV-show catalog search.
    pub search_shows: Arc<dyn SearchShows>,
    /// Favorite flag persistence.
    pub toggle_favorite: Arc<dyn ToggleFavorite>,
    /// Movie detail fetch (held, not invoked).
    pub movie_detail: Arc<dyn GetMovieDetail>,
    /// Show detail fetch (held, not invoked).
    pub show_detail: Arc<dyn GetShowDetail>,
}

impl std::fmt::Debug for UseCases {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UseCases").finish_non_exhaustive()
    }
}
