//! Marquee: debounced movie and TV-show search orchestration.
//!
//! Marquee is the search-screen core of a media browser: a controller that
//! owns query state, debounces input, cancels superseded searches, runs the
//! movie and show fetches concurrently, aggregates results and errors, and
//! exposes confirm-then-mutate favorite toggling. Everything effectful (the
//! network, local persistence, the navigation stack, the actual rendering)
//! is supplied by the host through narrow trait contracts.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host UI shell                                      │  ← Renders snapshots,
//! └─────────────────────────────────────────────────────┘    assigns queries
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Controller Layer (controller/)                     │  ← Debounce + cancellation
//! │  - Search pipeline (generation-guarded commits)     │  ← State machine
//! │  - Favorite toggling                                │
//! │  - Display mode computation                         │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Use-case Layer│   │ Navigation    │   │ Domain Layer  │
//! │ (usecase/)    │   │ (navigation/) │   │ (domain/)     │
//! │ - Fetch traits│   │ - Navigator   │   │ - Result types│
//! │ - Toggle trait│   │ - Route, Tab  │   │ - Error types │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`controller`]: The search state machine and its pipeline
//! - [`domain`]: Core result models and error taxonomy
//! - [`usecase`]: Injected collaborator contracts
//! - [`navigation`]: Navigation delegation contract
//! - [`observability`]: Tracing subscriber setup
//!
//! # Search Pipeline
//!
//! 1. **Assignment**: `set_query` records the text immediately and starts a
//!    500 ms (configurable) quiet-period timer; a newer assignment discards
//!    the pending timer, a byte-equal assignment is ignored.
//! 2. **Fire**: the surviving timer runs `perform_search`, unless the value
//!    equals the most recently searched one.
//! 3. **Fetch**: the movie and show use-cases run concurrently with the same
//!    query and the configured first page.
//! 4. **Commit**: results (or a single aggregated error) are committed under
//!    a generation check; a search superseded by a newer one never touches
//!    state again.
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use marquee::{Config, SearchController, UseCases};
//!
//! let controller = SearchController::new(usecases, navigator, Config::default());
//! let mut updates = controller.subscribe();
//!
//! controller.set_query("batman");
//! while updates.changed().await.is_ok() {
//!     render(&updates.borrow());
//! }
//! ```
//!
//! # Key Design Decisions
//!
//! ## Cancel-Replace Instead of Task Interruption
//!
//! Superseded searches are not aborted mid-flight; they run to completion
//! and their commits are discarded by a generation check under the state
//! lock. This keeps collaborator implementations free of cancellation
//! plumbing while guaranteeing last-started-wins.
//!
//! ## Confirm-Then-Mutate Favorites
//!
//! The favorite flag flips only after the toggle use-case confirms, so the
//! UI never shows a favorite state the backend later rejects; no rollback
//! path exists or is needed.
//!
//! ## Snapshots Over Shared Mutability
//!
//! Observers receive cloned [`SearchState`] snapshots through a watch
//! channel, published inside the state lock. Rendering code holds no locks
//! and can never observe a half-applied mutation.

pub mod controller;
pub mod domain;
pub mod navigation;
pub mod observability;
pub mod usecase;

pub use controller::{DisplayMode, SearchController, SearchState};
pub use domain::{ControllerError, MediaKind, MovieResult, SearchError, SearchResult, ShowResult};
pub use navigation::{Navigator, Route, Tab};
pub use usecase::{
    GetMovieDetail, GetShowDetail, SearchMovies, SearchShows, ToggleFavorite, UseCases,
};

use std::time::Duration;

/// Controller configuration supplied by the host.
///
/// All fields have sensible defaults; hosts typically override nothing or
/// only `trace_level`.
///
/// # Example
///
/// ```rust
/// use marquee::Config;
///
/// let config = Config {
///     debounce_ms: 300,
///     ..Config::default()
/// };
/// assert_eq!(config.first_page, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Quiet period after the last query change before a search fires, in
    /// milliseconds. Default: 500.
    pub debounce_ms: u64,

    /// Page number passed to both search use-cases. The controller only
    /// ever fetches the first page; pagination belongs to the host.
    /// Default: 1.
    pub first_page: u32,

    /// Tracing level for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `None`
    /// (falls back to `RUST_LOG`, then `"info"`).
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            first_page: 1,
            trace_level: None,
        }
    }
}

impl Config {
    /// The debounce quiet period as a [`Duration`].
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
