//! Search orchestration: debouncing, cancellation, and state commits.
//!
//! This module implements [`SearchController`], the coordinator that owns
//! [`SearchState`] and drives it through the search pipeline. It sits
//! between the host UI (which assigns queries and renders snapshots) and the
//! injected collaborators (which perform the actual fetching, persistence,
//! and navigation).
//!
//! # Architecture
//!
//! The controller follows a unidirectional data flow pattern:
//!
//! ```text
//! Query assignment → debounce timer → perform_search → collaborator fetches
//!                                                            │
//! UI snapshot  ←  watch channel  ←  guarded state commit  ←──┘
//! ```
//!
//! Two counters, both confined to the state lock, make the pipeline
//! cancel-safe without interrupting in-flight futures:
//!
//! - **Debounce epoch**: every non-duplicate query assignment bumps it and
//!   schedules a timer carrying the new value. A timer that wakes to find a
//!   newer epoch simply returns; the discarded timer never searches.
//! - **Search generation**: every search bumps it on entry and captures the
//!   new value. Each state commit re-checks the captured generation under
//!   the lock and is discarded wholesale if a newer search has started, so
//!   only the most recently started search ever reaches state
//!   (last-started-wins).
//!
//! The lock is a plain `std::sync::Mutex` that is never held across an
//! `.await`; all observable mutations publish a snapshot while still inside
//! it, so observers see a serialized, deterministic order of states even on
//! a multi-threaded runtime.

pub mod state;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::future::join;
use tokio::sync::watch;

use crate::domain::{ControllerError, MediaKind};
use crate::navigation::{Navigator, Route};
use crate::usecase::UseCases;
use crate::Config;

pub use state::{DisplayMode, SearchState};

/// Mutable fields confined to the controller's state lock.
///
/// The counters live next to the state on purpose: a generation bump and
/// the commit check it invalidates must never interleave with each other.
#[derive(Debug)]
struct Shared {
    /// Authoritative search state; snapshots of it are what observers see.
    state: SearchState,

    /// Search generation counter. Bumped when a search starts; commits
    /// carrying an older value are discarded.
    generation: u64,

    /// Debounce epoch counter. Bumped on every non-duplicate query
    /// assignment; timers carrying an older value never fire a search.
    debounce_epoch: u64,

    /// The most recently searched query value.
    ///
    /// A debounce timer firing with this exact value issues no new fetch
    /// (duplicate suppression). Direct [`SearchController::perform_search`]
    /// calls bypass the check, which is what makes retry work.
    last_searched: Option<String>,
}

/// Shared core behind the cloneable [`SearchController`] handle.
struct Inner {
    usecases: UseCases,
    navigator: Arc<dyn Navigator>,
    config: Config,
    shared: Mutex<Shared>,
    updates: watch::Sender<SearchState>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `mutate` to the state and publishes a snapshot, unless
    /// `generation` has been superseded.
    ///
    /// Returns `false` when the commit was discarded as stale. The check and
    /// the mutation happen under the same lock acquisition, so a commit can
    /// never land after a newer search has started.
    fn commit(&self, generation: u64, mutate: impl FnOnce(&mut SearchState)) -> bool {
        let mut shared = self.lock();
        if shared.generation != generation {
            return false;
        }
        mutate(&mut shared.state);
        self.updates.send_replace(shared.state.clone());
        true
    }

    /// Runs one search to completion against the captured generation.
    async fn perform_search(&self, query: &str) {
        let generation = {
            let mut shared = self.lock();
            // Starting here supersedes any search still in flight.
            shared.generation += 1;
            shared.last_searched = Some(query.to_string());
            shared.state.begin_search();
            self.updates.send_replace(shared.state.clone());
            shared.generation
        };

        // Emptiness is exact length zero; whitespace is a real query.
        if query.is_empty() {
            tracing::debug!(generation, "empty query, clearing results");
            self.commit(generation, SearchState::settle_empty);
            return;
        }

        tracing::debug!(query, generation, page = self.config.first_page, "search started");

        let (movies, shows) = join(
            self.usecases.search_movies.execute(query, self.config.first_page),
            self.usecases.search_shows.execute(query, self.config.first_page),
        )
        .await;

        match (movies, shows) {
            (Ok(movies), Ok(shows)) => {
                let (movie_count, show_count) = (movies.len(), shows.len());
                let committed =
                    self.commit(generation, |state| state.settle_results(movies, shows));
                if committed {
                    tracing::debug!(generation, movie_count, show_count, "search results committed");
                } else {
                    tracing::debug!(generation, "superseded search discarded its results");
                }
            }
            (Err(error), _) | (_, Err(error)) => {
                tracing::warn!(query, generation, %error, "search fetch failed");
                let surfaced = ControllerError::SearchFetch(error);
                if !self.commit(generation, |state| state.settle_error(surfaced.to_string())) {
                    tracing::debug!(generation, "superseded search discarded its error");
                }
            }
        }
    }
}

/// Debounced search coordinator for a movie/TV-show search surface.
///
/// Owns the [`SearchState`], debounces query assignments, cancels superseded
/// searches, runs the movie and show fetches concurrently, applies
/// confirm-then-mutate favorite toggling, and delegates navigation. Cheap to
/// clone; all clones share one state.
///
/// Construction never fails and never calls a collaborator; the injected
/// set may even contain capabilities the controller never uses (the detail
/// fetchers).
///
/// # Examples
///
/// ```ignore
/// let controller = SearchController::new(usecases, navigator, Config::default());
/// let mut updates = controller.subscribe();
///
/// controller.set_query("batman");
/// updates.changed().await?;
/// render(&updates.borrow());
/// ```
#[derive(Clone)]
pub struct SearchController {
    inner: Arc<Inner>,
}

impl SearchController {
    /// Creates a controller with empty state.
    ///
    /// # Parameters
    ///
    /// * `usecases` - The injected collaborator set
    /// * `navigator` - Navigation delegate for leaving the search surface
    /// * `config` - Debounce interval, first page, trace level
    #[must_use]
    pub fn new(usecases: UseCases, navigator: Arc<dyn Navigator>, config: Config) -> Self {
        let state = SearchState::default();
        let (updates, _) = watch::channel(state.clone());
        Self {
            inner: Arc::new(Inner {
                usecases,
                navigator,
                config,
                shared: Mutex::new(Shared {
                    state,
                    generation: 0,
                    debounce_epoch: 0,
                    last_searched: None,
                }),
                updates,
            }),
        }
    }

    /// Subscribes to state snapshots.
    ///
    /// Every observable mutation publishes a full [`SearchState`] snapshot
    /// while the state lock is still held, so receivers observe mutations in
    /// the exact order they were applied. The receiver starts out holding
    /// the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.updates.subscribe()
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.inner.lock().state.clone()
    }

    /// Returns the current query text.
    #[must_use]
    pub fn query(&self) -> String {
        self.inner.lock().state.query.clone()
    }

    /// Assigns the query and schedules a debounced search.
    ///
    /// The assignment is the trigger: the query field updates immediately
    /// (and is published to observers), then a timer of
    /// [`Config::debounce`](crate::Config::debounce) starts. A later
    /// assignment before the timer fires discards it; that timer never
    /// searches. An assignment byte-equal to the current query is ignored
    /// outright and does not reset a pending timer.
    ///
    /// When the timer fires, the query is searched unless it equals the most
    /// recently searched value (no fetch is re-issued for a value that was
    /// just searched).
    ///
    /// Must be called from within a Tokio runtime; the timer runs on a
    /// spawned task.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        let epoch = {
            let mut shared = self.inner.lock();
            if shared.state.query == query {
                tracing::trace!(query = %query, "duplicate query assignment ignored");
                return;
            }
            shared.state.query = query.clone();
            shared.debounce_epoch += 1;
            self.inner.updates.send_replace(shared.state.clone());
            shared.debounce_epoch
        };

        tracing::trace!(query = %query, epoch, "debounce timer started");

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.config.debounce()).await;
            {
                let shared = inner.lock();
                if shared.debounce_epoch != epoch {
                    tracing::trace!(epoch, "debounce timer superseded");
                    return;
                }
                if shared.last_searched.as_deref() == Some(query.as_str()) {
                    tracing::debug!(query = %query, "value already searched, fetch suppressed");
                    return;
                }
            }
            inner.perform_search(&query).await;
        });
    }

    /// Runs a search for `query` immediately, bypassing the debounce.
    ///
    /// Cancels any in-flight search first (last-started-wins), then sets
    /// `loading` and clears any prior error. An empty query clears both
    /// result lists without calling the collaborators. Otherwise the movie
    /// and show fetches run concurrently; on success both lists are replaced
    /// wholesale, on failure of either a single error is surfaced and
    /// neither list is touched.
    ///
    /// Errors are surfaced through [`SearchState::error`], never returned;
    /// after any outcome the controller accepts the next query or retry.
    pub async fn perform_search(&self, query: &str) {
        self.inner.perform_search(query).await;
    }

    /// Re-runs the search for the current query.
    ///
    /// The user-initiated recovery path after an error; equivalent to
    /// calling [`perform_search`](Self::perform_search) with the current
    /// query text.
    pub async fn retry(&self) {
        let query = self.query();
        self.inner.perform_search(&query).await;
    }

    /// Toggles the favorite flag of the entry with `id` in the `kind` list.
    ///
    /// `is_favorite` is the entry's current flag as displayed; the
    /// toggle-favorite use-case is invoked with the negated value. The
    /// in-memory flag flips only after the use-case confirms
    /// (confirm-then-mutate, not pre-flip-then-rollback). When the entry is
    /// no longer present (the lists may have been replaced meanwhile), the
    /// use-case is still invoked but state stays untouched. On failure the
    /// flag is left alone and the error is surfaced through
    /// [`SearchState::error`].
    ///
    /// List order never changes as a result of toggling.
    pub async fn toggle_favorite(&self, kind: MediaKind, id: u64, is_favorite: bool) {
        let target = !is_favorite;
        tracing::debug!(?kind, id, target, "toggling favorite");

        match self.inner.usecases.toggle_favorite.execute(id, target).await {
            Ok(()) => {
                let mut shared = self.inner.lock();
                if shared.state.set_favorite(kind, id, target) {
                    self.inner.updates.send_replace(shared.state.clone());
                } else {
                    tracing::debug!(?kind, id, "toggled entry no longer in results");
                }
            }
            Err(error) => {
                tracing::warn!(?kind, id, %error, "favorite toggle failed");
                let surfaced = ControllerError::FavoriteToggle(error);
                let mut shared = self.inner.lock();
                shared.state.settle_error(surfaced.to_string());
                self.inner.updates.send_replace(shared.state.clone());
            }
        }
    }

    /// Leaves the search surface for the detail screen of `kind`/`id`.
    ///
    /// Dismiss must precede navigate; reversed order leaves the navigator
    /// presenting over the abandoned search surface.
    pub fn navigate_to_detail(&self, kind: MediaKind, id: u64) {
        let route = Route::detail(kind, id);
        let tab = route.tab();
        tracing::debug!(?route, ?tab, "navigating to detail");
        self.inner.navigator.dismiss();
        self.inner.navigator.navigate(route, tab);
    }

    /// Dismisses the search surface without navigating anywhere.
    pub fn dismiss(&self) {
        tracing::debug!("dismissing search");
        self.inner.navigator.dismiss();
    }
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("state", &self.inner.lock().state)
            .finish_non_exhaustive()
    }
}
