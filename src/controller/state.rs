//! Search screen state container and display mode computation.
//!
//! This module defines [`SearchState`], the single source of truth for the
//! search surface, and [`DisplayMode`], the derived "exactly one thing is
//! visible" projection the UI renders from. State is created empty when the
//! controller is constructed, mutated only by the search pipeline and
//! favorite toggles, and dropped with the screen; nothing is persisted
//! across sessions.
//!
//! # Invariants
//!
//! - `loading == true` implies `error == None`. Every mutation path that
//!   sets an error clears `loading` first, and starting a search clears any
//!   prior error.
//! - Result lists hold backend relevance order as received; no controller
//!   operation re-sorts them.

use serde::{Deserialize, Serialize};

use crate::domain::{MediaKind, MovieResult, ShowResult};

/// The single visible mode of the search surface.
///
/// Derived from [`SearchState`] by [`SearchState::display_mode`]; exactly
/// one variant applies at any time. Error text, when relevant, is read from
/// [`SearchState::error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// A search is in flight; show a progress indicator.
    Loading,
    /// The last search or toggle failed; show the error with a retry action.
    Error,
    /// At least one result list is non-empty; show the lists.
    Results,
    /// Settled with no results (including the initial blank screen).
    Empty,
}

/// Central state container for the search surface.
///
/// Observers receive cloned snapshots of this struct in a serialized,
/// deterministic order; see
/// [`SearchController::subscribe`](crate::SearchController::subscribe).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Current query text as last assigned.
    ///
    /// Updated on every (non-duplicate) assignment, before any debounce
    /// delay, so the box always shows what the user typed.
    pub query: String,

    /// Movie results of the most recently committed search.
    ///
    /// Replaced wholesale on search success; individual entries only ever
    /// change their `is_favorite` flag.
    pub movies: Vec<MovieResult>,

    /// TV-show results of the most recently committed search.
    ///
    /// Replaced wholesale on search success; individual entries only ever
    /// change their `is_favorite` flag.
    pub shows: Vec<ShowResult>,

    /// Whether a search is in flight.
    ///
    /// Set when a search starts, cleared on every exit path of the same
    /// search. A superseded search never touches this flag again.
    pub loading: bool,

    /// Human-readable description of the last failure, if any.
    ///
    /// Replaces any prior error and suppresses result rendering until the
    /// next successful or empty search.
    pub error: Option<String>,
}

impl SearchState {
    /// Computes which single mode the UI should render.
    ///
    /// Precedence: loading, then error, then results, then empty. Together
    /// with the `loading`/`error` invariant this guarantees exactly one
    /// visible mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::{DisplayMode, SearchState};
    ///
    /// let state = SearchState::default();
    /// assert_eq!(state.display_mode(), DisplayMode::Empty);
    /// ```
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        if self.loading {
            DisplayMode::Loading
        } else if self.error.is_some() {
            DisplayMode::Error
        } else if self.movies.is_empty() && self.shows.is_empty() {
            DisplayMode::Empty
        } else {
            DisplayMode::Results
        }
    }

    /// Marks the beginning of a search: in flight, prior error cleared.
    pub(crate) fn begin_search(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settles an empty-query search: both lists cleared, nothing in flight.
    pub(crate) fn settle_empty(&mut self) {
        self.movies.clear();
        self.shows.clear();
        self.loading = false;
    }

    /// Commits a successful search: both lists replaced wholesale.
    ///
    /// Stale entries are discarded even when the new lists are shorter.
    pub(crate) fn settle_results(&mut self, movies: Vec<MovieResult>, shows: Vec<ShowResult>) {
        self.movies = movies;
        self.shows = shows;
        self.loading = false;
    }

    /// Surfaces a failure, clearing `loading` first to hold the invariant.
    pub(crate) fn settle_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Flips the favorite flag to `favorite` on the entry with `id` in the
    /// `kind` list.
    ///
    /// Returns `false` without mutating anything when no entry matches;
    /// the lists may have been replaced since the toggle was requested.
    /// List order is unaffected either way.
    pub(crate) fn set_favorite(&mut self, kind: MediaKind, id: u64, favorite: bool) -> bool {
        match kind {
            MediaKind::Movie => self
                .movies
                .iter_mut()
                .find(|movie| movie.id == id)
                .map(|movie| movie.is_favorite = favorite),
            MediaKind::Show => self
                .shows
                .iter_mut()
                .find(|show| show.id == id)
                .map(|show| show.is_favorite = favorite),
        }
        .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> MovieResult {
        MovieResult {
            id,
            title: title.to_string(),
            overview: None,
            poster_path: None,
            is_favorite: false,
        }
    }

    #[test]
    fn display_mode_precedence() {
        let mut state = SearchState::default();
        assert_eq!(state.display_mode(), DisplayMode::Empty);

        state.begin_search();
        assert_eq!(state.display_mode(), DisplayMode::Loading);

        state.settle_results(vec![movie(1, "Batman")], vec![]);
        assert_eq!(state.display_mode(), DisplayMode::Results);

        state.settle_error("search failed: transport failure: offline".to_string());
        assert_eq!(state.display_mode(), DisplayMode::Error);
    }

    #[test]
    fn loading_never_coexists_with_an_error() {
        let mut state = SearchState::default();
        state.settle_error("boom".to_string());
        state.begin_search();
        assert!(state.loading);
        assert_eq!(state.error, None);

        state.settle_error("boom again".to_string());
        assert!(!state.loading);
    }

    #[test]
    fn empty_settle_discards_previous_results() {
        let mut state = SearchState::default();
        state.settle_results(vec![movie(1, "Batman"), movie(2, "Batman Returns")], vec![]);
        state.settle_empty();
        assert!(state.movies.is_empty());
        assert!(state.shows.is_empty());
        assert!(!state.loading);
        assert_eq!(state.display_mode(), DisplayMode::Empty);
    }

    #[test]
    fn set_favorite_matches_by_id_and_preserves_order() {
        let mut state = SearchState::default();
        state.settle_results(vec![movie(7, "Se7en"), movie(550, "Fight Club")], vec![]);

        assert!(state.set_favorite(MediaKind::Movie, 550, true));
        assert!(!state.movies[0].is_favorite);
        assert!(state.movies[1].is_favorite);
        assert_eq!(state.movies[0].id, 7);
        assert_eq!(state.movies[1].id, 550);
    }

    #[test]
    fn set_favorite_on_missing_id_is_a_noop() {
        let mut state = SearchState::default();
        state.settle_results(vec![movie(7, "Se7en")], vec![]);
        let before = state.clone();

        assert!(!state.set_favorite(MediaKind::Movie, 999, true));
        assert!(!state.set_favorite(MediaKind::Show, 7, true));
        assert_eq!(state, before);
    }
}
