//! Navigation delegation contract.
//!
//! This module defines the [`Navigator`] trait the controller uses to leave
//! the search surface, along with the [`Route`] and [`Tab`] value types it
//! passes. Navigation calls are fire-and-forget: the controller consumes no
//! return value beyond "accepted", and the navigation-stack implementation
//! lives entirely on the host side.

use crate::domain::MediaKind;

/// A destination the host can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Detail screen for a movie.
    MovieDetail {
        /// Movie id within the movie id space.
        id: u64,
    },
    /// Detail screen for a TV show.
    ShowDetail {
        /// Show id within the show id space.
        id: u64,
    },
}

/// Top-level tab a route is pushed within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// The movies tab.
    Movies,
    /// The TV-shows tab.
    Shows,
}

impl Route {
    /// Builds the detail route for a media kind and id.
    #[must_use]
    pub fn detail(kind: MediaKind, id: u64) -> Self {
        match kind {
            MediaKind::Movie => Self::MovieDetail { id },
            MediaKind::Show => Self::ShowDetail { id },
        }
    }

    /// The tab this route belongs to.
    #[must_use]
    pub fn tab(&self) -> Tab {
        match self {
            Self::MovieDetail { .. } => Tab::Movies,
            Self::ShowDetail { .. } => Tab::Shows,
        }
    }
}

/// Host-supplied navigation collaborator.
///
/// All methods are fire-and-forget; failures are the host's concern.
pub trait Navigator: Send + Sync {
    /// Dismisses the currently presented search context.
    fn dismiss(&self);

    /// Pushes `route` within `tab`.
    fn navigate(&self, route: Route, tab: Tab);

    /// Presents `route` as a modal sheet over the current context.
    ///
    /// Part of the contract for hosts that share one navigator across
    /// screens; the search controller itself never calls it.
    fn present_sheet(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_route_carries_the_kind_and_tab() {
        let movie = Route::detail(MediaKind::Movie, 268);
        assert_eq!(movie, Route::MovieDetail { id: 268 });
        assert_eq!(movie.tab(), Tab::Movies);

        let show = Route::detail(MediaKind::Show, 2287);
        assert_eq!(show, Route::ShowDetail { id: 2287 });
        assert_eq!(show.tab(), Tab::Shows);
    }
}
