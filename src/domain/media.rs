//! Media result models returned by the search collaborators.
//!
//! This module defines the two list-entry types the controller aggregates,
//! [`MovieResult`] and [`ShowResult`], plus [`MediaKind`] for routing
//! operations that apply to one list or the other. The two result types are
//! structurally identical but deliberately distinct: movie ids and show ids
//! come from different id spaces, and keeping them as separate types stops
//! one from being used where the other is expected.

use serde::{Deserialize, Serialize};

/// Which of the two media lists an operation targets.
///
/// Movie ids and show ids are independent id spaces; every id-carrying
/// controller operation takes a `MediaKind` so the id is only ever matched
/// against the list it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    /// The movie result list.
    Movie,
    /// The TV-show result list.
    Show,
}

/// A movie entry in the search results.
///
/// # Fields
///
/// - `id`: Stable identity key, unique within the movie list
/// - `title`: Display title
/// - `overview`: Synopsis, absent when the backend has none
/// - `poster_path`: Relative poster image path, absent when the backend has none
/// - `is_favorite`: Whether the user has favorited this movie
///
/// List order is the relevance order returned by the backend and is
/// preserved as received; favoriting never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieResult {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub is_favorite: bool,
}

/// A TV-show entry in the search results.
///
/// Structurally identical to [`MovieResult`]; see there for field semantics.
/// Kept as a distinct type because show ids live in their own id space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowResult {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub is_favorite: bool,
}
