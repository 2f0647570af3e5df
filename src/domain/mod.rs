//! Domain layer for the marquee search controller.
//!
//! This module contains the core domain types for the crate, independent of
//! the async runtime or any collaborator implementation. It keeps the data
//! model and error taxonomy isolated from orchestration concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`media`]: Movie/show result models and the kind discriminant
//!
//! # Examples
//!
//! ```
//! use marquee::{MediaKind, MovieResult};
//!
//! let movie = MovieResult {
//!     id: 268,
//!     title: "Batman".to_string(),
//!     overview: None,
//!     poster_path: None,
//!     is_favorite: false,
//! };
//! assert_eq!(MediaKind::Movie, MediaKind::Movie);
//! # let _ = movie;
//! ```

pub mod error;
pub mod media;

pub use error::{ControllerError, SearchError, SearchResult};
pub use media::{MediaKind, MovieResult, ShowResult};
