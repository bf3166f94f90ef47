//! URL handling module
//!
//! This module provides link normalization, seed parsing and the same-origin
//! check that bounds the crawl.

mod normalize;
mod origin;

// Re-export main functions
pub use normalize::{normalize_link, parse_seed};
pub use origin::{origin_authority, same_origin};
