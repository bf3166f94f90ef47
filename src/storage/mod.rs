//! Storage module for persisting fetched pages
//!
//! This module handles writing crawled HTML to the output directory, including:
//! - Deriving a filesystem-safe name from each URL path
//! - Resolving name collisions with numbered suffixes
//! - Creating the output directory before the first save

mod filesystem;
mod naming;
mod traits;

pub use filesystem::FsPageStore;
pub use naming::sanitize_filename;
pub use traits::{PageStore, SavedPage, StorageError, StorageResult};
