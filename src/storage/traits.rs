//! Storage traits and error types
//!
//! This module defines the trait interface for page stores and the
//! associated record and error types.

use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// Errors that can occur while persisting a page
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A page that was written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPage {
    /// The URL the content was fetched from
    pub source_url: Url,

    /// Where the content was written
    pub file_path: PathBuf,
}

/// Trait for page store implementations
///
/// Saves are expected to be serialized by the caller. The crawl loop is the
/// only writer, so implementations do not need their own locking to keep
/// file names unique.
pub trait PageStore: Send + Sync {
    /// Writes a fetched page and returns where it ended up
    ///
    /// # Arguments
    ///
    /// * `source_url` - The URL the page was fetched from; its path names the file
    /// * `body` - The raw HTML, written unmodified
    ///
    /// # Returns
    ///
    /// * `Ok(SavedPage)` - The page was written to a path no other page uses
    /// * `Err(StorageError)` - The write failed; nothing was saved
    fn save(&self, source_url: &Url, body: &str) -> StorageResult<SavedPage>;
}
