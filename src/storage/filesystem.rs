//! Filesystem page store
//!
//! Writes each page as its own `.html` file in a flat output directory.

use crate::storage::naming::{sanitize_filename, EXTENSION};
use crate::storage::traits::{PageStore, SavedPage, StorageError, StorageResult};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use url::Url;

/// Page store backed by a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct FsPageStore {
    output_dir: PathBuf,
}

impl FsPageStore {
    /// Opens a page store, creating the output directory if needed
    ///
    /// An already existing directory is reused as is. Files left over from an
    /// earlier run are never overwritten; new pages get suffixed names instead.
    ///
    /// # Arguments
    ///
    /// * `output_dir` - Directory that will hold the saved pages
    ///
    /// # Returns
    ///
    /// * `Ok(FsPageStore)` - The directory exists and is ready for writes
    /// * `Err(StorageError)` - The directory could not be created
    pub fn open(output_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let output_dir = output_dir.into();

        if output_dir.is_dir() {
            tracing::info!("Output directory already exists: {}", output_dir.display());
        } else {
            std::fs::create_dir_all(&output_dir).map_err(|source| StorageError::CreateDir {
                path: output_dir.clone(),
                source,
            })?;
            tracing::info!("Output directory created: {}", output_dir.display());
        }

        Ok(Self { output_dir })
    }

    /// Returns the directory pages are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Builds the candidate path for a base name and collision index
    ///
    /// Index 0 is the plain name; index n is `name_n.html`.
    fn candidate(&self, file_name: &str, index: u32) -> PathBuf {
        if index == 0 {
            return self.output_dir.join(file_name);
        }

        let stem = file_name
            .strip_suffix(&format!(".{}", EXTENSION))
            .unwrap_or(file_name);
        self.output_dir
            .join(format!("{}_{}.{}", stem, index, EXTENSION))
    }
}

impl PageStore for FsPageStore {
    fn save(&self, source_url: &Url, body: &str) -> StorageResult<SavedPage> {
        let file_name = sanitize_filename(source_url.path());

        let mut index = 0;
        loop {
            let path = self.candidate(&file_name, index);
            index += 1;

            if path.exists() {
                continue;
            }

            // create_new turns a file that appeared since the exists() check into
            // another collision instead of an overwrite
            let file = OpenOptions::new().write(true).create_new(true).open(&path);
            let mut file = match file {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(source) => return Err(StorageError::Write { path, source }),
            };

            file.write_all(body.as_bytes())
                .map_err(|source| StorageError::Write {
                    path: path.clone(),
                    source,
                })?;

            tracing::trace!("Wrote {} bytes to {}", body.len(), path.display());

            return Ok(SavedPage {
                source_url: source_url.clone(),
                file_path: path,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_open_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("output");

        let store = FsPageStore::open(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(store.output_dir(), dir.as_path());
    }

    #[test]
    fn test_open_existing_directory_is_ok() {
        let tmp = TempDir::new().unwrap();
        assert!(FsPageStore::open(tmp.path()).is_ok());
        assert!(FsPageStore::open(tmp.path()).is_ok());
    }

    #[test]
    fn test_open_fails_when_path_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("occupied");
        std::fs::write(&file, "x").unwrap();

        let result = FsPageStore::open(&file);
        assert!(matches!(result, Err(StorageError::CreateDir { .. })));
    }

    #[test]
    fn test_save_root_page() {
        let tmp = TempDir::new().unwrap();
        let store = FsPageStore::open(tmp.path()).unwrap();

        let saved = store.save(&url("https://x.test/"), "<html>root</html>").unwrap();

        assert_eq!(saved.file_path, tmp.path().join("root.html"));
        assert_eq!(saved.source_url, url("https://x.test/"));
        assert_eq!(
            std::fs::read_to_string(&saved.file_path).unwrap(),
            "<html>root</html>"
        );
    }

    #[test]
    fn test_query_collision_gets_suffix() {
        let tmp = TempDir::new().unwrap();
        let store = FsPageStore::open(tmp.path()).unwrap();

        let first = store.save(&url("https://x.test/x?v=1"), "one").unwrap();
        let second = store.save(&url("https://x.test/x?v=2"), "two").unwrap();

        assert_eq!(first.file_path, tmp.path().join("x.html"));
        assert_eq!(second.file_path, tmp.path().join("x_1.html"));
        assert_eq!(std::fs::read_to_string(&first.file_path).unwrap(), "one");
        assert_eq!(std::fs::read_to_string(&second.file_path).unwrap(), "two");
    }

    #[test]
    fn test_suffixes_ascend() {
        let tmp = TempDir::new().unwrap();
        let store = FsPageStore::open(tmp.path()).unwrap();

        let paths: Vec<PathBuf> = (0..4)
            .map(|i| {
                store
                    .save(&url(&format!("https://x.test/a?page={}", i)), "body")
                    .unwrap()
                    .file_path
            })
            .collect();

        assert_eq!(
            paths,
            vec![
                tmp.path().join("a.html"),
                tmp.path().join("a_1.html"),
                tmp.path().join("a_2.html"),
                tmp.path().join("a_3.html"),
            ]
        );
    }

    #[test]
    fn test_existing_files_from_earlier_run_not_overwritten() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("root.html"), "old").unwrap();
        std::fs::write(tmp.path().join("root_1.html"), "older").unwrap();

        let store = FsPageStore::open(tmp.path()).unwrap();
        let saved = store.save(&url("https://x.test/"), "new").unwrap();

        assert_eq!(saved.file_path, tmp.path().join("root_2.html"));
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("root.html")).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_save_fails_when_directory_removed() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("out");
        let store = FsPageStore::open(&dir).unwrap();
        std::fs::remove_dir(&dir).unwrap();

        let result = store.save(&url("https://x.test/a"), "body");
        assert!(matches!(result, Err(StorageError::Write { .. })));
    }
}
