//! Filesystem article source.
//!
//! Provides [`FsSource`] for reading the dataset from a local site directory,
//! e.g. the output directory of the static site build.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::source::{ArticleSource, FetchError, FetchErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem article source.
///
/// Locations are resolved against `root`. A leading `/` means "site root",
/// and `..` segments may not climb above the root.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use tabkit_articles::{ArticleSource, FsSource};
///
/// let source = FsSource::new(PathBuf::from("dist"));
/// let text = source.fetch("/data/html_articles.json")?;
/// ```
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory locations are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a location to a file path under the root.
    fn resolve(&self, location: &str) -> Result<PathBuf, FetchError> {
        let mut relative = PathBuf::new();
        for component in Path::new(location.trim_start_matches('/')).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !relative.pop() {
                        return Err(FetchError::new(FetchErrorKind::InvalidLocation)
                            .with_location(location)
                            .with_backend(BACKEND));
                    }
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(FetchError::new(FetchErrorKind::InvalidLocation)
                        .with_location(location)
                        .with_backend(BACKEND));
                }
            }
        }
        Ok(self.root.join(relative))
    }
}

impl ArticleSource for FsSource {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let path = self.resolve(location)?;
        fs::read_to_string(&path).map_err(|e| FetchError::io(e, location).with_backend(BACKEND))
    }

    fn name(&self) -> &'static str {
        BACKEND
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn site_with_dataset() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(
            dir.path().join("data/html_articles.json"),
            r#"{"a": {"title": "Alpha", "content": "<p>A</p>"}}"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_fetch_reads_file() {
        let dir = site_with_dataset();
        let source = FsSource::new(dir.path().to_path_buf());

        let text = source.fetch("data/html_articles.json").unwrap();

        assert!(text.contains("Alpha"));
    }

    #[test]
    fn test_fetch_leading_slash_is_site_root() {
        let dir = site_with_dataset();
        let source = FsSource::new(dir.path().to_path_buf());

        assert!(source.fetch("/data/html_articles.json").is_ok());
    }

    #[test]
    fn test_fetch_parent_within_root() {
        let dir = site_with_dataset();
        let source = FsSource::new(dir.path().to_path_buf());

        assert!(source.fetch("pages/../data/html_articles.json").is_ok());
    }

    #[test]
    fn test_fetch_rejects_escape_from_root() {
        let dir = site_with_dataset();
        let source = FsSource::new(dir.path().to_path_buf());

        let err = source.fetch("../secrets.json").unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::InvalidLocation);
        assert_eq!(err.backend(), Some("Fs"));
    }

    #[test]
    fn test_fetch_missing_file_is_not_found() {
        let dir = site_with_dataset();
        let source = FsSource::new(dir.path().to_path_buf());

        let err = source.fetch("data/missing.json").unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::NotFound);
        assert_eq!(err.location(), Some("data/missing.json"));
    }
}
