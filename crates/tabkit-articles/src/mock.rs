//! Mock article source for testing.
//!
//! Provides [`MockSource`] for unit testing without network or filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::article::ArticleMap;
use crate::source::{ArticleSource, FetchError};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Status(u16),
}

/// Mock article source for testing.
///
/// Stores responses in memory. Use the builder methods to configure the mock
/// with test data. Unknown locations answer with HTTP 404.
///
/// # Example
///
/// ```ignore
/// use tabkit_articles::{ArticleMap, MockSource, load};
///
/// let source = MockSource::new()
///     .with_articles("data.json", &ArticleMap::new().with_article("a", "Alpha", "<p>A</p>"))
///     .with_status("broken.json", 500);
///
/// let articles = load(&source, "data.json").unwrap();
/// assert_eq!(source.fetch_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    responses: RwLock<HashMap<String, MockResponse>>,
    fetches: AtomicUsize,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve raw body text at `location`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_body(self, location: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(location.into(), MockResponse::Body(body.into()));
        self
    }

    /// Serve a serialized dataset at `location`.
    ///
    /// # Panics
    ///
    /// Panics if the dataset cannot be serialized or the lock is poisoned.
    #[must_use]
    pub fn with_articles(self, location: impl Into<String>, articles: &ArticleMap) -> Self {
        let body = serde_json::to_string(articles).unwrap();
        self.with_body(location, body)
    }

    /// Answer requests for `location` with an HTTP status error.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_status(self, location: impl Into<String>, status: u16) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(location.into(), MockResponse::Status(status));
        self
    }

    /// Number of `fetch` calls made so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl ArticleSource for MockSource {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let response = self
            .responses
            .read()
            .unwrap()
            .get(location)
            .cloned()
            .unwrap_or(MockResponse::Status(404));

        match response {
            MockResponse::Body(body) => Ok(body),
            MockResponse::Status(status) => Err(FetchError::http_status(status)
                .with_location(location)
                .with_backend(BACKEND)),
        }
    }

    fn name(&self) -> &'static str {
        BACKEND
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::source::{FetchErrorKind, load};

    #[test]
    fn test_mock_serves_articles() {
        let articles = ArticleMap::new().with_article("a", "Alpha", "<p>A</p>");
        let source = MockSource::new().with_articles("data.json", &articles);

        let loaded = load(&source, "data.json").unwrap();

        assert_eq!(loaded, articles);
        assert_eq!(source.fetch_count(), 1);
    }

    #[test]
    fn test_mock_status() {
        let source = MockSource::new().with_status("data.json", 500);

        let err = source.fetch("data.json").unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::HttpStatus);
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.backend(), Some("Mock"));
    }

    #[test]
    fn test_mock_unknown_location_is_404() {
        let source = MockSource::new();

        let err = source.fetch("nope.json").unwrap_err();

        assert_eq!(err.status(), Some(404));
    }
}
