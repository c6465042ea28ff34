//! Article source trait and error types.
//!
//! Provides the core [`ArticleSource`] trait for abstracting where the article
//! dataset is fetched from, along with [`FetchError`] for unified error
//! handling across backends.
//!
//! # Location Convention
//!
//! Locations are the dataset path as written on the page (for example
//! `"/data/html_articles.json"` or `"../data/os_a11y_articles.json"`).
//! Each backend maps a location to its own addressing scheme.

use std::sync::Arc;

use crate::article::ArticleMap;

/// Semantic error categories for dataset fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchErrorKind {
    /// Connection failed, DNS failure, or I/O failure while reading.
    Network,
    /// Server answered with a non-success status.
    HttpStatus,
    /// Dataset text is not a valid `{ id: { title, content } }` document.
    Parse,
    /// Dataset does not exist at the location.
    NotFound,
    /// Location cannot be mapped to the backend (e.g. escapes the root).
    InvalidLocation,
    /// Other/unknown error category.
    Other,
}

/// Fetch error with semantic kind and backend-specific source.
///
/// Cloning shares the underlying source error.
#[derive(Debug, Clone)]
pub struct FetchError {
    kind: FetchErrorKind,
    status: Option<u16>,
    location: Option<String>,
    backend: Option<&'static str>,
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl FetchError {
    /// Create a new fetch error.
    #[must_use]
    pub fn new(kind: FetchErrorKind) -> Self {
        Self {
            kind,
            status: None,
            location: None,
            backend: None,
            source: None,
        }
    }

    /// Create an HTTP status error.
    #[must_use]
    pub fn http_status(status: u16) -> Self {
        let mut error = Self::new(FetchErrorKind::HttpStatus);
        error.status = Some(status);
        error
    }

    /// Create a not found error with location.
    #[must_use]
    pub fn not_found(location: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::NotFound).with_location(location)
    }

    /// Create a fetch error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, location: impl Into<String>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => FetchErrorKind::NotFound,
            _ => FetchErrorKind::Network,
        };
        Self::new(kind).with_location(location).with_source(err)
    }

    /// Attach location context.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    /// HTTP status, for [`FetchErrorKind::HttpStatus`] errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Dataset location the fetch was for.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Backend identifier (e.g., "Http", "Fs", "Mock").
    #[must_use]
    pub fn backend(&self) -> Option<&'static str> {
        self.backend
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (location: /data/a.json)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        match self.kind {
            FetchErrorKind::Network => write!(f, "Network error")?,
            FetchErrorKind::HttpStatus => match self.status {
                Some(status) => write!(f, "HTTP status {status}")?,
                None => write!(f, "HTTP error")?,
            },
            FetchErrorKind::Parse => write!(f, "Invalid article data")?,
            FetchErrorKind::NotFound => write!(f, "Not found")?,
            FetchErrorKind::InvalidLocation => write!(f, "Invalid location")?,
            FetchErrorKind::Other => write!(f, "Error")?,
        }

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(location) = &self.location {
            write!(f, " (location: {location})")?;
        }

        Ok(())
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

/// Source of the page's article dataset.
///
/// Implementations return the raw dataset text; parsing happens in [`load`]
/// so every backend reports malformed data the same way.
pub trait ArticleSource: Send + Sync {
    /// Fetch the raw dataset text at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on network failure, non-success status, or a
    /// missing dataset.
    fn fetch(&self, location: &str) -> Result<String, FetchError>;

    /// Backend identifier used in error messages and logs.
    fn name(&self) -> &'static str;
}

/// Fetch and parse the dataset at `location`.
///
/// # Errors
///
/// Returns [`FetchError`] if the fetch fails or the text is not a valid
/// dataset ([`FetchErrorKind::Parse`]).
pub fn load(source: &dyn ArticleSource, location: &str) -> Result<ArticleMap, FetchError> {
    let text = source.fetch(location)?;
    let articles = ArticleMap::from_json(&text).map_err(|e| {
        FetchError::new(FetchErrorKind::Parse)
            .with_location(location)
            .with_backend(source.name())
            .with_source(e)
    })?;

    tracing::info!(
        location,
        backend = source.name(),
        count = articles.len(),
        "Articles loaded"
    );

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct StaticSource(Result<&'static str, u16>);

    impl ArticleSource for StaticSource {
        fn fetch(&self, location: &str) -> Result<String, FetchError> {
            match self.0 {
                Ok(text) => Ok(text.to_owned()),
                Err(status) => Err(FetchError::http_status(status)
                    .with_location(location)
                    .with_backend("Static")),
            }
        }

        fn name(&self) -> &'static str {
            "Static"
        }
    }

    #[test]
    fn test_fetch_error_new() {
        let err = FetchError::new(FetchErrorKind::Network);

        assert_eq!(err.kind(), FetchErrorKind::Network);
        assert_eq!(err.status(), None);
        assert_eq!(err.location(), None);
        assert_eq!(err.backend(), None);
    }

    #[test]
    fn test_fetch_error_display_http_status() {
        let err = FetchError::http_status(500)
            .with_location("/data/a.json")
            .with_backend("Http");

        assert_eq!(err.to_string(), "[Http] HTTP status 500 (location: /data/a.json)");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_fetch_error_io_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = FetchError::io(io, "a.json");

        assert_eq!(err.kind(), FetchErrorKind::NotFound);
        assert_eq!(err.to_string(), "Not found: no such file (location: a.json)");
    }

    #[test]
    fn test_fetch_error_io_other_is_network() {
        let io = std::io::Error::other("broken pipe");
        let err = FetchError::io(io, "a.json");

        assert_eq!(err.kind(), FetchErrorKind::Network);
    }

    #[test]
    fn test_fetch_error_source_chain() {
        use std::error::Error;

        let io = std::io::Error::other("disk");
        let err = FetchError::new(FetchErrorKind::Network).with_source(io);

        assert!(err.source().is_some());
    }

    #[test]
    fn test_load_parses_dataset() {
        let source = StaticSource(Ok(r#"{"a": {"title": "Alpha", "content": "<p>A</p>"}}"#));

        let articles = load(&source, "a.json").unwrap();

        assert_eq!(articles.get("a").unwrap().title, "Alpha");
    }

    #[test]
    fn test_load_parse_failure_is_parse_kind() {
        let source = StaticSource(Ok("<html>not json</html>"));

        let err = load(&source, "a.json").unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::Parse);
        assert_eq!(err.location(), Some("a.json"));
        assert_eq!(err.backend(), Some("Static"));
    }

    #[test]
    fn test_load_propagates_fetch_error() {
        let source = StaticSource(Err(500));

        let err = load(&source, "a.json").unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::HttpStatus);
        assert_eq!(err.status(), Some(500));
    }
}
