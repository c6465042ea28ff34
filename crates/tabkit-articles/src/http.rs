//! HTTP article source.
//!
//! Provides [`HttpSource`], a blocking `ureq` client fetching the dataset from
//! the static file server hosting the page.

use std::time::Duration;

use ureq::Agent;

use crate::source::{ArticleSource, FetchError, FetchErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Http";

/// HTTP article source.
///
/// Absolute `http(s)://` locations are fetched as-is; other locations are
/// joined onto `base_url`. Non-2xx responses are reported as
/// [`FetchErrorKind::HttpStatus`].
pub struct HttpSource {
    agent: Agent,
    base_url: Option<String>,
}

impl HttpSource {
    /// Create a source.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Site origin relative locations resolve against
    /// * `timeout` - Global request timeout; `None` waits indefinitely
    #[must_use]
    pub fn new(base_url: Option<String>, timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.map(|url| url.trim_end_matches('/').to_owned()),
        }
    }

    /// Build the request URL for a location.
    fn url_for(&self, location: &str) -> Result<String, FetchError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            return Ok(location.to_owned());
        }
        let Some(base) = &self.base_url else {
            return Err(FetchError::new(FetchErrorKind::InvalidLocation)
                .with_location(location)
                .with_backend(BACKEND));
        };
        let path = location.trim_start_matches("./").trim_start_matches('/');
        Ok(format!("{base}/{path}"))
    }
}

impl ArticleSource for HttpSource {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let url = self.url_for(location)?;

        tracing::debug!(url = %url, "Fetching articles");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| {
                FetchError::new(FetchErrorKind::Network)
                    .with_location(location)
                    .with_backend(BACKEND)
                    .with_source(e)
            })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(FetchError::http_status(status)
                .with_location(location)
                .with_backend(BACKEND));
        }

        response.into_body().read_to_string().map_err(|e| {
            FetchError::new(FetchErrorKind::Network)
                .with_location(location)
                .with_backend(BACKEND)
                .with_source(e)
        })
    }

    fn name(&self) -> &'static str {
        BACKEND
    }
}
