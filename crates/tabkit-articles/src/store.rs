//! Per-page article store.
//!
//! A page loads its dataset exactly once. [`ArticleStore`] records the outcome
//! of that one load and answers lookups against it.

use crate::article::{Article, ArticleMap};
use crate::source::FetchError;

/// Outcome of the page's dataset load.
#[derive(Debug, Default)]
pub enum LoadState {
    /// Load started (or not yet started); no outcome yet.
    #[default]
    Pending,
    /// Dataset loaded.
    Ready(ArticleMap),
    /// Dataset failed to load.
    Failed(FetchError),
}

/// Error returned by [`ArticleStore::lookup`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Dataset loaded but has no article with this id.
    #[error("Article not found: {0}")]
    NotFound(String),
    /// Dataset has not finished loading.
    #[error("Articles are still loading")]
    Pending,
    /// Dataset failed to load; no article can be found.
    #[error("Articles failed to load")]
    Unavailable,
}

/// Holds the single article dataset of a page.
#[derive(Debug, Default)]
pub struct ArticleStore {
    state: LoadState,
}

impl ArticleStore {
    /// Create a store awaiting its load.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a dataset.
    #[must_use]
    pub fn ready(articles: ArticleMap) -> Self {
        Self {
            state: LoadState::Ready(articles),
        }
    }

    /// Record the outcome of the page's load.
    ///
    /// Only the first outcome is kept; later calls are ignored and return
    /// `false`.
    pub fn complete(&mut self, result: Result<ArticleMap, FetchError>) -> bool {
        if !matches!(self.state, LoadState::Pending) {
            tracing::warn!("Article store already completed; ignoring second load");
            return false;
        }
        self.state = match result {
            Ok(articles) => LoadState::Ready(articles),
            Err(e) => LoadState::Failed(e),
        };
        true
    }

    /// Current load state.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Whether the load has not completed yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, LoadState::Pending)
    }

    /// Loaded dataset, if the load succeeded.
    #[must_use]
    pub fn articles(&self) -> Option<&ArticleMap> {
        match &self.state {
            LoadState::Ready(articles) => Some(articles),
            _ => None,
        }
    }

    /// Look up an article by id.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] for unknown ids, and
    /// [`LookupError::Pending`]/[`LookupError::Unavailable`] when no dataset
    /// is loaded.
    pub fn lookup(&self, id: &str) -> Result<&Article, LookupError> {
        match &self.state {
            LoadState::Ready(articles) => articles
                .get(id)
                .ok_or_else(|| LookupError::NotFound(id.to_owned())),
            LoadState::Pending => Err(LookupError::Pending),
            LoadState::Failed(_) => Err(LookupError::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::source::FetchErrorKind;

    fn dataset() -> ArticleMap {
        ArticleMap::new().with_article("a", "Alpha", "<p>A</p>")
    }

    #[test]
    fn test_new_store_is_pending() {
        let store = ArticleStore::new();

        assert!(store.is_pending());
        assert_eq!(store.lookup("a"), Err(LookupError::Pending));
    }

    #[test]
    fn test_lookup_after_load() {
        let mut store = ArticleStore::new();
        assert!(store.complete(Ok(dataset())));

        assert_eq!(store.lookup("a").unwrap().title, "Alpha");
        assert_eq!(
            store.lookup("missing"),
            Err(LookupError::NotFound("missing".to_owned()))
        );
    }

    #[test]
    fn test_lookup_after_failure() {
        let mut store = ArticleStore::new();
        store.complete(Err(FetchError::http_status(500)));

        assert!(!store.is_pending());
        assert!(store.articles().is_none());
        assert_eq!(store.lookup("a"), Err(LookupError::Unavailable));
    }

    #[test]
    fn test_second_completion_is_ignored() {
        let mut store = ArticleStore::ready(dataset());

        let accepted = store.complete(Err(FetchError::new(FetchErrorKind::Network)));

        assert!(!accepted);
        assert_eq!(store.lookup("a").unwrap().title, "Alpha");
    }
}
