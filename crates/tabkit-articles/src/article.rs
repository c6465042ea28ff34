//! Article dataset types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single article from the dataset.
///
/// `content` is a trusted HTML fragment and is rendered verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article title, rendered as the region heading.
    pub title: String,
    /// HTML fragment rendered after the heading.
    pub content: String,
}

/// Article dataset keyed by article id.
///
/// Deserializes from a JSON document shaped `{ "<id>": { "title", "content" } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleMap {
    articles: HashMap<String, Article>,
}

impl ArticleMap {
    /// Create an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the text is not a valid dataset.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Add an article (builder style, used by tests and fixtures).
    #[must_use]
    pub fn with_article(
        mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.articles.insert(
            id.into(),
            Article {
                title: title.into(),
                content: content.into(),
            },
        );
        self
    }

    /// Get an article by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.get(id)
    }

    /// Check whether an article id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.articles.contains_key(id)
    }

    /// Number of articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the dataset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Iterate over article ids (unordered).
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.articles.keys().map(String::as_str)
    }
}
