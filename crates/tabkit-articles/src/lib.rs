//! Article dataset loading for tabkit pages.
//!
//! This crate provides an [`ArticleSource`] trait for abstracting where the
//! page's JSON article dataset is fetched from, and an [`ArticleStore`] that
//! holds the one dataset a page loads. This enables:
//!
//! - **Unit testing** without network or filesystem access
//! - **Backend flexibility** (static file server, local directory)
//! - **Clean separation** between widget state logic and I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ArticleSource`] trait with a single `fetch()` method
//! - [`HttpSource`] for datasets served over HTTP
//! - [`FsSource`] for datasets read from a local directory
//! - [`MockSource`] for testing (behind `mock` feature flag)
//! - [`ArticleStore`] holding the loaded [`ArticleMap`]
//! - [`spawn_load`] running the one fetch off the event thread
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use tabkit_articles::{ArticleStore, FsSource, load};
//!
//! let source = FsSource::new(PathBuf::from("public"));
//! let mut store = ArticleStore::new();
//! store.complete(load(&source, "data/html_articles.json"));
//! let article = store.lookup("semantic-html")?;
//! ```

mod article;
mod fs;
mod http;
mod loader;
#[cfg(feature = "mock")]
mod mock;
mod source;
mod store;

pub use article::{Article, ArticleMap};
pub use fs::FsSource;
pub use http::HttpSource;
pub use loader::{PendingLoad, spawn_load};
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use source::{ArticleSource, FetchError, FetchErrorKind, load};
pub use store::{ArticleStore, LoadState, LookupError};
