//! An open page: session, document, and the one background load.

use std::sync::Arc;

use tabkit_articles::{ArticleSource, FsSource, HttpSource, PendingLoad, spawn_load};
use tabkit_config::{ArticlesConfig, Config};

use crate::dispatcher::{DispatchOutcome, UiEvent};
use crate::document::Document;
use crate::layout::{LayoutError, PageLayout, TopicId};
use crate::session::PageSession;

/// Pick the article source for a configuration.
///
/// A configured `base_url` selects HTTP; otherwise the dataset is read from
/// the filesystem relative to the config directory.
#[must_use]
pub fn source_for(articles: &ArticlesConfig) -> Arc<dyn ArticleSource> {
    match &articles.base_url {
        Some(base_url) => Arc::new(HttpSource::new(Some(base_url.clone()), articles.timeout)),
        None => Arc::new(FsSource::new(articles.root_dir.clone())),
    }
}

/// A page bound to its document.
///
/// The event loop feeds UI events to [`handle`](Self::handle) and calls
/// [`poll`](Self::poll) between events; the load continuation then runs on
/// the event loop's thread.
///
/// # Example
///
/// ```ignore
/// use tabkit_widgets::{MemoryDocument, Page, UiEvent};
///
/// let document = MemoryDocument::from_layout(&layout);
/// let mut page = Page::open(layout, config, source, document);
/// page.wait();
/// page.handle(&UiEvent::TabClick { tab: "html-tab".to_owned() });
/// ```
pub struct Page<D: Document> {
    session: PageSession,
    document: D,
    pending: Option<PendingLoad>,
}

impl<D: Document> Page<D> {
    /// Open a page and start loading its dataset from `source`.
    pub fn open(
        layout: PageLayout,
        config: Config,
        source: Arc<dyn ArticleSource>,
        mut document: D,
    ) -> Self {
        let mut session = PageSession::new(layout, config);
        let pending = session
            .start(&mut document)
            .map(|location| spawn_load(source, location));
        Self {
            session,
            document,
            pending,
        }
    }

    /// Open a page using the source selected by its configuration.
    pub fn open_configured(layout: PageLayout, config: Config, document: D) -> Self {
        let source = source_for(&config.articles_resolved);
        Self::open(layout, config, source, document)
    }

    /// Run the load continuation if the dataset has arrived.
    ///
    /// Returns `true` if the continuation ran.
    pub fn poll(&mut self) -> bool {
        let Some(result) = self.pending.as_mut().and_then(PendingLoad::try_recv) else {
            return false;
        };
        self.pending = None;
        self.session.on_articles_loaded(&mut self.document, result);
        true
    }

    /// Block until the dataset arrives, then run the load continuation.
    pub fn wait(&mut self) {
        if let Some(mut pending) = self.pending.take()
            && let Some(result) = pending.recv()
        {
            self.session.on_articles_loaded(&mut self.document, result);
        }
    }

    /// Whether the dataset load is still outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle one UI event.
    pub fn handle(&mut self, event: &UiEvent) -> DispatchOutcome {
        self.session.dispatch(&mut self.document, event)
    }

    /// Register a topic button added after start-up.
    ///
    /// # Errors
    ///
    /// See [`PageSession::add_topic`].
    pub fn add_topic(
        &mut self,
        accordion: &str,
        id: impl Into<String>,
        article: impl Into<String>,
        toggle_group: Option<String>,
    ) -> Result<TopicId, LayoutError> {
        self.session.add_topic(accordion, id, article, toggle_group)
    }

    /// Session state.
    #[must_use]
    pub fn session(&self) -> &PageSession {
        &self.session
    }

    /// The bound document.
    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// The bound document, for host-side edits such as inserting elements.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }
}
