//! Page session.
//!
//! [`PageSession`] owns everything that changes while a page is open: the
//! selection state, the article store, and which topic each content region
//! shows. It is created once at page start and never implicitly reset.
//!
//! # Flow
//!
//! Every operation runs the same pipeline:
//!
//! 1. the transition runs on a copy of the selection state
//! 2. every element the projection and the region write touch is resolved
//! 3. the ARIA projection is applied and the copy becomes the state
//! 4. a topic selection renders its article into the owning tab's region
//!
//! A missing element aborts the operation before step 3, so the state and
//! the document never disagree and the same input can be retried.
//!
//! Errors never escape [`PageSession::dispatch`] or the load continuation;
//! they are logged where the operation started.

use tabkit_articles::{ArticleMap, ArticleStore, FetchError};
use tabkit_config::{Config, ConfigError};

use crate::aria;
use crate::content::{self, Rendered};
use crate::dispatcher::{self, Action, DispatchOutcome, UiEvent};
use crate::document::{Document, MissingElement};
use crate::layout::{AccordionId, Element, LayoutError, PageLayout, TabId, TopicId};
use crate::selection::SelectionState;

/// Failure of one session operation.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A required setting is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
    /// The article dataset could not be loaded.
    #[error("Failed to load articles: {0}")]
    Fetch(#[from] FetchError),
    /// A topic references an article the dataset does not contain.
    #[error("Article not found: {0}")]
    NotFound(String),
    /// An element the operation writes to is missing from the document.
    #[error("Cannot resolve target: {0}")]
    TargetResolution(#[from] MissingElement),
}

impl SessionError {
    /// Log at the level matching the failure's reach.
    pub fn log(&self) {
        match self {
            Self::NotFound(article) => {
                tracing::warn!(article = %article, "Article not found in loaded data");
            }
            Self::Configuration(e) => tracing::error!(error = %e, "Page configuration error"),
            Self::Fetch(e) => tracing::error!(error = %e, "Error fetching or parsing articles"),
            Self::TargetResolution(e) => tracing::error!(error = %e, "Operation aborted"),
        }
    }
}

/// Mutable state of one open page.
pub struct PageSession {
    layout: PageLayout,
    config: Config,
    state: SelectionState,
    store: ArticleStore,
    shown: Vec<Option<TopicId>>,
    configuration_failed: bool,
}

impl PageSession {
    /// Create a session for a page.
    #[must_use]
    pub fn new(layout: PageLayout, config: Config) -> Self {
        let state = SelectionState::new(&layout);
        let shown = vec![None; layout.tabs().len()];
        Self {
            layout,
            config,
            state,
            store: ArticleStore::new(),
            shown,
            configuration_failed: false,
        }
    }

    /// Page structure.
    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Current selection state.
    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Article store.
    #[must_use]
    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    /// Configuration the session runs with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Topic whose article the tab's region was last asked to show.
    #[must_use]
    pub fn shown_topic(&self, tab: TabId) -> Option<TopicId> {
        self.shown.get(tab.index()).copied().flatten()
    }

    /// Start the page.
    ///
    /// Returns the dataset location to load. When no location is configured,
    /// every content region shows the configuration-error message, the page
    /// is initialized right away so navigation stays interactive, and `None`
    /// is returned.
    pub fn start(&mut self, doc: &mut dyn Document) -> Option<String> {
        match self.config.require_articles_path().map(str::to_owned) {
            Ok(location) => {
                tracing::debug!(location = %location, "Page started");
                Some(location)
            }
            Err(e) => {
                self.configuration_failed = true;
                SessionError::Configuration(e).log();
                let html = self.config.messages.config_error.to_html();
                self.show_everywhere(doc, &html);
                self.initialize(doc);
                None
            }
        }
    }

    /// Completion continuation of the dataset load.
    ///
    /// On success, regions that were asked to show an article before the
    /// data arrived are rendered for real. On failure, every region shows
    /// the fetch-error message. Either way the page is then initialized.
    pub fn on_articles_loaded(
        &mut self,
        doc: &mut dyn Document,
        result: Result<ArticleMap, FetchError>,
    ) {
        match result {
            Ok(articles) => {
                if !self.store.complete(Ok(articles)) {
                    return;
                }
                self.render_deferred(doc);
            }
            Err(e) => {
                SessionError::Fetch(e.clone()).log();
                if !self.store.complete(Err(e)) {
                    return;
                }
                let html = self.config.messages.fetch_error.to_html();
                self.show_everywhere(doc, &html);
            }
        }
        self.initialize(doc);
    }

    /// Handle one UI event.
    ///
    /// Resolves the event to at most one action and runs it. Failures are
    /// logged, never returned.
    pub fn dispatch(&mut self, doc: &mut dyn Document, event: &UiEvent) -> DispatchOutcome {
        let outcome = dispatcher::resolve(&self.layout, &self.state, event);
        let Some(action) = outcome.action else {
            return outcome;
        };

        let result = match action {
            Action::ActivateTab(tab) => self.activate_tab(doc, tab),
            Action::FocusTab(tab) => doc
                .focus(&self.layout.tab(tab).id)
                .map_err(SessionError::from),
            Action::ToggleAccordion(accordion) => self.toggle_accordion(doc, accordion),
            Action::SelectTopic(topic) => self.select_topic(doc, topic),
        };
        if let Err(e) = result {
            e.log();
        }
        outcome
    }

    /// Activate a tab and move focus into its content region.
    ///
    /// On the first visit to a dynamic tab with nothing expanded, its first
    /// accordion is expanded and its first topic selected. Later visits
    /// find the tab exactly as it was left.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::TargetResolution`] if an element is missing.
    pub fn activate_tab(&mut self, doc: &mut dyn Document, tab: TabId) -> Result<(), SessionError> {
        let mut next = self.state.clone();
        if next.activate_tab(tab).is_unchanged() {
            return Ok(());
        }
        let region = self.layout.tab(tab).region_id.clone();
        self.commit(doc, next, Some(&region))?;
        aria::focus_region(doc, &region)?;
        self.visit(doc, tab)
    }

    /// Toggle an accordion.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::TargetResolution`] if an element is missing.
    pub fn toggle_accordion(
        &mut self,
        doc: &mut dyn Document,
        accordion: AccordionId,
    ) -> Result<(), SessionError> {
        let mut next = self.state.clone();
        next.toggle_accordion(&self.layout, accordion);
        self.commit(doc, next, None)
    }

    /// Select a topic and render its article into the owning tab's region.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] after showing the not-found
    /// message, or [`SessionError::TargetResolution`] if an element is
    /// missing.
    pub fn select_topic(&mut self, doc: &mut dyn Document, topic: TopicId) -> Result<(), SessionError> {
        let mut next = self.state.clone();
        if next.select_topic(&self.layout, topic).is_unchanged() {
            return Ok(());
        }
        let tab = self.layout.tab_of_topic(topic);
        let region = self.layout.tab(tab).region_id.clone();
        self.commit(doc, next, Some(&region))?;
        self.render_topic(doc, topic)
    }

    /// Register a topic button added to an accordion after start-up.
    ///
    /// `accordion` is the accordion's header or body id. The button element
    /// must be present in the document before the next transition.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NotAnAccordion`] if `accordion` does not name
    /// an accordion, or [`LayoutError::DuplicateId`] if `id` is taken.
    pub fn add_topic(
        &mut self,
        accordion: &str,
        id: impl Into<String>,
        article: impl Into<String>,
        toggle_group: Option<String>,
    ) -> Result<TopicId, LayoutError> {
        let owner = match self.layout.element(accordion) {
            Some(Element::AccordionHeader(a) | Element::AccordionBody(a)) => a,
            _ => return Err(LayoutError::NotAnAccordion(accordion.to_owned())),
        };
        let topic = self.layout.add_topic(owner, id, article, toggle_group)?;
        self.state.push_topic();
        tracing::debug!(topic = %self.layout.topic(topic).id, "Topic added");
        Ok(topic)
    }

    fn initialize(&mut self, doc: &mut dyn Document) {
        let tab = self.state.active_tab();
        let result = self.project(doc).and_then(|()| self.visit(doc, tab));
        if let Err(e) = result {
            e.log();
        }
    }

    /// First-visit population. The visit is recorded only once it went
    /// through, so an aborted population runs again on the next visit.
    fn visit(&mut self, doc: &mut dyn Document, tab: TabId) -> Result<(), SessionError> {
        if self.state.is_visited(tab) {
            return Ok(());
        }
        let panels = &self.config.panels;
        let entry = self.layout.tab(tab);
        let first = entry.accordions.first().copied().filter(|_| {
            panels.auto_populate_first_visit
                && !panels.is_static(&entry.panel_id)
                && self.state.expanded_in_tab(&self.layout, tab).is_none()
        });

        if let Some(first) = first {
            self.toggle_accordion(doc, first)?;
            if let Some(&topic) = self.layout.accordion(first).topics.first() {
                self.select_topic(doc, topic)?;
            }
        }
        self.state.mark_visited(tab);
        Ok(())
    }

    fn project(&self, doc: &mut dyn Document) -> Result<(), SessionError> {
        aria::apply(doc, &aria::project(&self.layout, &self.state))?;
        Ok(())
    }

    /// Apply the projection of `next` and make it the current state.
    ///
    /// Nothing is written and the state is kept if `region` or any
    /// projection target is missing.
    fn commit(
        &mut self,
        doc: &mut dyn Document,
        next: SelectionState,
        region: Option<&str>,
    ) -> Result<(), SessionError> {
        if let Some(region) = region.filter(|r| !doc.contains(r)) {
            return Err(MissingElement(region.to_owned()).into());
        }
        aria::apply(doc, &aria::project(&self.layout, &next))?;
        self.state = next;
        Ok(())
    }

    fn render_topic(&mut self, doc: &mut dyn Document, topic: TopicId) -> Result<(), SessionError> {
        let tab = self.layout.tab_of_topic(topic);
        if self.configuration_failed {
            tracing::debug!(topic = %self.layout.topic(topic).id, "Articles unavailable; keeping message");
            self.shown[tab.index()] = Some(topic);
            return Ok(());
        }

        let rendered = content::render_article(
            doc,
            &self.layout.tab(tab).region_id,
            &self.store,
            &self.layout.topic(topic).article,
            &self.config.messages,
        )?;
        self.shown[tab.index()] = Some(topic);
        match rendered {
            Rendered::NotFound(article) => Err(SessionError::NotFound(article)),
            Rendered::Article | Rendered::Loading | Rendered::Unavailable => Ok(()),
        }
    }

    fn render_deferred(&mut self, doc: &mut dyn Document) {
        let pending: Vec<TopicId> = self.shown.iter().flatten().copied().collect();
        for topic in pending {
            if let Err(e) = self.render_topic(doc, topic) {
                e.log();
            }
        }
    }

    fn show_everywhere(&self, doc: &mut dyn Document, html: &str) {
        let regions = self.layout.tabs().iter().map(|t| t.region_id.as_str());
        content::render_message_everywhere(doc, regions, html);
    }
}
