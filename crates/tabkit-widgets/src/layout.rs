//! Static page structure.
//!
//! [`PageLayout`] describes the widgets present on a page: tabs with their
//! panels and content regions, accordions inside tab panels, and topic
//! buttons inside accordions. It is the read-only skeleton the selection
//! state is tracked against.
//!
//! # Architecture
//!
//! Tabs, accordions and topics are stored in flat `Vec`s with parent/children
//! relationships tracked by typed indices. This provides:
//! - O(1) element id lookups via the `elements` `HashMap`
//! - O(1) scope and toggle group membership via their index `HashMap`s
//!
//! Toggle groups are maintained incrementally: topics added after start-up
//! through [`PageLayout::add_topic`] join their group immediately.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tabkit_config::RegionConfig;

/// Index of a tab within a [`PageLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(usize);

/// Index of an accordion within a [`PageLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccordionId(usize);

/// Index of a topic within a [`PageLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicId(usize);

impl TabId {
    /// Position of the tab in page order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl AccordionId {
    /// Position of the accordion in page order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl TopicId {
    /// Position of the topic in registration order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Top-level tab: header button, panel, and content region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    /// Tab header element id (e.g., "html-tab").
    pub id: String,
    /// Controlled panel element id (e.g., "html-panel").
    pub panel_id: String,
    /// Content region element id, derived by the region naming convention.
    pub region_id: String,
    /// Accordions inside the panel, in page order.
    pub accordions: Vec<AccordionId>,
}

/// Collapsible section inside a tab panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accordion {
    /// Accordion header element id.
    pub id: String,
    /// Controlled body element id.
    pub body_id: String,
    /// Owning tab.
    pub tab: TabId,
    /// Scope within which at most one accordion is expanded.
    pub scope: String,
    /// Topic buttons inside the body, in page order.
    pub topics: Vec<TopicId>,
}

/// Topic button selecting an article.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
    /// Topic button element id.
    pub id: String,
    /// Owning accordion.
    pub accordion: AccordionId,
    /// Article key rendered when the topic is selected.
    pub article: String,
    /// Toggle group within which at most one topic is selected.
    pub toggle_group: String,
}

/// What an element id refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    /// A tab header button.
    TabHeader(TabId),
    /// A tab panel.
    Panel(TabId),
    /// A tab's content region.
    Region(TabId),
    /// An accordion header button.
    AccordionHeader(AccordionId),
    /// An accordion body.
    AccordionBody(AccordionId),
    /// A topic button.
    Topic(TopicId),
}

/// Error building or extending a [`PageLayout`].
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The page has no tabs.
    #[error("Page layout has no tabs")]
    NoTabs,
    /// Two elements share an id.
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),
    /// A tab index does not belong to this layout.
    #[error("Unknown tab index: {0}")]
    UnknownTab(usize),
    /// An accordion index does not belong to this layout.
    #[error("Unknown accordion index: {0}")]
    UnknownAccordion(usize),
    /// An element id does not name an accordion.
    #[error("Not an accordion: {0}")]
    NotAnAccordion(String),
    /// JSON page description could not be parsed.
    #[error("Invalid page description: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML page description could not be parsed.
    #[error("Invalid page description: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Static structure of a page's tabs, accordions and topics.
#[derive(Debug)]
pub struct PageLayout {
    tabs: Vec<Tab>,
    accordions: Vec<Accordion>,
    topics: Vec<Topic>,
    initial_tab: TabId,
    elements: HashMap<String, Element>,
    scopes: HashMap<String, Vec<AccordionId>>,
    toggle_groups: HashMap<String, Vec<TopicId>>,
}

impl PageLayout {
    /// Start building a layout.
    #[must_use]
    pub fn builder() -> PageLayoutBuilder {
        PageLayoutBuilder::default()
    }

    /// Parse a JSON page description.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Json`] for malformed input, or any validation
    /// error from [`PageDescription::into_layout`].
    pub fn from_json(text: &str, regions: &RegionConfig) -> Result<Self, LayoutError> {
        let description: PageDescription = serde_json::from_str(text)?;
        description.into_layout(regions)
    }

    /// Parse a TOML page description.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Toml`] for malformed input, or any validation
    /// error from [`PageDescription::into_layout`].
    pub fn from_toml(text: &str, regions: &RegionConfig) -> Result<Self, LayoutError> {
        let description: PageDescription = toml::from_str(text)?;
        description.into_layout(regions)
    }

    /// All tabs in page order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Tab ids in page order.
    pub fn tab_ids(&self) -> impl DoubleEndedIterator<Item = TabId> + ExactSizeIterator + '_ {
        (0..self.tabs.len()).map(TabId)
    }

    /// Accordion ids in page order.
    pub fn accordion_ids(&self) -> impl Iterator<Item = AccordionId> + '_ {
        (0..self.accordions.len()).map(AccordionId)
    }

    /// Topic ids in registration order.
    pub fn topic_ids(&self) -> impl Iterator<Item = TopicId> + '_ {
        (0..self.topics.len()).map(TopicId)
    }

    /// Get a tab.
    #[must_use]
    pub fn tab(&self, tab: TabId) -> &Tab {
        &self.tabs[tab.0]
    }

    /// Get an accordion.
    #[must_use]
    pub fn accordion(&self, accordion: AccordionId) -> &Accordion {
        &self.accordions[accordion.0]
    }

    /// Get a topic.
    #[must_use]
    pub fn topic(&self, topic: TopicId) -> &Topic {
        &self.topics[topic.0]
    }

    /// Number of accordions.
    #[must_use]
    pub fn accordion_count(&self) -> usize {
        self.accordions.len()
    }

    /// Number of topics.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Tab marked active in the static page, or the first tab.
    #[must_use]
    pub fn initial_tab(&self) -> TabId {
        self.initial_tab
    }

    /// Tab owning a topic.
    #[must_use]
    pub fn tab_of_topic(&self, topic: TopicId) -> TabId {
        self.accordion(self.topic(topic).accordion).tab
    }

    /// Resolve an element id.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<Element> {
        self.elements.get(id).copied()
    }

    /// Every element id the layout refers to.
    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Accordions sharing a scope.
    #[must_use]
    pub fn scope_members(&self, scope: &str) -> &[AccordionId] {
        self.scopes.get(scope).map_or(&[], Vec::as_slice)
    }

    /// Topics sharing a toggle group.
    #[must_use]
    pub fn group_members(&self, group: &str) -> &[TopicId] {
        self.toggle_groups.get(group).map_or(&[], Vec::as_slice)
    }

    /// Register a topic button added after start-up.
    ///
    /// The topic joins `accordion` and its toggle group (the accordion body
    /// id when `toggle_group` is `None`).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownAccordion`] for a foreign accordion id,
    /// or [`LayoutError::DuplicateId`] if `id` is already in use.
    pub fn add_topic(
        &mut self,
        accordion: AccordionId,
        id: impl Into<String>,
        article: impl Into<String>,
        toggle_group: Option<String>,
    ) -> Result<TopicId, LayoutError> {
        let Some(owner) = self.accordions.get(accordion.0) else {
            return Err(LayoutError::UnknownAccordion(accordion.0));
        };
        let id = id.into();
        if self.elements.contains_key(&id) {
            return Err(LayoutError::DuplicateId(id));
        }

        let topic = TopicId(self.topics.len());
        let toggle_group = toggle_group.unwrap_or_else(|| owner.body_id.clone());
        self.elements.insert(id.clone(), Element::Topic(topic));
        self.toggle_groups
            .entry(toggle_group.clone())
            .or_default()
            .push(topic);
        self.accordions[accordion.0].topics.push(topic);
        self.topics.push(Topic {
            id,
            accordion,
            article: article.into(),
            toggle_group,
        });
        Ok(topic)
    }
}

/// Builder for constructing [`PageLayout`] instances.
///
/// # Example
///
/// ```
/// use tabkit_config::RegionConfig;
/// use tabkit_widgets::PageLayout;
///
/// let mut builder = PageLayout::builder();
/// let html = builder.tab("html-tab", "html-panel");
/// let basics = builder.accordion(html, "basics-button", "basics-body");
/// builder.topic(basics, "semantics-button", "semantic-html");
///
/// let layout = builder.build(&RegionConfig::default()).unwrap();
/// assert_eq!(layout.tab(html).region_id, "html-article-content");
/// ```
#[derive(Debug, Default)]
pub struct PageLayoutBuilder {
    tabs: Vec<Tab>,
    accordions: Vec<Accordion>,
    topics: Vec<Topic>,
    active: Option<TabId>,
    error: Option<LayoutError>,
}

impl PageLayoutBuilder {
    /// Add a tab.
    pub fn tab(&mut self, id: impl Into<String>, panel_id: impl Into<String>) -> TabId {
        let tab = TabId(self.tabs.len());
        self.tabs.push(Tab {
            id: id.into(),
            panel_id: panel_id.into(),
            region_id: String::new(),
            accordions: Vec::new(),
        });
        tab
    }

    /// Add an accordion scoped to its tab's panel.
    pub fn accordion(
        &mut self,
        tab: TabId,
        id: impl Into<String>,
        body_id: impl Into<String>,
    ) -> AccordionId {
        let scope = self
            .tabs
            .get(tab.0)
            .map(|t| t.panel_id.clone())
            .unwrap_or_default();
        self.accordion_in_scope(tab, id, body_id, scope)
    }

    /// Add an accordion with an explicit scope.
    pub fn accordion_in_scope(
        &mut self,
        tab: TabId,
        id: impl Into<String>,
        body_id: impl Into<String>,
        scope: impl Into<String>,
    ) -> AccordionId {
        let accordion = AccordionId(self.accordions.len());
        match self.tabs.get_mut(tab.0) {
            Some(owner) => owner.accordions.push(accordion),
            None => self.fail(LayoutError::UnknownTab(tab.0)),
        }
        self.accordions.push(Accordion {
            id: id.into(),
            body_id: body_id.into(),
            tab,
            scope: scope.into(),
            topics: Vec::new(),
        });
        accordion
    }

    /// Add a topic in its accordion's default toggle group.
    pub fn topic(
        &mut self,
        accordion: AccordionId,
        id: impl Into<String>,
        article: impl Into<String>,
    ) -> TopicId {
        let group = self
            .accordions
            .get(accordion.0)
            .map(|a| a.body_id.clone())
            .unwrap_or_default();
        self.topic_in_group(accordion, id, article, group)
    }

    /// Add a topic in a named toggle group.
    pub fn topic_in_group(
        &mut self,
        accordion: AccordionId,
        id: impl Into<String>,
        article: impl Into<String>,
        toggle_group: impl Into<String>,
    ) -> TopicId {
        let topic = TopicId(self.topics.len());
        match self.accordions.get_mut(accordion.0) {
            Some(owner) => owner.topics.push(topic),
            None => self.fail(LayoutError::UnknownAccordion(accordion.0)),
        }
        self.topics.push(Topic {
            id: id.into(),
            accordion,
            article: article.into(),
            toggle_group: toggle_group.into(),
        });
        topic
    }

    /// Mark the tab active in the static page.
    pub fn active_tab(&mut self, tab: TabId) -> &mut Self {
        if tab.0 < self.tabs.len() {
            self.active = Some(tab);
        } else {
            self.fail(LayoutError::UnknownTab(tab.0));
        }
        self
    }

    fn fail(&mut self, error: LayoutError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Build the [`PageLayout`] instance.
    ///
    /// Content region ids are derived from `regions`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NoTabs`] for an empty page,
    /// [`LayoutError::DuplicateId`] if element ids collide, or the first
    /// unknown-index error recorded while building.
    pub fn build(mut self, regions: &RegionConfig) -> Result<PageLayout, LayoutError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.tabs.is_empty() {
            return Err(LayoutError::NoTabs);
        }

        for tab in &mut self.tabs {
            tab.region_id = regions.region_id(&tab.id, &tab.panel_id);
        }

        let mut elements = HashMap::new();
        let mut register = |id: &str, element: Element| {
            if elements.insert(id.to_owned(), element).is_some() {
                return Err(LayoutError::DuplicateId(id.to_owned()));
            }
            Ok(())
        };
        for (i, tab) in self.tabs.iter().enumerate() {
            register(&tab.id, Element::TabHeader(TabId(i)))?;
            register(&tab.panel_id, Element::Panel(TabId(i)))?;
            register(&tab.region_id, Element::Region(TabId(i)))?;
        }
        for (i, accordion) in self.accordions.iter().enumerate() {
            register(&accordion.id, Element::AccordionHeader(AccordionId(i)))?;
            register(&accordion.body_id, Element::AccordionBody(AccordionId(i)))?;
        }
        for (i, topic) in self.topics.iter().enumerate() {
            register(&topic.id, Element::Topic(TopicId(i)))?;
        }

        let mut scopes: HashMap<String, Vec<AccordionId>> = HashMap::new();
        for (i, accordion) in self.accordions.iter().enumerate() {
            scopes
                .entry(accordion.scope.clone())
                .or_default()
                .push(AccordionId(i));
        }

        let mut toggle_groups: HashMap<String, Vec<TopicId>> = HashMap::new();
        for (i, topic) in self.topics.iter().enumerate() {
            toggle_groups
                .entry(topic.toggle_group.clone())
                .or_default()
                .push(TopicId(i));
        }

        Ok(PageLayout {
            tabs: self.tabs,
            accordions: self.accordions,
            topics: self.topics,
            initial_tab: self.active.unwrap_or(TabId(0)),
            elements,
            scopes,
            toggle_groups,
        })
    }
}

/// Serializable page description, as emitted by the site build.
///
/// ```toml
/// [[tabs]]
/// id = "html-tab"
/// panel = "html-panel"
/// active = true
///
/// [[tabs.accordions]]
/// id = "basics-button"
/// body = "basics-body"
///
/// [[tabs.accordions.topics]]
/// id = "semantics-button"
/// article = "semantic-html"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescription {
    /// Tabs in page order.
    pub tabs: Vec<TabDescription>,
}

/// Serializable tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescription {
    /// Tab header id.
    pub id: String,
    /// Panel id.
    pub panel: String,
    /// Marked active in the static page.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
    /// Accordions in the panel.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accordions: Vec<AccordionDescription>,
}

/// Serializable accordion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionDescription {
    /// Header id.
    pub id: String,
    /// Body id.
    pub body: String,
    /// Scope; defaults to the owning tab's panel id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Topic buttons in the body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<TopicDescription>,
}

/// Serializable topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDescription {
    /// Button id.
    pub id: String,
    /// Article key.
    pub article: String,
    /// Toggle group; defaults to the accordion body id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle_group: Option<String>,
}

impl PageDescription {
    /// Build the described layout.
    ///
    /// When several tabs are marked active, the first one wins.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`PageLayoutBuilder::build`].
    pub fn into_layout(self, regions: &RegionConfig) -> Result<PageLayout, LayoutError> {
        let mut builder = PageLayout::builder();
        let mut active = None;

        for tab_desc in self.tabs {
            if tab_desc.active && active.is_some() {
                tracing::warn!(tab = %tab_desc.id, "Several tabs marked active; keeping the first");
            }
            let tab = builder.tab(tab_desc.id, tab_desc.panel);
            if tab_desc.active && active.is_none() {
                active = Some(tab);
            }
            for accordion_desc in tab_desc.accordions {
                let accordion = match accordion_desc.scope {
                    Some(scope) => builder.accordion_in_scope(
                        tab,
                        accordion_desc.id,
                        accordion_desc.body,
                        scope,
                    ),
                    None => builder.accordion(tab, accordion_desc.id, accordion_desc.body),
                };
                for topic_desc in accordion_desc.topics {
                    match topic_desc.toggle_group {
                        Some(group) => {
                            builder.topic_in_group(accordion, topic_desc.id, topic_desc.article, group)
                        }
                        None => builder.topic(accordion, topic_desc.id, topic_desc.article),
                    };
                }
            }
        }

        if let Some(tab) = active {
            builder.active_tab(tab);
        }
        builder.build(regions)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn two_tab_layout() -> PageLayout {
        let mut builder = PageLayout::builder();
        let welcome = builder.tab("welcome-tab", "welcome-panel");
        let html = builder.tab("html-tab", "html-panel");
        let basics = builder.accordion(html, "basics-button", "basics-body");
        builder.topic(basics, "semantics-button", "semantic-html");
        builder.topic_in_group(basics, "landmarks-button", "landmarks", "shared");
        builder.active_tab(welcome);
        builder.build(&RegionConfig::default()).unwrap()
    }

    #[test]
    fn test_build_derives_region_ids() {
        let layout = two_tab_layout();

        let regions: Vec<&str> = layout.tabs().iter().map(|t| t.region_id.as_str()).collect();
        assert_eq!(regions, vec!["welcome-article-content", "html-article-content"]);
    }

    #[test]
    fn test_element_lookup() {
        let layout = two_tab_layout();

        assert_eq!(layout.element("html-tab"), Some(Element::TabHeader(TabId(1))));
        assert_eq!(layout.element("html-panel"), Some(Element::Panel(TabId(1))));
        assert_eq!(
            layout.element("html-article-content"),
            Some(Element::Region(TabId(1)))
        );
        assert_eq!(
            layout.element("basics-body"),
            Some(Element::AccordionBody(AccordionId(0)))
        );
        assert_eq!(layout.element("semantics-button"), Some(Element::Topic(TopicId(0))));
        assert_eq!(layout.element("nope"), None);
    }

    #[test]
    fn test_default_scope_and_group() {
        let layout = two_tab_layout();

        assert_eq!(layout.accordion(AccordionId(0)).scope, "html-panel");
        assert_eq!(layout.scope_members("html-panel"), &[AccordionId(0)]);
        assert_eq!(layout.group_members("basics-body"), &[TopicId(0)]);
        assert_eq!(layout.group_members("shared"), &[TopicId(1)]);
        assert!(layout.group_members("unknown").is_empty());
    }

    #[test]
    fn test_initial_tab() {
        let layout = two_tab_layout();
        assert_eq!(layout.initial_tab(), TabId(0));

        let mut builder = PageLayout::builder();
        builder.tab("a-tab", "a-panel");
        let second = builder.tab("b-tab", "b-panel");
        builder.active_tab(second);
        let layout = builder.build(&RegionConfig::default()).unwrap();
        assert_eq!(layout.initial_tab(), second);
    }

    #[test]
    fn test_initial_tab_defaults_to_first() {
        let mut builder = PageLayout::builder();
        let first = builder.tab("a-tab", "a-panel");
        builder.tab("b-tab", "b-panel");

        let layout = builder.build(&RegionConfig::default()).unwrap();

        assert_eq!(layout.initial_tab(), first);
    }

    #[test]
    fn test_build_rejects_empty_page() {
        let err = PageLayout::builder()
            .build(&RegionConfig::default())
            .unwrap_err();

        assert!(matches!(err, LayoutError::NoTabs));
    }

    #[test]
    fn test_build_rejects_duplicate_ids() {
        let mut builder = PageLayout::builder();
        let tab = builder.tab("a-tab", "a-panel");
        builder.accordion(tab, "a-tab", "body");

        let err = builder.build(&RegionConfig::default()).unwrap_err();

        assert!(matches!(err, LayoutError::DuplicateId(id) if id == "a-tab"));
    }

    #[test]
    fn test_build_rejects_colliding_regions() {
        let mut builder = PageLayout::builder();
        builder.tab("a-tab", "a-panel");
        builder.tab("a", "other-panel");

        let err = builder.build(&RegionConfig::default()).unwrap_err();

        assert!(matches!(err, LayoutError::DuplicateId(id) if id == "a-article-content"));
    }

    #[test]
    fn test_build_rejects_foreign_tab() {
        let mut builder = PageLayout::builder();
        builder.tab("a-tab", "a-panel");
        builder.accordion(TabId(7), "acc", "body");

        let err = builder.build(&RegionConfig::default()).unwrap_err();

        assert!(matches!(err, LayoutError::UnknownTab(7)));
    }

    #[test]
    fn test_add_topic_joins_accordion_and_group() {
        let mut layout = two_tab_layout();

        let topic = layout
            .add_topic(AccordionId(0), "late-button", "late-article", None)
            .unwrap();

        assert_eq!(layout.element("late-button"), Some(Element::Topic(topic)));
        assert_eq!(layout.accordion(AccordionId(0)).topics.last(), Some(&topic));
        assert_eq!(layout.group_members("basics-body"), &[TopicId(0), topic]);
        assert_eq!(layout.tab_of_topic(topic), TabId(1));
    }

    #[test]
    fn test_add_topic_rejects_duplicate() {
        let mut layout = two_tab_layout();

        let err = layout
            .add_topic(AccordionId(0), "semantics-button", "x", None)
            .unwrap_err();

        assert!(matches!(err, LayoutError::DuplicateId(_)));
        assert_eq!(layout.topic_count(), 2);
    }

    #[test]
    fn test_add_topic_rejects_unknown_accordion() {
        let mut layout = two_tab_layout();

        let err = layout
            .add_topic(AccordionId(9), "x-button", "x", None)
            .unwrap_err();

        assert!(matches!(err, LayoutError::UnknownAccordion(9)));
    }

    #[test]
    fn test_from_toml_description() {
        let text = r#"
[[tabs]]
id = "welcome-tab"
panel = "welcome-panel"

[[tabs]]
id = "css-tab"
panel = "css-panel"
active = true

[[tabs.accordions]]
id = "layout-button"
body = "layout-body"

[[tabs.accordions.topics]]
id = "flexbox-button"
article = "flexbox"
toggle_group = "css-topics"
"#;

        let layout = PageLayout::from_toml(text, &RegionConfig::default()).unwrap();

        assert_eq!(layout.initial_tab(), TabId(1));
        let topic = layout.topic(TopicId(0));
        assert_eq!(topic.article, "flexbox");
        assert_eq!(topic.toggle_group, "css-topics");
        assert_eq!(layout.tab_of_topic(TopicId(0)), TabId(1));
    }

    #[test]
    fn test_from_json_description() {
        let text = r#"{
            "tabs": [
                {"id": "windows-tab", "panel": "windows-panel", "accordions": [
                    {"id": "vision-button", "body": "vision-body", "scope": "os",
                     "topics": [{"id": "narrator-button", "article": "narrator"}]}
                ]},
                {"id": "mac-tab", "panel": "mac-panel", "active": true},
                {"id": "linux-tab", "panel": "linux-panel", "active": true}
            ]
        }"#;

        let layout = PageLayout::from_json(text, &RegionConfig::default()).unwrap();

        assert_eq!(layout.initial_tab(), TabId(1));
        assert_eq!(layout.scope_members("os"), &[AccordionId(0)]);
        assert_eq!(layout.group_members("vision-body"), &[TopicId(0)]);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = PageLayout::from_json("{\"tabs\": 3}", &RegionConfig::default()).unwrap_err();

        assert!(matches!(err, LayoutError::Json(_)));
    }
}
