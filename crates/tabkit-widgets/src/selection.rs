//! Selection state machine.
//!
//! [`SelectionState`] is the single source of truth for which tab is active,
//! which accordions are expanded and which topics are selected. Each
//! operation mutates state and returns a [`Transition`] describing what
//! changed; it never touches the document.
//!
//! Invariants held after every operation:
//! - exactly one tab is active
//! - per scope, at most one accordion is expanded
//! - per toggle group, at most one topic is selected
//! - a collapsed accordion owns no selected topic

use crate::layout::{AccordionId, PageLayout, TabId, TopicId};

/// State change produced by one operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Unchanged,
    /// The active tab changed. The previous tab keeps its accordions and topics.
    TabActivated {
        /// Tab that was active.
        previous: TabId,
        /// Tab now active.
        current: TabId,
    },
    /// An accordion expanded, collapsing its scope siblings.
    AccordionExpanded {
        /// Accordion now expanded.
        accordion: AccordionId,
        /// Siblings that were collapsed.
        collapsed: Vec<AccordionId>,
        /// Topics deselected by the collapse.
        deselected: Vec<TopicId>,
    },
    /// An expanded accordion collapsed.
    AccordionCollapsed {
        /// Accordion now collapsed.
        accordion: AccordionId,
        /// Topics deselected by the collapse.
        deselected: Vec<TopicId>,
    },
    /// A topic was selected.
    TopicSelected {
        /// Topic now selected.
        topic: TopicId,
        /// Group members that were deselected.
        deselected: Vec<TopicId>,
    },
}

impl Transition {
    /// Whether the operation left state untouched.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Logical selection state of a page.
#[derive(Clone, Debug)]
pub struct SelectionState {
    active_tab: TabId,
    visited: Vec<bool>,
    expanded: Vec<bool>,
    selected: Vec<bool>,
}

impl SelectionState {
    /// Create the initial state: the layout's initial tab active, every
    /// accordion collapsed, no topic selected, no tab visited.
    #[must_use]
    pub fn new(layout: &PageLayout) -> Self {
        Self {
            active_tab: layout.initial_tab(),
            visited: vec![false; layout.tabs().len()],
            expanded: vec![false; layout.accordion_count()],
            selected: vec![false; layout.topic_count()],
        }
    }

    /// Currently active tab.
    #[must_use]
    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    /// Whether an accordion is expanded.
    #[must_use]
    pub fn is_expanded(&self, accordion: AccordionId) -> bool {
        self.expanded
            .get(accordion.index())
            .copied()
            .unwrap_or(false)
    }

    /// Whether a topic is selected.
    #[must_use]
    pub fn is_selected(&self, topic: TopicId) -> bool {
        self.selected.get(topic.index()).copied().unwrap_or(false)
    }

    /// Whether a tab has been visited.
    #[must_use]
    pub fn is_visited(&self, tab: TabId) -> bool {
        self.visited.get(tab.index()).copied().unwrap_or(false)
    }

    /// First expanded accordion in a tab's panel.
    #[must_use]
    pub fn expanded_in_tab(&self, layout: &PageLayout, tab: TabId) -> Option<AccordionId> {
        layout
            .tab(tab)
            .accordions
            .iter()
            .copied()
            .find(|&a| self.is_expanded(a))
    }

    /// First selected topic in a tab's panel.
    #[must_use]
    pub fn selected_in_tab(&self, layout: &PageLayout, tab: TabId) -> Option<TopicId> {
        layout
            .tab(tab)
            .accordions
            .iter()
            .flat_map(|&a| layout.accordion(a).topics.iter().copied())
            .find(|&t| self.is_selected(t))
    }

    /// Make `tab` the active tab.
    ///
    /// Activating the already-active tab is a no-op. The previously active
    /// tab keeps its accordion and topic state.
    pub fn activate_tab(&mut self, tab: TabId) -> Transition {
        if tab == self.active_tab {
            return Transition::Unchanged;
        }
        let previous = self.active_tab;
        self.active_tab = tab;
        tracing::debug!(
            previous = previous.index(),
            current = tab.index(),
            "Tab activated"
        );
        Transition::TabActivated {
            previous,
            current: tab,
        }
    }

    /// Record a visit to `tab`, returning `true` the first time.
    pub fn mark_visited(&mut self, tab: TabId) -> bool {
        match self.visited.get_mut(tab.index()) {
            Some(visited) if !*visited => {
                *visited = true;
                true
            }
            _ => false,
        }
    }

    /// Toggle an accordion.
    ///
    /// Collapsing deselects every topic the accordion owns. Expanding first
    /// collapses every other expanded accordion in the same scope, with the
    /// same cascade.
    pub fn toggle_accordion(&mut self, layout: &PageLayout, accordion: AccordionId) -> Transition {
        if self.is_expanded(accordion) {
            let mut deselected = Vec::new();
            self.collapse(layout, accordion, &mut deselected);
            tracing::debug!(accordion = %layout.accordion(accordion).id, "Accordion collapsed");
            return Transition::AccordionCollapsed {
                accordion,
                deselected,
            };
        }

        let mut collapsed = Vec::new();
        let mut deselected = Vec::new();
        for &sibling in layout.scope_members(&layout.accordion(accordion).scope) {
            if sibling != accordion && self.is_expanded(sibling) {
                self.collapse(layout, sibling, &mut deselected);
                collapsed.push(sibling);
            }
        }
        self.expanded[accordion.index()] = true;
        tracing::debug!(accordion = %layout.accordion(accordion).id, "Accordion expanded");

        Transition::AccordionExpanded {
            accordion,
            collapsed,
            deselected,
        }
    }

    fn collapse(&mut self, layout: &PageLayout, accordion: AccordionId, deselected: &mut Vec<TopicId>) {
        self.expanded[accordion.index()] = false;
        for &topic in &layout.accordion(accordion).topics {
            if self.is_selected(topic) {
                self.selected[topic.index()] = false;
                deselected.push(topic);
            }
        }
    }

    /// Select a topic, deselecting every other topic in its toggle group
    /// page-wide.
    ///
    /// Topics inside a collapsed accordion cannot be selected; the call is a
    /// no-op. Re-selecting the selected topic yields a transition so its
    /// article is rendered again.
    pub fn select_topic(&mut self, layout: &PageLayout, topic: TopicId) -> Transition {
        let entry = layout.topic(topic);
        if !self.is_expanded(entry.accordion) {
            tracing::debug!(topic = %entry.id, "Ignoring selection inside collapsed accordion");
            return Transition::Unchanged;
        }

        let mut deselected = Vec::new();
        for &member in layout.group_members(&entry.toggle_group) {
            if member != topic && self.is_selected(member) {
                self.selected[member.index()] = false;
                deselected.push(member);
            }
        }
        self.selected[topic.index()] = true;
        tracing::debug!(topic = %entry.id, article = %entry.article, "Topic selected");

        Transition::TopicSelected { topic, deselected }
    }

    /// Track a topic registered after start-up.
    pub(crate) fn push_topic(&mut self) {
        self.selected.push(false);
    }
}
