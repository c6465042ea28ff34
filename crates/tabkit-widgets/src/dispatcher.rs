//! Input dispatch.
//!
//! Translates raw UI events into at most one [`Action`]. Resolution is pure:
//! it reads the layout and never mutates state, so each event maps to
//! exactly one transition call in the session.

use crate::layout::{AccordionId, Element, PageLayout, TabId, TopicId};
use crate::selection::SelectionState;

/// Keyboard key relevant to the widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Move focus to the previous tab header.
    ArrowLeft,
    /// Move focus to the next tab header.
    ArrowRight,
    /// Move focus to the first tab header.
    Home,
    /// Move focus to the last tab header.
    End,
    /// Activate.
    Enter,
    /// Activate.
    Space,
    /// Anything else.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            _ => Self::Other,
        }
    }

    fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Raw UI event, addressed by element id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on a tab header.
    TabClick {
        /// Tab header id.
        tab: String,
    },
    /// Key pressed while a tab header has focus.
    TabKeyDown {
        /// Focused tab header id.
        tab: String,
        /// Key pressed.
        key: Key,
    },
    /// Click on an accordion header.
    AccordionClick {
        /// Accordion header id.
        accordion: String,
    },
    /// Key pressed while an accordion header has focus.
    AccordionKeyDown {
        /// Focused accordion header id.
        accordion: String,
        /// Key pressed.
        key: Key,
    },
    /// Click bubbling up to a tab panel, for delegated topic handling.
    PanelClick {
        /// Panel id the listener is attached to.
        panel: String,
        /// Id of the element that was clicked, if it has one.
        target: Option<String>,
    },
}

/// Operation an event resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Activate a tab.
    ActivateTab(TabId),
    /// Move keyboard focus to a tab header without activating it.
    FocusTab(TabId),
    /// Toggle an accordion.
    ToggleAccordion(AccordionId),
    /// Select a topic.
    SelectTopic(TopicId),
}

/// Result of dispatching one event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Action taken, if the event was handled.
    pub action: Option<Action>,
    /// Whether the host should suppress the browser's default behavior.
    pub prevent_default: bool,
}

impl DispatchOutcome {
    /// Event was not handled.
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    fn handled(action: Action, prevent_default: bool) -> Self {
        Self {
            action: Some(action),
            prevent_default,
        }
    }
}

/// Resolve an event against the layout.
#[must_use]
pub fn resolve(layout: &PageLayout, state: &SelectionState, event: &UiEvent) -> DispatchOutcome {
    match event {
        UiEvent::TabClick { tab } => match layout.element(tab) {
            Some(Element::TabHeader(tab)) => DispatchOutcome::handled(Action::ActivateTab(tab), false),
            _ => DispatchOutcome::ignored(),
        },
        UiEvent::TabKeyDown { tab, key } => match layout.element(tab) {
            Some(Element::TabHeader(tab)) => resolve_tab_key(layout, tab, *key),
            _ => DispatchOutcome::ignored(),
        },
        UiEvent::AccordionClick { accordion } => match layout.element(accordion) {
            Some(Element::AccordionHeader(accordion)) => {
                DispatchOutcome::handled(Action::ToggleAccordion(accordion), false)
            }
            _ => DispatchOutcome::ignored(),
        },
        UiEvent::AccordionKeyDown { accordion, key } => match layout.element(accordion) {
            Some(Element::AccordionHeader(accordion)) if key.activates() => {
                DispatchOutcome::handled(Action::ToggleAccordion(accordion), true)
            }
            _ => DispatchOutcome::ignored(),
        },
        UiEvent::PanelClick { panel, target } => {
            let Some(Element::Panel(tab)) = layout.element(panel) else {
                return DispatchOutcome::ignored();
            };
            let Some(Element::Topic(topic)) = target.as_deref().and_then(|t| layout.element(t))
            else {
                return DispatchOutcome::ignored();
            };
            if layout.tab_of_topic(topic) != tab || !state.is_expanded(layout.topic(topic).accordion)
            {
                return DispatchOutcome::ignored();
            }
            DispatchOutcome::handled(Action::SelectTopic(topic), false)
        }
    }
}

/// Roving focus over the tab list. Arrow keys wrap; Home/End jump; only
/// Enter and Space activate.
fn resolve_tab_key(layout: &PageLayout, focused: TabId, key: Key) -> DispatchOutcome {
    let count = layout.tabs().len();
    let current = focused.index();
    let target = match key {
        Key::ArrowLeft => (current + count - 1) % count,
        Key::ArrowRight => (current + 1) % count,
        Key::Home => 0,
        Key::End => count - 1,
        Key::Enter | Key::Space => {
            return DispatchOutcome::handled(Action::ActivateTab(focused), true);
        }
        Key::Other => return DispatchOutcome::ignored(),
    };
    let tab = layout.tab_ids().nth(target).unwrap_or(focused);
    DispatchOutcome::handled(Action::FocusTab(tab), true)
}
