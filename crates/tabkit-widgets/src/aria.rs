//! ARIA projection.
//!
//! Maps [`SelectionState`] onto element attributes. The mapping is total
//! (every widget element gets a value on every projection) and idempotent,
//! and it is one-directional: attributes are never read back.

use crate::document::{Document, MissingElement};
use crate::layout::PageLayout;
use crate::selection::SelectionState;

/// One attribute write. `value: None` removes the attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeWrite {
    /// Target element id.
    pub target: String,
    /// Attribute name.
    pub name: &'static str,
    /// Value to set, or `None` to remove.
    pub value: Option<&'static str>,
}

impl AttributeWrite {
    fn set(target: &str, name: &'static str, value: &'static str) -> Self {
        Self {
            target: target.to_owned(),
            name,
            value: Some(value),
        }
    }

    fn remove(target: &str, name: &'static str) -> Self {
        Self {
            target: target.to_owned(),
            name,
            value: None,
        }
    }

    fn hidden(target: &str, hidden: bool) -> Self {
        if hidden {
            Self::set(target, "hidden", "")
        } else {
            Self::remove(target, "hidden")
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Compute the attribute writes mirroring `state`.
#[must_use]
pub fn project(layout: &PageLayout, state: &SelectionState) -> Vec<AttributeWrite> {
    let mut writes = Vec::new();

    for tab_id in layout.tab_ids() {
        let tab = layout.tab(tab_id);
        let active = tab_id == state.active_tab();
        writes.push(AttributeWrite::set(&tab.id, "aria-selected", flag(active)));
        writes.push(AttributeWrite::set(
            &tab.id,
            "tabindex",
            if active { "0" } else { "-1" },
        ));
        writes.push(AttributeWrite::hidden(&tab.panel_id, !active));
    }

    for accordion_id in layout.accordion_ids() {
        let accordion = layout.accordion(accordion_id);
        let expanded = state.is_expanded(accordion_id);
        writes.push(AttributeWrite::set(
            &accordion.id,
            "aria-expanded",
            flag(expanded),
        ));
        writes.push(AttributeWrite::hidden(&accordion.body_id, !expanded));
    }

    for topic_id in layout.topic_ids() {
        let topic = layout.topic(topic_id);
        writes.push(AttributeWrite::set(
            &topic.id,
            "aria-selected",
            flag(state.is_selected(topic_id)),
        ));
    }

    writes
}

/// Apply writes to a document.
///
/// Every target is resolved before anything is written, so a missing
/// element leaves the document untouched.
///
/// # Errors
///
/// Returns [`MissingElement`] for the first target that does not resolve.
pub fn apply(doc: &mut dyn Document, writes: &[AttributeWrite]) -> Result<(), MissingElement> {
    if let Some(missing) = writes.iter().find(|w| !doc.contains(&w.target)) {
        return Err(MissingElement(missing.target.clone()));
    }
    for write in writes {
        match write.value {
            Some(value) => doc.set_attribute(&write.target, write.name, value)?,
            None => doc.remove_attribute(&write.target, write.name)?,
        }
    }
    Ok(())
}

/// Make a content region programmatically focusable and focus it.
///
/// # Errors
///
/// Returns [`MissingElement`] if the region does not resolve.
pub fn focus_region(doc: &mut dyn Document, region_id: &str) -> Result<(), MissingElement> {
    doc.set_attribute(region_id, "tabindex", "-1")?;
    doc.focus(region_id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tabkit_config::RegionConfig;

    use super::*;
    use crate::document::MemoryDocument;
    use crate::layout::{AccordionId, TabId, TopicId};

    fn layout() -> (PageLayout, TabId, TabId, AccordionId, TopicId) {
        let mut builder = PageLayout::builder();
        let welcome = builder.tab("welcome-tab", "welcome-panel");
        let html = builder.tab("html-tab", "html-panel");
        let accordion = builder.accordion(html, "basics-button", "basics-body");
        let topic = builder.topic(accordion, "semantics-button", "semantic-html");
        let layout = builder.build(&RegionConfig::default()).unwrap();
        (layout, welcome, html, accordion, topic)
    }

    #[test]
    fn test_project_initial_state() {
        let (layout, _, _, _, _) = layout();
        let state = SelectionState::new(&layout);
        let mut doc = MemoryDocument::from_layout(&layout);

        apply(&mut doc, &project(&layout, &state)).unwrap();

        assert_eq!(doc.attribute("welcome-tab", "aria-selected"), Some("true"));
        assert_eq!(doc.attribute("welcome-tab", "tabindex"), Some("0"));
        assert_eq!(doc.attribute("html-tab", "aria-selected"), Some("false"));
        assert_eq!(doc.attribute("html-tab", "tabindex"), Some("-1"));
        assert!(!doc.has_attribute("welcome-panel", "hidden"));
        assert!(doc.has_attribute("html-panel", "hidden"));
        assert_eq!(doc.attribute("basics-button", "aria-expanded"), Some("false"));
        assert!(doc.has_attribute("basics-body", "hidden"));
        assert_eq!(doc.attribute("semantics-button", "aria-selected"), Some("false"));
    }

    #[test]
    fn test_project_after_selection() {
        let (layout, _, html, accordion, topic) = layout();
        let mut state = SelectionState::new(&layout);
        state.activate_tab(html);
        state.toggle_accordion(&layout, accordion);
        state.select_topic(&layout, topic);
        let mut doc = MemoryDocument::from_layout(&layout);

        apply(&mut doc, &project(&layout, &state)).unwrap();

        assert_eq!(doc.attribute("html-tab", "aria-selected"), Some("true"));
        assert!(doc.has_attribute("welcome-panel", "hidden"));
        assert!(!doc.has_attribute("html-panel", "hidden"));
        assert_eq!(doc.attribute("basics-button", "aria-expanded"), Some("true"));
        assert!(!doc.has_attribute("basics-body", "hidden"));
        assert_eq!(doc.attribute("semantics-button", "aria-selected"), Some("true"));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let (layout, _, html, _, _) = layout();
        let mut state = SelectionState::new(&layout);
        state.activate_tab(html);
        let writes = project(&layout, &state);
        let mut doc = MemoryDocument::from_layout(&layout);

        apply(&mut doc, &writes).unwrap();
        let once = doc.clone();
        apply(&mut doc, &writes).unwrap();

        for id in layout.element_ids() {
            assert_eq!(doc.element(id), once.element(id));
        }
    }

    #[test]
    fn test_apply_missing_target_writes_nothing() {
        let (layout, _, _, _, _) = layout();
        let state = SelectionState::new(&layout);
        let mut doc = MemoryDocument::from_layout(&layout);
        doc.remove("semantics-button");

        let err = apply(&mut doc, &project(&layout, &state)).unwrap_err();

        assert_eq!(err, MissingElement("semantics-button".to_owned()));
        assert!(!doc.has_attribute("welcome-tab", "aria-selected"));
    }

    #[test]
    fn test_focus_region() {
        let mut doc = MemoryDocument::new().with_element("html-article-content");

        focus_region(&mut doc, "html-article-content").unwrap();

        assert_eq!(doc.attribute("html-article-content", "tabindex"), Some("-1"));
        assert_eq!(doc.focused(), Some("html-article-content"));
    }
}
