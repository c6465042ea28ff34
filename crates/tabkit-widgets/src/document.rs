//! Document port.
//!
//! The widgets never hold element handles. Every write goes through the
//! [`Document`] trait by element id, so the same session drives a browser
//! binding or the in-memory [`MemoryDocument`] used in tests.

use std::collections::{BTreeMap, HashMap};

use crate::layout::PageLayout;

/// Element id that does not resolve in the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Element not found: {0}")]
pub struct MissingElement(pub String);

/// Writable view of the page's elements, addressed by id.
pub trait Document {
    /// Whether an element with this id exists.
    fn contains(&self, id: &str) -> bool;

    /// Set an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`MissingElement`] if `id` does not resolve.
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), MissingElement>;

    /// Remove an attribute. Removing an absent attribute is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`MissingElement`] if `id` does not resolve.
    fn remove_attribute(&mut self, id: &str, name: &str) -> Result<(), MissingElement>;

    /// Replace an element's inner markup.
    ///
    /// # Errors
    ///
    /// Returns [`MissingElement`] if `id` does not resolve.
    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<(), MissingElement>;

    /// Set an element's vertical scroll offset.
    ///
    /// # Errors
    ///
    /// Returns [`MissingElement`] if `id` does not resolve.
    fn set_scroll_top(&mut self, id: &str, offset: u32) -> Result<(), MissingElement>;

    /// Move keyboard focus to an element.
    ///
    /// # Errors
    ///
    /// Returns [`MissingElement`] if `id` does not resolve.
    fn focus(&mut self, id: &str) -> Result<(), MissingElement>;
}

/// State of one element in a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    /// Attributes by name.
    pub attributes: BTreeMap<String, String>,
    /// Inner markup.
    pub inner_html: String,
    /// Vertical scroll offset.
    pub scroll_top: u32,
}

/// In-memory [`Document`].
///
/// # Example
///
/// ```
/// use tabkit_widgets::{Document, MemoryDocument};
///
/// let mut doc = MemoryDocument::new().with_element("html-tab");
/// doc.set_attribute("html-tab", "aria-selected", "true").unwrap();
///
/// assert_eq!(doc.attribute("html-tab", "aria-selected"), Some("true"));
/// assert!(doc.set_attribute("missing", "hidden", "").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
    focused: Option<String>,
}

impl MemoryDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding every element a layout refers to.
    #[must_use]
    pub fn from_layout(layout: &PageLayout) -> Self {
        let elements = layout
            .element_ids()
            .map(|id| (id.to_owned(), MemoryElement::default()))
            .collect();
        Self {
            elements,
            focused: None,
        }
    }

    /// Add an empty element.
    #[must_use]
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.insert(id);
        self
    }

    /// Add an empty element, replacing any existing one.
    pub fn insert(&mut self, id: impl Into<String>) {
        self.elements.insert(id.into(), MemoryElement::default());
    }

    /// Remove an element.
    pub fn remove(&mut self, id: &str) -> Option<MemoryElement> {
        self.elements.remove(id)
    }

    /// Get an element.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    /// Attribute value, if both element and attribute exist.
    #[must_use]
    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    /// Whether an element carries an attribute.
    #[must_use]
    pub fn has_attribute(&self, id: &str, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Inner markup of an element.
    #[must_use]
    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.inner_html.as_str())
    }

    /// Scroll offset of an element.
    #[must_use]
    pub fn scroll_top(&self, id: &str) -> Option<u32> {
        self.elements.get(id).map(|e| e.scroll_top)
    }

    /// Id of the focused element.
    #[must_use]
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut MemoryElement, MissingElement> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| MissingElement(id.to_owned()))
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), MissingElement> {
        self.get_mut(id)?
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_attribute(&mut self, id: &str, name: &str) -> Result<(), MissingElement> {
        self.get_mut(id)?.attributes.remove(name);
        Ok(())
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<(), MissingElement> {
        html.clone_into(&mut self.get_mut(id)?.inner_html);
        Ok(())
    }

    fn set_scroll_top(&mut self, id: &str, offset: u32) -> Result<(), MissingElement> {
        self.get_mut(id)?.scroll_top = offset;
        Ok(())
    }

    fn focus(&mut self, id: &str) -> Result<(), MissingElement> {
        self.get_mut(id)?;
        self.focused = Some(id.to_owned());
        Ok(())
    }
}
