//! Accessible tab, accordion and topic widgets for tabkit pages.
//!
//! This crate provides:
//! - [`PageLayout`]: static page structure (tabs, accordions, topics)
//! - [`SelectionState`]: the tab/accordion/topic state machine
//! - ARIA projection of that state onto a [`Document`]
//! - Article rendering into content regions
//! - [`PageSession`]: event dispatch and the load continuation
//! - [`Page`]: a session bound to a document and its background load
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tabkit_config::Config;
//! use tabkit_widgets::{MemoryDocument, Page, PageLayout, UiEvent};
//!
//! let config = Config::load(None, None)?;
//! let layout = PageLayout::from_toml(
//!     &std::fs::read_to_string("page.toml")?,
//!     &config.regions,
//! )?;
//! let document = MemoryDocument::from_layout(&layout);
//!
//! let mut page = Page::open_configured(layout, config, document);
//! page.wait();
//! page.handle(&UiEvent::TabClick { tab: "html-tab".to_owned() });
//! # Ok(())
//! # }
//! ```

pub mod aria;
pub mod content;
mod dispatcher;
mod document;
mod layout;
mod page;
mod selection;
mod session;

pub use dispatcher::{Action, DispatchOutcome, Key, UiEvent, resolve};
pub use document::{Document, MemoryDocument, MemoryElement, MissingElement};
pub use layout::{
    Accordion, AccordionDescription, AccordionId, Element, LayoutError, PageDescription,
    PageLayout, PageLayoutBuilder, Tab, TabDescription, TabId, Topic, TopicDescription, TopicId,
};
pub use page::{Page, source_for};
pub use selection::{SelectionState, Transition};
pub use session::{PageSession, SessionError};
