//! Content region rendering.

use tabkit_articles::{Article, ArticleStore, LookupError};
use tabkit_config::MessagesConfig;

use crate::document::{Document, MissingElement};

/// What ended up in the region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    /// The article.
    Article,
    /// The not-found message for this article id.
    NotFound(String),
    /// The loading message; the dataset is not loaded yet.
    Loading,
    /// The fetch-error message; the dataset failed to load.
    Unavailable,
}

/// Markup for an article: `<h2>{title}</h2>{content}`.
///
/// Title and content are trusted and inserted verbatim.
#[must_use]
pub fn article_markup(article: &Article) -> String {
    format!("<h2>{}</h2>{}", article.title, article.content)
}

/// Human-readable form of an article id: dashes become spaces and each
/// word is capitalized (`"aria-live-regions"` -> `"Aria Live Regions"`).
#[must_use]
pub fn humanize_id(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut word_start = true;
    for c in id.chars() {
        let c = if c == '-' { ' ' } else { c };
        if word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render `article_id` into `region_id`.
///
/// Shows the article and resets the scroll offset when it exists, the
/// not-found message (naming the id in human-readable form) when it does
/// not, and the loading or fetch-error message when no dataset is loaded.
///
/// # Errors
///
/// Returns [`MissingElement`] if the region does not resolve; nothing is
/// written in that case.
pub fn render_article(
    doc: &mut dyn Document,
    region_id: &str,
    store: &ArticleStore,
    article_id: &str,
    messages: &MessagesConfig,
) -> Result<Rendered, MissingElement> {
    if !doc.contains(region_id) {
        return Err(MissingElement(region_id.to_owned()));
    }

    let (html, rendered) = match store.lookup(article_id) {
        Ok(article) => (article_markup(article), Rendered::Article),
        Err(LookupError::NotFound(id)) => {
            let html = messages
                .not_found
                .to_html_with_article(&escape_html(&humanize_id(&id)));
            (html, Rendered::NotFound(id))
        }
        Err(LookupError::Pending) => (messages.loading.to_html(), Rendered::Loading),
        Err(LookupError::Unavailable) => (messages.fetch_error.to_html(), Rendered::Unavailable),
    };

    doc.set_inner_html(region_id, &html)?;
    if rendered == Rendered::Article {
        doc.set_scroll_top(region_id, 0)?;
    }
    Ok(rendered)
}

/// Show a message in every listed region.
///
/// Regions render independently: a missing region is logged and skipped.
/// Returns the number of regions written.
pub fn render_message_everywhere<'a>(
    doc: &mut dyn Document,
    region_ids: impl IntoIterator<Item = &'a str>,
    html: &str,
) -> usize {
    let mut written = 0;
    for region_id in region_ids {
        match doc.set_inner_html(region_id, html) {
            Ok(()) => written += 1,
            Err(e) => tracing::error!(region = region_id, error = %e, "Cannot show message"),
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tabkit_articles::{ArticleMap, FetchError};

    use super::*;
    use crate::document::MemoryDocument;

    const REGION: &str = "html-article-content";

    fn loaded_store() -> ArticleStore {
        ArticleStore::ready(ArticleMap::new().with_article("a", "Alpha", "<p>A</p>"))
    }

    #[test]
    fn test_humanize_id() {
        assert_eq!(humanize_id("aria-live-regions"), "Aria Live Regions");
        assert_eq!(humanize_id("semantic"), "Semantic");
        assert_eq!(humanize_id("wcag-2.2"), "Wcag 2.2");
        assert_eq!(humanize_id(""), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_render_article() {
        let mut doc = MemoryDocument::new().with_element(REGION);
        doc.set_scroll_top(REGION, 120).unwrap();

        let rendered = render_article(
            &mut doc,
            REGION,
            &loaded_store(),
            "a",
            &MessagesConfig::default(),
        )
        .unwrap();

        assert_eq!(rendered, Rendered::Article);
        assert_eq!(doc.inner_html(REGION), Some("<h2>Alpha</h2><p>A</p>"));
        assert_eq!(doc.scroll_top(REGION), Some(0));
    }

    #[test]
    fn test_render_missing_article() {
        let mut doc = MemoryDocument::new().with_element(REGION);

        let rendered = render_article(
            &mut doc,
            REGION,
            &loaded_store(),
            "focus-<management>",
            &MessagesConfig::default(),
        )
        .unwrap();

        assert_eq!(rendered, Rendered::NotFound("focus-<management>".to_owned()));
        assert_eq!(
            doc.inner_html(REGION),
            Some(
                "<h2>Content Not Available</h2><p>The requested article \"Focus &lt;Management&gt;\" could not be found. Please select another topic.</p>"
            )
        );
    }

    #[test]
    fn test_render_before_load_shows_loading() {
        let mut doc = MemoryDocument::new().with_element(REGION);

        let rendered = render_article(
            &mut doc,
            REGION,
            &ArticleStore::new(),
            "a",
            &MessagesConfig::default(),
        )
        .unwrap();

        assert_eq!(rendered, Rendered::Loading);
        assert_eq!(
            doc.inner_html(REGION),
            Some("<h2>Loading</h2><p>Content is loading...</p>")
        );
    }

    #[test]
    fn test_render_after_failed_load() {
        let mut store = ArticleStore::new();
        store.complete(Err(FetchError::http_status(500)));
        let mut doc = MemoryDocument::new().with_element(REGION);

        let rendered =
            render_article(&mut doc, REGION, &store, "a", &MessagesConfig::default()).unwrap();

        assert_eq!(rendered, Rendered::Unavailable);
        assert!(doc.inner_html(REGION).unwrap().contains("Error Loading Content"));
    }

    #[test]
    fn test_render_missing_region_writes_nothing() {
        let mut doc = MemoryDocument::new();

        let err = render_article(
            &mut doc,
            REGION,
            &loaded_store(),
            "a",
            &MessagesConfig::default(),
        )
        .unwrap_err();

        assert_eq!(err, MissingElement(REGION.to_owned()));
    }

    #[test]
    fn test_render_message_everywhere_skips_missing() {
        let mut doc = MemoryDocument::new()
            .with_element("a-article-content")
            .with_element("c-article-content");

        let written = render_message_everywhere(
            &mut doc,
            ["a-article-content", "b-article-content", "c-article-content"],
            "<h2>Error</h2>",
        );

        assert_eq!(written, 2);
        assert_eq!(doc.inner_html("c-article-content"), Some("<h2>Error</h2>"));
    }
}
