//! Parsed HTML with the small query surface the extractors share:
//! select by CSS selector, read text, read attributes.
//!
//! [`ParsedDocument`] wraps [`scraper::Html`], which is not `Send`. Parse,
//! extract, and drop it between `.await` points; never hold one across them.

use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    #[must_use]
    pub fn parse_fragment(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    /// All elements matching `selector`, in document order. An invalid
    /// selector matches nothing.
    #[must_use]
    pub fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        compile(selector).map_or_else(Vec::new, |sel| self.html.select(&sel).collect())
    }

    #[must_use]
    pub fn select_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let sel = compile(selector)?;
        self.html.select(&sel).next()
    }

    /// Visible text of the whole document: trimmed text nodes joined by a
    /// single space, with script/style content skipped.
    #[must_use]
    pub fn text(&self) -> String {
        element_text(self.html.root_element())
    }

    /// `content` of the first `<meta {attr}="{value}">` tag, if any.
    #[must_use]
    pub fn meta_content(&self, attr: &str, value: &str) -> Option<String> {
        let selector = format!(r#"meta[{attr}="{value}"]"#);
        self.select_first(&selector)
            .and_then(|meta| meta.value().attr("content"))
            .map(str::to_owned)
    }
}

/// Elements under `element` matching `selector`, in document order.
#[must_use]
pub fn select_within<'a>(element: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    compile(selector).map_or_else(Vec::new, |sel| element.select(&sel).collect())
}

/// Visible text under `element`, trimmed text nodes joined by a single space.
#[must_use]
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for node in element.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }
    parts.join(" ")
}

/// Attribute value on `element`.
#[must_use]
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(e) => {
            tracing::debug!(selector, error = %e, "invalid CSS selector");
            None
        }
    }
}
