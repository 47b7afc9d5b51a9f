//! Render targets of the dashboard.
//!
//! A [`Document`] is a set of elements addressed by identifier. The
//! renderer only needs to replace an element's markup and class list, and
//! must cope with elements that are not there.

pub mod text;
pub mod types;

use std::collections::HashMap;

pub use text::{html_to_lines, html_to_text};
pub use types::{Element, ElementId};

/// A page the dashboard can render into.
pub trait Document: Send {
    /// Replace the markup content of `id`. Returns false if there is no such element.
    fn set_inner_html(&mut self, id: &str, html: &str) -> bool;

    /// Replace the class list of `id`. Returns false if there is no such element.
    fn set_class_name(&mut self, id: &str, class_name: &str) -> bool;

    fn inner_html(&self, id: &str) -> Option<&str>;

    fn class_name(&self, id: &str) -> Option<&str>;
}

/// In-memory page holding a fixed set of elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDocument {
    elements: HashMap<String, Element>,
}

impl PageDocument {
    /// A page with no elements; every write is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A page containing all dashboard elements, initially blank.
    pub fn dashboard() -> Self {
        Self::with_targets(ElementId::ALL)
    }

    /// A page containing only the given elements.
    pub fn with_targets(ids: impl IntoIterator<Item = ElementId>) -> Self {
        Self::with_ids(ids.into_iter().map(|id| id.as_str()))
    }

    /// A page containing elements with arbitrary identifiers.
    pub fn with_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let elements = ids
            .into_iter()
            .map(|id| (id.to_string(), Element::default()))
            .collect();
        Self { elements }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Visible text of an element, see [`html_to_text`].
    pub fn text_content(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| html_to_text(&e.inner_html))
    }

    /// Visible text of an element split into lines, see [`html_to_lines`].
    pub fn text_lines(&self, id: &str) -> Option<Vec<String>> {
        self.elements.get(id).map(|e| html_to_lines(&e.inner_html))
    }
}

impl Document for PageDocument {
    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.inner_html = html.to_string();
                true
            }
            None => false,
        }
    }

    fn set_class_name(&mut self, id: &str, class_name: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.class_name = class_name.to_string();
                true
            }
            None => false,
        }
    }

    fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.inner_html.as_str())
    }

    fn class_name(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.class_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_has_all_targets() {
        let page = PageDocument::dashboard();
        for id in ElementId::ALL {
            assert!(page.contains(id.as_str()), "missing {}", id);
            assert_eq!(page.inner_html(id.as_str()), Some(""));
        }
    }

    #[test]
    fn test_write_to_missing_element_is_noop() {
        let mut page = PageDocument::with_targets([ElementId::BotUser]);
        assert!(!page.set_inner_html("guild-count", "12"));
        assert!(!page.set_class_name("guild-count", "badge"));
        assert!(page.element("guild-count").is_none());

        assert!(page.set_inner_html("bot-user", "botA"));
        assert_eq!(page.text_content("bot-user").as_deref(), Some("botA"));
    }

    #[test]
    fn test_write_replaces_previous_content() {
        let mut page = PageDocument::dashboard();
        page.set_inner_html("bot-user", "first");
        page.set_inner_html("bot-user", "second");
        assert_eq!(page.inner_html("bot-user"), Some("second"));
    }

    #[test]
    fn test_arbitrary_ids() {
        let page = PageDocument::with_ids(["sidebar"]);
        assert!(page.contains("sidebar"));
        assert!(!page.contains("bot-user"));
    }
}
