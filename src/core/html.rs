// src/core/html.rs
//! Tree-query capability the extraction engine is written against.
//!
//! The engine never touches a parser type directly; it asks a [`Node`] for
//! its tag, attributes, text and descendants. `scraper::ElementRef` is the
//! implementation used here; any tree that can answer these questions works.

use scraper::{CaseSensitivity, ElementRef, Html};

pub trait Node: Copy {
    fn tag(&self) -> &str;
    fn attribute(&self, name: &str) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;

    /// All descendant text concatenated, untouched.
    fn inner_text(&self) -> String;

    /// Element children, document order.
    fn element_children(&self) -> Vec<Self>;

    /// Element descendants excluding `self`, document order.
    fn element_descendants(&self) -> Vec<Self>;

    fn find_first(&self, tag: &str) -> Option<Self> {
        self.element_descendants().into_iter().find(|n| n.tag() == tag)
    }

    fn find_all(&self, tag: &str) -> Vec<Self> {
        self.element_descendants()
            .into_iter()
            .filter(|n| n.tag() == tag)
            .collect()
    }

    fn find_by_id(&self, id: &str) -> Option<Self> {
        self.element_descendants()
            .into_iter()
            .find(|n| n.attribute("id") == Some(id))
    }

    fn find_by_class(&self, class: &str) -> Option<Self> {
        self.element_descendants()
            .into_iter()
            .find(|n| n.has_class(class))
    }

    /// First descendant `<tag>` carrying every `(name, value)` pair.
    fn find_by_attrs(&self, tag: &str, attrs: &[(&str, &str)]) -> Option<Self> {
        self.element_descendants().into_iter().find(|n| {
            n.tag() == tag
                && attrs
                    .iter()
                    .all(|(name, value)| n.attribute(name) == Some(*value))
        })
    }
}

impl<'a> Node for ElementRef<'a> {
    fn tag(&self) -> &str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().has_class(class, CaseSensitivity::CaseSensitive)
    }

    fn inner_text(&self) -> String {
        self.text().collect()
    }

    fn element_children(&self) -> Vec<Self> {
        (**self).children().filter_map(ElementRef::wrap).collect()
    }

    fn element_descendants(&self) -> Vec<Self> {
        // ego_tree yields the node itself first
        (**self)
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .collect()
    }
}

pub fn parse_document(text: &str) -> Html {
    Html::parse_document(text)
}
