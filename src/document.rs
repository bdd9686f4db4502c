use std::collections::{BTreeMap, BTreeSet};

use crate::render::html_escape;

/// A single addressable element of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub id: String,
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
    /// Inner markup, already escaped where it came from text.
    pub inner: String,
}

impl Element {
    pub fn new(tag: &'static str, id: &str) -> Self {
        Element {
            tag,
            id: id.to_string(),
            classes: BTreeSet::new(),
            attrs: BTreeMap::new(),
            inner: String::new(),
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        for c in class.split_whitespace() {
            self.classes.insert(c.to_string());
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn html(mut self, inner: &str) -> Self {
        self.inner = inner.to_string();
        self
    }

    /// Static default text; escaped the same way a text write would be.
    pub fn text(mut self, text: &str) -> Self {
        self.inner = html_escape(text);
        self
    }

    pub fn outer_html(&self) -> String {
        let mut out = format!("<{} id=\"{}\"", self.tag, html_escape(&self.id));
        if !self.classes.is_empty() {
            let classes: Vec<&str> = self.classes.iter().map(|c| c.as_str()).collect();
            out.push_str(&format!(" class=\"{}\"", html_escape(&classes.join(" "))));
        }
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, html_escape(value)));
        }
        out.push('>');
        out.push_str(&self.inner);
        out.push_str(&format!("</{}>", self.tag));
        out
    }
}

/// The page's addressable elements keyed by id. Writes to ids that are not
/// present are silently skipped, so a design that leaves out a section
/// renders without it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Set text content. `None` leaves the element untouched.
    pub fn set_text(&mut self, id: &str, value: Option<&str>) {
        if let (Some(el), Some(v)) = (self.elements.get_mut(id), value) {
            el.inner = html_escape(v);
        }
    }

    pub fn set_inner_html(&mut self, id: &str, markup: String) {
        if let Some(el) = self.elements.get_mut(id) {
            el.inner = markup;
        }
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: Option<&str>) {
        if let (Some(el), Some(v)) = (self.elements.get_mut(id), value) {
            el.attrs.insert(name.to_string(), v.to_string());
        }
    }

    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.inner.as_str())
    }

    pub fn attr_of(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|e| e.attrs.get(name))
            .map(|v| v.as_str())
    }

    /// Markup for an element, or nothing if the design does not have it.
    pub fn outer_html(&self, id: &str) -> String {
        self.elements
            .get(id)
            .map(|e| e.outer_html())
            .unwrap_or_default()
    }
}
