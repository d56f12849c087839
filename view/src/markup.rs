//! Element trees and escaped markup rendering.
//!
//! Views build [`Element`] values with a small builder API. Text and
//! attribute values are stored raw and escaped when rendered, so every
//! string that reaches [`Element::to_html`] passes through [`escape`] and
//! cannot inject markup.
//!
//! ```
//! use tasklist_view::markup::Element;
//!
//! let el = Element::new("span").class("title").text("<b>bold</b>");
//! assert_eq!(el.to_html(), r#"<span class="title">&lt;b&gt;bold&lt;/b&gt;</span>"#);
//! assert_eq!(el.text_content(), "<b>bold</b>");
//! ```

use crate::event::{Event, EventKind, EventListener};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use std::fmt::Write as _;

/// Elements rendered without a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Escapes `& < > " '` to their entity equivalents.
///
/// Borrows the input when nothing needs escaping.
#[must_use]
pub fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len() + 16);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// A child of an [`Element`]
#[derive(Clone, Debug)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Raw text, escaped on render
    Text(String),
}

/// One attribute; `None` marks a boolean attribute such as `checked`.
type Attr = (String, Option<String>);

/// A renderable element with attached interaction listeners
#[derive(Clone, Default)]
pub struct Element {
    tag: String,
    attrs: SmallVec<[Attr; 4]>,
    children: Vec<Node>,
    listeners: SmallVec<[(EventKind, EventListener); 2]>,
}

impl Element {
    /// Creates an empty element
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets an attribute, replacing any previous value
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.set_attr(name.into(), Some(value.to_string()));
        self
    }

    /// Sets a boolean attribute when `on` is true
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.set_attr(name.into(), None);
        }
        self
    }

    /// Shorthand for the `class` attribute
    #[must_use]
    pub fn class(self, class: impl fmt::Display) -> Self {
        self.attr("class", class)
    }

    /// Appends a text node
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Appends a child element
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends every element of `children`, in order
    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    /// Attaches a listener for `kind`. Nothing runs until the event is
    /// dispatched.
    #[must_use]
    pub fn on<F>(mut self, kind: EventKind, listener: F) -> Self
    where
        F: Fn(&Event) + 'static,
    {
        self.listeners.push((kind, EventListener::new(listener)));
        self
    }

    fn set_attr(&mut self, name: String, value: Option<String>) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Tag name
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of attribute `name`; boolean attributes yield `Some("")`
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Whether attribute `name` is present
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    /// Whether the whitespace-separated `class` list contains `class`
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Child elements in order, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Listeners attached for `kind`, in attach order
    #[must_use]
    pub fn listeners(&self, kind: EventKind) -> Vec<EventListener> {
        self.listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, l)| l.clone())
            .collect()
    }

    /// Invokes this element's listeners for `event.kind()`.
    ///
    /// Returns the number of listeners invoked.
    pub fn dispatch(&self, event: &Event) -> usize {
        let listeners = self.listeners(event.kind());
        for listener in &listeners {
            listener.call(event);
        }
        listeners.len()
    }

    /// Depth-first search (self first) for an element matching `pred`
    pub fn find<P>(&self, pred: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        self.find_with(&pred)
    }

    fn find_with(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_with(pred))
    }

    /// Every element matching `pred`, in document order
    pub fn find_all<P>(&self, pred: P) -> Vec<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.collect_with(&pred, &mut found);
        found
    }

    fn collect_with<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if pred(self) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_with(pred, found);
        }
    }

    /// Concatenated raw text of all descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.push_text(out),
            }
        }
    }

    /// Renders escaped markup
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(&escape(name));
            if let Some(value) = value {
                // Writing to a String cannot fail.
                let _ = write!(out, "=\"{}\"", escape(value));
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Element(el) => el.write_html(out),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attrs", &self.attrs)
            .field("children", &self.children)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
