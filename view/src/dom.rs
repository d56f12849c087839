//! UI attachment points.
//!
//! The controller talks to the surrounding page only through the handle
//! traits defined here. The in-memory implementations ([`MountPoint`],
//! [`Form`], [`TextInput`], [`TextDisplay`]) stand in for a real document in
//! tests and in the demo binary.

use crate::event::{Event, EventKind, EventListener};
use crate::markup::Element;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};

/// A location whose whole content can be replaced
pub trait MountTarget {
    /// Clears existing content and inserts `element` as the sole child
    fn replace_content(&self, element: Element);
}

/// Something listeners can be attached to and detached from
pub trait ListenerTarget {
    /// Attaches `listener` for `kind`; attaching the same listener twice is a no-op
    fn add_event_listener(&self, kind: EventKind, listener: &EventListener);

    /// Detaches `listener` from `kind`; unknown listeners are ignored
    fn remove_event_listener(&self, kind: EventKind, listener: &EventListener);
}

/// A text input whose value can be read and cleared
pub trait InputHandle {
    /// Current value
    fn value(&self) -> String;

    /// Replaces the value
    fn set_value(&self, value: &str);
}

/// An element whose text content can be assigned
pub trait TextHandle {
    /// Replaces the text content
    fn set_text_content(&self, text: &str);
}

/// Replaces `target`'s content with `element`
pub fn mount(element: Element, target: &dyn MountTarget) {
    target.replace_content(element);
}

/// In-memory mount point
#[derive(Debug, Default)]
pub struct MountPoint {
    content: RefCell<Option<Element>>,
    mounts: Cell<usize>,
}

impl MountPoint {
    /// Creates an empty mount point
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the mounted element, if any
    #[must_use]
    pub fn content(&self) -> Option<Element> {
        self.content.borrow().clone()
    }

    /// Markup of the mounted element, or an empty string
    #[must_use]
    pub fn html(&self) -> String {
        self.content
            .borrow()
            .as_ref()
            .map(Element::to_html)
            .unwrap_or_default()
    }

    /// How many times content has been replaced
    #[must_use]
    pub fn mount_count(&self) -> usize {
        self.mounts.get()
    }

    /// Dispatches `event` to the first mounted element matching `pred`.
    ///
    /// Listeners run after the internal borrow is released, so they may
    /// re-mount. Returns `false` when nothing matched.
    pub fn dispatch<P>(&self, pred: P, event: &Event) -> bool
    where
        P: Fn(&Element) -> bool,
    {
        self.dispatch_by(|root| root.find(&pred), event)
    }

    /// Dispatches `event` to the element `select` picks from the mounted root.
    ///
    /// Same borrowing rules as [`dispatch`](Self::dispatch).
    pub fn dispatch_by<S>(&self, select: S, event: &Event) -> bool
    where
        S: for<'a> Fn(&'a Element) -> Option<&'a Element>,
    {
        let listeners = {
            let content = self.content.borrow();
            let Some(target) = content.as_ref().and_then(|root| select(root)) else {
                tracing::trace!(kind = %event.kind(), "dispatch matched no element");
                return false;
            };
            target.listeners(event.kind())
        };

        tracing::trace!(kind = %event.kind(), listeners = listeners.len(), "dispatching");

        for listener in &listeners {
            listener.call(event);
        }
        true
    }
}

impl MountTarget for MountPoint {
    fn replace_content(&self, element: Element) {
        *self.content.borrow_mut() = Some(element);
        self.mounts.set(self.mounts.get() + 1);
        tracing::trace!(mounts = self.mounts.get(), "content replaced");
    }
}

/// In-memory form
#[derive(Debug, Default)]
pub struct Form {
    listeners: RefCell<SmallVec<[(EventKind, EventListener); 2]>>,
}

impl Form {
    /// Creates a form with no listeners
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches a submit event to the attached listeners.
    ///
    /// Returns whether a listener prevented the default action.
    pub fn submit(&self) -> bool {
        let event = Event::new(EventKind::Submit);
        let listeners: Vec<EventListener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == EventKind::Submit)
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in &listeners {
            listener.call(&event);
        }
        event.default_prevented()
    }

    /// Number of listeners attached for `kind`
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.borrow().iter().filter(|(k, _)| *k == kind).count()
    }
}

impl ListenerTarget for Form {
    fn add_event_listener(&self, kind: EventKind, listener: &EventListener) {
        let mut listeners = self.listeners.borrow_mut();
        if listeners.iter().any(|(k, l)| *k == kind && l.same_as(listener)) {
            return;
        }
        listeners.push((kind, listener.clone()));
    }

    fn remove_event_listener(&self, kind: EventKind, listener: &EventListener) {
        self.listeners
            .borrow_mut()
            .retain(|(k, l)| !(*k == kind && l.same_as(listener)));
    }
}

/// In-memory text input
#[derive(Debug, Default)]
pub struct TextInput {
    value: RefCell<String>,
}

impl TextInput {
    /// Creates an empty input
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputHandle for TextInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        value.clone_into(&mut self.value.borrow_mut());
    }
}

/// In-memory text display
#[derive(Debug, Default)]
pub struct TextDisplay {
    text: RefCell<String>,
}

impl TextDisplay {
    /// Creates an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text content
    #[must_use]
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TextHandle for TextDisplay {
    fn set_text_content(&self, text: &str) {
        text.clone_into(&mut self.text.borrow_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn mount_replaces_content_wholesale() {
        let target = MountPoint::new();
        assert_eq!(target.html(), "");

        mount(Element::new("ul").text("one"), &target);
        mount(Element::new("ol").text("two"), &target);

        assert_eq!(target.html(), "<ol>two</ol>");
        assert_eq!(target.mount_count(), 2);
    }

    #[test]
    fn dispatch_reports_missing_target() {
        let target = MountPoint::new();
        assert!(!target.dispatch(|_| true, &Event::new(EventKind::Click)));

        mount(Element::new("ul"), &target);
        assert!(!target.dispatch(|el| el.tag() == "li", &Event::new(EventKind::Click)));
    }

    #[test]
    fn dispatch_by_reaches_nested_targets() {
        let target = MountPoint::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let tree = Element::new("ul")
            .child(Element::new("li").attr("data-id", 0).child(Element::new("button")))
            .child(
                Element::new("li")
                    .attr("data-id", 1)
                    .child(Element::new("button").on(EventKind::Click, move |_| {
                        counter.set(counter.get() + 1);
                    })),
            );
        mount(tree, &target);

        let found = target.dispatch_by(
            |root| {
                root.find(|el| el.get_attr("data-id") == Some("1"))
                    .and_then(|li| li.find(|el| el.tag() == "button"))
            },
            &Event::new(EventKind::Click),
        );

        assert!(found);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn listener_may_remount_during_dispatch() {
        let target = Rc::new(MountPoint::new());
        let weak = Rc::downgrade(&target);
        let button = Element::new("button").on(EventKind::Click, move |_| {
            if let Some(target) = weak.upgrade() {
                mount(Element::new("p").text("done"), &*target);
            }
        });
        mount(button, &*target);

        assert!(target.dispatch(|el| el.tag() == "button", &Event::new(EventKind::Click)));
        assert_eq!(target.html(), "<p>done</p>");
    }

    #[test]
    fn form_submit_reports_prevent_default() {
        let form = Form::new();
        assert!(!form.submit());

        let listener = EventListener::new(Event::prevent_default);
        form.add_event_listener(EventKind::Submit, &listener);
        form.add_event_listener(EventKind::Submit, &listener);
        assert_eq!(form.listener_count(EventKind::Submit), 1);
        assert!(form.submit());

        form.remove_event_listener(EventKind::Submit, &listener);
        form.remove_event_listener(EventKind::Submit, &listener);
        assert_eq!(form.listener_count(EventKind::Submit), 0);
        assert!(!form.submit());
    }

    #[test]
    fn input_and_display_store_text() {
        let input = TextInput::new();
        input.set_value("Buy milk");
        assert_eq!(input.value(), "Buy milk");
        input.set_value("");
        assert_eq!(input.value(), "");

        let display = TextDisplay::new();
        display.set_text_content("Total: 1");
        assert_eq!(display.text(), "Total: 1");
    }
}
