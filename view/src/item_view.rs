//! Rendering of a single item.

use crate::event::EventKind;
use crate::markup::Element;
use std::fmt;
use std::rc::Rc;
use tasklist_core::{DeleteItem, Item, UpdateItem};

/// Callback pair wired into every rendered item
#[derive(Clone)]
pub struct ItemCallbacks {
    on_update: Rc<dyn Fn(UpdateItem)>,
    on_delete: Rc<dyn Fn(DeleteItem)>,
}

impl ItemCallbacks {
    /// Creates the callback record
    #[must_use]
    pub fn new<U, D>(on_update: U, on_delete: D) -> Self
    where
        U: Fn(UpdateItem) + 'static,
        D: Fn(DeleteItem) + 'static,
    {
        Self {
            on_update: Rc::new(on_update),
            on_delete: Rc::new(on_delete),
        }
    }

    /// Invokes the update callback
    pub fn update(&self, update: UpdateItem) {
        (self.on_update)(update);
    }

    /// Invokes the delete callback
    pub fn delete(&self, delete: DeleteItem) {
        (self.on_delete)(delete);
    }
}

impl fmt::Debug for ItemCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemCallbacks").finish_non_exhaustive()
    }
}

/// Builds the list-item element for `item`.
///
/// ```text
/// <li class="item" data-id="0">
///   <input type="checkbox" class="toggle">
///   <span class="title">Buy milk</span>
///   <button type="button" class="delete">Delete</button>
/// </li>
/// ```
///
/// Completed items get `checked` on the checkbox, the `completed` class on
/// the `li`, and their title wrapped in `<s>`. Toggling the checkbox calls
/// `on_update` with the negated state; clicking the button calls
/// `on_delete`.
#[must_use]
pub fn item_view(item: &Item, callbacks: &ItemCallbacks) -> Element {
    let id = item.id();
    let completed = item.completed();

    let toggle = {
        let callbacks = callbacks.clone();
        Element::new("input")
            .attr("type", "checkbox")
            .class("toggle")
            .flag("checked", completed)
            .on(EventKind::Change, move |_| {
                callbacks.update(UpdateItem {
                    id,
                    completed: !completed,
                });
            })
    };

    let title = if completed {
        Element::new("span")
            .class("title")
            .child(Element::new("s").text(item.title()))
    } else {
        Element::new("span").class("title").text(item.title())
    };

    let delete = {
        let callbacks = callbacks.clone();
        Element::new("button")
            .attr("type", "button")
            .class("delete")
            .text("Delete")
            .on(EventKind::Click, move |_| callbacks.delete(DeleteItem { id }))
    };

    Element::new("li")
        .class(if completed { "item completed" } else { "item" })
        .attr("data-id", id)
        .child(toggle)
        .child(title)
        .child(delete)
}
