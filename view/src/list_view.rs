//! Rendering of the whole item sequence.

use crate::item_view::{ItemCallbacks, item_view};
use crate::markup::Element;
use tasklist_core::Item;

/// Builds a `<ul class="items">` with one [`item_view`] child per item, in
/// sequence order. `callbacks` is forwarded to every child unchanged.
#[must_use]
pub fn list_view(items: &[Item], callbacks: &ItemCallbacks) -> Element {
    Element::new("ul")
        .class("items")
        .children(items.iter().map(|item| item_view(item, callbacks)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests can unwrap
mod tests {
    use super::*;
    use crate::event::{Event, EventKind};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tasklist_core::{DeleteItem, ItemId, ListContainer};

    fn noop_callbacks() -> ItemCallbacks {
        ItemCallbacks::new(|_| {}, |_| {})
    }

    #[test]
    fn empty_list_renders_empty_container() {
        assert_eq!(list_view(&[], &noop_callbacks()).to_html(), r#"<ul class="items"></ul>"#);
    }

    #[test]
    fn children_follow_sequence_order() {
        let container = ListContainer::seeded(["A", "B", "C"]);
        let el = list_view(&container.items(), &noop_callbacks());

        let ids: Vec<_> = el
            .child_elements()
            .map(|li| li.get_attr("data-id").unwrap().to_owned())
            .collect();
        assert_eq!(ids, ["0", "1", "2"]);
        assert_eq!(el.text_content(), "ADeleteBDeleteCDelete");
    }

    #[test]
    fn callbacks_are_forwarded_to_each_item() {
        let deleted: Rc<RefCell<Vec<ItemId>>> = Rc::default();
        let sink = Rc::clone(&deleted);
        let callbacks =
            ItemCallbacks::new(|_| {}, move |d: DeleteItem| sink.borrow_mut().push(d.id));

        let container = ListContainer::seeded(["A", "B"]);
        let el = list_view(&container.items(), &callbacks);

        for button in el.find_all(|e| e.has_class("delete")).into_iter().rev() {
            button.dispatch(&Event::new(EventKind::Click));
        }

        assert_eq!(*deleted.borrow(), [ItemId::new(1), ItemId::new(0)]);
    }
}
