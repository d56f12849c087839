//! The observable list container.
//!
//! [`ListContainer`] owns the ordered item sequence and is the only party
//! that mutates it. Each successful mutation is followed by exactly one
//! [`CHANGE`] notification; rejected adds and failed update lookups are
//! silent. Deletes always notify, whether or not anything matched.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tasklist_core::{Handler, ListContainer, UpdateItem};
//!
//! let container = ListContainer::new();
//! let changes = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&changes);
//! let handler = Handler::new(move || counter.set(counter.get() + 1));
//! container.on_change(&handler);
//!
//! let item = container.create_item("Buy milk");
//! let id = item.id();
//! container.add_item(item);
//! container.update_item(UpdateItem { id, completed: true });
//!
//! assert_eq!(changes.get(), 2);
//! assert!(container.get(id).is_some_and(|item| item.completed()));
//! ```
//!
//! # Borrowing
//!
//! The sequence sits in a `RefCell`. Every mutation releases its borrow
//! before publishing, so change handlers are free to read the container or
//! mutate it again.

use crate::item::{DeleteItem, IdGenerator, Item, ItemId, UpdateItem};
use crate::notifier::{Handler, Notifier};
use std::cell::RefCell;

/// Event key raised after every successful mutation
pub const CHANGE: &str = "change";

/// Owner of the ordered item collection
#[derive(Debug, Default)]
pub struct ListContainer {
    items: RefCell<Vec<Item>>,
    ids: IdGenerator,
    notifier: Notifier,
}

impl ListContainer {
    /// Creates an empty container with its own id generator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a container pre-seeded with `titles`, in order.
    ///
    /// Seeding does not notify. Empty titles are skipped but still consume
    /// an id.
    #[must_use]
    pub fn seeded<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let container = Self::new();
        {
            let mut items = container.items.borrow_mut();
            for title in titles {
                let item = Item::new(container.ids.next_id(), title);
                if !item.is_empty_title() {
                    items.push(item);
                }
            }
        }
        container
    }

    /// Builds a new, not yet inserted, item with a fresh id
    pub fn create_item(&self, title: impl Into<String>) -> Item {
        Item::new(self.ids.next_id(), title)
    }

    /// Appends `item` and notifies.
    ///
    /// Rejected silently (no notification) when the title is empty or an
    /// item with the same id is already present.
    pub fn add_item(&self, item: Item) {
        let id = item.id();

        if item.is_empty_title() {
            tracing::debug!(%id, "rejected item with empty title");
            return;
        }

        {
            let mut items = self.items.borrow_mut();
            if items.iter().any(|existing| existing.id() == id) {
                tracing::debug!(%id, "rejected item with duplicate id");
                return;
            }
            items.push(item);
        }

        tracing::debug!(%id, "item added");
        self.notifier.publish(CHANGE);
    }

    /// Sets `completed` on the first item matching `update.id` and notifies.
    ///
    /// Unknown ids are ignored without notification.
    pub fn update_item(&self, update: UpdateItem) {
        let UpdateItem { id, completed } = update;

        let found = {
            let mut items = self.items.borrow_mut();
            match items.iter_mut().find(|item| item.id() == id) {
                Some(item) => {
                    item.set_completed(completed);
                    true
                }
                None => false,
            }
        };

        if !found {
            tracing::debug!(%id, "update ignored, item not found");
            return;
        }

        tracing::debug!(%id, completed, "item updated");
        self.notifier.publish(CHANGE);
    }

    /// Removes every item matching `delete.id` and notifies.
    ///
    /// Notifies even when nothing matched.
    pub fn delete_item(&self, delete: DeleteItem) {
        let DeleteItem { id } = delete;

        let removed = {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|item| item.id() != id);
            before - items.len()
        };

        if removed == 0 {
            tracing::debug!(%id, "delete matched nothing");
        } else {
            tracing::debug!(%id, removed, "item deleted");
        }
        self.notifier.publish(CHANGE);
    }

    /// Snapshot of the current sequence in display order
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    /// Snapshot of the item with `id`, if present
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.items.borrow().iter().find(|item| item.id() == id).cloned()
    }

    /// Checks if an item with `id` exists
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.borrow().iter().any(|item| item.id() == id)
    }

    /// Number of items
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.items.borrow().len()
    }

    /// Number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.borrow().iter().filter(|item| item.completed()).count()
    }

    /// Returns `true` when the container holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Subscribes `handler` to [`CHANGE`]
    pub fn on_change(&self, handler: &Handler) {
        self.notifier.subscribe(CHANGE, handler);
    }

    /// Unsubscribes `handler` from [`CHANGE`]
    pub fn off_change(&self, handler: &Handler) {
        self.notifier.unsubscribe(CHANGE, handler);
    }

    /// Number of handlers subscribed to [`CHANGE`]
    #[must_use]
    pub fn change_handler_count(&self) -> usize {
        self.notifier.handler_count(CHANGE)
    }
}
