//! Task entities and their identifiers.
//!
//! Items are created through [`ListContainer::create_item`], which draws the
//! id from the container's own [`IdGenerator`]. Fields are private; the only
//! mutation after construction is the `completed` flag, and only the
//! container performs it.
//!
//! [`ListContainer::create_item`]: crate::container::ListContainer::create_item

use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Unique identifier for an item within one container
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates an `ItemId` from a raw value
    ///
    /// Useful for addressing existing items (for example from a parsed UI
    /// attribute). It does not allocate a new identity.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Monotonic id source scoped to a single container.
///
/// Ids start at 0 and are never handed out twice by the same generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: Cell<u64>,
}

impl IdGenerator {
    /// Creates a generator whose first id is 0
    #[must_use]
    pub const fn new() -> Self {
        Self { next: Cell::new(0) }
    }

    /// Allocates the next id
    pub fn next_id(&self) -> ItemId {
        let id = self.next.get();
        self.next.set(id.saturating_add(1));
        ItemId(id)
    }
}

/// A single task record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
    completed: bool,
}

impl Item {
    /// Creates an uncompleted item. Validation happens on insert, not here.
    pub(crate) fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Item identifier
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Title as entered
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the item is completed
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns `true` when the title has zero length.
    ///
    /// Whitespace-only titles are not empty.
    #[must_use]
    pub fn is_empty_title(&self) -> bool {
        self.title.is_empty()
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// Payload for [`ListContainer::update_item`](crate::container::ListContainer::update_item)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateItem {
    /// Item to update
    pub id: ItemId,
    /// New completion state
    pub completed: bool,
}

/// Payload for [`ListContainer::delete_item`](crate::container::ListContainer::delete_item)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeleteItem {
    /// Item to delete
    pub id: ItemId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests can unwrap
mod tests {
    use super::*;

    #[test]
    fn generator_is_monotonic() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id(), ItemId::new(0));
        assert_eq!(ids.next_id(), ItemId::new(1));
        assert_eq!(ids.next_id(), ItemId::new(2));
    }

    #[test]
    fn generators_are_independent() {
        let a = IdGenerator::new();
        let b = IdGenerator::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), ItemId::new(0));
    }

    #[test]
    fn item_new_is_not_completed() {
        let item = Item::new(ItemId::new(3), "Buy milk");
        assert_eq!(item.id(), ItemId::new(3));
        assert_eq!(item.title(), "Buy milk");
        assert!(!item.completed());
    }

    #[test]
    fn empty_title_detection() {
        assert!(Item::new(ItemId::new(0), "").is_empty_title());
        assert!(!Item::new(ItemId::new(0), "   ").is_empty_title());
        assert!(!Item::new(ItemId::new(0), "a").is_empty_title());
    }

    #[test]
    fn item_id_parses_and_displays() {
        let id: ItemId = " 42 ".parse().unwrap();
        assert_eq!(id, ItemId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("x".parse::<ItemId>().is_err());
    }

    #[test]
    fn item_serializes_with_plain_fields() {
        let mut item = Item::new(ItemId::new(1), "Write docs");
        item.set_completed(true);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "title": "Write docs", "completed": true })
        );
    }
}
