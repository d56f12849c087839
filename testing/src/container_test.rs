//! Ergonomic testing utilities for the list container
//!
//! This module provides a fluent API for testing container mutations with
//! readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ContainerTest is the natural name

use crate::recorder::ChangeRecorder;
use tasklist_core::{Item, ListContainer};

/// Type alias for mutation steps
type Mutation = Box<dyn FnOnce(&ListContainer)>;

/// Type alias for item assertion functions
type ItemsAssertion = Box<dyn FnOnce(&[Item])>;

/// Fluent API for testing container mutations with Given-When-Then syntax
///
/// # Example
///
/// ```
/// use tasklist_core::{DeleteItem, ItemId};
/// use tasklist_testing::ContainerTest;
///
/// ContainerTest::new()
///     .given_titles(["A", "B"])
///     .when(|c| c.delete_item(DeleteItem { id: ItemId::new(0) }))
///     .then_titles(["B"])
///     .then_notifications(1)
///     .run();
/// ```
#[derive(Default)]
pub struct ContainerTest {
    seed: Vec<String>,
    mutations: Vec<Mutation>,
    item_assertions: Vec<ItemsAssertion>,
    expected_notifications: Option<usize>,
}

impl ContainerTest {
    /// Create a new container test starting from an empty container
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the container (Given). Seeding does not notify.
    #[must_use]
    pub fn given_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seed = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Add a mutation to perform (When). Mutations run in order.
    #[must_use]
    pub fn when<F>(mut self, mutation: F) -> Self
    where
        F: FnOnce(&ListContainer) + 'static,
    {
        self.mutations.push(Box::new(mutation));
        self
    }

    /// Add an assertion about the resulting items (Then)
    #[must_use]
    pub fn then_items<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Item]) + 'static,
    {
        self.item_assertions.push(Box::new(assertion));
        self
    }

    /// Assert the resulting titles in order (Then)
    #[must_use]
    pub fn then_titles<I, S>(self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expected: Vec<String> = titles.into_iter().map(Into::into).collect();
        self.then_items(move |items| {
            let actual: Vec<&str> = items.iter().map(Item::title).collect();
            assert_eq!(actual, expected, "unexpected titles");
        })
    }

    /// Assert how many change notifications the mutations raised (Then)
    #[must_use]
    pub const fn then_notifications(mut self, expected: usize) -> Self {
        self.expected_notifications = Some(expected);
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if any assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    pub fn run(self) {
        let container = ListContainer::seeded(self.seed);
        let recorder = ChangeRecorder::attach(&container);

        for mutation in self.mutations {
            mutation(&container);
        }

        if let Some(expected) = self.expected_notifications {
            assert_eq!(
                recorder.count(),
                expected,
                "Expected {expected} change notifications, but found {}",
                recorder.count()
            );
        }

        let items = container.items();
        for assertion in self.item_assertions {
            assertion(&items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::{ItemId, UpdateItem};

    #[test]
    fn add_then_titles() {
        ContainerTest::new()
            .when(|c| c.add_item(c.create_item("Buy milk")))
            .then_titles(["Buy milk"])
            .then_items(|items| assert!(!items[0].completed()))
            .then_notifications(1)
            .run();
    }

    #[test]
    fn update_keeps_order() {
        ContainerTest::new()
            .given_titles(["A", "B", "C"])
            .when(|c| {
                c.update_item(UpdateItem {
                    id: ItemId::new(1),
                    completed: true,
                });
            })
            .then_titles(["A", "B", "C"])
            .then_items(|items| assert!(items[1].completed()))
            .then_notifications(1)
            .run();
    }

    #[test]
    #[should_panic(expected = "change notifications")]
    fn wrong_notification_count_fails() {
        ContainerTest::new()
            .when(|c| c.add_item(c.create_item("")))
            .then_notifications(1)
            .run();
    }
}
