//! Property tests for the list container

#![allow(clippy::unwrap_used)] // Tests can unwrap

use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use tasklist_core::{Handler, ItemId, ListContainer};
use tasklist_testing::properties::{Op, op};

fn counted(container: &ListContainer) -> Rc<Cell<usize>> {
    let changes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&changes);
    container.on_change(&Handler::new(move || counter.set(counter.get() + 1)));
    changes
}

fn ids(container: &ListContainer) -> Vec<ItemId> {
    container.items().iter().map(tasklist_core::Item::id).collect()
}

proptest! {
    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(op(12), 0..40)) {
        let container = ListContainer::new();

        for op in ops {
            op.apply(&container);

            let ids = ids(&container);
            let unique: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
        }
    }

    #[test]
    fn updates_keep_order_and_deletes_keep_the_rest(ops in prop::collection::vec(op(12), 0..40)) {
        let container = ListContainer::new();

        for op in ops {
            let before = ids(&container);
            op.apply(&container);
            match op {
                Op::Add(_) => {}
                Op::Update(..) => {
                    prop_assert_eq!(ids(&container), before);
                }
                Op::Delete(id) => {
                    let expected: Vec<_> = before.into_iter().filter(|i| i.get() != id).collect();
                    prop_assert_eq!(ids(&container), expected);
                }
            }
        }
    }

    #[test]
    fn one_notification_per_successful_mutation(ops in prop::collection::vec(op(12), 0..40)) {
        let container = ListContainer::new();
        let changes = counted(&container);

        for op in ops {
            let before = changes.get();
            let expected = match &op {
                Op::Add(title) => usize::from(!title.is_empty()),
                Op::Update(id, _) => usize::from(container.contains(ItemId::new(*id))),
                Op::Delete(_) => 1,
            };
            op.apply(&container);
            prop_assert_eq!(changes.get() - before, expected);
        }
    }

    #[test]
    fn empty_title_never_changes_count(prefix in prop::collection::vec("[a-z]{1,4}", 0..5)) {
        let container = ListContainer::seeded(prefix);
        let changes = counted(&container);
        let count = container.total_count();

        container.add_item(container.create_item(""));

        prop_assert_eq!(container.total_count(), count);
        prop_assert_eq!(changes.get(), 0);
    }
}
