//! Change notification recorder.

use std::cell::Cell;
use std::rc::Rc;
use tasklist_core::{Handler, ListContainer};

/// Counts `"change"` notifications raised by a container
///
/// # Example
///
/// ```
/// use tasklist_core::ListContainer;
/// use tasklist_testing::ChangeRecorder;
///
/// let container = ListContainer::new();
/// let recorder = ChangeRecorder::attach(&container);
///
/// container.add_item(container.create_item("A"));
/// container.add_item(container.create_item(""));
/// assert_eq!(recorder.count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ChangeRecorder {
    count: Rc<Cell<usize>>,
    handler: Handler,
}

impl ChangeRecorder {
    /// Subscribes a new recorder to `container`
    #[must_use]
    pub fn attach(container: &ListContainer) -> Self {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let handler = Handler::new(move || counter.set(counter.get() + 1));
        container.on_change(&handler);
        Self { count, handler }
    }

    /// Notifications seen so far
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Resets the count to zero
    pub fn reset(&self) {
        self.count.set(0);
    }

    /// Unsubscribes from `container`
    pub fn detach(&self, container: &ListContainer) {
        container.off_change(&self.handler);
    }
}
