//! # Tasklist Testing
//!
//! Testing utilities and helpers for tasklist.
//!
//! This crate provides:
//! - [`ChangeRecorder`]: counts container change notifications
//! - [`ContainerTest`]: Given-When-Then builder for container mutations
//! - [`Harness`]: a controller mounted onto in-memory UI handles
//! - [`MetricsRecorder`]: thread-local `metrics` recorder for assertions
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```
//! use tasklist_core::ItemId;
//! use tasklist_testing::Harness;
//!
//! let page = Harness::mounted();
//! page.type_and_submit("Buy milk");
//! page.toggle(ItemId::new(0));
//!
//! assert!(page.html().contains("<s>Buy milk</s>"));
//! ```

pub mod container_test;
pub mod harness;
pub mod metrics_recorder;
pub mod recorder;

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;
    use tasklist_core::{DeleteItem, ItemId, ListContainer, UpdateItem};

    /// A container operation as a user would trigger it
    #[derive(Clone, Debug)]
    pub enum Op {
        /// Submit a title
        Add(String),
        /// Toggle item `id` to `completed`
        Update(u64, bool),
        /// Delete item `id`
        Delete(u64),
    }

    impl Op {
        /// Applies the operation to `container`
        pub fn apply(&self, container: &ListContainer) {
            match self {
                Self::Add(title) => container.add_item(container.create_item(title.clone())),
                Self::Update(id, completed) => container.update_item(UpdateItem {
                    id: ItemId::new(*id),
                    completed: *completed,
                }),
                Self::Delete(id) => container.delete_item(DeleteItem {
                    id: ItemId::new(*id),
                }),
            }
        }
    }

    /// Titles including empty and whitespace-only ones
    pub fn title() -> impl Strategy<Value = String> {
        prop_oneof![
            1 => Just(String::new()),
            1 => Just("  ".to_string()),
            6 => "[A-Za-z<>&\"' ]{1,12}",
        ]
    }

    /// Operations addressing ids `0..max_id`
    pub fn op(max_id: u64) -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => title().prop_map(Op::Add),
            2 => (0..max_id, any::<bool>()).prop_map(|(id, done)| Op::Update(id, done)),
            1 => (0..max_id).prop_map(Op::Delete),
        ]
    }
}

/// Installs a test-writer `tracing` subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist_core=debug,tasklist_runtime=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use container_test::ContainerTest;
pub use harness::Harness;
pub use metrics_recorder::MetricsRecorder;
pub use recorder::ChangeRecorder;

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::ListContainer;

    #[test]
    fn recorder_counts_and_detaches() {
        let container = ListContainer::new();
        let recorder = ChangeRecorder::attach(&container);

        container.add_item(container.create_item("A"));
        assert_eq!(recorder.count(), 1);

        recorder.reset();
        recorder.detach(&container);
        container.add_item(container.create_item("B"));
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn init_test_tracing_is_repeatable() {
        init_test_tracing();
        init_test_tracing();
    }
}
