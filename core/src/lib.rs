//! # Tasklist Core
//!
//! State side of the tasklist architecture.
//!
//! This crate owns the data and the change signal; rendering lives in
//! `tasklist-view` and the wiring between the two in `tasklist-runtime`.
//!
//! ## Core Concepts
//!
//! - **Notifier**: keyed publish/subscribe registry of zero-payload handlers
//! - **Item**: a task record (`id`, `title`, `completed`)
//! - **`ListContainer`**: the ordered item collection, mutated only through
//!   its own operations, raising one `"change"` per successful mutation
//!
//! ## Data Flow
//!
//! ```text
//! interaction ──► controller ──► ListContainer::{add,update,delete}_item
//!                                         │
//!                                         ▼
//!                                 publish("change")
//!                                         │
//!                                         ▼
//!                               subscribers re-render
//! ```
//!
//! Everything is single-threaded and synchronous: a mutation returns only
//! after every subscriber has run.

pub mod container;
pub mod item;
pub mod notifier;

// Re-export commonly used types
pub use container::{CHANGE, ListContainer};
pub use item::{DeleteItem, IdGenerator, Item, ItemId, UpdateItem};
pub use notifier::{Handler, Notifier};
