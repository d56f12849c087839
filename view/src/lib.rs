//! # Tasklist View
//!
//! Pure state-to-element transformations for tasklist.
//!
//! ## Components
//!
//! - **Markup**: [`Element`] trees rendered with escaped text and attributes
//! - **Item View**: one `<li>` per item with toggle and delete controls
//! - **List View**: a `<ul>` composing one item view per item
//! - **DOM**: handle traits the controller drives, a [`mount`] function, and
//!   in-memory handles
//!
//! Views never touch the container. They read an item snapshot and attach
//! [`ItemCallbacks`] to the produced elements; the callbacks fire only when
//! an event is dispatched to the element.
//!
//! ## Example
//!
//! ```
//! use tasklist_core::ListContainer;
//! use tasklist_view::{ItemCallbacks, MountPoint, list_view, mount};
//!
//! let container = ListContainer::seeded(["Buy milk"]);
//! let callbacks = ItemCallbacks::new(|_| {}, |_| {});
//! let target = MountPoint::new();
//!
//! mount(list_view(&container.items(), &callbacks), &target);
//! assert!(target.html().contains("Buy milk"));
//! ```

pub mod dom;
pub mod event;
pub mod item_view;
pub mod list_view;
pub mod markup;

// Re-export commonly used types
pub use dom::{
    Form, InputHandle, ListenerTarget, MountPoint, MountTarget, TextDisplay, TextHandle,
    TextInput, mount,
};
pub use event::{Event, EventKind, EventListener};
pub use item_view::{ItemCallbacks, item_view};
pub use list_view::list_view;
pub use markup::{Element, Node, escape};
