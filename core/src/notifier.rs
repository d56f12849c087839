//! Keyed publish/subscribe primitive.
//!
//! A [`Notifier`] maps event keys to the [`Handler`]s registered under them.
//! Events are pure signals: [`Notifier::publish`] invokes every handler for a
//! key synchronously on the calling turn and passes no payload.
//!
//! # Handler identity
//!
//! Handlers are compared by pointer identity, not by behaviour. Cloning a
//! [`Handler`] yields the *same* handler, so the clone can later be used to
//! unsubscribe:
//!
//! ```
//! use tasklist_core::notifier::{Handler, Notifier};
//!
//! let notifier = Notifier::new();
//! let handler = Handler::new(|| println!("changed"));
//!
//! notifier.subscribe("change", &handler);
//! notifier.subscribe("change", &handler); // idempotent
//! assert_eq!(notifier.handler_count("change"), 1);
//!
//! notifier.unsubscribe("change", &handler);
//! assert_eq!(notifier.handler_count("change"), 0);
//! ```
//!
//! # Re-entrancy
//!
//! `publish` snapshots the handler list before invoking anything, so handlers
//! may subscribe, unsubscribe, or publish again without failing the outer
//! call. Changes made during a publish take effect from the next publish.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A zero-argument callback registered with a [`Notifier`].
///
/// Cheap to clone; clones share identity.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn()>);

impl Handler {
    /// Wraps a closure as a handler
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self(Rc::new(f))
    }

    /// Invokes the handler
    pub fn call(&self) {
        (self.0)();
    }

    /// Returns `true` if both values refer to the same registered closure
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Handler {}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Handlers registered under one key, in registration order.
type HandlerList = SmallVec<[Handler; 4]>;

/// Generic keyed publish/subscribe registry.
///
/// Single-threaded: the registry lives behind a `RefCell` and all methods
/// take `&self`, so a notifier can be shared through `Rc` and mutated from
/// inside its own handlers.
#[derive(Default)]
pub struct Notifier {
    handlers: RefCell<HashMap<String, HandlerList>>,
}

impl Notifier {
    /// Creates a notifier with no registrations
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `key`.
    ///
    /// Registering the same handler twice for the same key is a no-op.
    pub fn subscribe(&self, key: &str, handler: &Handler) {
        let mut handlers = self.handlers.borrow_mut();
        let list = handlers.entry(key.to_owned()).or_default();

        if list.iter().any(|h| h.same_as(handler)) {
            tracing::trace!(key, "handler already subscribed");
            return;
        }

        list.push(handler.clone());
        tracing::trace!(key, handlers = list.len(), "handler subscribed");
    }

    /// Removes `handler` from `key`. Unknown handlers are ignored.
    pub fn unsubscribe(&self, key: &str, handler: &Handler) {
        let mut handlers = self.handlers.borrow_mut();
        let Some(list) = handlers.get_mut(key) else {
            return;
        };

        list.retain(|h| !h.same_as(handler));
        tracing::trace!(key, handlers = list.len(), "handler unsubscribed");

        if list.is_empty() {
            handlers.remove(key);
        }
    }

    /// Invokes every handler currently registered under `key`, in
    /// registration order.
    pub fn publish(&self, key: &str) {
        // Snapshot so handlers can touch the registry while we iterate.
        let snapshot: HandlerList = self
            .handlers
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or_default();

        tracing::trace!(key, handlers = snapshot.len(), "publishing");

        for handler in &snapshot {
            handler.call();
        }
    }

    /// Number of handlers registered under `key`
    #[must_use]
    pub fn handler_count(&self, key: &str) -> usize {
        self.handlers.borrow().get(key).map_or(0, SmallVec::len)
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.borrow();
        let mut keys: Vec<_> = handlers.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        keys.sort_unstable();
        f.debug_struct("Notifier").field("handlers", &keys).finish()
    }
}
