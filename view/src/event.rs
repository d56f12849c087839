//! Interaction events and listeners.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Kinds of user interaction the views react to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A button or control was clicked
    Click,
    /// A form control's value changed (checkbox toggled)
    Change,
    /// A form was submitted
    Submit,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Click => "click",
            Self::Change => "change",
            Self::Submit => "submit",
        };
        f.write_str(name)
    }
}

/// A dispatched interaction
#[derive(Debug)]
pub struct Event {
    kind: EventKind,
    default_prevented: Cell<bool>,
}

impl Event {
    /// Creates an event of `kind`
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            default_prevented: Cell::new(false),
        }
    }

    /// The interaction kind
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Suppresses the default action (navigation, form post)
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    /// Whether a listener called [`prevent_default`](Self::prevent_default)
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Callback attached to an element or handle.
///
/// Clones share identity, which is what detaching compares.
#[derive(Clone)]
pub struct EventListener(Rc<dyn Fn(&Event)>);

impl EventListener {
    /// Wraps a closure as a listener
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Event) + 'static,
    {
        Self(Rc::new(f))
    }

    /// Invokes the listener
    pub fn call(&self, event: &Event) {
        (self.0)(event);
    }

    /// Returns `true` if both values refer to the same closure
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventListener")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
