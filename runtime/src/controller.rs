//! The controller closing the update loop.
//!
//! ```text
//! submit / toggle / delete ─► Controller::handle_* ─► ListContainer mutation
//!                                                              │
//!        mount point ◄── list_view(items) ◄── handle_change ◄──┘ "change"
//! ```
//!
//! A [`Controller`] is either unmounted or mounted. Mounting subscribes the
//! change handler to the container and attaches the submit listener to the
//! form; unmounting detaches exactly those two. Both transitions are
//! idempotent.
//!
//! Every listener the controller hands out holds a `Weak` back reference,
//! so neither the container nor the form keeps the controller alive.

use crate::config::ControllerConfig;
use crate::metrics::{MOUNTS_TOTAL, RENDER_DURATION_SECONDS, RENDERS_TOTAL, SUBMITS_TOTAL};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Instant;
use tasklist_core::{DeleteItem, Handler, ListContainer, UpdateItem};
use tasklist_view::{
    Event, EventKind, EventListener, InputHandle, ItemCallbacks, ListenerTarget, MountTarget,
    TextHandle, list_view, mount,
};

/// Pre-existing UI attachment points the controller drives
#[derive(Clone)]
pub struct UiHandles {
    /// Form whose submit adds an item
    pub form: Rc<dyn ListenerTarget>,
    /// Text input read on submit and cleared afterwards
    pub input: Rc<dyn InputHandle>,
    /// Where the rendered list is mounted
    pub mount_point: Rc<dyn MountTarget>,
    /// Receives `"<label>: <count>"` after every render
    pub count_display: Rc<dyn TextHandle>,
}

impl fmt::Debug for UiHandles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiHandles").finish_non_exhaustive()
    }
}

/// Mount state
enum Phase {
    Unmounted,
    Mounted {
        on_change: Handler,
        on_submit: EventListener,
    },
}

/// Wires UI interactions to container mutations and container changes back
/// to a full re-render
pub struct Controller {
    container: Rc<ListContainer>,
    ui: UiHandles,
    config: ControllerConfig,
    phase: RefCell<Phase>,
    this: Weak<Controller>,
}

impl Controller {
    /// Creates an unmounted controller
    #[must_use]
    pub fn new(container: Rc<ListContainer>, ui: UiHandles, config: ControllerConfig) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            container,
            ui,
            config,
            phase: RefCell::new(Phase::Unmounted),
            this: this.clone(),
        })
    }

    /// The container this controller drives
    #[must_use]
    pub fn container(&self) -> &Rc<ListContainer> {
        &self.container
    }

    /// Whether the controller is mounted
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        matches!(*self.phase.borrow(), Phase::Mounted { .. })
    }

    /// Subscribes to container changes and attaches the submit listener.
    ///
    /// Mounting twice is ignored.
    pub fn mount(&self) {
        if self.is_mounted() {
            tracing::debug!("controller already mounted");
            return;
        }

        let on_change = {
            let this = self.this.clone();
            Handler::new(move || {
                if let Some(controller) = this.upgrade() {
                    controller.handle_change();
                }
            })
        };
        let on_submit = {
            let this = self.this.clone();
            EventListener::new(move |event| {
                if let Some(controller) = this.upgrade() {
                    controller.handle_submit(event);
                }
            })
        };

        // Phase is set before any handle is touched; handles may call back in.
        *self.phase.borrow_mut() = Phase::Mounted {
            on_change: on_change.clone(),
            on_submit: on_submit.clone(),
        };
        self.container.on_change(&on_change);
        self.ui.form.add_event_listener(EventKind::Submit, &on_submit);

        metrics::counter!(MOUNTS_TOTAL).increment(1);
        tracing::debug!(render_on_mount = self.config.render_on_mount, "controller mounted");

        if self.config.render_on_mount {
            self.handle_change();
        }
    }

    /// Reverses [`mount`](Self::mount). Safe to call when not mounted.
    pub fn unmount(&self) {
        let previous = std::mem::replace(&mut *self.phase.borrow_mut(), Phase::Unmounted);

        match previous {
            Phase::Mounted {
                on_change,
                on_submit,
            } => {
                self.container.off_change(&on_change);
                self.ui
                    .form
                    .remove_event_listener(EventKind::Submit, &on_submit);
                tracing::debug!("controller unmounted");
            }
            Phase::Unmounted => tracing::debug!("unmount ignored, controller not mounted"),
        }
    }

    /// Handles a form submission: prevents the default action, adds the
    /// input's text as a new item, and clears the input.
    pub fn handle_submit(&self, event: &Event) {
        event.prevent_default();
        let title = self.ui.input.value();
        self.handle_add(title);
        self.ui.input.set_value("");
        metrics::counter!(SUBMITS_TOTAL).increment(1);
    }

    /// Creates an item with a fresh id and offers it to the container
    pub fn handle_add(&self, title: String) {
        let item = self.container.create_item(title);
        self.container.add_item(item);
    }

    /// Forwards a toggle to the container
    pub fn handle_update(&self, update: UpdateItem) {
        self.container.update_item(update);
    }

    /// Forwards a delete to the container
    pub fn handle_delete(&self, delete: DeleteItem) {
        self.container.delete_item(delete);
    }

    /// Re-derives the whole view from the container, mounts it in place of
    /// the previous content, and refreshes the count display.
    pub fn handle_change(&self) {
        let started = Instant::now();
        let items = self.container.items();

        let element = list_view(&items, &self.callbacks());
        mount(element, &*self.ui.mount_point);
        self.ui
            .count_display
            .set_text_content(&self.config.count_text(self.container.total_count()));

        metrics::counter!(RENDERS_TOTAL).increment(1);
        metrics::histogram!(RENDER_DURATION_SECONDS).record(started.elapsed().as_secs_f64());
        tracing::trace!(items = items.len(), "view re-rendered");
    }

    fn callbacks(&self) -> ItemCallbacks {
        let on_update = self.this.clone();
        let on_delete = self.this.clone();
        ItemCallbacks::new(
            move |update| {
                if let Some(controller) = on_update.upgrade() {
                    controller.handle_update(update);
                }
            },
            move |delete| {
                if let Some(controller) = on_delete.upgrade() {
                    controller.handle_delete(delete);
                }
            },
        )
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Phase::Mounted {
            on_change,
            on_submit,
        } = std::mem::replace(self.phase.get_mut(), Phase::Unmounted)
        {
            self.container.off_change(&on_change);
            self.ui
                .form
                .remove_event_listener(EventKind::Submit, &on_submit);
        }
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("mounted", &self.is_mounted())
            .field("config", &self.config)
            .field("items", &self.container.total_count())
            .finish_non_exhaustive()
    }
}
