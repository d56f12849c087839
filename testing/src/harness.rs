//! A mounted controller wired to in-memory handles.

use std::rc::Rc;
use tasklist_core::{Item, ItemId, ListContainer};
use tasklist_runtime::{Controller, ControllerConfig, UiHandles};
use tasklist_view::{Event, EventKind, Form, InputHandle, MountPoint, TextDisplay, TextInput};

/// Everything a UI-level test needs: container, controller, and the
/// in-memory page it drives
///
/// # Example
///
/// ```
/// use tasklist_testing::Harness;
///
/// let page = Harness::mounted();
/// page.type_and_submit("Buy milk");
/// assert_eq!(page.count_text(), "Total: 1");
/// ```
#[derive(Debug)]
pub struct Harness {
    /// Container under test
    pub container: Rc<ListContainer>,
    /// Controller bound to the handles below
    pub controller: Rc<Controller>,
    /// Form the controller listens on
    pub form: Rc<Form>,
    /// Text input read on submit
    pub input: Rc<TextInput>,
    /// Where the list is mounted
    pub mount_point: Rc<MountPoint>,
    /// Count display
    pub count: Rc<TextDisplay>,
}

impl Harness {
    /// Builds an unmounted harness around `container`
    #[must_use]
    pub fn new(container: ListContainer, config: ControllerConfig) -> Self {
        let container = Rc::new(container);
        let form = Rc::new(Form::new());
        let input = Rc::new(TextInput::new());
        let mount_point = Rc::new(MountPoint::new());
        let count = Rc::new(TextDisplay::new());

        let controller = Controller::new(
            Rc::clone(&container),
            UiHandles {
                form: form.clone(),
                input: input.clone(),
                mount_point: mount_point.clone(),
                count_display: count.clone(),
            },
            config,
        );

        Self {
            container,
            controller,
            form,
            input,
            mount_point,
            count,
        }
    }

    /// Empty container, default config, already mounted
    #[must_use]
    pub fn mounted() -> Self {
        let harness = Self::new(ListContainer::new(), ControllerConfig::default());
        harness.controller.mount();
        harness
    }

    /// Types `text` into the input and submits the form.
    ///
    /// Returns whether the default action was prevented.
    pub fn type_and_submit(&self, text: &str) -> bool {
        self.input.set_value(text);
        self.form.submit()
    }

    /// Toggles the checkbox of item `id`. Returns `false` if it is not rendered.
    pub fn toggle(&self, id: ItemId) -> bool {
        self.dispatch_in_item(id, "toggle", EventKind::Change)
    }

    /// Clicks the delete button of item `id`. Returns `false` if it is not rendered.
    pub fn click_delete(&self, id: ItemId) -> bool {
        self.dispatch_in_item(id, "delete", EventKind::Click)
    }

    fn dispatch_in_item(&self, id: ItemId, class: &str, kind: EventKind) -> bool {
        let id = id.to_string();
        self.mount_point.dispatch_by(
            |root| {
                root.find(|el| el.get_attr("data-id") == Some(id.as_str()))
                    .and_then(|li| li.find(|el| el.has_class(class)))
            },
            &Event::new(kind),
        )
    }

    /// Mounted markup
    #[must_use]
    pub fn html(&self) -> String {
        self.mount_point.html()
    }

    /// Count display text
    #[must_use]
    pub fn count_text(&self) -> String {
        self.count.text()
    }

    /// Number of full renders so far
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.mount_point.mount_count()
    }

    /// Current item snapshot
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.container.items()
    }
}
