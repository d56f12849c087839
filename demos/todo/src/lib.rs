//! Terminal todo list built on the tasklist container and controller.
//!
//! There is no browser here: the page is made of the in-memory handles from
//! `tasklist-view`, and each line typed at the prompt becomes one user
//! interaction on that page.
//!
//! - `add <title>` types the title into the input and submits the form
//! - `toggle <id>` ticks or unticks the item's checkbox
//! - `delete <id>` clicks the item's delete button
//! - `show` prints the mounted markup and the count
//! - `list` prints the items as JSON
//! - `quit` leaves
//!
//! # Quick Start
//!
//! ```
//! use todo::{App, Command};
//! use tasklist_runtime::ControllerConfig;
//!
//! let config = ControllerConfig::default().with_render_on_mount(true);
//! let app = App::new(["Water plants"], config);
//! app.execute(&"add Buy milk".parse::<Command>().unwrap()).unwrap();
//!
//! assert_eq!(app.count_text(), "Total: 2");
//! ```

use serde::Serialize;
use std::rc::Rc;
use std::str::FromStr;
use tasklist_core::{Item, ItemId, ListContainer};
use tasklist_runtime::{Controller, ControllerConfig, UiHandles};
use tasklist_view::{Event, EventKind, Form, InputHandle, MountPoint, TextDisplay, TextInput};

/// Errors from parsing or executing a prompt line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("unknown command: {0}")]
    Unknown(String),

    /// The command needs an argument that was not given
    #[error("`{command}` needs {what}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// What was expected
        what: &'static str,
    },

    /// The id argument is not a number
    #[error("not an item id: {0}")]
    BadId(String),

    /// No item with this id is on the page
    #[error("no item with id {0}")]
    NoSuchItem(ItemId),
}

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type and submit a title
    Add(String),
    /// Tick or untick a checkbox
    Toggle(ItemId),
    /// Click a delete button
    Delete(ItemId),
    /// Print the mounted markup
    Show,
    /// Print the items as JSON
    List,
    /// Leave the prompt
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match name {
            "add" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument {
                        command: "add",
                        what: "a title",
                    })
                } else {
                    Ok(Self::Add(rest.to_string()))
                }
            }
            "toggle" => parse_id("toggle", rest).map(Self::Toggle),
            "delete" | "rm" => parse_id("delete", rest).map(Self::Delete),
            "show" => Ok(Self::Show),
            "list" => Ok(Self::List),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<ItemId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            what: "an item id",
        });
    }
    arg.parse().map_err(|_| CommandError::BadId(arg.to_string()))
}

/// What the prompt should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The page changed or was inspected; print this
    Print(String),
    /// Nothing to print
    Quiet,
    /// Stop reading input
    Quit,
}

/// Item summary printed by `list`
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    total: usize,
    completed: usize,
    items: &'a [Item],
}

/// The page: a container, its controller, and the handles it renders into
#[derive(Debug)]
pub struct App {
    container: Rc<ListContainer>,
    controller: Rc<Controller>,
    form: Rc<Form>,
    input: Rc<TextInput>,
    mount_point: Rc<MountPoint>,
    count: Rc<TextDisplay>,
}

impl App {
    /// Seeds a container with `titles` and mounts a controller over it
    pub fn new<I, S>(titles: I, config: ControllerConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let container = Rc::new(ListContainer::seeded(titles));
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
        controller.mount();

        Self {
            container,
            controller,
            form,
            input,
            mount_point,
            count,
        }
    }

    /// Runs one command against the page
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NoSuchItem`] if a toggle or delete names an
    /// item that is not rendered.
    pub fn execute(&self, command: &Command) -> Result<Outcome, CommandError> {
        match command {
            Command::Add(title) => {
                self.input.set_value(title);
                self.form.submit();
                Ok(self.summary())
            }
            Command::Toggle(id) => {
                self.click(*id, "toggle", EventKind::Change)?;
                Ok(self.summary())
            }
            Command::Delete(id) => {
                self.click(*id, "delete", EventKind::Click)?;
                Ok(self.summary())
            }
            Command::Show => Ok(Outcome::Print(self.render())),
            Command::List => Ok(self.snapshot().map_or(Outcome::Quiet, Outcome::Print)),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn click(&self, id: ItemId, class: &str, kind: EventKind) -> Result<(), CommandError> {
        let key = id.to_string();
        let hit = self.mount_point.dispatch_by(
            |root| {
                root.find(|el| el.get_attr("data-id") == Some(key.as_str()))
                    .and_then(|li| li.find(|el| el.has_class(class)))
            },
            &Event::new(kind),
        );
        if hit {
            Ok(())
        } else {
            Err(CommandError::NoSuchItem(id))
        }
    }

    fn summary(&self) -> Outcome {
        Outcome::Print(self.count_text())
    }

    /// Mounted markup followed by the count line
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}\n{}", self.mount_point.html(), self.count_text())
    }

    /// Current count display text
    #[must_use]
    pub fn count_text(&self) -> String {
        self.count.text()
    }

    /// Items as pretty JSON, or `None` if serialization fails
    #[must_use]
    pub fn snapshot(&self) -> Option<String> {
        let items = self.container.items();
        let snapshot = Snapshot {
            total: items.len(),
            completed: self.container.completed_count(),
            items: &items,
        };
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => Some(json),
            Err(error) => {
                tracing::warn!(%error, "failed to serialize snapshot");
                None
            }
        }
    }

    /// The container behind the page
    #[must_use]
    pub fn container(&self) -> &ListContainer {
        &self.container
    }

    /// Detaches the controller from the page
    pub fn close(&self) {
        self.controller.unmount();
    }
}
