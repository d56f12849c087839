//! # Tasklist Runtime
//!
//! Runtime wiring for the tasklist architecture.
//!
//! This crate provides the [`Controller`] that closes the unidirectional
//! update loop between a [`ListContainer`](tasklist_core::ListContainer) and
//! the views in `tasklist-view`.
//!
//! ## Core Components
//!
//! - **Controller**: translates interactions into container mutations and
//!   container changes into full re-renders
//! - **Config**: count label and mount-time rendering, from code or the
//!   environment
//! - **Metrics**: counters and a render-duration histogram recorded through
//!   the `metrics` facade
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use tasklist_core::ListContainer;
//! use tasklist_runtime::{Controller, ControllerConfig, UiHandles};
//! use tasklist_view::{Form, InputHandle, MountPoint, TextDisplay, TextInput};
//!
//! let form = Rc::new(Form::new());
//! let input = Rc::new(TextInput::new());
//! let mount_point = Rc::new(MountPoint::new());
//! let count = Rc::new(TextDisplay::new());
//!
//! let controller = Controller::new(
//!     Rc::new(ListContainer::new()),
//!     UiHandles {
//!         form: form.clone(),
//!         input: input.clone(),
//!         mount_point: mount_point.clone(),
//!         count_display: count.clone(),
//!     },
//!     ControllerConfig::default(),
//! );
//! controller.mount();
//!
//! input.set_value("Buy milk");
//! form.submit();
//!
//! assert!(mount_point.html().contains("Buy milk"));
//! assert_eq!(count.text(), "Total: 1");
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod metrics;

pub use config::ControllerConfig;
pub use controller::{Controller, UiHandles};
pub use error::ConfigError;
