//! Controller configuration.

use crate::error::ConfigError;
use std::env::VarError;

/// Environment variable overriding [`ControllerConfig::count_label`]
pub const COUNT_LABEL_VAR: &str = "TASKLIST_COUNT_LABEL";

/// Environment variable overriding [`ControllerConfig::render_on_mount`]
pub const RENDER_ON_MOUNT_VAR: &str = "TASKLIST_RENDER_ON_MOUNT";

/// Configuration for [`Controller`](crate::Controller) instances
///
/// # Example
///
/// ```
/// use tasklist_runtime::ControllerConfig;
///
/// let config = ControllerConfig::default()
///     .with_count_label("Tasks")
///     .with_render_on_mount(true);
///
/// assert_eq!(config.count_text(3), "Tasks: 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Label shown before the total count
    pub count_label: String,
    /// Render once immediately after mounting
    pub render_on_mount: bool,
}

impl ControllerConfig {
    /// Set the count label
    #[must_use]
    pub fn with_count_label(mut self, label: impl Into<String>) -> Self {
        self.count_label = label.into();
        self
    }

    /// Set whether mount renders immediately
    #[must_use]
    pub const fn with_render_on_mount(mut self, render: bool) -> Self {
        self.render_on_mount = render;
        self
    }

    /// Text for the count display, `"<label>: <count>"`
    #[must_use]
    pub fn count_text(&self, count: usize) -> String {
        format!("{}: {count}", self.count_label)
    }

    /// Checks the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCountLabel`] if the label is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count_label.trim().is_empty() {
            return Err(ConfigError::EmptyCountLabel);
        }
        Ok(())
    }

    /// Defaults overridden by `TASKLIST_COUNT_LABEL` and
    /// `TASKLIST_RENDER_ON_MOUNT`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotUnicode`] for a non-unicode variable and
    /// [`ConfigError::EmptyCountLabel`] for a blank label.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name))
    }

    /// Like [`from_env`](Self::from_env) with a custom variable lookup
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let mut config = Self::default();

        if let Some(label) = read(&lookup, COUNT_LABEL_VAR)? {
            config.count_label = label;
        }
        if let Some(flag) = read(&lookup, RENDER_ON_MOUNT_VAR)? {
            config.render_on_mount = parse_flag(&flag);
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            count_label: "Total".to_string(),
            render_on_mount: false,
        }
    }
}

fn read<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&'static str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
