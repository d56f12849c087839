//! Metric names and descriptions for the controller.
//!
//! The runtime only records through the `metrics` facade. Installing a
//! recorder (Prometheus or otherwise) is left to the host binary, which can
//! call [`describe_metrics`] once after installing it.

use metrics::{describe_counter, describe_histogram};

/// Change-driven re-renders
pub const RENDERS_TOTAL: &str = "tasklist_controller_renders_total";

/// Handled form submissions
pub const SUBMITS_TOTAL: &str = "tasklist_controller_submits_total";

/// Effective mounts (double mounts are not counted)
pub const MOUNTS_TOTAL: &str = "tasklist_controller_mounts_total";

/// Wall time of one full view regeneration plus mount
pub const RENDER_DURATION_SECONDS: &str = "tasklist_controller_render_duration_seconds";

/// Register all metric descriptions.
pub fn describe_metrics() {
    describe_counter!(RENDERS_TOTAL, "Total number of full view re-renders");
    describe_counter!(SUBMITS_TOTAL, "Total number of handled form submissions");
    describe_counter!(MOUNTS_TOTAL, "Total number of controller mounts");
    describe_histogram!(
        RENDER_DURATION_SECONDS,
        "Time taken to regenerate and mount the list view"
    );
}
