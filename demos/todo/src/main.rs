//! Interactive todo list on stdin.
//!
//! Command-line arguments seed the list. `TASKLIST_COUNT_LABEL` changes the
//! count label; the page always renders on start.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use tasklist_runtime::ControllerConfig;
use todo::{App, Command, Outcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=info,tasklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
    tasklist_runtime::metrics::describe_metrics();

    let config = ControllerConfig::from_env()
        .context("invalid controller configuration")?
        .with_render_on_mount(true);
    let app = App::new(std::env::args().skip(1), config);
    tracing::info!(items = app.container().total_count(), "todo list ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", app.render())?;
    writeln!(out, "commands: add <title> | toggle <id> | delete <id> | show | list | quit")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| app.execute(&command));
        match result {
            Ok(Outcome::Print(text)) => writeln!(out, "{text}")?,
            Ok(Outcome::Quiet) => {}
            Ok(Outcome::Quit) => break,
            Err(error) => writeln!(out, "error: {error}")?,
        }
        out.flush()?;
    }

    app.close();
    tracing::info!(
        total = app.container().total_count(),
        completed = app.container().completed_count(),
        "todo list closed"
    );
    Ok(())
}
