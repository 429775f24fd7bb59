//! Startup checks and first-run seeding of the environment file.

use super::{App, Flow};
use crate::context::ExecutionContext;
use crate::presentation::style;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use vllm_switch_runtime::env_file;
use vllm_switch_runtime::{SeedOutcome, ServiceController};

/// Fail unless the compose CLI answers `--version` and the compose file exists.
pub fn check_prerequisites(ctx: &ExecutionContext, services: &dyn ServiceController) -> Result<()> {
    if !ctx.project_dir().is_dir() {
        bail!(
            "project directory {} does not exist",
            ctx.project_dir().display()
        );
    }

    match services.version() {
        Ok(version) => log::debug!("compose CLI: {}", version),
        Err(e) => {
            log::debug!("compose version check failed: {}", e);
            bail!(
                "{} is not installed or not in PATH",
                ctx.settings().compose_display()
            );
        }
    }

    let compose_file = ctx.compose_file_path();
    if !compose_file.is_file() {
        bail!(
            "{} not found in {}\nRun from the directory holding the compose stack or pass --project-dir",
            ctx.settings().compose_file.display(),
            ctx.project_dir().display()
        );
    }

    Ok(())
}

/// Copy the template to the environment file on first run.
pub fn seed_env_file<R: BufRead, W: Write>(app: &mut App<'_, R, W>) -> Result<Flow> {
    let env_path = app.ctx.env_path();
    let template_path = app.ctx.template_path();
    if env_path.exists() || !template_path.exists() {
        return Ok(Flow::Continue);
    }

    app.console.line(style::warning(format!(
        "No {} file found. Creating from {}...",
        app.ctx.env_name(),
        app.ctx.template_name()
    )))?;

    match env_file::seed_from_template(&env_path, &template_path) {
        Ok(SeedOutcome::Created) => {
            app.console.line(style::success(format!(
                "✓ Created {} file",
                app.ctx.env_name()
            )))?;
            app.console.line(style::warning(format!(
                "⚠ Please edit {} and set your API keys before starting services!",
                app.ctx.env_name()
            )))?;
            Ok(Flow::from_pause(app.console.pause()?))
        }
        Ok(outcome) => {
            log::debug!("seeding skipped: {:?}", outcome);
            Ok(Flow::Continue)
        }
        Err(e) => {
            log::error!("seeding {} failed: {}", env_path.display(), e);
            app.console.line(style::failure(format!(
                "✗ Failed to create {}: {}",
                app.ctx.env_name(),
                e
            )))?;
            Ok(Flow::Continue)
        }
    }
}
