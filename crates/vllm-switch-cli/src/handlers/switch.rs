use super::services::{start_services, stop_services};
use super::{App, Flow};
use crate::presentation::style;
use anyhow::Result;
use std::io::{BufRead, Write};
use vllm_switch_runtime::env_file;
use vllm_switch_types::ModelPreset;

/// Switch the stack to `preset`, or offer a restart when it is already active.
pub fn handle_switch<R: BufRead, W: Write>(
    app: &mut App<'_, R, W>,
    preset: &ModelPreset,
) -> Result<Flow> {
    let current = env_file::current_model(&app.ctx.env_path());
    if current.as_deref() == Some(preset.model_id) {
        return offer_restart(app, preset);
    }

    app.console.blank()?;
    app.console.line(style::warning(format!(
        "This will stop all services and switch to {}",
        preset.name
    )))?;

    match app.console.confirm("Continue?")? {
        None => return Ok(Flow::Quit),
        Some(true) => switch_to(app, preset)?,
        Some(false) => {
            app.console.blank()?;
            app.console.line(style::warning("Operation cancelled"))?;
        }
    }

    Ok(Flow::from_pause(app.console.pause()?))
}

fn offer_restart<R: BufRead, W: Write>(
    app: &mut App<'_, R, W>,
    preset: &ModelPreset,
) -> Result<Flow> {
    app.console.blank()?;
    app.console
        .line(style::warning("This model is already selected."))?;

    match app.console.confirm("Restart services anyway?")? {
        None => return Ok(Flow::Quit),
        Some(true) => {
            if stop_services(app)? && start_services(app, preset)? {
                app.console.blank()?;
                app.console.line(style::success("✓ Services restarted"))?;
            }
        }
        Some(false) => {}
    }

    Ok(Flow::from_pause(app.console.pause()?))
}

/// Stop, rewrite the environment file, start. Each step runs only if the
/// previous one succeeded.
fn switch_to<R: BufRead, W: Write>(app: &mut App<'_, R, W>, preset: &ModelPreset) -> Result<()> {
    if !stop_services(app)? {
        app.console.blank()?;
        app.console
            .line(style::failure("✗ Failed to stop existing services"))?;
        return Ok(());
    }

    let env_path = app.ctx.env_path();
    if let Err(e) = env_file::update(&env_path, &app.ctx.template_path(), preset) {
        log::error!("updating {} failed: {}", env_path.display(), e);
        app.console.blank()?;
        app.console.line(style::failure(format!(
            "✗ Failed to update configuration: {}",
            e
        )))?;
        return Ok(());
    }
    log::info!("{} now selects {}", env_path.display(), preset.model_id);
    app.console.line(style::success("✓ Configuration updated"))?;

    if start_services(app, preset)? {
        app.console.blank()?;
        app.console.line(style::success(format!(
            "✓ Successfully switched to {}",
            preset.name
        )))?;
    } else {
        app.console.blank()?;
        app.console.line(style::failure("✗ Failed to start services"))?;
    }
    Ok(())
}
