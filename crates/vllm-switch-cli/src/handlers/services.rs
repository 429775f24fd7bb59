use super::{App, Flow};
use crate::interrupt::LogTailGuard;
use crate::presentation::style;
use crate::presentation::views::EndpointsView;
use anyhow::Result;
use std::io::{BufRead, Write};
use vllm_switch_types::ModelPreset;

/// Bring the stack down, reporting the outcome. Returns whether it worked.
pub fn stop_services<R: BufRead, W: Write>(app: &mut App<'_, R, W>) -> Result<bool> {
    app.console.blank()?;
    app.console.line(style::warning("Stopping all services..."))?;
    app.console.flush()?;

    match app.services.stop_all() {
        Ok(()) => {
            app.console.line(style::success("✓ All services stopped"))?;
            Ok(true)
        }
        Err(e) => {
            log::error!("stop failed: {}", e);
            app.console
                .line(style::failure(format!("✗ Failed to stop services: {}", e)))?;
            Ok(false)
        }
    }
}

/// Bring the stack up for `preset`, printing where to reach it on success.
pub fn start_services<R: BufRead, W: Write>(
    app: &mut App<'_, R, W>,
    preset: &ModelPreset,
) -> Result<bool> {
    app.console.blank()?;
    app.console.line(style::accent(format!(
        "Starting services with {}...",
        preset.name
    )))?;
    app.console.line(style::warning(
        "This may take 1-3 minutes for first startup...",
    ))?;
    app.console.flush()?;

    match app.services.start_all() {
        Ok(()) => {
            app.console.line(style::success("✓ Services started"))?;
            app.console.show(EndpointsView::new(app.ctx.settings()))?;
            Ok(true)
        }
        Err(e) => {
            log::error!("start failed: {}", e);
            app.console
                .line(style::failure(format!("✗ Failed to start services: {}", e)))?;
            Ok(false)
        }
    }
}

pub fn handle_stop<R: BufRead, W: Write>(app: &mut App<'_, R, W>) -> Result<Flow> {
    stop_services(app)?;
    Ok(Flow::from_pause(app.console.pause()?))
}

pub fn handle_restart<R: BufRead, W: Write>(app: &mut App<'_, R, W>) -> Result<Flow> {
    app.console.blank()?;
    app.console.line(style::warning("Restarting services..."))?;
    app.console.flush()?;

    match app.services.restart_all() {
        Ok(()) => app.console.line(style::success("✓ Services restarted"))?,
        Err(e) => {
            log::error!("restart failed: {}", e);
            app.console
                .line(style::failure(format!("✗ Failed to restart services: {}", e)))?;
        }
    }

    Ok(Flow::from_pause(app.console.pause()?))
}

pub fn handle_logs<R: BufRead, W: Write>(app: &mut App<'_, R, W>) -> Result<Flow> {
    app.console.blank()?;
    app.console.line(style::accent("Viewing logs..."))?;
    app.console.line(style::warning("(Press Ctrl+C to exit)"))?;
    app.console.blank()?;
    app.console.flush()?;

    let result = {
        let _guard = LogTailGuard::enter();
        app.services.tail_logs()
    };

    match result {
        Ok(()) => {
            app.console.blank()?;
            app.console.line(style::success("Exiting log viewer"))?;
        }
        Err(e) => {
            log::error!("log tail failed: {}", e);
            app.console
                .line(style::failure(format!("✗ Failed to show logs: {}", e)))?;
        }
    }

    Ok(Flow::from_pause(app.console.pause()?))
}
