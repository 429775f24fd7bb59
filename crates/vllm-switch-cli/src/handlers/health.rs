use super::{App, Flow};
use crate::presentation::style;
use crate::presentation::views::HealthReportView;
use anyhow::Result;
use std::io::{BufRead, Write};

pub fn handle_health<R: BufRead, W: Write>(app: &mut App<'_, R, W>) -> Result<Flow> {
    app.console.blank()?;
    app.console.line(style::accent("Checking service health..."))?;
    app.console.blank()?;

    let settings = app.ctx.settings();
    let api = app.probe.probe(&settings.health_url());
    let webui = app.probe.probe(&settings.webui_url);
    log::debug!("health: api={:?} webui={:?}", api, webui);

    app.console.show(HealthReportView {
        api: &api,
        webui: &webui,
    })?;
    app.console.blank()?;
    app.console.line(style::info("Docker containers:"))?;
    app.console.flush()?;

    if let Err(e) = app.services.list_containers() {
        log::error!("container listing failed: {}", e);
        app.console
            .line(style::failure(format!("✗ Failed to list containers: {}", e)))?;
    }

    Ok(Flow::from_pause(app.console.pause()?))
}
