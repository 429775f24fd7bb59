//! The interactive loop: redraw, read one choice, dispatch.

use super::health::handle_health;
use super::services::{handle_logs, handle_restart, handle_stop};
use super::switch::handle_switch;
use super::{App, Flow};
use crate::presentation::style;
use crate::presentation::views::MenuView;
use anyhow::Result;
use std::io::{BufRead, Write};
use vllm_switch_runtime::env_file;
use vllm_switch_types::{PRESETS, find_preset};

const PROMPT: &str = "Select a model or action: ";

/// Run until the user quits or input runs out.
pub fn run<R: BufRead, W: Write>(app: &mut App<'_, R, W>) -> Result<()> {
    loop {
        app.console.clear()?;

        let current = env_file::current_model(&app.ctx.env_path());
        let status = app.services.server_status();
        app.console
            .show(MenuView::new(current.as_deref(), status, PRESETS))?;

        let Some(choice) = app.console.ask(PROMPT)? else {
            log::debug!("input closed at the menu prompt");
            break;
        };

        if dispatch(app, &choice)? == Flow::Quit {
            break;
        }
    }

    goodbye(app)
}

pub fn goodbye<R: BufRead, W: Write>(app: &mut App<'_, R, W>) -> Result<()> {
    app.console.blank()?;
    app.console.line(style::accent("Goodbye!"))?;
    app.console.blank()?;
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(app: &mut App<'_, R, W>, choice: &str) -> Result<Flow> {
    log::debug!("menu choice: {:?}", choice);
    match choice {
        "q" => Ok(Flow::Quit),
        "s" => handle_stop(app),
        "l" => handle_logs(app),
        "r" => handle_restart(app),
        "h" => handle_health(app),
        key => match find_preset(key) {
            Some(preset) => handle_switch(app, preset),
            None => {
                app.console.blank()?;
                app.console
                    .line(style::failure("Invalid choice. Please try again."))?;
                Ok(Flow::from_pause(app.console.pause()?))
            }
        },
    }
}
