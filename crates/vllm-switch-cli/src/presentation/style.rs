//! Terminal styling.
//!
//! Styling is off until `init` turns it on, so anything rendered before
//! startup decides (or in tests) is plain text.

use is_terminal::IsTerminal;
use once_cell::sync::OnceCell;
use owo_colors::OwoColorize;
use std::fmt::Display;

static ENABLED: OnceCell<bool> = OnceCell::new();

/// Colors only for an interactive stdout, and never when `NO_COLOR` is set.
pub fn detect() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Fix the styling decision for the rest of the process.
pub fn init(enabled: bool) {
    let _ = ENABLED.set(enabled);
}

fn enabled() -> bool {
    ENABLED.get().copied().unwrap_or(false)
}

pub fn header(text: impl Display) -> String {
    if enabled() {
        text.magenta().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn info(text: impl Display) -> String {
    if enabled() {
        text.blue().to_string()
    } else {
        text.to_string()
    }
}

pub fn accent(text: impl Display) -> String {
    if enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

pub fn success(text: impl Display) -> String {
    if enabled() {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

pub fn warning(text: impl Display) -> String {
    if enabled() {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

pub fn failure(text: impl Display) -> String {
    if enabled() {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

pub fn strong(text: impl Display) -> String {
    if enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
