pub mod health;
pub mod menu;
pub mod services;
pub mod setup;
pub mod switch;

use crate::console::Console;
use crate::context::ExecutionContext;
use vllm_switch_runtime::{HealthProbe, ServiceController};

/// Whether the menu keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Flow {
    /// `Continue` if the user pressed Enter, `Quit` if input ran out.
    pub fn from_pause(resumed: bool) -> Self {
        if resumed { Flow::Continue } else { Flow::Quit }
    }
}

/// Everything a handler needs: where the stack is, how to drive it, and the terminal.
pub struct App<'a, R, W> {
    pub ctx: &'a ExecutionContext,
    pub services: &'a dyn ServiceController,
    pub probe: &'a dyn HealthProbe,
    pub console: Console<R, W>,
}

impl<'a, R, W> App<'a, R, W> {
    pub fn new(
        ctx: &'a ExecutionContext,
        services: &'a dyn ServiceController,
        probe: &'a dyn HealthProbe,
        console: Console<R, W>,
    ) -> Self {
        Self {
            ctx,
            services,
            probe,
            console,
        }
    }
}
