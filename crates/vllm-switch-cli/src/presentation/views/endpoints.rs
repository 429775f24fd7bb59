use crate::presentation::style;
use std::fmt;
use vllm_switch_runtime::Settings;

/// Where to find the stack once it is up.
pub struct EndpointsView<'a> {
    settings: &'a Settings,
}

impl<'a> EndpointsView<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

impl fmt::Display for EndpointsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", style::info("Available interfaces:"))?;
        writeln!(f, "  • vLLM API: {}", self.settings.api_url)?;
        writeln!(f, "  • Open WebUI: {}", self.settings.webui_url)?;
        writeln!(f, "  • Health check: {}", self.settings.health_url())?;
        writeln!(f)?;
        writeln!(
            f,
            "{}",
            style::warning("Note: Services may take 1-2 minutes to become fully ready")
        )
    }
}
