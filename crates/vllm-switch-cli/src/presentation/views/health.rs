use crate::presentation::style;
use std::fmt;
use vllm_switch_types::Reachability;

/// Result of probing the API and the web UI.
pub struct HealthReportView<'a> {
    pub api: &'a Reachability,
    pub webui: &'a Reachability,
}

impl fmt::Display for HealthReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.api {
            Reachability::Reachable => writeln!(f, "{}", style::success("✓ vLLM API: Healthy"))?,
            Reachability::Unreachable(reason) => {
                writeln!(f, "{}", style::failure("✗ vLLM API: Not responding"))?;
                writeln!(f, "  Error: {}", reason)?;
            }
        }

        // The web UI comes up well after the API, so a miss is only a warning.
        match self.webui {
            Reachability::Reachable => {
                writeln!(f, "{}", style::success("✓ Open WebUI: Accessible"))
            }
            Reachability::Unreachable(_) => writeln!(
                f,
                "{}",
                style::warning("⚠ Open WebUI: Not accessible (may still be starting)")
            ),
        }
    }
}
