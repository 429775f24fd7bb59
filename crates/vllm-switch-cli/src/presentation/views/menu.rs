use crate::presentation::style;
use std::fmt;
use vllm_switch_types::{ModelPreset, ServiceStatus};

const TITLE: &str = "vLLM Stack - Model Switcher";
const BANNER_WIDTH: usize = 43;

const ACTIONS: &[(&str, &str)] = &[
    ("s", "Stop all services"),
    ("l", "View logs"),
    ("r", "Restart services"),
    ("h", "Check health"),
    ("q", "Quit"),
];

/// One full redraw: banner, status, presets and actions.
pub struct MenuView<'a> {
    current_model: Option<&'a str>,
    status: ServiceStatus,
    presets: &'a [ModelPreset],
}

impl<'a> MenuView<'a> {
    pub fn new(
        current_model: Option<&'a str>,
        status: ServiceStatus,
        presets: &'a [ModelPreset],
    ) -> Self {
        Self {
            current_model,
            status,
            presets,
        }
    }

    fn write_banner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "═".repeat(BANNER_WIDTH);
        writeln!(f)?;
        writeln!(f, "{}", style::header(format!("╔{}╗", rule)))?;
        writeln!(
            f,
            "{}",
            style::header(format!("║{:^width$}║", TITLE, width = BANNER_WIDTH))
        )?;
        writeln!(f, "{}", style::header(format!("╚{}╝", rule)))?;
        writeln!(f)
    }

    fn write_status(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", style::info("Current Status:"))?;
        match self.current_model {
            Some(model) => writeln!(f, "  Active Model: {}", style::success(model))?,
            None => writeln!(f, "  Active Model: {}", style::warning("Not configured"))?,
        }
        let status = match self.status {
            ServiceStatus::Running => style::success(self.status),
            ServiceStatus::Stopped => style::warning(self.status),
            ServiceStatus::Unknown => style::failure(self.status),
        };
        writeln!(f, "  vLLM Service: {}", status)?;
        writeln!(f)
    }

    fn write_presets(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", style::info("Available Models:"))?;
        writeln!(f)?;
        for preset in self.presets {
            let marker = if self.current_model == Some(preset.model_id) {
                format!(" {}", style::success("← CURRENT"))
            } else {
                String::new()
            };
            writeln!(
                f,
                "  {} {}{}",
                style::strong(format!("[{}]", preset.key)),
                preset.name,
                marker
            )?;
            writeln!(f, "      Model ID: {}", preset.model_id)?;
            writeln!(f, "      Description: {}", preset.description)?;
            writeln!(f, "      Max Length: {}", preset.max_model_len)?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_actions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", style::info("Actions:"))?;
        for (key, label) in ACTIONS {
            writeln!(f, "  {} {}", style::strong(format!("[{}]", key)), label)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for MenuView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_banner(f)?;
        self.write_status(f)?;
        self.write_presets(f)?;
        self.write_actions(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vllm_switch_types::PRESETS;

    #[test]
    fn test_marks_only_the_current_preset() {
        let rendered = MenuView::new(
            Some("mistralai/Mistral-7B-Instruct-v0.2"),
            ServiceStatus::Running,
            PRESETS,
        )
        .to_string();

        assert!(rendered.contains("  [3] Mistral-7B-Instruct-v0.2 ← CURRENT\n"));
        assert!(rendered.contains("  [2] Mistral-7B-Instruct-v0.3\n"));
        assert_eq!(rendered.matches("← CURRENT").count(), 1);
        assert!(rendered.contains("  Active Model: mistralai/Mistral-7B-Instruct-v0.2\n"));
        assert!(rendered.contains("  vLLM Service: running\n"));
    }

    #[test]
    fn test_unconfigured_model() {
        let rendered = MenuView::new(None, ServiceStatus::Unknown, PRESETS).to_string();

        assert!(rendered.contains("  Active Model: Not configured\n"));
        assert!(rendered.contains("  vLLM Service: unknown\n"));
        assert!(!rendered.contains("← CURRENT"));
    }

    #[test]
    fn test_custom_model_is_shown_without_marker() {
        let rendered =
            MenuView::new(Some("my-org/fine-tune"), ServiceStatus::Stopped, PRESETS).to_string();

        assert!(rendered.contains("  Active Model: my-org/fine-tune\n"));
        assert!(!rendered.contains("← CURRENT"));
    }

    #[test]
    fn test_lists_presets_then_actions() {
        let rendered = MenuView::new(None, ServiceStatus::Stopped, &PRESETS[..1]).to_string();

        assert!(rendered.contains(
            "  [1] Qwen2.5-7B-Instruct\n\
             \x20     Model ID: Qwen/Qwen2.5-7B-Instruct\n\
             \x20     Description: Original default model - Qwen 2.5 7B\n\
             \x20     Max Length: 8192\n"
        ));
        assert!(rendered.ends_with("  [h] Check health\n  [q] Quit\n\n"));
        let banner_line = rendered.lines().nth(2).unwrap();
        assert_eq!(banner_line.chars().count(), BANNER_WIDTH + 2);
    }
}
