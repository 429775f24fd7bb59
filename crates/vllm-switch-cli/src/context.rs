use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use vllm_switch_runtime::Settings;

/// Where the stack lives and how to talk to it, resolved once at startup.
pub struct ExecutionContext {
    project_dir: PathBuf,
    settings: Settings,
}

impl ExecutionContext {
    pub fn new(project_dir: PathBuf, config_path: Option<&str>) -> Result<Self> {
        let settings = Settings::resolve(config_path, &project_dir)
            .context("failed to load settings")?;
        Ok(Self::with_settings(project_dir, settings))
    }

    pub fn with_settings(project_dir: PathBuf, settings: Settings) -> Self {
        Self {
            project_dir,
            settings,
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn env_path(&self) -> PathBuf {
        self.settings.env_path(&self.project_dir)
    }

    pub fn template_path(&self) -> PathBuf {
        self.settings.template_path(&self.project_dir)
    }

    pub fn compose_file_path(&self) -> PathBuf {
        self.settings.compose_file_path(&self.project_dir)
    }

    /// File name of the environment file, for messages.
    pub fn env_name(&self) -> String {
        self.settings.env_file.display().to_string()
    }

    pub fn template_name(&self) -> String {
        self.settings.env_template.display().to_string()
    }
}
