use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file looked up inside the project directory.
pub const PROJECT_CONFIG_FILE: &str = "vllm-switch.toml";

pub const CONFIG_PATH_VAR: &str = "VLLM_SWITCH_CONFIG";
pub const COMPOSE_COMMAND_VAR: &str = "VLLM_SWITCH_COMPOSE";
pub const DOCKER_COMMAND_VAR: &str = "VLLM_SWITCH_DOCKER";

/// Resolve which settings file to load based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. VLLM_SWITCH_CONFIG environment variable (with tilde expansion)
/// 3. `vllm-switch.toml` in the project directory, if present
/// 4. `<config dir>/vllm-switch/config.toml`, if present
///
/// Returns `None` when no file applies and defaults should be used.
pub fn resolve_config_path(explicit_path: Option<&str>, project_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_PATH_VAR) {
        return Some(expand_tilde(&env_path));
    }

    let project_config = project_dir.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        return Some(project_config);
    }

    dirs::config_dir()
        .map(|dir| dir.join("vllm-switch").join("config.toml"))
        .filter(|path| path.exists())
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Compose CLI and any leading arguments, e.g. `["docker", "compose"]`.
    pub compose_command: Vec<String>,
    pub docker_command: String,
    /// Container name filter used for the status line.
    pub server_container: String,
    pub compose_file: PathBuf,
    pub env_file: PathBuf,
    pub env_template: PathBuf,
    pub api_url: String,
    pub webui_url: String,
    pub health_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compose_command: vec!["docker-compose".to_string()],
            docker_command: "docker".to_string(),
            server_container: "vllm-server".to_string(),
            compose_file: PathBuf::from("docker-compose.yml"),
            env_file: PathBuf::from(".env"),
            env_template: PathBuf::from(".env.example"),
            api_url: "http://localhost:8000".to_string(),
            webui_url: "http://localhost:3000".to_string(),
            health_timeout_secs: 5,
        }
    }
}

impl Settings {
    /// Load settings for a project: file resolution, then environment overrides.
    pub fn resolve(explicit_path: Option<&str>, project_dir: &Path) -> Result<Self> {
        let mut settings = match resolve_config_path(explicit_path, project_dir) {
            Some(path) => {
                // Only an explicitly named file can be missing here.
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "settings file {} not found",
                        path.display()
                    )));
                }
                log::debug!("loading settings from {}", path.display());
                Self::load_from(&path)?
            }
            None => Self::default(),
        };

        settings.apply_overrides(
            std::env::var(COMPOSE_COMMAND_VAR).ok(),
            std::env::var(DOCKER_COMMAND_VAR).ok(),
        );
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply command overrides; a compose override is split on whitespace.
    pub fn apply_overrides(&mut self, compose: Option<String>, docker: Option<String>) {
        if let Some(compose) = compose {
            let parts: Vec<String> = compose.split_whitespace().map(str::to_string).collect();
            if !parts.is_empty() {
                self.compose_command = parts;
            }
        }
        if let Some(docker) = docker
            && !docker.trim().is_empty()
        {
            self.docker_command = docker.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.compose_command.iter().all(|part| part.trim().is_empty()) {
            return Err(Error::Config("compose_command must not be empty".to_string()));
        }
        if self.docker_command.trim().is_empty() {
            return Err(Error::Config("docker_command must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn env_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.env_file)
    }

    pub fn template_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.env_template)
    }

    pub fn compose_file_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.compose_file)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_url.trim_end_matches('/'))
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    /// The compose command as a single display string, e.g. `docker compose`.
    pub fn compose_display(&self) -> String {
        self.compose_command.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.compose_command, vec!["docker-compose"]);
        assert_eq!(settings.health_url(), "http://localhost:8000/health");
        assert_eq!(settings.health_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_settings_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("config.toml");

        let settings = Settings {
            compose_command: vec!["docker".to_string(), "compose".to_string()],
            api_url: "http://gpu-box:8000/".to_string(),
            ..Settings::default()
        };
        settings.save_to(&path)?;

        let loaded = Settings::load_from(&path)?;
        assert_eq!(loaded, settings);
        assert_eq!(loaded.health_url(), "http://gpu-box:8000/health");
        assert_eq!(loaded.compose_display(), "docker compose");

        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "server_container = \"my-vllm\"\n")?;

        let loaded = Settings::load_from(&path)?;
        assert_eq!(loaded.server_container, "my-vllm");
        assert_eq!(loaded.env_file, PathBuf::from(".env"));

        Ok(())
    }

    #[test]
    fn test_invalid_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "health_timeout_secs = \"soon\"\n")?;

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Settings::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(loaded, Settings::default());
        Ok(())
    }

    #[test]
    fn test_missing_explicit_settings_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("typo.toml");

        let err = Settings::resolve(missing.to_str(), temp_dir.path()).unwrap_err();
        match err {
            Error::Config(msg) => assert!(msg.contains("typo.toml not found"), "{}", msg),
            other => panic!("expected a config error, got {:?}", other),
        }

        Ok(())
    }

    #[test]
    fn test_explicit_settings_file_is_loaded() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "server_container = \"custom-vllm\"\n")?;

        let settings = Settings::resolve(path.to_str(), temp_dir.path())?;
        assert_eq!(settings.server_container, "custom-vllm");

        Ok(())
    }

    #[test]
    fn test_project_config_is_found() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let project_config = temp_dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&project_config, "")?;

        let explicit = resolve_config_path(Some("/etc/custom.toml"), temp_dir.path());
        assert_eq!(explicit, Some(PathBuf::from("/etc/custom.toml")));

        if std::env::var(CONFIG_PATH_VAR).is_err() {
            let found = resolve_config_path(None, temp_dir.path());
            assert_eq!(found, Some(project_config));
        }

        Ok(())
    }

    #[test]
    fn test_overrides() {
        let mut settings = Settings::default();
        settings.apply_overrides(Some("docker  compose".to_string()), Some(" podman ".to_string()));
        assert_eq!(settings.compose_command, vec!["docker", "compose"]);
        assert_eq!(settings.docker_command, "podman");

        settings.apply_overrides(Some("   ".to_string()), None);
        assert_eq!(settings.compose_command, vec!["docker", "compose"]);
    }

    #[test]
    fn test_validate_rejects_empty_compose_command() {
        let settings = Settings {
            compose_command: Vec::new(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_paths_are_relative_to_project() {
        let settings = Settings::default();
        let project = Path::new("/srv/stack");
        assert_eq!(settings.env_path(project), PathBuf::from("/srv/stack/.env"));
        assert_eq!(
            settings.template_path(project),
            PathBuf::from("/srv/stack/.env.example")
        );
        assert_eq!(
            settings.compose_file_path(project),
            PathBuf::from("/srv/stack/docker-compose.yml")
        );
    }
}
