//! TestWorld pattern for declarative integration test setup.
//!
//! Each world is an isolated project directory containing a compose file, an
//! environment template and (on unix) fake `docker-compose`/`docker` scripts
//! that record their arguments instead of touching containers.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vllm_switch_runtime::Settings;
use vllm_switch_runtime::config::PROJECT_CONFIG_FILE;

use crate::fixtures::{COMPOSE_FILE, ENV_TEMPLATE};

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use assert_cmd::Command;
/// use vllm_switch_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let mut cmd = Command::new("vllm-switch");
/// world.configure_command(&mut cmd).write_stdin("q\n");
/// cmd.assert().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    project_dir: PathBuf,
    calls_log: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a project with a compose file, a template and no `.env`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let project_dir = temp_dir.path().join("stack");
        let calls_log = temp_dir.path().join("calls.log");

        std::fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        std::fs::write(project_dir.join("docker-compose.yml"), COMPOSE_FILE)
            .expect("Failed to write compose file");
        std::fs::write(project_dir.join(".env.example"), ENV_TEMPLATE)
            .expect("Failed to write env template");

        let mut world = Self {
            temp_dir,
            project_dir,
            calls_log,
            env_vars: HashMap::new(),
        };
        world.env_vars.insert("NO_COLOR".to_string(), "1".to_string());

        #[cfg(unix)]
        {
            world = world
                .with_compose_script("exit 0")
                .with_docker_script("exit 0");
        }

        world
    }

    /// Get the project directory (holds docker-compose.yml and .env).
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn env_path(&self) -> PathBuf {
        self.project_dir.join(".env")
    }

    /// Write `.env` with the given content.
    pub fn with_env_file(self, content: &str) -> Self {
        std::fs::write(self.env_path(), content).expect("Failed to write .env");
        self
    }

    pub fn without_compose_file(self) -> Self {
        std::fs::remove_file(self.project_dir.join("docker-compose.yml"))
            .expect("Failed to remove compose file");
        self
    }

    pub fn without_template(self) -> Self {
        std::fs::remove_file(self.project_dir.join(".env.example"))
            .expect("Failed to remove env template");
        self
    }

    /// Write a project settings file.
    pub fn with_settings(self, settings: &Settings) -> Self {
        settings
            .save_to(&self.project_dir.join(PROJECT_CONFIG_FILE))
            .expect("Failed to write settings");
        self
    }

    /// Write a per-user settings file under the world's `XDG_CONFIG_HOME`.
    pub fn with_user_settings(self, settings: &Settings) -> Self {
        settings
            .save_to(&self.user_settings_path())
            .expect("Failed to write user settings");
        self
    }

    pub fn user_settings_path(&self) -> PathBuf {
        self.config_home().join("vllm-switch").join("config.toml")
    }

    fn config_home(&self) -> PathBuf {
        self.temp_dir.path().join(".config")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Replace the fake compose CLI; `body` runs after the call is recorded.
    #[cfg(unix)]
    pub fn with_compose_script(self, body: &str) -> Self {
        let path = crate::fixtures::write_fake_cli(
            self.temp_dir.path(),
            "docker-compose",
            &self.calls_log,
            body,
        )
        .expect("Failed to write fake compose CLI");
        self.with_env("VLLM_SWITCH_COMPOSE", path.display().to_string())
    }

    /// Replace the fake docker CLI used for the status line.
    #[cfg(unix)]
    pub fn with_docker_script(self, body: &str) -> Self {
        let path =
            crate::fixtures::write_fake_cli(self.temp_dir.path(), "docker", &self.calls_log, body)
                .expect("Failed to write fake docker CLI");
        self.with_env("VLLM_SWITCH_DOCKER", path.display().to_string())
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("vllm-switch")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--project-dir").arg(&self.project_dir);
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("VLLM_SWITCH_CONFIG");
        cmd.env("XDG_CONFIG_HOME", self.config_home());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Current `.env` content, if the file exists.
    pub fn read_env_file(&self) -> Option<String> {
        std::fs::read_to_string(self.env_path()).ok()
    }

    /// Recorded compose invocations, one `docker-compose <args>` string each.
    pub fn compose_calls(&self) -> Result<Vec<String>> {
        Ok(self
            .recorded_calls()?
            .into_iter()
            .filter(|call| call.starts_with("docker-compose"))
            .collect())
    }

    /// Recorded invocations of both fake CLIs, in order.
    pub fn recorded_calls(&self) -> Result<Vec<String>> {
        if !self.calls_log.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.calls_log)?;
        Ok(content.lines().map(str::to_string).collect())
    }
}
