//! Service control through the compose CLI.

use crate::config::Settings;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use vllm_switch_types::ServiceStatus;

/// Operations the menu performs against the container stack.
pub trait ServiceController {
    /// `down`
    fn stop_all(&self) -> Result<()>;

    /// `up -d`
    fn start_all(&self) -> Result<()>;

    /// `restart`
    fn restart_all(&self) -> Result<()>;

    /// `logs -f`, blocking until the child exits (normally on Ctrl+C).
    fn tail_logs(&self) -> Result<()>;

    /// `ps`, printed straight to the terminal.
    fn list_containers(&self) -> Result<()>;

    /// Whether the inference container is currently up.
    fn server_status(&self) -> ServiceStatus;

    /// `--version`; fails when the compose CLI is not installed.
    fn version(&self) -> Result<String>;
}

/// `ServiceController` backed by a compose CLI run in the project directory.
pub struct Compose {
    program: String,
    base_args: Vec<String>,
    docker_command: String,
    server_container: String,
    project_dir: PathBuf,
}

impl Compose {
    pub fn new(settings: &Settings, project_dir: &Path) -> Self {
        let mut parts = settings.compose_command.iter().cloned();
        let program = parts.next().unwrap_or_else(|| "docker-compose".to_string());

        Self {
            program,
            base_args: parts.collect(),
            docker_command: settings.docker_command.clone(),
            server_container: settings.server_container.clone(),
            project_dir: project_dir.to_path_buf(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.base_args)
            .args(args)
            .current_dir(&self.project_dir);
        command
    }

    fn describe(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.base_args.iter().map(String::as_str))
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run with inherited stdio and map the exit status.
    fn run(&self, args: &[&str]) -> Result<()> {
        let description = self.describe(args);
        log::debug!("running: {}", description);

        let status = self
            .command(args)
            .status()
            .map_err(|source| Error::Spawn {
                command: description.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            log::debug!("'{}' failed with {}", description, status);
            Err(Error::CommandFailed {
                command: description,
                status,
            })
        }
    }

    /// Run with captured output.
    fn capture(&self, mut command: Command, description: String) -> Result<Output> {
        log::debug!("running: {}", description);
        let output = command
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn {
                command: description.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(output)
        } else {
            Err(Error::CommandFailed {
                command: description,
                status: output.status,
            })
        }
    }
}

impl ServiceController for Compose {
    fn stop_all(&self) -> Result<()> {
        self.run(&["down"])
    }

    fn start_all(&self) -> Result<()> {
        self.run(&["up", "-d"])
    }

    fn restart_all(&self) -> Result<()> {
        self.run(&["restart"])
    }

    fn tail_logs(&self) -> Result<()> {
        match self.run(&["logs", "-f"]) {
            // Ctrl+C ends the tail; that is the normal way out.
            Err(Error::CommandFailed { status, .. }) if was_interrupted(&status) => Ok(()),
            other => other,
        }
    }

    fn list_containers(&self) -> Result<()> {
        self.run(&["ps"])
    }

    fn server_status(&self) -> ServiceStatus {
        let filter = format!("name={}", self.server_container);
        let args = ["ps", "--filter", filter.as_str(), "--format", "{{.Status}}"];
        let mut command = Command::new(&self.docker_command);
        command.args(args).current_dir(&self.project_dir);
        let description = format!("{} {}", self.docker_command, args.join(" "));

        log::debug!("running: {}", description);
        let output = match command.stdin(Stdio::null()).output() {
            Ok(output) => output,
            Err(err) => {
                log::debug!("status query '{}' could not start: {}", description, err);
                return ServiceStatus::Unknown;
            }
        };

        // The exit code is ignored: whatever was printed decides.
        if !output.status.success() {
            log::debug!("'{}' failed with {}", description, output.status);
        }
        ServiceStatus::from_status_output(&String::from_utf8_lossy(&output.stdout))
    }

    fn version(&self) -> Result<String> {
        let output = self.capture(self.command(&["--version"]), self.describe(&["--version"]))?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(unix)]
fn was_interrupted(status: &std::process::ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(libc::SIGINT) || status.code() == Some(130)
}

#[cfg(not(unix))]
fn was_interrupted(status: &std::process::ExitStatus) -> bool {
    // STATUS_CONTROL_C_EXIT
    status.code() == Some(0xC000013A_u32 as i32)
}
