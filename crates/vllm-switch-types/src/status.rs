use std::fmt;

/// Whether the inference container is up, as reported by the container runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Running,
    Stopped,
    /// The status query itself could not be run.
    Unknown,
}

impl ServiceStatus {
    /// Interpret the output of a `ps --format {{.Status}}` query.
    pub fn from_status_output(output: &str) -> Self {
        if output.trim().is_empty() {
            ServiceStatus::Stopped
        } else {
            ServiceStatus::Running
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceStatus::Running => "running",
            ServiceStatus::Stopped => "stopped",
            ServiceStatus::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of probing an HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unreachable(String),
}

impl Reachability {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Reachability::Reachable)
    }
}
