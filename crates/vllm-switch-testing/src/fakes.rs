//! In-process fakes for the seams the menu talks through.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::io;
use vllm_switch_runtime::{Error, HealthProbe, Result, ServiceController};
use vllm_switch_types::{Reachability, ServiceStatus};

/// Records every controller call and fails the ones it is told to.
///
/// Call names match the compose subcommands: `down`, `up`, `restart`,
/// `logs`, `ps`, `status`, `version`.
pub struct FakeServices {
    calls: RefCell<Vec<&'static str>>,
    failing: HashSet<&'static str>,
    status: Cell<ServiceStatus>,
}

impl Default for FakeServices {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeServices {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failing: HashSet::new(),
            status: Cell::new(ServiceStatus::Stopped),
        }
    }

    /// Make the named operation fail.
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn with_status(self, status: ServiceStatus) -> Self {
        self.status.set(status);
        self
    }

    /// Calls made so far, excluding status queries.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .borrow()
            .iter()
            .copied()
            .filter(|call| *call != "status")
            .collect()
    }

    pub fn status_queries(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| **call == "status")
            .count()
    }

    fn record(&self, operation: &'static str) -> Result<()> {
        self.calls.borrow_mut().push(operation);
        if self.failing.contains(operation) {
            return Err(Error::Spawn {
                command: format!("fake-compose {}", operation),
                source: io::Error::other("simulated failure"),
            });
        }
        Ok(())
    }
}

impl ServiceController for FakeServices {
    fn stop_all(&self) -> Result<()> {
        self.record("down")?;
        self.status.set(ServiceStatus::Stopped);
        Ok(())
    }

    fn start_all(&self) -> Result<()> {
        self.record("up")?;
        self.status.set(ServiceStatus::Running);
        Ok(())
    }

    fn restart_all(&self) -> Result<()> {
        self.record("restart")
    }

    fn tail_logs(&self) -> Result<()> {
        self.record("logs")
    }

    fn list_containers(&self) -> Result<()> {
        self.record("ps")
    }

    fn server_status(&self) -> ServiceStatus {
        self.calls.borrow_mut().push("status");
        self.status.get()
    }

    fn version(&self) -> Result<String> {
        self.record("version")?;
        Ok("fake-compose version 0.0.0".to_string())
    }
}

/// Answers probes from a fixed table; unknown URLs are unreachable.
#[derive(Default)]
pub struct FakeProbe {
    reachable: HashMap<String, Reachability>,
    probed: RefCell<Vec<String>>,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reachable(mut self, url: impl Into<String>) -> Self {
        self.reachable.insert(url.into(), Reachability::Reachable);
        self
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.borrow().clone()
    }
}

impl HealthProbe for FakeProbe {
    fn probe(&self, url: &str) -> Reachability {
        self.probed.borrow_mut().push(url.to_string());
        self.reachable
            .get(url)
            .cloned()
            .unwrap_or_else(|| Reachability::Unreachable("connection refused".to_string()))
    }
}
