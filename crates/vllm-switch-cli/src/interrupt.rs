//! Ctrl+C handling.
//!
//! While a log tail runs the signal belongs to the child: it exits and the
//! menu carries on. Anywhere else Ctrl+C ends the program with status 0.

use crate::presentation::style;
use anyhow::Result;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// The handler thread can run after the child has already exited on the same
/// signal, so interrupts this soon after a tail ends still belong to it.
const TAIL_GRACE: Duration = Duration::from_millis(750);

static TAIL: Mutex<TailState> = Mutex::new(TailState::idle());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TailState {
    active: bool,
    ended_at: Option<Instant>,
}

impl TailState {
    const fn idle() -> Self {
        Self {
            active: false,
            ended_at: None,
        }
    }

    fn owns_interrupt(&self, now: Instant) -> bool {
        self.active
            || self
                .ended_at
                .is_some_and(|ended| now.saturating_duration_since(ended) < TAIL_GRACE)
    }
}

fn tail_state() -> MutexGuard<'static, TailState> {
    TAIL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn install() -> Result<()> {
    ctrlc::set_handler(|| {
        if tail_state().owns_interrupt(Instant::now()) {
            return;
        }
        println!("\n\n{}\n", style::accent("Interrupted by user. Goodbye!"));
        std::process::exit(0);
    })?;
    Ok(())
}

/// Marks a log tail as in progress until dropped.
pub struct LogTailGuard {
    _private: (),
}

impl LogTailGuard {
    pub fn enter() -> Self {
        let mut state = tail_state();
        state.active = true;
        state.ended_at = None;
        Self { _private: () }
    }
}

impl Drop for LogTailGuard {
    fn drop(&mut self) {
        let mut state = tail_state();
        state.active = false;
        state.ended_at = Some(Instant::now());
    }
}
