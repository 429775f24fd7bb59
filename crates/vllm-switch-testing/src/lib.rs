//! Testing infrastructure for vllm-switch.
//!
//! - `TestWorld`: a scratch project directory with a fake compose CLI
//! - `fakes`: in-process stand-ins for the service controller and health probe
//! - `fixtures`: sample environment template and compose file contents
//! - `assertions`: helpers for checking terminal transcripts

pub mod assertions;
pub mod fakes;
pub mod fixtures;
pub mod world;

pub use fakes::{FakeProbe, FakeServices};
pub use world::TestWorld;
