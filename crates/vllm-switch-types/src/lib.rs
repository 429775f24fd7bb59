pub mod preset;
pub mod status;

pub use preset::{ModelPreset, PRESETS, find_preset};
pub use status::{Reachability, ServiceStatus};
