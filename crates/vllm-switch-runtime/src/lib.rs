pub mod config;
pub mod env_file;
pub mod error;
pub mod health;
pub mod services;

pub use config::Settings;
pub use env_file::SeedOutcome;
pub use error::{Error, Result};
pub use health::{HealthProbe, HttpProbe};
pub use services::{Compose, ServiceController};
