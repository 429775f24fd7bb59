mod args;
mod commands;
pub mod console;
pub mod context;
pub mod handlers;
pub mod interrupt;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::run;
