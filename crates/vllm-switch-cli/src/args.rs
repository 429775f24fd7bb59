use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Switch the model served by a docker-compose vLLM stack.
///
/// Everything happens in the interactive menu; the flags only say where the
/// stack lives and how to reach it.
#[derive(Parser)]
#[command(name = "vllm-switch")]
#[command(about = "Interactive model switcher for a docker-compose vLLM + Open WebUI stack", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing docker-compose.yml, .env and .env.example
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Settings file (defaults to <project-dir>/vllm-switch.toml when present)
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
